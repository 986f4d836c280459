use actix_web::{web, HttpResponse, Result};
use rivet_core::{ApiSuccess, HealthStatus};

use crate::models::AppState;

pub async fn health(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiSuccess::new(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        components: state.catalogue.len(),
    })))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
