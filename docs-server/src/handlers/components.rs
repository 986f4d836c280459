use actix_web::{web, HttpResponse, Result};
use rivet_core::definition::ComponentSummary;
use rivet_core::{ApiError, ApiSuccess};

use crate::models::AppState;

/// Summaries of every documented component, in catalogue order.
pub async fn list_components(state: web::Data<AppState>) -> Result<HttpResponse> {
    let summaries: Vec<ComponentSummary> = state.catalogue.iter().map(|d| d.summary()).collect();
    Ok(HttpResponse::Ok().json(ApiSuccess::new(summaries)))
}

pub async fn get_component(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    let key = path.into_inner();

    match state.find(&key) {
        Some(definition) => Ok(HttpResponse::Ok().json(ApiSuccess::new(definition))),
        None => {
            log::warn!("Unknown component requested: {}", key);
            Ok(HttpResponse::NotFound().json(ApiError::new(
                "not_found",
                format!("Component '{}' not found", key),
            )))
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/components")
            .route("", web::get().to(list_components))
            .route("/{key}", web::get().to(get_component)),
    );
}
