use actix_web::web;

pub mod components;
pub mod health;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .configure(components::configure)
            .configure(health::configure),
    );
}
