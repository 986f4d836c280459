use actix_cors::Cors;
use actix_files::{Files, NamedFile};
use actix_web::{middleware::Logger, web, App, HttpServer};

mod config;
mod handlers;
mod models;

use config::Config;
use models::AppState;

async fn index(state: web::Data<AppState>) -> actix_web::Result<NamedFile> {
    let static_path = state.config.static_files_path.as_deref().unwrap_or("./static");
    Ok(NamedFile::open(format!("{}/index.html", static_path))?)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    log::info!("Starting docs server at {}:{}", config.host, config.port);

    if let Some(ref path) = config.static_files_path {
        log::info!("Serving demo app from: {}", path);
    }

    let app_state = web::Data::new(AppState::new(config.clone()));
    log::info!("Catalogue holds {} components", app_state.catalogue.len());

    let static_files_path = config.static_files_path.clone();
    let allowed_origins = config.cors_origins.clone();

    HttpServer::new(move || {
        let allowed_origins = allowed_origins.clone();
        let cors = Cors::default()
            .allowed_origin_fn(move |origin, _req_head| {
                let origin_str = origin.to_str().unwrap_or("");
                allowed_origins
                    .iter()
                    .any(|allowed| origin_str.starts_with(allowed))
            })
            .allowed_methods(vec!["GET", "OPTIONS"])
            .allowed_headers(vec!["Content-Type"])
            .max_age(3600);

        let mut app = App::new()
            .app_data(app_state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(handlers::configure_routes);

        if let Some(ref path) = static_files_path {
            app = app
                .service(Files::new("/pkg", format!("{}/pkg", path)))
                .service(Files::new("/assets", format!("{}/assets", path)).show_files_listing())
                .default_service(web::route().to(index));
        }

        app
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
