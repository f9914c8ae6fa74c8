mod config;
mod error;
mod inference;
mod routes;
mod upload;

use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use config::AppConfig;
use inference::{InferencePipeline, Scorer, TorchScorer};
use routes::configure_routes;
use std::env;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    if let Ok(current_dir) = env::current_dir() {
        log::info!("Current working directory: {}", current_dir.display());
    } else {
        log::error!("Failed to get the current working directory.");
    }

    let config = AppConfig::load().map_err(|e| {
        log::error!("Failed to load configuration: {}", e);
        std::io::Error::other(format!("Configuration failed: {}", e))
    })?;

    // The model is loaded exactly once; every worker shares this instance.
    let scorer: Arc<dyn Scorer> = match TorchScorer::load(&config.model.path) {
        Ok(scorer) => Arc::new(scorer),
        Err(e) => {
            log::error!("Failed to load model at startup: {}", e);
            return Err(std::io::Error::other(format!("Model loading failed: {}", e)));
        }
    };

    let pipeline = web::Data::new(InferencePipeline::new(scorer));
    let upload = web::Data::new(config.upload.clone());
    let frontend_dir = config.frontend.dist_dir.to_string_lossy().into_owned();
    let bind_address = config.server.bind_address();

    log::info!("Serving frontend from {}", frontend_dir);
    log::info!("Starting server on {}", bind_address);

    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(pipeline.clone())
            .app_data(upload.clone())
            .configure(|cfg| configure_routes(cfg, frontend_dir.clone()))
    });

    if let Some(workers) = config.server.workers {
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await
}
