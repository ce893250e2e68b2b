//! # UYD API Server
//!
//! The main entry point for the Actix-web HTTP server.

use std::sync::Arc;

use actix_multipart::form::MultipartFormConfig;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;

use config::AppConfig;
use state::AppState;
use uyd_infra::auth::ApiKeyVerifier;
use uyd_infra::database;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    init_tracing();

    // Load configuration
    let config = AppConfig::from_env();

    let Some(db_config) = config.database else {
        tracing::error!("DATABASE_URL is not set; refusing to start");
        return Err(std::io::Error::other("DATABASE_URL is not set"));
    };

    tracing::info!("Starting UYD API Server on {}:{}", config.host, config.port);

    let db = database::connect(&db_config)
        .await
        .map_err(std::io::Error::other)?;

    // Build application state
    let state = AppState::new(db, &config.upload_dir);
    let verifier = Arc::new(ApiKeyVerifier::new(config.api_key));

    // The image store enforces the 10 MiB ceiling itself; the multipart
    // limits only need to be high enough for that check to be reachable.
    let multipart_config = || {
        MultipartFormConfig::default()
            .total_limit(16 * 1024 * 1024)
            .memory_limit(16 * 1024 * 1024)
    };

    // Start HTTP server
    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(verifier.clone()))
            .app_data(multipart_config())
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}

fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,uyd_infra=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}
