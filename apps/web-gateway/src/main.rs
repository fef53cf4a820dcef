//! # Blog Web Gateway
//!
//! Serves HTML pages and forwards form submissions to the posts API.

use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use blog_infra::telemetry::{TelemetryConfig, init_telemetry};

mod client;
mod config;
mod handlers;
mod state;
mod views;

use config::GatewayConfig;
use state::GatewayState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env(env!("CARGO_PKG_NAME")));

    let config = GatewayConfig::from_env();

    tracing::info!("Starting Blog Web Gateway on {}:{}", config.host, config.port);

    let state = GatewayState::new(&config).map_err(|e| std::io::Error::other(e.to_string()))?;

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
