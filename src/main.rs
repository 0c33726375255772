//! # MeowMatch
//!
//! A cat adoption service: visitors browse and filter adoptable cats, keep a
//! per-device list of favorites and submit adoption applications, while shelter
//! staff manage the catalog.
//!
//! ## Architecture
//!
//! The service is built using Actix-web and provides:
//! - HTTP endpoints under `/api/v1`
//! - In-memory, file and Redis storage backends
//! - An in-memory or remote auth provider
//!
//! ## Usage
//!
//! ```bash
//! cargo run
//! ```

use std::sync::Arc;

use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{
    middleware::{self, Logger},
    web, App, HttpServer,
};
use color_eyre::{eyre::WrapErr, Result};
use dotenvy::dotenv;
use log::info;

use meowmatch::{
    api,
    bootstrap::{initialize_app_state, process_config_file},
    config::{self, Config, DeviceRateLimit, ServerConfig},
    logging::setup_logging,
    metrics::middleware::MetricsMiddleware,
    utils::log_service_info,
};

fn load_config_file(config_file_path: &str) -> Result<Config> {
    config::load_config(config_file_path).wrap_err("Failed to load config file")
}

#[actix_web::main]
async fn main() -> Result<()> {
    // Initialize error reporting with eyre
    color_eyre::install().wrap_err("Failed to initialize error reporting")?;

    dotenv().ok();
    setup_logging()?;

    let config = Arc::new(ServerConfig::from_env());
    log_service_info(&config);
    let config_file = load_config_file(&config.config_file_path)?;

    let app_state = initialize_app_state(config.clone(), &config_file).await?;

    info!("Processing config file");
    process_config_file(config_file, config.clone(), &app_state).await?;

    let rate_limit_config = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit_requests_per_second)
        .key_extractor(DeviceRateLimit)
        .burst_size(config.rate_limit_burst_size)
        .finish()
        .ok_or_else(|| eyre::eyre!("Invalid rate limit configuration"))?;

    info!("Starting server on {}:{}", config.host, config.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Governor::new(&rate_limit_config))
            .wrap(MetricsMiddleware)
            .wrap(middleware::NormalizePath::trim())
            .wrap(middleware::DefaultHeaders::new())
            .wrap(Logger::default())
            .app_data(app_state.clone())
            .service(web::scope("/api/v1").configure(api::routes::configure_routes))
    })
    .bind((config.host.as_str(), config.port))
    .wrap_err_with(|| format!("Failed to bind server to {}:{}", config.host, config.port))?
    .shutdown_timeout(5)
    .run()
    .await
    .wrap_err("Server runtime error")
}
