//! Startup banner.
use log::info;
use std::env;

use crate::config::ServerConfig;

/// Logs the service version and the storage/auth backends in use.
pub fn log_service_info(config: &ServerConfig) {
    info!(
        "=== {} v{} starting ===",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
    info!("Platform: {} ({})", env::consts::OS, env::consts::ARCH);

    if let Ok(cwd) = env::current_dir() {
        info!("Working directory: {}", cwd.display());
    }

    info!("Listening on {}:{}", config.host, config.port);
    info!("Cat storage: {}", config.repository_storage_type);
    info!("Favorites storage: {}", config.favorites_storage_type);
    info!("Auth provider: {}", config.auth_provider_type);
    info!(
        "Started at {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
    );
}
