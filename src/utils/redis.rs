use std::{sync::Arc, time::Duration};

use color_eyre::Result;
use log::info;
use redis::aio::ConnectionManager;
use tokio::time::timeout;

use crate::config::ServerConfig;

/// Opens the shared Redis connection manager used by every Redis-backed store.
///
/// Fails when the URL is invalid or the server does not answer within
/// `redis_connection_timeout_ms`.
pub async fn initialize_redis_connection(config: &ServerConfig) -> Result<Arc<ConnectionManager>> {
    let client = redis::Client::open(config.redis_url.as_str())?;
    let connection_manager = timeout(
        Duration::from_millis(config.redis_connection_timeout_ms),
        ConnectionManager::new(client),
    )
    .await
    .map_err(|_| {
        eyre::eyre!(
            "Redis connection timeout after {}ms",
            config.redis_connection_timeout_ms
        )
    })??;

    info!(
        "Connected to Redis, using key prefix '{}'",
        config.redis_key_prefix
    );
    Ok(Arc::new(connection_manager))
}
