//! Helpers shared by the Redis repositories: JSON (de)serialization of stored
//! values with entity context in errors, batch loading, and the mapping of Redis
//! failures onto [`RepositoryError`].

use crate::models::RepositoryError;
use crate::repositories::BatchRetrievalResult;
use log::{debug, error, warn};
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, RedisError};
use serde::{Deserialize, Serialize};

/// Base trait for Redis repositories providing common functionality
pub trait RedisRepository {
    fn serialize_entity<T, F>(
        &self,
        entity: &T,
        id_extractor: F,
        entity_type: &str,
    ) -> Result<String, RepositoryError>
    where
        T: Serialize,
        F: Fn(&T) -> &str,
    {
        serde_json::to_string(entity).map_err(|e| {
            let id = id_extractor(entity);
            error!("Serialization failed for {} {}: {}", entity_type, id, e);
            RepositoryError::InvalidData(format!(
                "Failed to serialize {} {}: {}",
                entity_type, id, e
            ))
        })
    }

    fn deserialize_entity<T>(
        &self,
        json: &str,
        entity_id: &str,
        entity_type: &str,
    ) -> Result<T, RepositoryError>
    where
        T: for<'de> Deserialize<'de>,
    {
        serde_json::from_str(json).map_err(|e| {
            error!(
                "Deserialization failed for {} {}: {}",
                entity_type, entity_id, e
            );
            RepositoryError::InvalidData(format!(
                "Failed to deserialize {} {}: {} (JSON length: {})",
                entity_type,
                entity_id,
                e,
                json.len()
            ))
        })
    }

    /// Convert Redis errors to appropriate RepositoryError types
    fn map_redis_error(&self, error: RedisError, context: &str) -> RepositoryError {
        warn!("Redis operation failed in context '{}': {}", context, error);

        match error.kind() {
            redis::ErrorKind::TypeError => RepositoryError::InvalidData(format!(
                "Redis data type error in operation '{}': {}",
                context, error
            )),
            redis::ErrorKind::AuthenticationFailed => {
                RepositoryError::InvalidData("Redis authentication failed".to_string())
            }
            redis::ErrorKind::ReadOnly => RepositoryError::InvalidData(format!(
                "Redis is read-only in operation '{}': {}",
                context, error
            )),
            redis::ErrorKind::ExecAbortError => RepositoryError::InvalidData(format!(
                "Redis transaction aborted in operation '{}': {}",
                context, error
            )),
            redis::ErrorKind::IoError => RepositoryError::ConnectionError(format!(
                "Redis connection failed in operation '{}': {}",
                context, error
            )),
            _ => RepositoryError::Other(format!("Redis operation '{}' failed: {}", context, error)),
        }
    }
}

/// Loads the values stored under `keys` with one MGET.
///
/// Missing keys are skipped; values that fail to decode are reported in
/// `failed_ids` instead of failing the whole batch.
pub async fn fetch_batch<T, R>(
    repo: &R,
    conn: &mut ConnectionManager,
    ids: &[String],
    keys: Vec<String>,
    entity_type: &str,
) -> Result<BatchRetrievalResult<T>, RepositoryError>
where
    T: for<'de> Deserialize<'de>,
    R: RedisRepository + ?Sized,
{
    if ids.is_empty() {
        return Ok(BatchRetrievalResult {
            results: vec![],
            failed_ids: vec![],
        });
    }

    debug!("Batch fetching {} {} entries", keys.len(), entity_type);

    let values: Vec<Option<String>> = conn
        .mget(&keys)
        .await
        .map_err(|e| repo.map_redis_error(e, &format!("batch_fetch_{}", entity_type)))?;

    let mut results = Vec::with_capacity(values.len());
    let mut failed_ids = Vec::new();
    for (id, value) in ids.iter().zip(values) {
        match value {
            Some(json) => match repo.deserialize_entity::<T>(&json, id, entity_type) {
                Ok(entity) => results.push(entity),
                Err(_) => failed_ids.push(id.clone()),
            },
            None => warn!("{} {} listed but not stored", entity_type, id),
        }
    }

    if !failed_ids.is_empty() {
        warn!(
            "Failed to deserialize {} out of {} {} entries: {:?}",
            failed_ids.len(),
            ids.len(),
            entity_type,
            failed_ids
        );
    }

    Ok(BatchRetrievalResult {
        results,
        failed_ids,
    })
}
