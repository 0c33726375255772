//! Key-Value Store Module
//!
//! A small string key-value abstraction used for per-device state such as the
//! favorites list. Values are opaque strings; callers own their encoding.
//!
//! - [`InMemoryKeyValueStore`]: process-local, lost on restart
//! - [`FileKeyValueStore`]: one file per key under a data directory
//! - [`RedisKeyValueStore`]: `{prefix}:kv:{key}` string values
//!
mod key_value_file;
mod key_value_in_memory;
mod key_value_redis;

pub use key_value_file::*;
pub use key_value_in_memory::*;
pub use key_value_redis::*;

use crate::models::RepositoryError;
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use redis::aio::ConnectionManager;
use std::{path::PathBuf, sync::Arc};

#[cfg_attr(test, automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> Result<(), RepositoryError>;

    /// Removes `key`. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), RepositoryError>;
}

/// Enum wrapper for different key-value store implementations
#[derive(Debug, Clone)]
pub enum KeyValueStorage {
    InMemory(InMemoryKeyValueStore),
    File(FileKeyValueStore),
    Redis(RedisKeyValueStore),
}

impl KeyValueStorage {
    pub fn new_in_memory() -> Self {
        Self::InMemory(InMemoryKeyValueStore::new())
    }

    pub fn new_file(data_dir: impl Into<PathBuf>) -> Self {
        Self::File(FileKeyValueStore::new(data_dir))
    }

    pub fn new_redis(
        connection_manager: Arc<ConnectionManager>,
        key_prefix: String,
    ) -> Result<Self, RepositoryError> {
        Ok(Self::Redis(RedisKeyValueStore::new(
            connection_manager,
            key_prefix,
        )?))
    }
}

#[async_trait]
impl KeyValueStore for KeyValueStorage {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        match self {
            KeyValueStorage::InMemory(store) => store.get(key).await,
            KeyValueStorage::File(store) => store.get(key).await,
            KeyValueStorage::Redis(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), RepositoryError> {
        match self {
            KeyValueStorage::InMemory(store) => store.set(key, value).await,
            KeyValueStorage::File(store) => store.set(key, value).await,
            KeyValueStorage::Redis(store) => store.set(key, value).await,
        }
    }

    async fn delete(&self, key: &str) -> Result<(), RepositoryError> {
        match self {
            KeyValueStorage::InMemory(store) => store.delete(key).await,
            KeyValueStorage::File(store) => store.delete(key).await,
            KeyValueStorage::Redis(store) => store.delete(key).await,
        }
    }
}
