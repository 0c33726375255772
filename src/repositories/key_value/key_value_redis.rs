use crate::models::RepositoryError;
use crate::repositories::redis_base::RedisRepository;
use crate::repositories::KeyValueStore;
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::fmt;
use std::sync::Arc;

const KV_PREFIX: &str = "kv";

#[derive(Clone)]
pub struct RedisKeyValueStore {
    pub client: Arc<ConnectionManager>,
    pub key_prefix: String,
}

impl RedisRepository for RedisKeyValueStore {}

impl RedisKeyValueStore {
    pub fn new(
        connection_manager: Arc<ConnectionManager>,
        key_prefix: String,
    ) -> Result<Self, RepositoryError> {
        if key_prefix.is_empty() {
            return Err(RepositoryError::InvalidData(
                "Redis key prefix cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            client: connection_manager,
            key_prefix,
        })
    }

    fn storage_key(&self, key: &str) -> String {
        format!("{}:{}:{}", self.key_prefix, KV_PREFIX, key)
    }
}

impl fmt::Debug for RedisKeyValueStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisKeyValueStore")
            .field("client", &"<ConnectionManager>")
            .field("key_prefix", &self.key_prefix)
            .finish()
    }
}

#[async_trait]
impl KeyValueStore for RedisKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        let mut conn = self.client.as_ref().clone();
        conn.get(self.storage_key(key))
            .await
            .map_err(|e| self.map_redis_error(e, "kv_get"))
    }

    async fn set(&self, key: &str, value: String) -> Result<(), RepositoryError> {
        let mut conn = self.client.as_ref().clone();
        conn.set(self.storage_key(key), value)
            .await
            .map_err(|e| self.map_redis_error(e, "kv_set"))
    }

    async fn delete(&self, key: &str) -> Result<(), RepositoryError> {
        let mut conn = self.client.as_ref().clone();
        conn.del(self.storage_key(key))
            .await
            .map_err(|e| self.map_redis_error(e, "kv_delete"))
    }
}
