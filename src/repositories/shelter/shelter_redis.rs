//! Redis-backed shelter storage. Shelters are kept as JSON under
//! `{prefix}:shelter:{id}`; `{prefix}:shelter_list` is a list in insertion order.

use crate::models::{RepositoryError, Shelter};
use crate::repositories::redis_base::{fetch_batch, RedisRepository};
use crate::repositories::{sort_earliest_first, ShelterRepository};
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::fmt;
use std::sync::Arc;

const SHELTER_PREFIX: &str = "shelter";
const SHELTER_LIST_KEY: &str = "shelter_list";

#[derive(Clone)]
pub struct RedisShelterRepository {
    pub client: Arc<ConnectionManager>,
    pub key_prefix: String,
}

impl RedisRepository for RedisShelterRepository {}

impl RedisShelterRepository {
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

    fn shelter_key(&self, id: &str) -> String {
        format!("{}:{}:{}", self.key_prefix, SHELTER_PREFIX, id)
    }

    fn shelter_list_key(&self) -> String {
        format!("{}:{}", self.key_prefix, SHELTER_LIST_KEY)
    }
}

impl fmt::Debug for RedisShelterRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisShelterRepository")
            .field("client", &"<ConnectionManager>")
            .field("key_prefix", &self.key_prefix)
            .finish()
    }
}

#[async_trait]
impl ShelterRepository for RedisShelterRepository {
    async fn create(&self, shelter: Shelter) -> Result<Shelter, RepositoryError> {
        let key = self.shelter_key(&shelter.id);
        let mut conn = self.client.as_ref().clone();

        let exists: bool = conn
            .exists(&key)
            .await
            .map_err(|e| self.map_redis_error(e, "create_shelter_check"))?;
        if exists {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Shelter with ID '{}' already exists",
                shelter.id
            )));
        }

        let value = self.serialize_entity(&shelter, |s| &s.id, "shelter")?;

        let mut pipe = redis::pipe();
        pipe.atomic();
        pipe.set(&key, &value);
        pipe.rpush(self.shelter_list_key(), &shelter.id);

        pipe.exec_async(&mut conn)
            .await
            .map_err(|e| self.map_redis_error(e, "create_shelter"))?;

        Ok(shelter)
    }

    async fn list_all(&self) -> Result<Vec<Shelter>, RepositoryError> {
        let mut conn = self.client.as_ref().clone();
        let ids: Vec<String> = conn
            .lrange(self.shelter_list_key(), 0, -1)
            .await
            .map_err(|e| self.map_redis_error(e, "list_shelter_ids"))?;

        let keys = ids.iter().map(|id| self.shelter_key(id)).collect();
        let mut shelters = fetch_batch::<Shelter, _>(self, &mut conn, &ids, keys, "shelter")
            .await?
            .results;
        sort_earliest_first(&mut shelters);
        Ok(shelters)
    }

    async fn has_entries(&self) -> Result<bool, RepositoryError> {
        let mut conn = self.client.as_ref().clone();
        let len: u64 = conn
            .llen(self.shelter_list_key())
            .await
            .map_err(|e| self.map_redis_error(e, "count_shelters"))?;
        Ok(len > 0)
    }
}
