//! Redis-backed implementation of the cat repository.
//!
//! Each cat is stored as JSON under `{prefix}:cat:{id}`; the set `{prefix}:cat_list`
//! holds every id so listings need one SMEMBERS plus one MGET.

use crate::models::{Cat, RepositoryError};
use crate::repositories::redis_base::{fetch_batch, RedisRepository};
use crate::repositories::{sort_most_recent_first, CatRepository, Repository};
use async_trait::async_trait;
use log::debug;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::fmt;
use std::sync::Arc;

const CAT_PREFIX: &str = "cat";
const CAT_LIST_KEY: &str = "cat_list";

#[derive(Clone)]
pub struct RedisCatRepository {
    pub client: Arc<ConnectionManager>,
    pub key_prefix: String,
}

impl RedisRepository for RedisCatRepository {}

impl RedisCatRepository {
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

    fn cat_key(&self, cat_id: &str) -> String {
        format!("{}:{}:{}", self.key_prefix, CAT_PREFIX, cat_id)
    }

    fn cat_list_key(&self) -> String {
        format!("{}:{}", self.key_prefix, CAT_LIST_KEY)
    }

    async fn load_all(&self) -> Result<Vec<Cat>, RepositoryError> {
        let mut conn = self.client.as_ref().clone();

        let ids: Vec<String> = conn
            .smembers(self.cat_list_key())
            .await
            .map_err(|e| self.map_redis_error(e, "list_cat_ids"))?;

        debug!("Found {} cat IDs", ids.len());

        let keys = ids.iter().map(|id| self.cat_key(id)).collect();
        let batch = fetch_batch::<Cat, _>(self, &mut conn, &ids, keys, "cat").await?;
        Ok(batch.results)
    }

    async fn exists(
        &self,
        conn: &mut ConnectionManager,
        id: &str,
    ) -> Result<bool, RepositoryError> {
        conn.exists(self.cat_key(id))
            .await
            .map_err(|e| self.map_redis_error(e, "cat_exists"))
    }

    fn require_id(id: &str) -> Result<(), RepositoryError> {
        if id.is_empty() {
            return Err(RepositoryError::InvalidData(
                "Cat ID cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for RedisCatRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisCatRepository")
            .field("client", &"<ConnectionManager>")
            .field("key_prefix", &self.key_prefix)
            .finish()
    }
}

#[async_trait]
impl Repository<Cat, String> for RedisCatRepository {
    async fn create(&self, entity: Cat) -> Result<Cat, RepositoryError> {
        Self::require_id(&entity.id)?;

        let mut conn = self.client.as_ref().clone();
        debug!("Creating cat with ID: {}", entity.id);

        if self.exists(&mut conn, &entity.id).await? {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Cat with ID '{}' already exists",
                entity.id
            )));
        }

        let value = self.serialize_entity(&entity, |c| &c.id, "cat")?;

        let mut pipe = redis::pipe();
        pipe.atomic();
        pipe.set(self.cat_key(&entity.id), &value);
        pipe.sadd(self.cat_list_key(), &entity.id);

        pipe.exec_async(&mut conn)
            .await
            .map_err(|e| self.map_redis_error(e, "create_cat"))?;

        debug!("Successfully created cat {}", entity.id);
        Ok(entity)
    }

    async fn get_by_id(&self, id: String) -> Result<Cat, RepositoryError> {
        Self::require_id(&id)?;

        let mut conn = self.client.as_ref().clone();
        let value: Option<String> = conn
            .get(self.cat_key(&id))
            .await
            .map_err(|e| self.map_redis_error(e, "get_cat_by_id"))?;

        match value {
            Some(json) => self.deserialize_entity::<Cat>(&json, &id, "cat"),
            None => Err(RepositoryError::NotFound(format!(
                "Cat with ID '{}' not found",
                id
            ))),
        }
    }

    async fn list_all(&self) -> Result<Vec<Cat>, RepositoryError> {
        self.load_all().await
    }

    async fn update(&self, id: String, entity: Cat) -> Result<Cat, RepositoryError> {
        Self::require_id(&id)?;

        if id != entity.id {
            return Err(RepositoryError::InvalidData(
                "Cat ID in URL does not match entity ID".to_string(),
            ));
        }

        let mut conn = self.client.as_ref().clone();
        debug!("Updating cat with ID: {}", id);

        if !self.exists(&mut conn, &id).await? {
            return Err(RepositoryError::NotFound(format!(
                "Cat with ID '{}' not found",
                id
            )));
        }

        let value = self.serialize_entity(&entity, |c| &c.id, "cat")?;
        let _: () = conn
            .set(self.cat_key(&id), value)
            .await
            .map_err(|e| self.map_redis_error(e, "update_cat"))?;

        Ok(entity)
    }

    async fn delete_by_id(&self, id: String) -> Result<(), RepositoryError> {
        Self::require_id(&id)?;

        let mut conn = self.client.as_ref().clone();
        debug!("Deleting cat with ID: {}", id);

        if !self.exists(&mut conn, &id).await? {
            return Err(RepositoryError::NotFound(format!(
                "Cat with ID '{}' not found",
                id
            )));
        }

        let mut pipe = redis::pipe();
        pipe.atomic();
        pipe.del(self.cat_key(&id));
        pipe.srem(self.cat_list_key(), &id);

        pipe.exec_async(&mut conn)
            .await
            .map_err(|e| self.map_redis_error(e, "delete_cat"))?;

        Ok(())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let mut conn = self.client.as_ref().clone();
        let count: u64 = conn
            .scard(self.cat_list_key())
            .await
            .map_err(|e| self.map_redis_error(e, "count_cats"))?;
        Ok(count as usize)
    }

    async fn has_entries(&self) -> Result<bool, RepositoryError> {
        let mut conn = self.client.as_ref().clone();
        conn.exists(self.cat_list_key())
            .await
            .map_err(|e| self.map_redis_error(e, "has_cat_entries"))
    }
}

#[async_trait]
impl CatRepository for RedisCatRepository {
    async fn list_available(&self) -> Result<Vec<Cat>, RepositoryError> {
        let mut cats: Vec<Cat> = self
            .load_all()
            .await?
            .into_iter()
            .filter(|cat| cat.is_available)
            .collect();
        sort_most_recent_first(&mut cats);
        Ok(cats)
    }

    async fn list_recent(&self) -> Result<Vec<Cat>, RepositoryError> {
        let mut cats = self.load_all().await?;
        sort_most_recent_first(&mut cats);
        Ok(cats)
    }
}
