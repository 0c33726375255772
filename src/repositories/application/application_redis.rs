//! Redis-backed adoption application storage: `{prefix}:application:{id}` plus the
//! id set `{prefix}:application_list`.

use crate::models::{AdoptionApplication, RepositoryError};
use crate::repositories::redis_base::{fetch_batch, RedisRepository};
use crate::repositories::ApplicationRepository;
use async_trait::async_trait;
use log::debug;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::fmt;
use std::sync::Arc;

const APPLICATION_PREFIX: &str = "application";
const APPLICATION_LIST_KEY: &str = "application_list";

#[derive(Clone)]
pub struct RedisApplicationRepository {
    pub client: Arc<ConnectionManager>,
    pub key_prefix: String,
}

impl RedisRepository for RedisApplicationRepository {}

impl RedisApplicationRepository {
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

    fn application_key(&self, id: &str) -> String {
        format!("{}:{}:{}", self.key_prefix, APPLICATION_PREFIX, id)
    }

    fn application_list_key(&self) -> String {
        format!("{}:{}", self.key_prefix, APPLICATION_LIST_KEY)
    }

    fn not_found(id: &str) -> RepositoryError {
        RepositoryError::NotFound(format!("Application with ID '{}' not found", id))
    }
}

impl fmt::Debug for RedisApplicationRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisApplicationRepository")
            .field("client", &"<ConnectionManager>")
            .field("key_prefix", &self.key_prefix)
            .finish()
    }
}

#[async_trait]
impl ApplicationRepository for RedisApplicationRepository {
    async fn create(
        &self,
        entity: AdoptionApplication,
    ) -> Result<AdoptionApplication, RepositoryError> {
        let key = self.application_key(&entity.id);
        let mut conn = self.client.as_ref().clone();

        debug!(
            "Storing application {} for cat {}",
            entity.id, entity.cat_id
        );

        let value = self.serialize_entity(&entity, |a| &a.id, "application")?;

        // SET NX keeps an existing application untouched
        let created: bool = redis::cmd("SET")
            .arg(&key)
            .arg(&value)
            .arg("NX")
            .query_async::<Option<String>>(&mut conn)
            .await
            .map(|reply| reply.is_some())
            .map_err(|e| self.map_redis_error(e, "create_application"))?;

        if !created {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Application with ID '{}' already exists",
                entity.id
            )));
        }

        let _: () = conn
            .sadd(self.application_list_key(), &entity.id)
            .await
            .map_err(|e| self.map_redis_error(e, "index_application"))?;

        Ok(entity)
    }

    async fn get_by_id(&self, id: String) -> Result<AdoptionApplication, RepositoryError> {
        let mut conn = self.client.as_ref().clone();
        let value: Option<String> = conn
            .get(self.application_key(&id))
            .await
            .map_err(|e| self.map_redis_error(e, "get_application_by_id"))?;

        match value {
            Some(json) => self.deserialize_entity(&json, &id, "application"),
            None => Err(Self::not_found(&id)),
        }
    }

    async fn list_all(&self) -> Result<Vec<AdoptionApplication>, RepositoryError> {
        let mut conn = self.client.as_ref().clone();
        let ids: Vec<String> = conn
            .smembers(self.application_list_key())
            .await
            .map_err(|e| self.map_redis_error(e, "list_application_ids"))?;

        let keys = ids.iter().map(|id| self.application_key(id)).collect();
        let mut applications =
            fetch_batch::<AdoptionApplication, _>(self, &mut conn, &ids, keys, "application")
                .await?
                .results;
        applications.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(applications)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let mut conn = self.client.as_ref().clone();
        let count: u64 = conn
            .scard(self.application_list_key())
            .await
            .map_err(|e| self.map_redis_error(e, "count_applications"))?;
        Ok(count as usize)
    }
}
