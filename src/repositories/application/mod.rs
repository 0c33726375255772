//! Adoption Application Repository Module
//!
//! Applications are appended on submission and never edited or removed, so the
//! [`ApplicationRepository`] contract has no update or delete operations.
//!
//! - [`InMemoryApplicationRepository`]: Fast in-memory storage for testing/development
//! - [`RedisApplicationRepository`]: Redis-backed storage for production environments
//!
mod application_in_memory;
mod application_redis;

pub use application_in_memory::*;
pub use application_redis::*;

use crate::models::{AdoptionApplication, RepositoryError};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use redis::aio::ConnectionManager;
use std::sync::Arc;

/// Append-only store for submitted applications.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ApplicationRepository: Send + Sync {
    /// Rejects an id that is already stored with `ConstraintViolation`.
    async fn create(
        &self,
        application: AdoptionApplication,
    ) -> Result<AdoptionApplication, RepositoryError>;
    async fn get_by_id(&self, id: String) -> Result<AdoptionApplication, RepositoryError>;

    /// Every application, earliest submitted first.
    async fn list_all(&self) -> Result<Vec<AdoptionApplication>, RepositoryError>;
    async fn count(&self) -> Result<usize, RepositoryError>;
}

/// Enum wrapper for different application repository implementations
#[derive(Debug, Clone)]
pub enum ApplicationRepositoryStorage {
    InMemory(InMemoryApplicationRepository),
    Redis(RedisApplicationRepository),
}

impl ApplicationRepositoryStorage {
    pub fn new_in_memory() -> Self {
        Self::InMemory(InMemoryApplicationRepository::new())
    }
    pub fn new_redis(
        connection_manager: Arc<ConnectionManager>,
        key_prefix: String,
    ) -> Result<Self, RepositoryError> {
        Ok(Self::Redis(RedisApplicationRepository::new(
            connection_manager,
            key_prefix,
        )?))
    }
}

#[async_trait]
impl ApplicationRepository for ApplicationRepositoryStorage {
    async fn create(
        &self,
        entity: AdoptionApplication,
    ) -> Result<AdoptionApplication, RepositoryError> {
        match self {
            ApplicationRepositoryStorage::InMemory(repo) => repo.create(entity).await,
            ApplicationRepositoryStorage::Redis(repo) => repo.create(entity).await,
        }
    }

    async fn get_by_id(&self, id: String) -> Result<AdoptionApplication, RepositoryError> {
        match self {
            ApplicationRepositoryStorage::InMemory(repo) => repo.get_by_id(id).await,
            ApplicationRepositoryStorage::Redis(repo) => repo.get_by_id(id).await,
        }
    }

    async fn list_all(&self) -> Result<Vec<AdoptionApplication>, RepositoryError> {
        match self {
            ApplicationRepositoryStorage::InMemory(repo) => repo.list_all().await,
            ApplicationRepositoryStorage::Redis(repo) => repo.list_all().await,
        }
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        match self {
            ApplicationRepositoryStorage::InMemory(repo) => repo.count().await,
            ApplicationRepositoryStorage::Redis(repo) => repo.count().await,
        }
    }
}
