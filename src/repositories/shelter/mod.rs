//! Shelter Repository Module
//!
//! Shelters are only created from the seed configuration and read when a new cat
//! record needs to be attributed.
//!
//! - [`InMemoryShelterRepository`]: Fast in-memory storage for testing/development
//! - [`RedisShelterRepository`]: Redis-backed storage for production environments
//!
mod shelter_in_memory;
mod shelter_redis;

pub use shelter_in_memory::*;
pub use shelter_redis::*;

use crate::models::{RepositoryError, Shelter};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use redis::aio::ConnectionManager;
use std::sync::Arc;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ShelterRepository: Send + Sync {
    async fn create(&self, shelter: Shelter) -> Result<Shelter, RepositoryError>;

    /// Every shelter, earliest created first.
    async fn list_all(&self) -> Result<Vec<Shelter>, RepositoryError>;

    /// The earliest created shelter, if any exists.
    async fn first_shelter(&self) -> Result<Option<Shelter>, RepositoryError> {
        Ok(self.list_all().await?.into_iter().next())
    }

    async fn has_entries(&self) -> Result<bool, RepositoryError>;
}

pub(crate) fn sort_earliest_first(shelters: &mut [Shelter]) {
    shelters.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Enum wrapper for different shelter repository implementations
#[derive(Debug, Clone)]
pub enum ShelterRepositoryStorage {
    InMemory(InMemoryShelterRepository),
    Redis(RedisShelterRepository),
}

impl ShelterRepositoryStorage {
    pub fn new_in_memory() -> Self {
        Self::InMemory(InMemoryShelterRepository::new())
    }
    pub fn new_redis(
        connection_manager: Arc<ConnectionManager>,
        key_prefix: String,
    ) -> Result<Self, RepositoryError> {
        Ok(Self::Redis(RedisShelterRepository::new(
            connection_manager,
            key_prefix,
        )?))
    }
}

#[async_trait]
impl ShelterRepository for ShelterRepositoryStorage {
    async fn create(&self, shelter: Shelter) -> Result<Shelter, RepositoryError> {
        match self {
            ShelterRepositoryStorage::InMemory(repo) => repo.create(shelter).await,
            ShelterRepositoryStorage::Redis(repo) => repo.create(shelter).await,
        }
    }

    async fn list_all(&self) -> Result<Vec<Shelter>, RepositoryError> {
        match self {
            ShelterRepositoryStorage::InMemory(repo) => repo.list_all().await,
            ShelterRepositoryStorage::Redis(repo) => repo.list_all().await,
        }
    }

    async fn has_entries(&self) -> Result<bool, RepositoryError> {
        match self {
            ShelterRepositoryStorage::InMemory(repo) => repo.has_entries().await,
            ShelterRepositoryStorage::Redis(repo) => repo.has_entries().await,
        }
    }
}
