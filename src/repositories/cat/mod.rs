//! Cat Repository Module
//!
//! Persistence for cat records plus the two catalog reads: the public listing of
//! available cats and the admin listing of every record, both most recent first.
//!
//! ## Repository Implementations
//!
//! - [`InMemoryCatRepository`]: Fast in-memory storage for testing/development
//! - [`RedisCatRepository`]: Redis-backed storage for production environments
//!
mod cat_in_memory;
mod cat_redis;

pub use cat_in_memory::*;
pub use cat_redis::*;

use crate::{
    models::{Cat, RepositoryError},
    repositories::Repository,
};
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use std::{cmp::Ordering, sync::Arc};

/// Catalog queries on top of the basic CRUD operations.
#[async_trait]
pub trait CatRepository: Repository<Cat, String> {
    /// Cats with `is_available` set, most recently created first.
    async fn list_available(&self) -> Result<Vec<Cat>, RepositoryError>;

    /// Every cat regardless of availability, most recently created first.
    async fn list_recent(&self) -> Result<Vec<Cat>, RepositoryError>;
}

/// Orders by `created_at` descending, breaking ties by id so listings are stable.
pub fn sort_most_recent_first(cats: &mut [Cat]) {
    cats.sort_by(|a, b| match b.created_at.cmp(&a.created_at) {
        Ordering::Equal => a.id.cmp(&b.id),
        ordering => ordering,
    });
}

#[cfg(test)]
mockall::mock! {
  pub CatRepository {}

  #[async_trait]
  impl Repository<Cat, String> for CatRepository {
      async fn create(&self, entity: Cat) -> Result<Cat, RepositoryError>;
      async fn get_by_id(&self, id: String) -> Result<Cat, RepositoryError>;
      async fn list_all(&self) -> Result<Vec<Cat>, RepositoryError>;
      async fn update(&self, id: String, entity: Cat) -> Result<Cat, RepositoryError>;
      async fn delete_by_id(&self, id: String) -> Result<(), RepositoryError>;
      async fn count(&self) -> Result<usize, RepositoryError>;
      async fn has_entries(&self) -> Result<bool, RepositoryError>;
  }

  #[async_trait]
  impl CatRepository for CatRepository {
      async fn list_available(&self) -> Result<Vec<Cat>, RepositoryError>;
      async fn list_recent(&self) -> Result<Vec<Cat>, RepositoryError>;
  }
}

/// Enum wrapper for different cat repository implementations
#[derive(Debug, Clone)]
pub enum CatRepositoryStorage {
    InMemory(InMemoryCatRepository),
    Redis(RedisCatRepository),
}

impl CatRepositoryStorage {
    pub fn new_in_memory() -> Self {
        Self::InMemory(InMemoryCatRepository::new())
    }
    pub fn new_redis(
        connection_manager: Arc<ConnectionManager>,
        key_prefix: String,
    ) -> Result<Self, RepositoryError> {
        Ok(Self::Redis(RedisCatRepository::new(
            connection_manager,
            key_prefix,
        )?))
    }
}

#[async_trait]
impl Repository<Cat, String> for CatRepositoryStorage {
    async fn create(&self, entity: Cat) -> Result<Cat, RepositoryError> {
        match self {
            CatRepositoryStorage::InMemory(repo) => repo.create(entity).await,
            CatRepositoryStorage::Redis(repo) => repo.create(entity).await,
        }
    }

    async fn get_by_id(&self, id: String) -> Result<Cat, RepositoryError> {
        match self {
            CatRepositoryStorage::InMemory(repo) => repo.get_by_id(id).await,
            CatRepositoryStorage::Redis(repo) => repo.get_by_id(id).await,
        }
    }

    async fn list_all(&self) -> Result<Vec<Cat>, RepositoryError> {
        match self {
            CatRepositoryStorage::InMemory(repo) => repo.list_all().await,
            CatRepositoryStorage::Redis(repo) => repo.list_all().await,
        }
    }

    async fn update(&self, id: String, entity: Cat) -> Result<Cat, RepositoryError> {
        match self {
            CatRepositoryStorage::InMemory(repo) => repo.update(id, entity).await,
            CatRepositoryStorage::Redis(repo) => repo.update(id, entity).await,
        }
    }

    async fn delete_by_id(&self, id: String) -> Result<(), RepositoryError> {
        match self {
            CatRepositoryStorage::InMemory(repo) => repo.delete_by_id(id).await,
            CatRepositoryStorage::Redis(repo) => repo.delete_by_id(id).await,
        }
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        match self {
            CatRepositoryStorage::InMemory(repo) => repo.count().await,
            CatRepositoryStorage::Redis(repo) => repo.count().await,
        }
    }

    async fn has_entries(&self) -> Result<bool, RepositoryError> {
        match self {
            CatRepositoryStorage::InMemory(repo) => repo.has_entries().await,
            CatRepositoryStorage::Redis(repo) => repo.has_entries().await,
        }
    }
}

#[async_trait]
impl CatRepository for CatRepositoryStorage {
    async fn list_available(&self) -> Result<Vec<Cat>, RepositoryError> {
        match self {
            CatRepositoryStorage::InMemory(repo) => repo.list_available().await,
            CatRepositoryStorage::Redis(repo) => repo.list_available().await,
        }
    }

    async fn list_recent(&self) -> Result<Vec<Cat>, RepositoryError> {
        match self {
            CatRepositoryStorage::InMemory(repo) => repo.list_recent().await,
            CatRepositoryStorage::Redis(repo) => repo.list_recent().await,
        }
    }
}
