//! # Repository Module
//!
//! Implements the data persistence layer using the Repository pattern. Every
//! repository has an in-memory implementation (tests, development and seeded demo
//! runs) and a Redis implementation, selected at boot through a storage enum.

use crate::models::RepositoryError;
use async_trait::async_trait;

mod redis_base;

mod cat;
pub use cat::*;

mod application;
pub use application::*;

mod shelter;
pub use shelter::*;

mod user_role;
pub use user_role::*;

mod key_value;
pub use key_value::*;

/// Entities fetched in one batch, plus the ids whose stored value could not be decoded.
#[derive(Debug)]
pub struct BatchRetrievalResult<T> {
    pub results: Vec<T>,
    pub failed_ids: Vec<String>,
}

#[async_trait]
pub trait Repository<T, ID> {
    async fn create(&self, entity: T) -> Result<T, RepositoryError>;
    async fn get_by_id(&self, id: ID) -> Result<T, RepositoryError>;
    async fn list_all(&self) -> Result<Vec<T>, RepositoryError>;
    async fn update(&self, id: ID, entity: T) -> Result<T, RepositoryError>;
    async fn delete_by_id(&self, id: ID) -> Result<(), RepositoryError>;
    async fn count(&self) -> Result<usize, RepositoryError>;
    async fn has_entries(&self) -> Result<bool, RepositoryError>;
}
