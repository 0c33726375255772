//! User Role Repository Module
//!
//! Read access to the roles held by a user. Assignments are provisioned outside
//! the application and only written here when the seed configuration is loaded.

mod user_role_in_memory;
mod user_role_redis;

pub use user_role_in_memory::*;
pub use user_role_redis::*;

use crate::models::{RepositoryError, RoleSet, UserRole};
use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use redis::aio::ConnectionManager;
use std::sync::Arc;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRoleRepository: Send + Sync {
    /// Roles held by `user_id`; an unknown user holds none.
    async fn roles_for_user(&self, user_id: &str) -> Result<RoleSet, RepositoryError>;

    async fn assign(&self, user_id: &str, role: UserRole) -> Result<(), RepositoryError>;
}

/// Enum wrapper for different user role repository implementations
#[derive(Debug, Clone)]
pub enum UserRoleRepositoryStorage {
    InMemory(InMemoryUserRoleRepository),
    Redis(RedisUserRoleRepository),
}

impl UserRoleRepositoryStorage {
    pub fn new_in_memory() -> Self {
        Self::InMemory(InMemoryUserRoleRepository::new())
    }
    pub fn new_redis(
        connection_manager: Arc<ConnectionManager>,
        key_prefix: String,
    ) -> Result<Self, RepositoryError> {
        Ok(Self::Redis(RedisUserRoleRepository::new(
            connection_manager,
            key_prefix,
        )?))
    }
}

#[async_trait]
impl UserRoleRepository for UserRoleRepositoryStorage {
    async fn roles_for_user(&self, user_id: &str) -> Result<RoleSet, RepositoryError> {
        match self {
            UserRoleRepositoryStorage::InMemory(repo) => repo.roles_for_user(user_id).await,
            UserRoleRepositoryStorage::Redis(repo) => repo.roles_for_user(user_id).await,
        }
    }

    async fn assign(&self, user_id: &str, role: UserRole) -> Result<(), RepositoryError> {
        match self {
            UserRoleRepositoryStorage::InMemory(repo) => repo.assign(user_id, role).await,
            UserRoleRepositoryStorage::Redis(repo) => repo.assign(user_id, role).await,
        }
    }
}
