//! Redis-backed role lookup: each user's roles are a set at `{prefix}:user_roles:{user_id}`.

use crate::models::{RepositoryError, RoleSet, UserRole};
use crate::repositories::redis_base::RedisRepository;
use crate::repositories::UserRoleRepository;
use async_trait::async_trait;
use log::warn;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

const USER_ROLES_PREFIX: &str = "user_roles";

#[derive(Clone)]
pub struct RedisUserRoleRepository {
    pub client: Arc<ConnectionManager>,
    pub key_prefix: String,
}

impl RedisRepository for RedisUserRoleRepository {}

impl RedisUserRoleRepository {
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

    fn user_roles_key(&self, user_id: &str) -> String {
        format!("{}:{}:{}", self.key_prefix, USER_ROLES_PREFIX, user_id)
    }
}

impl fmt::Debug for RedisUserRoleRepository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisUserRoleRepository")
            .field("client", &"<ConnectionManager>")
            .field("key_prefix", &self.key_prefix)
            .finish()
    }
}

#[async_trait]
impl UserRoleRepository for RedisUserRoleRepository {
    async fn roles_for_user(&self, user_id: &str) -> Result<RoleSet, RepositoryError> {
        let mut conn = self.client.as_ref().clone();
        let stored: Vec<String> = conn
            .smembers(self.user_roles_key(user_id))
            .await
            .map_err(|e| self.map_redis_error(e, "roles_for_user"))?;

        let roles = stored.iter().filter_map(|value| match UserRole::from_str(value) {
            Ok(role) => Some(role),
            Err(_) => {
                warn!("Ignoring unknown role '{}' for user {}", value, user_id);
                None
            }
        });
        Ok(RoleSet::new(roles))
    }

    async fn assign(&self, user_id: &str, role: UserRole) -> Result<(), RepositoryError> {
        let mut conn = self.client.as_ref().clone();
        let _: () = conn
            .sadd(self.user_roles_key(user_id), role.to_string())
            .await
            .map_err(|e| self.map_redis_error(e, "assign_role"))?;
        Ok(())
    }
}
