use crate::{
    models::{RepositoryError, RoleSet, UserRole},
    repositories::UserRoleRepository,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryUserRoleRepository {
    store: RwLock<HashMap<String, RoleSet>>,
}

impl Clone for InMemoryUserRoleRepository {
    fn clone(&self) -> Self {
        let data = self
            .store
            .try_read()
            .map(|guard| guard.clone())
            .unwrap_or_default();

        Self {
            store: RwLock::new(data),
        }
    }
}

impl InMemoryUserRoleRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRoleRepository for InMemoryUserRoleRepository {
    async fn roles_for_user(&self, user_id: &str) -> Result<RoleSet, RepositoryError> {
        Ok(self
            .store
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn assign(&self, user_id: &str, role: UserRole) -> Result<(), RepositoryError> {
        self.store
            .write()
            .await
            .entry(user_id.to_string())
            .or_default()
            .insert(role);
        Ok(())
    }
}
