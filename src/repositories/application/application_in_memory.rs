use crate::{
    models::{AdoptionApplication, RepositoryError},
    repositories::*,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::{Mutex, MutexGuard};

#[derive(Debug, Default)]
pub struct InMemoryApplicationRepository {
    store: Mutex<HashMap<String, AdoptionApplication>>,
}

impl Clone for InMemoryApplicationRepository {
    fn clone(&self) -> Self {
        let data = self
            .store
            .try_lock()
            .map(|guard| guard.clone())
            .unwrap_or_else(|_| HashMap::new());

        Self {
            store: Mutex::new(data),
        }
    }
}

impl InMemoryApplicationRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn acquire_lock<T>(lock: &Mutex<T>) -> Result<MutexGuard<T>, RepositoryError> {
        Ok(lock.lock().await)
    }

    fn not_found(id: &str) -> RepositoryError {
        RepositoryError::NotFound(format!("Application with ID '{}' not found", id))
    }
}

#[async_trait]
impl ApplicationRepository for InMemoryApplicationRepository {
    async fn create(
        &self,
        application: AdoptionApplication,
    ) -> Result<AdoptionApplication, RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        if store.contains_key(&application.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Application with ID '{}' already exists",
                application.id
            )));
        }
        store.insert(application.id.clone(), application.clone());
        Ok(application)
    }

    async fn get_by_id(&self, id: String) -> Result<AdoptionApplication, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        store.get(&id).cloned().ok_or_else(|| Self::not_found(&id))
    }

    async fn list_all(&self) -> Result<Vec<AdoptionApplication>, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        let mut applications: Vec<AdoptionApplication> = store.values().cloned().collect();
        applications.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(applications)
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(Self::acquire_lock(&self.store).await?.len())
    }
}
