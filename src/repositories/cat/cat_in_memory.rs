//! In-memory cat repository backed by a `Mutex`-protected `HashMap`.

use crate::{
    models::{Cat, RepositoryError},
    repositories::*,
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::{Mutex, MutexGuard};

#[derive(Debug)]
pub struct InMemoryCatRepository {
    store: Mutex<HashMap<String, Cat>>,
}

impl Clone for InMemoryCatRepository {
    fn clone(&self) -> Self {
        // Try to get the current data, or use empty HashMap if lock fails
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

impl InMemoryCatRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
        }
    }

    async fn acquire_lock<T>(lock: &Mutex<T>) -> Result<MutexGuard<T>, RepositoryError> {
        Ok(lock.lock().await)
    }

    async fn sorted(&self, available_only: bool) -> Result<Vec<Cat>, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        let mut cats: Vec<Cat> = store
            .values()
            .filter(|cat| !available_only || cat.is_available)
            .cloned()
            .collect();
        sort_most_recent_first(&mut cats);
        Ok(cats)
    }
}

impl Default for InMemoryCatRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository<Cat, String> for InMemoryCatRepository {
    async fn create(&self, cat: Cat) -> Result<Cat, RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        if store.contains_key(&cat.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Cat with ID '{}' already exists",
                cat.id
            )));
        }
        store.insert(cat.id.clone(), cat.clone());
        Ok(cat)
    }

    async fn get_by_id(&self, id: String) -> Result<Cat, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        store
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Cat with ID '{}' not found", id)))
    }

    async fn list_all(&self) -> Result<Vec<Cat>, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        Ok(store.values().cloned().collect())
    }

    async fn update(&self, id: String, cat: Cat) -> Result<Cat, RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;

        if id != cat.id {
            return Err(RepositoryError::InvalidData(format!(
                "ID mismatch: URL parameter '{}' does not match entity ID '{}'",
                id, cat.id
            )));
        }

        match store.get_mut(&id) {
            Some(existing) => {
                *existing = cat.clone();
                Ok(cat)
            }
            None => Err(RepositoryError::NotFound(format!(
                "Cat with ID '{}' not found",
                id
            ))),
        }
    }

    async fn delete_by_id(&self, id: String) -> Result<(), RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;

        match store.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepositoryError::NotFound(format!(
                "Cat with ID '{}' not found",
                id
            ))),
        }
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        Ok(store.len())
    }

    async fn has_entries(&self) -> Result<bool, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        Ok(!store.is_empty())
    }
}

#[async_trait]
impl CatRepository for InMemoryCatRepository {
    async fn list_available(&self) -> Result<Vec<Cat>, RepositoryError> {
        self.sorted(true).await
    }

    async fn list_recent(&self) -> Result<Vec<Cat>, RepositoryError> {
        self.sorted(false).await
    }
}
