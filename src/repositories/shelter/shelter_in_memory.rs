use crate::{
    models::{RepositoryError, Shelter},
    repositories::{sort_earliest_first, ShelterRepository},
};
use async_trait::async_trait;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryShelterRepository {
    store: RwLock<Vec<Shelter>>,
}

impl Clone for InMemoryShelterRepository {
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

impl InMemoryShelterRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ShelterRepository for InMemoryShelterRepository {
    async fn create(&self, shelter: Shelter) -> Result<Shelter, RepositoryError> {
        let mut store = self.store.write().await;
        if store.iter().any(|existing| existing.id == shelter.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Shelter with ID '{}' already exists",
                shelter.id
            )));
        }
        store.push(shelter.clone());
        Ok(shelter)
    }

    async fn list_all(&self) -> Result<Vec<Shelter>, RepositoryError> {
        let mut shelters = self.store.read().await.clone();
        sort_earliest_first(&mut shelters);
        Ok(shelters)
    }

    async fn has_entries(&self) -> Result<bool, RepositoryError> {
        Ok(!self.store.read().await.is_empty())
    }
}
