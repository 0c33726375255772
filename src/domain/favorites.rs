//! Favorites store.
//!
//! Each device keeps one set of favorite cat ids, stored as a JSON array under
//! `favorites:{device_id}`. Every mutation writes the full set back; concurrent
//! writers for the same device resolve as last-write-wins.

use std::sync::Arc;

use log::warn;

use crate::{
    constants::FAVORITES_KEY_PREFIX,
    models::{FavoriteSet, RepositoryError},
    repositories::KeyValueStore,
};

/// Removes `cat_id` when present, otherwise adds it.
pub fn toggle_favorite(mut favorites: FavoriteSet, cat_id: &str) -> FavoriteSet {
    if !favorites.remove(cat_id) {
        favorites.insert(cat_id.to_string());
    }
    favorites
}

#[derive(Debug)]
pub struct FavoritesStore<S: KeyValueStore> {
    store: Arc<S>,
}

impl<S: KeyValueStore> Clone for FavoritesStore<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: KeyValueStore> FavoritesStore<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    fn key(device_id: &str) -> String {
        format!("{}:{}", FAVORITES_KEY_PREFIX, device_id)
    }

    /// The saved set, or an empty one when nothing (or nothing readable) is stored.
    pub async fn load(&self, device_id: &str) -> Result<FavoriteSet, RepositoryError> {
        let Some(raw) = self.store.get(&Self::key(device_id)).await? else {
            return Ok(FavoriteSet::new());
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(ids) => Ok(ids.into_iter().collect()),
            Err(e) => {
                warn!(
                    "Discarding unreadable favorites for device {}: {}",
                    device_id, e
                );
                Ok(FavoriteSet::new())
            }
        }
    }

    pub async fn save(
        &self,
        device_id: &str,
        favorites: &FavoriteSet,
    ) -> Result<(), RepositoryError> {
        let ids: Vec<&String> = favorites.iter().collect();
        let raw = serde_json::to_string(&ids).map_err(|e| {
            RepositoryError::InvalidData(format!("Failed to encode favorites: {}", e))
        })?;
        self.store.set(&Self::key(device_id), raw).await
    }

    /// Flips membership of `cat_id`, persists and returns the new set.
    pub async fn toggle(
        &self,
        device_id: &str,
        cat_id: &str,
    ) -> Result<FavoriteSet, RepositoryError> {
        let favorites = toggle_favorite(self.load(device_id).await?, cat_id);
        self.save(device_id, &favorites).await?;
        Ok(favorites)
    }

    pub async fn clear(&self, device_id: &str) -> Result<(), RepositoryError> {
        self.store.delete(&Self::key(device_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{InMemoryKeyValueStore, MockKeyValueStore};

    fn set_of(ids: &[&str]) -> FavoriteSet {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn in_memory_store() -> FavoritesStore<InMemoryKeyValueStore> {
        FavoritesStore::new(Arc::new(InMemoryKeyValueStore::new()))
    }

    #[test]
    fn test_toggle_favorite_adds_and_removes() {
        let added = toggle_favorite(set_of(&["1"]), "2");
        assert_eq!(added, set_of(&["1", "2"]));

        let removed = toggle_favorite(added, "1");
        assert_eq!(removed, set_of(&["2"]));
    }

    #[actix_web::test]
    async fn test_load_missing_is_empty() {
        let store = in_memory_store();

        assert!(store.load("device-1").await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_toggle_persists_and_twice_is_noop() {
        let store = in_memory_store();

        let after_first = store.toggle("device-1", "3").await.unwrap();
        assert_eq!(after_first, set_of(&["3"]));
        assert_eq!(store.load("device-1").await.unwrap(), set_of(&["3"]));

        store.toggle("device-1", "3").await.unwrap();
        assert!(store.load("device-1").await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_devices_are_isolated() {
        let store = in_memory_store();

        store.toggle("device-1", "1").await.unwrap();
        assert!(store.load("device-2").await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_save_and_clear() {
        let store = in_memory_store();

        store.save("device-1", &set_of(&["4", "2"])).await.unwrap();
        assert_eq!(store.load("device-1").await.unwrap(), set_of(&["2", "4"]));

        store.clear("device-1").await.unwrap();
        assert!(store.load("device-1").await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_unparseable_value_loads_as_empty() {
        let kv = Arc::new(InMemoryKeyValueStore::new());
        kv.set("favorites:device-1", "not json".to_string())
            .await
            .unwrap();
        let store = FavoritesStore::new(kv);

        assert!(store.load("device-1").await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_stored_as_json_array_under_device_key() {
        let mut kv = MockKeyValueStore::new();
        kv.expect_get()
            .withf(|key| key == "favorites:abc")
            .times(1)
            .returning(|_| Ok(Some("[\"1\"]".to_string())));
        kv.expect_set()
            .withf(|key, value| key == "favorites:abc" && value == "[\"1\",\"9\"]")
            .times(1)
            .returning(|_, _| Ok(()));

        let store = FavoritesStore::new(Arc::new(kv));
        let favorites = store.toggle("abc", "9").await.unwrap();
        assert_eq!(favorites, set_of(&["1", "9"]));
    }

    #[actix_web::test]
    async fn test_storage_failure_propagates() {
        let mut kv = MockKeyValueStore::new();
        kv.expect_get()
            .returning(|_| Err(RepositoryError::ConnectionError("down".to_string())));

        let store = FavoritesStore::new(Arc::new(kv));
        assert!(store.toggle("abc", "1").await.is_err());
    }
}
