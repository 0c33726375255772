//! Public catalog reads.
//!
//! Browsing never fails: a storage error is logged and the catalog degrades to an
//! empty listing. Looking up a single cat does surface errors, since the caller
//! is about to act on that record.

use std::sync::Arc;

use log::{debug, error, warn};

use crate::{
    domain::FavoritesStore,
    models::{ApiError, Cat, CatalogQuery, FavoriteSet, RepositoryError},
    repositories::{CatRepository, KeyValueStore},
};

pub struct CatalogService<C, K>
where
    C: CatRepository,
    K: KeyValueStore,
{
    cat_repository: Arc<C>,
    favorites: FavoritesStore<K>,
}

impl<C, K> CatalogService<C, K>
where
    C: CatRepository,
    K: KeyValueStore,
{
    pub fn new(cat_repository: Arc<C>, favorites: FavoritesStore<K>) -> Self {
        Self {
            cat_repository,
            favorites,
        }
    }

    /// Available cats matching `query`, most recent first.
    ///
    /// The favorites restriction needs a device id; without one the favorites set is
    /// empty, so a favorites-only query returns nothing.
    pub async fn browse(&self, query: &CatalogQuery, device_id: Option<&str>) -> Vec<Cat> {
        let cats = match self.cat_repository.list_available().await {
            Ok(cats) => cats,
            Err(e) => {
                error!("Failed to load the cat catalog: {}", e);
                return Vec::new();
            }
        };

        let favorites = if query.favorites_only {
            self.favorites_for(device_id).await
        } else {
            FavoriteSet::new()
        };

        let result = query.apply(cats, &favorites);
        debug!("Catalog query matched {} cats", result.len());
        result
    }

    async fn favorites_for(&self, device_id: Option<&str>) -> FavoriteSet {
        let Some(device_id) = device_id else {
            return FavoriteSet::new();
        };
        match self.favorites.load(device_id).await {
            Ok(favorites) => favorites,
            Err(e) => {
                warn!("Failed to load favorites for device {}: {}", device_id, e);
                FavoriteSet::new()
            }
        }
    }

    /// A single cat, only if it is listed in the public catalog.
    pub async fn get_available(&self, cat_id: &str) -> Result<Cat, ApiError> {
        match self.cat_repository.get_by_id(cat_id.to_string()).await {
            Ok(cat) if cat.is_available => Ok(cat),
            Ok(_) | Err(RepositoryError::NotFound(_)) => Err(cat_not_found(cat_id)),
            Err(e) => Err(e.into()),
        }
    }
}

pub(crate) fn cat_not_found(cat_id: &str) -> ApiError {
    ApiError::NotFound(format!("Cat with ID '{}' not found", cat_id))
}
