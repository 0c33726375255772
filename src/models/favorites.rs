use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Cat ids a device has marked as favorites.
pub type FavoriteSet = BTreeSet<String>;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct FavoritesRequest {
    pub cat_ids: Vec<String>,
}

impl FavoritesRequest {
    pub fn into_set(self) -> FavoriteSet {
        self.cat_ids
            .into_iter()
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct FavoritesResponse {
    pub cat_ids: Vec<String>,
}

impl From<FavoriteSet> for FavoritesResponse {
    fn from(set: FavoriteSet) -> Self {
        Self {
            cat_ids: set.into_iter().collect(),
        }
    }
}

/// Outcome of toggling one cat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct FavoriteToggleResponse {
    pub cat_id: String,
    pub is_favorite: bool,
    pub cat_ids: Vec<String>,
}

impl FavoriteToggleResponse {
    pub fn new(cat_id: &str, set: FavoriteSet) -> Self {
        Self {
            cat_id: cat_id.to_string(),
            is_favorite: set.contains(cat_id),
            cat_ids: set.into_iter().collect(),
        }
    }
}
