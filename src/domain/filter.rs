//! Filter predicate engine.
//!
//! Pure functions over cat lists. Every constrained dimension must match
//! (conjunction); age, color, size and gender compare by equality while
//! personality and good-with test tag membership. Input order is preserved.

use crate::models::{Cat, CatFilters, CatalogQuery, FavoriteSet};

/// Whether `cat` satisfies every constrained dimension of `filters`.
pub fn matches_filters(cat: &Cat, filters: &CatFilters) -> bool {
    filters.age.is_none_or(|age| cat.age == age)
        && filters
            .color
            .as_deref()
            .is_none_or(|color| cat.color == color)
        && filters.size.is_none_or(|size| cat.size == size)
        && filters
            .personality
            .as_deref()
            .is_none_or(|tag| cat.has_personality(tag))
        && filters
            .good_with
            .as_deref()
            .is_none_or(|tag| cat.is_good_with(tag))
        && filters.gender.is_none_or(|gender| cat.gender == gender)
}

pub fn apply_filters(cats: &[Cat], filters: &CatFilters) -> Vec<Cat> {
    cats.iter()
        .filter(|cat| matches_filters(cat, filters))
        .cloned()
        .collect()
}

pub fn restrict_to_favorites(cats: Vec<Cat>, favorites: &FavoriteSet) -> Vec<Cat> {
    cats.into_iter()
        .filter(|cat| favorites.contains(&cat.id))
        .collect()
}

impl CatalogQuery {
    /// Favorites restriction first, then the filter predicates.
    pub fn apply(&self, cats: Vec<Cat>, favorites: &FavoriteSet) -> Vec<Cat> {
        let candidates = if self.favorites_only {
            restrict_to_favorites(cats, favorites)
        } else {
            cats
        };

        if self.filters.is_unconstrained() {
            return candidates;
        }
        apply_filters(&candidates, &self.filters)
    }
}
