//! Catalog filter selections.
//!
//! Every dimension is optional and `None` means "no constraint". Query strings use
//! `""` or `"all"` for the same thing, so they are parsed rather than deserialized
//! straight into the typed filters.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::VariantNames;
use utoipa::{IntoParams, ToSchema};

use crate::{
    constants::{COLOR_PALETTE, FILTER_ANY, GOOD_WITH_OPTIONS, PERSONALITY_TRAITS},
    models::{CatAge, CatGender, CatSize, FieldValidationError},
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatFilters {
    pub age: Option<CatAge>,
    pub color: Option<String>,
    pub size: Option<CatSize>,
    pub personality: Option<String>,
    pub good_with: Option<String>,
    pub gender: Option<CatGender>,
}

impl CatFilters {
    pub fn is_unconstrained(&self) -> bool {
        *self == Self::default()
    }
}

/// The complete browsing state: filter selections plus the favorites-only toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CatalogQuery {
    pub filters: CatFilters,
    pub favorites_only: bool,
}

impl CatalogQuery {
    /// Clears every dimension and the favorites-only toggle at once.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Raw query-string form of [`CatalogQuery`].
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatFilterQuery {
    /// kitten, young, adult, senior or "all"
    pub age: Option<String>,
    pub color: Option<String>,
    /// small, medium, large or "all"
    pub size: Option<String>,
    pub personality: Option<String>,
    pub good_with: Option<String>,
    /// male, female or "all"
    pub gender: Option<String>,
    pub favorites_only: Option<bool>,
}

fn selection(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case(FILTER_ANY))
}

fn parse_enumerated<T: FromStr + VariantNames>(
    field: &str,
    raw: Option<String>,
) -> Result<Option<T>, FieldValidationError> {
    match selection(raw) {
        None => Ok(None),
        Some(value) => T::from_str(&value.to_lowercase()).map(Some).map_err(|_| {
            FieldValidationError::new(
                field,
                format!(
                    "Invalid {} filter '{}', expected one of: {}",
                    field,
                    value,
                    T::VARIANTS.join(", ")
                ),
            )
        }),
    }
}

impl TryFrom<CatFilterQuery> for CatalogQuery {
    type Error = FieldValidationError;

    fn try_from(query: CatFilterQuery) -> Result<Self, Self::Error> {
        Ok(CatalogQuery {
            filters: CatFilters {
                age: parse_enumerated("age", query.age)?,
                color: selection(query.color),
                size: parse_enumerated("size", query.size)?,
                personality: selection(query.personality),
                good_with: selection(query.good_with),
                gender: parse_enumerated("gender", query.gender)?,
            },
            favorites_only: query.favorites_only.unwrap_or(false),
        })
    }
}

/// Values the filter panel offers for each dimension.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct FilterOptions {
    pub ages: Vec<String>,
    pub colors: Vec<String>,
    pub sizes: Vec<String>,
    pub personalities: Vec<String>,
    pub good_with: Vec<String>,
    pub genders: Vec<String>,
}

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            ages: owned(CatAge::VARIANTS),
            colors: owned(COLOR_PALETTE),
            sizes: owned(CatSize::VARIANTS),
            personalities: owned(PERSONALITY_TRAITS),
            good_with: owned(GOOD_WITH_OPTIONS),
            genders: owned(CatGender::VARIANTS),
        }
    }
}
