use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    config::ConfigFileError,
    models::{Cat, CatAttributes, CatRequest},
};

use super::validate_id;

/// A seeded cat record. Attributes follow the same rules as the admin editor.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct CatFileConfig {
    pub id: String,
    pub name: String,
    pub age: String,
    pub color: String,
    pub size: String,
    pub gender: String,
    #[serde(default)]
    pub personality: Vec<String>,
    #[serde(default)]
    pub good_with: Vec<String>,
    pub description: String,
    pub image_url: String,
    #[serde(default = "default_is_available")]
    pub is_available: bool,
    #[serde(default)]
    pub shelter_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_is_available() -> bool {
    true
}

impl CatFileConfig {
    fn request(&self) -> CatRequest {
        CatRequest {
            name: self.name.clone(),
            age: self.age.clone(),
            color: self.color.clone(),
            size: self.size.clone(),
            gender: self.gender.clone(),
            personality: self.personality.clone(),
            good_with: self.good_with.clone(),
            description: self.description.clone(),
            image_url: self.image_url.clone(),
            is_available: self.is_available,
        }
    }

    fn attributes(&self) -> Result<CatAttributes, ConfigFileError> {
        CatAttributes::try_from(self.request()).map_err(|e| ConfigFileError::InvalidCat {
            id: self.id.clone(),
            message: e.message,
        })
    }

    /// Builds the stored record. Missing creation times are filled with
    /// `fallback_created_at`.
    pub fn into_cat(self, fallback_created_at: DateTime<Utc>) -> Result<Cat, ConfigFileError> {
        let attributes = self.attributes()?;
        Ok(Cat::new(
            self.id,
            attributes,
            self.shelter_id,
            self.created_at.unwrap_or(fallback_created_at),
        ))
    }
}

pub struct CatsFileConfig {
    pub cats: Vec<CatFileConfig>,
}

impl CatsFileConfig {
    pub fn new(cats: Vec<CatFileConfig>) -> Self {
        Self { cats }
    }

    pub fn validate(&self, shelter_ids: &HashSet<&str>) -> Result<(), ConfigFileError> {
        let mut ids = HashSet::new();
        for cat in &self.cats {
            validate_id(&cat.id)?;
            if !ids.insert(cat.id.as_str()) {
                return Err(ConfigFileError::DuplicateId(cat.id.clone()));
            }
            cat.attributes()?;

            if let Some(shelter_id) = &cat.shelter_id {
                if !shelter_ids.contains(shelter_id.as_str()) {
                    return Err(ConfigFileError::InvalidReference(format!(
                        "Cat '{}' references non-existent shelter '{}'",
                        cat.id, shelter_id
                    )));
                }
            }
        }
        Ok(())
    }
}
