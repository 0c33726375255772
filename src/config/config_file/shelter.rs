use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{config::ConfigFileError, models::Shelter};

use super::validate_id;

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct ShelterFileConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl ShelterFileConfig {
    /// Missing creation times are filled with `fallback_created_at`.
    pub fn into_shelter(self, fallback_created_at: DateTime<Utc>) -> Shelter {
        Shelter {
            id: self.id,
            name: self.name.trim().to_string(),
            created_at: self.created_at.unwrap_or(fallback_created_at),
        }
    }
}

pub struct SheltersFileConfig {
    pub shelters: Vec<ShelterFileConfig>,
}

impl SheltersFileConfig {
    pub fn new(shelters: Vec<ShelterFileConfig>) -> Self {
        Self { shelters }
    }

    pub fn validate(&self) -> Result<(), ConfigFileError> {
        let mut ids = HashSet::new();
        for shelter in &self.shelters {
            validate_id(&shelter.id)?;
            if !ids.insert(shelter.id.as_str()) {
                return Err(ConfigFileError::DuplicateId(shelter.id.clone()));
            }
            if shelter.name.trim().is_empty() {
                return Err(ConfigFileError::MissingField(format!(
                    "name of shelter '{}'",
                    shelter.id
                )));
            }
        }
        Ok(())
    }
}
