//! Seed configuration file.
//!
//! The file lists the shelters, cats, role assignments and (for the in-memory auth
//! provider) sessions loaded at boot. Everything is validated before anything is
//! stored: ids are unique and well formed, cats pass the same rules as the admin
//! editor and references point at declared shelters.
//!
//! # Usage
//! Load a configuration file with [`load_config`], which parses and validates it.
use std::{collections::HashSet, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    config::ConfigFileError,
    constants::ID_REGEX,
    models::{Session, UserRoleAssignment},
};

mod access;
pub use access::*;

mod cat;
pub use cat::*;

mod shelter;
pub use shelter::*;

const MAX_ID_LENGTH: usize = 36;

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub shelters: Vec<ShelterFileConfig>,
    #[serde(default)]
    pub cats: Vec<CatFileConfig>,
    #[serde(default)]
    pub user_roles: Vec<UserRoleAssignment>,
    #[serde(default)]
    pub sessions: Vec<Session>,
}

pub(crate) fn validate_id(id: &str) -> Result<(), ConfigFileError> {
    if id.is_empty() {
        return Err(ConfigFileError::MissingField("id".into()));
    }
    if id.len() > MAX_ID_LENGTH {
        return Err(ConfigFileError::InvalidIdLength(format!(
            "'{}' is longer than {} characters",
            id, MAX_ID_LENGTH
        )));
    }
    if !ID_REGEX.is_match(id) {
        return Err(ConfigFileError::InvalidIdFormat(format!(
            "'{}' may only contain letters, digits, '-' and '_'",
            id
        )));
    }
    Ok(())
}

impl Config {
    /// Validates every section, then the references between them.
    ///
    /// # Errors
    /// Returns the first `ConfigFileError` found.
    pub fn validate(&self) -> Result<(), ConfigFileError> {
        SheltersFileConfig::new(self.shelters.clone()).validate()?;

        let shelter_ids: HashSet<&str> = self.shelters.iter().map(|s| s.id.as_str()).collect();
        CatsFileConfig::new(self.cats.clone()).validate(&shelter_ids)?;

        UserRolesFileConfig::new(self.user_roles.clone()).validate()?;
        SessionsFileConfig::new(self.sessions.clone()).validate()?;
        Ok(())
    }
}

/// Loads and validates a configuration file from the specified path.
///
/// # Errors
/// Returns a `ConfigFileError` if the file is missing, cannot be parsed, or if the
/// configuration is invalid.
pub fn load_config(config_file_path: &str) -> Result<Config, ConfigFileError> {
    if !Path::new(config_file_path).exists() {
        return Err(ConfigFileError::FileNotFound(config_file_path.to_string()));
    }
    let config_str = fs::read_to_string(config_file_path)?;
    let config: Config = serde_json::from_str(&config_str)?;
    config.validate()?;
    Ok(config)
}
