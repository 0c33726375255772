//! This module provides functionality for processing the seed configuration file and
//! populating repositories.
use std::sync::Arc;

use chrono::{Duration, Utc};
use color_eyre::{eyre::WrapErr, Result};
use log::info;

use crate::{
    config::{Config, RepositoryStorageType, ServerConfig},
    models::ThinDataAppState,
    repositories::{Repository, ShelterRepository, UserRoleRepository},
};

/// Store every shelter. Shelters without a creation time keep file order, earliest first.
async fn process_shelters(config_file: &Config, app_state: &ThinDataAppState) -> Result<()> {
    let base = Utc::now() - Duration::seconds(config_file.shelters.len() as i64);
    for (index, shelter) in config_file.shelters.iter().enumerate() {
        let shelter = shelter
            .clone()
            .into_shelter(base + Duration::seconds(index as i64));
        app_state
            .shelter_repository
            .create(shelter)
            .await
            .wrap_err("Failed to create shelter repository entry")?;
    }
    Ok(())
}

/// Store every cat. Cats without a creation time are listed in file order, so the
/// first cat in the file is treated as the most recent.
async fn process_cats(config_file: &Config, app_state: &ThinDataAppState) -> Result<()> {
    let now = Utc::now();
    for (index, cat) in config_file.cats.iter().enumerate() {
        let cat = cat
            .clone()
            .into_cat(now - Duration::seconds(index as i64))
            .wrap_err("Failed to convert cat config")?;
        app_state
            .cat_repository
            .create(cat)
            .await
            .wrap_err("Failed to create cat repository entry")?;
    }
    Ok(())
}

async fn process_user_roles(config_file: &Config, app_state: &ThinDataAppState) -> Result<()> {
    for assignment in &config_file.user_roles {
        app_state
            .user_role_repository
            .assign(&assignment.user_id, assignment.role)
            .await
            .wrap_err("Failed to assign user role")?;
    }
    Ok(())
}

/// Checks if Redis already holds catalog data from a previous run.
async fn is_redis_populated(app_state: &ThinDataAppState) -> Result<bool> {
    if app_state.cat_repository.has_entries().await? {
        return Ok(true);
    }

    if app_state.shelter_repository.has_entries().await? {
        return Ok(true);
    }

    Ok(false)
}

/// Process a complete configuration file by populating the repositories.
///
/// Shelters are stored first, then cats, then role assignments. With Redis storage
/// the file is only applied to an empty store. Sessions are consumed when the auth
/// provider is built, not here.
pub async fn process_config_file(
    config_file: Config,
    server_config: Arc<ServerConfig>,
    app_state: &ThinDataAppState,
) -> Result<()> {
    let should_process_config_file = match server_config.repository_storage_type {
        RepositoryStorageType::InMemory => true,
        RepositoryStorageType::Redis => !is_redis_populated(app_state).await?,
    };

    if !should_process_config_file {
        info!("Skipping config file processing, storage already populated");
        return Ok(());
    }

    info!(
        "Processing config file: {} shelters, {} cats, {} role assignments",
        config_file.shelters.len(),
        config_file.cats.len(),
        config_file.user_roles.len()
    );
    process_shelters(&config_file, app_state).await?;
    process_cats(&config_file, app_state).await?;
    process_user_roles(&config_file, app_state).await?;
    Ok(())
}
