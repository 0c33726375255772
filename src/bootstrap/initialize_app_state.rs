//! Application state initialization
//!
//! This module contains functions for initializing the application state: the
//! repositories, the favorites store and the auth provider.
use crate::{
    config::{AuthProviderType, Config, FavoritesStorageType, RepositoryStorageType, ServerConfig},
    models::{AppState, DefaultAppState},
    repositories::{
        ApplicationRepositoryStorage, CatRepositoryStorage, KeyValueStorage,
        ShelterRepositoryStorage, UserRoleRepositoryStorage,
    },
    services::{AuthProviderStorage, RemoteAuthConfig},
    utils::initialize_redis_connection,
};
use actix_web::web;
use color_eyre::Result;
use log::{info, warn};
use redis::aio::ConnectionManager;
use std::{sync::Arc, time::Duration};

pub struct RepositoryCollection {
    pub cat: Arc<CatRepositoryStorage>,
    pub application: Arc<ApplicationRepositoryStorage>,
    pub shelter: Arc<ShelterRepositoryStorage>,
    pub user_role: Arc<UserRoleRepositoryStorage>,
}

/// Opens a Redis connection only when some store is configured to use it.
async fn redis_connection_if_needed(
    config: &ServerConfig,
) -> Result<Option<Arc<ConnectionManager>>> {
    let needed = config.repository_storage_type == RepositoryStorageType::Redis
        || config.favorites_storage_type == FavoritesStorageType::Redis;
    if !needed {
        return Ok(None);
    }
    Ok(Some(initialize_redis_connection(config).await?))
}

/// Initializes repositories based on the server configuration
///
/// # Errors
///
/// Returns an error when Redis storage is selected and a repository cannot be built
/// on the given connection.
pub fn initialize_repositories(
    config: &ServerConfig,
    connection_manager: Option<Arc<ConnectionManager>>,
) -> Result<RepositoryCollection> {
    let repositories = match (config.repository_storage_type, connection_manager) {
        (RepositoryStorageType::Redis, Some(connection_manager)) => {
            warn!("Redis repository storage support is experimental");
            RepositoryCollection {
                cat: Arc::new(CatRepositoryStorage::new_redis(
                    connection_manager.clone(),
                    config.redis_key_prefix.clone(),
                )?),
                application: Arc::new(ApplicationRepositoryStorage::new_redis(
                    connection_manager.clone(),
                    config.redis_key_prefix.clone(),
                )?),
                shelter: Arc::new(ShelterRepositoryStorage::new_redis(
                    connection_manager.clone(),
                    config.redis_key_prefix.clone(),
                )?),
                user_role: Arc::new(UserRoleRepositoryStorage::new_redis(
                    connection_manager,
                    config.redis_key_prefix.clone(),
                )?),
            }
        }
        (RepositoryStorageType::Redis, None) => {
            return Err(eyre::eyre!(
                "Redis repository storage requires a Redis connection"
            ))
        }
        (RepositoryStorageType::InMemory, _) => RepositoryCollection {
            cat: Arc::new(CatRepositoryStorage::new_in_memory()),
            application: Arc::new(ApplicationRepositoryStorage::new_in_memory()),
            shelter: Arc::new(ShelterRepositoryStorage::new_in_memory()),
            user_role: Arc::new(UserRoleRepositoryStorage::new_in_memory()),
        },
    };

    Ok(repositories)
}

/// Builds the store that keeps per-device favorites.
pub fn initialize_favorites_store(
    config: &ServerConfig,
    connection_manager: Option<Arc<ConnectionManager>>,
) -> Result<KeyValueStorage> {
    let store = match (config.favorites_storage_type, connection_manager) {
        (FavoritesStorageType::InMemory, _) => KeyValueStorage::new_in_memory(),
        (FavoritesStorageType::File, _) => {
            info!("Storing favorites under {}", config.favorites_data_dir);
            KeyValueStorage::new_file(config.favorites_data_dir.clone())
        }
        (FavoritesStorageType::Redis, Some(connection_manager)) => {
            KeyValueStorage::new_redis(connection_manager, config.redis_key_prefix.clone())?
        }
        (FavoritesStorageType::Redis, None) => {
            return Err(eyre::eyre!(
                "Redis favorites storage requires a Redis connection"
            ))
        }
    };
    Ok(store)
}

/// Builds the auth provider. The in-memory provider is seeded with the sessions
/// declared in the configuration file.
///
/// # Errors
///
/// Returns an error when the remote provider is selected without `AUTH_URL` and
/// `AUTH_API_KEY`.
pub fn initialize_auth_provider(
    config: &ServerConfig,
    config_file: &Config,
) -> Result<AuthProviderStorage> {
    match config.auth_provider_type {
        AuthProviderType::InMemory => Ok(AuthProviderStorage::new_in_memory(
            config_file.sessions.clone(),
        )),
        AuthProviderType::Remote => {
            let (Some(url), Some(api_key)) = (&config.auth_url, &config.auth_api_key) else {
                return Err(eyre::eyre!(
                    "Remote auth provider requires AUTH_URL and AUTH_API_KEY"
                ));
            };
            if !config_file.sessions.is_empty() {
                warn!("Ignoring configured sessions, the remote auth provider owns sessions");
            }
            Ok(AuthProviderStorage::new_remote(RemoteAuthConfig::new(
                url.clone(),
                api_key.clone(),
            )))
        }
    }
}

/// Initializes application state
///
/// # Returns
///
/// * `Result<web::ThinData<AppState>>` - Initialized application state
///
/// # Errors
///
/// Returns error if:
/// - The Redis connection cannot be established
/// - Repository initialization fails
/// - The auth provider is misconfigured
pub async fn initialize_app_state(
    server_config: Arc<ServerConfig>,
    config_file: &Config,
) -> Result<web::ThinData<DefaultAppState>> {
    let auth_provider = initialize_auth_provider(&server_config, config_file)?;
    let connection_manager = redis_connection_if_needed(&server_config).await?;
    let repositories = initialize_repositories(&server_config, connection_manager.clone())?;
    let key_value_store = initialize_favorites_store(&server_config, connection_manager)?;

    let app_state = web::ThinData(AppState {
        cat_repository: repositories.cat,
        application_repository: repositories.application,
        shelter_repository: repositories.shelter,
        user_role_repository: repositories.user_role,
        key_value_store: Arc::new(key_value_store),
        auth_provider: Arc::new(auth_provider),
        role_resolution_timeout: Duration::from_millis(server_config.role_resolution_timeout_ms),
    });

    Ok(app_state)
}
