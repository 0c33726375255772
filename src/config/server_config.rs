/// Configuration for the server, read from environment variables.
use std::{env, str::FromStr};

use strum::{Display, EnumString};

use crate::constants::DEFAULT_ROLE_RESOLUTION_TIMEOUT_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RepositoryStorageType {
    #[default]
    InMemory,
    Redis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FavoritesStorageType {
    #[default]
    InMemory,
    File,
    Redis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AuthProviderType {
    #[default]
    InMemory,
    Remote,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// The host address the server will bind to.
    pub host: String,
    /// The port number the server will listen on.
    pub port: u16,
    /// The file path to the seed configuration file.
    pub config_file_path: String,
    /// Backend for cats, applications, shelters and roles.
    pub repository_storage_type: RepositoryStorageType,
    /// The URL for the Redis instance.
    pub redis_url: String,
    /// Prefix for every Redis key written by the service.
    pub redis_key_prefix: String,
    pub redis_connection_timeout_ms: u64,
    /// Backend for per-device favorites.
    pub favorites_storage_type: FavoritesStorageType,
    /// Directory for file-backed favorites.
    pub favorites_data_dir: String,
    pub auth_provider_type: AuthProviderType,
    /// Base URL of the remote auth service.
    pub auth_url: Option<String>,
    /// Project API key sent to the remote auth service.
    pub auth_api_key: Option<String>,
    /// How long the staff gate waits for roles to load.
    pub role_resolution_timeout_ms: u64,
    /// The number of requests allowed per second.
    pub rate_limit_requests_per_second: u64,
    /// The maximum burst size for rate limiting.
    pub rate_limit_burst_size: u32,
}

fn parsed_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

fn non_empty(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

impl ServerConfig {
    /// Creates a new `ServerConfig` instance from environment variables.
    ///
    /// # Defaults
    ///
    /// - `HOST` defaults to `"0.0.0.0"`.
    /// - `APP_PORT` defaults to `8080`.
    /// - `CONFIG_DIR` defaults to `"./config"` and `CONFIG_FILE_NAME` to `"config.json"`.
    /// - `REPOSITORY_STORAGE_TYPE`, `FAVORITES_STORAGE_TYPE` and `AUTH_PROVIDER` default to `in_memory`.
    /// - `REDIS_URL` defaults to `"redis://127.0.0.1:6379"`, `REDIS_KEY_PREFIX` to `"meowmatch"`.
    /// - `FAVORITES_DATA_DIR` defaults to `"./data/favorites"`.
    /// - `ROLE_RESOLUTION_TIMEOUT_MS` defaults to `3000`.
    /// - `RATE_LIMIT_REQUESTS_PER_SECOND` defaults to `100`.
    /// - `RATE_LIMIT_BURST_SIZE` defaults to `300`.
    ///
    /// Values that fail to parse fall back to their default.
    pub fn from_env() -> Self {
        let conf_dir = env::var("CONFIG_DIR").unwrap_or_else(|_| "./config".to_string());
        let conf_dir = format!("{}/", conf_dir.trim_end_matches('/'));
        let config_file_name =
            env::var("CONFIG_FILE_NAME").unwrap_or_else(|_| "config.json".to_string());

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parsed_or("APP_PORT", 8080),
            config_file_path: format!("{}{}", conf_dir, config_file_name),
            repository_storage_type: parsed_or(
                "REPOSITORY_STORAGE_TYPE",
                RepositoryStorageType::InMemory,
            ),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://127.0.0.1:6379".to_string()),
            redis_key_prefix: non_empty("REDIS_KEY_PREFIX")
                .unwrap_or_else(|| "meowmatch".to_string()),
            redis_connection_timeout_ms: parsed_or("REDIS_CONNECTION_TIMEOUT_MS", 10000),
            favorites_storage_type: parsed_or(
                "FAVORITES_STORAGE_TYPE",
                FavoritesStorageType::InMemory,
            ),
            favorites_data_dir: non_empty("FAVORITES_DATA_DIR")
                .unwrap_or_else(|| "./data/favorites".to_string()),
            auth_provider_type: parsed_or("AUTH_PROVIDER", AuthProviderType::InMemory),
            auth_url: non_empty("AUTH_URL"),
            auth_api_key: non_empty("AUTH_API_KEY"),
            role_resolution_timeout_ms: parsed_or(
                "ROLE_RESOLUTION_TIMEOUT_MS",
                DEFAULT_ROLE_RESOLUTION_TIMEOUT_MS,
            ),
            rate_limit_requests_per_second: parsed_or("RATE_LIMIT_REQUESTS_PER_SECOND", 100),
            rate_limit_burst_size: parsed_or("RATE_LIMIT_BURST_SIZE", 300),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazy_static::lazy_static;
    use std::env;
    use std::sync::Mutex;

    // Use a mutex to ensure tests don't run in parallel when modifying env vars
    lazy_static! {
        static ref ENV_MUTEX: Mutex<()> = Mutex::new(());
    }

    const VARS: &[&str] = &[
        "HOST",
        "APP_PORT",
        "CONFIG_DIR",
        "CONFIG_FILE_NAME",
        "REPOSITORY_STORAGE_TYPE",
        "REDIS_URL",
        "REDIS_KEY_PREFIX",
        "REDIS_CONNECTION_TIMEOUT_MS",
        "FAVORITES_STORAGE_TYPE",
        "FAVORITES_DATA_DIR",
        "AUTH_PROVIDER",
        "AUTH_URL",
        "AUTH_API_KEY",
        "ROLE_RESOLUTION_TIMEOUT_MS",
        "RATE_LIMIT_REQUESTS_PER_SECOND",
        "RATE_LIMIT_BURST_SIZE",
    ];

    fn setup() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_default_values() {
        let _lock = ENV_MUTEX.lock().unwrap();
        setup();

        let config = ServerConfig::from_env();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.config_file_path, "./config/config.json");
        assert_eq!(
            config.repository_storage_type,
            RepositoryStorageType::InMemory
        );
        assert_eq!(config.redis_url, "redis://127.0.0.1:6379");
        assert_eq!(config.redis_key_prefix, "meowmatch");
        assert_eq!(config.favorites_storage_type, FavoritesStorageType::InMemory);
        assert_eq!(config.favorites_data_dir, "./data/favorites");
        assert_eq!(config.auth_provider_type, AuthProviderType::InMemory);
        assert_eq!(config.auth_url, None);
        assert_eq!(config.role_resolution_timeout_ms, 3000);
        assert_eq!(config.rate_limit_requests_per_second, 100);
        assert_eq!(config.rate_limit_burst_size, 300);
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let _lock = ENV_MUTEX.lock().unwrap();
        setup();
        env::set_var("APP_PORT", "not_a_number");
        env::set_var("REPOSITORY_STORAGE_TYPE", "postgres");
        env::set_var("ROLE_RESOLUTION_TIMEOUT_MS", "soon");
        env::set_var("RATE_LIMIT_REQUESTS_PER_SECOND", "invalid");
        env::set_var("RATE_LIMIT_BURST_SIZE", "invalid");
        env::set_var("AUTH_URL", "   ");

        let config = ServerConfig::from_env();

        // Should fall back to defaults when parsing fails
        assert_eq!(config.port, 8080);
        assert_eq!(
            config.repository_storage_type,
            RepositoryStorageType::InMemory
        );
        assert_eq!(config.role_resolution_timeout_ms, 3000);
        assert_eq!(config.rate_limit_requests_per_second, 100);
        assert_eq!(config.rate_limit_burst_size, 300);
        assert_eq!(config.auth_url, None);
    }

    #[test]
    fn test_custom_values() {
        let _lock = ENV_MUTEX.lock().unwrap();
        setup();

        env::set_var("HOST", "127.0.0.1");
        env::set_var("APP_PORT", "9090");
        env::set_var("CONFIG_DIR", "custom/");
        env::set_var("CONFIG_FILE_NAME", "seed.json");
        env::set_var("REPOSITORY_STORAGE_TYPE", "redis");
        env::set_var("REDIS_URL", "redis://custom:6379");
        env::set_var("REDIS_KEY_PREFIX", "shelter-a");
        env::set_var("FAVORITES_STORAGE_TYPE", "File");
        env::set_var("FAVORITES_DATA_DIR", "/var/lib/meowmatch");
        env::set_var("AUTH_PROVIDER", "remote");
        env::set_var("AUTH_URL", "https://auth.example.com");
        env::set_var("AUTH_API_KEY", "anon-key");
        env::set_var("ROLE_RESOLUTION_TIMEOUT_MS", "500");
        env::set_var("RATE_LIMIT_REQUESTS_PER_SECOND", "200");
        env::set_var("RATE_LIMIT_BURST_SIZE", "500");

        let config = ServerConfig::from_env();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9090);
        assert_eq!(config.config_file_path, "custom/seed.json");
        assert_eq!(config.repository_storage_type, RepositoryStorageType::Redis);
        assert_eq!(config.redis_url, "redis://custom:6379");
        assert_eq!(config.redis_key_prefix, "shelter-a");
        assert_eq!(config.favorites_storage_type, FavoritesStorageType::File);
        assert_eq!(config.favorites_data_dir, "/var/lib/meowmatch");
        assert_eq!(config.auth_provider_type, AuthProviderType::Remote);
        assert_eq!(config.auth_url.as_deref(), Some("https://auth.example.com"));
        assert_eq!(config.auth_api_key.as_deref(), Some("anon-key"));
        assert_eq!(config.role_resolution_timeout_ms, 500);
        assert_eq!(config.rate_limit_requests_per_second, 200);
        assert_eq!(config.rate_limit_burst_size, 500);

        setup();
    }
}
