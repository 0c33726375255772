//! ## Sets up logging by reading configuration from environment variables.
//!
//! Environment variables used:
//! - LOG_MODE: "stdout" (default) or "file"
//! - LOG_LEVEL: log level ("trace", "debug", "info", "warn", "error"); default is "info"
//! - LOG_DATA_DIR: when using file mode, the directory for log files (default "./logs")
//! - LOG_MAX_SIZE: size in bytes after which a new file is started for the day (default 1GB)
//!
//! Files are named `meowmatch-YYYY-MM-DD.N.log`: one series per UTC day, with the
//! index advancing whenever the current file outgrows `LOG_MAX_SIZE`.

use chrono::Utc;
use eyre::WrapErr;
use log::info;
use simplelog::{Config, LevelFilter, SimpleLogger, WriteLogger};
use std::{
    env,
    fs::{create_dir_all, metadata, OpenOptions},
    path::{Path, PathBuf},
};

const LOG_FILE_STEM: &str = "meowmatch";
const DEFAULT_MAX_SIZE: u64 = 1_073_741_824;

#[derive(Debug, Clone, PartialEq)]
pub enum LogMode {
    Stdout,
    File { dir: PathBuf, max_size: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    pub mode: LogMode,
    pub level: LevelFilter,
}

fn parse_level(raw: &str) -> LevelFilter {
    match raw.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Info,
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        let level = parse_level(&env::var("LOG_LEVEL").unwrap_or_default());
        let file_mode = env::var("LOG_MODE")
            .map(|mode| mode.eq_ignore_ascii_case("file"))
            .unwrap_or(false);

        let mode = if file_mode {
            let dir = env::var("LOG_DATA_DIR").unwrap_or_else(|_| "./logs".to_string());
            let max_size = env::var("LOG_MAX_SIZE")
                .ok()
                .and_then(|size| size.parse().ok())
                .unwrap_or(DEFAULT_MAX_SIZE);
            LogMode::File {
                dir: PathBuf::from(dir),
                max_size,
            }
        } else {
            LogMode::Stdout
        };

        Self { mode, level }
    }
}

/// Path of the `index`-th log file of the day in `dir`.
pub fn rolled_file_path(dir: &Path, date_str: &str, index: u32) -> PathBuf {
    dir.join(format!("{}-{}.{}.log", LOG_FILE_STEM, date_str, index))
}

/// First file of the day that is missing or still below `max_size` bytes.
pub fn current_log_file(dir: &Path, date_str: &str, max_size: u64) -> PathBuf {
    let mut index = 1;
    loop {
        let path = rolled_file_path(dir, date_str, index);
        match metadata(&path) {
            Ok(existing) if existing.len() > max_size => index += 1,
            _ => return path,
        }
    }
}

/// Installs the global logger described by the environment.
///
/// # Errors
/// Fails when the log directory or file cannot be created, or a logger is already
/// installed.
pub fn setup_logging() -> eyre::Result<()> {
    let config = LoggingConfig::from_env();

    match &config.mode {
        LogMode::Stdout => SimpleLogger::init(config.level, Config::default())
            .wrap_err("Failed to initialize stdout logger")?,
        LogMode::File { dir, max_size } => {
            create_dir_all(dir)
                .wrap_err_with(|| format!("Failed to create log directory {}", dir.display()))?;

            let date_str = Utc::now().format("%Y-%m-%d").to_string();
            let path = current_log_file(dir, &date_str, *max_size);
            let log_file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .wrap_err_with(|| format!("Unable to open log file {}", path.display()))?;

            WriteLogger::init(config.level, Config::default(), log_file)
                .wrap_err("Failed to initialize file logger")?;
            info!("Logging to file {}", path.display());
        }
    }

    info!("Logging is successfully configured (level: {})", config.level);
    Ok(())
}
