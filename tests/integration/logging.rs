//! Integration test for file logging.
//!
//! Only this test installs the global logger, so it runs once per test binary.
//!   Refer to `src/logging/mod.rs` for more details.
use chrono::Utc;
use meowmatch::logging::{rolled_file_path, setup_logging};
use std::{env, fs};
use tempfile::TempDir;

#[test]
fn test_setup_logging_file_mode_creates_log_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_dir = temp_dir.path().join("logs");

    env::remove_var("LOG_MAX_SIZE");
    env::set_var("LOG_MODE", "file");
    env::set_var("LOG_LEVEL", "debug");
    env::set_var("LOG_DATA_DIR", &log_dir);

    setup_logging().expect("logger should install");
    log::info!("meowmatch integration log line");

    let date_str = Utc::now().format("%Y-%m-%d").to_string();
    let expected = rolled_file_path(&log_dir, &date_str, 1);
    assert!(expected.exists(), "missing {}", expected.display());

    let contents = fs::read_to_string(&expected).unwrap();
    assert!(contents.contains("meowmatch integration log line"));

    // a second logger cannot be installed
    assert!(setup_logging().is_err());

    env::remove_var("LOG_MODE");
    env::remove_var("LOG_LEVEL");
    env::remove_var("LOG_DATA_DIR");
}
