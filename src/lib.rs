//! MeowMatch cat adoption service library
//!
//! This library provides the catalog, favorites, adoption application and staff
//! administration features behind the MeowMatch HTTP API. It includes:
//!
//! - Configuration from the environment and a seed JSON file
//! - A filterable public catalog of adoptable cats
//! - Per-device favorites over pluggable key-value storage
//! - Session tracking with role-based access for shelter staff
//!
//! # Module Structure
//!
//! - `api`: HTTP controllers and routes
//! - `bootstrap`: Application state construction and seeding
//! - `config`: Configuration management
//! - `domain`: Filtering and favorites logic
//! - `logging`: Logging setup
//! - `metrics`: Prometheus metrics and middleware
//! - `models`: Data structures and error types
//! - `repositories`: Storage backends
//! - `services`: Catalog, adoption, admin and auth services
//! - `utils`: Common utilities and helper functions

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod domain;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod services;
pub mod utils;

pub use models::{ApiError, AppState};
