//! Configuration for the adoption service.
//!
//! This module handles:
//! - Server settings read from environment variables
//! - Loading and validating the seed configuration file
//! - Rate limiting
//!
//! # Structure
//!
//! The seed file is organized into sections:
//! - Shelters: Organizations new cats are attributed to
//! - Cats: Initial catalog records
//! - User roles: Role assignments per user id
//! - Sessions: Access tokens for the in-memory auth provider
mod server_config;
pub use server_config::*;

mod config_file;
pub use config_file::*;

mod rate_limit;
pub use rate_limit::*;

mod error;
pub use error::*;
