//! Initialization routines for the adoption service
//!
//! This module contains functions for building the application state from the
//! server configuration and seeding it from the configuration file.
//!
//! # Submodules
//!
//! - `config_processor`: Functions for processing configuration files
//! - `initialize_app_state`: Functions for initializing application state
mod config_processor;
pub use config_processor::*;

mod initialize_app_state;
pub use initialize_app_state::*;
