//! # Services Module
//!
//! Application services sitting between the HTTP controllers and the repositories:
//! catalog reads, adoption submissions, the admin editor and authentication.

pub mod catalog;
pub use catalog::CatalogService;

mod adoption;
pub use adoption::*;

mod admin_editor;
pub use admin_editor::*;

mod auth;
pub use auth::*;
