//! # Models Module
//!
//! Contains core data structures and type definitions for the adoption service.

mod app_state;
pub use app_state::*;

mod api_response;
pub use api_response::*;

mod error;
pub use error::*;

mod cat;
pub use cat::*;

mod adoption;
pub use adoption::*;

mod filters;
pub use filters::*;

mod favorites;
pub use favorites::*;

mod shelter;
pub use shelter::*;

mod user_role;
pub use user_role::*;

mod session;
pub use session::*;

mod admin;
pub use admin::*;
