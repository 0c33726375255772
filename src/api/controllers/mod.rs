//! # API Controllers Module
//!
//! Handles HTTP request processing and business logic coordination.
//!
//! ## Controllers
//!
//! * `cat` - Public catalog browsing
//! * `application` - Adoption applications
//! * `favorite` - Per-device favorites
//! * `session` - Session introspection and sign-out
//! * `admin` - Staff dashboard and cat record management

pub mod admin;
pub mod application;
pub mod cat;
pub mod favorite;
pub mod session;
