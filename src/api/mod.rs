//! # API Module
//!
//! HTTP surface of the adoption catalog.
//!
//! ## Structure
//!
//! * `controllers` - Request handling and business logic
//! * `routes` - API endpoint definitions and routing

pub mod controllers;

pub mod routes;
