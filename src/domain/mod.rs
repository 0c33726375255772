//! # Domain Module
//!
//! Core catalog logic, independent of storage and HTTP:
//!
//! * Filter predicate evaluation over cat lists
//! * The per-device favorites store

mod filter;
pub use filter::*;

mod favorites;
pub use favorites::*;
