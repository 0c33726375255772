//! Integration tests for the MeowMatch server, exercised through the public crate API.
mod api;
mod logging;
mod metrics;
