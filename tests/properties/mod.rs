//! Property-based tests for the catalog filters, favorites and log file naming.
mod favorites;
mod filters;
mod logging;
