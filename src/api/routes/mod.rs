//! # API Routes Module
//!
//! Configures HTTP routes for the adoption service API.
//!
//! ## Routes
//!
//! * `/health` - Health check endpoints
//! * `/metrics` - Prometheus metrics
//! * `/cats` - Public catalog and adoption applications
//! * `/favorites` - Per-device favorites
//! * `/session` - Session introspection and sign-out
//! * `/admin` - Staff dashboard and cat record management

pub mod admin;
pub mod application;
pub mod cat;
pub mod docs;
pub mod favorite;
pub mod health;
pub mod metrics;
pub mod session;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::init)
        .configure(metrics::init)
        .configure(cat::init)
        .configure(application::init)
        .configure(favorite::init)
        .configure(session::init)
        .configure(admin::init);
}
