mod api;
pub use api::*;

mod repository;
pub use repository::*;

mod validation;
pub use validation::*;

mod auth;
pub use auth::*;
