//! Adoption application model.
//!
//! An application is written once per submission and never edited or removed here.

mod request;
pub use request::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct AdoptionApplication {
    pub id: String,
    pub cat_id: String,
    pub applicant_name: String,
    pub applicant_email: String,
    pub applicant_phone: String,
    pub applicant_location: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Returned to the applicant after a successful submission.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct AdoptionApplicationResponse {
    pub id: String,
    pub cat_id: String,
    pub cat_name: String,
    pub created_at: DateTime<Utc>,
}

impl AdoptionApplicationResponse {
    pub fn new(application: &AdoptionApplication, cat_name: &str) -> Self {
        Self {
            id: application.id.clone(),
            cat_id: application.cat_id.clone(),
            cat_name: cat_name.to_string(),
            created_at: application.created_at,
        }
    }
}
