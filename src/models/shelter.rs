use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An organization cats are attributed to when created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Shelter {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}
