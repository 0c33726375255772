//! Storage failures shared by every repository backend.
use log::error;
use thiserror::Error;

use crate::models::ApiError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found: {0}")]
    NotFound(String),

    #[error("Failed to connect to storage: {0}")]
    ConnectionError(String),

    /// Duplicate ids and similar write conflicts.
    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Storage operation failed: {0}")]
    Other(String),
}

/// Storage details stay in the log; clients only see a generic message.
impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound(msg) => ApiError::NotFound(msg),
            RepositoryError::ConstraintViolation(msg) => ApiError::BadRequest(msg),
            RepositoryError::ConnectionError(_) => {
                error!("Request failed: {}", error);
                ApiError::InternalError("Storage is unavailable".to_string())
            }
            other => {
                error!("Request failed: {}", other);
                ApiError::InternalError("Failed to access stored data".to_string())
            }
        }
    }
}
