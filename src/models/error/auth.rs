use serde::Serialize;
use thiserror::Error;

use crate::models::ApiError;

#[derive(Error, Debug, Clone, Serialize, PartialEq)]
pub enum AuthError {
    #[error("Auth service unavailable: {0}")]
    Unavailable(String),

    #[error("Unexpected auth service response: {0}")]
    UnexpectedResponse(String),

    #[error("Session has expired")]
    SessionExpired,

    #[error("Role lookup failed: {0}")]
    RoleLookup(String),
}

impl From<reqwest::Error> for AuthError {
    fn from(error: reqwest::Error) -> Self {
        AuthError::Unavailable(error.to_string())
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::SessionExpired => ApiError::Unauthorized("Session has expired".to_string()),
            _ => ApiError::Unauthorized("Unable to verify session".to_string()),
        }
    }
}
