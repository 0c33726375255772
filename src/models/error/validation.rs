//! Field-level validation failures shared by every write request.
//!
//! Requests are validated with the `validator` crate, which reports all failing
//! fields at once in an unordered map. Callers only ever surface one problem, so
//! [`FieldValidationError::first_of`] picks the first failing field according to the
//! order in which the form presents them.
use thiserror::Error;
use validator::ValidationErrors;

use crate::models::ApiError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Picks the first failing rule, walking `field_order` before any remaining field.
    pub fn first_of(errors: &ValidationErrors, field_order: &[&str]) -> Self {
        let field_errors = errors.field_errors();

        for field in field_order {
            if let Some(error) = field_errors.get(*field).and_then(|errors| errors.first()) {
                return Self::new(*field, describe(field, error));
            }
        }

        // Fields outside the declared order, sorted for a stable report
        let mut remaining: Vec<_> = field_errors.iter().collect();
        remaining.sort_by(|(a, _), (b, _)| a.cmp(b));
        remaining
            .into_iter()
            .find_map(|(field, errors)| {
                errors
                    .first()
                    .map(|error| Self::new(field.to_string(), describe(field, error)))
            })
            .unwrap_or_else(|| Self::new("request", "Request is invalid"))
    }
}

fn describe(field: &str, error: &validator::ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|message| message.to_string())
        .unwrap_or_else(|| format!("{} is invalid ({})", field, error.code))
}

impl From<FieldValidationError> for ApiError {
    fn from(error: FieldValidationError) -> Self {
        ApiError::BadRequest(error.message)
    }
}
