use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{AdoptionApplication, FieldValidationError};

/// Order in which violations are reported, matching the application form.
pub const APPLICATION_FIELD_ORDER: &[&str] = &["name", "email", "phone", "location", "message"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct AdoptionApplicationRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name is required and must be at most 100 characters"
    ))]
    pub name: String,
    #[validate(
        email(message = "Email must be a valid email address"),
        length(max = 255, message = "Email must be at most 255 characters")
    )]
    pub email: String,
    #[validate(length(
        min = 10,
        max = 20,
        message = "Phone must be between 10 and 20 characters"
    ))]
    pub phone: String,
    #[validate(length(
        min = 1,
        max = 100,
        message = "Location is required and must be at most 100 characters"
    ))]
    pub location: String,
    #[validate(length(
        min = 10,
        max = 1000,
        message = "Message must be between 10 and 1000 characters"
    ))]
    pub message: String,
}

impl AdoptionApplicationRequest {
    fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            location: self.location.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Validates the form and builds the record to persist for `cat_id`.
    pub fn into_application(
        self,
        cat_id: &str,
    ) -> Result<AdoptionApplication, FieldValidationError> {
        let request = self.normalized();
        request
            .validate()
            .map_err(|errors| FieldValidationError::first_of(&errors, APPLICATION_FIELD_ORDER))?;

        Ok(AdoptionApplication {
            id: Uuid::new_v4().to_string(),
            cat_id: cat_id.to_string(),
            applicant_name: request.name,
            applicant_email: request.email,
            applicant_phone: request.phone,
            applicant_location: request.location,
            message: request.message,
            created_at: Utc::now(),
        })
    }
}
