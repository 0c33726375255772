//! Request models and validation for cat write endpoints.
//!
//! Both create and update send the complete set of editable attributes, so a single
//! [`CatRequest`] serves the two. Converting it into [`CatAttributes`] trims the input,
//! deduplicates tags and reports the first violated rule.

use std::{borrow::Cow, str::FromStr};

use serde::{Deserialize, Serialize};
use strum::VariantNames;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::{CatAge, CatGender, CatSize, FieldValidationError};

/// Order in which violations are reported, matching the editor form.
pub const CAT_FIELD_ORDER: &[&str] = &[
    "name",
    "age",
    "color",
    "size",
    "gender",
    "description",
    "image_url",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema, Validate)]
#[serde(deny_unknown_fields)]
pub struct CatRequest {
    #[validate(length(
        min = 1,
        max = 100,
        message = "Name is required and must be at most 100 characters"
    ))]
    pub name: String,
    #[validate(custom(function = "validate_age"))]
    pub age: String,
    #[validate(length(
        min = 1,
        max = 50,
        message = "Color is required and must be at most 50 characters"
    ))]
    pub color: String,
    #[validate(custom(function = "validate_size"))]
    pub size: String,
    #[validate(custom(function = "validate_gender"))]
    pub gender: String,
    #[serde(default)]
    pub personality: Vec<String>,
    #[serde(default)]
    pub good_with: Vec<String>,
    #[validate(length(
        min = 10,
        max = 500,
        message = "Description must be between 10 and 500 characters"
    ))]
    pub description: String,
    #[validate(url(message = "Image URL must be a valid URL"))]
    pub image_url: String,
    #[serde(default = "default_is_available")]
    pub is_available: bool,
}

fn default_is_available() -> bool {
    true
}

/// Validated, typed cat attributes ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct CatAttributes {
    pub name: String,
    pub age: CatAge,
    pub color: String,
    pub size: CatSize,
    pub gender: CatGender,
    pub personality: Vec<String>,
    pub good_with: Vec<String>,
    pub description: String,
    pub image_url: String,
    pub is_available: bool,
}

fn enumeration_error(code: &'static str, label: &str, allowed: &[&str]) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Owned(format!(
        "{} must be one of: {}",
        label,
        allowed.join(", ")
    )));
    error
}

fn validate_age(value: &str) -> Result<(), ValidationError> {
    CatAge::from_str(value)
        .map(|_| ())
        .map_err(|_| enumeration_error("invalid_age", "Age", CatAge::VARIANTS))
}

fn validate_size(value: &str) -> Result<(), ValidationError> {
    CatSize::from_str(value)
        .map(|_| ())
        .map_err(|_| enumeration_error("invalid_size", "Size", CatSize::VARIANTS))
}

fn validate_gender(value: &str) -> Result<(), ValidationError> {
    CatGender::from_str(value)
        .map(|_| ())
        .map_err(|_| enumeration_error("invalid_gender", "Gender", CatGender::VARIANTS))
}

/// Trims every tag, drops blanks and keeps the first occurrence of duplicates.
pub(crate) fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let tag = tag.trim().to_string();
        if !tag.is_empty() && !normalized.contains(&tag) {
            normalized.push(tag);
        }
    }
    normalized
}

impl CatRequest {
    fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            age: self.age.trim().to_lowercase(),
            color: self.color.trim().to_string(),
            size: self.size.trim().to_lowercase(),
            gender: self.gender.trim().to_lowercase(),
            personality: normalize_tags(self.personality),
            good_with: normalize_tags(self.good_with),
            description: self.description.trim().to_string(),
            image_url: self.image_url.trim().to_string(),
            is_available: self.is_available,
        }
    }
}

impl TryFrom<CatRequest> for CatAttributes {
    type Error = FieldValidationError;

    fn try_from(request: CatRequest) -> Result<Self, Self::Error> {
        let request = request.normalized();
        request
            .validate()
            .map_err(|errors| FieldValidationError::first_of(&errors, CAT_FIELD_ORDER))?;

        let age = CatAge::from_str(&request.age)
            .map_err(|_| FieldValidationError::new("age", "Age is invalid"))?;
        let size = CatSize::from_str(&request.size)
            .map_err(|_| FieldValidationError::new("size", "Size is invalid"))?;
        let gender = CatGender::from_str(&request.gender)
            .map_err(|_| FieldValidationError::new("gender", "Gender is invalid"))?;

        Ok(CatAttributes {
            name: request.name,
            age,
            color: request.color,
            size,
            gender,
            personality: request.personality,
            good_with: request.good_with,
            description: request.description,
            image_url: request.image_url,
            is_available: request.is_available,
        })
    }
}
