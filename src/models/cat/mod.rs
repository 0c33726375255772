//! Cat domain model.
//!
//! A [`Cat`] is one adoptable animal. Enumerated attributes ([`CatAge`], [`CatSize`],
//! [`CatGender`]) are typed, so a stored cat can never carry a value outside its
//! enumeration: raw strings only exist on [`CatRequest`] and are checked before
//! conversion. Records are created and edited by shelter staff; the public catalog only
//! reads them and only shows those with `is_available` set.

mod request;
pub use request::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};
use utoipa::ToSchema;

#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    ToSchema,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CatAge {
    Kitten,
    Young,
    Adult,
    Senior,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    ToSchema,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CatSize {
    Small,
    Medium,
    Large,
}

#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Hash,
    ToSchema,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CatGender {
    Male,
    Female,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct Cat {
    pub id: String,
    pub name: String,
    pub age: CatAge,
    pub color: String,
    pub size: CatSize,
    pub gender: CatGender,
    #[serde(default)]
    pub personality: Vec<String>,
    #[serde(default)]
    pub good_with: Vec<String>,
    pub description: String,
    pub image_url: String,
    pub is_available: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(nullable = false)]
    pub shelter_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Cat {
    /// Builds a record from validated attributes.
    pub fn new(
        id: String,
        attributes: CatAttributes,
        shelter_id: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: attributes.name,
            age: attributes.age,
            color: attributes.color,
            size: attributes.size,
            gender: attributes.gender,
            personality: attributes.personality,
            good_with: attributes.good_with,
            description: attributes.description,
            image_url: attributes.image_url,
            is_available: attributes.is_available,
            shelter_id,
            created_at,
        }
    }

    /// Replaces every editable attribute, keeping identity, attribution and creation time.
    pub fn with_attributes(&self, attributes: CatAttributes) -> Self {
        Self::new(
            self.id.clone(),
            attributes,
            self.shelter_id.clone(),
            self.created_at,
        )
    }

    pub fn has_personality(&self, tag: &str) -> bool {
        self.personality.iter().any(|t| t == tag)
    }

    pub fn is_good_with(&self, tag: &str) -> bool {
        self.good_with.iter().any(|t| t == tag)
    }
}
