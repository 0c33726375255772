//! Application roles.
//!
//! Role rows are provisioned outside the application; here they are only read.

use std::collections::BTreeSet;

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
    PartialOrd,
    Ord,
    Hash,
    ToSchema,
    Display,
    EnumString,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UserRole {
    Admin,
    ShelterStaff,
    User,
}

/// The roles held by one user. May be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct RoleSet(BTreeSet<UserRole>);

impl RoleSet {
    pub fn new(roles: impl IntoIterator<Item = UserRole>) -> Self {
        Self(roles.into_iter().collect())
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, role: UserRole) -> bool {
        self.0.insert(role)
    }

    pub fn contains(&self, role: UserRole) -> bool {
        self.0.contains(&role)
    }

    pub fn is_admin(&self) -> bool {
        self.contains(UserRole::Admin)
    }

    pub fn is_shelter_staff(&self) -> bool {
        self.contains(UserRole::ShelterStaff)
    }

    /// Admins and shelter staff may edit cat records.
    pub fn can_manage_cats(&self) -> bool {
        self.is_admin() || self.is_shelter_staff()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UserRole> {
        self.0.iter()
    }
}

/// A user id together with one granted role, as stored in the seed file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct UserRoleAssignment {
    pub user_id: String,
    pub role: UserRole,
}
