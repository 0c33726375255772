use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::RoleSet;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub struct AuthUser {
    pub id: String,
    #[serde(default)]
    #[schema(nullable = false)]
    pub email: Option<String>,
}

/// An authenticated session as issued by the auth service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Session {
    pub access_token: String,
    pub user: AuthUser,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires_at| expires_at <= now)
    }
}

/// Session introspection result. The access token itself is never echoed back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct SessionResponse {
    pub authenticated: bool,
    #[schema(nullable = false)]
    pub user: Option<AuthUser>,
    pub roles: RoleSet,
    pub is_admin: bool,
    pub is_shelter_staff: bool,
}

impl SessionResponse {
    pub fn anonymous() -> Self {
        Self {
            authenticated: false,
            user: None,
            roles: RoleSet::empty(),
            is_admin: false,
            is_shelter_staff: false,
        }
    }

    pub fn authenticated(user: AuthUser, roles: RoleSet) -> Self {
        Self {
            authenticated: true,
            user: Some(user),
            is_admin: roles.is_admin(),
            is_shelter_staff: roles.is_shelter_staff(),
            roles,
        }
    }
}
