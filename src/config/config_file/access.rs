use std::collections::HashSet;

use crate::{
    config::ConfigFileError,
    models::{Session, UserRoleAssignment},
};

pub struct UserRolesFileConfig {
    pub user_roles: Vec<UserRoleAssignment>,
}

impl UserRolesFileConfig {
    pub fn new(user_roles: Vec<UserRoleAssignment>) -> Self {
        Self { user_roles }
    }

    pub fn validate(&self) -> Result<(), ConfigFileError> {
        for assignment in &self.user_roles {
            if assignment.user_id.trim().is_empty() {
                return Err(ConfigFileError::MissingField("user_roles.user_id".into()));
            }
        }
        Ok(())
    }
}

/// Sessions preloaded into the in-memory auth provider.
pub struct SessionsFileConfig {
    pub sessions: Vec<Session>,
}

impl SessionsFileConfig {
    pub fn new(sessions: Vec<Session>) -> Self {
        Self { sessions }
    }

    pub fn validate(&self) -> Result<(), ConfigFileError> {
        let mut tokens = HashSet::new();
        for session in &self.sessions {
            if session.access_token.is_empty() || session.access_token.contains(' ') {
                return Err(ConfigFileError::InvalidIdFormat(format!(
                    "Access token of user '{}' must be non-empty and contain no spaces",
                    session.user.id
                )));
            }
            if session.user.id.trim().is_empty() {
                return Err(ConfigFileError::MissingField("sessions.user.id".into()));
            }
            if !tokens.insert(session.access_token.as_str()) {
                return Err(ConfigFileError::DuplicateId(format!(
                    "access token of user '{}'",
                    session.user.id
                )));
            }
        }
        Ok(())
    }
}
