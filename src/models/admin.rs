use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::{AuthUser, Cat, RoleSet};

/// What the admin dashboard renders for an authorized member of staff.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, ToSchema)]
pub struct AdminDashboardResponse {
    pub user: AuthUser,
    pub roles: RoleSet,
    pub is_admin: bool,
    pub is_shelter_staff: bool,
    /// Every record, available or not, most recent first.
    pub cats: Vec<Cat>,
}

impl AdminDashboardResponse {
    pub fn new(user: AuthUser, roles: RoleSet, cats: Vec<Cat>) -> Self {
        Self {
            user,
            is_admin: roles.is_admin(),
            is_shelter_staff: roles.is_shelter_staff(),
            roles,
            cats,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DeleteCatQuery {
    /// Must be `true` for the record to be deleted.
    pub confirm: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    #[test]
    fn test_dashboard_flags_follow_roles() {
        let user = AuthUser {
            id: "staff-1".to_string(),
            email: None,
        };
        let dashboard =
            AdminDashboardResponse::new(user, RoleSet::new([UserRole::ShelterStaff]), vec![]);

        assert!(!dashboard.is_admin);
        assert!(dashboard.is_shelter_staff);
    }
}
