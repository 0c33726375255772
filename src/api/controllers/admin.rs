//! # Admin Controller
//!
//! Staff-only endpoints. Every handler first resolves the caller's session and
//! roles through the staff gate; the editor checks the roles again before
//! touching any record.
//!
//! The dashboard answers a browser, so a refused visitor is redirected to the sign
//! in page. The JSON endpoints answer `401` when there is no valid session and
//! `403` when the session lacks a staff role.

use actix_web::{http::header, HttpResponse};
use log::{debug, warn};

use crate::{
    constants::AUTH_REDIRECT_PATH,
    models::{
        AdminDashboardResponse, ApiError, ApiResponse, AuthUser, CatRequest, RoleSet,
        ThinDataAppState,
    },
    services::{AccessDecision, DeleteConfirmation},
};

/// Resolved identity of a member of staff that passed the gate.
#[derive(Debug, Clone)]
pub struct StaffCaller {
    pub user: AuthUser,
    pub roles: RoleSet,
}

/// Resolves the session behind `access_token` and applies the staff gate.
///
/// A gate still pending when the role resolution timeout elapses is refused.
pub async fn authorize_staff(
    access_token: &str,
    state: &ThinDataAppState,
) -> Result<StaffCaller, ApiError> {
    let session = state.auth_session(access_token.to_string());
    let resolved = session.resolved(state.role_resolution_timeout).await;

    match (resolved.staff_access(), resolved.user()) {
        (AccessDecision::Granted, Some(user)) => Ok(StaffCaller {
            user: user.clone(),
            roles: resolved.roles.clone(),
        }),
        (AccessDecision::Pending, _) => {
            warn!("Staff gate timed out while resolving session");
            Err(ApiError::Unauthorized(
                "Session could not be verified in time".to_string(),
            ))
        }
        (_, None) => Err(ApiError::Unauthorized(
            "Invalid or expired session".to_string(),
        )),
        (_, Some(user)) => {
            debug!("User {} refused by the staff gate", user.id);
            Err(ApiError::Forbidden(
                "Admin or shelter staff role required".to_string(),
            ))
        }
    }
}

fn redirect_to_sign_in() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, AUTH_REDIRECT_PATH))
        .finish()
}

/// Renders the dashboard for staff. Anyone else is redirected to the sign in page
/// and sees none of the management controls.
pub async fn dashboard(
    access_token: Option<String>,
    state: ThinDataAppState,
) -> Result<HttpResponse, ApiError> {
    let Some(access_token) = access_token else {
        return Ok(redirect_to_sign_in());
    };
    let caller = match authorize_staff(&access_token, &state).await {
        Ok(caller) => caller,
        Err(ApiError::Unauthorized(_)) | Err(ApiError::Forbidden(_)) => {
            return Ok(redirect_to_sign_in())
        }
        Err(e) => return Err(e),
    };

    let cats = state.admin_editor().list(&caller.roles).await?;
    let dashboard = AdminDashboardResponse::new(caller.user, caller.roles, cats);
    Ok(HttpResponse::Ok().json(ApiResponse::success(dashboard)))
}

/// Lists every record, available or not.
pub async fn list_cats(
    access_token: String,
    state: ThinDataAppState,
) -> Result<HttpResponse, ApiError> {
    let caller = authorize_staff(&access_token, &state).await?;
    let cats = state.admin_editor().list(&caller.roles).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(cats)))
}

pub async fn create_cat(
    access_token: String,
    request: CatRequest,
    state: ThinDataAppState,
) -> Result<HttpResponse, ApiError> {
    let caller = authorize_staff(&access_token, &state).await?;
    let cat = state.admin_editor().create(&caller.roles, request).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(cat)))
}

pub async fn update_cat(
    access_token: String,
    cat_id: String,
    request: CatRequest,
    state: ThinDataAppState,
) -> Result<HttpResponse, ApiError> {
    let caller = authorize_staff(&access_token, &state).await?;
    let cat = state
        .admin_editor()
        .update(&caller.roles, &cat_id, request)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(cat)))
}

pub async fn delete_cat(
    access_token: String,
    cat_id: String,
    confirm: Option<bool>,
    state: ThinDataAppState,
) -> Result<HttpResponse, ApiError> {
    let caller = authorize_staff(&access_token, &state).await?;
    state
        .admin_editor()
        .delete(
            &caller.roles,
            &cat_id,
            DeleteConfirmation::from_query(confirm),
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::no_data()))
}
