//! # Session Controller
use actix_web::HttpResponse;

use crate::models::{ApiError, ApiResponse, SessionResponse, ThinDataAppState};

/// Describes the session behind `access_token`. Without a token, or when the
/// token resolves to no session, the caller is anonymous.
pub async fn get_session(
    access_token: Option<String>,
    state: ThinDataAppState,
) -> Result<HttpResponse, ApiError> {
    let Some(access_token) = access_token else {
        return Ok(HttpResponse::Ok().json(ApiResponse::success(SessionResponse::anonymous())));
    };

    let session = state.auth_session(access_token);
    let resolved = session.resolved(state.role_resolution_timeout).await;

    Ok(HttpResponse::Ok().json(ApiResponse::success(resolved.to_response())))
}

/// Clears the session and revokes the token with the auth backend in the
/// background. Revocation failures are logged, never reported.
pub async fn sign_out(
    access_token: String,
    state: ThinDataAppState,
) -> Result<HttpResponse, ApiError> {
    let session = state.auth_session(access_token);
    session.sign_out();

    Ok(HttpResponse::Ok().json(ApiResponse::success(session.state().to_response())))
}
