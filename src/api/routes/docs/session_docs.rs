use crate::models::{ApiResponse, SessionResponse};

/// Describes the caller's session and roles.
#[utoipa::path(
  get,
  path = "/api/v1/session",
  tag = "Session",
  operation_id = "getSession",
  security(
      (),
      ("bearer_auth" = [])
  ),
  responses(
      (status = 200, description = "Session state", body = ApiResponse<SessionResponse>)
  )
)]
#[allow(dead_code)]
fn doc_get_session() {}

/// Signs out. The token is revoked with the auth backend in the background.
#[utoipa::path(
  post,
  path = "/api/v1/session/sign-out",
  tag = "Session",
  operation_id = "signOut",
  security(
      ("bearer_auth" = [])
  ),
  responses(
      (status = 200, description = "Signed out", body = ApiResponse<SessionResponse>),
      (status = 401, description = "Missing bearer token", body = ApiResponse<String>)
  )
)]
#[allow(dead_code)]
fn doc_sign_out() {}
