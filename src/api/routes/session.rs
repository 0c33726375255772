//! This module defines the HTTP routes for session introspection and sign-out.

use crate::{
    api::controllers::session,
    models::{ApiError, DefaultAppState},
    utils::{bearer_token, require_bearer_token},
};
use actix_web::{get, post, web, HttpRequest, HttpResponse, Responder};

/// Describes the caller's session. Anonymous without a bearer token.
#[get("/session")]
async fn get_session(req: HttpRequest, data: web::ThinData<DefaultAppState>) -> impl Responder {
    session::get_session(bearer_token(req.headers()), data).await
}

#[post("/session/sign-out")]
async fn sign_out(
    req: HttpRequest,
    data: web::ThinData<DefaultAppState>,
) -> Result<HttpResponse, ApiError> {
    session::sign_out(require_bearer_token(&req)?, data).await
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(get_session).service(sign_out);
}
