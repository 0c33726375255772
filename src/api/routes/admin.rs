//! This module defines the HTTP routes for the staff dashboard and cat record
//! management. Every route authenticates with a bearer token.

use crate::{
    api::controllers::admin,
    models::{ApiError, CatRequest, DefaultAppState, DeleteCatQuery},
    utils::{bearer_token, require_bearer_token},
};
use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse, Responder};

/// Staff dashboard. Visitors without a staff session are redirected to sign in.
#[get("/admin")]
async fn dashboard(req: HttpRequest, data: web::ThinData<DefaultAppState>) -> impl Responder {
    admin::dashboard(bearer_token(req.headers()), data).await
}

/// Lists every cat record, including unavailable ones.
#[get("/admin/cats")]
async fn list_cats(
    req: HttpRequest,
    data: web::ThinData<DefaultAppState>,
) -> Result<HttpResponse, ApiError> {
    admin::list_cats(require_bearer_token(&req)?, data).await
}

#[post("/admin/cats")]
async fn create_cat(
    req: HttpRequest,
    request: web::Json<CatRequest>,
    data: web::ThinData<DefaultAppState>,
) -> Result<HttpResponse, ApiError> {
    admin::create_cat(require_bearer_token(&req)?, request.into_inner(), data).await
}

#[put("/admin/cats/{cat_id}")]
async fn update_cat(
    req: HttpRequest,
    cat_id: web::Path<String>,
    request: web::Json<CatRequest>,
    data: web::ThinData<DefaultAppState>,
) -> Result<HttpResponse, ApiError> {
    admin::update_cat(
        require_bearer_token(&req)?,
        cat_id.into_inner(),
        request.into_inner(),
        data,
    )
    .await
}

/// Deletes a cat record. Requires `?confirm=true`.
#[delete("/admin/cats/{cat_id}")]
async fn delete_cat(
    req: HttpRequest,
    cat_id: web::Path<String>,
    query: web::Query<DeleteCatQuery>,
    data: web::ThinData<DefaultAppState>,
) -> Result<HttpResponse, ApiError> {
    admin::delete_cat(
        require_bearer_token(&req)?,
        cat_id.into_inner(),
        query.into_inner().confirm,
        data,
    )
    .await
}

/// Configures the admin routes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(dashboard)
        .service(list_cats)
        .service(create_cat)
        .service(update_cat)
        .service(delete_cat);
}
