//! This module defines the HTTP routes for the public cat catalog.
//! Routes read the optional `X-Device-Id` header and delegate to the cat controller.

use crate::{
    api::controllers::cat,
    models::{ApiError, CatFilterQuery, DefaultAppState},
    utils::device_id,
};
use actix_web::{get, web, HttpRequest, HttpResponse, Responder};

/// Lists available cats matching the filter query.
#[get("/cats")]
async fn list_cats(
    req: HttpRequest,
    query: web::Query<CatFilterQuery>,
    data: web::ThinData<DefaultAppState>,
) -> Result<HttpResponse, ApiError> {
    let device_id = device_id(&req)?;
    cat::list_cats(query.into_inner(), device_id, data).await
}

#[get("/cats/filter-options")]
async fn filter_options() -> impl Responder {
    cat::filter_options().await
}

/// Retrieves one available cat by ID.
#[get("/cats/{cat_id}")]
async fn get_cat(
    cat_id: web::Path<String>,
    data: web::ThinData<DefaultAppState>,
) -> impl Responder {
    cat::get_cat(cat_id.into_inner(), data).await
}

/// Configures the cat routes. `filter-options` is registered before `{cat_id}`.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list_cats)
        .service(filter_options)
        .service(get_cat);
}
