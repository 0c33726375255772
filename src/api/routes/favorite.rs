//! This module defines the HTTP routes for per-device favorites.
//! Every route requires the `X-Device-Id` header.

use crate::{
    api::controllers::favorite,
    models::{ApiError, DefaultAppState, FavoritesRequest},
    utils::require_device_id,
};
use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};

#[get("/favorites")]
async fn get_favorites(
    req: HttpRequest,
    data: web::ThinData<DefaultAppState>,
) -> Result<HttpResponse, ApiError> {
    favorite::get_favorites(require_device_id(&req)?, data).await
}

/// Replaces the device's favorites.
#[put("/favorites")]
async fn replace_favorites(
    req: HttpRequest,
    request: web::Json<FavoritesRequest>,
    data: web::ThinData<DefaultAppState>,
) -> Result<HttpResponse, ApiError> {
    favorite::replace_favorites(require_device_id(&req)?, request.into_inner(), data).await
}

#[delete("/favorites")]
async fn clear_favorites(
    req: HttpRequest,
    data: web::ThinData<DefaultAppState>,
) -> Result<HttpResponse, ApiError> {
    favorite::clear_favorites(require_device_id(&req)?, data).await
}

/// Flips one cat in or out of the device's favorites.
#[post("/favorites/{cat_id}/toggle")]
async fn toggle_favorite(
    req: HttpRequest,
    cat_id: web::Path<String>,
    data: web::ThinData<DefaultAppState>,
) -> Result<HttpResponse, ApiError> {
    favorite::toggle_favorite(require_device_id(&req)?, cat_id.into_inner(), data).await
}

/// Configures the favorites routes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(get_favorites)
        .service(replace_favorites)
        .service(clear_favorites)
        .service(toggle_favorite);
}
