//! # Favorites Controller
//!
//! Favorites belong to a device, identified by the `X-Device-Id` header. Every
//! mutation rewrites the device's whole set.

use actix_web::HttpResponse;
use log::debug;

use crate::{
    metrics::record_favorite_toggle,
    models::{
        ApiError, ApiResponse, FavoriteToggleResponse, FavoritesRequest, FavoritesResponse,
        ThinDataAppState,
    },
};

pub async fn get_favorites(
    device_id: String,
    state: ThinDataAppState,
) -> Result<HttpResponse, ApiError> {
    let favorites = state.favorites_store().load(&device_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(FavoritesResponse::from(favorites))))
}

/// Replaces the device's favorites with the given ids.
pub async fn replace_favorites(
    device_id: String,
    request: FavoritesRequest,
    state: ThinDataAppState,
) -> Result<HttpResponse, ApiError> {
    let favorites = request.into_set();
    state.favorites_store().save(&device_id, &favorites).await?;
    debug!("Saved {} favorites for device {}", favorites.len(), device_id);

    Ok(HttpResponse::Ok().json(ApiResponse::success(FavoritesResponse::from(favorites))))
}

pub async fn clear_favorites(
    device_id: String,
    state: ThinDataAppState,
) -> Result<HttpResponse, ApiError> {
    state.favorites_store().clear(&device_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(FavoritesResponse::default())))
}

/// Adds `cat_id` to the device's favorites, or removes it when already present.
pub async fn toggle_favorite(
    device_id: String,
    cat_id: String,
    state: ThinDataAppState,
) -> Result<HttpResponse, ApiError> {
    let favorites = state.favorites_store().toggle(&device_id, &cat_id).await?;
    let response = FavoriteToggleResponse::new(&cat_id, favorites);
    record_favorite_toggle(response.is_favorite);

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}
