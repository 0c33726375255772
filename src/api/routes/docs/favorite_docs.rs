use crate::models::{ApiResponse, FavoriteToggleResponse, FavoritesRequest, FavoritesResponse};

#[utoipa::path(
  get,
  path = "/api/v1/favorites",
  tag = "Favorites",
  operation_id = "getFavorites",
  params(
      ("X-Device-Id" = String, Header, description = "Device the favorites belong to")
  ),
  responses(
      (status = 200, description = "Saved favorites", body = ApiResponse<FavoritesResponse>),
      (status = 400, description = "Missing or malformed device id", body = ApiResponse<String>)
  )
)]
#[allow(dead_code)]
fn doc_get_favorites() {}

/// Replaces the device's favorites.
#[utoipa::path(
  put,
  path = "/api/v1/favorites",
  tag = "Favorites",
  operation_id = "replaceFavorites",
  params(
      ("X-Device-Id" = String, Header, description = "Device the favorites belong to")
  ),
  request_body = FavoritesRequest,
  responses(
      (status = 200, description = "Saved favorites", body = ApiResponse<FavoritesResponse>),
      (status = 400, description = "Missing or malformed device id", body = ApiResponse<String>)
  )
)]
#[allow(dead_code)]
fn doc_replace_favorites() {}

#[utoipa::path(
  delete,
  path = "/api/v1/favorites",
  tag = "Favorites",
  operation_id = "clearFavorites",
  params(
      ("X-Device-Id" = String, Header, description = "Device the favorites belong to")
  ),
  responses(
      (status = 200, description = "Favorites cleared", body = ApiResponse<FavoritesResponse>),
      (status = 400, description = "Missing or malformed device id", body = ApiResponse<String>)
  )
)]
#[allow(dead_code)]
fn doc_clear_favorites() {}

/// Adds the cat to the favorites, or removes it when already present.
#[utoipa::path(
  post,
  path = "/api/v1/favorites/{cat_id}/toggle",
  tag = "Favorites",
  operation_id = "toggleFavorite",
  params(
      ("cat_id" = String, Path, description = "The cat to toggle"),
      ("X-Device-Id" = String, Header, description = "Device the favorites belong to")
  ),
  responses(
      (status = 200, description = "Updated favorites", body = ApiResponse<FavoriteToggleResponse>),
      (status = 400, description = "Missing or malformed device id", body = ApiResponse<String>)
  )
)]
#[allow(dead_code)]
fn doc_toggle_favorite() {}
