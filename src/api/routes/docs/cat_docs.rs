use crate::models::{ApiResponse, Cat, CatFilterQuery, FilterOptions};

/// Cat routes implementation
///
/// Note: OpenAPI documentation for these endpoints can be found in the `openapi.rs` file
///
/// Lists available cats matching the filters.
#[utoipa::path(
  get,
  path = "/api/v1/cats",
  tag = "Cats",
  operation_id = "listCats",
  params(
      CatFilterQuery,
      ("X-Device-Id" = Option<String>, Header, description = "Device whose favorites back `favorites_only`")
  ),
  responses(
      (
          status = 200,
          description = "Available cats, most recent first",
          body = ApiResponse<Vec<Cat>>
      ),
      (
          status = 400,
          description = "Unknown filter value or malformed device id",
          body = ApiResponse<String>,
          example = json!({
              "success": false,
              "error": "Invalid size filter 'huge', expected one of: small, medium, large",
              "data": null
          })
      )
  )
)]
#[allow(dead_code)]
fn doc_list_cats() {}

/// Lists the values offered by the catalog filter controls.
#[utoipa::path(
  get,
  path = "/api/v1/cats/filter-options",
  tag = "Cats",
  operation_id = "getFilterOptions",
  responses(
      (status = 200, description = "Filter options", body = ApiResponse<FilterOptions>)
  )
)]
#[allow(dead_code)]
fn doc_filter_options() {}

/// Retrieves one available cat.
#[utoipa::path(
  get,
  path = "/api/v1/cats/{cat_id}",
  tag = "Cats",
  operation_id = "getCat",
  params(
      ("cat_id" = String, Path, description = "The unique identifier of the cat")
  ),
  responses(
      (status = 200, description = "Cat details", body = ApiResponse<Cat>),
      (
          status = 404,
          description = "Unknown or unavailable cat",
          body = ApiResponse<String>,
          example = json!({
              "success": false,
              "error": "Cat with ID '42' not found",
              "data": null
          })
      )
  )
)]
#[allow(dead_code)]
fn doc_get_cat() {}
