use crate::models::{AdminDashboardResponse, ApiResponse, Cat, CatRequest, DeleteCatQuery};

/// Admin routes implementation
///
/// Note: OpenAPI documentation for these endpoints can be found in the `openapi.rs` file
///
/// Staff dashboard.
#[utoipa::path(
  get,
  path = "/api/v1/admin",
  tag = "Admin",
  operation_id = "getDashboard",
  security(
      ("bearer_auth" = [])
  ),
  responses(
      (status = 200, description = "Dashboard for staff", body = ApiResponse<AdminDashboardResponse>),
      (status = 303, description = "Not signed in as staff, redirected to /auth")
  )
)]
#[allow(dead_code)]
fn doc_dashboard() {}

/// Lists every cat record, available or not.
#[utoipa::path(
  get,
  path = "/api/v1/admin/cats",
  tag = "Admin",
  operation_id = "listAdminCats",
  security(
      ("bearer_auth" = [])
  ),
  responses(
      (status = 200, description = "All cats, most recent first", body = ApiResponse<Vec<Cat>>),
      (
          status = 401,
          description = "Unauthorized",
          body = ApiResponse<String>,
          example = json!({
              "success": false,
              "error": "Invalid or expired session",
              "data": null
          })
      ),
      (
          status = 403,
          description = "Forbidden",
          body = ApiResponse<String>,
          example = json!({
              "success": false,
              "error": "Admin or shelter staff role required",
              "data": null
          })
      )
  )
)]
#[allow(dead_code)]
fn doc_list_admin_cats() {}

/// Creates a cat record attributed to the earliest shelter.
#[utoipa::path(
  post,
  path = "/api/v1/admin/cats",
  tag = "Admin",
  operation_id = "createCat",
  security(
      ("bearer_auth" = [])
  ),
  request_body = CatRequest,
  responses(
      (status = 201, description = "Cat created", body = ApiResponse<Cat>),
      (status = 400, description = "Invalid record or no shelter", body = ApiResponse<String>),
      (status = 401, description = "Unauthorized", body = ApiResponse<String>),
      (status = 403, description = "Forbidden", body = ApiResponse<String>)
  )
)]
#[allow(dead_code)]
fn doc_create_cat() {}

/// Replaces every editable attribute of a cat record.
#[utoipa::path(
  put,
  path = "/api/v1/admin/cats/{cat_id}",
  tag = "Admin",
  operation_id = "updateCat",
  security(
      ("bearer_auth" = [])
  ),
  params(
      ("cat_id" = String, Path, description = "The unique identifier of the cat")
  ),
  request_body = CatRequest,
  responses(
      (status = 200, description = "Cat updated", body = ApiResponse<Cat>),
      (status = 400, description = "Invalid record", body = ApiResponse<String>),
      (status = 401, description = "Unauthorized", body = ApiResponse<String>),
      (status = 403, description = "Forbidden", body = ApiResponse<String>),
      (status = 404, description = "Cat not found", body = ApiResponse<String>)
  )
)]
#[allow(dead_code)]
fn doc_update_cat() {}

#[utoipa::path(
  delete,
  path = "/api/v1/admin/cats/{cat_id}",
  tag = "Admin",
  operation_id = "deleteCat",
  security(
      ("bearer_auth" = [])
  ),
  params(
      ("cat_id" = String, Path, description = "The unique identifier of the cat"),
      DeleteCatQuery
  ),
  responses(
      (status = 200, description = "Cat deleted", body = ApiResponse<String>),
      (
          status = 400,
          description = "Missing confirmation",
          body = ApiResponse<String>,
          example = json!({
              "success": false,
              "error": "Deleting a cat requires confirm=true",
              "data": null
          })
      ),
      (status = 401, description = "Unauthorized", body = ApiResponse<String>),
      (status = 403, description = "Forbidden", body = ApiResponse<String>),
      (status = 404, description = "Cat not found", body = ApiResponse<String>)
  )
)]
#[allow(dead_code)]
fn doc_delete_cat() {}
