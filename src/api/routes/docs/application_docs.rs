use crate::models::{AdoptionApplicationRequest, AdoptionApplicationResponse, ApiResponse};

/// Submits an adoption application for an available cat.
#[utoipa::path(
  post,
  path = "/api/v1/cats/{cat_id}/applications",
  tag = "Applications",
  operation_id = "submitApplication",
  params(
      ("cat_id" = String, Path, description = "The cat being applied for")
  ),
  request_body = AdoptionApplicationRequest,
  responses(
      (
          status = 201,
          description = "Application recorded",
          body = ApiResponse<AdoptionApplicationResponse>
      ),
      (
          status = 400,
          description = "First invalid form field",
          body = ApiResponse<String>,
          example = json!({
              "success": false,
              "error": "Phone must be between 10 and 20 characters",
              "data": null
          })
      ),
      (
          status = 404,
          description = "Unknown or unavailable cat",
          body = ApiResponse<String>
      ),
      (
          status = 500,
          description = "Internal Server Error",
          body = ApiResponse<String>
      )
  )
)]
#[allow(dead_code)]
fn doc_submit_application() {}
