use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::ApiResponse;

#[derive(Error, Debug, PartialEq)]
pub enum ApiError {
    #[error("Internal Server Error: {0}")]
    InternalError(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::InternalError(msg) => {
                HttpResponse::InternalServerError().json(ApiResponse::<()>::error(msg))
            }
            ApiError::NotFound(msg) => HttpResponse::NotFound().json(ApiResponse::<()>::error(msg)),
            ApiError::BadRequest(msg) => {
                HttpResponse::BadRequest().json(ApiResponse::<()>::error(msg))
            }
            ApiError::Unauthorized(msg) => {
                HttpResponse::Unauthorized().json(ApiResponse::<()>::error(msg))
            }
            ApiError::Forbidden(msg) => {
                HttpResponse::Forbidden().json(ApiResponse::<()>::error(msg))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, http::StatusCode};

    #[actix_web::test]
    async fn test_error_status_codes() {
        let cases = vec![
            (ApiError::InternalError("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ApiError::NotFound("cat".into()), StatusCode::NOT_FOUND),
            (ApiError::BadRequest("bad".into()), StatusCode::BAD_REQUEST),
            (ApiError::Unauthorized("who".into()), StatusCode::UNAUTHORIZED),
            (ApiError::Forbidden("no".into()), StatusCode::FORBIDDEN),
        ];

        for (error, expected) in cases {
            assert_eq!(error.error_response().status(), expected);
        }
    }

    #[actix_web::test]
    async fn test_error_body_uses_envelope() {
        let response = ApiError::NotFound("Cat with ID '9' not found".into()).error_response();
        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Cat with ID '9' not found");
        assert!(json["data"].is_null());
    }
}
