//! # Adoption Applications Controller
use actix_web::HttpResponse;

use crate::models::{AdoptionApplicationRequest, ApiError, ApiResponse, ThinDataAppState};

/// Submits an application for an available cat.
///
/// The form is validated before the cat is looked up, so an invalid form for an
/// unknown cat reports the form error.
pub async fn submit_application(
    cat_id: String,
    request: AdoptionApplicationRequest,
    state: ThinDataAppState,
) -> Result<HttpResponse, ApiError> {
    let response = state.adoption_service().submit(&cat_id, request).await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(response)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        repositories::ApplicationRepository,
        utils::mocks::mockutils::{create_mock_app_state, create_mock_cat},
    };
    use actix_web::http::StatusCode;
    use chrono::Utc;

    fn request() -> AdoptionApplicationRequest {
        AdoptionApplicationRequest {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-010-0100".to_string(),
            location: "Portland, OR".to_string(),
            message: "We have a quiet home and a big sunny window.".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_submit_application_created() {
        let state =
            create_mock_app_state(Some(vec![create_mock_cat("1", true, Utc::now())])).await;

        let response = submit_application("1".to_string(), request(), state.clone())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(state.application_repository.count().await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_submit_application_for_unavailable_cat() {
        let state =
            create_mock_app_state(Some(vec![create_mock_cat("1", false, Utc::now())])).await;

        let error = submit_application("1".to_string(), request(), state.clone())
            .await
            .unwrap_err();

        assert!(matches!(error, ApiError::NotFound(_)));
        assert_eq!(state.application_repository.count().await.unwrap(), 0);
    }
}
