//! # Cats Controller
//!
//! Public catalog endpoints. Only available cats are ever returned.

use actix_web::HttpResponse;

use crate::models::{
    ApiError, ApiResponse, CatFilterQuery, CatalogQuery, FilterOptions, ThinDataAppState,
};

/// Lists available cats matching `query`.
///
/// With `favorites_only` the device's favorites are read first; a request without
/// a device id then yields an empty list. Storage failures also yield an empty list.
pub async fn list_cats(
    query: CatFilterQuery,
    device_id: Option<String>,
    state: ThinDataAppState,
) -> Result<HttpResponse, ApiError> {
    let query = CatalogQuery::try_from(query)?;
    let cats = state
        .catalog_service()
        .browse(&query, device_id.as_deref())
        .await;

    Ok(HttpResponse::Ok().json(ApiResponse::success(cats)))
}

pub async fn filter_options() -> Result<HttpResponse, ApiError> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(FilterOptions::default())))
}

/// Retrieves one available cat.
pub async fn get_cat(cat_id: String, state: ThinDataAppState) -> Result<HttpResponse, ApiError> {
    let cat = state.catalog_service().get_available(&cat_id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(cat)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::Cat,
        utils::mocks::mockutils::{create_mock_app_state, create_mock_cat, seed_cats},
    };
    use actix_web::body::to_bytes;
    use chrono::Utc;

    async fn body_json(response: HttpResponse) -> serde_json::Value {
        let body = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_web::test]
    async fn test_list_cats_filters_by_query() {
        let state = create_mock_app_state(Some(seed_cats())).await;
        let query = CatFilterQuery {
            color: Some("orange".to_string()),
            ..Default::default()
        };

        let response = list_cats(query, None, state).await.unwrap();
        let json = body_json(response).await;
        let cats: Vec<Cat> = serde_json::from_value(json["data"].clone()).unwrap();

        let mut names: Vec<String> = cats.into_iter().map(|c| c.name).collect();
        names.sort();
        assert_eq!(names, vec!["Simba", "Whiskers"]);
    }

    #[actix_web::test]
    async fn test_list_cats_rejects_unknown_enumeration() {
        let state = create_mock_app_state(None).await;
        let query = CatFilterQuery {
            age: Some("ancient".to_string()),
            ..Default::default()
        };

        let error = list_cats(query, None, state).await.unwrap_err();
        assert!(matches!(error, ApiError::BadRequest(_)));
    }

    #[actix_web::test]
    async fn test_get_cat_hides_unavailable() {
        let state = create_mock_app_state(Some(vec![
            create_mock_cat("listed", true, Utc::now()),
            create_mock_cat("adopted", false, Utc::now()),
        ]))
        .await;

        let response = get_cat("listed".to_string(), state.clone()).await.unwrap();
        let json = body_json(response).await;
        assert_eq!(json["data"]["id"], "listed");

        let error = get_cat("adopted".to_string(), state).await.unwrap_err();
        assert!(matches!(error, ApiError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_filter_options() {
        let json = body_json(filter_options().await.unwrap()).await;

        assert_eq!(json["data"]["sizes"], serde_json::json!(["small", "medium", "large"]));
        assert_eq!(json["data"]["genders"], serde_json::json!(["male", "female"]));
    }
}
