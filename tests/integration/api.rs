//! End-to-end API tests against an in-memory deployment seeded from a config file.
use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use meowmatch::{
    api::routes::configure_routes,
    bootstrap::{initialize_app_state, process_config_file},
    config::{
        AuthProviderType, Config, FavoritesStorageType, RepositoryStorageType, ServerConfig,
    },
    constants::{AUTH_REDIRECT_PATH, DEVICE_ID_HEADER_NAME},
    models::DefaultAppState,
};
use serde_json::{json, Value};

const STAFF_TOKEN: &str = "staff-token";
const MEMBER_TOKEN: &str = "member-token";

fn server_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 8080,
        config_file_path: "./config/config.json".to_string(),
        repository_storage_type: RepositoryStorageType::InMemory,
        redis_url: "redis://127.0.0.1:6379".to_string(),
        redis_key_prefix: "meowmatch-test".to_string(),
        redis_connection_timeout_ms: 1000,
        favorites_storage_type: FavoritesStorageType::InMemory,
        favorites_data_dir: "./data/favorites".to_string(),
        auth_provider_type: AuthProviderType::InMemory,
        auth_url: None,
        auth_api_key: None,
        role_resolution_timeout_ms: 1000,
        rate_limit_requests_per_second: 100,
        rate_limit_burst_size: 300,
    }
}

fn seed_cat(id: &str, name: &str, age: &str, color: &str, personality: &[&str]) -> Value {
    json!({
        "id": id,
        "name": name,
        "age": age,
        "color": color,
        "size": "medium",
        "gender": "female",
        "personality": personality,
        "good_with": ["children"],
        "description": format!("{} is looking for a loving forever home.", name),
        "image_url": format!("https://images.example.com/{}.jpg", id),
        "shelter_id": "happy-paws"
    })
}

fn seed_config() -> Config {
    let mut adopted = seed_cat("4", "Shadow", "adult", "black", &["independent"]);
    adopted["is_available"] = json!(false);

    serde_json::from_value(json!({
        "shelters": [{ "id": "happy-paws", "name": "Happy Paws Rescue" }],
        "cats": [
            seed_cat("1", "Whiskers", "kitten", "orange", &["playful", "affectionate"]),
            seed_cat("2", "Luna", "young", "black", &["calm"]),
            seed_cat("3", "Simba", "adult", "orange", &["playful"]),
            adopted
        ],
        "user_roles": [{ "user_id": "staff-user", "role": "shelter_staff" }],
        "sessions": [
            { "access_token": STAFF_TOKEN, "user": { "id": "staff-user", "email": "staff@example.com" } },
            { "access_token": MEMBER_TOKEN, "user": { "id": "member-user", "email": "member@example.com" } }
        ]
    }))
    .unwrap()
}

async fn seeded_state() -> web::ThinData<DefaultAppState> {
    let server_config = Arc::new(server_config());
    let config = seed_config();
    let app_state = initialize_app_state(server_config.clone(), &config)
        .await
        .unwrap();
    process_config_file(config, server_config, &app_state)
        .await
        .unwrap();
    app_state
}

macro_rules! init_app {
    () => {
        test::init_service(
            App::new()
                .app_data(seeded_state().await)
                .service(web::scope("/api/v1").configure(configure_routes)),
        )
        .await
    };
}

fn names(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|cat| cat["name"].as_str().unwrap().to_string())
        .collect()
}

#[actix_web::test]
async fn test_browse_lists_available_cats_newest_first() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/cats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(names(&body), vec!["Whiskers", "Luna", "Simba"]);
}

#[actix_web::test]
async fn test_browse_applies_filters() {
    let app = init_app!();

    let req = test::TestRequest::get()
        .uri("/api/v1/cats?color=orange&personality=playful&age=all")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(names(&body), vec!["Whiskers", "Simba"]);

    let req = test::TestRequest::get()
        .uri("/api/v1/cats?size=gigantic")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_adopted_cat_is_hidden() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/cats/4").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_favorites_flow() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/favorites/2/toggle")
        .insert_header((DEVICE_ID_HEADER_NAME, "phone-1"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["is_favorite"], true);

    let req = test::TestRequest::get()
        .uri("/api/v1/cats?favorites_only=true")
        .insert_header((DEVICE_ID_HEADER_NAME, "phone-1"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(names(&body), vec!["Luna"]);

    // another device has its own set
    let req = test::TestRequest::get()
        .uri("/api/v1/favorites")
        .insert_header((DEVICE_ID_HEADER_NAME, "phone-2"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["cat_ids"], json!([]));

    let req = test::TestRequest::post()
        .uri("/api/v1/favorites/2/toggle")
        .insert_header((DEVICE_ID_HEADER_NAME, "phone-1"))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["is_favorite"], false);
    assert_eq!(body["data"]["cat_ids"], json!([]));

    let req = test::TestRequest::get().uri("/api/v1/favorites").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_submit_application() {
    let app = init_app!();

    let req = test::TestRequest::post()
        .uri("/api/v1/cats/1/applications")
        .set_json(json!({
            "name": "Jane Doe",
            "email": "jane@example.com",
            "phone": "555-123-4567",
            "location": "Springfield",
            "message": "I have a quiet home and a big sunny window."
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["cat_name"], "Whiskers");

    let req = test::TestRequest::post()
        .uri("/api/v1/cats/1/applications")
        .set_json(json!({
            "name": "Jane Doe",
            "email": "not-an-email",
            "phone": "555-123-4567",
            "location": "Springfield",
            "message": "I have a quiet home and a big sunny window."
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_admin_gate() {
    let app = init_app!();

    let req = test::TestRequest::get().uri("/api/v1/admin").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get("location").unwrap().to_str().unwrap(),
        AUTH_REDIRECT_PATH
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/admin")
        .insert_header(("Authorization", format!("Bearer {}", MEMBER_TOKEN)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        resp.headers().get("location").unwrap().to_str().unwrap(),
        AUTH_REDIRECT_PATH
    );
    let body = test::read_body(resp).await;
    assert!(!String::from_utf8_lossy(&body).contains("cats"));

    let req = test::TestRequest::get()
        .uri("/api/v1/admin")
        .insert_header(("Authorization", format!("Bearer {}", STAFF_TOKEN)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["is_shelter_staff"], true);
    assert_eq!(body["data"]["cats"].as_array().unwrap().len(), 4);
}

#[actix_web::test]
async fn test_staff_edits_catalog() {
    let app = init_app!();
    let auth = ("Authorization", format!("Bearer {}", STAFF_TOKEN));

    let req = test::TestRequest::post()
        .uri("/api/v1/admin/cats")
        .insert_header(auth.clone())
        .set_json(json!({
            "name": "Pumpkin",
            "age": "kitten",
            "color": "orange",
            "size": "small",
            "gender": "male",
            "personality": ["playful"],
            "good_with": ["dogs"],
            "description": "A tiny ball of orange fluff who loves to pounce.",
            "image_url": "https://images.example.com/pumpkin.jpg"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    let new_id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["shelter_id"], "happy-paws");

    let req = test::TestRequest::get().uri("/api/v1/cats").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(names(&body)[0], "Pumpkin");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/admin/cats/{}", new_id))
        .insert_header(auth.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/admin/cats/{}?confirm=true", new_id))
        .insert_header(auth)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/cats/{}", new_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_member_cannot_edit_catalog() {
    let app = init_app!();

    let req = test::TestRequest::delete()
        .uri("/api/v1/admin/cats/1?confirm=true")
        .insert_header(("Authorization", format!("Bearer {}", MEMBER_TOKEN)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}
