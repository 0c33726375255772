use crate::{
    api::routes::{
        docs::{admin_docs, application_docs, cat_docs, favorite_docs, session_docs},
        health, metrics,
    },
    models,
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

/// OpenAPI document for every `/api/v1` route, written out by `generate_openapi`.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    tags(
      (name = "Cats", description = "The public catalog of cats available for adoption."),
      (name = "Applications", description = "Adoption applications submitted by prospective adopters."),
      (name = "Favorites", description = "Cats a device has marked as favorites."),
      (name = "Session", description = "The caller's session and roles."),
      (name = "Admin", description = "Dashboard and cat record management for admins and shelter staff."),
      (name = "Metrics", description = "Prometheus metrics for the service."),
      (name = "Health", description = "Liveness of the service.")
    ),
    info(description = "MeowMatch API", version = "0.1.0", title = "MeowMatch API", license(
        name = "MIT",
    )),
    paths(
        cat_docs::doc_list_cats,
        cat_docs::doc_filter_options,
        cat_docs::doc_get_cat,
        application_docs::doc_submit_application,
        favorite_docs::doc_get_favorites,
        favorite_docs::doc_replace_favorites,
        favorite_docs::doc_clear_favorites,
        favorite_docs::doc_toggle_favorite,
        session_docs::doc_get_session,
        session_docs::doc_sign_out,
        admin_docs::doc_dashboard,
        admin_docs::doc_list_admin_cats,
        admin_docs::doc_create_cat,
        admin_docs::doc_update_cat,
        admin_docs::doc_delete_cat,
        health::health,
        metrics::list_metrics,
        metrics::metric_detail,
        metrics::scrape_metrics,
    ),
    components(schemas(
        models::Cat,
        models::CatAge,
        models::CatSize,
        models::CatGender,
        models::CatRequest,
        models::AdoptionApplicationRequest,
        models::AdoptionApplicationResponse,
        models::FilterOptions,
        models::FavoritesRequest,
        models::FavoritesResponse,
        models::FavoriteToggleResponse,
        models::SessionResponse,
        models::AdminDashboardResponse,
        health::HealthResponse
    ))
)]
pub struct ApiDoc;
