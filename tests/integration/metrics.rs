//! Request metrics recorded by the middleware around real routes.
use actix_web::{test, web, App};
use meowmatch::{
    api::routes::{health, metrics},
    metrics::{
        middleware::{MetricsMiddleware, UNMATCHED_ENDPOINT},
        ERROR_COUNTER, REGISTRY, REQUEST_COUNTER,
    },
};

#[actix_web::test]
async fn test_middleware_counts_requests_and_errors() {
    let app = test::init_service(
        App::new().wrap(MetricsMiddleware).service(
            web::scope("/api/v1")
                .configure(health::init)
                .configure(metrics::init),
        ),
    )
    .await;

    let before = REQUEST_COUNTER
        .with_label_values(&["/api/v1/health", "GET", "200"])
        .get();
    let req = test::TestRequest::get().uri("/api/v1/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    assert_eq!(
        REQUEST_COUNTER
            .with_label_values(&["/api/v1/health", "GET", "200"])
            .get(),
        before + 1.0
    );

    let errors_before = ERROR_COUNTER
        .with_label_values(&["/api/v1/metrics/{metric_name}", "GET", "404"])
        .get();
    let req = test::TestRequest::get()
        .uri("/api/v1/metrics/not_a_metric")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
    assert_eq!(
        ERROR_COUNTER
            .with_label_values(&["/api/v1/metrics/{metric_name}", "GET", "404"])
            .get(),
        errors_before + 1.0
    );

    let req = test::TestRequest::get()
        .uri("/api/v1/debug/metrics/scrape")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    assert!(String::from_utf8_lossy(&body).contains("requests_total"));
}

#[actix_web::test]
async fn test_request_paths_never_become_label_values() {
    let app = test::init_service(
        App::new()
            .wrap(MetricsMiddleware)
            .service(web::scope("/api/v1").configure(metrics::init)),
    )
    .await;

    let unmatched_before = REQUEST_COUNTER
        .with_label_values(&[UNMATCHED_ENDPOINT, "GET", "404"])
        .get();

    for uri in [
        "/api/v1/metrics/whiskers_7f3a",
        "/api/v1/cats/whiskers_7f3a/nowhere",
        "/whiskers_7f3a",
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 404);
    }

    assert!(
        REQUEST_COUNTER
            .with_label_values(&[UNMATCHED_ENDPOINT, "GET", "404"])
            .get()
            >= unmatched_before + 2.0
    );

    let families = REGISTRY.gather();
    assert!(families.iter().all(|family| family.name() != "raw_requests_total"));
    let leaked = families
        .iter()
        .flat_map(|family| family.get_metric())
        .flat_map(|metric| metric.get_label())
        .any(|label| label.value().contains("whiskers_7f3a"));
    assert!(!leaked, "a request path leaked into a metric label");
}
