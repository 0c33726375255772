//! Prometheus endpoints: metric names, one metric family, and a full scrape.
use crate::metrics::{gather_metrics, REGISTRY};
use actix_web::{get, web, HttpResponse, Responder};
use prometheus::{Encoder, TextEncoder};

/// Lists the names of every registered metric.
#[utoipa::path(
    get,
    path = "/api/v1/metrics",
    tag = "Metrics",
    responses(
        (status = 200, description = "Metric names", body = Vec<String>),
    )
)]
#[get("/metrics")]
async fn list_metrics() -> impl Responder {
    let metric_names: Vec<String> = REGISTRY
        .gather()
        .iter()
        .map(|mf| mf.name().to_string())
        .collect();
    HttpResponse::Ok().json(metric_names)
}

/// Renders a single metric family in the Prometheus text format.
#[utoipa::path(
    get,
    path = "/api/v1/metrics/{metric_name}",
    tag = "Metrics",
    params(("metric_name" = String, Path, description = "Name of the metric")),
    responses(
        (status = 200, description = "Metric in Prometheus text format", body = String),
        (status = 404, description = "Metric not found", body = String),
    )
)]
#[get("/metrics/{metric_name}")]
async fn metric_detail(path: web::Path<String>) -> impl Responder {
    let metric_name = path.into_inner();

    for mf in REGISTRY.gather() {
        if mf.name() == metric_name {
            let encoder = TextEncoder::new();
            let mut buffer = Vec::new();
            if let Err(e) = encoder.encode(&[mf], &mut buffer) {
                return HttpResponse::InternalServerError().body(format!("Encoding error: {}", e));
            }
            return HttpResponse::Ok()
                .content_type(encoder.format_type())
                .body(buffer);
        }
    }
    HttpResponse::NotFound().body("Metric not found")
}

/// Scrape endpoint for Prometheus.
#[utoipa::path(
    get,
    path = "/api/v1/debug/metrics/scrape",
    tag = "Metrics",
    responses(
        (status = 200, description = "All metrics in Prometheus text format", body = String),
        (status = 500, description = "Encoding failed", body = String),
    )
)]
#[get("/debug/metrics/scrape")]
async fn scrape_metrics() -> impl Responder {
    match gather_metrics() {
        Ok(body) => HttpResponse::Ok().content_type("text/plain;").body(body),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}

pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list_metrics);
    cfg.service(metric_detail);
    cfg.service(scrape_metrics);
}
