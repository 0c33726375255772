//! Metrics module for the application.
//!
//! - This module contains the global Prometheus registry.
//! - Defines HTTP request metrics and catalog activity counters.

pub mod middleware;
use lazy_static::lazy_static;
use prometheus::{
    Counter, CounterVec, Encoder, HistogramOpts, HistogramVec, Opts, Registry, TextEncoder,
};

lazy_static! {
    // Global Prometheus registry.
    pub static ref REGISTRY: Registry = Registry::new();

    // Counter: Total HTTP requests.
    pub static ref REQUEST_COUNTER: CounterVec = {
        let opts = Opts::new("requests_total", "Total number of HTTP requests");
        let counter_vec = CounterVec::new(opts, &["endpoint", "method", "status"]).unwrap();
        REGISTRY.register(Box::new(counter_vec.clone())).unwrap();
        counter_vec
    };

    // Histogram for request latency in seconds.
    pub static ref REQUEST_LATENCY: HistogramVec = {
      let histogram_opts = HistogramOpts::new("request_latency_seconds", "Request latency in seconds")
          .buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]);
      let histogram_vec = HistogramVec::new(histogram_opts, &["endpoint", "method", "status"]).unwrap();
      REGISTRY.register(Box::new(histogram_vec.clone())).unwrap();
      histogram_vec
    };

    // Counter for error responses (4xx/5xx).
    pub static ref ERROR_COUNTER: CounterVec = {
        let opts = Opts::new("error_requests_total", "Total number of error responses");
        let counter_vec = CounterVec::new(opts, &["endpoint", "method", "status"]).unwrap();
        REGISTRY.register(Box::new(counter_vec.clone())).unwrap();
        counter_vec
    };

    // Counter: adoption applications accepted.
    pub static ref APPLICATIONS_SUBMITTED: Counter = {
        let counter = Counter::new("applications_submitted_total", "Total number of adoption applications submitted").unwrap();
        REGISTRY.register(Box::new(counter.clone())).unwrap();
        counter
    };

    // Counter: favorite toggles, labelled "added" or "removed".
    pub static ref FAVORITES_TOGGLED: CounterVec = {
        let opts = Opts::new("favorites_toggled_total", "Total number of favorite toggles");
        let counter_vec = CounterVec::new(opts, &["action"]).unwrap();
        REGISTRY.register(Box::new(counter_vec.clone())).unwrap();
        counter_vec
    };
}

/// Gather all metrics and encode into the provided format.
pub fn gather_metrics() -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let encoder = TextEncoder::new();
    let metric_families = REGISTRY.gather();
    let mut buffer = Vec::new();
    encoder.encode(&metric_families, &mut buffer)?;
    Ok(buffer)
}

/// Records one favorite toggle by its outcome.
pub fn record_favorite_toggle(is_favorite: bool) {
    let action = if is_favorite { "added" } else { "removed" };
    FAVORITES_TOGGLED.with_label_values(&[action]).inc();
}

#[cfg(test)]
mod actix_tests {
    use super::*;
    use actix_web::{
        dev::{Service, ServiceRequest, ServiceResponse, Transform},
        http, test, Error, HttpResponse,
    };
    use futures::future::{self};
    use middleware::{MetricsMiddleware, UNMATCHED_ENDPOINT};
    use prometheus::proto::MetricFamily;
    use std::{
        pin::Pin,
        task::{Context, Poll},
    };

    // Dummy service that answers every request with a fixed status.
    struct DummyService(http::StatusCode);

    impl Service<ServiceRequest> for DummyService {
        type Response = ServiceResponse;
        type Error = Error;
        type Future = Pin<Box<dyn future::Future<Output = Result<Self::Response, Self::Error>>>>;

        fn poll_ready(&self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&self, req: ServiceRequest) -> Self::Future {
            let resp = req.into_response(HttpResponse::build(self.0).finish());
            Box::pin(async move { Ok(resp) })
        }
    }

    // Dummy service that always fails before producing a response.
    struct DummyErrorService;

    impl Service<ServiceRequest> for DummyErrorService {
        type Response = ServiceResponse;
        type Error = Error;
        type Future = Pin<Box<dyn future::Future<Output = Result<Self::Response, Self::Error>>>>;

        fn poll_ready(&self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
            Poll::Ready(Ok(()))
        }

        fn call(&self, _req: ServiceRequest) -> Self::Future {
            Box::pin(async move { Err(actix_web::error::ErrorInternalServerError("dummy error")) })
        }
    }

    fn find_metric_family<'a>(
        name: &str,
        families: &'a [MetricFamily],
    ) -> Option<&'a MetricFamily> {
        families.iter().find(|mf| mf.name() == name)
    }

    fn counter_for_endpoint(family: &str, endpoint: &str) -> Option<f64> {
        let families = REGISTRY.gather();
        let family = find_metric_family(family, &families)?;
        family
            .get_metric()
            .iter()
            .find(|m| {
                m.get_label()
                    .iter()
                    .any(|l| l.name() == "endpoint" && l.value() == endpoint)
            })
            .map(|m| m.get_counter().value())
    }

    #[actix_web::test]
    async fn test_gather_metrics_contains_expected_names() {
        REQUEST_COUNTER
            .with_label_values(&["/test", "GET", "200"])
            .inc();
        REQUEST_LATENCY
            .with_label_values(&["/test", "GET", "200"])
            .observe(0.1);
        ERROR_COUNTER
            .with_label_values(&["/test", "GET", "500"])
            .inc();
        APPLICATIONS_SUBMITTED.inc();
        record_favorite_toggle(true);

        let metrics = gather_metrics().expect("failed to gather metrics");
        let output = String::from_utf8(metrics).expect("metrics output is not valid UTF-8");

        assert!(output.contains("requests_total"));
        assert!(!output.contains("raw_uri"));
        assert!(output.contains("request_latency_seconds"));
        assert!(output.contains("error_requests_total"));
        assert!(output.contains("applications_submitted_total"));
        assert!(output.contains("favorites_toggled_total{action=\"added\"}"));
    }

    #[actix_web::test]
    async fn test_middleware_success() {
        let req = test::TestRequest::with_uri("/test_success").to_srv_request();

        let service = MetricsMiddleware
            .new_transform(DummyService(http::StatusCode::OK))
            .await
            .unwrap();

        let resp = service.call(req).await.unwrap();
        assert_eq!(resp.response().status(), http::StatusCode::OK);

        let count = counter_for_endpoint("requests_total", UNMATCHED_ENDPOINT)
            .expect("Expected metric with the unmatched endpoint label");
        assert!(count >= 1.0);
        assert!(counter_for_endpoint("requests_total", "/test_success").is_none());
    }

    #[actix_web::test]
    async fn test_middleware_counts_error_status_responses() {
        let req = test::TestRequest::with_uri("/test_not_found").to_srv_request();

        let service = MetricsMiddleware
            .new_transform(DummyService(http::StatusCode::NOT_FOUND))
            .await
            .unwrap();

        let resp = service.call(req).await.unwrap();
        assert_eq!(resp.response().status(), http::StatusCode::NOT_FOUND);

        let count = counter_for_endpoint("error_requests_total", UNMATCHED_ENDPOINT)
            .expect("Expected error metric with the unmatched endpoint label");
        assert!(count >= 1.0);
    }

    #[actix_web::test]
    async fn test_middleware_error() {
        let req = test::TestRequest::with_uri("/test_error").to_srv_request();

        let service = MetricsMiddleware
            .new_transform(DummyErrorService)
            .await
            .unwrap();

        assert!(service.call(req).await.is_err());

        let count = counter_for_endpoint("error_requests_total", UNMATCHED_ENDPOINT)
            .expect("Expected error metric with the unmatched endpoint label");
        assert!(count >= 1.0);
    }
}
