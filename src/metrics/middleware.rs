//! Middleware collecting request metrics per matched route.
//!
//! Handler errors are rendered into responses before they reach this layer, so a
//! request counts as an error when it fails outright or when its status is 4xx/5xx.
//!
//! Only registered route patterns become label values. Paths that match no route
//! share [`UNMATCHED_ENDPOINT`], keeping series cardinality bounded by the route table.

use crate::metrics::{ERROR_COUNTER, REQUEST_COUNTER, REQUEST_LATENCY};
use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::StatusCode,
    Error,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use std::time::Instant;

/// Endpoint label for requests that match no registered route.
pub const UNMATCHED_ENDPOINT: &str = "unmatched";

/// Labels captured before the request is handed to the inner service.
struct RequestLabels {
    /// Registered route pattern, or [`UNMATCHED_ENDPOINT`].
    endpoint: String,
    method: String,
    started: Instant,
}

impl RequestLabels {
    fn capture(req: &ServiceRequest) -> Self {
        Self {
            endpoint: req
                .match_pattern()
                .unwrap_or_else(|| UNMATCHED_ENDPOINT.to_string()),
            method: req.method().to_string(),
            started: Instant::now(),
        }
    }

    fn record(&self, status: StatusCode, failed: bool) {
        let failed = failed || status.is_client_error() || status.is_server_error();
        let status = status.as_u16().to_string();
        let labels = [self.endpoint.as_str(), self.method.as_str(), status.as_str()];

        REQUEST_LATENCY
            .with_label_values(&labels)
            .observe(self.started.elapsed().as_secs_f64());
        REQUEST_COUNTER.with_label_values(&labels).inc();
        if failed {
            ERROR_COUNTER.with_label_values(&labels).inc();
        }
    }
}

pub struct MetricsMiddleware;

impl<S, B> Transform<S, ServiceRequest> for MetricsMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = MetricsMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(MetricsMiddlewareService { service }))
    }
}

pub struct MetricsMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for MetricsMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let labels = RequestLabels::capture(&req);
        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await;
            match &res {
                Ok(response) => labels.record(response.response().status(), false),
                Err(e) => labels.record(e.as_response_error().status_code(), true),
            }
            res
        })
    }
}
