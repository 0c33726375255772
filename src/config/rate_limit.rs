//! Rate limiting keyed by device id, falling back to the peer address.

use actix_governor::{KeyExtractor, SimpleKeyExtractionError};
use actix_web::{
    dev::ServiceRequest,
    http::{header::ContentType, StatusCode},
    HttpResponse, HttpResponseBuilder,
};
use governor::clock::{Clock, DefaultClock};
use serde::{Deserialize, Serialize};

use crate::constants::DEVICE_ID_HEADER_NAME;

#[derive(Debug, Serialize, Deserialize, Clone, Eq, PartialEq)]
pub struct DeviceRateLimit;

impl KeyExtractor for DeviceRateLimit {
    type Key = String;
    type KeyExtractionError = SimpleKeyExtractionError<&'static str>;

    fn extract(&self, req: &ServiceRequest) -> Result<Self::Key, Self::KeyExtractionError> {
        let device = req
            .headers()
            .get(DEVICE_ID_HEADER_NAME)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim())
            .filter(|value| !value.is_empty());

        if let Some(device) = device {
            return Ok(format!("device:{}", device));
        }

        req.connection_info()
            .realip_remote_addr()
            .map(|addr| format!("peer:{}", addr))
            .ok_or_else(|| {
                Self::KeyExtractionError::new(
                    r#"{ "success": false, "data": null, "error": "Unable to identify client" }"#,
                )
                .set_content_type(ContentType::json())
                .set_status_code(StatusCode::BAD_REQUEST)
            })
    }

    fn exceed_rate_limit_response(
        &self,
        negative: &governor::NotUntil<governor::clock::QuantaInstant>,
        mut response: HttpResponseBuilder,
    ) -> HttpResponse {
        let wait_time = negative
            .wait_time_from(DefaultClock::default().now())
            .as_secs();
        response.content_type(ContentType::json()).body(format!(
            r#"{{ "success": false, "data": null, "error": "Too many requests, retry after {wait_time}s" }}"#
        ))
    }
}
