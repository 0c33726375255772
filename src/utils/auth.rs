use actix_web::{http::header::HeaderMap, HttpRequest};

use crate::{
    constants::{
        AUTHORIZATION_HEADER_NAME, AUTHORIZATION_HEADER_VALUE_PREFIX, DEVICE_ID_HEADER_NAME,
        ID_REGEX, MAX_DEVICE_ID_LENGTH,
    },
    models::ApiError,
};

/// Extracts the bearer token from the authorization header.
///
/// Returns `None` unless there is exactly one Authorization header of the form
/// `Bearer <token>` with a non-empty token that contains no spaces.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    // Ensure there is exactly one Authorization header
    let values: Vec<_> = headers.get_all(AUTHORIZATION_HEADER_NAME).collect();
    if values.len() != 1 {
        return None;
    }

    let value = values[0].to_str().ok()?;
    let token = value.strip_prefix(AUTHORIZATION_HEADER_VALUE_PREFIX)?;
    if token.is_empty() || token.contains(' ') {
        return None;
    }
    Some(token.to_string())
}

pub fn require_bearer_token(req: &HttpRequest) -> Result<String, ApiError> {
    bearer_token(req.headers())
        .ok_or_else(|| ApiError::Unauthorized("Missing or malformed bearer token".to_string()))
}

/// The device id header, validated because it becomes part of a storage key.
pub fn device_id(req: &HttpRequest) -> Result<Option<String>, ApiError> {
    let Some(value) = req.headers().get(DEVICE_ID_HEADER_NAME) else {
        return Ok(None);
    };

    let device_id = value
        .to_str()
        .map_err(|_| invalid_device_id())?
        .trim();
    if device_id.is_empty()
        || device_id.len() > MAX_DEVICE_ID_LENGTH
        || !ID_REGEX.is_match(device_id)
    {
        return Err(invalid_device_id());
    }
    Ok(Some(device_id.to_string()))
}

pub fn require_device_id(req: &HttpRequest) -> Result<String, ApiError> {
    device_id(req)?.ok_or_else(|| {
        ApiError::BadRequest(format!("Missing {} header", DEVICE_ID_HEADER_NAME))
    })
}

fn invalid_device_id() -> ApiError {
    ApiError::BadRequest(format!(
        "{} must be 1-{} characters of letters, digits, '-' or '_'",
        DEVICE_ID_HEADER_NAME, MAX_DEVICE_ID_LENGTH
    ))
}
