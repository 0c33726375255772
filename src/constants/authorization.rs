pub const AUTHORIZATION_HEADER_NAME: &str = "Authorization";
pub const AUTHORIZATION_HEADER_VALUE_PREFIX: &str = "Bearer ";

/// Identifies the browser/device a favorites list belongs to.
pub const DEVICE_ID_HEADER_NAME: &str = "X-Device-Id";

/// Where unauthorized visitors of the admin dashboard are sent.
pub const AUTH_REDIRECT_PATH: &str = "/auth";

pub const DEFAULT_ROLE_RESOLUTION_TIMEOUT_MS: u64 = 3000;
