//! Client configuration.

use std::time::Duration;

use crate::error::{ApiError, ApiResult};

/// Fixed request timeout. Hanging requests are aborted after this and
/// surfaced as a generic timeout condition.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(80);

/// API client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL, without a trailing slash
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// Connect timeout
    pub connect_timeout: Duration,
}

impl ClientConfig {
    /// Create a config with the default timeouts.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            timeout: REQUEST_TIMEOUT,
            connect_timeout: Duration::from_secs(5),
        }
    }

    /// Create config from environment variables.
    pub fn from_env() -> ApiResult<Self> {
        let base_url = std::env::var("JOBBOARD_API_URL")
            .map_err(|_| ApiError::config("JOBBOARD_API_URL must be set to reach the backend"))?;
        if base_url.is_empty() {
            return Err(ApiError::config("JOBBOARD_API_URL cannot be empty"));
        }

        let connect_timeout_secs: u64 = std::env::var("JOBBOARD_CONNECT_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        let mut config = Self::new(base_url);
        config.connect_timeout = Duration::from_secs(connect_timeout_secs);
        Ok(config)
    }
}
