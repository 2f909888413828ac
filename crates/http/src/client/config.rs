//! Client configuration

use reqwest::header::{self, HeaderMap, HeaderValue};
use std::time::Duration;

/// Settings an [`ApiClient`](super::ApiClient) is built with
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub default_headers: HeaderMap,
}

impl ClientConfig {
    /// Local backend serving the JSON API
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:8080/api";

    /// Request timeout in milliseconds
    pub const DEFAULT_TIMEOUT_MS: u64 = 5_000;

    /// Headers applied to every request unless the call sets its own
    pub fn base_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        headers
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(Self::DEFAULT_TIMEOUT_MS),
            default_headers: Self::base_headers(),
        }
    }
}
