//! Client error types

use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection refused, DNS failure, offline browser
    #[error("Request failed: {0}")]
    Network(reqwest::Error),

    /// The exchange did not complete within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Server answered with a non-2xx status
    #[error("Server error {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Backend envelope reported a failure code
    #[error("API error {code}: {message}")]
    Api { code: i32, message: String },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        Self::HttpStatus {
            status: status.as_u16(),
            message,
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Network(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err)
        }
    }
}
