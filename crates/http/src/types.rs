//! Wire types exchanged with the backend

use crate::client::ClientError;
use serde::{Deserialize, Serialize};

/// Envelope wrapping every backend answer
///
/// The backend replies with HTTP 200 even for business failures and reports
/// the outcome in `code`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Code the backend uses for a successful call
    pub const SUCCESS: i32 = 200;

    pub fn is_success(&self) -> bool {
        self.code == Self::SUCCESS
    }

    /// Unwrap the payload, turning failure codes into [`ClientError::Api`]
    pub fn into_data(self) -> Result<T, ClientError> {
        let success = self.is_success();
        match self.data {
            Some(data) if success => Ok(data),
            _ => Err(ClientError::Api {
                code: self.code,
                message: self
                    .message
                    .unwrap_or_else(|| "response carried no data".to_string()),
            }),
        }
    }
}

/// Age tier a user registered under; selects the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserMode {
    Teenager,
    Adult,
    Senior,
    #[serde(other)]
    Unknown,
}

/// User record as returned by the backend
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<UserMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub account_id: String,
    pub password: String,
}

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub account_id: String,
    pub username: String,
    pub password: String,
    pub mode: UserMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
}
