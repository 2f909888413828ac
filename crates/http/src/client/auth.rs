//! Authentication API client methods

use super::{ApiClient, ClientError};
use crate::types::{ApiResponse, LoginRequest, RegisterRequest, User};
use reqwest::Method;

impl ApiClient {
    /// Log in with account id and password
    pub async fn login(&self, request: &LoginRequest) -> Result<User, ClientError> {
        let req = self.request(Method::POST, "/auth/login").json(request);
        self.execute::<ApiResponse<User>>(req).await?.into_data()
    }

    /// Register a new account
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, ClientError> {
        let req = self.request(Method::POST, "/auth/register").json(request);
        self.execute::<ApiResponse<User>>(req).await?.into_data()
    }
}
