//! User API client methods

use super::{ApiClient, ClientError};
use crate::types::{ApiResponse, User};
use reqwest::Method;

impl ApiClient {
    /// Fetch a user profile by id
    pub async fn get_user(&self, id: i64) -> Result<User, ClientError> {
        let req = self.request(Method::GET, &format!("/user/{id}"));
        self.execute::<ApiResponse<User>>(req).await?.into_data()
    }
}
