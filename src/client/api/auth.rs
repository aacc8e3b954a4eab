//! Session authentication

use async_trait::async_trait;

use crate::client::body::RequestBody;
use crate::client::http::RegistryClient;
use crate::client::models::{LoginRequest, LoginResponse};
use crate::error::Result;

#[async_trait]
pub trait AuthApi {
    /// Exchange credentials for a bearer token. Carries no token itself.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse>;
}

#[async_trait]
impl AuthApi for RegistryClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        self.post(
            "/api/auth/login",
            RequestBody::Json(serde_json::to_value(request)?),
        )
        .await
    }
}
