//! Registry API client implementation

use std::time::Duration;

use log::debug;
use reqwest::{Client as HttpClient, Method, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::client::body::RequestBody;
use crate::client::models::Disposition;
use crate::error::{ApiError, Result};

/// Request timeout for all registry calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the chamber registry backend.
///
/// Paths are rooted at the backend host (`/member`, `/cities`, ...); the
/// stored bearer token rides on every request except login.
pub struct RegistryClient {
    http: HttpClient,
    base_url: String,
    token: Option<String>,
}

impl RegistryClient {
    pub fn new(api_host: &str, token: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: api_host.trim_end_matches('/').to_string(),
            token,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn builder(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.http.request(method, self.url(path));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// GET a JSON resource
    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!("GET {}", path);
        let response = self
            .builder(Method::GET, path)
            .send()
            .await
            .map_err(ApiError::from)?;
        Self::parse_json(response).await
    }

    /// GET raw bytes, passing the disposition hint through to the backend
    pub(crate) async fn get_blob(&self, path: &str, disposition: Disposition) -> Result<Vec<u8>> {
        debug!("GET {} (blob, {})", path, disposition.as_str());
        let response = self
            .builder(Method::GET, path)
            .query(&[("disposition", disposition.as_str())])
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if status.is_success() {
            let bytes = response.bytes().await.map_err(ApiError::from)?;
            Ok(bytes.to_vec())
        } else {
            Err(Self::status_error(status, response).await)
        }
    }

    /// POST a body and parse the JSON reply
    pub(crate) async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: RequestBody,
    ) -> Result<T> {
        debug!("POST {}", path);
        let response = self
            .with_body(self.builder(Method::POST, path), body)
            .send()
            .await
            .map_err(ApiError::from)?;
        Self::parse_json(response).await
    }

    /// Update a resource. JSON bodies go out as a PUT; multipart bodies
    /// tunnel through POST carrying their `_method=PUT` override, which
    /// is the only multipart update shape the backend accepts.
    pub(crate) async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: RequestBody,
    ) -> Result<T> {
        let method = match &body {
            RequestBody::Json(_) => Method::PUT,
            RequestBody::Multipart(_) => Method::POST,
        };
        debug!("{} {}", method, path);
        let response = self
            .with_body(self.builder(method, path), body)
            .send()
            .await
            .map_err(ApiError::from)?;
        Self::parse_json(response).await
    }

    /// PUT with no body, for toggle-style endpoints. The reply body is
    /// discarded; callers re-fetch the resource.
    pub(crate) async fn put_empty(&self, path: &str) -> Result<()> {
        debug!("PUT {}", path);
        let response = self
            .builder(Method::PUT, path)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::status_error(status, response).await)
        }
    }

    /// DELETE a resource, discarding any reply body
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        debug!("DELETE {}", path);
        let response = self
            .builder(Method::DELETE, path)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(Self::status_error(status, response).await)
        }
    }

    fn with_body(&self, builder: reqwest::RequestBuilder, body: RequestBody) -> reqwest::RequestBuilder {
        match body {
            RequestBody::Json(value) => builder.json(&value),
            // reqwest sets the multipart boundary content-type itself
            RequestBody::Multipart(form) => builder.multipart(form.into_form()),
        }
    }

    async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            response.json::<T>().await.map_err(|e| {
                ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
            })
        } else {
            Err(Self::status_error(status, response).await)
        }
    }

    async fn status_error(status: StatusCode, response: Response) -> crate::error::Error {
        let error: ApiError = match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::FORBIDDEN => ApiError::Forbidden,
            StatusCode::NOT_FOUND => {
                ApiError::NotFound(Self::backend_message(response, "Resource not found").await)
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::BadRequest(Self::backend_message(response, "Bad request").await)
            }
            status if status.is_server_error() => {
                ApiError::ServerError(
                    Self::backend_message(response, &format!("Server error: {}", status)).await,
                )
            }
            _ => ApiError::InvalidResponse(format!("Unexpected status code: {}", status)),
        };
        error.into()
    }

    /// Pull the backend's `message` field out of an error body when the
    /// body is JSON, fall back to the raw text, then to a generic message.
    async fn backend_message(response: Response, fallback: &str) -> String {
        match response.text().await {
            Ok(text) if !text.trim().is_empty() => {
                serde_json::from_str::<serde_json::Value>(&text)
                    .ok()
                    .and_then(|v| {
                        v.get("message")
                            .and_then(|m| m.as_str())
                            .map(|m| m.to_string())
                    })
                    .unwrap_or(text)
            }
            _ => fallback.to_string(),
        }
    }
}
