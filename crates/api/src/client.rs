//! HTTP client for the Newsdesk platform API
//!
//! Wraps a base origin and an optional bearer credential. Non-2xx
//! responses become [`Error::Request`] carrying the server-supplied
//! message; transport failures become [`Error::Network`]. There is no
//! retry, request de-duplication, or in-flight cancellation here — every
//! fetch is independent and retries are user-initiated.

use std::sync::RwLock;

use reqwest::multipart::Form;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::auth::AuthService;
use crate::error::{Error, Result};
use crate::news::NewsService;
use crate::people::PersonService;

/// Fallback when the server gives no usable message
const GENERIC_FAILURE: &str = "Request failed";

/// Client handle for the platform API
pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
    token: RwLock<Option<String>>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = Url::parse(base_url)?;
        // Joining relative paths drops the last segment of a base that
        // does not end in a slash
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }

        Ok(Self {
            base,
            http: reqwest::Client::new(),
            token: RwLock::new(None),
        })
    }

    /// Adopt a bearer credential; attached to every subsequent request
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap() = Some(token.into());
    }

    /// Drop the bearer credential (logout)
    pub fn clear_token(&self) {
        *self.token.write().unwrap() = None;
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().unwrap().clone()
    }

    /// Get auth service (login, register, profile)
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(self)
    }

    /// Get news service
    pub fn news(&self) -> NewsService<'_> {
        NewsService::new(self)
    }

    /// Get people service
    pub fn people(&self) -> PersonService<'_> {
        PersonService::new(self)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path.trim_start_matches('/'))?)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_with_query(path, &[]).await
    }

    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let mut request = self.http.get(self.endpoint(path)?);
        if !query.is_empty() {
            request = request.query(query);
        }
        self.execute(request).await
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.execute(self.http.post(self.endpoint(path)?).json(body))
            .await
    }

    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.execute(self.http.post(self.endpoint(path)?)).await
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.execute(self.http.put(self.endpoint(path)?).json(body))
            .await
    }

    pub(crate) async fn post_form<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        self.execute(self.http.post(self.endpoint(path)?).multipart(form))
            .await
    }

    pub(crate) async fn put_form<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T> {
        self.execute(self.http.put(self.endpoint(path)?).multipart(form))
            .await
    }

    /// DELETE with the response body discarded
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let request = self.http.delete(self.endpoint(path)?);
        self.execute_unit(request).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = self.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::request_error(status, response).await);
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn execute_unit(&self, request: RequestBuilder) -> Result<()> {
        let response = self.send(request).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::request_error(status, response).await);
        }
        Ok(())
    }

    async fn send(&self, mut request: RequestBuilder) -> Result<reqwest::Response> {
        if let Some(token) = self.token() {
            request = request.bearer_auth(token);
        }
        Ok(request.send().await?)
    }

    async fn request_error(status: StatusCode, response: reqwest::Response) -> Error {
        #[derive(Deserialize)]
        struct ServerMessage {
            #[serde(default)]
            message: Option<String>,
            #[serde(default)]
            error: Option<String>,
        }

        let message = match response.json::<ServerMessage>().await {
            Ok(body) => body
                .message
                .or(body.error)
                .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
            Err(_) => GENERIC_FAILURE.to_string(),
        };

        debug!(status = status.as_u16(), message = %message, "Request failed");
        Error::Request {
            status: status.as_u16(),
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::serve;
    use axum::http::header::AUTHORIZATION;
    use axum::http::{HeaderMap, StatusCode as AxumStatus};
    use axum::routing::get;
    use axum::{Json, Router};

    #[tokio::test]
    async fn test_bearer_token_attached_when_present() {
        let router = Router::new().route(
            "/echo",
            get(|headers: HeaderMap| async move {
                let auth = headers
                    .get(AUTHORIZATION)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("")
                    .to_string();
                Json(serde_json::json!({ "auth": auth }))
            }),
        );
        let base = serve(router).await;

        let client = ApiClient::new(&base).unwrap();

        #[derive(Deserialize)]
        struct Echo {
            auth: String,
        }

        let anonymous: Echo = client.get("/echo").await.unwrap();
        assert_eq!(anonymous.auth, "");

        client.set_token("secret");
        let authed: Echo = client.get("/echo").await.unwrap();
        assert_eq!(authed.auth, "Bearer secret");

        client.clear_token();
        let cleared: Echo = client.get("/echo").await.unwrap();
        assert_eq!(cleared.auth, "");
    }

    #[tokio::test]
    async fn test_non_2xx_carries_server_message() {
        let router = Router::new().route(
            "/fail",
            get(|| async {
                (
                    AxumStatus::UNPROCESSABLE_ENTITY,
                    Json(serde_json::json!({ "message": "Title is required" })),
                )
            }),
        );
        let base = serve(router).await;

        let client = ApiClient::new(&base).unwrap();
        let err = client.get::<serde_json::Value>("/fail").await.unwrap_err();

        assert_eq!(err.status(), Some(422));
        assert_eq!(err.user_message(), "Title is required");
    }

    #[tokio::test]
    async fn test_non_2xx_without_message_uses_fallback() {
        let router = Router::new().route(
            "/fail",
            get(|| async { (AxumStatus::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let base = serve(router).await;

        let client = ApiClient::new(&base).unwrap();
        let err = client.get::<serde_json::Value>("/fail").await.unwrap_err();

        match err {
            Error::Request { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, GENERIC_FAILURE);
            }
            other => panic!("Expected request error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        // Nothing listens on the discard port
        let client = ApiClient::new("http://127.0.0.1:9").unwrap();
        let err = client.get::<serde_json::Value>("/news").await.unwrap_err();
        assert!(matches!(err, Error::Network(_)));
    }

    #[tokio::test]
    async fn test_base_path_is_preserved_when_joining() {
        let router = Router::new().route(
            "/api/news",
            get(|| async { Json(serde_json::json!([])) }),
        );
        let base = serve(router).await;

        let client = ApiClient::new(&format!("{base}/api")).unwrap();
        let value: serde_json::Value = client.get("/news").await.unwrap();
        assert!(value.is_array());
    }
}
