//! HTTP client for the Library Manager backend
//!
//! Single point of outbound communication: joins paths onto the configured
//! base URL, attaches the stored bearer token when one exists, and applies
//! the central authentication-failure policy before errors reach callers.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{ClientError, ClientResult};
use crate::session::SessionStore;

/// Backend message for a rejected login attempt. A 401 carrying this exact
/// message must not wipe the session: there is no established session to
/// invalidate, only a bad credential on the login endpoint itself.
const BAD_LOGIN_MESSAGE: &str = "Invalid email or password";

/// Shared HTTP client with session-aware error handling
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: Arc<dyn SessionStore>) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Request(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let value = self.execute(Method::GET, path, None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// GET returning the raw JSON value, for endpoints whose envelope shape
    /// has to be normalized by the caller
    pub async fn get_value(&self, path: &str) -> ClientResult<Value> {
        self.execute(Method::GET, path, None).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let value = self
            .execute(Method::POST, path, Some(serde_json::to_value(body)?))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let value = self
            .execute(Method::PUT, path, Some(serde_json::to_value(body)?))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let value = self
            .execute(Method::PATCH, path, Some(serde_json::to_value(body)?))
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        self.execute(Method::DELETE, path, None).await.map(|_| ())
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> ClientResult<Value> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "sending request");

        let mut request = self.http.request(method, &url);
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            if bytes.is_empty() {
                return Ok(Value::Null);
            }
            return Ok(serde_json::from_slice(&bytes)?);
        }

        let message = extract_message(&bytes, status);
        let (error, clear_session) = classify_failure(status, message);
        if clear_session {
            tracing::warn!(%url, "session invalidated by backend, clearing stored credentials");
            self.session.clear();
        }
        Err(error)
    }
}

/// Pull the backend-provided message out of an error body, falling back to
/// the HTTP reason phrase
fn extract_message(body: &[u8], status: StatusCode) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        })
}

/// Map a failed response to an error plus the session-clearing decision.
///
/// 401 confirms session invalidation and clears stored credentials, except
/// when the message is the bad-login rejection. 404 stays distinct so
/// callers can render empty states.
fn classify_failure(status: StatusCode, message: String) -> (ClientError, bool) {
    match status {
        StatusCode::UNAUTHORIZED => {
            let clear = message != BAD_LOGIN_MESSAGE;
            (ClientError::Auth(message), clear)
        }
        StatusCode::NOT_FOUND => (ClientError::NotFound(message), false),
        _ => (ClientError::Request(message), false),
    }
}
