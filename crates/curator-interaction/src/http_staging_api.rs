//! HttpStagingApi - REST client for the staged-photo admin API.
//!
//! Every request sends and accepts JSON and carries
//! `Authorization: Bearer <token>` when the shared session holds a token.
//! Non-success responses are parsed for a `message` field and turned into
//! [`CuratorError`]s.

use async_trait::async_trait;
use curator_core::api::StagingApi;
use curator_core::config::ClientConfig;
use curator_core::decision::BatchDecision;
use curator_core::error::{CuratorError, GENERIC_REQUEST_FAILURE, Result};
use curator_core::photo::StagingPage;
use curator_core::session::{AuthResponse, AuthUser, LoginCredentials, SessionHandle};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// [`StagingApi`] over HTTP.
#[derive(Clone)]
pub struct HttpStagingApi {
    client: Client,
    base_url: Option<String>,
    session: SessionHandle,
    timeout: Duration,
}

#[derive(Debug, Serialize)]
struct BatchRequest<'a> {
    decisions: &'a [BatchDecision],
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

impl HttpStagingApi {
    /// Creates a client. `base_url` may be `None`; requests then fail with a
    /// configuration error instead of the constructor.
    pub fn new(base_url: Option<String>, session: SessionHandle) -> Self {
        Self {
            client: Client::new(),
            base_url,
            session,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn from_config(config: &ClientConfig, session: SessionHandle) -> Self {
        Self::new(config.api_url.clone(), session)
            .with_timeout(Duration::from_secs(config.request_timeout_secs))
    }

    pub fn with_client(mut self, client: Client) -> Self {
        self.client = client;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<String> {
        let base = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                CuratorError::config(
                    "CURATOR_API_URL environment variable is not set (or api_url in config.toml)",
                )
            })?;

        Ok(format!("{}{}", base.trim_end_matches('/'), endpoint))
    }

    /// Sends one request and decodes the JSON response into `T`.
    ///
    /// An empty success body decodes as JSON `null`.
    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<T> {
        let url = self.endpoint_url(endpoint)?;

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .timeout(self.timeout);

        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        if let Some(body) = body {
            request = request.json(&body);
        }

        tracing::debug!("[HttpStagingApi] {} {}", method, endpoint);

        let response = request.send().await.map_err(|e| {
            CuratorError::network(format!("{} {} failed: {}", method, endpoint, e))
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            CuratorError::network(format!("Failed to read response from {}: {}", endpoint, e))
        })?;

        if !status.is_success() {
            let message = error_message_from_body(&text);
            tracing::warn!(
                "[HttpStagingApi] {} {} returned {}: {}",
                method,
                endpoint,
                status,
                message
            );
            return Err(error_for_status(status.as_u16(), message));
        }

        let payload = if text.trim().is_empty() { "null" } else { text.as_str() };
        serde_json::from_str(payload).map_err(|e| {
            CuratorError::network(format!("Failed to parse response from {}: {}", endpoint, e))
        })
    }
}

/// Extracts the `message` of an error body, falling back to a generic text.
pub fn error_message_from_body(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| GENERIC_REQUEST_FAILURE.to_string())
}

fn error_for_status(status: u16, message: String) -> CuratorError {
    match status {
        401 | 403 => CuratorError::Authentication(message),
        _ => CuratorError::remote(Some(status), message),
    }
}

#[async_trait]
impl StagingApi for HttpStagingApi {
    async fn login(&self, credentials: &LoginCredentials) -> Result<AuthResponse> {
        let body = serde_json::to_value(credentials)?;
        self.request(Method::POST, "/login", Some(body)).await
    }

    async fn logout(&self) -> Result<()> {
        self.request::<IgnoredAny>(Method::POST, "/logout", None)
            .await
            .map(|_| ())
    }

    async fn fetch_current_user(&self) -> Result<AuthUser> {
        self.request(Method::GET, "/user", None).await
    }

    async fn fetch_staging(&self) -> Result<StagingPage> {
        self.request(Method::GET, "/admin/photos/staging", None).await
    }

    async fn submit_batch(&self, decisions: &[BatchDecision]) -> Result<()> {
        let body = serde_json::to_value(BatchRequest { decisions })?;
        self.request::<IgnoredAny>(Method::POST, "/admin/photos/staging/batch", Some(body))
            .await
            .map(|_| ())
    }
}
