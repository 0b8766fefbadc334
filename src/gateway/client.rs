// ============================================================================
// Backend Client
// ============================================================================
//
// HTTP client for the external offers backend. Every inbound request maps to
// at most one outbound call; there are no retries, no caching, and no
// gateway-side timeout. Failures come back as a tagged result so handlers
// can match on them instead of catching panicking paths.
//
// ============================================================================

use axum::http::StatusCode;
use bytes::Bytes;
use reqwest::Method;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::config::Config;

/// Header naming the signed-in user on outbound calls.
pub const USER_EMAIL_HEADER: &str = "X-User-Email";

/// The outbound call never reached a parsed backend response.
///
/// Covers DNS/connect failures and non-JSON bodies alike; the distinction
/// never reaches the caller, who always sees the operation's generic 500.
#[derive(Debug, Error)]
#[error("backend call failed: {0}")]
pub struct TransportError(#[from] pub reqwest::Error);

/// A parsed backend response: pass-through status plus JSON body.
#[derive(Debug, Clone)]
pub struct Upstream {
    pub status: StatusCode,
    pub body: Value,
}

impl Upstream {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// The backend's own `message`, when the body carries one.
    pub fn message(&self) -> Option<&str> {
        self.body.get("message").and_then(Value::as_str)
    }

    /// The backend's `data` payload, when present and non-null.
    pub fn data(&self) -> Option<Value> {
        self.body.get("data").filter(|data| !data.is_null()).cloned()
    }
}

/// Bearer credentials attached to calls on behalf of a signed-in user.
#[derive(Debug, Clone, Copy)]
pub struct BackendAuth<'a> {
    pub token: &'a str,
    pub user_email: Option<&'a str>,
}

/// HTTP client for forwarding requests to the offers backend
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(config: &Config) -> Self {
        // Connection pooling and keep-alive; per-request timeouts are left
        // to the transport layer.
        let http = reqwest::Client::builder()
            .tcp_keepalive(Duration::from_secs(30))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url: config.backend_api_url.clone(),
        }
    }

    pub async fn get(
        &self,
        path: &str,
        auth: Option<BackendAuth<'_>>,
    ) -> Result<Upstream, TransportError> {
        self.call(Method::GET, path, None, auth).await
    }

    pub async fn post(
        &self,
        path: &str,
        body: Option<Bytes>,
        auth: Option<BackendAuth<'_>>,
    ) -> Result<Upstream, TransportError> {
        self.call(Method::POST, path, body, auth).await
    }

    pub async fn put(
        &self,
        path: &str,
        body: Option<Bytes>,
        auth: Option<BackendAuth<'_>>,
    ) -> Result<Upstream, TransportError> {
        self.call(Method::PUT, path, body, auth).await
    }

    pub async fn delete(
        &self,
        path: &str,
        auth: Option<BackendAuth<'_>>,
    ) -> Result<Upstream, TransportError> {
        self.call(Method::DELETE, path, None, auth).await
    }

    /// One best-effort call to `<base_url><path>`.
    ///
    /// The body is forwarded byte-for-byte; the gateway never re-encodes
    /// what the browser sent.
    async fn call(
        &self,
        method: Method,
        path: &str,
        body: Option<Bytes>,
        auth: Option<BackendAuth<'_>>,
    ) -> Result<Upstream, TransportError> {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(method = %method, url = %url, "Calling backend");

        let mut request = self
            .http
            .request(method, &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json");

        if let Some(auth) = auth {
            request = request.bearer_auth(auth.token);
            if let Some(email) = auth.user_email {
                request = request.header(USER_EMAIL_HEADER, email);
            }
        }

        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request.send().await?;

        let status =
            StatusCode::from_u16(response.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
        let body: Value = response.json().await?;

        Ok(Upstream { status, body })
    }

    /// Probe the backend's health endpoint.
    pub async fn check_health(&self) -> bool {
        let health_url = format!("{}/health", self.base_url);
        match self.http.get(&health_url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::warn!(url = %health_url, error = %e, "Backend health check failed");
                false
            }
        }
    }
}
