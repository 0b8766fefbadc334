// ============================================================================
// Response Normalizer
// ============================================================================
//
// Every route terminates in the same JSON envelope:
//
//   { "success": bool, "message": string, "data": ... }
//
// Three inputs reach this module: a 2xx backend response, a non-2xx backend
// response, and a transport failure that produced no response at all. Each
// route supplies its own fallback wording; the backend's `message` wins
// whenever it sent one.
//
// ============================================================================

use axum::{http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::gateway::client::{TransportError, Upstream};

/// The uniform client-facing response shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Envelope {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl Envelope {
    pub fn success(message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

/// Fallback wording for one route, used when the backend body carries no
/// `message` (or no response arrived at all).
#[derive(Debug, Clone, Copy)]
pub struct OpMessages {
    pub success: &'static str,
    pub upstream_error: &'static str,
    pub transport_failure: &'static str,
}

/// 2xx upstream: relay `data`, mirror the status.
pub fn success_response(upstream: &Upstream, default_message: &str) -> Response {
    let envelope = Envelope::success(
        upstream.message().unwrap_or(default_message),
        upstream.data(),
    );
    (upstream.status, Json(envelope)).into_response()
}

/// Non-2xx upstream: relay the backend's message and status.
pub fn upstream_error(upstream: &Upstream, default_message: &str) -> Response {
    let message = upstream.message().unwrap_or(default_message).to_string();

    tracing::warn!(
        status = %upstream.status.as_u16(),
        message = %message,
        "Backend rejected request"
    );

    (upstream.status, Json(Envelope::error(message))).into_response()
}

/// No usable response: log the cause, answer 500 with the generic wording.
/// The underlying error never reaches the caller.
pub fn transport_failure(error: &TransportError, message: &str) -> Response {
    tracing::error!(error = %error, "Backend call failed");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(Envelope::error(message)),
    )
        .into_response()
}

/// Short-circuit response for locally detected failures (missing session,
/// validation), emitted before any backend call.
pub fn reject(status: StatusCode, message: &str) -> Response {
    (status, Json(Envelope::error(message))).into_response()
}

/// The full normalization for routes that relay the upstream body as-is.
pub fn relay(result: Result<Upstream, TransportError>, messages: OpMessages) -> Response {
    match result {
        Ok(upstream) if upstream.is_success() => success_response(&upstream, messages.success),
        Ok(upstream) => upstream_error(&upstream, messages.upstream_error),
        Err(error) => transport_failure(&error, messages.transport_failure),
    }
}
