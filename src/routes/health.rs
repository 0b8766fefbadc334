// ============================================================================
// Health Route
// ============================================================================
//
// GET /health - liveness plus a best-effort probe of the backend
//
// ============================================================================

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use std::sync::Arc;

use crate::context::AppContext;

/// GET /health
/// Health check endpoint
pub async fn health_check(State(ctx): State<Arc<AppContext>>) -> impl IntoResponse {
    if ctx.backend.check_health().await {
        (StatusCode::OK, "OK")
    } else {
        tracing::error!("Health check failed: backend unreachable");
        (StatusCode::SERVICE_UNAVAILABLE, "Service Unavailable")
    }
}
