// ============================================================================
// Axum Middleware
// ============================================================================
//
// Middleware for request processing:
// - request_logging: Log all incoming requests
// - page_gate: Navigation-level auth gate (redirects only, no API checks)
//
// ============================================================================

use axum::{
    extract::Request,
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;
use std::time::Instant;

use crate::session::TOKEN_COOKIE;

/// Request logging middleware
pub async fn request_logging(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    tracing::debug!(
        method = %method,
        path = %path,
        "Incoming request"
    );

    let response = next.run(req).await;

    let duration = start.elapsed();
    let status = response.status();

    tracing::info!(
        method = %method,
        path = %path,
        status = %status.as_u16(),
        duration_ms = duration.as_millis(),
        "Request completed"
    );

    response
}

/// Page-level Authentication Gate
///
/// Runs before page routing and decides purely on credential presence:
///
/// 1. No token + protected page: redirect to /signin
/// 2. Token + /signin or /signup: redirect to /dashboard
/// 3. Everything else passes through
///
/// Skips API routes, the health endpoint, and static assets. API routes are
/// not protected here; they self-check through the session extractor.
pub async fn page_gate(req: Request, next: Next) -> Response {
    let path = req.uri().path().to_string();

    if !is_page_request(&path) {
        return next.run(req).await;
    }

    let token = navigation_token(req.headers());
    let is_public = PUBLIC_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix));

    if token.is_none() && !is_public {
        tracing::debug!(path = %path, "Unauthenticated navigation, redirecting to sign-in");
        return Redirect::temporary("/signin").into_response();
    }

    if token.is_some() && (path == "/signin" || path == "/signup") {
        tracing::debug!(path = %path, "Authenticated navigation to auth page, redirecting");
        return Redirect::temporary("/dashboard").into_response();
    }

    next.run(req).await
}

/// Pages that never require a session.
const PUBLIC_PREFIXES: &[&str] = &["/signin", "/signup"];

const ASSET_EXTENSIONS: &[&str] = &[
    ".svg", ".png", ".jpg", ".jpeg", ".gif", ".webp", ".ico", ".css", ".js",
];

fn is_page_request(path: &str) -> bool {
    if path.starts_with("/api") || path == "/health" || path == "/favicon.ico" {
        return false;
    }
    !ASSET_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}

/// Navigation requests may carry the token as a cookie or, for
/// programmatic clients, as a bearer header.
fn navigation_token(headers: &HeaderMap) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(TOKEN_COOKIE) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.to_string())
}
