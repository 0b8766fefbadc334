// ============================================================================
// Axum Routes Module
// ============================================================================
//
// Structure:
// - mod.rs:        Main router assembly and middleware stack
// - auth.rs:       Sign-in / sign-up / sign-out endpoints
// - offers.rs:     Offer CRUD endpoints (backend pass-through)
// - health.rs:     Health check endpoint
// - extractors.rs: Session extractor for protected API routes
// - middleware.rs: Request logging and the navigation-level auth gate
//
// ============================================================================

pub mod auth;
pub mod extractors;
pub mod health;
pub mod middleware;
pub mod offers;

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::context::AppContext;

/// Create the main application router with all routes
pub fn create_router(app_context: Arc<AppContext>) -> Router {
    Router::new()
        // Health and monitoring (no session needed)
        .route("/health", get(health::health_check))
        // Authentication endpoints
        .route("/api/auth/signin", post(auth::sign_in))
        .route("/api/auth/signup", post(auth::sign_up))
        .route("/api/auth/signout", post(auth::sign_out))
        // Offers (session checked per handler)
        .route(
            "/api/offers",
            get(offers::list_offers).post(offers::create_offer),
        )
        .route(
            "/api/offers/:id",
            get(offers::get_offer)
                .put(offers::update_offer)
                .delete(offers::delete_offer),
        )
        // Pages are rendered elsewhere; unmatched paths still pass the gate
        .fallback(not_found)
        // Apply middleware (order matters - last added runs first)
        .layer(
            ServiceBuilder::new()
                // Tracing layer (outermost of this stack)
                .layer(TraceLayer::new_for_http())
                // Request logging
                .layer(axum::middleware::from_fn(middleware::request_logging))
                .into_inner(),
        )
        // Navigation gate runs before everything else
        .layer(axum::middleware::from_fn(middleware::page_gate))
        .with_state(app_context)
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
