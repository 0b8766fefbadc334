// ============================================================================
// Offer Routes
// ============================================================================
//
// Endpoints:
// - GET    /api/offers      - List offers (filters passed through)
// - POST   /api/offers      - Create an offer
// - GET    /api/offers/:id  - Fetch one offer
// - PUT    /api/offers/:id  - Update an offer
// - DELETE /api/offers/:id  - Delete an offer
//
// Every handler is the same composition: resolved session, one backend
// call, normalized envelope. Bodies are forwarded byte-for-byte; the
// backend owns all offer semantics.
//
// ============================================================================

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;
use url::form_urlencoded;

use crate::context::AppContext;
use crate::gateway::envelope::{self, Envelope, OpMessages};
use crate::models::OfferPage;
use crate::routes::extractors::Session;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_LIMIT: u32 = 10;

/// Filters forwarded verbatim when present and non-empty.
const PASSTHROUGH_FILTERS: &[&str] = &["search", "status", "payoutModel", "mobileOperator"];

const LIST_MESSAGES: OpMessages = OpMessages {
    success: "Offers retrieved successfully",
    upstream_error: "Failed to fetch offers from backend",
    transport_failure: "Failed to fetch offers",
};

const CREATE_MESSAGES: OpMessages = OpMessages {
    success: "Offer created successfully",
    upstream_error: "Failed to create offer",
    transport_failure: "Failed to create offer",
};

const GET_MESSAGES: OpMessages = OpMessages {
    success: "Offer retrieved successfully",
    upstream_error: "Failed to fetch offer from backend",
    transport_failure: "Failed to fetch offer",
};

const UPDATE_MESSAGES: OpMessages = OpMessages {
    success: "Offer updated successfully",
    upstream_error: "Failed to update offer",
    transport_failure: "Failed to update offer",
};

const DELETE_MESSAGES: OpMessages = OpMessages {
    success: "Offer deleted successfully",
    upstream_error: "Failed to delete offer",
    transport_failure: "Failed to delete offer",
};

/// GET /api/offers
///
/// Applies no filtering itself: page/limit get defaults, everything else
/// is handed to the backend untouched. A 2xx answer without `data` is
/// replaced by an empty page so the table always has something to render.
pub async fn list_offers(
    State(ctx): State<Arc<AppContext>>,
    session: Session,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let page = params
        .get("page")
        .and_then(|p| p.parse::<u32>().ok())
        .unwrap_or(DEFAULT_PAGE);
    let limit = params
        .get("limit")
        .and_then(|l| l.parse::<u32>().ok())
        .unwrap_or(DEFAULT_LIMIT);

    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("page", &page.to_string());
    query.append_pair("limit", &limit.to_string());
    for key in PASSTHROUGH_FILTERS {
        if let Some(value) = params.get(*key).filter(|value| !value.is_empty()) {
            query.append_pair(key, value);
        }
    }

    let path = format!("/getAffDashboard?{}", query.finish());

    match ctx.backend.get(&path, Some(session.backend_auth())).await {
        Ok(upstream) if upstream.is_success() => {
            let data = upstream
                .data()
                .unwrap_or_else(|| json!(OfferPage::empty(page, limit)));

            let envelope = Envelope::success(
                upstream.message().unwrap_or(LIST_MESSAGES.success),
                Some(data),
            );
            (upstream.status, Json(envelope)).into_response()
        }
        Ok(upstream) => envelope::upstream_error(&upstream, LIST_MESSAGES.upstream_error),
        Err(error) => envelope::transport_failure(&error, LIST_MESSAGES.transport_failure),
    }
}

/// POST /api/offers
pub async fn create_offer(
    State(ctx): State<Arc<AppContext>>,
    session: Session,
    body: Bytes,
) -> Response {
    let result = ctx
        .backend
        .post("/createOffer", Some(body), Some(session.backend_auth()))
        .await;

    envelope::relay(result, CREATE_MESSAGES)
}

/// GET /api/offers/:id
pub async fn get_offer(
    State(ctx): State<Arc<AppContext>>,
    session: Session,
    Path(id): Path<String>,
) -> Response {
    let result = ctx
        .backend
        .get(&format!("/getOffer/{}", id), Some(session.backend_auth()))
        .await;

    envelope::relay(result, GET_MESSAGES)
}

/// PUT /api/offers/:id
pub async fn update_offer(
    State(ctx): State<Arc<AppContext>>,
    session: Session,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let result = ctx
        .backend
        .put(
            &format!("/updateOffer/{}", id),
            Some(body),
            Some(session.backend_auth()),
        )
        .await;

    envelope::relay(result, UPDATE_MESSAGES)
}

/// DELETE /api/offers/:id
pub async fn delete_offer(
    State(ctx): State<Arc<AppContext>>,
    session: Session,
    Path(id): Path<String>,
) -> Response {
    let result = ctx
        .backend
        .delete(&format!("/deleteOffer/{}", id), Some(session.backend_auth()))
        .await;

    envelope::relay(result, DELETE_MESSAGES)
}
