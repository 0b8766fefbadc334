// ============================================================================
// REST API Offer Route Tests
// ============================================================================
//
// Covers the offers pass-through:
// - Session checks short-circuit before any backend call
// - List responses relay the backend payload and status
// - Filters are forwarded verbatim
// - Bodies are forwarded byte-for-byte
// - Backend errors and transport failures normalize into the envelope
//
// ============================================================================

use serde_json::{json, Value};

use test_utils::{
    api_client, spawn_app, spawn_app_with_dead_backend, SESSION_COOKIES, TOKEN_ONLY_COOKIE,
};

#[tokio::test]
async fn protected_routes_reject_requests_without_a_token() {
    let app = spawn_app().await;
    let client = api_client();

    let requests = vec![
        client.get(app.url("/api/offers")),
        client.post(app.url("/api/offers")).json(&json!({})),
        client.get(app.url("/api/offers/1")),
        client.put(app.url("/api/offers/1")).json(&json!({})),
        client.delete(app.url("/api/offers/1")),
    ];

    for request in requests {
        let response = request.send().await.unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "No authentication token found");
    }

    // No request ever reached the backend
    assert_eq!(app.backend.hits(), 0);
}

#[tokio::test]
async fn protected_routes_reject_tokens_without_a_session() {
    let app = spawn_app().await;
    let client = api_client();

    let requests = vec![
        client.get(app.url("/api/offers")),
        client.post(app.url("/api/offers")).json(&json!({})),
        client.get(app.url("/api/offers/1")),
        client.put(app.url("/api/offers/1")).json(&json!({})),
        client.delete(app.url("/api/offers/1")),
    ];

    for request in requests {
        let response = request
            .header("Cookie", TOKEN_ONLY_COOKIE)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::UNAUTHORIZED);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Unauthorized request");
    }

    assert_eq!(app.backend.hits(), 0);
}

#[tokio::test]
async fn list_offers_relays_the_backend_payload() {
    let app = spawn_app().await;
    let client = api_client();

    let response = client
        .get(app.url("/api/offers?page=1&limit=10"))
        .header("Cookie", SESSION_COOKIES)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Offers retrieved successfully");
    assert_eq!(body["data"]["offers"].as_array().unwrap().len(), 1);
    assert_eq!(body["data"]["offers"][0]["offerName"], "Gaming App Install");
    assert_eq!(body["data"]["pagination"]["page"], 1);
    assert_eq!(body["data"]["pagination"]["totalPages"], 1);

    // The backend saw the session credentials
    assert_eq!(
        app.backend.last_auth_header().as_deref(),
        Some("Bearer test-jwt-token")
    );
    assert_eq!(
        app.backend.last_email_header().as_deref(),
        Some("test@example.com")
    );
}

#[tokio::test]
async fn list_offers_forwards_filters_verbatim() {
    let app = spawn_app().await;
    let client = api_client();

    let response = client
        .get(app.url(
            "/api/offers?page=2&limit=5&search=test&status=active&payoutModel=CPA&mobileOperator=Vodafone",
        ))
        .header("Cookie", SESSION_COOKIES)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);

    let uri = app.backend.last_uri().unwrap();
    assert!(uri.starts_with("/getAffDashboard?"), "unexpected uri: {uri}");
    for pair in [
        "page=2",
        "limit=5",
        "search=test",
        "status=active",
        "payoutModel=CPA",
        "mobileOperator=Vodafone",
    ] {
        assert!(uri.contains(pair), "missing {pair} in {uri}");
    }
}

#[tokio::test]
async fn list_offers_defaults_page_and_limit() {
    let app = spawn_app().await;
    let client = api_client();

    client
        .get(app.url("/api/offers"))
        .header("Cookie", SESSION_COOKIES)
        .send()
        .await
        .unwrap();

    let uri = app.backend.last_uri().unwrap();
    assert!(uri.contains("page=1"), "missing default page in {uri}");
    assert!(uri.contains("limit=10"), "missing default limit in {uri}");
    // Empty filters are omitted, not forwarded as blanks
    assert!(!uri.contains("search="), "unexpected search in {uri}");
    assert!(!uri.contains("status="), "unexpected status in {uri}");
}

#[tokio::test]
async fn list_offers_substitutes_an_empty_page_for_missing_data() {
    let app = spawn_app().await;
    let client = api_client();

    let response = client
        .get(app.url("/api/offers?page=3&limit=25&search=nodata"))
        .header("Cookie", SESSION_COOKIES)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["offers"], json!([]));
    assert_eq!(body["data"]["pagination"]["page"], 3);
    assert_eq!(body["data"]["pagination"]["limit"], 25);
    assert_eq!(body["data"]["pagination"]["total"], 0);
}

#[tokio::test]
async fn list_offers_passes_backend_errors_through() {
    let app = spawn_app().await;
    let client = api_client();

    let response = client
        .get(app.url("/api/offers?search=boom"))
        .header("Cookie", SESSION_COOKIES)
        .send()
        .await
        .unwrap();

    assert_eq!(
        response.status(),
        reqwest::StatusCode::INTERNAL_SERVER_ERROR
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Internal server error");
}

#[tokio::test]
async fn list_offers_maps_transport_failures_to_500() {
    let app = spawn_app_with_dead_backend().await;
    let client = api_client();

    let response = client
        .get(app.url("/api/offers"))
        .header("Cookie", SESSION_COOKIES)
        .send()
        .await
        .unwrap();

    assert_eq!(
        response.status(),
        reqwest::StatusCode::INTERNAL_SERVER_ERROR
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Failed to fetch offers");
}

#[tokio::test]
async fn repeated_list_calls_return_identical_envelopes() {
    let app = spawn_app().await;
    let client = api_client();

    let mut envelopes = Vec::new();
    for _ in 0..2 {
        let response = client
            .get(app.url("/api/offers?page=1&limit=10"))
            .header("Cookie", SESSION_COOKIES)
            .send()
            .await
            .unwrap();
        envelopes.push(response.bytes().await.unwrap());
    }

    assert_eq!(envelopes[0], envelopes[1]);
}

#[tokio::test]
async fn create_offer_forwards_the_body_byte_for_byte() {
    let app = spawn_app().await;
    let client = api_client();

    // Deliberately odd spacing and key order: any re-encoding would change it
    let raw_body = r#"{"payout": 5.5,   "offerName":"Gaming App Install"}"#;

    let response = client
        .post(app.url("/api/offers"))
        .header("Cookie", SESSION_COOKIES)
        .header("Content-Type", "application/json")
        .body(raw_body)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Offer created successfully");

    assert_eq!(app.backend.last_uri().as_deref(), Some("/createOffer"));
    assert_eq!(app.backend.last_body().unwrap(), raw_body.as_bytes());
}

#[tokio::test]
async fn get_offer_targets_the_backend_by_id() {
    let app = spawn_app().await;
    let client = api_client();

    let response = client
        .get(app.url("/api/offers/OFF-042"))
        .header("Cookie", SESSION_COOKIES)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["offerId"], "OFF-042");

    assert_eq!(app.backend.last_uri().as_deref(), Some("/getOffer/OFF-042"));
}

#[tokio::test]
async fn get_offer_passes_not_found_through() {
    let app = spawn_app().await;
    let client = api_client();

    let response = client
        .get(app.url("/api/offers/missing"))
        .header("Cookie", SESSION_COOKIES)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Offer not found");
}

#[tokio::test]
async fn update_offer_forwards_body_to_the_backend() {
    let app = spawn_app().await;
    let client = api_client();

    let raw_body = r#"{"payout":7.25,"offerAvailability":"inactive"}"#;

    let response = client
        .put(app.url("/api/offers/OFF-001"))
        .header("Cookie", SESSION_COOKIES)
        .header("Content-Type", "application/json")
        .body(raw_body)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Offer updated successfully");

    assert_eq!(
        app.backend.last_uri().as_deref(),
        Some("/updateOffer/OFF-001")
    );
    assert_eq!(app.backend.last_body().unwrap(), raw_body.as_bytes());
}

#[tokio::test]
async fn delete_offer_relays_the_backend_confirmation() {
    let app = spawn_app().await;
    let client = api_client();

    let response = client
        .delete(app.url("/api/offers/OFF-001"))
        .header("Cookie", SESSION_COOKIES)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Offer deleted successfully");
    assert_eq!(body["data"]["offerId"], "OFF-001");

    assert_eq!(
        app.backend.last_uri().as_deref(),
        Some("/deleteOffer/OFF-001")
    );
}
