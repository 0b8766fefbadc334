// ============================================================================
// Authentication Routes
// ============================================================================
//
// Endpoints:
// - POST /api/auth/signin  - Exchange credentials for a session cookie
// - POST /api/auth/signup  - Register a new account with the backend
// - POST /api/auth/signout - Drop the session cookies
//
// Sign-in and sign-up forward to the backend unauthenticated; the session
// is established from the token the backend returns.
//
// ============================================================================

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::extract::cookie::CookieJar;
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;
use validator::Validate;

use crate::context::AppContext;
use crate::error::AppError;
use crate::gateway::envelope::{self, Envelope, OpMessages};
use crate::session::SessionStore;
use crate::utils::log_safe_id;

/// Header carrying the client-side reCAPTCHA token on sign-up.
pub const RECAPTCHA_TOKEN_HEADER: &str = "x-recaptcha-token";

const SIGNIN_MESSAGES: OpMessages = OpMessages {
    success: "Authentication successful",
    upstream_error: "Authentication failed",
    transport_failure: "Authentication failed",
};

const SIGNUP_MESSAGES: OpMessages = OpMessages {
    success: "Registration successful. Check your email to verify your account.",
    upstream_error: "Signup failed",
    transport_failure: "Registration failed. Please try again later.",
};

const INVALID_SIGNUP_INPUT: &str = "Invalid input. Please check your data and try again.";

/// Credentials for sign-in, forwarded to the backend as-is.
#[derive(Debug, Serialize, Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

/// Registration payload. Only the fields the backend receives are
/// validated here; form-side fields (confirmation, consent) stay in the UI.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters long."))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters long."))]
    pub password: String,
}

/// POST /api/auth/signin
///
/// Forwards the credentials to the backend's `/signin` and, on success,
/// establishes the session cookies from `data.jwt` / `data.user`.
pub async fn sign_in(
    State(ctx): State<Arc<AppContext>>,
    jar: CookieJar,
    Json(request): Json<SignInRequest>,
) -> Response {
    let payload = match serde_json::to_vec(&request) {
        Ok(bytes) => Bytes::from(bytes),
        Err(err) => return AppError::Json(err).into_response(),
    };

    match ctx.backend.post("/signin", Some(payload), None).await {
        Ok(upstream) if upstream.is_success() => {
            let data = upstream.data().unwrap_or(Value::Null);

            let Some(jwt) = data.get("jwt").and_then(Value::as_str) else {
                tracing::error!("Backend sign-in response carried no token");
                return envelope::reject(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    SIGNIN_MESSAGES.transport_failure,
                );
            };

            let user = data.get("user").cloned();
            let email = user
                .as_ref()
                .and_then(|user| user.get("email"))
                .and_then(Value::as_str)
                .unwrap_or(&request.email);

            tracing::info!(
                user_hash = %log_safe_id(email, &ctx.config.logging.hash_salt),
                "User signed in"
            );

            let jar = SessionStore::new(jar, &ctx.config.session).establish(jwt, Some(email));

            let mut session = json!({ "token": jwt });
            if let Some(user) = user {
                session["user"] = user;
            }

            let envelope = Envelope::success(
                upstream.message().unwrap_or(SIGNIN_MESSAGES.success),
                Some(session),
            );
            (jar, (upstream.status, Json(envelope))).into_response()
        }
        Ok(upstream) => envelope::upstream_error(&upstream, SIGNIN_MESSAGES.upstream_error),
        Err(error) => envelope::transport_failure(&error, SIGNIN_MESSAGES.transport_failure),
    }
}

/// POST /api/auth/signup
///
/// Gate order: reCAPTCHA (when configured), then schema validation, then
/// the backend call. Only `{name, email, password}` is forwarded.
pub async fn sign_up(
    State(ctx): State<Arc<AppContext>>,
    jar: CookieJar,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Response {
    if let Some(verifier) = &ctx.recaptcha {
        let token = headers
            .get(RECAPTCHA_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok());

        let Some(token) = token else {
            return envelope::reject(StatusCode::BAD_REQUEST, "reCAPTCHA verification required");
        };

        match verifier.verify(token).await {
            Ok(true) => {}
            Ok(false) => {
                return envelope::reject(StatusCode::BAD_REQUEST, "reCAPTCHA verification failed");
            }
            Err(error) => {
                tracing::warn!(error = %error, "reCAPTCHA verification errored");
                return envelope::reject(StatusCode::BAD_REQUEST, "reCAPTCHA verification failed");
            }
        }
    }

    let request: SignUpRequest = match serde_json::from_value(payload) {
        Ok(request) => request,
        Err(_) => return envelope::reject(StatusCode::BAD_REQUEST, INVALID_SIGNUP_INPUT),
    };

    if let Err(errors) = request.validate() {
        tracing::debug!(errors = %errors, "Sign-up payload failed validation");
        return envelope::reject(StatusCode::BAD_REQUEST, INVALID_SIGNUP_INPUT);
    }

    let payload = match serde_json::to_vec(&request) {
        Ok(bytes) => Bytes::from(bytes),
        Err(err) => return AppError::Json(err).into_response(),
    };

    match ctx.backend.post("/signup", Some(payload), None).await {
        Ok(upstream) if upstream.is_success() => {
            tracing::info!(
                user_hash = %log_safe_id(&request.email, &ctx.config.logging.hash_salt),
                "User registered"
            );

            let data = upstream.data();
            let user = data.as_ref().and_then(|data| data.get("user")).cloned();

            let envelope = Envelope::success(
                upstream.message().unwrap_or(SIGNUP_MESSAGES.success),
                user.clone().map(|user| json!({ "user": user })),
            );
            let response = (upstream.status, Json(envelope)).into_response();

            // Some backends issue a session right away on registration
            match data.as_ref().and_then(|d| d.get("jwt")).and_then(Value::as_str) {
                Some(jwt) => {
                    let email = user
                        .as_ref()
                        .and_then(|user| user.get("email"))
                        .and_then(Value::as_str)
                        .unwrap_or(&request.email);
                    let jar =
                        SessionStore::new(jar, &ctx.config.session).establish(jwt, Some(email));
                    (jar, response).into_response()
                }
                None => response,
            }
        }
        Ok(upstream) => envelope::upstream_error(&upstream, SIGNUP_MESSAGES.upstream_error),
        Err(error) => envelope::transport_failure(&error, SIGNUP_MESSAGES.transport_failure),
    }
}

/// POST /api/auth/signout
/// Drops the session cookies; the backend holds no gateway-side state.
pub async fn sign_out(State(ctx): State<Arc<AppContext>>, jar: CookieJar) -> Response {
    let jar = SessionStore::new(jar, &ctx.config.session).clear();

    (
        jar,
        (
            StatusCode::OK,
            Json(Envelope::success("Signed out successfully", None)),
        ),
    )
        .into_response()
}
