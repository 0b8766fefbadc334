// ============================================================================
// Axum Extractors
// ============================================================================
//
// Session: resolves the cookie-borne session for API routes. Both checks
// run before any backend call; rejections are already-normalized envelope
// responses.
//
// ============================================================================

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::Response,
};
use axum_extra::extract::cookie::CookieJar;
use std::sync::Arc;

use crate::context::AppContext;
use crate::gateway::client::BackendAuth;
use crate::gateway::envelope;
use crate::session::SessionStore;

/// Resolved session of a protected API request.
///
/// Usage:
/// ```ignore
/// async fn handler(session: Session, ...) -> Response {
///     let auth = session.backend_auth();
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user_email: String,
}

impl Session {
    /// Credentials for the outbound backend call.
    pub fn backend_auth(&self) -> BackendAuth<'_> {
        BackendAuth {
            token: &self.token,
            user_email: Some(&self.user_email),
        }
    }
}

#[async_trait]
impl FromRequestParts<Arc<AppContext>> for Session {
    type Rejection = Response;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppContext>,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let store = SessionStore::new(jar, &state.config.session);

        // API routes read the cookie only; the Authorization header is a
        // navigation-middleware concern.
        let Some(token) = store.token() else {
            tracing::warn!(path = %parts.uri.path(), "Request without session token");
            return Err(envelope::reject(
                StatusCode::UNAUTHORIZED,
                "No authentication token found",
            ));
        };

        // A token without the identity cookie means the session was never
        // established by this gateway.
        let Some(user_email) = store.user_email() else {
            tracing::warn!(path = %parts.uri.path(), "Session token without identity");
            return Err(envelope::reject(
                StatusCode::UNAUTHORIZED,
                "Unauthorized request",
            ));
        };

        Ok(Session { token, user_email })
    }
}
