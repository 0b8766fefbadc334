// ============================================================================
// Session Store
// ============================================================================
//
// Cookie-backed session state. The gateway performs no local token
// validation; a session is two http-only cookies issued on sign-in:
// - `token`        - the bearer credential minted by the backend
// - `session_user` - the signed-in email, forwarded as an identity hint
//
// Handlers never touch the cookie jar directly; they go through
// `SessionStore` so the policy (flags, lifetime) lives in one place.
//
// ============================================================================

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::config::SessionConfig;

/// Cookie carrying the bearer token issued by the backend.
pub const TOKEN_COOKIE: &str = "token";

/// Cookie carrying the signed-in user's email.
pub const USER_COOKIE: &str = "session_user";

/// Read/write access to the session cookies of one request.
pub struct SessionStore {
    jar: CookieJar,
    secure: bool,
    ttl_secs: i64,
}

impl SessionStore {
    pub fn new(jar: CookieJar, config: &SessionConfig) -> Self {
        Self {
            jar,
            secure: config.secure,
            ttl_secs: config.ttl_secs,
        }
    }

    /// The bearer token, if the request carried one.
    pub fn token(&self) -> Option<String> {
        self.jar
            .get(TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|token| !token.is_empty())
    }

    /// The signed-in user's email, if the request carried one.
    pub fn user_email(&self) -> Option<String> {
        self.jar
            .get(USER_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .filter(|email| !email.is_empty())
    }

    /// Write a fresh session, returning the jar to attach to the response.
    pub fn establish(self, token: &str, user_email: Option<&str>) -> CookieJar {
        let mut jar = self.jar.add(self.session_cookie(TOKEN_COOKIE, token));
        if let Some(email) = user_email {
            jar = jar.add(self.session_cookie(USER_COOKIE, email));
        }
        jar
    }

    /// Expire both session cookies.
    pub fn clear(self) -> CookieJar {
        self.jar
            .remove(removal_cookie(TOKEN_COOKIE))
            .remove(removal_cookie(USER_COOKIE))
    }

    fn session_cookie(&self, name: &'static str, value: &str) -> Cookie<'static> {
        let mut cookie = Cookie::new(name, value.to_string());
        cookie.set_http_only(true);
        cookie.set_same_site(SameSite::Lax);
        cookie.set_secure(self.secure);
        cookie.set_path("/");
        cookie.set_max_age(time::Duration::seconds(self.ttl_secs));
        cookie
    }
}

// Removal must carry the same path the session cookies were set with.
fn removal_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::from(name);
    cookie.set_path("/");
    cookie
}
