use anyhow::Result;

// ============================================================================
// Configuration Constants
// ============================================================================

// Default port for the gateway's own HTTP listener
const DEFAULT_PORT: u16 = 3000;

// Default session cookie lifetime: 24 hours
const DEFAULT_SESSION_TTL_SECS: i64 = 86_400;

// Google's verification endpoint; overridable so tests can point it at a stub
const DEFAULT_RECAPTCHA_VERIFY_URL: &str = "https://www.google.com/recaptcha/api/siteverify";

// ============================================================================
// Configuration Structures
// ============================================================================

/// Session cookie policy applied by the sign-in/sign-up/sign-out handlers.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Max-Age for the session cookies (seconds)
    pub ttl_secs: i64,
    /// Mark cookies `Secure` (enabled automatically in production)
    pub secure: bool,
}

/// reCAPTCHA verification for sign-up. Disabled when no secret is configured.
#[derive(Clone, Debug)]
pub struct RecaptchaConfig {
    pub secret_key: Option<String>,
    pub verify_url: String,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    /// Salt for hashed user identifiers in log output
    pub hash_salt: String,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Base URL of the external offers backend. Required; every outbound
    /// call targets `<backend_api_url><path>`.
    pub backend_api_url: String,
    pub port: u16,
    pub rust_log: String,
    pub session: SessionConfig,
    pub recaptcha: RecaptchaConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let production = std::env::var("APP_ENV")
            .map(|env| env == "production")
            .unwrap_or(false);

        Ok(Config {
            backend_api_url: std::env::var("BACKEND_API_URL")
                .map_err(|_| anyhow::anyhow!("BACKEND_API_URL must be set"))
                .map(|url| url.trim_end_matches('/').to_string())?,
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            session: SessionConfig {
                ttl_secs: std::env::var("SESSION_TTL_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_SESSION_TTL_SECS),
                secure: std::env::var("COOKIE_SECURE")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(production),
            },
            recaptcha: RecaptchaConfig {
                secret_key: std::env::var("RECAPTCHA_SECRET_KEY")
                    .ok()
                    .filter(|s| !s.is_empty()),
                verify_url: std::env::var("RECAPTCHA_VERIFY_URL")
                    .unwrap_or_else(|_| DEFAULT_RECAPTCHA_VERIFY_URL.to_string()),
            },
            logging: LoggingConfig {
                hash_salt: std::env::var("LOG_HASH_SALT")
                    .unwrap_or_else(|_| "offers-gateway-dev-salt".to_string()),
            },
        })
    }
}
