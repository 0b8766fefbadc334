use crate::config::Config;
use crate::gateway::client::BackendClient;
use crate::recaptcha::RecaptchaVerifier;
use std::sync::Arc;

/// Application context containing shared dependencies
/// This reduces parameter passing and makes it easier to add new dependencies
#[derive(Clone)]
pub struct AppContext {
    pub backend: Arc<BackendClient>,
    /// Present only when a reCAPTCHA secret is configured
    pub recaptcha: Option<Arc<RecaptchaVerifier>>,
    pub config: Arc<Config>,
}

impl AppContext {
    /// Creates a new application context
    pub fn new(
        backend: Arc<BackendClient>,
        recaptcha: Option<Arc<RecaptchaVerifier>>,
        config: Arc<Config>,
    ) -> Self {
        Self {
            backend,
            recaptcha,
            config,
        }
    }
}
