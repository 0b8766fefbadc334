use serde::Deserialize;

use crate::config::RecaptchaConfig;

/// Verifies sign-up reCAPTCHA tokens against the configured siteverify
/// endpoint. Constructed only when a secret is present; without one the
/// sign-up route skips the check entirely.
pub struct RecaptchaVerifier {
    http: reqwest::Client,
    secret_key: String,
    verify_url: String,
}

#[derive(Debug, Deserialize)]
struct SiteVerifyResponse {
    success: bool,
}

impl RecaptchaVerifier {
    pub fn from_config(config: &RecaptchaConfig) -> Option<Self> {
        let secret_key = config.secret_key.clone()?;

        Some(Self {
            http: reqwest::Client::new(),
            secret_key,
            verify_url: config.verify_url.clone(),
        })
    }

    /// Whether the given client token passes verification.
    pub async fn verify(&self, token: &str) -> Result<bool, reqwest::Error> {
        let response = self
            .http
            .post(&self.verify_url)
            .form(&[("secret", self.secret_key.as_str()), ("response", token)])
            .send()
            .await?;

        let verdict: SiteVerifyResponse = response.json().await?;
        Ok(verdict.success)
    }
}
