use anyhow::Result;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod config;
pub mod context;
pub mod error;
pub mod gateway;
pub mod models;
pub mod recaptcha;
pub mod routes;
pub mod session;
pub mod utils;

use config::Config;
use context::AppContext;
use gateway::client::BackendClient;
use recaptcha::RecaptchaVerifier;

/// Serve the gateway on an already-bound listener until shutdown.
///
/// Split out from [`run`] so integration tests can spawn the full router
/// on an ephemeral port with a hand-built context.
pub async fn run_server(listener: TcpListener, app_context: Arc<AppContext>) -> Result<()> {
    let router = routes::create_router(app_context);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        tracing::info!("Shutdown signal received. Shutting down...");
    }
}

pub async fn run() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Arc::new(Config::from_env()?);

    // Outbound client for the offers backend
    let backend = Arc::new(BackendClient::new(&config));
    tracing::info!(backend_url = %config.backend_api_url, "Backend client ready");

    let recaptcha = RecaptchaVerifier::from_config(&config.recaptcha).map(Arc::new);
    if recaptcha.is_none() {
        tracing::warn!("reCAPTCHA secret not configured; sign-up verification is disabled");
    }

    let app_context = Arc::new(AppContext::new(backend, recaptcha, config.clone()));

    let bind_address = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&bind_address).await?;
    tracing::info!("Offers gateway listening on http://{}", bind_address);

    run_server(listener, app_context).await
}
