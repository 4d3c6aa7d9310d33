//! Vitals Risk Assessment HTTP Server
//!
//! Fetches patient records from the upstream clinical API, scores them, and
//! forwards assessment submissions.

use anyhow::Result;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vitals_server::api::{create_router, AppState};
use vitals_server::config::ServerConfig;
use vitals_upstream::ApiClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Initialize tracing
    init_tracing(&config.log_level)?;
    info!("Loaded configuration: {:?}", config.redacted());

    // Initialize upstream client
    let client = Arc::new(ApiClient::new(config.upstream.to_client_config())?);
    info!("Upstream client initialized for {}", client.base_url());

    let app = create_router(AppState::from_client(client));

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    info!("Starting server on {}", addr);

    let listener = TcpListener::bind(&addr).await?;
    info!("✓ Server listening on http://{}", addr);
    info!("  Health check: http://{}/health", addr);
    info!("  Patients: http://{}/api/patients/all", addr);
    info!("  Assessment: http://{}/api/assessment", addr);
    info!("  Submit: POST http://{}/api/submit-assessment", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Initialize tracing subscriber
fn init_tracing(log_level: &str) -> Result<()> {
    let default_filter = format!(
        "vitals_server={level},vitals_upstream={level},vitals_core={level},tower_http=debug",
        level = log_level
    );

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {}", e))?;

    Ok(())
}
