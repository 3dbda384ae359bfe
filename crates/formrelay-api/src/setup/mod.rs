//! Application setup and initialization

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::{Context, Result};
use formrelay_core::RelayConfig;

use crate::services::{EmailProvider, ResendProvider, SubmissionRelay};
use crate::state::AppState;

/// Initialize the entire application against the configured email provider.
pub async fn initialize_app(config: RelayConfig) -> Result<(Arc<AppState>, axum::Router)> {
    crate::telemetry::init_telemetry(&config.log_format);
    tracing::info!("Configuration loaded successfully");

    let provider = Arc::new(ResendProvider::from_config(&config));
    build_app(config, provider).await
}

/// Build state and router with an explicit provider.
pub async fn build_app(
    config: RelayConfig,
    provider: Arc<dyn EmailProvider>,
) -> Result<(Arc<AppState>, axum::Router)> {
    tokio::fs::create_dir_all(config.upload_dir())
        .await
        .with_context(|| {
            format!(
                "Failed to create upload directory {}",
                config.upload_dir().display()
            )
        })?;

    let config = Arc::new(config);
    let state = Arc::new(AppState {
        relay: SubmissionRelay::new(config.clone(), provider),
        config: config.clone(),
    });

    let router = routes::setup_routes(&config, state.clone());

    Ok((state, router))
}
