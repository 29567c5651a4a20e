//! # Application State
//!
//! This module defines the shared application state (`AppState`) and the logic
//! for building it at startup. The `AppState` holds the configuration and the
//! research store, making them accessible to all request handlers.

use crate::config::AppConfig;
use campusbot::ResearchStore;
use std::{sync::Arc, time::Instant};

/// The shared application state, accessible from all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// The JSON-file store receiving every chat turn and rating.
    pub store: Arc<ResearchStore>,
    /// When the server started, for the health check's uptime.
    pub started_at: Instant,
}

/// Builds the shared application state from the configuration.
///
/// Opens the research store, creating the data directory and its files on first run.
pub async fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let store = ResearchStore::open(&config.data_dir).await?;
    tracing::info!(data_dir = %config.data_dir, "Initialized research data store.");

    Ok(AppState {
        config: Arc::new(config),
        store: Arc::new(store),
        started_at: Instant::now(),
    })
}
