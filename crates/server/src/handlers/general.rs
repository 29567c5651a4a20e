//! # General Route Handlers
//!
//! The chat UI page, the health check, and the API connectivity probe.

use super::AppState;
use axum::{extract::State, response::Html, Json};
use campusbot::constants::API_VERSION;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single-page chat UI.
const INDEX_HTML: &str = include_str!("../../static/index.html");

// --- API Payloads for General Handlers ---

#[derive(Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    /// Seconds since the server started.
    pub uptime: f64,
    pub version: String,
}

#[derive(Serialize, Deserialize)]
pub struct ApiTestResponse {
    pub message: String,
    pub version: String,
    pub features: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

// --- General-Purpose Handlers ---

/// The handler for the root (`/`) endpoint, serving the chat UI.
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// The handler for the health check (`/health`) endpoint.
pub async fn health_check(State(app_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
        uptime: app_state.started_at.elapsed().as_secs_f64(),
        version: API_VERSION.to_string(),
    })
}

/// The handler for `/api/test`, used by clients to confirm they reach the backend.
pub async fn api_test() -> Json<ApiTestResponse> {
    Json(ApiTestResponse {
        message: "Campus chatbot backend connected!".to_string(),
        version: API_VERSION.to_string(),
        features: [
            "cultural-adaptation",
            "hierarchy-awareness",
            "analytics",
            "rating-system",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
        timestamp: Utc::now(),
    })
}
