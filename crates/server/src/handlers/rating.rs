//! # Rating Handler

use super::{resolve_formality, resolve_hierarchy, AppError, AppState};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use campusbot::NewRating;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

// --- API Payloads for Ratings ---

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct RateRequest {
    #[serde(default)]
    pub message_id: Value,
    /// A 1-5 score, as a number or a numeric string.
    #[serde(default)]
    pub rating: Value,
    pub feedback: Option<String>,
    pub hierarchy: Option<String>,
    pub formality: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct RateResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

// --- Rating Handlers ---

/// The handler for `/api/rate`.
pub async fn rate_handler(
    State(app_state): State<AppState>,
    payload: Result<Json<RateRequest>, JsonRejection>,
) -> Result<Json<RateResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::InvalidRatingRequest(e.body_text()))?;
    let score = NewRating::score_from_json(&payload.rating)?;
    info!("Rating received: {score}/5 for message {}", payload.message_id);

    app_state
        .store
        .log_rating(NewRating {
            message_id: payload.message_id,
            rating: score,
            feedback: payload.feedback.unwrap_or_default(),
            hierarchy: resolve_hierarchy(payload.hierarchy.as_deref()),
            formality: resolve_formality(payload.formality.as_deref()),
            session_id: payload.session_id,
        })
        .await?;

    Ok(Json(RateResponse {
        success: true,
        message: "Rating saved successfully".to_string(),
        timestamp: Utc::now(),
    }))
}
