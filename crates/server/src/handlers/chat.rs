//! # Chat Handler
//!
//! Answers a chat turn with the rule-based engine and records it in the
//! research store.

use super::{resolve_formality, resolve_hierarchy, AppError, AppState};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use campusbot::{respond, ReplyMetadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{error, info};

// --- API Payloads for Chat ---

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub message: Option<String>,
    pub hierarchy: Option<String>,
    pub formality: Option<String>,
    pub session_id: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub response: String,
    #[serde(flatten)]
    pub metadata: ReplyMetadata,
    /// Identifier of the stored turn; absent when it could not be stored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interaction_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

// --- Chat Handlers ---

/// The handler for `/api/chat`.
///
/// A body that is not a valid chat request gets the apology reply. A failure to
/// persist the turn is logged and does not fail the reply.
pub async fn chat_handler(
    State(app_state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let started = Instant::now();
    let Json(payload) = payload.map_err(|e| AppError::InvalidMessage(e.body_text()))?;

    let message = match payload.message {
        Some(message) if !message.trim().is_empty() => message,
        Some(_) => return Err(AppError::InvalidMessage("message is blank".to_string())),
        None => return Err(AppError::InvalidMessage("message is missing".to_string())),
    };
    let hierarchy = resolve_hierarchy(payload.hierarchy.as_deref());
    let formality = resolve_formality(payload.formality.as_deref());
    info!(
        session = payload.session_id.as_deref().unwrap_or("-"),
        %hierarchy,
        %formality,
        "Processing message: '{message}'"
    );

    let reply = respond(&message, hierarchy, formality);
    let metadata = ReplyMetadata::new(&message, &reply, hierarchy, formality, started.elapsed());

    let interaction_id = match app_state
        .store
        .log_interaction(
            payload.session_id,
            &message,
            &reply.text,
            metadata.clone(),
        )
        .await
    {
        Ok(interaction) => Some(interaction.id),
        Err(e) => {
            error!("Failed to log interaction: {e}");
            None
        }
    };

    info!(
        intent = %reply.intent,
        topic = %reply.topic.topic,
        "Response generated in {}ms",
        metadata.response_time
    );

    Ok(Json(ChatResponse {
        response: reply.text,
        metadata,
        interaction_id,
        timestamp: Utc::now(),
    }))
}
