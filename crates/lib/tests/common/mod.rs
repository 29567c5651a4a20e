//! # Common Test Utilities
//!
//! Shared helpers for the `campusbot` integration tests.

#![allow(unused)]

use campusbot::{respond, Formality, Hierarchy, Interaction, Rating, ReplyMetadata};
use chrono::Utc;
use serde_json::json;
use std::sync::Once;
use std::time::Duration;

static INIT: Once = Once::new();

/// Initializes tracing once for the whole test binary.
pub fn setup_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();
    });
}

/// Builds the metadata the server would attach to a reply to `message`.
pub fn metadata_for(message: &str, hierarchy: Hierarchy, formality: Formality) -> ReplyMetadata {
    let reply = respond(message, hierarchy, formality);
    ReplyMetadata::new(
        message,
        &reply,
        hierarchy,
        formality,
        Duration::from_millis(2),
    )
}

/// Builds a stored chat turn without touching the filesystem.
pub fn interaction(
    session_id: &str,
    message: &str,
    hierarchy: Hierarchy,
    formality: Formality,
    response_time: u64,
) -> Interaction {
    let reply = respond(message, hierarchy, formality);
    let mut metadata = metadata_for(message, hierarchy, formality);
    metadata.response_time = response_time;
    Interaction {
        id: format!("{session_id}-{message}"),
        session_id: Some(session_id.to_string()),
        timestamp: Utc::now(),
        user_message: message.to_string(),
        bot_response: reply.text,
        metadata,
    }
}

/// Builds a stored rating without touching the filesystem.
pub fn rating(score: u8, hierarchy: Hierarchy) -> Rating {
    Rating {
        id: format!("rating-{score}"),
        message_id: json!(1),
        rating: score,
        feedback: String::new(),
        hierarchy,
        formality: Formality::Casual,
        session_id: Some("s1".to_string()),
        timestamp: Utc::now(),
    }
}
