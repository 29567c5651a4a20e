//! # Reply Metadata
//!
//! The research annotations attached to every chat reply and stored with the
//! chat turn. Field names match the JSON consumed by the chat UI and by the
//! exported research data.

use crate::{
    responder::Reply,
    types::{Category, Formality, Hierarchy, Intent},
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CulturalElements {
    pub respect_level: String,
    pub hierarchy_aware: bool,
    pub indonesian_context: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplyMetadata {
    #[serde(rename = "detected_context")]
    pub detected_context: Intent,
    pub hierarchy: Hierarchy,
    pub formality: Formality,
    pub topic: String,
    pub category: Category,
    /// Milliseconds spent producing the reply.
    pub response_time: u64,
    pub message_length: usize,
    pub response_length: usize,
    pub has_specific_info: bool,
    pub cultural_elements: CulturalElements,
}

impl ReplyMetadata {
    pub fn new(
        message: &str,
        reply: &Reply,
        hierarchy: Hierarchy,
        formality: Formality,
        elapsed: Duration,
    ) -> Self {
        Self {
            detected_context: reply.intent,
            hierarchy,
            formality,
            topic: reply.topic.topic.clone(),
            category: reply.topic.category,
            response_time: elapsed.as_millis() as u64,
            message_length: message.chars().count(),
            response_length: reply.text.chars().count(),
            has_specific_info: reply.topic.has_specific_info(),
            cultural_elements: CulturalElements {
                respect_level: formality.respect_level().to_string(),
                hierarchy_aware: hierarchy.hierarchy_aware(),
                indonesian_context: true,
            },
        }
    }
}
