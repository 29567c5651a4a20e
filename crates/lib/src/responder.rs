//! # Reply Composition
//!
//! Turns a user message into the bot's reply by combining the detected intent,
//! the canned phrase for the conversation setting, and any campus information
//! found for the message's topic.

use crate::{
    intent::detect_intent,
    phrases::base_phrase,
    topics::{detect_topic, TopicMatch},
    types::{Formality, Hierarchy, Intent},
};
use tracing::debug;

/// A composed reply together with how the message was classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub intent: Intent,
    pub topic: TopicMatch,
}

/// Generates the reply to `message` for the given conversation setting.
pub fn respond(message: &str, hierarchy: Hierarchy, formality: Formality) -> Reply {
    let intent = detect_intent(message);
    let topic = detect_topic(message);
    debug!(
        %hierarchy,
        %formality,
        %intent,
        topic = %topic.topic,
        category = %topic.category,
        "Classified message"
    );

    let base = base_phrase(hierarchy, formality, intent);
    let text = match intent {
        Intent::Greeting | Intent::Farewell | Intent::Praise => base.to_string(),
        Intent::Complaint => {
            if !topic.is_general() && topic.has_specific_info() {
                format!("{base}\n\nTentang {}: {}", topic.topic, topic.info)
            } else {
                format!("{base} Bisa ceritain lebih detail masalahnya?")
            }
        }
        Intent::Inquiry => {
            if topic.has_specific_info() {
                format!("{base} {}:\n\n{}", topic.topic, topic.info)
            } else {
                format!(
                    "{base} hal tersebut. Bisa lebih spesifik pertanyaannya? Misalnya: daftar ulang, SPP, beasiswa, jadwal, dll."
                )
            }
        }
    };

    Reply {
        text,
        intent,
        topic,
    }
}
