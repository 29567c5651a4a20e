//! # Campus Help Chatbot
//!
//! This crate provides the rule-based engine behind the campus help chatbot:
//! keyword-based intent and topic detection, canned phrases keyed by social
//! hierarchy and formality, reply composition, and a flat JSON-file store that
//! records every chat turn and rating for later research analysis.

pub mod analytics;
pub mod constants;
pub mod errors;
pub mod intent;
pub mod metadata;
pub mod phrases;
pub mod responder;
pub mod store;
pub mod topics;
pub mod types;

pub use analytics::{Analytics, ResearchSummary};
pub use errors::ChatError;
pub use intent::detect_intent;
pub use metadata::{CulturalElements, ReplyMetadata};
pub use responder::{respond, Reply};
pub use store::{ExportKind, Interaction, NewRating, Rating, ResearchStore};
pub use topics::{detect_topic, TopicMatch};
pub use types::{Category, Formality, Hierarchy, Intent};
