//! # API Route Handlers
//!
//! This module organizes all the Axum route handlers for the `campusbot-server`.
//! The handlers are split into logical sub-modules based on their functionality.

pub mod chat;
pub mod general;
pub mod rating;
pub mod research;

// Re-export all handlers from the sub-modules to make them easily accessible
// to the router under a single `handlers::` path.
pub use chat::*;
pub use general::*;
pub use rating::*;
pub use research::*;

// Shared items used by multiple handler modules.
use super::{errors::AppError, state::AppState};
use campusbot::{Formality, Hierarchy};
use tracing::warn;

/// Resolves a client-supplied hierarchy, falling back to the default for unknown values.
pub(crate) fn resolve_hierarchy(raw: Option<&str>) -> Hierarchy {
    match raw.map(str::parse::<Hierarchy>) {
        Some(Ok(hierarchy)) => hierarchy,
        Some(Err(e)) => {
            warn!("{e}; using {}", Hierarchy::default());
            Hierarchy::default()
        }
        None => Hierarchy::default(),
    }
}

/// Resolves a client-supplied formality, falling back to the default for unknown values.
pub(crate) fn resolve_formality(raw: Option<&str>) -> Formality {
    match raw.map(str::parse::<Formality>) {
        Some(Ok(formality)) => formality,
        Some(Err(e)) => {
            warn!("{e}; using {}", Formality::default());
            Formality::default()
        }
        None => Formality::default(),
    }
}
