//! # Shared Constants
//!
//! This module provides a centralized location for constants that are shared across
//! the crates in the `campusbot` workspace, mostly file names of the research store.

/// The default directory holding the research data files.
pub const DEFAULT_DATA_DIR: &str = "research-data";

/// Every chat turn, appended in arrival order.
pub const SESSIONS_FILE: &str = "sessions.json";

/// Every star rating, appended in arrival order.
pub const RATINGS_FILE: &str = "ratings.json";

/// Aggregate counters, rewritten after each append.
pub const ANALYTICS_FILE: &str = "analytics.json";

/// The version reported by the API's test and health endpoints.
pub const API_VERSION: &str = "2.0.0";

/// The reply sent when a chat turn cannot be processed.
pub const CHAT_ERROR_REPLY: &str = "Maaf, terjadi error sistem. Coba lagi ya!";
