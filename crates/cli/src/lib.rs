//! # campusbot-cli
//!
//! Command-line companion for the campus chatbot: ask the engine locally, or
//! validate and download research data from a running `campusbot-server`.

pub mod api_client;
pub mod check;
pub mod scenarios;

/// The server address used when neither `--url` nor `CAMPUSBOT_URL` is given.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";
