use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use campusbot::{constants::CHAT_ERROR_REPLY, ChatError};
use chrono::Utc;
use serde_json::json;
use tracing::{error, warn};

/// A custom error type for the server application.
///
/// This enum encapsulates different kinds of errors that can occur within the server,
/// allowing them to be converted into appropriate HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Errors originating from the `campusbot` engine or its store.
    Chat(ChatError),
    /// A chat turn that cannot be answered, reported with the bot's apology.
    InvalidMessage(String),
    /// A rating request body that could not be read.
    InvalidRatingRequest(String),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<ChatError> for AppError {
    fn from(err: ChatError) -> Self {
        AppError::Chat(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let timestamp = Utc::now().to_rfc3339();
        let (status_code, body) = match self {
            AppError::InvalidMessage(reason) => {
                warn!("Rejected chat turn: {reason}");
                (
                    StatusCode::BAD_REQUEST,
                    json!({
                        "response": CHAT_ERROR_REPLY,
                        "error": true,
                        "timestamp": timestamp,
                    }),
                )
            }
            AppError::InvalidRatingRequest(reason) => {
                warn!("Rejected rating request: {reason}");
                (
                    StatusCode::BAD_REQUEST,
                    json!({ "success": false, "error": reason }),
                )
            }
            AppError::Chat(err) => match err {
                ChatError::InvalidRating(_) => {
                    warn!("Rejected rating: {err}");
                    (
                        StatusCode::BAD_REQUEST,
                        json!({ "success": false, "error": err.to_string() }),
                    )
                }
                ChatError::UnknownExportKind(_) => (
                    StatusCode::BAD_REQUEST,
                    json!({ "error": "Invalid export type" }),
                ),
                ChatError::UnknownHierarchy(_) | ChatError::UnknownFormality(_) => (
                    StatusCode::BAD_REQUEST,
                    json!({ "error": err.to_string(), "timestamp": timestamp }),
                ),
                ChatError::StoreIo { .. }
                | ChatError::CorruptDataFile { .. }
                | ChatError::JsonSerialization(_) => {
                    error!("Research store error: {:?}", err);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        json!({ "error": "Failed to access research data", "timestamp": timestamp }),
                    )
                }
            },
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "Internal server error", "timestamp": timestamp }),
                )
            }
        };

        (status_code, Json(body)).into_response()
    }
}
