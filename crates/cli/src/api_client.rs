//! # API Client
//!
//! This module provides a client for interacting with the `campusbot-server` API.
//! It handles request construction and response parsing.

use campusbot::{Analytics, ExportKind, Formality, Hierarchy, ResearchSummary};
use reqwest::{header, Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Server responded with {status}: {body}")]
    Status { status: u16, body: String },
}

/// The body of a `POST /api/chat` request.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatTurn<'a> {
    pub message: &'a str,
    pub hierarchy: Hierarchy,
    pub formality: Formality,
    pub session_id: &'a str,
}

/// The parts of a `POST /api/chat` reply the CLI looks at.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    pub response: String,
    #[serde(rename = "detected_context")]
    pub detected_context: String,
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub interaction_id: Option<String>,
}

/// The body of a `POST /api/rate` request.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingSubmission<'a> {
    pub message_id: Value,
    pub rating: u8,
    pub feedback: &'a str,
    pub hierarchy: Hierarchy,
    pub formality: Formality,
    pub session_id: &'a str,
}

/// A downloaded data set together with the server's suggested file name.
#[derive(Clone, Debug)]
pub struct Export {
    pub file_name: Option<String>,
    pub data: Value,
}

/// The client for making API calls to the `campusbot-server`.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a new `ApiClient`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Calls `GET /api/test` and returns the server's greeting message.
    pub async fn test_connection(&self) -> Result<String, ApiError> {
        let url = format!("{}/api/test", self.base_url);
        info!("Testing connection to: {}", url);

        let body: Value = check_status(self.client.get(&url).send().await?)
            .await?
            .json()
            .await?;
        Ok(body["message"].as_str().unwrap_or_default().to_string())
    }

    /// Sends one chat turn.
    pub async fn chat(&self, turn: &ChatTurn<'_>) -> Result<ChatReply, ApiError> {
        let url = format!("{}/api/chat", self.base_url);
        info!("Sending chat message: '{}'", turn.message);

        let response = self.client.post(&url).json(turn).send().await?;
        Ok(check_status(response).await?.json().await?)
    }

    /// Submits a rating for an earlier reply.
    pub async fn rate(&self, rating: &RatingSubmission<'_>) -> Result<(), ApiError> {
        let url = format!("{}/api/rate", self.base_url);
        info!("Submitting rating {}/5", rating.rating);

        let response = self.client.post(&url).json(rating).send().await?;
        check_status(response).await?;
        Ok(())
    }

    pub async fn analytics(&self) -> Result<Analytics, ApiError> {
        let url = format!("{}/api/analytics", self.base_url);
        Ok(check_status(self.client.get(&url).send().await?)
            .await?
            .json()
            .await?)
    }

    pub async fn research_summary(&self) -> Result<ResearchSummary, ApiError> {
        let url = format!("{}/api/research-summary", self.base_url);
        Ok(check_status(self.client.get(&url).send().await?)
            .await?
            .json()
            .await?)
    }

    /// Downloads one of the research data sets.
    pub async fn export(&self, kind: ExportKind) -> Result<Export, ApiError> {
        let url = format!("{}/api/export/{}", self.base_url, kind);
        info!("Downloading export from: {}", url);

        let response = check_status(self.client.get(&url).send().await?).await?;
        let file_name = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(file_name_from_disposition);
        let data = response.json().await?;
        Ok(Export { file_name, data })
    }
}

/// Turns a non-success response into `ApiError::Status`.
async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

/// Extracts the file name from an `attachment; filename=...` header value.
fn file_name_from_disposition(value: &str) -> Option<String> {
    value
        .split(';')
        .filter_map(|part| part.trim().strip_prefix("filename="))
        .map(|name| name.trim_matches('"').to_string())
        .find(|name| !name.is_empty())
}
