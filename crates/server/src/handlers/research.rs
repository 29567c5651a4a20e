//! # Research Data Handlers
//!
//! Read-only access to the collected research data: live analytics, raw
//! exports, and the derived summary.

use super::{AppError, AppState};
use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    Json,
};
use campusbot::{Analytics, ExportKind, ResearchSummary};
use chrono::Utc;
use tracing::info;

/// The handler for `/api/analytics`.
pub async fn analytics_handler(State(app_state): State<AppState>) -> Json<Analytics> {
    Json(app_state.store.analytics().await)
}

/// The handler for `/api/export/{kind}`, returning the data set as a download.
pub async fn export_handler(
    State(app_state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let kind: ExportKind = kind.parse()?;
    let filename = kind.download_name(Utc::now().date_naive());
    info!("Exporting {kind} as '{filename}'");

    let data = app_state.store.export(kind).await;
    Ok((
        [(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename={filename}"),
        )],
        Json(data),
    ))
}

/// The handler for `/api/research-summary`.
pub async fn research_summary_handler(
    State(app_state): State<AppState>,
) -> Json<ResearchSummary> {
    Json(app_state.store.summary().await)
}
