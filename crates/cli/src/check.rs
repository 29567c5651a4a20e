//! # Server Check
//!
//! Replays the validation scenarios against a running server, rates every
//! reply whose intent matched, and collects the resulting analytics.

use crate::{
    api_client::{ApiClient, ApiError, ChatTurn, RatingSubmission},
    scenarios::{all_scenarios, RATING_SAMPLES},
};
use campusbot::{Analytics, Formality, Hierarchy, Intent, ResearchSummary};
use chrono::Utc;
use serde_json::Value;
use std::fmt;
use tracing::warn;

/// The outcome of one replayed scenario.
#[derive(Debug, Clone)]
pub struct ScenarioResult {
    pub category: &'static str,
    pub description: &'static str,
    pub message: &'static str,
    pub hierarchy: Hierarchy,
    pub formality: Formality,
    pub expected: Intent,
    /// The intent the server reported, if it answered.
    pub actual: Option<String>,
    pub response: Option<String>,
    pub error: Option<String>,
    pub passed: bool,
}

#[derive(Debug)]
pub struct CheckReport {
    pub session_id: String,
    pub server_message: String,
    pub results: Vec<ScenarioResult>,
    pub ratings_submitted: usize,
    pub analytics: Option<Analytics>,
    pub summary: Option<ResearchSummary>,
}

impl CheckReport {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// Whole-number pass percentage.
    pub fn success_rate(&self) -> u32 {
        if self.results.is_empty() {
            return 0;
        }
        (self.passed() as f64 / self.total() as f64 * 100.0).round() as u32
    }
}

/// Runs every scenario against the server behind `client`.
///
/// Fails only when the server cannot be reached at all; individual scenario
/// errors are recorded in the report.
pub async fn run_check(client: &ApiClient) -> Result<CheckReport, ApiError> {
    let server_message = client.test_connection().await?;
    let session_id = format!("check-session-{}", Utc::now().timestamp_millis());

    let mut results = Vec::new();
    let mut ratings_submitted = 0;

    for (category, scenario) in all_scenarios() {
        let turn = ChatTurn {
            message: scenario.message,
            hierarchy: scenario.hierarchy,
            formality: scenario.formality,
            session_id: &session_id,
        };

        let mut result = ScenarioResult {
            category,
            description: scenario.description,
            message: scenario.message,
            hierarchy: scenario.hierarchy,
            formality: scenario.formality,
            expected: scenario.expected,
            actual: None,
            response: None,
            error: None,
            passed: false,
        };

        match client.chat(&turn).await {
            Ok(reply) => {
                result.passed = reply.detected_context == scenario.expected.as_str();
                if result.passed {
                    let (rating, feedback) = RATING_SAMPLES[results.len() % RATING_SAMPLES.len()];
                    let message_id = reply
                        .interaction_id
                        .clone()
                        .map(Value::String)
                        .unwrap_or_else(|| Value::from(results.len()));
                    let submission = RatingSubmission {
                        message_id,
                        rating,
                        feedback,
                        hierarchy: scenario.hierarchy,
                        formality: scenario.formality,
                        session_id: &session_id,
                    };
                    match client.rate(&submission).await {
                        Ok(()) => ratings_submitted += 1,
                        Err(e) => warn!("Failed to rate '{}': {e}", scenario.description),
                    }
                }
                result.actual = Some(reply.detected_context);
                result.response = Some(reply.response);
            }
            Err(e) => result.error = Some(e.to_string()),
        }

        results.push(result);
    }

    let analytics = client
        .analytics()
        .await
        .inspect_err(|e| warn!("Analytics request failed: {e}"))
        .ok();
    let summary = client
        .research_summary()
        .await
        .inspect_err(|e| warn!("Research summary request failed: {e}"))
        .ok();

    Ok(CheckReport {
        session_id,
        server_message,
        results,
        ratings_submitted,
        analytics,
        summary,
    })
}

/// Shortens a reply for display, respecting character boundaries.
fn preview(text: &str, max_chars: usize) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() {
        format!("{}...", head.replace('\n', " "))
    } else {
        head.replace('\n', " ")
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Server connected: {}", self.server_message)?;
        writeln!(f, "Session: {}", self.session_id)?;

        let mut current_category = "";
        for result in &self.results {
            if result.category != current_category {
                current_category = result.category;
                writeln!(f, "\n== {current_category} ==")?;
            }
            let mark = if result.passed { "PASS" } else { "FAIL" };
            writeln!(f, "[{mark}] {}", result.description)?;
            writeln!(f, "       Input: \"{}\"", result.message)?;
            writeln!(
                f,
                "       Setting: {} | {}",
                result.hierarchy, result.formality
            )?;
            match (&result.actual, &result.error) {
                (_, Some(error)) => writeln!(f, "       Error: {error}")?,
                (Some(actual), None) => {
                    writeln!(f, "       Expected: {}, Got: {actual}", result.expected)?
                }
                (None, None) => {}
            }
            if let Some(response) = &result.response {
                writeln!(f, "       Response: \"{}\"", preview(response, 80))?;
            }
        }

        writeln!(f)?;
        match &self.analytics {
            Some(analytics) => writeln!(
                f,
                "Analytics: {} messages, average rating {}",
                analytics.total_messages, analytics.average_rating
            )?,
            None => writeln!(f, "Analytics: unavailable")?,
        }
        match &self.summary {
            Some(summary) => writeln!(
                f,
                "Research summary: completeness {}, overall rating {}",
                summary.data_quality.completeness,
                summary.insights.user_satisfaction.overall_rating
            )?,
            None => writeln!(f, "Research summary: unavailable")?,
        }

        writeln!(f, "\nTotal: {}", self.total())?;
        writeln!(f, "Passed: {}", self.passed())?;
        writeln!(f, "Failed: {}", self.failed())?;
        writeln!(f, "Ratings submitted: {}", self.ratings_submitted)?;
        write!(f, "Success rate: {}%", self.success_rate())
    }
}
