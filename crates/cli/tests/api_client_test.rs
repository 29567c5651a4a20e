//! # API Client Tests
//!
//! Exercises `ApiClient` against a mock HTTP server.

use anyhow::Result;
use campusbot::{ExportKind, Formality, Hierarchy};
use campusbot_cli::api_client::{ApiClient, ApiError, ChatTurn, RatingSubmission};
use httpmock::{Method, MockServer};
use serde_json::json;

#[tokio::test]
async fn test_chat_sends_turn_and_parses_reply() -> Result<()> {
    let server = MockServer::start_async().await;
    let chat_mock = server
        .mock_async(|when, then| {
            when.method(Method::POST)
                .path("/api/chat")
                .json_body_partial(
                    r#"{"message": "Halo", "hierarchy": "peer-to-peer", "formality": "casual", "sessionId": "s1"}"#,
                );
            then.status(200).json_body(json!({
                "response": "Hai guys! Ada yang online? Need help nih 😅",
                "detected_context": "greeting",
                "topic": "general",
                "interactionId": "abc-123",
                "timestamp": "2025-01-31T10:00:00Z"
            }));
        })
        .await;

    let client = ApiClient::new(server.base_url());
    let reply = client
        .chat(&ChatTurn {
            message: "Halo",
            hierarchy: Hierarchy::PeerToPeer,
            formality: Formality::Casual,
            session_id: "s1",
        })
        .await?;

    chat_mock.assert_async().await;
    assert_eq!(reply.detected_context, "greeting");
    assert_eq!(reply.topic.as_deref(), Some("general"));
    assert_eq!(reply.interaction_id.as_deref(), Some("abc-123"));
    Ok(())
}

#[tokio::test]
async fn test_error_status_is_reported() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(Method::POST).path("/api/rate");
            then.status(400).json_body(json!({
                "success": false,
                "error": "Rating must be a whole number from 1 to 5, got 9"
            }));
        })
        .await;

    let client = ApiClient::new(server.base_url());
    let result = client
        .rate(&RatingSubmission {
            message_id: json!(1),
            rating: 9,
            feedback: "",
            hierarchy: Hierarchy::StudentToStaff,
            formality: Formality::Casual,
            session_id: "s1",
        })
        .await;

    match result {
        Err(ApiError::Status { status, body }) => {
            assert_eq!(status, 400);
            assert!(body.contains("1 to 5"));
        }
        other => panic!("Expected ApiError::Status, got {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_export_reads_suggested_file_name() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(Method::GET).path("/api/export/ratings");
            then.status(200)
                .header(
                    "content-disposition",
                    "attachment; filename=chatbot-ratings-2025-01-31.json",
                )
                .json_body(json!([{ "rating": 5 }]));
        })
        .await;

    let client = ApiClient::new(format!("{}/", server.base_url()));
    let export = client.export(ExportKind::Ratings).await?;

    assert_eq!(
        export.file_name.as_deref(),
        Some("chatbot-ratings-2025-01-31.json")
    );
    assert_eq!(export.data, json!([{ "rating": 5 }]));
    Ok(())
}

#[tokio::test]
async fn test_analytics_are_parsed_into_typed_counters() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(Method::GET).path("/api/analytics");
            then.status(200).json_body(json!({
                "totalSessions": 2,
                "totalMessages": 5,
                "averageRating": 4.5,
                "contextDistribution": { "inquiry": 3, "greeting": 2 },
                "hierarchyDistribution": { "student-to-staff": 5 },
                "formalityDistribution": { "casual": 5 },
                "ratingDistribution": { "1": 0, "2": 0, "3": 0, "4": 1, "5": 1 },
                "topicDistribution": { "wifi": 1 }
            }));
        })
        .await;

    let client = ApiClient::new(server.base_url());
    let analytics = client.analytics().await?;

    assert_eq!(analytics.total_messages, 5);
    assert_eq!(analytics.average_rating, 4.5);
    assert_eq!(analytics.rating_distribution.get(&5), Some(&1));
    assert!(analytics.last_updated.is_none());
    Ok(())
}
