//! # Chat Endpoint Tests
//!
//! Drives `/api/chat` end to end and checks both the reply and what was
//! written to the research store.

mod common;

use anyhow::Result;
use common::{chat_body, TestApp};
use serde_json::json;

#[tokio::test]
async fn test_chat_returns_reply_with_metadata() -> Result<()> {
    let app = TestApp::spawn().await?;

    let (status, body) = app
        .chat(chat_body(
            "Wifi lemot banget!",
            "student-to-staff",
            "casual",
            "session-1",
        ))
        .await?;

    assert_eq!(status, 200);
    assert!(body["response"]
        .as_str()
        .unwrap()
        .contains("Tentang wifi: WiFi kampus"));
    assert_eq!(body["detected_context"], json!("complaint"));
    assert_eq!(body["hierarchy"], json!("student-to-staff"));
    assert_eq!(body["formality"], json!("casual"));
    assert_eq!(body["topic"], json!("wifi"));
    assert_eq!(body["category"], json!("facilities"));
    assert_eq!(body["messageLength"], json!(18));
    assert_eq!(body["hasSpecificInfo"], json!(true));
    assert_eq!(body["culturalElements"]["respectLevel"], json!("medium"));
    assert_eq!(body["culturalElements"]["hierarchyAware"], json!(true));
    assert!(body["responseTime"].is_u64());
    assert!(body["interactionId"].is_string());
    assert!(body["timestamp"].is_string());
    Ok(())
}

#[tokio::test]
async fn test_chat_adapts_to_hierarchy_and_formality() -> Result<()> {
    let app = TestApp::spawn().await?;

    let (_, dosen) = app
        .chat(chat_body(
            "Halo, selamat pagi!",
            "student-to-dosen",
            "formal",
            "s",
        ))
        .await?;
    let (_, peer) = app
        .chat(chat_body("Halo, selamat pagi!", "peer-to-peer", "casual", "s"))
        .await?;

    assert_eq!(dosen["detected_context"], json!("greeting"));
    assert_eq!(
        dosen["response"],
        json!("Dengan hormat Bapak/Ibu Dosen. Perkenalkan saya [nama], mohon izin untuk berkonsultasi.")
    );
    assert_eq!(dosen["culturalElements"]["respectLevel"], json!("high"));
    assert_eq!(
        peer["response"],
        json!("Hai guys! Ada yang online? Need help nih 😅")
    );
    assert_eq!(peer["culturalElements"]["hierarchyAware"], json!(false));
    Ok(())
}

#[tokio::test]
async fn test_chat_turn_is_persisted() -> Result<()> {
    let app = TestApp::spawn().await?;

    let (_, body) = app
        .chat(chat_body(
            "Info beasiswa apa saja?",
            "student-to-staff",
            "formal",
            "session-42",
        ))
        .await?;

    let sessions = app.app_state.store.sessions().await;
    assert_eq!(sessions.len(), 1);
    let stored = &sessions[0];
    assert_eq!(Some(stored.id.as_str()), body["interactionId"].as_str());
    assert_eq!(stored.session_id.as_deref(), Some("session-42"));
    assert_eq!(stored.user_message, "Info beasiswa apa saja?");
    assert_eq!(Some(stored.bot_response.as_str()), body["response"].as_str());
    assert_eq!(stored.metadata.topic, "beasiswa");

    let (_, analytics) = app.get_json("/api/analytics").await?;
    assert_eq!(analytics["totalMessages"], json!(1));
    assert_eq!(analytics["totalSessions"], json!(1));
    assert_eq!(analytics["topicDistribution"]["beasiswa"], json!(1));
    Ok(())
}

#[tokio::test]
async fn test_unknown_or_missing_setting_falls_back_to_defaults() -> Result<()> {
    let app = TestApp::spawn().await?;

    let (status, body) = app
        .chat(json!({
            "message": "Halo",
            "hierarchy": "student-to-rector",
        }))
        .await?;

    assert_eq!(status, 200);
    assert_eq!(body["hierarchy"], json!("student-to-staff"));
    assert_eq!(body["formality"], json!("casual"));
    assert_eq!(body["response"], json!("Hai kak! Ada yang bisa dibantu hari ini?"));
    Ok(())
}

#[tokio::test]
async fn test_missing_or_blank_message_is_rejected_with_apology() -> Result<()> {
    let app = TestApp::spawn().await?;

    for body in [json!({ "hierarchy": "peer-to-peer" }), json!({ "message": "   " })] {
        let (status, reply) = app.chat(body).await?;
        assert_eq!(status, 400);
        assert_eq!(
            reply["response"],
            json!("Maaf, terjadi error sistem. Coba lagi ya!")
        );
        assert_eq!(reply["error"], json!(true));
    }

    assert!(app.app_state.store.sessions().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_chat_still_replies_when_storage_fails() -> Result<()> {
    let app = TestApp::spawn().await?;
    // Replacing the sessions file with a directory makes every write fail.
    let sessions_file = app.data_dir.join("sessions.json");
    std::fs::remove_file(&sessions_file)?;
    std::fs::create_dir(&sessions_file)?;

    let (status, body) = app
        .chat(chat_body("Dadah", "student-to-staff", "casual", "s"))
        .await?;

    assert_eq!(status, 200);
    assert_eq!(body["detected_context"], json!("farewell"));
    assert!(body.get("interactionId").is_none());
    Ok(())
}

#[tokio::test]
async fn test_malformed_json_gets_the_apology() -> Result<()> {
    let app = TestApp::spawn().await?;

    let response = app
        .client
        .post(format!("{}/api/chat", app.address))
        .header("Content-Type", "application/json")
        .body(r#"{"message": "Halo""#)
        .send()
        .await?;

    assert_eq!(response.status().as_u16(), 400);
    let body: serde_json::Value = response.json().await?;
    assert_eq!(
        body["response"],
        json!("Maaf, terjadi error sistem. Coba lagi ya!")
    );
    assert_eq!(body["error"], json!(true));
    Ok(())
}

#[tokio::test]
async fn test_wrongly_typed_field_gets_the_apology() -> Result<()> {
    let app = TestApp::spawn().await?;

    let (status, body) = app
        .chat(json!({ "message": "Info beasiswa", "sessionId": 1735689600000u64 }))
        .await?;

    assert_eq!(status, 400);
    assert_eq!(
        body["response"],
        json!("Maaf, terjadi error sistem. Coba lagi ya!")
    );
    assert_eq!(body["error"], json!(true));
    assert!(app.app_state.store.sessions().await.is_empty());
    Ok(())
}
