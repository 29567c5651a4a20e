//! # Common Test Utilities
//!
//! This module centralizes the test harness used across the `campusbot-server`
//! integration tests.
//!
//! - `TestApp`: spawns a real server on a random port, backed by a temporary
//!   research data directory, and drives it with a `reqwest` client.

// Allow unused code because this is a test utility module, and not all
// functions might be used by every test file that includes it.
#![allow(unused)]

use anyhow::Result;
use axum::serve;
use campusbot_server::{
    config, router,
    state::{build_app_state, AppState},
};
use reqwest::Client;
use serde_json::{json, Value};
use std::{fs::File, io::Write, net::SocketAddr, path::PathBuf};
use tempfile::{tempdir, TempDir};
use tokio::{net::TcpListener, task::JoinHandle};

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub data_dir: PathBuf,
    pub app_state: AppState,
    _temp_dir: TempDir,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application server and returns a `TestApp` instance.
    pub async fn spawn() -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let temp_dir = tempdir()?;
        let data_dir = temp_dir.path().join("research-data");
        let config_path = temp_dir.path().join("config.yml");
        let config_content = format!(
            r#"
port: 0
data_dir: "{}"
cors_permissive: true
"#,
            data_dir.display()
        );
        let mut file = File::create(&config_path)?;
        file.write_all(config_content.as_bytes())?;

        let mut config = config::get_config(config_path.to_str())?;
        // Environment overrides must not redirect the harness to a real data directory.
        config.data_dir = data_dir.display().to_string();
        let app_state = build_app_state(config).await?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let app = router::create_router(app_state.clone());
        let server_handle = tokio::spawn(async move {
            let server = serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {}", e);
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            data_dir,
            app_state,
            _temp_dir: temp_dir,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Posts a chat message and returns the status code and JSON body.
    pub async fn chat(&self, body: Value) -> Result<(u16, Value)> {
        let response = self
            .client
            .post(format!("{}/api/chat", self.address))
            .json(&body)
            .send()
            .await?;
        let status = response.status().as_u16();
        Ok((status, response.json().await?))
    }

    /// Posts a rating and returns the status code and JSON body.
    pub async fn rate(&self, body: Value) -> Result<(u16, Value)> {
        let response = self
            .client
            .post(format!("{}/api/rate", self.address))
            .json(&body)
            .send()
            .await?;
        let status = response.status().as_u16();
        Ok((status, response.json().await?))
    }

    /// Fetches a JSON document with GET.
    pub async fn get_json(&self, path: &str) -> Result<(u16, Value)> {
        let response = self
            .client
            .get(format!("{}{path}", self.address))
            .send()
            .await?;
        let status = response.status().as_u16();
        Ok((status, response.json().await?))
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// A chat request body in the shape the UI sends.
pub fn chat_body(message: &str, hierarchy: &str, formality: &str, session: &str) -> Value {
    json!({
        "message": message,
        "hierarchy": hierarchy,
        "formality": formality,
        "sessionId": session,
    })
}
