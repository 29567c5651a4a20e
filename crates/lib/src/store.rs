//! # Research Store
//!
//! Flat JSON-file persistence for chat turns and ratings. Each file holds a
//! single pretty-printed JSON document that is rewritten whole on every append,
//! after which `analytics.json` is recomputed from the two logs.
//!
//! Appends go through one async mutex, so concurrent requests in the same
//! process never lose each other's records. An append keeps every existing
//! record verbatim, including ones this crate cannot parse, and refuses to
//! touch a log that is not a JSON array. Files are replaced by rename, so a
//! reader never sees a half-written document.
//!
//! Typed reads skip unparsable records with a warning, and a missing or
//! unparsable file reads as empty.

use crate::{
    analytics::{Analytics, ResearchSummary},
    constants::{ANALYTICS_FILE, RATINGS_FILE, SESSIONS_FILE},
    errors::ChatError,
    metadata::ReplyMetadata,
    types::{Formality, Hierarchy},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use std::{
    fmt,
    io::ErrorKind,
    path::{Path, PathBuf},
    str::FromStr,
};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// One stored chat turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub id: String,
    pub session_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub user_message: String,
    pub bot_response: String,
    pub metadata: ReplyMetadata,
}

/// A rating as submitted, before it is stamped and stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRating {
    /// Client-side identifier of the rated reply, stored as sent.
    pub message_id: Value,
    pub rating: u8,
    pub feedback: String,
    pub hierarchy: Hierarchy,
    pub formality: Formality,
    pub session_id: Option<String>,
}

impl NewRating {
    /// Reads a star score from JSON, accepting integers and numeric strings.
    pub fn score_from_json(raw: &Value) -> Result<u8, ChatError> {
        let parsed = match raw {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        };
        match parsed {
            Some(score @ 1..=5) => Ok(score as u8),
            _ => Err(ChatError::InvalidRating(raw.to_string())),
        }
    }
}

/// One stored rating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: String,
    pub message_id: Value,
    pub rating: u8,
    #[serde(default)]
    pub feedback: String,
    pub hierarchy: Hierarchy,
    pub formality: Formality,
    pub session_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// The data sets that can be downloaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Sessions,
    Ratings,
    Analytics,
}

impl ExportKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Sessions => "sessions",
            ExportKind::Ratings => "ratings",
            ExportKind::Analytics => "analytics",
        }
    }

    fn file_name(&self) -> &'static str {
        match self {
            ExportKind::Sessions => SESSIONS_FILE,
            ExportKind::Ratings => RATINGS_FILE,
            ExportKind::Analytics => ANALYTICS_FILE,
        }
    }

    /// The suggested download name, e.g. `chatbot-ratings-2025-01-31.json`.
    pub fn download_name(&self, date: NaiveDate) -> String {
        format!("chatbot-{}-{}.json", self.as_str(), date.format("%Y-%m-%d"))
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportKind {
    type Err = ChatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sessions" => Ok(ExportKind::Sessions),
            "ratings" => Ok(ExportKind::Ratings),
            "analytics" => Ok(ExportKind::Analytics),
            other => Err(ChatError::UnknownExportKind(other.to_string())),
        }
    }
}

/// The JSON-file research store rooted at one data directory.
#[derive(Debug)]
pub struct ResearchStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl ResearchStore {
    /// Opens the store, creating the directory and any missing data file.
    ///
    /// Existing files are never overwritten.
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, ChatError> {
        let dir = dir.into();
        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|source| io_error(&dir, source))?;

        let store = Self {
            dir,
            write_lock: Mutex::new(()),
        };

        let seeds = [
            (SESSIONS_FILE, serde_json::to_value(Vec::<Interaction>::new())?),
            (RATINGS_FILE, serde_json::to_value(Vec::<Rating>::new())?),
            (ANALYTICS_FILE, serde_json::to_value(Analytics::default())?),
        ];
        for (name, empty) in seeds {
            let path = store.path(name);
            let exists = tokio::fs::try_exists(&path)
                .await
                .map_err(|source| io_error(&path, source))?;
            if !exists {
                debug!(path = %path.display(), "Seeding research data file");
                write_json(&path, &empty).await?;
            }
        }

        info!(dir = %store.dir.display(), "Research data storage initialized");
        Ok(store)
    }

    fn path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Appends a chat turn and refreshes the analytics.
    pub async fn log_interaction(
        &self,
        session_id: Option<String>,
        user_message: &str,
        bot_response: &str,
        metadata: ReplyMetadata,
    ) -> Result<Interaction, ChatError> {
        let _guard = self.write_lock.lock().await;

        let interaction = Interaction {
            id: Uuid::new_v4().to_string(),
            session_id,
            timestamp: Utc::now(),
            user_message: user_message.to_string(),
            bot_response: bot_response.to_string(),
            metadata,
        };

        append_record(&self.path(SESSIONS_FILE), &interaction).await?;
        self.refresh_analytics().await?;

        debug!(id = %interaction.id, "Logged interaction");
        Ok(interaction)
    }

    /// Appends a rating and refreshes the analytics.
    pub async fn log_rating(&self, new: NewRating) -> Result<Rating, ChatError> {
        let _guard = self.write_lock.lock().await;

        let rating = Rating {
            id: Uuid::new_v4().to_string(),
            message_id: new.message_id,
            rating: new.rating,
            feedback: new.feedback,
            hierarchy: new.hierarchy,
            formality: new.formality,
            session_id: new.session_id,
            timestamp: Utc::now(),
        };

        append_record(&self.path(RATINGS_FILE), &rating).await?;
        self.refresh_analytics().await?;

        debug!(id = %rating.id, score = rating.rating, "Logged rating");
        Ok(rating)
    }

    /// Recomputes `analytics.json` from the records that parse. Callers hold `write_lock`.
    async fn refresh_analytics(&self) -> Result<Analytics, ChatError> {
        let analytics = Analytics::compute(&self.sessions().await, &self.ratings().await);
        write_json(&self.path(ANALYTICS_FILE), &analytics).await?;
        Ok(analytics)
    }

    /// The stored chat turns. Records that do not parse are skipped with a warning.
    pub async fn sessions(&self) -> Vec<Interaction> {
        read_records(&self.path(SESSIONS_FILE)).await
    }

    /// The stored ratings. Records that do not parse are skipped with a warning.
    pub async fn ratings(&self) -> Vec<Rating> {
        read_records(&self.path(RATINGS_FILE)).await
    }

    pub async fn analytics(&self) -> Analytics {
        read_json(&self.path(ANALYTICS_FILE))
            .await
            .unwrap_or_default()
    }

    /// Returns a data set exactly as it is stored on disk.
    pub async fn export(&self, kind: ExportKind) -> Value {
        let raw: Option<Value> = read_json(&self.path(kind.file_name())).await;
        raw.unwrap_or_else(|| Value::Array(Vec::new()))
    }

    /// Builds the research summary from the current files.
    pub async fn summary(&self) -> ResearchSummary {
        let sessions = self.sessions().await;
        let ratings = self.ratings().await;
        let analytics = self.analytics().await;
        ResearchSummary::compute(&sessions, &ratings, &analytics)
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ChatError {
    ChatError::StoreIo {
        path: path.display().to_string(),
        source,
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read research data file");
            return None;
        }
    };
    match serde_json::from_str(&content) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to parse research data file");
            None
        }
    }
}

/// Reads a log file, keeping the records that deserialize as `T`.
async fn read_records<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    let records: Vec<Value> = read_json(path).await.unwrap_or_default();
    let total = records.len();
    let parsed: Vec<T> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                warn!(path = %path.display(), index, error = %e, "Skipping unreadable record");
                None
            }
        })
        .collect();
    if parsed.len() < total {
        debug!(path = %path.display(), kept = parsed.len(), total, "Read log with skipped records");
    }
    parsed
}

/// Appends `record` to the JSON array in `path`, keeping every existing record as is.
///
/// A missing file starts a new log. A file that is not a JSON array is left
/// untouched and reported as `ChatError::CorruptDataFile`.
async fn append_record<T: Serialize>(path: &Path, record: &T) -> Result<(), ChatError> {
    let mut records = match tokio::fs::read_to_string(path).await {
        Ok(content) => match serde_json::from_str::<Value>(&content) {
            Ok(Value::Array(records)) => records,
            _ => {
                return Err(ChatError::CorruptDataFile {
                    path: path.display().to_string(),
                })
            }
        },
        Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
        Err(source) => return Err(io_error(path, source)),
    };
    records.push(serde_json::to_value(record)?);
    write_json(path, &records).await
}

/// Writes pretty-printed JSON through a sibling temp file renamed over `path`,
/// so readers see either the old document or the new one.
async fn write_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> Result<(), ChatError> {
    let content = serde_json::to_string_pretty(data)?;
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("data");
    let tmp_path = path.with_file_name(format!(".{file_name}.{}.tmp", Uuid::new_v4()));

    tokio::fs::write(&tmp_path, content)
        .await
        .map_err(|source| io_error(&tmp_path, source))?;
    if let Err(source) = tokio::fs::rename(&tmp_path, path).await {
        let _ = tokio::fs::remove_file(&tmp_path).await;
        return Err(io_error(path, source));
    }
    Ok(())
}
