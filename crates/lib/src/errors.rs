use thiserror::Error;

/// Custom error types for the chatbot engine and its research store.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Unknown hierarchy: {0}")]
    UnknownHierarchy(String),
    #[error("Unknown formality: {0}")]
    UnknownFormality(String),
    #[error("Unknown export type: {0}")]
    UnknownExportKind(String),
    #[error("Rating must be a whole number from 1 to 5, got {0}")]
    InvalidRating(String),
    #[error("Research store I/O error on '{path}': {source}")]
    StoreIo {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Research data file '{path}' does not hold a JSON array; leaving it untouched")]
    CorruptDataFile { path: String },
    #[error("Failed to serialize research data: {0}")]
    JsonSerialization(#[from] serde_json::Error),
}
