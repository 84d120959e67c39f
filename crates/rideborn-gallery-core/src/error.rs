use std::path::Path;

/// Errors surfaced by storage writes and card source parsing.
///
/// Reads of persisted gallery state never produce these: malformed or
/// missing state degrades to the default gallery instead.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A storage backend rejected a write or removal.
    #[error("storage error on key {key:?}: {message}")]
    Storage { key: String, message: String },

    /// A card list could not be parsed into identifiers.
    #[error("invalid card source {origin}: {message}")]
    CardSource { origin: String, message: String },
}

impl CoreError {
    pub(crate) fn card_source(file: Option<&Path>, message: impl Into<String>) -> Self {
        CoreError::CardSource {
            origin: file.map_or_else(|| "<inline>".to_string(), |p| p.display().to_string()),
            message: message.into(),
        }
    }
}
