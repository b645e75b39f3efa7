//! Error types for persistence.

use thiserror::Error;

/// Result type for persistence operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Errors that can occur while reading or writing saves and statistics.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored record could not be decoded.
    #[error("unreadable record: {0}")]
    Deserialization(serde_json::Error),

    /// No save exists under this name.
    #[error("no save named \"{0}\"")]
    SaveNotFound(String),

    /// The name has no characters usable in a file name.
    #[error("invalid save name: \"{0}\"")]
    InvalidSaveName(String),

    /// There are no global statistics yet.
    #[error("no statistics recorded yet")]
    NoStatistics,
}
