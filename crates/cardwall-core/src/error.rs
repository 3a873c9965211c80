//! Core error types for cardwall-core.
//!
//! One taxonomy shared by the storage layer, the board materializer, and the
//! recommendation engine. A suggester finding no signal is not an error and
//! never surfaces here; only missing entities, denied access, and
//! infrastructure failures do.

use thiserror::Error;

/// Core error type for cardwall-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// The requested entity does not exist (404-equivalent).
    #[error("{0} not found")]
    NotFound(String),

    /// The requester is neither owner nor member (401-equivalent).
    #[error("user not authorized: {0}")]
    Access(String),

    /// Invalid input (missing title, duplicate email, bad patch).
    #[error("validation error: {0}")]
    Validation(String),

    /// SQLite errors from the storage layer.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO errors.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration load/save errors.
    #[error("configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// Board-absent error with the conventional message.
    pub fn board_not_found() -> Self {
        CoreError::NotFound("Board".to_string())
    }

    /// Access error for a requester id.
    pub fn not_authorized(user_id: &str) -> Self {
        CoreError::Access(user_id.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
