//! Error types for the advisor engine

use thiserror::Error;

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {

    // =============================
    // Turn Errors
    // =============================

    /// The profile/streak store rejected a read or write. The turn was not committed.
    #[error("Persistence error: {0}")]
    PersistenceError(String),

    #[error("Message is empty")]
    EmptyMessage,

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Market data error: {0}")]
    MarketDataError(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AdvisorError {
    /// Whether the turn failed because state could not be stored or loaded.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, AdvisorError::PersistenceError(_))
    }
}
