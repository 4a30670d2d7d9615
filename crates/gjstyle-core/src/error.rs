// Rust guideline compliant 2026-10-14

//! Error types for the gjstyle core library.

use thiserror::Error;

/// Result type alias for gjstyle operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for gjstyle operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A document handed to the optimizer does not have the envelope shape.
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// Configuration file or environment override is invalid.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Response id does not match the generated format.
    #[error("Invalid response id: {0}")]
    InvalidId(String),
}
