//! Error types for the khata-core library.

use thiserror::Error;

/// Main error type for the khata library.
///
/// Parsing never fails on malformed or incomplete document text: every field
/// in the output models has a typed default and a missed pattern leaves the
/// default in place. These variants cover the ambient layer only.
#[derive(Error, Debug)]
pub enum KhataError {
    /// I/O error (configuration files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the khata library.
pub type Result<T> = std::result::Result<T, KhataError>;
