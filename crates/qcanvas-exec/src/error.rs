//! Error types for export and execution.

use thiserror::Error;

/// Errors that can occur while exporting or executing a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExecError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Backend answered with a non-success status.
    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    /// Backend answered 2xx without a `result` field.
    #[error("Execution response has no 'result' field")]
    MissingResult,

    /// Invalid client configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Result type for export and execution operations.
pub type ExecResult<T> = Result<T, ExecError>;
