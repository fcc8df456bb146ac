//! Error types for canvas configuration and event scripts.

use thiserror::Error;

/// Errors raised while loading a configuration file or an event script.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScriptError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Parsed, but the values are unusable.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration and script loading.
pub type ScriptResult<T> = Result<T, ScriptError>;
