//! Unified error types for the spec-maker application.
//!
//! The flow-control core itself never fails; errors only arise at the
//! edges (terminal setup, configuration, export).

use std::path::PathBuf;
use thiserror::Error;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Export/share collaborator errors
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Nothing to export: the draft is empty")]
    EmptyDraft,

    #[error("Failed to render spec: {0}")]
    Render(String),

    #[error("Failed to write artifact to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Sharing is not configured")]
    ShareUnavailable,

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for export operations
pub type ExportResult<T> = std::result::Result<T, ExportError>;
