//! Error types for stamping operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for stamping operations.
pub type StampResult<T> = Result<T, StampError>;

/// Errors that can occur while stamping a manifest.
#[derive(Error, Debug)]
pub enum StampError {
    #[error("Manifest not found at path: {0}")]
    NotFound(PathBuf),

    #[error("Invalid manifest format in file {path}: {message}")]
    InvalidFormat { path: PathBuf, message: String },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid version {value:?}: {message}")]
    InvalidVersion { value: String, message: String },

    #[error("Failed to replace manifest {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StampError {
    /// Whether the error comes from the manifest's content or location rather
    /// than from the environment.
    pub fn is_manifest_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_)
                | Self::InvalidFormat { .. }
                | Self::MissingField(_)
                | Self::InvalidVersion { .. }
                | Self::Json(_)
        )
    }
}
