use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for auto-version operations
#[derive(Error, Debug)]
pub enum AutoVersionError {
    #[error("Could not load {}, please make sure it exists ({})", .path.display(), .reason)]
    ManifestNotFound { path: PathBuf, reason: String },

    #[error(
        "Invalid version number found in {}, please make sure it is valid (found: {})",
        .path.display(),
        .value.as_deref().unwrap_or("<missing>")
    )]
    InvalidManifestVersion {
        path: PathBuf,
        value: Option<String>,
    },

    #[error("Tag listing unavailable: {0}")]
    TagListUnavailable(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Manifest serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in auto-version
pub type Result<T> = std::result::Result<T, AutoVersionError>;

impl AutoVersionError {
    /// Create a missing/unparsable manifest error
    pub fn manifest_not_found(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        AutoVersionError::ManifestNotFound {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an invalid manifest version error
    pub fn invalid_manifest_version(path: impl Into<PathBuf>, value: Option<&str>) -> Self {
        AutoVersionError::InvalidManifestVersion {
            path: path.into(),
            value: value.map(str::to_string),
        }
    }

    /// Create a tag listing error
    pub fn tag_list_unavailable(msg: impl Into<String>) -> Self {
        AutoVersionError::TagListUnavailable(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        AutoVersionError::Version(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        AutoVersionError::Config(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        AutoVersionError::Tag(msg.into())
    }
}
