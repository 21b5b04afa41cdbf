use std::path::PathBuf;

use thiserror::Error;

use crate::validate::ValidationIssue;

/// Result type alias for cuttle operations
pub type Result<T> = std::result::Result<T, CuttleError>;

/// Errors that can occur around the identity pipeline.
///
/// Resolution and projection themselves never fail; these errors come from
/// loading topology files, serializing batches, and opt-in validation.
#[derive(Error, Debug)]
pub enum CuttleError {
    /// Topology file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// File that failed
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// YAML parsing/serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Topology or identity list failed strict validation
    #[error("validation failed with {} issue(s)", .0.len())]
    Validation(Vec<ValidationIssue>),
}

impl CuttleError {
    /// Returns true if the error came from decoding or encoding a document
    #[must_use]
    pub const fn is_parse_error(&self) -> bool {
        matches!(self, Self::Yaml(_) | Self::Json(_))
    }

    /// Returns true if the error is a strict validation failure
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Validation findings, if this is a validation error
    #[must_use]
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            Self::Validation(issues) => issues,
            _ => &[],
        }
    }
}
