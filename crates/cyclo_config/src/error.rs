//! Error types for configuration persistence.

use thiserror::Error;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while saving or loading a configuration.
///
/// Both load failures abort the whole operation; the caller's in-memory
/// configuration is never partially overwritten.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Document version {found} is not compatible with the supported version {expected}")]
    IncompatibleVersion { found: u32, expected: u32 },

    #[error("Unknown feature label: '{0}'")]
    UnknownFeature(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
