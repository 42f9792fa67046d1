//! Error types for the feature catalog.

use thiserror::Error;

/// Result type alias for feature operations.
pub type FeatureResult<T> = Result<T, FeatureError>;

/// Errors that can occur when manipulating a feature.
#[derive(Error, Debug)]
pub enum FeatureError {
    #[error("Feature '{feature}' has no field named '{field}'")]
    UnknownField {
        feature: &'static str,
        field: String,
    },
}
