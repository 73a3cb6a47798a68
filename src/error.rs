//! Error types for request construction and execution.

use thiserror::Error;

use crate::data::Category;

/// Errors raised while building or executing a request.
#[derive(Debug, Error)]
pub enum DslError {
    /// An argument had an unusable value.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A composed object was not of the expected category.
    #[error("argument must be a {expected}, got {found}")]
    TypeMismatch { expected: Category, found: String },

    /// An execution method was called without a transport client.
    #[error("No Client Set")]
    NoClient,

    /// A required identifying field was not set before a CRUD call.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The transport reported a failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// Internal failure (runtime construction, channel closed, ...).
    #[error("internal error: {0}")]
    Internal(String),

    /// JSON encoding or decoding failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DslError {
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        DslError::InvalidArgument(msg.into())
    }

    /// Build a mismatch error for a value tagged `found` (or untagged).
    pub fn type_mismatch(expected: Category, found: Option<Category>) -> Self {
        DslError::TypeMismatch {
            expected,
            found: found.map_or_else(|| "untyped value".to_string(), |c| c.to_string()),
        }
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        DslError::Transport(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        DslError::Internal(msg.into())
    }
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, DslError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_names_expected_category() {
        let err = DslError::type_mismatch(Category::Filter, None);
        assert_eq!(err.to_string(), "argument must be a filter, got untyped value");

        let err = DslError::type_mismatch(Category::Query, Some(Category::GeoPoint));
        assert_eq!(err.to_string(), "argument must be a query, got geo point");
    }

    #[test]
    fn test_no_client_message() {
        assert_eq!(DslError::NoClient.to_string(), "No Client Set");
    }
}
