//! Error types for query validation and translation.

use portalsearch_geo::GeoError;
use thiserror::Error;

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;

/// Errors that can occur before any upstream request is made.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The inbound query is malformed or names a disallowed value.
    #[error("{0}")]
    Validation(String),

    /// Reprojection of a supported rectangle failed.
    #[error("geometry error: {0}")]
    Geo(#[from] GeoError),
}

impl QueryError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        QueryError::Validation(message.into())
    }

    /// Returns true for client-side validation failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, QueryError::Validation(_))
    }
}
