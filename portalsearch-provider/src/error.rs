//! Provider error types.

use portalsearch_query::QueryError;
use thiserror::Error;

/// Message surfaced to clients when no better one is available.
pub const GENERIC_ERROR_MESSAGE: &str = "Error in Arcgis Search Provider";

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors that can occur while serving a `getData` call.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The inbound query was rejected before any upstream request.
    #[error("{0}")]
    Validation(String),

    /// The portal failed a page request, or the request never completed.
    #[error("upstream request failed ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl ProviderError {
    pub(crate) fn upstream(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        ProviderError::Upstream {
            status,
            message: if message.is_empty() {
                GENERIC_ERROR_MESSAGE.to_string()
            } else {
                message
            },
        }
    }

    /// HTTP status a caller should answer with.
    pub fn status_code(&self) -> u16 {
        match self {
            ProviderError::Validation(_) => 400,
            ProviderError::Upstream { status, .. } => *status,
            ProviderError::Internal(_) => 500,
        }
    }

    /// Message safe to hand back to the client.
    pub fn client_message(&self) -> &str {
        match self {
            ProviderError::Validation(message) => message,
            ProviderError::Upstream { message, .. } => message,
            ProviderError::Internal(_) => GENERIC_ERROR_MESSAGE,
        }
    }

    /// Returns true if the inbound query was at fault.
    pub fn is_validation(&self) -> bool {
        matches!(self, ProviderError::Validation(_))
    }
}

impl From<QueryError> for ProviderError {
    fn from(e: QueryError) -> Self {
        match e {
            QueryError::Validation(message) => ProviderError::Validation(message),
            other => ProviderError::Internal(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for ProviderError {
    fn from(e: reqwest::Error) -> Self {
        let status = e.status().map_or(500, |s| s.as_u16());
        ProviderError::upstream(status, e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portalsearch_geo::GeoError;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = ProviderError::from(QueryError::Validation("Invalid sort field given".into()));
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.client_message(), "Invalid sort field given");
        assert!(err.is_validation());
    }

    #[test]
    fn geo_failure_is_internal() {
        let err = ProviderError::from(QueryError::Geo(GeoError::Projection("nan".into())));
        assert!(matches!(err, ProviderError::Internal(_)));
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.client_message(), GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn empty_upstream_message_uses_default() {
        let err = ProviderError::upstream(503, "");
        assert_eq!(err.status_code(), 503);
        assert_eq!(err.client_message(), GENERIC_ERROR_MESSAGE);
    }
}
