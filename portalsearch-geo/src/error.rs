//! Error types for spatial reference handling.

use thiserror::Error;

/// Result type for geo operations.
pub type GeoResult<T> = Result<T, GeoError>;

/// Errors that can occur while reprojecting a rectangle.
#[derive(Debug, Error)]
pub enum GeoError {
    /// No projection definition is registered for the WKID.
    #[error("unsupported wkid {0}")]
    UnsupportedWkid(u32),

    /// A geographic input coordinate lies outside the valid latitude range.
    #[error("latitude {lat} is out of range for wkid {wkid}")]
    LatitudeOutOfRange { wkid: u32, lat: f64 },

    /// The projection library rejected a definition or a point.
    #[error("projection failed: {0}")]
    Projection(String),
}

impl GeoError {
    /// Returns true when the input coordinates, not the setup, were at fault.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, GeoError::LatitudeOutOfRange { .. })
    }
}

impl From<proj4rs::errors::Error> for GeoError {
    fn from(e: proj4rs::errors::Error) -> Self {
        GeoError::Projection(e.to_string())
    }
}
