//! Error types for the geo crate.

use thiserror::Error;

/// Result type alias for geo operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur during geo operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// Latitude is NaN, infinite or outside [-90, 90]
    #[error("Invalid latitude: {0} (expected a finite value in [-90, 90])")]
    InvalidLatitude(f64),

    /// Longitude is NaN, infinite or outside [-180, 180]
    #[error("Invalid longitude: {0} (expected a finite value in [-180, 180])")]
    InvalidLongitude(f64),
}

/// Error code for integration with nearby-core error handling.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Invalid latitude value
    InvalidLatitude = 10001,
    /// Invalid longitude value
    InvalidLongitude = 10002,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::InvalidLatitude(_) => GeoErrorCode::InvalidLatitude,
            GeoError::InvalidLongitude(_) => GeoErrorCode::InvalidLongitude,
        }
    }
}
