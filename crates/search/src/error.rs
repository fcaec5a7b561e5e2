//! Error types for the search crate.

use nearby_geo::GeoError;
use thiserror::Error;

use crate::geocode::GeocodeError;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during search operations.
///
/// All variants except [`SearchError::Geocode`] are input-validation failures:
/// repeating the same call cannot succeed.
#[derive(Debug, Error)]
pub enum SearchError {
    /// Radius is zero, negative or NaN
    #[error("Invalid radius: {0} km (must be greater than zero)")]
    InvalidRadius(f64),

    /// Search center is not a valid coordinate
    #[error("Invalid search center: {0}")]
    InvalidCenter(#[from] GeoError),

    /// The geocoding collaborator failed
    #[error(transparent)]
    Geocode(#[from] GeocodeError),
}

/// Error code for integration with nearby-core error handling.
/// Range: 11xxx for search errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorCode {
    /// Invalid radius
    InvalidRadius = 11001,
    /// Invalid center coordinate
    InvalidCenter = 11002,
    /// Geocoder failure
    Geocode = 11003,
}

impl SearchError {
    /// Returns the error code for this error.
    pub fn code(&self) -> SearchErrorCode {
        match self {
            SearchError::InvalidRadius(_) => SearchErrorCode::InvalidRadius,
            SearchError::InvalidCenter(_) => SearchErrorCode::InvalidCenter,
            SearchError::Geocode(_) => SearchErrorCode::Geocode,
        }
    }
}
