//! Coordinates and great-circle distance for nearby search.
//!
//! This crate provides:
//! - A validated latitude/longitude [`Coordinate`] value type
//! - Haversine distance calculations in kilometers and meters
//! - A [`DistanceMetric`] seam so callers can swap in a different formula
//!
//! # Example
//!
//! ```
//! use nearby_geo::{distance, Coordinate};
//!
//! let city_hall = Coordinate::new(37.5665, 126.9780);
//! let gangnam = Coordinate::new(37.4979, 127.0276);
//!
//! let km = distance(&city_hall, &gangnam).unwrap();
//! assert!((km - 8.8).abs() < 0.5);
//! ```

mod error;
mod haversine;

pub use error::{GeoError, GeoErrorCode, Result};
pub use haversine::{
    distance, haversine_distance, haversine_distance_meters, DistanceMetric, Haversine,
    EARTH_RADIUS_KM, EARTH_RADIUS_M,
};

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate without validating it.
    ///
    /// Use [`Coordinate::try_new`] for values coming from user input.
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Creates a coordinate, rejecting non-finite or out-of-range values.
    ///
    /// # Example
    /// ```
    /// use nearby_geo::{Coordinate, GeoError};
    ///
    /// assert!(Coordinate::try_new(37.5665, 126.9780).is_ok());
    /// assert_eq!(
    ///     Coordinate::try_new(95.0, 0.0),
    ///     Err(GeoError::InvalidLatitude(95.0))
    /// );
    /// ```
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        let coord = Self::new(latitude, longitude);
        coord.validate()?;
        Ok(coord)
    }

    /// Checks that both components are finite and within range.
    pub fn validate(&self) -> Result<()> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(GeoError::InvalidLatitude(self.latitude));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(GeoError::InvalidLongitude(self.longitude));
        }
        Ok(())
    }

    /// Returns true if the coordinate has valid values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_creation() {
        let coord = Coordinate::new(37.5665, 126.9780);
        assert_eq!(coord.latitude, 37.5665);
        assert_eq!(coord.longitude, 126.9780);
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(Coordinate::new(0.0, 0.0).is_valid());
        assert!(Coordinate::new(90.0, 180.0).is_valid());
        assert!(Coordinate::new(-90.0, -180.0).is_valid());
        assert!(!Coordinate::new(91.0, 0.0).is_valid());
        assert!(!Coordinate::new(0.0, 181.0).is_valid());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            Coordinate::try_new(f64::NAN, 0.0),
            Err(GeoError::InvalidLatitude(_))
        ));
        assert_eq!(
            Coordinate::try_new(0.0, f64::INFINITY),
            Err(GeoError::InvalidLongitude(f64::INFINITY))
        );
    }

    #[test]
    fn test_coordinate_from_tuple() {
        let coord: Coordinate = (37.5665, 126.9780).into();
        assert_eq!(coord.latitude, 37.5665);
        assert_eq!(coord.longitude, 126.9780);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Coordinate::new(37.5665, 126.978).to_string(),
            "(37.566500, 126.978000)"
        );
    }
}
