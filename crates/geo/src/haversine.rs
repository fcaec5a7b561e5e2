//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two points
//! on a sphere given their longitudes and latitudes. It treats the Earth as a
//! perfect sphere of radius [`EARTH_RADIUS_KM`].

use crate::{Coordinate, Result};

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A strategy for measuring the distance between two coordinates.
///
/// Implementations receive coordinates that have already been validated and
/// must return a non-negative distance in kilometers.
pub trait DistanceMetric: Send + Sync {
    /// Distance between `from` and `to` in kilometers.
    fn distance_km(&self, from: &Coordinate, to: &Coordinate) -> f64;
}

/// Spherical great-circle distance with a mean Earth radius.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Haversine;

impl DistanceMetric for Haversine {
    #[inline]
    fn distance_km(&self, from: &Coordinate, to: &Coordinate) -> f64 {
        haversine_distance(from, to)
    }
}

/// Validates both coordinates and returns the distance between them in kilometers.
///
/// # Errors
/// Returns [`GeoError`](crate::GeoError) when either coordinate is non-finite
/// or out of range.
///
/// # Example
/// ```
/// use nearby_geo::{distance, Coordinate};
///
/// let origin = Coordinate::new(0.0, 0.0);
/// let quarter = Coordinate::new(0.0, 90.0);
///
/// let km = distance(&origin, &quarter).unwrap();
/// assert!((km - 10_007.5).abs() < 1.0);
/// ```
pub fn distance(from: &Coordinate, to: &Coordinate) -> Result<f64> {
    from.validate()?;
    to.validate()?;
    Ok(haversine_distance(from, to))
}

/// Calculates the great-circle distance between two coordinates in kilometers.
///
/// Does not validate its inputs; see [`distance`] for the checked variant.
///
/// # Example
/// ```
/// use nearby_geo::{haversine_distance, Coordinate};
///
/// let seoul = Coordinate::new(37.5665, 126.9780);
/// let busan = Coordinate::new(35.1796, 129.0756);
///
/// let km = haversine_distance(&seoul, &busan);
/// assert!((km - 325.0).abs() < 5.0);
/// ```
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_KM)
}

/// Calculates the great-circle distance between two coordinates in meters.
#[inline]
pub fn haversine_distance_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_M)
}

#[inline]
fn haversine_distance_with_radius(from: &Coordinate, to: &Coordinate, radius: f64) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    // Rounding can push `a` a hair above 1 for antipodal points.
    let c = 2.0 * a.sqrt().min(1.0).asin();

    radius * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeoError;
    use proptest::prelude::*;

    const CITY_HALL: Coordinate = Coordinate { latitude: 37.5665, longitude: 126.9780 };
    const BUSAN: Coordinate = Coordinate { latitude: 35.1796, longitude: 129.0756 };
    const BERLIN: Coordinate = Coordinate { latitude: 52.5200, longitude: 13.4050 };
    const PARIS: Coordinate = Coordinate { latitude: 48.8566, longitude: 2.3522 };

    #[test]
    fn test_seoul_to_busan() {
        let distance = haversine_distance(&CITY_HALL, &BUSAN);
        // Expected: ~325 km
        assert!((distance - 325.0).abs() < 5.0, "Seoul-Busan: {}", distance);
    }

    #[test]
    fn test_berlin_to_paris() {
        let distance = haversine_distance(&BERLIN, &PARIS);
        assert!((distance - 878.0).abs() < 5.0, "Berlin-Paris: {}", distance);
    }

    #[test]
    fn test_same_point_zero_distance() {
        assert_eq!(distance(&CITY_HALL, &CITY_HALL).unwrap(), 0.0);
    }

    #[test]
    fn test_quarter_great_circle() {
        let d = distance(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 90.0)).unwrap();
        assert!((d - 10_007.5).abs() < 1.0, "quarter circle: {}", d);
    }

    #[test]
    fn test_antipodal_points_are_finite() {
        let d = haversine_distance(&Coordinate::new(0.0, 0.0), &Coordinate::new(0.0, 180.0));
        assert!(d.is_finite());
        assert!((d - EARTH_RADIUS_KM * std::f64::consts::PI).abs() < 1e-6);
    }

    #[test]
    fn test_meters_conversion() {
        let km = haversine_distance(&BERLIN, &PARIS);
        let meters = haversine_distance_meters(&BERLIN, &PARIS);
        assert!((meters - km * 1000.0).abs() < 1.0);
    }

    #[test]
    fn test_checked_distance_rejects_invalid_input() {
        let bad = Coordinate::new(f64::NAN, 0.0);
        assert!(matches!(distance(&bad, &CITY_HALL), Err(GeoError::InvalidLatitude(_))));
        assert!(matches!(
            distance(&CITY_HALL, &Coordinate::new(0.0, -200.0)),
            Err(GeoError::InvalidLongitude(_))
        ));
    }

    #[test]
    fn test_metric_matches_free_function() {
        let metric: &dyn DistanceMetric = &Haversine;
        assert_eq!(metric.distance_km(&BERLIN, &PARIS), haversine_distance(&BERLIN, &PARIS));
    }

    fn coordinate() -> impl Strategy<Value = Coordinate> {
        (-90.0f64..=90.0, -180.0f64..=180.0).prop_map(|(lat, lon)| Coordinate::new(lat, lon))
    }

    proptest! {
        #[test]
        fn prop_distance_is_symmetric(a in coordinate(), b in coordinate()) {
            let ab = distance(&a, &b).unwrap();
            let ba = distance(&b, &a).unwrap();
            prop_assert!((ab - ba).abs() < 1e-9);
        }

        #[test]
        fn prop_distance_to_self_is_zero(a in coordinate()) {
            prop_assert!(distance(&a, &a).unwrap().abs() < 1e-9);
        }

        #[test]
        fn prop_distance_is_bounded(a in coordinate(), b in coordinate()) {
            let d = distance(&a, &b).unwrap();
            prop_assert!(d >= 0.0);
            prop_assert!(d <= EARTH_RADIUS_KM * std::f64::consts::PI + 1e-6);
        }
    }
}
