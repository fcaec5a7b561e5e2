//! Address-to-coordinate lookup seam.
//!
//! Geocoding is a network service owned by the surrounding application. The
//! search only needs a coordinate; when the geocoder finds nothing, no search
//! is run.

use crate::{PointOfInterest, ProximitySearch, RankedResult, Result, SearchOptions};
use nearby_geo::{Coordinate, DistanceMetric};
use thiserror::Error;

/// Errors reported by a geocoding collaborator.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Service could not be reached or timed out
    #[error("Geocoding service unavailable: {0}")]
    Unavailable(String),

    /// Service answered with an error
    #[error("Geocoding failed: {0}")]
    Failed(String),
}

/// Translates a free-text address into a coordinate.
///
/// `Ok(None)` means the address was understood but nothing matched.
pub trait Geocoder {
    /// Looks up `address`. The address is passed through without validation.
    fn geocode(&self, address: &str) -> std::result::Result<Option<Coordinate>, GeocodeError>;
}

impl<F> Geocoder for F
where
    F: Fn(&str) -> std::result::Result<Option<Coordinate>, GeocodeError>,
{
    fn geocode(&self, address: &str) -> std::result::Result<Option<Coordinate>, GeocodeError> {
        self(address)
    }
}

impl<M: DistanceMetric> ProximitySearch<M> {
    /// Geocodes `address` and searches around it.
    ///
    /// Returns `Ok(None)` when the geocoder has no coordinate for the address.
    pub fn search_near_address<'a, G>(
        &self,
        geocoder: &G,
        address: &str,
        options: &SearchOptions,
        pois: &'a [PointOfInterest],
    ) -> Result<Option<Vec<RankedResult<'a>>>>
    where
        G: Geocoder + ?Sized,
    {
        match geocoder.geocode(address)? {
            Some(center) => self.search(center, options, pois).map(Some),
            None => {
                tracing::info!(address, "Address not found, skipping search");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SearchError, SearchErrorCode};

    type Lookup = std::result::Result<Option<Coordinate>, GeocodeError>;

    fn pois() -> Vec<PointOfInterest> {
        vec![
            PointOfInterest::new("near", Coordinate::new(37.5670, 126.9785)),
            PointOfInterest::new("far", Coordinate::new(35.1796, 129.0756)),
        ]
    }

    #[test]
    fn test_found_address_runs_search() {
        let geocoder = |_: &str| -> Lookup { Ok(Some(Coordinate::new(37.5665, 126.9780))) };
        let pois = pois();
        let results = ProximitySearch::new()
            .search_near_address(&geocoder, "Seoul City Hall", &SearchOptions::new(1.0), &pois)
            .unwrap()
            .unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].poi.id, "near");
    }

    #[test]
    fn test_missing_address_skips_search() {
        let geocoder = |_: &str| -> Lookup { Ok(None) };
        let pois = pois();
        let results = ProximitySearch::new()
            .search_near_address(&geocoder, "nowhere", &SearchOptions::new(1.0), &pois)
            .unwrap();
        assert!(results.is_none());
    }

    #[test]
    fn test_geocoder_failure_propagates() {
        let geocoder = |_: &str| -> Lookup { Err(GeocodeError::Unavailable("timeout".into())) };
        let pois = pois();
        let err = ProximitySearch::new()
            .search_near_address(&geocoder, "Seoul", &SearchOptions::new(1.0), &pois)
            .unwrap_err();
        assert!(matches!(err, SearchError::Geocode(GeocodeError::Unavailable(_))));
        assert_eq!(err.code(), SearchErrorCode::Geocode);
    }

    #[test]
    fn test_address_passed_verbatim() {
        let geocoder = |address: &str| -> Lookup {
            assert_eq!(address, "  서울 중구 세종대로 110 ");
            Ok(None)
        };
        let pois = pois();
        let _ = ProximitySearch::new().search_near_address(
            &geocoder,
            "  서울 중구 세종대로 110 ",
            &SearchOptions::new(1.0),
            &pois,
        );
    }
}
