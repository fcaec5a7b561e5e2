//! Points of interest and ranked search results.

use nearby_geo::Coordinate;
use nearby_hours::{Availability, OperatingHours};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A place that can be found by proximity search.
///
/// `attributes` holds display fields (address, phone, capacity, ...) that the
/// search passes through untouched.
///
/// # Example
/// ```
/// use nearby_geo::Coordinate;
/// use nearby_hours::parse;
/// use nearby_search::PointOfInterest;
///
/// let poi = PointOfInterest::new("Sejong-ro Parking", Coordinate::new(37.5725, 126.9760))
///     .with_hours(parse("0900~2100"))
///     .with_attribute("address", "Jongno-gu, Seoul");
///
/// assert!(poi.hours.is_known());
/// assert_eq!(poi.attribute("address"), Some("Jongno-gu, Seoul"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    /// Identifier or display name
    pub id: String,
    /// Position of the place
    pub location: Coordinate,
    /// Operating hours, `Unknown` when not available
    #[serde(default)]
    pub hours: OperatingHours,
    /// Opaque display fields
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl PointOfInterest {
    /// Creates a point of interest with unknown hours and no attributes.
    pub fn new(id: impl Into<String>, location: Coordinate) -> Self {
        Self {
            id: id.into(),
            location,
            hours: OperatingHours::Unknown,
            attributes: BTreeMap::new(),
        }
    }

    /// Sets the operating hours.
    pub fn with_hours(mut self, hours: OperatingHours) -> Self {
        self.hours = hours;
        self
    }

    /// Adds a display attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Looks up a display attribute.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

/// One entry of a search result, borrowing the matched point of interest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedResult<'a> {
    /// The matched place
    pub poi: &'a PointOfInterest,
    /// Great-circle distance from the search center in kilometers
    pub distance_km: f64,
    /// Availability at the requested time, absent when no time was given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Availability>,
}
