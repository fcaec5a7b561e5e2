//! Nearest-first point-of-interest search for nearby.
//!
//! This crate provides:
//! - [`PointOfInterest`] records with opaque display attributes
//! - Radius filtering and stable distance ranking with optional parallelism
//! - Live open/closed status from parsed operating hours
//! - A [`Geocoder`] seam for searching around a free-text address
//!
//! # Example
//!
//! ```
//! use nearby_geo::Coordinate;
//! use nearby_hours::{parse, TimeOfDay};
//! use nearby_search::{search, PointOfInterest, SearchOptions};
//!
//! let pois = vec![
//!     PointOfInterest::new("Seoul Plaza Restroom", Coordinate::new(37.5663, 126.9779))
//!         .with_hours(parse("06:00~23:00")),
//! ];
//!
//! let options = SearchOptions::new(1.0).at(TimeOfDay::hm(7, 30).unwrap()).limit(10);
//! let results = search(Coordinate::new(37.5665, 126.9780), &options, &pois).unwrap();
//! assert_eq!(results.len(), 1);
//! ```

mod error;
mod geocode;
mod poi;
mod proximity;

pub use error::{Result, SearchError, SearchErrorCode};
pub use geocode::{GeocodeError, Geocoder};
pub use poi::{PointOfInterest, RankedResult};
pub use proximity::{search, search_nearby, ProximitySearch, SearchOptions};
