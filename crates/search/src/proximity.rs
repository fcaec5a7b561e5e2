//! Radius-filtered, distance-ranked search.

use crate::{PointOfInterest, RankedResult, Result, SearchError};
use nearby_geo::{Coordinate, DistanceMetric, Haversine};
use nearby_hours::{classify, Availability, TimeOfDay};

/// Parameters of one search besides its center.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOptions {
    /// Maximum distance from the center in kilometers, inclusive
    pub radius_km: f64,
    /// Local time used to classify availability; `None` omits status
    pub now: Option<TimeOfDay>,
    /// Maximum number of results, applied after filtering and sorting
    pub limit: Option<usize>,
    /// Keep only places that are open at `now`; ignored without `now`
    pub only_open: bool,
}

impl SearchOptions {
    /// Options with the given radius, no time, no limit.
    pub fn new(radius_km: f64) -> Self {
        Self {
            radius_km,
            now: None,
            limit: None,
            only_open: false,
        }
    }

    /// Classify availability at `now`.
    pub fn at(mut self, now: TimeOfDay) -> Self {
        self.now = Some(now);
        self
    }

    /// Cap the number of results.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Drop places that are not open at the requested time.
    pub fn only_open(mut self, only_open: bool) -> Self {
        self.only_open = only_open;
        self
    }

    /// Rejects NaN, zero and negative radii.
    pub fn validate(&self) -> Result<()> {
        if self.radius_km.is_nan() || self.radius_km <= 0.0 {
            return Err(SearchError::InvalidRadius(self.radius_km));
        }
        Ok(())
    }
}

/// Nearest-first search over a slice of points of interest.
///
/// The distance formula is pluggable through [`DistanceMetric`]; the default
/// is [`Haversine`].
#[derive(Debug, Clone, Default)]
pub struct ProximitySearch<M = Haversine> {
    metric: M,
}

impl ProximitySearch<Haversine> {
    /// Search using great-circle distance.
    pub fn new() -> Self {
        Self { metric: Haversine }
    }
}

impl<M: DistanceMetric> ProximitySearch<M> {
    /// Search using a custom distance metric.
    pub fn with_metric(metric: M) -> Self {
        Self { metric }
    }

    /// Ranks `pois` by distance from `center`.
    ///
    /// Keeps entries with `distance_km <= options.radius_km`, sorted ascending.
    /// Equal distances keep their input order. Points whose own coordinates are
    /// invalid are skipped with a warning.
    ///
    /// # Errors
    /// [`SearchError::InvalidCenter`] or [`SearchError::InvalidRadius`] for
    /// malformed input. An empty result is not an error.
    pub fn search<'a>(
        &self,
        center: Coordinate,
        options: &SearchOptions,
        pois: &'a [PointOfInterest],
    ) -> Result<Vec<RankedResult<'a>>> {
        center.validate()?;
        options.validate()?;

        let mut results: Vec<RankedResult<'a>> = self
            .measure(&center, pois)
            .into_iter()
            .flatten()
            .filter(|result| result.distance_km <= options.radius_km)
            .collect();

        // `sort_by` is stable, so ties keep input order.
        results.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

        if let Some(now) = options.now {
            for result in &mut results {
                result.status = Some(classify(now, &result.poi.hours));
            }
            if options.only_open {
                results.retain(|r| r.status == Some(Availability::Open));
            }
        }

        if let Some(limit) = options.limit {
            results.truncate(limit);
        }

        tracing::debug!(
            %center,
            radius_km = options.radius_km,
            candidates = pois.len(),
            matched = results.len(),
            "Proximity search completed"
        );

        Ok(results)
    }

    /// Distance for every point, in input order; `None` for invalid locations.
    fn measure<'a>(
        &self,
        center: &Coordinate,
        pois: &'a [PointOfInterest],
    ) -> Vec<Option<RankedResult<'a>>> {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            pois.par_iter()
                .map(|poi| self.measure_one(center, poi))
                .collect()
        }

        #[cfg(not(feature = "parallel"))]
        {
            pois.iter()
                .map(|poi| self.measure_one(center, poi))
                .collect()
        }
    }

    #[inline]
    fn measure_one<'a>(
        &self,
        center: &Coordinate,
        poi: &'a PointOfInterest,
    ) -> Option<RankedResult<'a>> {
        if let Err(err) = poi.location.validate() {
            tracing::warn!(poi = %poi.id, error = %err, "Skipping point with invalid location");
            return None;
        }

        Some(RankedResult {
            poi,
            distance_km: self.metric.distance_km(center, &poi.location),
            status: None,
        })
    }
}

/// Searches with the default metric.
///
/// See [`ProximitySearch::search`].
pub fn search<'a>(
    center: Coordinate,
    options: &SearchOptions,
    pois: &'a [PointOfInterest],
) -> Result<Vec<RankedResult<'a>>> {
    ProximitySearch::new().search(center, options, pois)
}

/// Positional form of [`search`]: center, radius, places, optional time and limit.
///
/// # Example
/// ```
/// use nearby_geo::Coordinate;
/// use nearby_hours::{parse, Availability, TimeOfDay};
/// use nearby_search::{search_nearby, PointOfInterest};
///
/// let pois = vec![
///     PointOfInterest::new("lot-b", Coordinate::new(37.5700, 126.9780)).with_hours(parse("09:00~18:00")),
///     PointOfInterest::new("lot-a", Coordinate::new(37.5670, 126.9780)).with_hours(parse("24시간")),
///     PointOfInterest::new("busan", Coordinate::new(35.1796, 129.0756)),
/// ];
///
/// let center = Coordinate::new(37.5665, 126.9780);
/// let results = search_nearby(center, 1.0, &pois, TimeOfDay::hm(20, 0), None).unwrap();
///
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].poi.id, "lot-a");
/// assert_eq!(results[0].status, Some(Availability::Open));
/// assert_eq!(results[1].status, Some(Availability::Closed));
/// ```
pub fn search_nearby(
    center: Coordinate,
    radius_km: f64,
    pois: &[PointOfInterest],
    now: Option<TimeOfDay>,
    limit: Option<usize>,
) -> Result<Vec<RankedResult<'_>>> {
    let options = SearchOptions {
        radius_km,
        now,
        limit,
        only_open: false,
    };
    search(center, &options, pois)
}
