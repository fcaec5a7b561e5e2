//! Open/closed classification against a wall-clock time.

use crate::time::{OperatingHours, TimeOfDay};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a point of interest is operating at a given time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    /// Inside the operating window
    Open,
    /// Outside the operating window
    Closed,
    /// Hours are not known
    Unknown,
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Availability::Open => "open",
            Availability::Closed => "closed",
            Availability::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Classifies `hours` at time `now`.
///
/// Both window endpoints are inclusive. Windows whose start is later than
/// their end wrap past midnight. Unknown hours always classify as
/// [`Availability::Unknown`].
///
/// # Example
/// ```
/// use nearby_hours::{classify, parse, Availability, TimeOfDay};
///
/// let hours = parse("22:00~02:00");
/// assert_eq!(classify(TimeOfDay::hm(23, 30).unwrap(), &hours), Availability::Open);
/// assert_eq!(classify(TimeOfDay::hm(3, 0).unwrap(), &hours), Availability::Closed);
/// ```
pub fn classify(now: TimeOfDay, hours: &OperatingHours) -> Availability {
    match hours {
        OperatingHours::Unknown => Availability::Unknown,
        OperatingHours::Known(interval) if interval.contains(now) => Availability::Open,
        OperatingHours::Known(_) => Availability::Closed,
    }
}
