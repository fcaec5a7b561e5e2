//! Operating-hour parsing and availability for nearby search.
//!
//! This crate provides:
//! - [`TimeOfDay`], [`TimeInterval`] and [`OperatingHours`] value types
//! - A rule-chain parser turning free-text hours into a normalized window
//! - [`classify`] for open/closed/unknown status, including windows that
//!   cross midnight
//!
//! # Example
//!
//! ```
//! use nearby_hours::{classify, parse, Availability, TimeOfDay};
//!
//! let hours = parse("0900~1800");
//! let noon = TimeOfDay::hm(12, 0).unwrap();
//! assert_eq!(classify(noon, &hours), Availability::Open);
//! ```

mod classify;
mod error;
mod parser;
mod time;

pub use classify::{classify, Availability};
pub use error::{HoursError, Result};
pub use parser::{parse, AllDayRule, HoursParser, HoursRule, ParserConfig, RangeRule};
pub use time::{ClockFormat, OperatingHours, TimeInterval, TimeOfDay};
