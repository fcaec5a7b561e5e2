//! Error types for the hours crate.
//!
//! Hour-string parsing never fails; these errors only cover explicit clock
//! values supplied by a caller (for example a `--at 14:30` flag).

use thiserror::Error;

/// Result type alias for hours operations.
pub type Result<T> = std::result::Result<T, HoursError>;

/// Errors that can occur when reading a clock time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HoursError {
    /// Text is not a recognised clock time
    #[error("Invalid time of day: {0:?} (expected HH:MM, HH:MM:SS or HHMM)")]
    InvalidTimeOfDay(String),
}
