//! Wall-clock time values and operating windows.

use crate::{HoursError, Result};
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const SECONDS_PER_HOUR: u32 = 3600;
const SECONDS_PER_MINUTE: u32 = 60;

/// A local wall-clock time with second precision.
///
/// Ordering follows seconds since midnight. No timezone is attached; values are
/// compared exactly as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// 00:00:00
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0, second: 0 };

    /// 23:59:59, the last second of the day
    pub const END_OF_DAY: TimeOfDay = TimeOfDay { hour: 23, minute: 59, second: 59 };

    /// Creates a time, returning `None` when any field is out of range.
    ///
    /// # Example
    /// ```
    /// use nearby_hours::TimeOfDay;
    ///
    /// assert!(TimeOfDay::new(23, 59, 59).is_some());
    /// assert!(TimeOfDay::new(24, 0, 0).is_none());
    /// ```
    pub fn new(hour: u32, minute: u32, second: u32) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }
        Some(Self {
            hour: hour as u8,
            minute: minute as u8,
            second: second as u8,
        })
    }

    /// Creates a time on the minute.
    pub fn hm(hour: u32, minute: u32) -> Option<Self> {
        Self::new(hour, minute, 0)
    }

    /// Hour component (0-23).
    #[inline]
    pub fn hour(&self) -> u32 {
        u32::from(self.hour)
    }

    /// Minute component (0-59).
    #[inline]
    pub fn minute(&self) -> u32 {
        u32::from(self.minute)
    }

    /// Second component (0-59).
    #[inline]
    pub fn second(&self) -> u32 {
        u32::from(self.second)
    }

    /// Seconds elapsed since midnight.
    #[inline]
    pub fn seconds_since_midnight(&self) -> u32 {
        self.hour() * SECONDS_PER_HOUR + self.minute() * SECONDS_PER_MINUTE + self.second()
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self {
            hour: time.hour() as u8,
            minute: time.minute() as u8,
            second: time.second() as u8,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.second == 0 {
            write!(f, "{:02}:{:02}", self.hour, self.minute)
        } else {
            write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
        }
    }
}

impl FromStr for TimeOfDay {
    type Err = HoursError;

    /// Accepts `HH:MM:SS`, `HH:MM` or `HHMM`.
    fn from_str(s: &str) -> Result<Self> {
        let text = s.trim();
        [ClockFormat::WithSeconds, ClockFormat::Colon, ClockFormat::Compact]
            .iter()
            .find_map(|format| format.parse(text))
            .ok_or_else(|| HoursError::InvalidTimeOfDay(s.to_string()))
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = HoursError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(time: TimeOfDay) -> Self {
        time.to_string()
    }
}

/// Textual clock layouts found in operating-hour data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockFormat {
    /// `HH:MM`, hour may be a single digit
    Colon,
    /// `HHMM`, exactly four digits
    Compact,
    /// `HH:MM:SS`, hour may be a single digit
    WithSeconds,
}

impl ClockFormat {
    /// Parses `text` in this layout. `text` must already be trimmed.
    ///
    /// Minutes and seconds always take two digits, so `9:5` is rejected
    /// rather than read as 09:05.
    pub fn parse(self, text: &str) -> Option<TimeOfDay> {
        let (pattern, fields) = match self {
            ClockFormat::Colon => ("%H:%M", 2),
            ClockFormat::WithSeconds => ("%H:%M:%S", 3),
            ClockFormat::Compact => {
                if text.len() != 4 || !text.bytes().all(|b| b.is_ascii_digit()) {
                    return None;
                }
                ("%H%M", 1)
            }
        };
        if fields > 1 && !has_clock_shape(text, fields) {
            return None;
        }
        NaiveTime::parse_from_str(text, pattern).ok().map(TimeOfDay::from)
    }
}

/// `H:MM`-style layout with `fields` colon-separated groups of ASCII digits.
fn has_clock_shape(text: &str, fields: usize) -> bool {
    let mut groups = text.split(':');
    let hour_ok = groups
        .next()
        .is_some_and(|h| (1..=2).contains(&h.len()) && h.bytes().all(|b| b.is_ascii_digit()));
    let rest: Vec<&str> = groups.collect();
    hour_ok
        && rest.len() == fields - 1
        && rest
            .iter()
            .all(|g| g.len() == 2 && g.bytes().all(|b| b.is_ascii_digit()))
}

/// An operating window from `start` to `end`, both inclusive.
///
/// When `start` is later than `end` the window wraps past midnight
/// (22:00-02:00 covers late evening and early morning).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    start: TimeOfDay,
    end: TimeOfDay,
}

impl TimeInterval {
    /// Creates an interval. Any pair is accepted; `start > end` wraps midnight.
    pub const fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    /// The whole-day window 00:00:00-23:59:59.
    pub const fn full_day() -> Self {
        Self::new(TimeOfDay::MIDNIGHT, TimeOfDay::END_OF_DAY)
    }

    /// Opening time.
    #[inline]
    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    /// Closing time.
    #[inline]
    pub fn end(&self) -> TimeOfDay {
        self.end
    }

    /// True for the 00:00:00-23:59:59 sentinel.
    pub fn is_full_day(&self) -> bool {
        *self == Self::full_day()
    }

    /// True when the window crosses midnight.
    pub fn wraps_midnight(&self) -> bool {
        self.start > self.end
    }

    /// Whether `now` falls inside the window, endpoints included.
    pub fn contains(&self, now: TimeOfDay) -> bool {
        if self.wraps_midnight() {
            now >= self.start || now <= self.end
        } else {
            self.start <= now && now <= self.end
        }
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~{}", self.start, self.end)
    }
}

/// Operating hours of a point of interest.
///
/// `Unknown` covers absent or unreadable source text. It is never treated as
/// open or closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OperatingHours {
    /// A parsed operating window
    Known(TimeInterval),
    /// No usable hours information
    #[default]
    Unknown,
}

impl OperatingHours {
    /// Returns true when the hours were parsed.
    pub fn is_known(&self) -> bool {
        matches!(self, OperatingHours::Known(_))
    }

    /// The parsed interval, if any.
    pub fn interval(&self) -> Option<&TimeInterval> {
        match self {
            OperatingHours::Known(interval) => Some(interval),
            OperatingHours::Unknown => None,
        }
    }
}

impl fmt::Display for OperatingHours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatingHours::Known(interval) if interval.is_full_day() => write!(f, "24h"),
            OperatingHours::Known(interval) => write!(f, "{}", interval),
            OperatingHours::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> TimeOfDay {
        TimeOfDay::hm(h, m).unwrap()
    }

    #[test]
    fn test_time_of_day_range() {
        assert!(TimeOfDay::new(0, 0, 0).is_some());
        assert!(TimeOfDay::new(23, 59, 59).is_some());
        assert!(TimeOfDay::new(24, 0, 0).is_none());
        assert!(TimeOfDay::new(12, 60, 0).is_none());
        assert!(TimeOfDay::new(12, 0, 60).is_none());
    }

    #[test]
    fn test_ordering_matches_seconds() {
        let early = TimeOfDay::new(9, 59, 59).unwrap();
        let late = t(10, 0);
        assert!(early < late);
        assert_eq!(late.seconds_since_midnight(), 36_000);
        assert_eq!(TimeOfDay::END_OF_DAY.seconds_since_midnight(), 86_399);
    }

    #[test]
    fn test_display() {
        assert_eq!(t(9, 5).to_string(), "09:05");
        assert_eq!(TimeOfDay::END_OF_DAY.to_string(), "23:59:59");
        assert_eq!(TimeInterval::new(t(22, 0), t(2, 0)).to_string(), "22:00~02:00");
        assert_eq!(OperatingHours::Known(TimeInterval::full_day()).to_string(), "24h");
        assert_eq!(OperatingHours::Unknown.to_string(), "unknown");
    }

    #[test]
    fn test_from_str_formats() {
        assert_eq!("14:30".parse::<TimeOfDay>().unwrap(), t(14, 30));
        assert_eq!("1430".parse::<TimeOfDay>().unwrap(), t(14, 30));
        assert_eq!(
            "14:30:15".parse::<TimeOfDay>().unwrap(),
            TimeOfDay::new(14, 30, 15).unwrap()
        );
        assert_eq!(" 9:00 ".parse::<TimeOfDay>().unwrap(), t(9, 0));
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!(matches!(
            "noon".parse::<TimeOfDay>(),
            Err(HoursError::InvalidTimeOfDay(_))
        ));
        assert!("25:00".parse::<TimeOfDay>().is_err());
        assert!("123".parse::<TimeOfDay>().is_err());
        assert!("".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_colon_format_needs_two_digit_minutes() {
        assert_eq!(ClockFormat::Colon.parse("9:05"), Some(t(9, 5)));
        assert_eq!(ClockFormat::Colon.parse("9:5"), None);
        assert_eq!(ClockFormat::Colon.parse("09: 00"), None);
        assert_eq!(ClockFormat::Colon.parse(" 9:00"), None);
        assert_eq!(ClockFormat::Colon.parse("123:00"), None);
        assert_eq!(ClockFormat::WithSeconds.parse("09:00:5"), None);
        assert!("9:5".parse::<TimeOfDay>().is_err());
    }

    #[test]
    fn test_compact_format_needs_four_digits() {
        assert_eq!(ClockFormat::Compact.parse("0900"), Some(t(9, 0)));
        assert_eq!(ClockFormat::Compact.parse("900"), None);
        assert_eq!(ClockFormat::Compact.parse("09000"), None);
        assert_eq!(ClockFormat::Compact.parse("09:0"), None);
        assert_eq!(ClockFormat::Compact.parse("2400"), None);
    }

    #[test]
    fn test_from_naive_time() {
        let naive = NaiveTime::from_hms_opt(7, 8, 9).unwrap();
        assert_eq!(TimeOfDay::from(naive), TimeOfDay::new(7, 8, 9).unwrap());
    }

    #[test]
    fn test_interval_shape() {
        assert!(TimeInterval::full_day().is_full_day());
        assert!(!TimeInterval::full_day().wraps_midnight());
        assert!(TimeInterval::new(t(22, 0), t(2, 0)).wraps_midnight());
        assert!(!TimeInterval::new(t(9, 0), t(9, 0)).wraps_midnight());
    }

    #[test]
    fn test_serde_round_trip_uses_clock_strings() {
        let hours = OperatingHours::Known(TimeInterval::new(t(9, 0), t(18, 0)));
        let json = serde_json::to_string(&hours).unwrap();
        assert_eq!(json, r#"{"kind":"known","start":"09:00","end":"18:00"}"#);
        let back: OperatingHours = serde_json::from_str(&json).unwrap();
        assert_eq!(back, hours);

        let unknown = serde_json::to_string(&OperatingHours::Unknown).unwrap();
        assert_eq!(unknown, r#"{"kind":"unknown"}"#);
    }
}
