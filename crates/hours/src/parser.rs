//! Free-text operating-hour parsing.
//!
//! Source data mixes many hand-written layouts ("09:00~18:00", "0900-1800",
//! "24시간", ...). Parsing is an ordered chain of [`HoursRule`]s: each rule
//! either returns a confident result or declines, and the first confident rule
//! wins. Text that no rule accepts becomes [`OperatingHours::Unknown`].

use crate::time::{ClockFormat, OperatingHours, TimeInterval};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

static DEFAULT_PARSER: Lazy<HoursParser> = Lazy::new(HoursParser::default);

/// Parses `raw` with the default rule chain.
///
/// Never fails: unreadable input yields [`OperatingHours::Unknown`].
///
/// # Example
/// ```
/// use nearby_hours::{parse, OperatingHours, TimeInterval, TimeOfDay};
///
/// let hours = parse("09:00~18:00");
/// let expected = TimeInterval::new(
///     TimeOfDay::hm(9, 0).unwrap(),
///     TimeOfDay::hm(18, 0).unwrap(),
/// );
/// assert_eq!(hours, OperatingHours::Known(expected));
///
/// assert_eq!(parse("연중"), OperatingHours::Known(TimeInterval::full_day()));
/// assert_eq!(parse("call ahead"), OperatingHours::Unknown);
/// ```
pub fn parse(raw: &str) -> OperatingHours {
    DEFAULT_PARSER.parse(raw)
}

/// One step in the parsing chain.
pub trait HoursRule: fmt::Debug + Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Returns `Some` for a confident match, `None` to let the next rule try.
    ///
    /// `text` is already trimmed and non-empty.
    fn apply(&self, text: &str) -> Option<OperatingHours>;
}

/// Keyword sets and separators used to build the default rule chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Markers meaning "open around the clock"
    #[serde(default = "default_all_day_keywords")]
    pub all_day_keywords: Vec<String>,

    /// Characters that separate opening and closing times
    #[serde(default = "default_range_separators")]
    pub range_separators: Vec<char>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            all_day_keywords: default_all_day_keywords(),
            range_separators: default_range_separators(),
        }
    }
}

fn default_all_day_keywords() -> Vec<String> {
    vec!["24시간", "상시", "연중", "24h", "24 hours"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_range_separators() -> Vec<char> {
    vec!['~', '-', '∼', '〜', '～']
}

/// Matches text containing any all-day keyword.
#[derive(Debug, Clone)]
pub struct AllDayRule {
    keywords: Vec<String>,
}

impl AllDayRule {
    /// Creates the rule. Matching ignores ASCII case.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }
}

impl HoursRule for AllDayRule {
    fn name(&self) -> &'static str {
        "all_day"
    }

    fn apply(&self, text: &str) -> Option<OperatingHours> {
        let lowered = text.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| lowered.contains(keyword.as_str()))
            .then(|| OperatingHours::Known(TimeInterval::full_day()))
    }
}

/// Matches `<time><separator><time>` with exactly one separator.
///
/// More than one separator is ambiguous (a hyphen may be part of the text
/// rather than the range marker), so such input is declined.
#[derive(Debug, Clone)]
pub struct RangeRule {
    separators: Vec<char>,
    formats: Vec<ClockFormat>,
}

impl RangeRule {
    /// Creates the rule with the `HH:MM` then `HHMM` clock formats.
    pub fn new(separators: impl IntoIterator<Item = char>) -> Self {
        Self {
            separators: separators.into_iter().collect(),
            formats: vec![ClockFormat::Colon, ClockFormat::Compact],
        }
    }

    fn parse_clock(&self, text: &str) -> Option<crate::TimeOfDay> {
        self.formats.iter().find_map(|format| format.parse(text))
    }
}

impl HoursRule for RangeRule {
    fn name(&self) -> &'static str {
        "range"
    }

    fn apply(&self, text: &str) -> Option<OperatingHours> {
        let mut positions = text.char_indices().filter(|(_, c)| self.separators.contains(c));
        let (index, separator) = positions.next()?;
        if positions.next().is_some() {
            return None;
        }

        let start = text[..index].trim();
        let end = text[index + separator.len_utf8()..].trim();
        if start.is_empty() || end.is_empty() {
            return None;
        }

        let start = self.parse_clock(start)?;
        let end = self.parse_clock(end)?;
        Some(OperatingHours::Known(TimeInterval::new(start, end)))
    }
}

/// An ordered chain of [`HoursRule`]s.
#[derive(Debug)]
pub struct HoursParser {
    rules: Vec<Box<dyn HoursRule>>,
}

impl HoursParser {
    /// Creates a parser with no rules; every input parses as `Unknown`.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// Builds the standard chain (all-day keywords, then ranges) from `config`.
    pub fn from_config(config: &ParserConfig) -> Self {
        Self::empty()
            .with_rule(AllDayRule::new(&config.all_day_keywords))
            .with_rule(RangeRule::new(config.range_separators.iter().copied()))
    }

    /// Appends a rule to the end of the chain.
    pub fn with_rule(mut self, rule: impl HoursRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Names of the rules in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Parses `raw` into operating hours. Never fails.
    pub fn parse(&self, raw: &str) -> OperatingHours {
        let text = raw.trim();
        if text.is_empty() {
            return OperatingHours::Unknown;
        }

        for rule in &self.rules {
            if let Some(hours) = rule.apply(text) {
                tracing::trace!(rule = rule.name(), input = text, %hours, "Hours rule matched");
                return hours;
            }
        }

        tracing::trace!(input = text, "No hours rule matched");
        OperatingHours::Unknown
    }
}

impl Default for HoursParser {
    fn default() -> Self {
        Self::from_config(&ParserConfig::default())
    }
}
