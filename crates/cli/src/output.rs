//! Terminal output utilities
//!
//! Provides consistent formatting for CLI output.

use nearby_hours::Availability;
use owo_colors::OwoColorize;

/// Status message helpers
pub struct Status;

impl Status {
    /// Print an error message
    pub fn error(message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }

    /// Print a warning message
    pub fn warning(message: &str) {
        eprintln!("{} {}", "⚠".yellow(), message);
    }

    /// Print an info message
    pub fn info(message: &str) {
        println!("{} {}", "ℹ".blue(), message);
    }

    /// Print a header
    pub fn header(message: &str) {
        println!();
        println!("{}", message.bold());
        println!("{}", "─".repeat(message.chars().count()));
    }
}

/// Format a distance for display
///
/// Distances under one kilometer are shown in whole meters.
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{:.0} m", km * 1000.0)
    } else {
        format!("{:.2} km", km)
    }
}

/// Plain label for an availability status
pub fn availability_label(status: Availability) -> &'static str {
    match status {
        Availability::Open => "OPEN",
        Availability::Closed => "CLOSED",
        Availability::Unknown => "UNKNOWN",
    }
}

/// Colored label for an availability status
pub fn format_availability(status: Availability) -> String {
    let label = availability_label(status);
    match status {
        Availability::Open => label.green().to_string(),
        Availability::Closed => label.red().to_string(),
        Availability::Unknown => label.dimmed().to_string(),
    }
}

/// Format a count with singular/plural
pub fn format_count(count: usize, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{} {}", count, singular)
    } else {
        format!("{} {}", count, plural)
    }
}

/// Format a duration for display
pub fn format_duration(duration: std::time::Duration) -> String {
    let secs = duration.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", secs * 1000.0)
    } else {
        format!("{:.1}s", secs)
    }
}
