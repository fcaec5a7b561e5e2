//! Subcommand implementations

pub mod distance;
pub mod hours;
pub mod search;
