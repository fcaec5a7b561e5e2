//! Terminal output helpers for nearby
//!
//! Provides shared CLI functionality:
//! - Status messages
//! - Distance and availability formatting
//! - A spinner for dataset loading

#![warn(missing_docs)]

pub mod output;
pub mod progress;
