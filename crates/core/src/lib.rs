//! Shared application plumbing for nearby
//!
//! This crate provides the pieces around the search libraries that the
//! command-line application needs:
//!
//! - **Error handling**: structured errors with codes, context and recovery suggestions
//! - **Configuration**: TOML-based configuration with defaults and validation
//! - **Dataset loading**: point-of-interest CSV ingestion with hours parsed once
//!
//! # Example
//!
//! ```rust,no_run
//! use nearby_core::{config::Config, dataset};
//! use nearby_hours::HoursParser;
//!
//! let config = Config::load(None).expect("Invalid configuration");
//! let parser = HoursParser::from_config(&config.schema.hours);
//! let data = dataset::load("parking.csv", &config.schema.dataset, &parser)
//!     .expect("Failed to load dataset");
//! println!("{} places", data.pois.len());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod dataset;
pub mod error;

pub use error::{Error, ErrorCode, Result, ResultExt};
