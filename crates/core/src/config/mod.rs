//! Configuration loading and schema definitions
//!
//! Settings shared by the command-line application and the dataset loader.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
