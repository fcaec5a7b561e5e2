//! nearby - find the closest parking lots, restrooms and other places
//!
//! Loads a CSV export of places, ranks them by straight-line distance from a
//! coordinate and reports which ones are open right now.

use clap::{Parser, Subcommand};
use nearby_cli::output::Status;
use nearby_core::config::Config;
use nearby_telemetry::TelemetryConfig;
use std::process::ExitCode;

mod commands;

use commands::{distance, hours, search};

/// Find places near a coordinate and check whether they are open
#[derive(Parser)]
#[command(name = "nearby")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a configuration file (defaults to ./.nearby.toml if present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank places in a CSV file by distance from a coordinate
    Search(search::SearchArgs),

    /// Show how operating-hour strings are interpreted
    Hours {
        /// Hour strings to parse, e.g. "09:00~18:00" or "24시간"
        #[arg(required = true)]
        text: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Great-circle distance between two coordinates in kilometers
    Distance {
        /// Latitude of the first point
        #[arg(allow_negative_numbers = true)]
        lat1: f64,
        /// Longitude of the first point
        #[arg(allow_negative_numbers = true)]
        lon1: f64,
        /// Latitude of the second point
        #[arg(allow_negative_numbers = true)]
        lat2: f64,
        /// Longitude of the second point
        #[arg(allow_negative_numbers = true)]
        lon2: f64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            Status::error(&e.to_string());
            return exit_code(e.exit_code());
        }
    };

    let logging = &config.schema.logging;
    let level = if cli.verbose { "debug" } else { logging.level.as_str() };
    let telemetry = TelemetryConfig {
        json: logging.json,
        ..TelemetryConfig::with_level(level)
    };
    if let Err(e) = nearby_telemetry::init_with_config(telemetry) {
        Status::warning(&e.to_string());
    }

    let result = match &cli.command {
        Commands::Search(args) => search::run(args, &config),
        Commands::Hours { text, json } => hours::run(text, *json, &config),
        Commands::Distance { lat1, lon1, lat2, lon2 } => distance::run(*lat1, *lon1, *lat2, *lon2),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = %e.code, category = e.code.category(), "Command failed");
            Status::error(&e.to_string());
            exit_code(e.exit_code())
        }
    }
}

fn exit_code(code: i32) -> ExitCode {
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
