//! `nearby search`

use clap::Args;
use nearby_cli::output::{format_availability, format_count, format_distance, format_duration, Status};
use nearby_cli::progress;
use nearby_core::config::Config;
use nearby_core::{dataset, Result};
use nearby_geo::Coordinate;
use nearby_hours::{HoursParser, TimeOfDay};
use nearby_search::{ProximitySearch, RankedResult, SearchOptions};
use nearby_telemetry::Timer;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::PathBuf;

/// Arguments of `nearby search`
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// CSV file with one place per row
    #[arg(short, long)]
    pub data: PathBuf,

    /// Latitude of the search center
    #[arg(long, allow_negative_numbers = true)]
    pub lat: f64,

    /// Longitude of the search center
    #[arg(long, allow_negative_numbers = true)]
    pub lon: f64,

    /// Search radius in kilometers [default: from config, 1.0]
    #[arg(short, long)]
    pub radius: Option<f64>,

    /// Maximum number of results [default: from config, 10]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Check availability at this local time (HH:MM)
    #[arg(long, conflicts_with = "now")]
    pub at: Option<TimeOfDay>,

    /// Check availability at the current local time
    #[arg(long)]
    pub now: bool,

    /// Only list places that are open at the requested time
    #[arg(long)]
    pub open_only: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    fn time(&self) -> Option<TimeOfDay> {
        if self.now {
            Some(TimeOfDay::from(chrono::Local::now().time()))
        } else {
            self.at
        }
    }
}

#[derive(Serialize)]
struct SearchReport<'a> {
    center: Coordinate,
    radius_km: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    at: Option<TimeOfDay>,
    results: &'a [RankedResult<'a>],
}

/// Load the dataset, run the search and print the ranked places
pub fn run(args: &SearchArgs, config: &Config) -> Result<()> {
    let center = Coordinate::try_new(args.lat, args.lon)?;
    let now = args.time();
    if args.open_only && now.is_none() {
        Status::warning("--open-only has no effect without --at or --now");
    }

    let options = SearchOptions {
        radius_km: args.radius.unwrap_or(config.schema.search.radius_km),
        now,
        limit: Some(args.limit.unwrap_or(config.schema.search.limit)),
        only_open: args.open_only,
    };
    options.validate()?;

    let parser = HoursParser::from_config(&config.schema.hours);
    let spinner = (!args.json).then(|| progress::spinner("Loading places..."));
    let timer = Timer::start("load_dataset");
    let data = match dataset::load(&args.data, &config.schema.dataset, &parser) {
        Ok(data) => data,
        Err(e) => {
            if let Some(pb) = &spinner {
                progress::finish_error(pb);
            }
            return Err(e);
        }
    };
    let load_time = timer.stop();
    if let Some(pb) = &spinner {
        let mut message = format!(
            "Loaded {} in {}",
            format_count(data.pois.len(), "place", "places"),
            format_duration(load_time)
        );
        if data.skipped > 0 {
            message.push_str(&format!(
                " ({} without coordinates skipped)",
                format_count(data.skipped, "row", "rows")
            ));
        }
        progress::finish_success(pb, &message);
    }

    let timer = Timer::start("search");
    let results = ProximitySearch::new().search(center, &options, &data.pois)?;
    timer.stop();

    if args.json {
        let report = SearchReport {
            center,
            radius_km: options.radius_km,
            at: now,
            results: &results,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_results(center, &options, &results);
    Ok(())
}

fn print_results(center: Coordinate, options: &SearchOptions, results: &[RankedResult<'_>]) {
    let mut title = format!(
        "Places within {} of {}",
        format_distance(options.radius_km),
        center
    );
    if let Some(now) = options.now {
        title.push_str(&format!(" at {}", now));
    }
    Status::header(&title);

    if results.is_empty() {
        Status::info("No places found within the search radius");
        return;
    }

    for (rank, result) in results.iter().enumerate() {
        let mut line = format!(
            "{:>3}. {}  {}",
            rank + 1,
            result.poi.id.bold(),
            format_distance(result.distance_km).cyan()
        );
        if let Some(status) = result.status {
            line.push_str(&format!("  {}", format_availability(status)));
        }
        println!("{}", line);

        if result.poi.hours.is_known() {
            println!("     {} {}", "hours:".dimmed(), result.poi.hours);
        }
        for (key, value) in &result.poi.attributes {
            println!("     {} {}", format!("{}:", key).dimmed(), value);
        }
    }
}
