//! `nearby hours`

use nearby_core::config::Config;
use nearby_core::Result;
use nearby_hours::{HoursParser, OperatingHours};
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Serialize)]
struct ParsedHours<'a> {
    input: &'a str,
    hours: OperatingHours,
    wraps_midnight: bool,
}

/// Parse each hour string with the configured rules and print the result
pub fn run(inputs: &[String], json: bool, config: &Config) -> Result<()> {
    let parser = HoursParser::from_config(&config.schema.hours);

    let parsed: Vec<ParsedHours<'_>> = inputs
        .iter()
        .map(|input| {
            let hours = parser.parse(input);
            ParsedHours {
                input,
                hours,
                wraps_midnight: hours.interval().is_some_and(|i| i.wraps_midnight()),
            }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&parsed)?);
        return Ok(());
    }

    for entry in &parsed {
        let shown = match entry.hours {
            OperatingHours::Known(_) if entry.wraps_midnight => {
                format!("{} {}", entry.hours, "(past midnight)".dimmed())
            }
            OperatingHours::Known(_) => entry.hours.to_string(),
            OperatingHours::Unknown => entry.hours.to_string().yellow().to_string(),
        };
        println!("{:<24} {}", entry.input, shown);
    }

    Ok(())
}
