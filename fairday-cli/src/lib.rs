//! Command-line interface for the Fairday day planner.
#![forbid(unsafe_code)]

use std::io::Write;

use clap::{Parser, Subcommand};
use fairday_data::HttpWeatherClassifier;
use serde::Serialize;

mod catalogue;
mod classify;
mod error;
mod plan;

pub use error::CliError;

use catalogue::{CriteriaArgs, run_criteria, run_options};
use classify::{ClassifyArgs, run_classify};
use plan::{PlanArgs, run_plan};

pub(crate) const ARG_PLAN_CITY: &str = "city";
pub(crate) const ARG_PLAN_EVENT: &str = "event";
pub(crate) const ARG_PLAN_MONTH: &str = "month";
pub(crate) const ARG_PLAN_YEAR: &str = "year";
pub(crate) const ARG_PLAN_LIMIT: &str = "limit";
pub(crate) const ARG_PLAN_DATASET: &str = "dataset";
pub(crate) const ARG_CLASSIFIER_URL: &str = "classifier-url";
pub(crate) const ENV_PLAN_CITY: &str = "FAIRDAY_CMDS_PLAN_CITY";
pub(crate) const ENV_PLAN_EVENT: &str = "FAIRDAY_CMDS_PLAN_EVENT";
pub(crate) const ENV_PLAN_MONTH: &str = "FAIRDAY_CMDS_PLAN_MONTH";

pub(crate) const ARG_CLASSIFY_TEMPERATURE: &str = "temperature";
pub(crate) const ARG_CLASSIFY_PRECIPITATION: &str = "precipitation";
pub(crate) const ARG_CLASSIFY_WIND: &str = "wind";
pub(crate) const ARG_CLASSIFY_HUMIDITY: &str = "relative-humidity";
pub(crate) const ARG_CLASSIFY_ALTITUDE: &str = "altitude";
pub(crate) const ARG_CLASSIFY_AIR_PRESSURE: &str = "air-pressure";
pub(crate) const ENV_CLASSIFY_TEMPERATURE: &str = "FAIRDAY_CMDS_CLASSIFY_TEMPERATURE";
pub(crate) const ENV_CLASSIFY_PRECIPITATION: &str = "FAIRDAY_CMDS_CLASSIFY_PRECIPITATION";
pub(crate) const ENV_CLASSIFY_WIND: &str = "FAIRDAY_CMDS_CLASSIFY_WIND";
pub(crate) const ENV_CLASSIFY_HUMIDITY: &str = "FAIRDAY_CMDS_CLASSIFY_RELATIVE_HUMIDITY";
pub(crate) const ENV_CLASSIFY_ALTITUDE: &str = "FAIRDAY_CMDS_CLASSIFY_ALTITUDE";
pub(crate) const ENV_CLASSIFY_AIR_PRESSURE: &str = "FAIRDAY_CMDS_CLASSIFY_AIR_PRESSURE";

/// Run the Fairday CLI with the current process arguments and environment.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
        Command::Options => run_options(),
        Command::Criteria(args) => run_criteria(&args),
        Command::Classify(args) => run_classify(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "fairday",
    about = "Find the days of a month best suited to an outdoor event",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Rank the best days of a month for an event in a city.
    Plan(PlanArgs),
    /// List the registered cities and events.
    Options,
    /// Show the weather thresholds of an event.
    Criteria(CriteriaArgs),
    /// Assign a weather category to a set of measurements.
    Classify(ClassifyArgs),
}

/// Build the HTTP classifier for `base_url`.
pub(crate) fn http_classifier(base_url: &str) -> Result<HttpWeatherClassifier, CliError> {
    HttpWeatherClassifier::new(base_url).map_err(|source| CliError::BuildClassifier {
        base_url: base_url.to_owned(),
        source,
    })
}

/// Write `value` as pretty JSON followed by a newline.
pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
