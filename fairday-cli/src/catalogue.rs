//! `options` and `criteria` commands: read-only views of the registries.

use clap::Args;
use fairday_core::{CityRegistry, EventProfile, EventRegistry};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{CliError, write_json};

/// CLI arguments for the `criteria` subcommand.
#[derive(Debug, Clone, Args)]
pub(crate) struct CriteriaArgs {
    /// Event type (e.g. "picnic").
    #[arg(value_name = "event")]
    pub(crate) event: String,
}

/// `options` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct OptionsOutput {
    pub(crate) cities: Vec<String>,
    pub(crate) events: Vec<String>,
}

/// Thresholds of one event as printed by `criteria`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct Criteria {
    /// Comfortable band in Celsius, `[min, max]`.
    pub(crate) temp_range: (f64, f64),
    pub(crate) max_precip: f64,
    pub(crate) max_wind: f64,
    pub(crate) max_humidity: f64,
    pub(crate) max_clouds: f64,
}

impl From<&EventProfile> for Criteria {
    fn from(profile: &EventProfile) -> Self {
        let band = profile.temperature();
        Self {
            temp_range: (band.min(), band.max()),
            max_precip: profile.max_precip(),
            max_wind: profile.max_wind(),
            max_humidity: profile.max_humidity(),
            max_clouds: profile.max_clouds(),
        }
    }
}

/// `criteria` output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CriteriaOutput {
    pub(crate) event: String,
    pub(crate) criteria: Criteria,
}

pub(crate) fn options(cities: &CityRegistry, events: &EventRegistry) -> OptionsOutput {
    OptionsOutput {
        cities: cities.names(),
        events: events.names(),
    }
}

/// Look up `event`, ignoring case and surrounding whitespace.
pub(crate) fn criteria(events: &EventRegistry, event: &str) -> Result<CriteriaOutput, CliError> {
    let name = event.trim().to_lowercase();
    let profile = events.get(&name).ok_or_else(|| CliError::UnknownEvent {
        event: event.to_owned(),
        available: events.names(),
    })?;
    Ok(CriteriaOutput {
        criteria: Criteria::from(profile),
        event: name,
    })
}

pub(super) fn run_options() -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_options_with(&mut stdout)
}

pub(super) fn run_options_with(writer: &mut dyn Write) -> Result<(), CliError> {
    write_json(
        writer,
        &options(&CityRegistry::builtin(), &EventRegistry::builtin()),
    )
}

pub(super) fn run_criteria(args: &CriteriaArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_criteria_with(args, &mut stdout)
}

pub(super) fn run_criteria_with(args: &CriteriaArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    write_json(writer, &criteria(&EventRegistry::builtin(), &args.event)?)
}
