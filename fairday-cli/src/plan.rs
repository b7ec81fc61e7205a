//! Plan command implementation for the Fairday CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use fairday_core::{
    CityRegistry, DEFAULT_LIMIT, EventRegistry, PenaltyScorer, PlanRequest, PlanResponse,
    Planner, ScoredDay, WeatherCategory, round_to,
};
use fairday_data::load_observations;
use fairday_ranker::BestDaysPlanner;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_CLASSIFIER_URL, ARG_PLAN_CITY, ARG_PLAN_DATASET, ARG_PLAN_EVENT, ARG_PLAN_LIMIT,
    ARG_PLAN_MONTH, ARG_PLAN_YEAR, CliError, ENV_PLAN_CITY, ENV_PLAN_EVENT, ENV_PLAN_MONTH,
    http_classifier, write_json,
};

/// Year planned when none is given.
pub(crate) const DEFAULT_YEAR: i32 = 2025;
/// Dataset read when no path is given.
pub(crate) const DEFAULT_DATASET: &str = "weather_data.csv";
/// Message returned alongside an empty plan.
pub(crate) const NO_DATA_MESSAGE: &str = "No weather data found for this period";

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Score every day of the requested month in the weather \
                 dataset against the event's thresholds and print the best \
                 ones as JSON. Options can come from CLI flags, \
                 configuration files, or environment variables.",
    about = "Rank the best days of a month for an event"
)]
#[ortho_config(prefix = "FAIRDAY")]
pub(crate) struct PlanArgs {
    /// City to plan in (e.g. "Craiova").
    #[arg(long = ARG_PLAN_CITY, value_name = "name")]
    #[serde(default)]
    pub(crate) city: Option<String>,
    /// Event type (e.g. "picnic").
    #[arg(long = ARG_PLAN_EVENT, value_name = "name")]
    #[serde(default)]
    pub(crate) event: Option<String>,
    /// Month number, 1 to 12.
    #[arg(long = ARG_PLAN_MONTH, value_name = "month")]
    #[serde(default)]
    pub(crate) month: Option<u32>,
    /// Year to plan in [default: 2025].
    #[arg(long = ARG_PLAN_YEAR, value_name = "year")]
    #[serde(default)]
    pub(crate) year: Option<i32>,
    /// Maximum number of days to return [default: 5].
    #[arg(long = ARG_PLAN_LIMIT, value_name = "count")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Path to the weather CSV [default: weather_data.csv].
    #[arg(long = ARG_PLAN_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Base URL of a weather category service used to label each day.
    #[arg(long = ARG_CLASSIFIER_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) classifier_url: Option<String>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    pub(crate) city: String,
    pub(crate) event: String,
    pub(crate) month: u32,
    pub(crate) year: i32,
    pub(crate) limit: usize,
    /// Path to the weather CSV.
    pub(crate) dataset: Utf8PathBuf,
    /// Classifier service, when days should be labelled.
    pub(crate) classifier_url: Option<String>,
}

impl PlanConfig {
    pub(crate) fn request(&self) -> PlanRequest {
        PlanRequest::new(self.city.clone(), self.event.clone(), self.month, self.year)
            .with_limit(self.limit)
    }

    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.dataset, ARG_PLAN_DATASET)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match fairday_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let city = args.city.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_CITY,
            env: ENV_PLAN_CITY,
        })?;
        let event = args.event.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_EVENT,
            env: ENV_PLAN_EVENT,
        })?;
        let month = args.month.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_MONTH,
            env: ENV_PLAN_MONTH,
        })?;
        Ok(Self {
            city,
            event,
            month,
            year: args.year.unwrap_or(DEFAULT_YEAR),
            limit: args.limit.unwrap_or(DEFAULT_LIMIT),
            dataset: args
                .dataset
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_DATASET)),
            classifier_url: args.classifier_url,
        })
    }
}

/// Builds a planner for the current plan invocation.
pub(super) trait PlannerBuilder {
    fn build(&self, config: &PlanConfig) -> Result<Box<dyn Planner>, CliError>;
}

/// Loads the CSV dataset and ranks with the built-in registries.
pub(super) struct DefaultPlannerBuilder;

impl PlannerBuilder for DefaultPlannerBuilder {
    fn build(&self, config: &PlanConfig) -> Result<Box<dyn Planner>, CliError> {
        let store = load_observations(&config.dataset)?;
        let planner = BestDaysPlanner::new(
            store,
            PenaltyScorer,
            CityRegistry::builtin(),
            EventRegistry::builtin(),
        );
        match &config.classifier_url {
            Some(base_url) => {
                let classifier = http_classifier(base_url)?;
                Ok(Box::new(planner.with_classifier(classifier)))
            }
            None => Ok(Box::new(planner)),
        }
    }
}

/// One day of `plan` output, rounded for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct DayOutput {
    /// `YYYY-MM-DD`.
    pub(crate) date: String,
    pub(crate) score: f64,
    pub(crate) temp_celsius: f64,
    pub(crate) precip: f64,
    pub(crate) wind_max_speed: f64,
    pub(crate) humidity_afternoon: f64,
    pub(crate) cloud_cover_afternoon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) category: Option<WeatherCategory>,
}

impl From<&ScoredDay> for DayOutput {
    fn from(day: &ScoredDay) -> Self {
        Self {
            date: day.date.format("%Y-%m-%d").to_string(),
            score: round_to(day.score, 2),
            temp_celsius: round_to(day.temp_celsius, 1),
            precip: round_to(day.precip, 2),
            wind_max_speed: round_to(day.wind_max_speed, 2),
            humidity_afternoon: round_to(day.humidity_afternoon, 1),
            cloud_cover_afternoon: round_to(day.cloud_cover_afternoon, 1),
            category: day.category,
        }
    }
}

/// Full `plan` output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct PlanOutput {
    pub(crate) city: String,
    pub(crate) event: String,
    pub(crate) month: u32,
    pub(crate) year: i32,
    pub(crate) best_days: Vec<DayOutput>,
    pub(crate) message: String,
}

impl PlanOutput {
    pub(crate) fn new(request: &PlanRequest, response: &PlanResponse) -> Self {
        let best_days: Vec<DayOutput> = response.best_days.iter().map(DayOutput::from).collect();
        let message = if best_days.is_empty() {
            NO_DATA_MESSAGE.to_owned()
        } else {
            format!(
                "Found {} suitable days for {} in {}",
                best_days.len(),
                request.event,
                request.city
            )
        };
        Self {
            city: request.city.clone(),
            event: request.event.clone(),
            month: request.month,
            year: request.year,
            best_days,
            message,
        }
    }
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &DefaultPlannerBuilder, &mut stdout)
}

pub(super) fn run_plan_with(
    args: PlanArgs,
    builder: &dyn PlannerBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let output = execute_plan(args, builder)?;
    write_json(writer, &output)
}

fn execute_plan(args: PlanArgs, builder: &dyn PlannerBuilder) -> Result<PlanOutput, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let request = config.request().normalised();
    let planner = builder.build(&config)?;
    let response = planner.find_best_days(&request)?;
    log::debug!(
        "ranked {} of {} candidate days in {:?} ({} classifier fallbacks)",
        response.best_days.len(),
        response.diagnostics.candidates_evaluated,
        response.diagnostics.plan_time,
        response.diagnostics.classifier_fallbacks
    );
    Ok(PlanOutput::new(&request, &response))
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
