//! Classify command implementation for the Fairday CLI.

use clap::Parser;
use fairday_core::{
    ClassifierInput, ClassifyError, RuleBasedClassifier, WeatherCategory, WeatherClassifier,
};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::{
    ARG_CLASSIFIER_URL, ARG_CLASSIFY_AIR_PRESSURE, ARG_CLASSIFY_ALTITUDE, ARG_CLASSIFY_HUMIDITY,
    ARG_CLASSIFY_PRECIPITATION, ARG_CLASSIFY_TEMPERATURE, ARG_CLASSIFY_WIND, CliError,
    ENV_CLASSIFY_AIR_PRESSURE, ENV_CLASSIFY_ALTITUDE, ENV_CLASSIFY_HUMIDITY,
    ENV_CLASSIFY_PRECIPITATION, ENV_CLASSIFY_TEMPERATURE, ENV_CLASSIFY_WIND, http_classifier,
    write_json,
};

/// CLI arguments for the `classify` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Assign a weather category to one set of measurements. \
                 When a classifier service is configured it is asked \
                 first; if it cannot answer, the threshold rules decide.",
    about = "Classify weather measurements"
)]
#[ortho_config(prefix = "FAIRDAY")]
pub(crate) struct ClassifyArgs {
    /// Air temperature in Celsius.
    #[arg(long = ARG_CLASSIFY_TEMPERATURE, value_name = "celsius", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) temperature: Option<f64>,
    /// Precipitation in millimetres.
    #[arg(long = ARG_CLASSIFY_PRECIPITATION, value_name = "mm")]
    #[serde(default)]
    pub(crate) precipitation: Option<f64>,
    /// Wind speed in metres per second.
    #[arg(long = ARG_CLASSIFY_WIND, value_name = "m/s")]
    #[serde(default)]
    pub(crate) wind: Option<f64>,
    /// Relative humidity in percent.
    #[arg(long = ARG_CLASSIFY_HUMIDITY, value_name = "percent")]
    #[serde(default)]
    pub(crate) relative_humidity: Option<f64>,
    /// Altitude in metres.
    #[arg(long = ARG_CLASSIFY_ALTITUDE, value_name = "metres", allow_negative_numbers = true)]
    #[serde(default)]
    pub(crate) altitude: Option<f64>,
    /// Air pressure in hectopascals.
    #[arg(long = ARG_CLASSIFY_AIR_PRESSURE, value_name = "hpa")]
    #[serde(default)]
    pub(crate) air_pressure: Option<f64>,
    /// Base URL of a weather category service.
    #[arg(long = ARG_CLASSIFIER_URL, value_name = "url")]
    #[serde(default)]
    pub(crate) classifier_url: Option<String>,
}

impl ClassifyArgs {
    pub(crate) fn into_config(self) -> Result<ClassifyConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ClassifyConfig::try_from(merged)
    }
}

/// Resolved `classify` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ClassifyConfig {
    pub(crate) input: ClassifierInput,
    pub(crate) classifier_url: Option<String>,
}

fn required(value: Option<f64>, field: &'static str, env: &'static str) -> Result<f64, CliError> {
    value.ok_or(CliError::MissingArgument { field, env })
}

impl TryFrom<ClassifyArgs> for ClassifyConfig {
    type Error = CliError;

    fn try_from(args: ClassifyArgs) -> Result<Self, Self::Error> {
        let input = ClassifierInput {
            temperature: required(
                args.temperature,
                ARG_CLASSIFY_TEMPERATURE,
                ENV_CLASSIFY_TEMPERATURE,
            )?,
            precipitation: required(
                args.precipitation,
                ARG_CLASSIFY_PRECIPITATION,
                ENV_CLASSIFY_PRECIPITATION,
            )?,
            wind: required(args.wind, ARG_CLASSIFY_WIND, ENV_CLASSIFY_WIND)?,
            relative_humidity: required(
                args.relative_humidity,
                ARG_CLASSIFY_HUMIDITY,
                ENV_CLASSIFY_HUMIDITY,
            )?,
            altitude: required(args.altitude, ARG_CLASSIFY_ALTITUDE, ENV_CLASSIFY_ALTITUDE)?,
            air_pressure: required(
                args.air_pressure,
                ARG_CLASSIFY_AIR_PRESSURE,
                ENV_CLASSIFY_AIR_PRESSURE,
            )?,
        };
        Ok(Self {
            input,
            classifier_url: args.classifier_url,
        })
    }
}

/// Builds the remote classifier for a `classify` invocation.
pub(super) trait ClassifierBuilder {
    fn build(&self, base_url: &str) -> Result<Box<dyn WeatherClassifier>, CliError>;
}

pub(super) struct DefaultClassifierBuilder;

impl ClassifierBuilder for DefaultClassifierBuilder {
    fn build(&self, base_url: &str) -> Result<Box<dyn WeatherClassifier>, CliError> {
        Ok(Box::new(http_classifier(base_url)?))
    }
}

/// `classify` output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ClassifyOutput {
    pub(crate) prediction: WeatherCategory,
}

/// Ask `remote` first and let the threshold rules answer when it cannot.
///
/// Only [`ClassifyError::Unavailable`] triggers the fallback; invalid
/// measurements are rejected whichever classifier is used.
pub(crate) fn classify_with_fallback(
    remote: Option<&dyn WeatherClassifier>,
    input: &ClassifierInput,
) -> Result<WeatherCategory, ClassifyError> {
    match remote.map(|classifier| classifier.classify(input)) {
        Some(Err(ClassifyError::Unavailable { reason })) => {
            log::warn!("weather classifier unavailable, using threshold rules: {reason}");
            RuleBasedClassifier.classify(input)
        }
        Some(result) => result,
        None => RuleBasedClassifier.classify(input),
    }
}

pub(super) fn run_classify(args: ClassifyArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_classify_with(args, &DefaultClassifierBuilder, &mut stdout)
}

pub(super) fn run_classify_with(
    args: ClassifyArgs,
    builder: &dyn ClassifierBuilder,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    let remote = config
        .classifier_url
        .as_deref()
        .map(|base_url| builder.build(base_url))
        .transpose()?;
    let prediction = classify_with_fallback(remote.as_deref(), &config.input)?;
    write_json(writer, &ClassifyOutput { prediction })
}
