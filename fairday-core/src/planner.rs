//! Planning requests, responses and the [`Planner`] trait.
//!
//! A plan asks for the best `limit` days of one month for an event held in
//! one city. Planners return the days ordered by descending score.

use std::time::Duration;

use chrono::NaiveDate;
use thiserror::Error;

use crate::{WeatherCategory, WeatherObservation};

/// Number of days returned when the caller does not specify a limit.
pub const DEFAULT_LIMIT: usize = 5;

/// Parameters for a best-days query.
///
/// # Examples
/// ```
/// use fairday_core::{DEFAULT_LIMIT, PlanRequest};
///
/// let request = PlanRequest::new("  craiova ", " Picnic", 5, 2026).normalised();
/// assert_eq!(request.city, "Craiova");
/// assert_eq!(request.event, "picnic");
/// assert_eq!(request.limit, DEFAULT_LIMIT);
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    /// City name as registered in the city registry.
    pub city: String,
    /// Event name as registered in the event registry.
    pub event: String,
    /// Calendar month, `1..=12`.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Maximum number of days to return; at least one.
    pub limit: usize,
}

impl PlanRequest {
    /// Build a request returning [`DEFAULT_LIMIT`] days.
    pub fn new(city: impl Into<String>, event: impl Into<String>, month: u32, year: i32) -> Self {
        Self {
            city: city.into(),
            event: event.into(),
            month,
            year,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Override the number of days returned.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Check the numeric parameters.
    ///
    /// # Errors
    /// Returns [`PlanRequestError::MonthOutOfRange`] unless `month` is within
    /// `1..=12` and [`PlanRequestError::ZeroLimit`] when `limit` is zero.
    pub const fn validate(&self) -> Result<(), PlanRequestError> {
        if self.month < 1 || self.month > 12 {
            return Err(PlanRequestError::MonthOutOfRange(self.month));
        }
        if self.limit == 0 {
            return Err(PlanRequestError::ZeroLimit);
        }
        Ok(())
    }

    /// Canonicalise free-form names.
    ///
    /// Trims both names, title-cases the city ("baia mare" becomes
    /// "Baia Mare") and lower-cases the event.
    #[must_use]
    pub fn normalised(&self) -> Self {
        Self {
            city: title_case(self.city.trim()),
            event: self.event.trim().to_lowercase(),
            ..self.clone()
        }
    }
}

/// Upper-case the first letter of every word and lower-case the rest.
///
/// A word starts after any character that is not alphabetic, so hyphenated
/// names such as "drobeta-turnu severin" are handled.
fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut at_word_start = true;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                output.extend(ch.to_uppercase());
            } else {
                output.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            output.push(ch);
            at_word_start = true;
        }
    }
    output
}

/// Numeric request parameters that can never be satisfied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlanRequestError {
    /// The month was outside `1..=12`.
    #[error("month must be between 1 and 12, got {0}")]
    MonthOutOfRange(u32),
    /// The limit was zero.
    #[error("limit must be at least 1")]
    ZeroLimit,
}

/// Errors returned by [`Planner::find_best_days`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The city is not registered.
    #[error("unknown city '{city}'; available cities: {}", .available.join(", "))]
    UnknownCity {
        /// Requested city.
        city: String,
        /// Every registered city, in registry order.
        available: Vec<String>,
    },
    /// The event is not registered.
    #[error("unknown event '{event}'; available events: {}", .available.join(", "))]
    UnknownEvent {
        /// Requested event.
        event: String,
        /// Every registered event, in registry order.
        available: Vec<String>,
    },
    /// The request parameters were invalid.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] PlanRequestError),
}

/// One recommended day with its score and the measurements behind it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoredDay {
    /// Calendar date.
    pub date: NaiveDate,
    /// Suitability score in `0..=100`.
    pub score: f64,
    /// Afternoon temperature in Celsius.
    pub temp_celsius: f64,
    /// Precipitation in millimetres.
    pub precip: f64,
    /// Maximum wind speed in metres per second.
    pub wind_max_speed: f64,
    /// Afternoon relative humidity in percent.
    pub humidity_afternoon: f64,
    /// Afternoon cloud cover in percent.
    pub cloud_cover_afternoon: f64,
    /// Weather label, when classification ran and succeeded.
    pub category: Option<WeatherCategory>,
}

impl ScoredDay {
    /// Pair an observation with its score, converting temperature to Celsius.
    #[must_use]
    pub fn from_observation(observation: &WeatherObservation, score: f64) -> Self {
        Self {
            date: observation.date,
            score,
            temp_celsius: observation.temp_celsius(),
            precip: observation.precip,
            wind_max_speed: observation.wind_max_speed,
            humidity_afternoon: observation.humidity_afternoon,
            cloud_cover_afternoon: observation.cloud_cover_afternoon,
            category: None,
        }
    }
}

/// Counters describing how a plan was produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostics {
    /// Rows scored after the city and month filters.
    pub candidates_evaluated: usize,
    /// Days whose label came from the rule-based fallback.
    pub classifier_fallbacks: usize,
    /// Wall-clock time spent planning.
    pub plan_time: Duration,
}

/// Ranked days for a request, best first.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlanResponse {
    /// Up to `limit` days, descending by score.
    pub best_days: Vec<ScoredDay>,
    /// How the plan was produced.
    pub diagnostics: Diagnostics,
}

impl PlanResponse {
    /// Report whether no day matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best_days.is_empty()
    }
}

/// Rank the days of a month for an event.
///
/// Implementations return [`PlanError`] for unknown names or invalid
/// parameters rather than panicking, and an empty response when no data
/// matches. Planners must be `Send + Sync`.
pub trait Planner: Send + Sync {
    /// Find the best days for `request`.
    fn find_best_days(&self, request: &PlanRequest) -> Result<PlanResponse, PlanError>;
}
