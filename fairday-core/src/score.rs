//! Day-suitability scoring.
//!
//! A day earns up to 100 points split across five independent factors. Each
//! factor awards its full share while the measurement is within the event's
//! limit and loses points linearly beyond it, never dropping below zero.
//!
//! | Factor        | Points | Penalty per unit over the limit |
//! |---------------|--------|---------------------------------|
//! | Temperature   | 30     | 2 per degree outside the band   |
//! | Precipitation | 25     | 10 per millimetre               |
//! | Wind          | 20     | 3 per m/s                       |
//! | Humidity      | 15     | 0.3 per percentage point        |
//! | Cloud cover   | 10     | 0.2 per percentage point        |

use crate::{EventProfile, WeatherObservation};

/// Points awarded for an in-band temperature.
pub const TEMPERATURE_POINTS: f64 = 30.0;
/// Points awarded for precipitation within the limit.
pub const PRECIPITATION_POINTS: f64 = 25.0;
/// Points awarded for wind within the limit.
pub const WIND_POINTS: f64 = 20.0;
/// Points awarded for humidity within the limit.
pub const HUMIDITY_POINTS: f64 = 15.0;
/// Points awarded for cloud cover within the limit.
pub const CLOUD_COVER_POINTS: f64 = 10.0;
/// Highest achievable score.
pub const MAX_SCORE: f64 = TEMPERATURE_POINTS
    + PRECIPITATION_POINTS
    + WIND_POINTS
    + HUMIDITY_POINTS
    + CLOUD_COVER_POINTS;

const TEMPERATURE_PENALTY: f64 = 2.0;
const PRECIPITATION_PENALTY: f64 = 10.0;
const WIND_PENALTY: f64 = 3.0;
const HUMIDITY_PENALTY: f64 = 0.3;
const CLOUD_COVER_PENALTY: f64 = 0.2;

/// Per-factor contributions to a suitability score.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoreBreakdown {
    /// Temperature component, `0..=30`.
    pub temperature: f64,
    /// Precipitation component, `0..=25`.
    pub precipitation: f64,
    /// Wind component, `0..=20`.
    pub wind: f64,
    /// Humidity component, `0..=15`.
    pub humidity: f64,
    /// Cloud cover component, `0..=10`.
    pub cloud_cover: f64,
}

impl ScoreBreakdown {
    /// Unrounded sum of all components.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.temperature + self.precipitation + self.wind + self.humidity + self.cloud_cover
    }
}

fn ceiling_component(value: f64, limit: f64, points: f64, penalty: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    if value <= limit {
        return points;
    }
    (points - penalty * (value - limit)).max(0.0)
}

fn temperature_component(celsius: f64, profile: &EventProfile) -> f64 {
    if !celsius.is_finite() {
        return 0.0;
    }
    let distance = profile.temperature().distance(celsius);
    (TEMPERATURE_POINTS - TEMPERATURE_PENALTY * distance).max(0.0)
}

/// Score each factor of `observation` against `profile`.
///
/// Non-finite measurements contribute zero for their factor.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use geo::Coord;
/// use fairday_core::{EventRegistry, WeatherObservation, score_breakdown};
///
/// let events = EventRegistry::builtin();
/// let picnic = events.get("picnic").expect("built-in event");
/// let windy = WeatherObservation {
///     date: NaiveDate::from_ymd_opt(2026, 5, 2).expect("valid date"),
///     location: Coord { x: 23.8, y: 44.31667 },
///     afternoon_temp_kelvin: 295.15,
///     precip: 0.0,
///     wind_max_speed: 6.0,
///     humidity_afternoon: 50.0,
///     cloud_cover_afternoon: 10.0,
/// };
/// let breakdown = score_breakdown(&windy, picnic);
/// assert_eq!(breakdown.wind, 14.0);
/// assert_eq!(breakdown.total(), 94.0);
/// ```
#[must_use]
pub fn score_breakdown(observation: &WeatherObservation, profile: &EventProfile) -> ScoreBreakdown {
    ScoreBreakdown {
        temperature: temperature_component(observation.temp_celsius(), profile),
        precipitation: ceiling_component(
            observation.precip,
            profile.max_precip(),
            PRECIPITATION_POINTS,
            PRECIPITATION_PENALTY,
        ),
        wind: ceiling_component(
            observation.wind_max_speed,
            profile.max_wind(),
            WIND_POINTS,
            WIND_PENALTY,
        ),
        humidity: ceiling_component(
            observation.humidity_afternoon,
            profile.max_humidity(),
            HUMIDITY_POINTS,
            HUMIDITY_PENALTY,
        ),
        cloud_cover: ceiling_component(
            observation.cloud_cover_afternoon,
            profile.max_clouds(),
            CLOUD_COVER_POINTS,
            CLOUD_COVER_PENALTY,
        ),
    }
}

/// Round `value` to `decimals` places.
///
/// Rounding works on the exact binary value and sends true ties to the even
/// digit, so `99.625` becomes `99.62` while `2.675` (stored just below the
/// tie) becomes `2.67`. Non-finite values are returned unchanged.
///
/// # Examples
/// ```
/// use fairday_core::round_to;
///
/// assert_eq!(round_to(0.125, 2), 0.12);
/// assert_eq!(round_to(0.375, 2), 0.38);
/// ```
#[must_use]
pub fn round_to(value: f64, decimals: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format!("{value:.decimals$}").parse().unwrap_or(value)
}

/// Round `value` to two decimal places; see [`round_to`].
#[must_use]
pub fn round_to_hundredths(value: f64) -> f64 {
    round_to(value, 2)
}

/// Suitability of `observation` for an event with `profile`, in `0..=100`.
///
/// The result is rounded to two decimal places.
#[must_use]
pub fn suitability_score(observation: &WeatherObservation, profile: &EventProfile) -> f64 {
    round_to_hundredths(score_breakdown(observation, profile).total())
}

/// Rate how well a day suits an event.
///
/// Implementations must be thread-safe (`Send` + `Sync`) and return finite
/// scores in `0.0..=100.0`. Use [`Scorer::sanitise`] to enforce this.
pub trait Scorer: Send + Sync {
    /// Return a score for `observation` according to `profile`.
    fn score(&self, observation: &WeatherObservation, profile: &EventProfile) -> f64;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=100.0`.
    fn sanitise(score: f64) -> f64
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, MAX_SCORE)
    }
}

impl<S: Scorer + ?Sized> Scorer for &S {
    fn score(&self, observation: &WeatherObservation, profile: &EventProfile) -> f64 {
        (**self).score(observation, profile)
    }
}

impl<S: Scorer + ?Sized> Scorer for Box<S> {
    fn score(&self, observation: &WeatherObservation, profile: &EventProfile) -> f64 {
        (**self).score(observation, profile)
    }
}

/// The canonical linear-penalty scorer, delegating to [`suitability_score`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PenaltyScorer;

impl Scorer for PenaltyScorer {
    fn score(&self, observation: &WeatherObservation, profile: &EventProfile) -> f64 {
        Self::sanitise(suitability_score(observation, profile))
    }
}
