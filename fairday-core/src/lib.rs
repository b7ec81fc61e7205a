//! Core domain types for the Fairday engine.
//!
//! The crate owns everything the day-suitability engine needs without doing
//! any I/O: weather observations, event profiles, the static city and event
//! registries, the pure scoring function, and the traits that sit at the
//! engine boundaries ([`ObservationStore`], [`Scorer`], [`WeatherClassifier`]
//! and [`Planner`]). Constructors return `Result` to surface invalid input
//! early.
//!
//! # Examples
//!
//! ```
//! use chrono::NaiveDate;
//! use geo::Coord;
//! use fairday_core::{EventRegistry, WeatherObservation, suitability_score};
//!
//! let events = EventRegistry::builtin();
//! let picnic = events.get("picnic").expect("picnic is a built-in event");
//! let observation = WeatherObservation {
//!     date: NaiveDate::from_ymd_opt(2026, 5, 14).expect("valid date"),
//!     location: Coord { x: 23.8, y: 44.31667 },
//!     afternoon_temp_kelvin: 295.15,
//!     precip: 0.0,
//!     wind_max_speed: 2.5,
//!     humidity_afternoon: 55.0,
//!     cloud_cover_afternoon: 20.0,
//! };
//! assert_eq!(suitability_score(&observation, picnic), 100.0);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod category;
pub mod classify;
pub mod observation;
pub mod planner;
pub mod profile;
pub mod registry;
pub mod score;
pub mod store;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use category::{ParseWeatherCategoryError, WeatherCategory};
pub use classify::{ClassifierInput, ClassifyError, RuleBasedClassifier, WeatherClassifier};
pub use observation::{WeatherObservation, kelvin_to_celsius};
pub use planner::{
    DEFAULT_LIMIT, Diagnostics, PlanError, PlanRequest, PlanRequestError, PlanResponse, Planner,
    ScoredDay,
};
pub use profile::{EventProfile, EventProfileError, TemperatureBand};
pub use registry::{CityRegistry, EventRegistry};
pub use score::{
    PenaltyScorer, ScoreBreakdown, Scorer, round_to, score_breakdown, suitability_score,
};
pub use store::{MemoryObservationStore, ObservationStore};
