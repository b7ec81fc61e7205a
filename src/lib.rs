//! Facade crate for the Fairday day-suitability engine.
//!
//! This crate re-exports the core domain types and exposes the ranking
//! engine and the CSV dataset loader behind feature flags.
//!
//! ```
//! use fairday_engine::{
//!     BestDaysPlanner, CityRegistry, EventRegistry, MemoryObservationStore, PenaltyScorer,
//!     PlanRequest, Planner,
//! };
//!
//! let planner = BestDaysPlanner::new(
//!     MemoryObservationStore::new(),
//!     PenaltyScorer,
//!     CityRegistry::builtin(),
//!     EventRegistry::builtin(),
//! );
//! let response = planner.find_best_days(&PlanRequest::new("Craiova", "picnic", 5, 2026))?;
//! assert!(response.is_empty());
//! # Ok::<(), fairday_engine::PlanError>(())
//! ```

#![forbid(unsafe_code)]

pub use fairday_core::{
    CityRegistry, ClassifierInput, ClassifyError, Diagnostics, EventProfile, EventRegistry,
    MemoryObservationStore, ObservationStore, PenaltyScorer, PlanError, PlanRequest,
    PlanResponse, Planner, RuleBasedClassifier, ScoredDay, Scorer, WeatherCategory,
    WeatherClassifier, WeatherObservation, suitability_score,
};

#[cfg(feature = "ranker")]
pub use fairday_ranker::{BestDaysPlanner, PlannerConfig};

#[cfg(feature = "dataset-csv")]
pub use fairday_data::{
    DatasetError, HttpWeatherClassifier, HttpWeatherClassifierConfig, load_observations,
};
