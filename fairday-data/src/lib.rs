//! Data access for the Fairday engine.
//!
//! Responsibilities:
//! - Load the daily weather dataset from CSV into an in-memory store.
//! - Adapt the HTTP weather category service to the classifier trait.
//!
//! Boundaries:
//! - Do not encode scoring or ranking rules (live in `fairday-core` and
//!   `fairday-ranker`).
//! - Keep the engine traits synchronous; async clients are bridged here.
//!
//! Invariants:
//! - Loaded rows keep their file order.
//! - No global mutable state.

pub mod classifier;
pub mod dataset;

pub use classifier::{ClassifierBuildError, HttpWeatherClassifier, HttpWeatherClassifierConfig};
pub use dataset::{DatasetError, load_observations, parse_date, read_observations};
