//! Weather category classifiers backed by external services.
//!
//! [`HttpWeatherClassifier`] asks a learned model served over HTTP for a
//! [`fairday_core::WeatherCategory`]. Every failure to get a usable answer
//! surfaces as [`fairday_core::ClassifyError::Unavailable`], which the
//! ranking engine answers with the rule-based fallback.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//! use fairday_core::{ClassifierInput, WeatherClassifier};
//! use fairday_data::classifier::{HttpWeatherClassifier, HttpWeatherClassifierConfig};
//!
//! let config = HttpWeatherClassifierConfig::new("http://localhost:8000")
//!     .with_timeout(Duration::from_secs(5));
//! let classifier = HttpWeatherClassifier::with_config(config)?;
//!
//! let input = ClassifierInput {
//!     temperature: 12.0,
//!     precipitation: 0.0,
//!     wind: 3.0,
//!     relative_humidity: 55.0,
//!     altitude: 100.0,
//!     air_pressure: 1013.25,
//! };
//! let category = classifier.classify(&input)?;
//! println!("{category}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod http;
mod wire;

#[doc(hidden)]
pub mod test_support;

pub use http::{
    ClassifierBuildError, DEFAULT_BASE_URL, DEFAULT_USER_AGENT, HttpWeatherClassifier,
    HttpWeatherClassifierConfig,
};
