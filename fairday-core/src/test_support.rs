//! Test helpers: observation builders and deterministic classifiers.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;
use geo::Coord;

use crate::{ClassifierInput, ClassifyError, WeatherCategory, WeatherClassifier, WeatherObservation};

/// Craiova's registered coordinates.
pub const CRAIOVA: Coord<f64> = Coord {
    x: 23.8,
    y: 44.31667,
};

/// Build an observation at `location` with mild, dry picnic weather.
///
/// # Panics
/// Panics when `year`, `month` and `day` do not form a valid date.
#[must_use]
pub fn observation_at(location: Coord<f64>, year: i32, month: u32, day: u32) -> WeatherObservation {
    WeatherObservation {
        date: NaiveDate::from_ymd_opt(year, month, day)
            .unwrap_or_else(|| panic!("invalid test date {year}-{month}-{day}")),
        location,
        afternoon_temp_kelvin: 295.15,
        precip: 0.0,
        wind_max_speed: 2.0,
        humidity_afternoon: 50.0,
        cloud_cover_afternoon: 20.0,
    }
}

/// Build an observation in Craiova with mild, dry picnic weather.
///
/// # Panics
/// Panics when `year`, `month` and `day` do not form a valid date.
#[must_use]
pub fn observation_on(year: i32, month: u32, day: u32) -> WeatherObservation {
    observation_at(CRAIOVA, year, month, day)
}

/// Classifier that always answers with the same label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClassifier(pub WeatherCategory);

impl WeatherClassifier for FixedClassifier {
    fn classify(&self, _input: &ClassifierInput) -> Result<WeatherCategory, ClassifyError> {
        Ok(self.0)
    }
}

/// Classifier that is never reachable and counts how often it was asked.
#[derive(Debug, Default)]
pub struct UnavailableClassifier {
    calls: AtomicUsize,
}

impl UnavailableClassifier {
    /// Number of classification attempts so far.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl WeatherClassifier for UnavailableClassifier {
    fn classify(&self, _input: &ClassifierInput) -> Result<WeatherCategory, ClassifyError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Err(ClassifyError::Unavailable {
            reason: "model offline".to_owned(),
        })
    }
}
