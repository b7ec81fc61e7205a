//! Test utilities for weather classifiers.
//!
//! [`StubWeatherClassifier`] stands in for [`super::HttpWeatherClassifier`]
//! and answers with a pre-configured label or error without any network.

use std::sync::atomic::{AtomicUsize, Ordering};

use fairday_core::{ClassifierInput, ClassifyError, WeatherCategory, WeatherClassifier};

/// Stub `WeatherClassifier` for testing.
///
/// Inputs are validated like the HTTP adapter does, so invalid measurements
/// fail with [`ClassifyError::InvalidMeasurement`] whatever the stub is set
/// to return.
///
/// # Example
///
/// ```
/// use fairday_core::{ClassifierInput, WeatherCategory, WeatherClassifier};
/// use fairday_data::classifier::test_support::StubWeatherClassifier;
///
/// let classifier = StubWeatherClassifier::with_category(WeatherCategory::Snow);
/// let input = ClassifierInput {
///     temperature: 25.0,
///     precipitation: 0.0,
///     wind: 1.0,
///     relative_humidity: 40.0,
///     altitude: 100.0,
///     air_pressure: 1013.25,
/// };
/// assert_eq!(classifier.classify(&input), Ok(WeatherCategory::Snow));
/// assert_eq!(classifier.calls(), 1);
/// ```
#[derive(Debug)]
pub struct StubWeatherClassifier {
    response: Result<WeatherCategory, ClassifyError>,
    calls: AtomicUsize,
}

impl StubWeatherClassifier {
    /// Create a classifier that always answers `category`.
    #[must_use]
    pub fn with_category(category: WeatherCategory) -> Self {
        Self {
            response: Ok(category),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a classifier that always fails with `error`.
    #[must_use]
    pub fn with_error(error: ClassifyError) -> Self {
        Self {
            response: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a classifier that reports the service as unreachable.
    #[must_use]
    pub fn unavailable() -> Self {
        Self::with_error(ClassifyError::Unavailable {
            reason: "connection refused".to_owned(),
        })
    }

    /// Number of validated inputs the stub has answered.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl WeatherClassifier for StubWeatherClassifier {
    fn classify(&self, input: &ClassifierInput) -> Result<WeatherCategory, ClassifyError> {
        input.validate()?;
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.response.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn input() -> ClassifierInput {
        ClassifierInput {
            temperature: 5.0,
            precipitation: 0.0,
            wind: 1.0,
            relative_humidity: 60.0,
            altitude: 100.0,
            air_pressure: 1013.25,
        }
    }

    #[rstest]
    fn with_error_returns_configured_error(input: ClassifierInput) {
        let classifier = StubWeatherClassifier::unavailable();
        let err = classifier.classify(&input).expect_err("should fail");
        assert!(matches!(err, ClassifyError::Unavailable { .. }));
        assert_eq!(classifier.calls(), 1);
    }

    #[rstest]
    fn invalid_input_is_rejected_and_not_counted(mut input: ClassifierInput) {
        let classifier = StubWeatherClassifier::with_category(WeatherCategory::Sunny);
        input.wind = -1.0;
        let err = classifier.classify(&input).expect_err("negative wind");
        assert_eq!(
            err,
            ClassifyError::InvalidMeasurement {
                field: "wind",
                value: -1.0,
            }
        );
        assert_eq!(classifier.calls(), 0);
    }
}
