//! Weather category classification.
//!
//! [`WeatherClassifier`] is the seam between the ranking engine and whatever
//! produces category labels. The learned model lives behind an HTTP adapter
//! in `fairday-data`; [`RuleBasedClassifier`] is the deterministic fallback
//! used whenever that model cannot answer.

use thiserror::Error;

use crate::WeatherCategory;

/// Precipitation above which freezing days count as snow.
const SNOW_PRECIP: f64 = 0.001;
/// Precipitation at or above which a day counts as heavy rain.
const HEAVY_RAIN_PRECIP: f64 = 0.03;
/// Precipitation at or above which a day counts as light rain.
const LIGHT_RAIN_PRECIP: f64 = 0.005;
/// Celsius temperature at or above which a dry day is hot.
const HOT_CELSIUS: f64 = 20.0;
/// Celsius temperature below which a dry day is cold.
const COLD_CELSIUS: f64 = 10.0;

/// Measurements fed to a classifier.
///
/// # Examples
/// ```
/// use fairday_core::ClassifierInput;
///
/// let input = ClassifierInput {
///     temperature: 12.0,
///     precipitation: 0.0,
///     wind: 3.0,
///     relative_humidity: 55.0,
///     altitude: 100.0,
///     air_pressure: 1013.25,
/// };
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassifierInput {
    /// Air temperature in Celsius.
    pub temperature: f64,
    /// Precipitation in millimetres.
    pub precipitation: f64,
    /// Wind speed in metres per second.
    pub wind: f64,
    /// Relative humidity in percent.
    pub relative_humidity: f64,
    /// Altitude in metres.
    pub altitude: f64,
    /// Air pressure in hectopascals.
    pub air_pressure: f64,
}

impl ClassifierInput {
    /// Check that every measurement is physically plausible.
    ///
    /// # Errors
    /// Returns [`ClassifyError::InvalidMeasurement`] naming the first
    /// offending field: any non-finite value, humidity outside `0..=100`, or
    /// negative precipitation, wind or air pressure.
    pub fn validate(&self) -> Result<(), ClassifyError> {
        let fields = [
            ("temperature", self.temperature),
            ("precipitation", self.precipitation),
            ("wind", self.wind),
            ("relative_humidity", self.relative_humidity),
            ("altitude", self.altitude),
            ("air_pressure", self.air_pressure),
        ];
        if let Some((field, value)) = fields.into_iter().find(|(_, value)| !value.is_finite()) {
            return Err(ClassifyError::InvalidMeasurement { field, value });
        }
        if !(0.0..=100.0).contains(&self.relative_humidity) {
            return Err(ClassifyError::InvalidMeasurement {
                field: "relative_humidity",
                value: self.relative_humidity,
            });
        }
        for (field, value) in [
            ("precipitation", self.precipitation),
            ("wind", self.wind),
            ("air_pressure", self.air_pressure),
        ] {
            if value < 0.0 {
                return Err(ClassifyError::InvalidMeasurement { field, value });
            }
        }
        Ok(())
    }
}

/// Errors returned by [`WeatherClassifier::classify`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifyError {
    /// A measurement failed validation.
    #[error("invalid {field}: {value}")]
    InvalidMeasurement {
        /// Name of the rejected field.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// The classifier could not produce an answer.
    #[error("classifier unavailable: {reason}")]
    Unavailable {
        /// Human-readable description of the failure.
        reason: String,
    },
}

/// Assign a [`WeatherCategory`] to a set of measurements.
///
/// Implementations must be `Send + Sync` so one classifier can serve
/// concurrent planners.
///
/// # Examples
/// ```
/// use fairday_core::{ClassifierInput, ClassifyError, WeatherCategory, WeatherClassifier};
///
/// struct AlwaysSunny;
///
/// impl WeatherClassifier for AlwaysSunny {
///     fn classify(&self, _input: &ClassifierInput) -> Result<WeatherCategory, ClassifyError> {
///         Ok(WeatherCategory::Sunny)
///     }
/// }
///
/// let input = ClassifierInput {
///     temperature: -5.0,
///     precipitation: 2.0,
///     wind: 1.0,
///     relative_humidity: 90.0,
///     altitude: 100.0,
///     air_pressure: 1000.0,
/// };
/// assert_eq!(AlwaysSunny.classify(&input), Ok(WeatherCategory::Sunny));
/// ```
pub trait WeatherClassifier: Send + Sync {
    /// Classify `input`.
    fn classify(&self, input: &ClassifierInput) -> Result<WeatherCategory, ClassifyError>;
}

impl<K: WeatherClassifier + ?Sized> WeatherClassifier for Box<K> {
    fn classify(&self, input: &ClassifierInput) -> Result<WeatherCategory, ClassifyError> {
        (**self).classify(input)
    }
}

impl<K: WeatherClassifier + ?Sized> WeatherClassifier for &K {
    fn classify(&self, input: &ClassifierInput) -> Result<WeatherCategory, ClassifyError> {
        (**self).classify(input)
    }
}

/// Deterministic threshold rules used when no learned model is reachable.
///
/// Rules are tested in order and the first match wins:
///
/// 1. at or below 0 °C with more than 0.001 mm of precipitation: snow
/// 2. 0.03 mm or more: heavy rain
/// 3. from 0.005 mm up to 0.03 mm: light rain
/// 4. 20 °C or warmer: hot
/// 5. below 10 °C and under 0.005 mm: cold
/// 6. anything else: sunny
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RuleBasedClassifier;

impl RuleBasedClassifier {
    /// Apply the threshold rules without validating the input.
    #[must_use]
    pub fn categorise(temperature: f64, precipitation: f64) -> WeatherCategory {
        if temperature <= 0.0 && precipitation > SNOW_PRECIP {
            WeatherCategory::Snow
        } else if precipitation >= HEAVY_RAIN_PRECIP {
            WeatherCategory::HeavyRain
        } else if (LIGHT_RAIN_PRECIP..HEAVY_RAIN_PRECIP).contains(&precipitation) {
            WeatherCategory::LightRain
        } else if temperature >= HOT_CELSIUS {
            WeatherCategory::Hot
        } else if temperature < COLD_CELSIUS && precipitation < LIGHT_RAIN_PRECIP {
            WeatherCategory::Cold
        } else {
            WeatherCategory::Sunny
        }
    }
}

impl WeatherClassifier for RuleBasedClassifier {
    fn classify(&self, input: &ClassifierInput) -> Result<WeatherCategory, ClassifyError> {
        input.validate()?;
        Ok(Self::categorise(input.temperature, input.precipitation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn input() -> ClassifierInput {
        ClassifierInput {
            temperature: 15.0,
            precipitation: 0.0,
            wind: 2.0,
            relative_humidity: 50.0,
            altitude: 100.0,
            air_pressure: 1013.25,
        }
    }

    #[rstest]
    #[case(0.0, 0.002, WeatherCategory::Snow)]
    #[case(0.0, 0.0, WeatherCategory::Cold)]
    #[case(0.0, 0.001, WeatherCategory::Cold)]
    #[case(-3.0, 0.5, WeatherCategory::Snow)]
    #[case(5.0, 0.03, WeatherCategory::HeavyRain)]
    #[case(25.0, 0.029, WeatherCategory::LightRain)]
    #[case(25.0, 0.005, WeatherCategory::LightRain)]
    #[case(20.0, 0.0, WeatherCategory::Hot)]
    #[case(19.9, 0.004, WeatherCategory::Sunny)]
    #[case(10.0, 0.0, WeatherCategory::Sunny)]
    #[case(9.9, 0.004, WeatherCategory::Cold)]
    fn applies_rules_in_order(
        mut input: ClassifierInput,
        #[case] temperature: f64,
        #[case] precipitation: f64,
        #[case] expected: WeatherCategory,
    ) {
        input.temperature = temperature;
        input.precipitation = precipitation;
        assert_eq!(RuleBasedClassifier.classify(&input), Ok(expected));
    }

    #[rstest]
    #[case::humidity_above_range("relative_humidity", 100.5)]
    #[case::humidity_below_range("relative_humidity", -1.0)]
    #[case::negative_precipitation("precipitation", -0.1)]
    #[case::negative_wind("wind", -2.0)]
    #[case::negative_pressure("air_pressure", -5.0)]
    fn rejects_implausible_measurements(
        mut input: ClassifierInput,
        #[case] field: &'static str,
        #[case] value: f64,
    ) {
        match field {
            "relative_humidity" => input.relative_humidity = value,
            "precipitation" => input.precipitation = value,
            "wind" => input.wind = value,
            _ => input.air_pressure = value,
        }
        assert_eq!(
            RuleBasedClassifier.classify(&input),
            Err(ClassifyError::InvalidMeasurement { field, value })
        );
    }

    #[rstest]
    fn rejects_non_finite_measurements(mut input: ClassifierInput) {
        input.altitude = f64::INFINITY;
        let err = input.validate().expect_err("infinite altitude is invalid");
        assert!(matches!(
            err,
            ClassifyError::InvalidMeasurement {
                field: "altitude",
                ..
            }
        ));
    }

    #[rstest]
    fn accepts_humidity_bounds(mut input: ClassifierInput) {
        input.relative_humidity = 0.0;
        assert!(input.validate().is_ok());
        input.relative_humidity = 100.0;
        assert!(input.validate().is_ok());
    }

    #[rstest]
    fn boxed_classifier_delegates(input: ClassifierInput) {
        let boxed: Box<dyn WeatherClassifier> = Box::new(RuleBasedClassifier);
        assert_eq!(boxed.classify(&input), Ok(WeatherCategory::Sunny));
    }
}
