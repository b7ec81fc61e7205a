//! Categorical weather labels attached to ranked days.
//!
//! The set is fixed and ordered: the rule-based classifier tests the
//! categories in declaration order and the first match wins.
//!
//! # Examples
//! ```
//! use fairday_core::WeatherCategory;
//!
//! assert_eq!(WeatherCategory::HeavyRain.as_str(), "heavy_rain");
//! assert_eq!("snow".parse(), Ok(WeatherCategory::Snow));
//! ```

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Coarse weather condition for a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum WeatherCategory {
    /// Freezing temperatures with measurable precipitation.
    Snow,
    /// Precipitation at or above the heavy threshold.
    HeavyRain,
    /// Light but measurable precipitation.
    LightRain,
    /// Warm, dry afternoons.
    Hot,
    /// Cool, dry afternoons.
    Cold,
    /// Mild, dry afternoons.
    Sunny,
}

impl WeatherCategory {
    /// All categories in classification order.
    pub const ALL: [Self; 6] = [
        Self::Snow,
        Self::HeavyRain,
        Self::LightRain,
        Self::Hot,
        Self::Cold,
        Self::Sunny,
    ];

    /// Return the label as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Snow => "snow",
            Self::HeavyRain => "heavy_rain",
            Self::LightRain => "light_rain",
            Self::Hot => "hot",
            Self::Cold => "cold",
            Self::Sunny => "sunny",
        }
    }
}

impl fmt::Display for WeatherCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a label does not name a [`WeatherCategory`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown weather category '{label}'")]
pub struct ParseWeatherCategoryError {
    /// The rejected label.
    pub label: String,
}

impl FromStr for WeatherCategory {
    type Err = ParseWeatherCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str() == normalised)
            .ok_or_else(|| ParseWeatherCategoryError {
                label: s.to_owned(),
            })
    }
}
