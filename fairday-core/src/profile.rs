//! Event profiles: the weather an outdoor activity tolerates.
//!
//! A profile pairs an acceptable temperature band with four maximum
//! thresholds. Days within every limit earn full marks from the scorer;
//! each excursion beyond a limit costs points.

use thiserror::Error;

/// Inclusive Celsius range in which an event is comfortable.
///
/// # Examples
/// ```
/// use fairday_core::TemperatureBand;
///
/// # fn main() -> Result<(), fairday_core::EventProfileError> {
/// let band = TemperatureBand::new(18.0, 26.0)?;
/// assert!(band.contains(18.0));
/// assert_eq!(band.distance(15.0), 3.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TemperatureBand {
    min: f64,
    max: f64,
}

impl TemperatureBand {
    /// Validates and constructs a [`TemperatureBand`].
    ///
    /// # Errors
    /// Returns [`EventProfileError::NonFinite`] for NaN or infinite bounds and
    /// [`EventProfileError::InvertedBand`] unless `min < max`.
    pub fn new(min: f64, max: f64) -> Result<Self, EventProfileError> {
        if !min.is_finite() {
            return Err(EventProfileError::NonFinite { field: "temp_min" });
        }
        if !max.is_finite() {
            return Err(EventProfileError::NonFinite { field: "temp_max" });
        }
        if min >= max {
            return Err(EventProfileError::InvertedBand { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound in Celsius.
    #[must_use]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound in Celsius.
    #[must_use]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Report whether `celsius` lies inside the band, bounds included.
    #[must_use]
    pub fn contains(&self, celsius: f64) -> bool {
        self.min <= celsius && celsius <= self.max
    }

    /// Distance in degrees from `celsius` to the nearest band edge.
    ///
    /// Returns `0.0` for temperatures inside the band.
    #[must_use]
    pub fn distance(&self, celsius: f64) -> f64 {
        if self.contains(celsius) {
            return 0.0;
        }
        (celsius - self.min).abs().min((celsius - self.max).abs())
    }
}

/// Errors returned by [`EventProfile::new`] and [`TemperatureBand::new`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EventProfileError {
    /// The temperature band is empty or inverted.
    #[error("temperature band minimum {min} must be below maximum {max}")]
    InvertedBand {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
    /// A threshold was negative.
    #[error("{field} threshold must be non-negative, got {value}")]
    NegativeThreshold {
        /// Name of the offending threshold.
        field: &'static str,
        /// Rejected value.
        value: f64,
    },
    /// A bound or threshold was NaN or infinite.
    #[error("{field} must be a finite number")]
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
}

/// Weather preferences for one kind of outdoor event.
///
/// # Examples
/// ```
/// use fairday_core::{EventProfile, TemperatureBand};
///
/// # fn main() -> Result<(), fairday_core::EventProfileError> {
/// let band = TemperatureBand::new(18.0, 26.0)?;
/// let picnic = EventProfile::new(band, 0.5, 4.0, 70.0, 60.0)?;
/// assert_eq!(picnic.max_wind(), 4.0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EventProfile {
    temperature: TemperatureBand,
    max_precip: f64,
    max_wind: f64,
    max_humidity: f64,
    max_clouds: f64,
}

impl EventProfile {
    /// Validates and constructs an [`EventProfile`].
    ///
    /// # Errors
    /// Returns [`EventProfileError`] when any threshold is negative or not
    /// finite.
    pub fn new(
        temperature: TemperatureBand,
        max_precip: f64,
        max_wind: f64,
        max_humidity: f64,
        max_clouds: f64,
    ) -> Result<Self, EventProfileError> {
        for (field, value) in [
            ("max_precip", max_precip),
            ("max_wind", max_wind),
            ("max_humidity", max_humidity),
            ("max_clouds", max_clouds),
        ] {
            if !value.is_finite() {
                return Err(EventProfileError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(EventProfileError::NegativeThreshold { field, value });
            }
        }
        Ok(Self {
            temperature,
            max_precip,
            max_wind,
            max_humidity,
            max_clouds,
        })
    }

    /// Construct a profile from trusted literals without validation.
    ///
    /// Only the built-in registry uses this; its values are covered by tests.
    pub(crate) const fn preset(
        (min, max): (f64, f64),
        max_precip: f64,
        max_wind: f64,
        max_humidity: f64,
        max_clouds: f64,
    ) -> Self {
        Self {
            temperature: TemperatureBand { min, max },
            max_precip,
            max_wind,
            max_humidity,
            max_clouds,
        }
    }

    /// Acceptable temperature band in Celsius.
    #[must_use]
    pub const fn temperature(&self) -> TemperatureBand {
        self.temperature
    }

    /// Maximum tolerated precipitation in millimetres.
    #[must_use]
    pub const fn max_precip(&self) -> f64 {
        self.max_precip
    }

    /// Maximum tolerated wind speed in metres per second.
    #[must_use]
    pub const fn max_wind(&self) -> f64 {
        self.max_wind
    }

    /// Maximum tolerated afternoon humidity in percent.
    #[must_use]
    pub const fn max_humidity(&self) -> f64 {
        self.max_humidity
    }

    /// Maximum tolerated afternoon cloud cover in percent.
    #[must_use]
    pub const fn max_clouds(&self) -> f64 {
        self.max_clouds
    }
}
