//! Daily weather observations as stored in the source dataset.
//!
//! One [`WeatherObservation`] exists per `(location, date)` pair. Values are
//! sampled at a fixed afternoon reference time rather than aggregated over
//! the day. Temperatures stay in Kelvin, the dataset's native unit, and are
//! converted on demand.

use chrono::{Datelike, NaiveDate};
use geo::Coord;

/// Offset between the Kelvin and Celsius scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Convert a Kelvin temperature to Celsius.
///
/// # Examples
/// ```
/// use fairday_core::kelvin_to_celsius;
///
/// assert!((kelvin_to_celsius(293.15) - 20.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - KELVIN_OFFSET
}

/// A single day of weather at one location.
///
/// The location uses WGS84 degrees with `x = longitude` and `y = latitude`.
/// It is compared exactly against registry coordinates, so values must be
/// carried through unchanged from the dataset.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeatherObservation {
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Observation site (`x = longitude`, `y = latitude`).
    pub location: Coord<f64>,
    /// Afternoon air temperature in Kelvin.
    pub afternoon_temp_kelvin: f64,
    /// Precipitation in millimetres.
    pub precip: f64,
    /// Maximum wind speed in metres per second.
    pub wind_max_speed: f64,
    /// Afternoon relative humidity in percent.
    pub humidity_afternoon: f64,
    /// Afternoon cloud cover in percent.
    pub cloud_cover_afternoon: f64,
}

impl WeatherObservation {
    /// Afternoon temperature converted to Celsius.
    #[must_use]
    pub fn temp_celsius(&self) -> f64 {
        kelvin_to_celsius(self.afternoon_temp_kelvin)
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.location.y
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.location.x
    }

    /// Report whether the observation was taken exactly at `location`.
    #[must_use]
    pub fn is_at(&self, location: Coord<f64>) -> bool {
        self.location.x == location.x && self.location.y == location.y
    }

    /// Report whether the observation falls in `month` of `year`.
    #[must_use]
    pub fn falls_in(&self, month: u32, year: i32) -> bool {
        self.date.month() == month && self.date.year() == year
    }
}
