//! Read access to the weather observation table.
//!
//! The [`ObservationStore`] trait is the ranking engine's only view of the
//! dataset. Stores are loaded once and shared read-only between queries.

use std::sync::Arc;

use geo::Coord;

use crate::WeatherObservation;

/// Read-only source of daily weather observations.
///
/// Implementations must preserve the dataset's row order: ranking ties are
/// broken by the order in which rows are yielded.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use geo::Coord;
/// use fairday_core::{MemoryObservationStore, ObservationStore, WeatherObservation};
///
/// let craiova = Coord { x: 23.8, y: 44.31667 };
/// let store = MemoryObservationStore::with_observations([WeatherObservation {
///     date: NaiveDate::from_ymd_opt(2026, 5, 1).expect("valid date"),
///     location: craiova,
///     afternoon_temp_kelvin: 290.0,
///     precip: 0.0,
///     wind_max_speed: 1.0,
///     humidity_afternoon: 60.0,
///     cloud_cover_afternoon: 30.0,
/// }]);
/// assert_eq!(store.observations_in_month(craiova, 5, 2026).count(), 1);
/// assert_eq!(store.observations_in_month(craiova, 6, 2026).count(), 0);
/// ```
pub trait ObservationStore: Send + Sync {
    /// Observations taken exactly at `location`, in dataset order.
    fn observations_at(
        &self,
        location: Coord<f64>,
    ) -> Box<dyn Iterator<Item = &WeatherObservation> + Send + '_>;

    /// Observations at `location` dated within `month` of `year`.
    fn observations_in_month(
        &self,
        location: Coord<f64>,
        month: u32,
        year: i32,
    ) -> Box<dyn Iterator<Item = &WeatherObservation> + Send + '_> {
        Box::new(
            self.observations_at(location)
                .filter(move |observation| observation.falls_in(month, year)),
        )
    }
}

impl<S: ObservationStore + ?Sized> ObservationStore for Arc<S> {
    fn observations_at(
        &self,
        location: Coord<f64>,
    ) -> Box<dyn Iterator<Item = &WeatherObservation> + Send + '_> {
        (**self).observations_at(location)
    }

    fn observations_in_month(
        &self,
        location: Coord<f64>,
        month: u32,
        year: i32,
    ) -> Box<dyn Iterator<Item = &WeatherObservation> + Send + '_> {
        (**self).observations_in_month(location, month, year)
    }
}

impl<S: ObservationStore + ?Sized> ObservationStore for &S {
    fn observations_at(
        &self,
        location: Coord<f64>,
    ) -> Box<dyn Iterator<Item = &WeatherObservation> + Send + '_> {
        (**self).observations_at(location)
    }
}

/// In-memory [`ObservationStore`] holding rows in load order.
///
/// Lookups are linear scans; a month of one city is a small slice of a
/// dataset that fits comfortably in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryObservationStore {
    observations: Vec<WeatherObservation>,
}

impl MemoryObservationStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from rows in dataset order.
    pub fn with_observations<I>(observations: I) -> Self
    where
        I: IntoIterator<Item = WeatherObservation>,
    {
        Self {
            observations: observations.into_iter().collect(),
        }
    }

    /// Append a row.
    pub fn push(&mut self, observation: WeatherObservation) {
        self.observations.push(observation);
    }

    /// Number of stored rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Report whether the store holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// All rows in load order.
    #[must_use]
    pub fn as_slice(&self) -> &[WeatherObservation] {
        &self.observations
    }
}

impl FromIterator<WeatherObservation> for MemoryObservationStore {
    fn from_iter<I: IntoIterator<Item = WeatherObservation>>(iter: I) -> Self {
        Self::with_observations(iter)
    }
}

impl ObservationStore for MemoryObservationStore {
    fn observations_at(
        &self,
        location: Coord<f64>,
    ) -> Box<dyn Iterator<Item = &WeatherObservation> + Send + '_> {
        Box::new(
            self.observations
                .iter()
                .filter(move |observation| observation.is_at(location)),
        )
    }
}
