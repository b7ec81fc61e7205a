//! Static lookup tables for cities and events.
//!
//! Both registries are small immutable tables built once at start-up and
//! handed to the planner. Entries keep their insertion order, so listings
//! follow the order the built-in tables declare them in.

use geo::Coord;

use crate::EventProfile;

/// Cities known to the dataset, as `(name, latitude, longitude)`.
const BUILTIN_CITIES: [(&str, f64, f64); 24] = [
    ("Alba", 46.06667, 23.58333),
    ("Arad", 46.16667, 21.31667),
    ("Bacau", 46.56667, 26.91667),
    ("Baia Mare", 47.65969, 23.56808),
    ("Bistrita", 47.13316, 24.50069),
    ("Brasov", 45.64861, 25.60613),
    ("Bucuresti", 44.43225, 26.10626),
    ("Buzau", 45.14802, 26.82148),
    ("Cluj", 46.76667, 23.6),
    ("Constanta", 44.18073, 28.63432),
    ("Craiova", 44.31667, 23.8),
    ("Deva", 45.88333, 22.9),
    ("Drobeta-Turnu Severin", 44.63188, 22.65648),
    ("Galati", 45.45, 28.03333),
    ("Iasi", 47.16667, 27.6),
    ("Oradea", 47.06667, 21.93333),
    ("Petrosani", 45.41667, 23.36667),
    ("Pitesti", 44.85, 24.86667),
    ("Ramnicu Valcea", 45.1, 24.36667),
    ("Satu Mare", 47.8, 22.88333),
    ("Sibiu", 45.8, 24.15),
    ("Slobozia", 44.56667, 27.36667),
    ("Suceava", 47.63333, 26.25),
    ("Timisoara", 45.75372, 21.22571),
];

/// Built-in event profiles.
const BUILTIN_EVENTS: [(&str, EventProfile); 7] = [
    ("picnic", EventProfile::preset((18.0, 26.0), 0.5, 4.0, 70.0, 60.0)),
    ("festival", EventProfile::preset((15.0, 28.0), 1.0, 6.0, 75.0, 80.0)),
    ("pool_party", EventProfile::preset((22.0, 32.0), 0.0, 3.0, 65.0, 40.0)),
    ("concert", EventProfile::preset((12.0, 25.0), 0.2, 5.0, 80.0, 70.0)),
    ("drumetie", EventProfile::preset((8.0, 22.0), 0.1, 7.0, 80.0, 70.0)),
    ("nunta", EventProfile::preset((16.0, 26.0), 0.0, 3.0, 65.0, 30.0)),
    ("zi_nastere", EventProfile::preset((15.0, 27.0), 0.3, 4.0, 75.0, 60.0)),
];

/// City name to coordinate lookup.
///
/// Coordinates use `x = longitude`, `y = latitude` and act as exact join keys
/// into the observation table.
///
/// # Examples
/// ```
/// use fairday_core::CityRegistry;
///
/// let cities = CityRegistry::builtin();
/// let craiova = cities.coordinate("Craiova").expect("Craiova is registered");
/// assert_eq!((craiova.y, craiova.x), (44.31667, 23.8));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityRegistry {
    cities: Vec<(String, Coord<f64>)>,
}

impl CityRegistry {
    /// Construct an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry of cities covered by the bundled weather dataset.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN_CITIES
            .iter()
            .fold(Self::new(), |registry, &(name, latitude, longitude)| {
                registry.with_city(name, latitude, longitude)
            })
    }

    /// Insert a city, or replace its coordinate in place if already known.
    pub fn insert(&mut self, name: impl Into<String>, latitude: f64, longitude: f64) {
        let location = Coord {
            x: longitude,
            y: latitude,
        };
        upsert(&mut self.cities, name.into(), location);
    }

    /// Add a city while returning `self` for chaining.
    #[must_use]
    pub fn with_city(mut self, name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        self.insert(name, latitude, longitude);
        self
    }

    /// Coordinates for `name`, if registered.
    #[must_use]
    pub fn coordinate(&self, name: &str) -> Option<Coord<f64>> {
        lookup(&self.cities, name).copied()
    }

    /// Report whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        lookup(&self.cities, name).is_some()
    }

    /// Registered city names in insertion order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        names(&self.cities)
    }

    /// Number of registered cities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Report whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

/// Event name to [`EventProfile`] lookup.
///
/// # Examples
/// ```
/// use fairday_core::EventRegistry;
///
/// let events = EventRegistry::builtin();
/// assert!(events.contains("nunta"));
/// assert!(events.get("rave").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventRegistry {
    events: Vec<(String, EventProfile)>,
}

impl EventRegistry {
    /// Construct an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The registry of built-in event profiles.
    #[must_use]
    pub fn builtin() -> Self {
        BUILTIN_EVENTS
            .iter()
            .fold(Self::new(), |registry, (name, profile)| {
                registry.with_event(*name, profile.clone())
            })
    }

    /// Insert an event, or replace its profile in place if already known.
    pub fn insert(&mut self, name: impl Into<String>, profile: EventProfile) {
        upsert(&mut self.events, name.into(), profile);
    }

    /// Add an event while returning `self` for chaining.
    #[must_use]
    pub fn with_event(mut self, name: impl Into<String>, profile: EventProfile) -> Self {
        self.insert(name, profile);
        self
    }

    /// Profile for `name`, if registered.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EventProfile> {
        lookup(&self.events, name)
    }

    /// Report whether `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        lookup(&self.events, name).is_some()
    }

    /// Registered event names in insertion order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        names(&self.events)
    }

    /// Number of registered events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Report whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

fn lookup<'a, T>(entries: &'a [(String, T)], name: &str) -> Option<&'a T> {
    entries
        .iter()
        .find_map(|(key, value)| (key == name).then_some(value))
}

fn upsert<T>(entries: &mut Vec<(String, T)>, name: String, value: T) {
    match entries.iter_mut().find(|entry| entry.0 == name) {
        Some(entry) => entry.1 = value,
        None => entries.push((name, value)),
    }
}

fn names<T>(entries: &[(String, T)]) -> Vec<String> {
    entries.iter().map(|(name, _)| name.clone()).collect()
}
