//! `BestDaysPlanner` implementation.

use std::time::Instant;

use fairday_core::{
    CityRegistry, ClassifierInput, ClassifyError, Diagnostics, EventProfile, EventRegistry,
    ObservationStore, PlanError, PlanRequest, PlanResponse, Planner, RuleBasedClassifier,
    ScoredDay, Scorer, WeatherCategory, WeatherClassifier,
};
use geo::Coord;

/// Altitude assumed for classifier input, in metres.
const DEFAULT_ALTITUDE_M: f64 = 100.0;
/// Sea-level standard pressure assumed for classifier input, in hectopascals.
const DEFAULT_AIR_PRESSURE_HPA: f64 = 1013.25;

/// Configuration for [`BestDaysPlanner`].
///
/// The dataset carries no altitude or pressure readings, so classifier input
/// uses these fixed values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Altitude passed to the classifier, in metres.
    pub altitude_m: f64,
    /// Air pressure passed to the classifier, in hectopascals.
    pub air_pressure_hpa: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            altitude_m: DEFAULT_ALTITUDE_M,
            air_pressure_hpa: DEFAULT_AIR_PRESSURE_HPA,
        }
    }
}

impl PlannerConfig {
    /// Override the altitude passed to the classifier.
    #[must_use]
    pub const fn with_altitude(mut self, altitude_m: f64) -> Self {
        self.altitude_m = altitude_m;
        self
    }

    /// Override the air pressure passed to the classifier.
    #[must_use]
    pub const fn with_air_pressure(mut self, air_pressure_hpa: f64) -> Self {
        self.air_pressure_hpa = air_pressure_hpa;
        self
    }
}

/// Ranks the days of a month by how well they suit an event.
///
/// The planner is generic over the engine boundaries: a read-only observation
/// store, a day scorer, and an optional weather classifier. Classification is
/// off until [`BestDaysPlanner::with_classifier`] supplies one.
///
/// # Examples
/// ```
/// use fairday_core::{
///     CityRegistry, EventRegistry, MemoryObservationStore, PenaltyScorer, PlanRequest, Planner,
/// };
/// use fairday_ranker::BestDaysPlanner;
///
/// let planner = BestDaysPlanner::new(
///     MemoryObservationStore::new(),
///     PenaltyScorer,
///     CityRegistry::builtin(),
///     EventRegistry::builtin(),
/// );
/// let response = planner
///     .find_best_days(&PlanRequest::new("Craiova", "picnic", 5, 2026))
///     .expect("known city and event");
/// assert!(response.best_days.is_empty());
/// ```
#[derive(Debug)]
pub struct BestDaysPlanner<S, C, K = RuleBasedClassifier>
where
    S: ObservationStore,
    C: Scorer,
    K: WeatherClassifier,
{
    store: S,
    scorer: C,
    classifier: Option<K>,
    cities: CityRegistry,
    events: EventRegistry,
    config: PlannerConfig,
}

impl<S, C> BestDaysPlanner<S, C>
where
    S: ObservationStore,
    C: Scorer,
{
    /// Construct a planner without classification, using default
    /// configuration.
    #[must_use]
    pub fn new(store: S, scorer: C, cities: CityRegistry, events: EventRegistry) -> Self {
        Self::with_config(store, scorer, cities, events, PlannerConfig::default())
    }

    /// Construct a planner without classification, using explicit
    /// configuration.
    #[must_use]
    pub const fn with_config(
        store: S,
        scorer: C,
        cities: CityRegistry,
        events: EventRegistry,
        config: PlannerConfig,
    ) -> Self {
        Self {
            store,
            scorer,
            classifier: None,
            cities,
            events,
            config,
        }
    }
}

impl<S, C, K> BestDaysPlanner<S, C, K>
where
    S: ObservationStore,
    C: Scorer,
    K: WeatherClassifier,
{
    /// Label every ranked day using `classifier`.
    #[must_use]
    pub fn with_classifier<L>(self, classifier: L) -> BestDaysPlanner<S, C, L>
    where
        L: WeatherClassifier,
    {
        BestDaysPlanner {
            store: self.store,
            scorer: self.scorer,
            classifier: Some(classifier),
            cities: self.cities,
            events: self.events,
            config: self.config,
        }
    }

    /// Cities the planner accepts.
    #[must_use]
    pub const fn cities(&self) -> &CityRegistry {
        &self.cities
    }

    /// Events the planner accepts.
    #[must_use]
    pub const fn events(&self) -> &EventRegistry {
        &self.events
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    fn resolve(&self, request: &PlanRequest) -> Result<(Coord<f64>, &EventProfile), PlanError> {
        let location =
            self.cities
                .coordinate(&request.city)
                .ok_or_else(|| PlanError::UnknownCity {
                    city: request.city.clone(),
                    available: self.cities.names(),
                })?;
        let profile = self
            .events
            .get(&request.event)
            .ok_or_else(|| PlanError::UnknownEvent {
                event: request.event.clone(),
                available: self.events.names(),
            })?;
        Ok((location, profile))
    }

    /// Score the month's rows and keep the best `limit`, best first.
    ///
    /// The sort is stable, so equal scores keep dataset order.
    fn rank(
        &self,
        location: Coord<f64>,
        profile: &EventProfile,
        request: &PlanRequest,
    ) -> (Vec<ScoredDay>, usize) {
        let mut days: Vec<ScoredDay> = self
            .store
            .observations_in_month(location, request.month, request.year)
            .map(|observation| {
                ScoredDay::from_observation(observation, self.scorer.score(observation, profile))
            })
            .collect();
        let evaluated = days.len();
        days.sort_by(|lhs, rhs| rhs.score.total_cmp(&lhs.score));
        days.truncate(request.limit);
        (days, evaluated)
    }

    const fn classifier_input(&self, day: &ScoredDay) -> ClassifierInput {
        ClassifierInput {
            temperature: day.temp_celsius,
            precipitation: day.precip,
            wind: day.wind_max_speed,
            relative_humidity: day.humidity_afternoon,
            altitude: self.config.altitude_m,
            air_pressure: self.config.air_pressure_hpa,
        }
    }

    /// Attach categories in place, returning how many came from the fallback.
    fn classify_days(&self, days: &mut [ScoredDay]) -> usize {
        let Some(classifier) = self.classifier.as_ref() else {
            return 0;
        };
        let mut fallbacks = 0_usize;
        for day in days.iter_mut() {
            let input = self.classifier_input(day);
            let (category, fell_back) = classify_with_fallback(classifier, &input, day);
            day.category = category;
            if fell_back {
                fallbacks = fallbacks.saturating_add(1);
            }
        }
        fallbacks
    }
}

fn classify_with_fallback<K: WeatherClassifier>(
    classifier: &K,
    input: &ClassifierInput,
    day: &ScoredDay,
) -> (Option<WeatherCategory>, bool) {
    match classifier.classify(input) {
        Ok(category) => (Some(category), false),
        Err(ClassifyError::Unavailable { reason }) => {
            log::warn!(
                "classifier unavailable for {}: {reason}; using rule-based fallback",
                day.date
            );
            (RuleBasedClassifier.classify(input).ok(), true)
        }
        Err(err) => {
            log::warn!("cannot classify {}: {err}", day.date);
            (None, false)
        }
    }
}

impl<S, C, K> Planner for BestDaysPlanner<S, C, K>
where
    S: ObservationStore,
    C: Scorer,
    K: WeatherClassifier,
{
    fn find_best_days(&self, request: &PlanRequest) -> Result<PlanResponse, PlanError> {
        request.validate()?;
        let started_at = Instant::now();

        let (location, profile) = self.resolve(request)?;
        let (mut best_days, candidates_evaluated) = self.rank(location, profile, request);
        let classifier_fallbacks = self.classify_days(&mut best_days);

        log::debug!(
            "ranked {candidates_evaluated} day(s) for {} in {}/{}; returning {}",
            request.event,
            request.month,
            request.year,
            best_days.len()
        );

        Ok(PlanResponse {
            best_days,
            diagnostics: Diagnostics {
                candidates_evaluated,
                classifier_fallbacks,
                plan_time: started_at.elapsed(),
            },
        })
    }
}

#[cfg(test)]
mod tests;
