//! Unit tests for `BestDaysPlanner`.

use super::*;
use fairday_core::test_support::{
    CRAIOVA, FixedClassifier, UnavailableClassifier, observation_at, observation_on,
};
use fairday_core::{MemoryObservationStore, PenaltyScorer, PlanRequestError, WeatherObservation};
use rstest::{fixture, rstest};

const SIBIU: Coord<f64> = Coord { x: 24.15, y: 45.8 };

const fn windy(mut observation: WeatherObservation, wind: f64) -> WeatherObservation {
    observation.wind_max_speed = wind;
    observation
}

#[fixture]
fn store() -> MemoryObservationStore {
    MemoryObservationStore::with_observations([
        windy(observation_on(2026, 5, 1), 7.0),
        windy(observation_on(2026, 5, 2), 2.0),
        windy(observation_on(2026, 5, 3), 5.0),
        observation_at(SIBIU, 2026, 5, 4),
        observation_on(2026, 6, 5),
        windy(observation_on(2026, 5, 6), 2.0),
        windy(observation_on(2026, 5, 7), 9.0),
    ])
}

fn planner_over(
    store: MemoryObservationStore,
) -> BestDaysPlanner<MemoryObservationStore, PenaltyScorer> {
    BestDaysPlanner::new(
        store,
        PenaltyScorer,
        CityRegistry::builtin(),
        EventRegistry::builtin(),
    )
}

fn days_of(response: &PlanResponse) -> Vec<u32> {
    response
        .best_days
        .iter()
        .map(|day| chrono::Datelike::day(&day.date))
        .collect()
}

#[rstest]
fn ranks_days_by_descending_score(store: MemoryObservationStore) {
    let request = PlanRequest::new("Craiova", "picnic", 5, 2026).with_limit(3);
    let response = planner_over(store)
        .find_best_days(&request)
        .expect("plan should succeed");

    assert_eq!(days_of(&response), vec![2, 6, 3]);
    assert_eq!(response.diagnostics.candidates_evaluated, 5);
    let scores: Vec<f64> = response.best_days.iter().map(|day| day.score).collect();
    assert_eq!(scores, vec![100.0, 100.0, 97.0]);
}

#[rstest]
fn limit_larger_than_rows_returns_every_row(store: MemoryObservationStore) {
    let request = PlanRequest::new("Craiova", "picnic", 5, 2026).with_limit(50);
    let response = planner_over(store)
        .find_best_days(&request)
        .expect("plan should succeed");
    assert_eq!(days_of(&response), vec![2, 6, 3, 1, 7]);
}

#[rstest]
fn month_without_rows_is_an_empty_success(store: MemoryObservationStore) {
    let request = PlanRequest::new("Craiova", "picnic", 1, 2026);
    let response = planner_over(store)
        .find_best_days(&request)
        .expect("empty month is not an error");
    assert!(response.is_empty());
    assert_eq!(response.diagnostics.candidates_evaluated, 0);
}

#[rstest]
fn duplicate_dates_are_ranked_independently() {
    let store = MemoryObservationStore::with_observations([
        windy(observation_on(2026, 5, 9), 6.0),
        observation_on(2026, 5, 9),
    ]);
    let response = planner_over(store)
        .find_best_days(&PlanRequest::new("Craiova", "picnic", 5, 2026))
        .expect("plan should succeed");
    assert_eq!(days_of(&response), vec![9, 9]);
    assert_eq!(
        response.best_days.first().map(|day| day.wind_max_speed),
        Some(2.0)
    );
}

#[rstest]
fn unknown_city_lists_registered_cities(store: MemoryObservationStore) {
    let err = planner_over(store)
        .find_best_days(&PlanRequest::new("Atlantis", "picnic", 5, 2026))
        .expect_err("unknown city");
    match err {
        PlanError::UnknownCity { city, available } => {
            assert_eq!(city, "Atlantis");
            assert_eq!(available, CityRegistry::builtin().names());
        }
        other => panic!("expected UnknownCity, found {other:?}"),
    }
}

#[rstest]
fn unknown_event_lists_registered_events(store: MemoryObservationStore) {
    let err = planner_over(store)
        .find_best_days(&PlanRequest::new("Craiova", "rave", 5, 2026))
        .expect_err("unknown event");
    assert_eq!(
        err,
        PlanError::UnknownEvent {
            event: "rave".to_owned(),
            available: EventRegistry::builtin().names(),
        }
    );
}

#[rstest]
#[case(PlanRequest::new("Craiova", "picnic", 13, 2026), PlanRequestError::MonthOutOfRange(13))]
#[case(PlanRequest::new("Craiova", "picnic", 5, 2026).with_limit(0), PlanRequestError::ZeroLimit)]
fn invalid_requests_are_rejected_before_lookup(
    store: MemoryObservationStore,
    #[case] request: PlanRequest,
    #[case] expected: PlanRequestError,
) {
    let err = planner_over(store)
        .find_best_days(&request)
        .expect_err("invalid request");
    assert_eq!(err, PlanError::InvalidRequest(expected));
}

#[rstest]
fn days_are_unlabelled_without_a_classifier(store: MemoryObservationStore) {
    let response = planner_over(store)
        .find_best_days(&PlanRequest::new("Craiova", "picnic", 5, 2026))
        .expect("plan should succeed");
    assert!(response.best_days.iter().all(|day| day.category.is_none()));
}

#[rstest]
fn configured_classifier_labels_every_day(store: MemoryObservationStore) {
    let planner = planner_over(store).with_classifier(FixedClassifier(WeatherCategory::Hot));
    let response = planner
        .find_best_days(&PlanRequest::new("Craiova", "picnic", 5, 2026))
        .expect("plan should succeed");
    assert!(
        response
            .best_days
            .iter()
            .all(|day| day.category == Some(WeatherCategory::Hot))
    );
    assert_eq!(response.diagnostics.classifier_fallbacks, 0);
}

#[rstest]
fn unavailable_classifier_falls_back_per_day(store: MemoryObservationStore) {
    let classifier = UnavailableClassifier::default();
    let planner = planner_over(store).with_classifier(&classifier);
    let response = planner
        .find_best_days(&PlanRequest::new("Craiova", "picnic", 5, 2026).with_limit(2))
        .expect("fallback never fails the plan");

    assert_eq!(classifier.calls(), 2);
    assert_eq!(response.diagnostics.classifier_fallbacks, 2);
    // 22 degrees and dry: the threshold rules call this hot.
    assert!(
        response
            .best_days
            .iter()
            .all(|day| day.category == Some(WeatherCategory::Hot))
    );
}

#[rstest]
fn classifier_input_uses_configured_altitude_and_pressure() {
    let config = PlannerConfig::default()
        .with_altitude(350.0)
        .with_air_pressure(990.0);
    let planner = BestDaysPlanner::with_config(
        MemoryObservationStore::new(),
        PenaltyScorer,
        CityRegistry::builtin(),
        EventRegistry::builtin(),
        config,
    );
    let day = ScoredDay::from_observation(&observation_on(2026, 5, 1), 100.0);
    let input = planner.classifier_input(&day);
    assert_eq!(input.altitude, 350.0);
    assert_eq!(input.air_pressure, 990.0);
    assert_eq!(input.wind, 2.0);
}

#[rstest]
fn location_must_match_exactly() {
    let nearby = Coord {
        x: CRAIOVA.x,
        y: 44.3167,
    };
    let store = MemoryObservationStore::with_observations([observation_at(nearby, 2026, 5, 1)]);
    let response = planner_over(store)
        .find_best_days(&PlanRequest::new("Craiova", "picnic", 5, 2026))
        .expect("plan should succeed");
    assert!(response.is_empty());
}
