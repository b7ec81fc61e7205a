use chrono::NaiveDate;
use fairday_core::{EventProfile, EventRegistry, PenaltyScorer, Scorer, WeatherObservation};
use geo::Coord;
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use std::cell::{Cell, RefCell};

#[fixture]
fn profile() -> RefCell<Option<EventProfile>> {
    RefCell::new(None)
}

#[fixture]
fn day() -> RefCell<WeatherObservation> {
    RefCell::new(WeatherObservation {
        date: NaiveDate::from_ymd_opt(2026, 6, 10).expect("valid date"),
        location: Coord { x: 24.15, y: 45.8 },
        afternoon_temp_kelvin: 293.15,
        precip: 0.0,
        wind_max_speed: 1.0,
        humidity_afternoon: 40.0,
        cloud_cover_afternoon: 10.0,
    })
}

#[fixture]
fn score() -> Cell<f64> {
    Cell::new(f64::NAN)
}

#[given("the \"{event}\" event profile")]
fn given_profile(#[from(profile)] profile: &RefCell<Option<EventProfile>>, event: String) {
    let events = EventRegistry::builtin();
    profile.replace(events.get(&event).cloned());
}

#[given("an afternoon at {celsius} degrees")]
fn given_temperature(#[from(day)] day: &RefCell<WeatherObservation>, celsius: f64) {
    day.borrow_mut().afternoon_temp_kelvin = celsius + 273.15;
}

#[given("a maximum wind speed of {wind} metres per second")]
fn given_wind(#[from(day)] day: &RefCell<WeatherObservation>, wind: f64) {
    day.borrow_mut().wind_max_speed = wind;
}

#[given("{precip} mm of precipitation")]
fn given_precipitation(#[from(day)] day: &RefCell<WeatherObservation>, precip: f64) {
    day.borrow_mut().precip = precip;
}

#[when("I score the day")]
fn when_score(
    #[from(profile)] profile: &RefCell<Option<EventProfile>>,
    #[from(day)] day: &RefCell<WeatherObservation>,
    #[from(score)] score: &Cell<f64>,
) {
    let profile = profile.borrow();
    let profile = profile.as_ref().expect("profile selected");
    score.set(PenaltyScorer.score(&day.borrow(), profile));
}

#[then("the score is {expected}")]
fn then_score(#[from(score)] score: &Cell<f64>, expected: f64) {
    assert!(
        (score.get() - expected).abs() < 1e-9,
        "expected {expected}, scored {}",
        score.get()
    );
}

#[scenario(path = "tests/features/suitability_score.feature", index = 0)]
fn perfect_picnic(
    profile: RefCell<Option<EventProfile>>,
    day: RefCell<WeatherObservation>,
    score: Cell<f64>,
) {
    let _ = (profile, day, score);
}

#[scenario(path = "tests/features/suitability_score.feature", index = 1)]
fn chilly_picnic(
    profile: RefCell<Option<EventProfile>>,
    day: RefCell<WeatherObservation>,
    score: Cell<f64>,
) {
    let _ = (profile, day, score);
}

#[scenario(path = "tests/features/suitability_score.feature", index = 2)]
fn windy_wedding(
    profile: RefCell<Option<EventProfile>>,
    day: RefCell<WeatherObservation>,
    score: Cell<f64>,
) {
    let _ = (profile, day, score);
}

#[scenario(path = "tests/features/suitability_score.feature", index = 3)]
fn soaked_festival(
    profile: RefCell<Option<EventProfile>>,
    day: RefCell<WeatherObservation>,
    score: Cell<f64>,
) {
    let _ = (profile, day, score);
}
