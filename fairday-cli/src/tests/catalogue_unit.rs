//! Unit tests for the `options` and `criteria` commands.

use super::*;
use crate::catalogue::{
    CriteriaArgs, CriteriaOutput, OptionsOutput, run_criteria_with, run_options_with,
};
use rstest::rstest;

#[rstest]
fn options_lists_every_city_and_event() {
    let mut stdout = Vec::new();
    run_options_with(&mut stdout).expect("options should succeed");
    let output: OptionsOutput = serde_json::from_slice(&stdout).expect("JSON output");

    assert_eq!(output.cities.len(), 24);
    assert!(output.cities.iter().any(|city| city == "Drobeta-Turnu Severin"));
    assert_eq!(
        output.events,
        vec![
            "picnic",
            "festival",
            "pool_party",
            "concert",
            "drumetie",
            "nunta",
            "zi_nastere",
        ]
    );
}

#[rstest]
#[case("picnic")]
#[case("  Picnic ")]
fn criteria_describes_the_event(#[case] event: &str) {
    let mut stdout = Vec::new();
    let args = CriteriaArgs {
        event: event.to_owned(),
    };
    run_criteria_with(&args, &mut stdout).expect("criteria should succeed");
    let output: CriteriaOutput = serde_json::from_slice(&stdout).expect("JSON output");

    assert_eq!(output.event, "picnic");
    assert_eq!(output.criteria.temp_range, (18.0, 26.0));
    assert_eq!(output.criteria.max_precip, 0.5);
    assert_eq!(output.criteria.max_wind, 4.0);
    assert_eq!(output.criteria.max_humidity, 70.0);
    assert_eq!(output.criteria.max_clouds, 60.0);
}

#[rstest]
fn criteria_json_uses_a_two_element_range() {
    let mut stdout = Vec::new();
    let args = CriteriaArgs {
        event: "nunta".to_owned(),
    };
    run_criteria_with(&args, &mut stdout).expect("criteria should succeed");
    let json: serde_json::Value = serde_json::from_slice(&stdout).expect("JSON output");
    assert_eq!(json["criteria"]["temp_range"], serde_json::json!([16.0, 26.0]));
}

#[rstest]
fn unknown_event_lists_alternatives() {
    let args = CriteriaArgs {
        event: "rave".to_owned(),
    };
    match run_criteria_with(&args, &mut Vec::new()).expect_err("unknown event") {
        CliError::UnknownEvent { event, available } => {
            assert_eq!(event, "rave");
            assert_eq!(available.len(), 7);
        }
        other => panic!("expected UnknownEvent, found {other:?}"),
    }
}
