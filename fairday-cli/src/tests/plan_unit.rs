//! Focused unit tests covering plan configuration and output shaping.

use super::helpers::{Workspace, write_utf8};
use super::*;
use crate::plan::{
    DEFAULT_DATASET, DEFAULT_YEAR, DayOutput, DefaultPlannerBuilder, NO_DATA_MESSAGE, PlanArgs,
    PlanConfig, PlanOutput, config_from_layers_for_test, run_plan_with,
};
use camino::Utf8PathBuf;
use fairday_core::{DEFAULT_LIMIT, PlanError, PlanRequest, PlanResponse, ScoredDay};
use fairday_core::test_support::observation_on;
use rstest::rstest;

fn complete_args(dataset: Utf8PathBuf) -> PlanArgs {
    PlanArgs {
        city: Some("Craiova".to_owned()),
        event: Some("picnic".to_owned()),
        month: Some(5),
        year: Some(2026),
        limit: Some(2),
        dataset: Some(dataset),
        classifier_url: None,
    }
}

#[rstest]
#[case::city(PlanArgs { city: None, ..complete_args(Utf8PathBuf::from("x.csv")) }, ARG_PLAN_CITY, ENV_PLAN_CITY)]
#[case::event(PlanArgs { event: None, ..complete_args(Utf8PathBuf::from("x.csv")) }, ARG_PLAN_EVENT, ENV_PLAN_EVENT)]
#[case::month(PlanArgs { month: None, ..complete_args(Utf8PathBuf::from("x.csv")) }, ARG_PLAN_MONTH, ENV_PLAN_MONTH)]
fn converting_without_required_fields_errors(
    #[case] args: PlanArgs,
    #[case] field: &'static str,
    #[case] env_var: &'static str,
) {
    let err = PlanConfig::try_from(args).expect_err("missing field should error");
    match err {
        CliError::MissingArgument {
            field: missing,
            env,
        } => {
            assert_eq!(missing, field);
            assert_eq!(env, env_var);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn optional_fields_fall_back_to_defaults() {
    let args = PlanArgs {
        city: Some("Sibiu".to_owned()),
        event: Some("festival".to_owned()),
        month: Some(7),
        ..PlanArgs::default()
    };
    let config = PlanConfig::try_from(args).expect("config should build");
    assert_eq!(config.year, DEFAULT_YEAR);
    assert_eq!(config.limit, DEFAULT_LIMIT);
    assert_eq!(config.dataset, Utf8PathBuf::from(DEFAULT_DATASET));
    assert_eq!(config.classifier_url, None);
}

#[rstest]
fn validate_sources_reports_missing_dataset() {
    let workspace = Workspace::new();
    let config =
        PlanConfig::try_from(complete_args(workspace.dataset.clone())).expect("config builds");
    match config.validate_sources().expect_err("dataset is absent") {
        CliError::MissingSourceFile { field, path } => {
            assert_eq!(field, ARG_PLAN_DATASET);
            assert_eq!(path, workspace.dataset);
        }
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn validate_sources_rejects_directories() {
    let workspace = Workspace::new();
    let config =
        PlanConfig::try_from(complete_args(workspace.root.clone())).expect("config builds");
    match config.validate_sources().expect_err("directory is not a dataset") {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_PLAN_DATASET),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "month": "May" }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_prefers_cli_over_env_over_file() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({
            "city": "Cluj",
            "event": "concert",
            "month": 6,
            "dataset": "from-file.csv",
        }),
        None,
    );
    composer.push_environment(json!({
        "event": "festival",
        "dataset": "from-env.csv",
    }));
    composer.push_cli(json!({ "dataset": "from-cli.csv" }));

    let config =
        config_from_layers_for_test(composer.layers()).expect("merged config should build");
    assert_eq!(config.city, "Cluj");
    assert_eq!(config.event, "festival");
    assert_eq!(config.month, 6);
    assert_eq!(config.dataset, Utf8PathBuf::from("from-cli.csv"));
}

#[rstest]
fn day_output_rounds_each_measurement() {
    let mut observation = observation_on(2026, 5, 2);
    observation.precip = 0.123;
    observation.wind_max_speed = 4.125;
    observation.humidity_afternoon = 65.25;
    observation.cloud_cover_afternoon = 33.33;
    let day = ScoredDay::from_observation(&observation, 97.456);

    let output = DayOutput::from(&day);
    assert_eq!(output.date, "2026-05-02");
    assert_eq!(output.score, 97.46);
    assert_eq!(output.temp_celsius, 22.0);
    assert_eq!(output.precip, 0.12);
    assert_eq!(output.wind_max_speed, 4.12);
    assert_eq!(output.humidity_afternoon, 65.2);
    assert_eq!(output.cloud_cover_afternoon, 33.3);
    assert_eq!(output.category, None);
}

#[rstest]
fn empty_plan_carries_explanation() {
    let request = PlanRequest::new("Craiova", "picnic", 1, 2026);
    let output = PlanOutput::new(&request, &PlanResponse::default());
    assert!(output.best_days.is_empty());
    assert_eq!(output.message, NO_DATA_MESSAGE);
}

#[rstest]
fn unlabelled_days_omit_the_category_key() {
    let day = ScoredDay::from_observation(&observation_on(2026, 5, 2), 100.0);
    let json = serde_json::to_value(DayOutput::from(&day)).expect("serialise day");
    assert!(json.get("category").is_none());
}

#[rstest]
fn plan_writes_ranked_days_as_json() {
    let workspace = Workspace::with_sample_dataset();
    let mut stdout = Vec::new();
    run_plan_with(
        complete_args(workspace.dataset.clone()),
        &DefaultPlannerBuilder,
        &mut stdout,
    )
    .expect("plan should succeed");

    let output: PlanOutput = serde_json::from_slice(&stdout).expect("plan output is JSON");
    let dates: Vec<&str> = output.best_days.iter().map(|day| day.date.as_str()).collect();
    assert_eq!(dates, vec!["2026-05-02", "2026-05-01"]);
    let scores: Vec<f64> = output.best_days.iter().map(|day| day.score).collect();
    assert_eq!(scores, vec![100.0, 94.0]);
    assert_eq!(output.message, "Found 2 suitable days for picnic in Craiova");
}

#[rstest]
fn plan_surfaces_planner_errors() {
    let workspace = Workspace::with_sample_dataset();
    let args = PlanArgs {
        event: Some("rave".to_owned()),
        ..complete_args(workspace.dataset.clone())
    };
    let err = run_plan_with(args, &DefaultPlannerBuilder, &mut Vec::new())
        .expect_err("unknown event");
    assert!(matches!(
        err,
        CliError::Plan(PlanError::UnknownEvent { ref event, .. }) if event == "rave"
    ));
}

#[rstest]
fn plan_reports_malformed_datasets() {
    let workspace = Workspace::new();
    write_utf8(
        &workspace.dataset,
        b"date,lat,lon\n2026-05-01,44.31667,23.8\n",
    );
    let err = run_plan_with(
        complete_args(workspace.dataset.clone()),
        &DefaultPlannerBuilder,
        &mut Vec::new(),
    )
    .expect_err("dataset lacks measurement columns");
    assert!(matches!(err, CliError::LoadDataset(_)));
}
