//! End-to-end runs over temporary data directories.
//!
//! Each test writes `train.csv` / `test.csv` fixtures into a fresh
//! directory and drives [`survival::run`] with a [`RunConfig`] pointing at it.

use std::fs;

use approx::assert_abs_diff_eq;
use rstest::rstest;
use survival::testing::{
    table_from_csv, write_data_dir, LABELED_TEST_CSV, TEST_CSV, TRAIN_CSV,
};
use survival::{
    run, EvalOutcome, FeatureSpec, LogisticRegressionConfig, RunConfig, SurvivalPipeline,
};

// =============================================================================
// Helpers
// =============================================================================

fn data_dir(train: &str, test: Option<&str>) -> (tempfile::TempDir, RunConfig) {
    let dir = tempfile::tempdir().unwrap();
    write_data_dir(dir.path(), train, test);
    let config = RunConfig::with_data_dir(dir.path());
    (dir, config)
}

// =============================================================================
// Full runs
// =============================================================================

#[test]
fn four_row_scenario_writes_submission() {
    let (_dir, config) = data_dir(TRAIN_CSV, Some(TEST_CSV));
    let summary = run(&config).unwrap();

    assert!((0.0..=1.0).contains(&summary.train_accuracy));
    match &summary.outcome {
        EvalOutcome::Unlabeled {
            positive_rate,
            head,
        } => {
            assert!((0.0..=1.0).contains(positive_rate));
            assert_eq!(head, &summary.predictions);
        }
        other => panic!("expected unlabeled outcome, got {other:?}"),
    }

    let output = summary.output_path.expect("id column present");
    assert_eq!(output, config.output_path());
    let written = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "PassengerId,Survived");
    assert_eq!(lines.len(), 4);

    let ids: Vec<&str> = lines[1..].iter().map(|l| l.split(',').next().unwrap()).collect();
    assert_eq!(ids, ["892", "893", "894"]);
    for (line, &label) in lines[1..].iter().zip(&summary.predictions) {
        assert!(label <= 1);
        assert_eq!(line.split(',').nth(1).unwrap(), label.to_string());
    }
}

#[test]
fn training_accuracy_is_in_sample() {
    let (_dir, config) = data_dir(TRAIN_CSV, Some(TEST_CSV));
    let summary = run(&config).unwrap();

    assert_abs_diff_eq!(summary.train_accuracy, 1.0);
}

#[test]
fn labeled_evaluation_reports_accuracy() {
    let (_dir, config) = data_dir(TRAIN_CSV, Some(LABELED_TEST_CSV));
    let summary = run(&config).unwrap();

    let accuracy = summary.outcome.accuracy().expect("labels present");
    assert!((0.0..=1.0).contains(&accuracy));
    assert_abs_diff_eq!(accuracy, 1.0);
}

#[test]
fn no_id_column_writes_nothing() {
    let test = "Sex,Age\nmale,30\nfemale,\n";
    let (dir, config) = data_dir(TRAIN_CSV, Some(test));
    let summary = run(&config).unwrap();

    assert_eq!(summary.predictions.len(), 2);
    assert!(summary.output_path.is_none());
    assert!(!dir.path().join("submission.csv").exists());
}

#[test]
fn ids_are_written_as_read() {
    let test = "PassengerId,Sex,Age\n9007199254740993,male,30\n00042,female,40\n,female,\n";
    let (_dir, config) = data_dir(TRAIN_CSV, Some(test));
    let summary = run(&config).unwrap();

    let written = fs::read_to_string(summary.output_path.unwrap()).unwrap();
    let ids: Vec<&str> = written
        .lines()
        .skip(1)
        .map(|l| l.split(',').next().unwrap())
        .collect();
    assert_eq!(ids, ["9007199254740993", "00042", ""]);
}

#[rstest]
#[case::unseen("other")]
#[case::missing("")]
fn unknown_category_still_predicts(#[case] sex: &str) {
    let test = format!("PassengerId,Sex,Age\n900,{sex},30\n901,female,40\n");
    let (_dir, config) = data_dir(TRAIN_CSV, Some(&test));
    let summary = run(&config).unwrap();
    assert_eq!(summary.predictions.len(), 2);
}

#[test]
fn runs_are_deterministic() {
    let (_dir, config) = data_dir(TRAIN_CSV, Some(TEST_CSV));
    let first = run(&config).unwrap();
    let second = run(&config).unwrap();
    assert_eq!(first, second);
}

// =============================================================================
// Pipeline state
// =============================================================================

#[test]
fn evaluation_uses_training_median_and_vocabulary() {
    let pipeline = SurvivalPipeline::from_spec(
        &FeatureSpec::default(),
        LogisticRegressionConfig::default(),
    );
    let train = table_from_csv("Survived,Sex,Age\n0,male,20\n1,female,30\n1,female,\n0,male,40\n");
    let fitted = pipeline.fit(&train).unwrap();
    assert_eq!(fitted.preprocessor().median("Age"), Some(30.0));

    let test = table_from_csv("Sex,Age\nother,\nmale,50\n");
    let features = fitted.preprocessor().transform(&test).unwrap();

    // [Age, Sex_female, Sex_male]
    assert_eq!(features.row(0).to_vec(), vec![30.0, 0.0, 0.0]);
    assert_eq!(features.row(1).to_vec(), vec![50.0, 0.0, 1.0]);
}
