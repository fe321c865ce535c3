//! Runs that must stop with an error, and what they leave behind.

use survival::testing::{write_csv, write_data_dir, TEST_CSV, TRAIN_CSV};
use survival::{run, run_with_model, ConvergencePolicy, Error, LogisticRegressionConfig, RunConfig};

#[test]
fn missing_training_file_stops_before_evaluation_file() {
    let dir = tempfile::tempdir().unwrap();
    // Unreadable as a table; loading it would surface a different error.
    write_csv(dir.path(), "test.csv", "a,b\n1,2,3\n");

    let err = run(&RunConfig::with_data_dir(dir.path())).unwrap_err();
    match err {
        Error::MissingFile { name, path } => {
            assert_eq!(name, "train.csv");
            assert_eq!(path, dir.path().join("train.csv"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_evaluation_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    write_data_dir(dir.path(), TRAIN_CSV, None);

    let err = run(&RunConfig::with_data_dir(dir.path())).unwrap_err();
    assert!(matches!(err, Error::MissingFile { ref name, .. } if name == "test.csv"));
    assert!(!dir.path().join("submission.csv").exists());
}

#[test]
fn evaluation_table_without_feature_column() {
    let dir = tempfile::tempdir().unwrap();
    write_data_dir(dir.path(), TRAIN_CSV, Some("PassengerId,Sex\n892,male\n"));

    let err = run(&RunConfig::with_data_dir(dir.path())).unwrap_err();
    match err {
        Error::MissingColumns { table, columns } => {
            assert_eq!(table, "test.csv");
            assert_eq!(columns, vec!["Age"]);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!dir.path().join("submission.csv").exists());
}

#[test]
fn training_table_without_target() {
    let dir = tempfile::tempdir().unwrap();
    write_data_dir(dir.path(), "Sex,Age\nmale,22\nfemale,38\n", Some(TEST_CSV));

    let err = run(&RunConfig::with_data_dir(dir.path())).unwrap_err();
    assert!(matches!(err, Error::MissingColumns { .. }));
}

#[test]
fn non_binary_training_labels() {
    let dir = tempfile::tempdir().unwrap();
    let train = "Survived,Sex,Age\n0,male,22\n2,female,38\n";
    write_data_dir(dir.path(), train, Some(TEST_CSV));

    let err = run(&RunConfig::with_data_dir(dir.path())).unwrap_err();
    assert!(matches!(err, Error::InvalidLabel { row: 1, .. }));
}

#[test]
fn strict_convergence_policy_fails_early_fit() {
    let dir = tempfile::tempdir().unwrap();
    write_data_dir(dir.path(), TRAIN_CSV, Some(TEST_CSV));
    let model = LogisticRegressionConfig::builder()
        .max_iter(1)
        .convergence(ConvergencePolicy::Fail)
        .build()
        .unwrap();

    let err = run_with_model(&RunConfig::with_data_dir(dir.path()), model).unwrap_err();
    assert!(matches!(err, Error::NotConverged { iterations: 1, .. }));
    assert!(!dir.path().join("submission.csv").exists());
}
