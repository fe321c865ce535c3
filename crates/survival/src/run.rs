//! The end-to-end run: load, explore, fit, evaluate, predict, write.
//!
//! Each stage logs through `tracing`. Any error aborts the run at the stage
//! that raised it; in particular the evaluation file is only looked for once
//! training has finished.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::config::RunConfig;
use crate::data::io::{ensure_file, load_table, write_predictions};
use crate::data::{render_grid, Table};
use crate::error::Result;
use crate::eval::{parse_labels, EvalOutcome, Evaluator};
use crate::model::LogisticRegressionConfig;
use crate::pipeline::{FittedPipeline, SurvivalPipeline};
use crate::training::{accuracy, FitReport};

/// Rows shown in the training preview.
const PREVIEW_ROWS: usize = 5;

/// Columns listed in the missing-value summary.
const MISSING_SUMMARY_LEN: usize = 10;

/// What a completed run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// In-sample accuracy on the training table.
    pub train_accuracy: f64,
    pub fit_report: FitReport,
    /// Accuracy on the evaluation table, or its positive rate when unlabeled.
    pub outcome: EvalOutcome,
    /// One label per evaluation row, in row order.
    pub predictions: Vec<u8>,
    /// Where predictions were written; `None` without an id column.
    pub output_path: Option<PathBuf>,
}

/// Run with the default model configuration.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    run_with_model(config, LogisticRegressionConfig::default())
}

/// Run with an explicit model configuration.
pub fn run_with_model(
    config: &RunConfig,
    model_config: LogisticRegressionConfig,
) -> Result<RunSummary> {
    let features = &config.features;

    // --- Training data ---
    let train_path = config.train_path();
    ensure_file(&train_path, &config.train_file)?;
    let train = load_table(&train_path, &config.train_file)?;
    explore(&train);

    let feature_columns = features.feature_columns();
    info!("Selected features: {:?}", feature_columns);
    info!("Target: {}", features.target);

    // --- Fit ---
    info!(
        "Fitting logistic regression (features: {})",
        feature_columns.join(", ")
    );
    let fitted = SurvivalPipeline::from_spec(features, model_config).fit(&train)?;
    info!("Model fit complete.");
    log_coefficients(&fitted);

    let train_labels = parse_labels(train.require_column("training data", &features.target)?)?;
    let train_predictions = fitted.predict(&train)?;
    let train_accuracy = accuracy(&train_labels, &train_predictions);
    info!("Training accuracy: {:.4}", train_accuracy);

    // --- Evaluation data ---
    let test_path = config.test_path();
    ensure_file(&test_path, &config.test_file)?;
    let test = load_table(&test_path, &config.test_file)?;
    test.require_columns(&config.test_file, &feature_columns)?;

    info!("Predicting on test set...");
    let predictions = fitted.predict(&test)?;

    let outcome = Evaluator::new(features.target.as_str()).evaluate(&test, &predictions)?;
    match &outcome {
        EvalOutcome::Labeled { accuracy } => info!("Test accuracy: {:.4}", accuracy),
        EvalOutcome::Unlabeled {
            positive_rate,
            head,
        } => {
            info!(
                "Test accuracy: N/A (no {} column in {}).",
                features.target, config.test_file
            );
            info!("Predicted survival rate on test: {:.3}", positive_rate);
            info!("First {} predictions: {}", head.len(), format_labels(head));
        }
    }

    // --- Output ---
    let output_path = match test.column(&features.id) {
        Some(id_column) => {
            let ids: Vec<&str> = (0..test.n_rows())
                .map(|row| id_column.raw(row).unwrap_or_default())
                .collect();
            let path = config.output_path();
            write_predictions(&path, &features.id, &ids, &features.target, &predictions)?;
            info!("Saved predictions to: {}", path.display());
            Some(path)
        }
        None => None,
    };

    info!("Done.");
    Ok(RunSummary {
        train_accuracy,
        fit_report: *fitted.model().fit_report(),
        outcome,
        predictions,
        output_path,
    })
}

/// Preview, column types and missing-value counts of the training table.
fn explore(table: &Table) {
    info!("Preview (first {} rows):\n{}", PREVIEW_ROWS, table.head(PREVIEW_ROWS));

    let dtypes = table
        .dtypes()
        .into_iter()
        .map(|(name, dtype)| vec![name.to_string(), dtype.to_string()]);
    info!("Column summary:\n{}", render_grid(&["column", "dtype"], dtypes));

    let missing = table
        .missing_counts()
        .into_iter()
        .take(MISSING_SUMMARY_LEN)
        .map(|(name, count)| vec![name.to_string(), count.to_string()]);
    info!(
        "Missing values (top few):\n{}",
        render_grid(&["column", "missing"], missing)
    );
}

fn log_coefficients(fitted: &FittedPipeline) {
    match fitted.coefficient_table() {
        Some(table) => {
            let rows = table
                .into_iter()
                .map(|(name, coef)| vec![name, format!("{coef:.6}")]);
            info!("Model coefficients:\n{}", render_grid(&["feature", "coef"], rows));
        }
        None => warn!("(Skipping coef printout: feature names do not match coefficients)"),
    }
}

fn format_labels(labels: &[u8]) -> String {
    let joined: Vec<String> = labels.iter().map(u8::to_string).collect();
    format!("[{}]", joined.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_render_as_bracketed_list() {
        assert_eq!(format_labels(&[1, 0, 1]), "[1,0,1]");
        assert_eq!(format_labels(&[]), "[]");
    }
}
