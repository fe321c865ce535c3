//! Training infrastructure for the logistic regression.
//!
//! - [`Gradients`]: per-sample gradient/hessian pairs
//! - [`LogisticLoss`]: binary cross-entropy objective on log-odds margins
//! - [`updater`]: coordinate-descent Newton updates with L1/L2 penalties
//! - [`LogisticRegressionTrainer`], [`TrainerParams`], [`FitReport`]: the fit loop
//! - [`ConvergencePolicy`]: what to do when `max_iter` is reached first
//! - [`accuracy`]: share of matching hard labels
//! - [`TrainingLogger`], [`Verbosity`]: structured logging

mod gradients;
mod logger;
mod metrics;
mod objective;
mod trainer;
pub mod updater;

pub use gradients::{Gradients, GradsTuple};
pub use logger::{TrainingLogger, Verbosity};
pub use metrics::accuracy;
pub use objective::{sigmoid, LogisticLoss};
pub use trainer::{ConvergencePolicy, FitReport, LogisticRegressionTrainer, TrainerParams};
pub use updater::UpdateConfig;
