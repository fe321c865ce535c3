//! Training progress logging.
//!
//! [`TrainingLogger`] emits `tracing` events gated by a [`Verbosity`] level,
//! so a silent trainer stays silent regardless of the subscriber filter.

use tracing::{debug, info, warn};

/// How much the trainer reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    /// No output.
    Silent,
    /// Non-convergence warnings only.
    #[default]
    Warning,
    /// Start/finish summaries.
    Info,
    /// Per-iteration updates and loss.
    Debug,
}

/// Structured logger for one training run.
#[derive(Debug, Clone)]
pub struct TrainingLogger {
    verbosity: Verbosity,
}

impl TrainingLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    #[inline]
    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn start_training(&self, n_samples: usize, n_features: usize, max_iter: usize) {
        if self.verbosity >= Verbosity::Info {
            info!(n_samples, n_features, max_iter, "starting coordinate descent");
        }
    }

    /// Per-iteration record. `loss` is only evaluated at debug verbosity.
    pub fn log_iteration(&self, iteration: usize, max_delta: f64, loss: impl FnOnce() -> f64) {
        if self.verbosity >= Verbosity::Debug {
            debug!(iteration, max_delta, loss = loss(), "coordinate descent pass");
        }
    }

    pub fn log_not_converged(&self, max_iter: usize, max_delta: f64) {
        if self.verbosity >= Verbosity::Warning {
            warn!(
                max_iter,
                max_delta,
                "optimizer did not converge; returning the last parameters"
            );
        }
    }

    pub fn finish_training(&self, iterations: usize, converged: bool, loss: f64) {
        if self.verbosity >= Verbosity::Info {
            info!(iterations, converged, loss, "training finished");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_is_ordered() {
        assert!(Verbosity::Silent < Verbosity::Warning);
        assert!(Verbosity::Warning < Verbosity::Info);
        assert!(Verbosity::Info < Verbosity::Debug);
        assert_eq!(Verbosity::default(), Verbosity::Warning);
    }

    #[test]
    fn loss_closure_skipped_below_debug() {
        let logger = TrainingLogger::new(Verbosity::Info);
        logger.log_iteration(1, 0.1, || panic!("loss evaluated at info verbosity"));
        assert_eq!(logger.verbosity(), Verbosity::Info);
    }
}
