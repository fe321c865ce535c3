//! Column-wise preprocessing.
//!
//! Each transform has an unfitted form that learns from the training column
//! and a fitted form holding the learned state. Fitted state is immutable and
//! reused unchanged for every table transformed afterwards.
//!
//! - [`MedianImputer`] → [`FittedImputer`]: fills missing numeric cells with the training median
//! - [`OneHotEncoder`] → [`FittedEncoder`]: indicator block over the training vocabulary
//! - [`FeaturePreprocessor`] → [`FittedPreprocessor`]: both, concatenated side by side

mod impute;
mod onehot;
mod transformer;

pub use impute::{median, FittedImputer, MedianImputer};
pub use onehot::{FittedEncoder, OneHotEncoder};
pub use transformer::{FeaturePreprocessor, FittedPreprocessor};
