//! Model representations.
//!
//! - [`LinearModel`]: coefficient vector with a trailing bias slot

mod linear;

pub use linear::LinearModel;
