//! CSV input and prediction output.
//!
//! - [`load_table`] / [`read_table`]: header-keyed CSV into a [`Table`](crate::data::Table)
//! - [`ensure_file`]: existence check for required inputs
//! - [`write_predictions`]: `<id>,<target>` prediction file

mod delimited;

pub use delimited::{ensure_file, load_table, read_table, write_predictions};
