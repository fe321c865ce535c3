//! Tabular data handling.
//!
//! - [`Table`], [`Column`], [`ColumnType`]: in-memory columns with inferred types
//! - [`io`]: CSV loading and prediction-file writing

pub mod io;
mod table;

pub use table::{
    is_missing_token, render_grid, Column, ColumnData, ColumnType, Table, MISSING_TOKENS,
};
