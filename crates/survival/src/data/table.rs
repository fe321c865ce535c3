//! In-memory table with named, typed columns.
//!
//! Columns are stored column-major. Each column is either numeric
//! (`Option<f64>` cells) or text (`Option<String>` cells); `None` marks a
//! missing value. Types are inferred from the raw cells when a table is read
//! from CSV (see [`Column::from_cells`]).

use std::fmt;

use comfy_table::{CellAlignment, Table as Grid};

use crate::error::{Error, Result};

/// Cell spellings treated as missing values.
pub const MISSING_TOKENS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Returns true if a raw cell denotes a missing value.
#[inline]
pub fn is_missing_token(cell: &str) -> bool {
    MISSING_TOKENS.contains(&cell)
}

// =============================================================================
// ColumnType
// =============================================================================

/// Inferred column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Every present cell parses as an integer.
    Int,
    /// Every present cell parses as a float.
    Float,
    /// Anything else.
    Text,
}

impl ColumnType {
    pub fn as_str(self) -> &'static str {
        match self {
            ColumnType::Int => "int64",
            ColumnType::Float => "float64",
            ColumnType::Text => "text",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Column
// =============================================================================

/// Column storage.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnData {
    Numeric(Vec<Option<f64>>),
    Text(Vec<Option<String>>),
}

/// A named column of a [`Table`].
///
/// Besides the typed cells, a column keeps each present cell's source text,
/// so identifiers such as `00042` or integers beyond `f64` precision can be
/// written back unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    dtype: ColumnType,
    data: ColumnData,
    raw: Vec<Option<String>>,
}

impl Column {
    /// Build a column from raw text cells, inferring its type.
    ///
    /// Cells matching [`MISSING_TOKENS`] become missing. The column is
    /// [`ColumnType::Int`] if every present cell parses as `i64`,
    /// [`ColumnType::Float`] if every present cell parses as `f64` (including
    /// a column with no present cells), and [`ColumnType::Text`] otherwise.
    pub fn from_cells<S: AsRef<str>>(name: impl Into<String>, cells: &[S]) -> Self {
        let cells: Vec<Option<&str>> = cells
            .iter()
            .map(|c| {
                let c = c.as_ref();
                (!is_missing_token(c)).then_some(c)
            })
            .collect();

        let present = || cells.iter().flatten();
        let dtype = if present().all(|c| c.parse::<i64>().is_ok()) && present().next().is_some() {
            ColumnType::Int
        } else if present().all(|c| c.parse::<f64>().is_ok()) {
            ColumnType::Float
        } else {
            ColumnType::Text
        };

        let data = match dtype {
            ColumnType::Text => ColumnData::Text(
                cells.iter().map(|c| c.map(str::to_string)).collect(),
            ),
            _ => ColumnData::Numeric(
                cells
                    .iter()
                    .map(|c| c.and_then(|v| v.parse::<f64>().ok()))
                    .collect(),
            ),
        };

        Self {
            name: name.into(),
            dtype,
            data,
            raw: cells.iter().map(|c| c.map(str::to_string)).collect(),
        }
    }

    /// Build a float column from numeric cells.
    pub fn numeric(name: impl Into<String>, values: Vec<Option<f64>>) -> Self {
        let raw = values.iter().map(|v| v.map(|x| x.to_string())).collect();
        Self {
            name: name.into(),
            dtype: ColumnType::Float,
            data: ColumnData::Numeric(values),
            raw,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn dtype(&self) -> ColumnType {
        self.dtype
    }

    #[inline]
    pub fn data(&self) -> &ColumnData {
        &self.data
    }

    pub fn len(&self) -> usize {
        match &self.data {
            ColumnData::Numeric(v) => v.len(),
            ColumnData::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_missing(&self, row: usize) -> bool {
        match &self.data {
            ColumnData::Numeric(v) => v[row].is_none(),
            ColumnData::Text(v) => v[row].is_none(),
        }
    }

    /// Number of missing cells.
    pub fn n_missing(&self) -> usize {
        (0..self.len()).filter(|&row| self.is_missing(row)).count()
    }

    /// Numeric cells, or `None` for a text column.
    pub fn as_numeric(&self) -> Option<&[Option<f64>]> {
        match &self.data {
            ColumnData::Numeric(v) => Some(v),
            ColumnData::Text(_) => None,
        }
    }

    /// Numeric cells, or a [`Error::ColumnType`] for a text column.
    pub fn expect_numeric(&self) -> Result<&[Option<f64>]> {
        self.as_numeric().ok_or_else(|| Error::ColumnType {
            column: self.name.clone(),
            expected: "numeric",
            got: self.dtype.as_str(),
        })
    }

    /// Cell rendered as text, `None` when missing.
    ///
    /// Integer columns render without a fractional part, so the category
    /// `3` of an `Int` column reads as `"3"` rather than `"3.0"`.
    pub fn value_str(&self, row: usize) -> Option<String> {
        match &self.data {
            ColumnData::Numeric(v) => v[row].map(|x| match self.dtype {
                ColumnType::Int => format!("{}", x as i64),
                _ => format!("{x}"),
            }),
            ColumnData::Text(v) => v[row].clone(),
        }
    }

    /// Cell exactly as it was read, `None` when missing.
    pub fn raw(&self, row: usize) -> Option<&str> {
        self.raw[row].as_deref()
    }

    /// Cell rendered for display; missing cells render as `NaN`.
    pub fn display(&self, row: usize) -> String {
        self.value_str(row).unwrap_or_else(|| "NaN".to_string())
    }
}

// =============================================================================
// Table
// =============================================================================

/// A set of equally long named columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    n_rows: usize,
}

impl Table {
    /// Build a table from columns of equal length.
    pub fn from_columns(columns: Vec<Column>) -> Result<Self> {
        let n_rows = columns.first().map_or(0, Column::len);
        if let Some(bad) = columns.iter().find(|c| c.len() != n_rows) {
            return Err(Error::ShapeMismatch(format!(
                "column {} has {} rows, expected {}",
                bad.name(),
                bad.len(),
                n_rows
            )));
        }
        Ok(Self { columns, n_rows })
    }

    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// `(rows, columns)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::name)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Column by name, or [`Error::MissingColumns`] naming `table`.
    pub fn require_column(&self, table: &str, name: &str) -> Result<&Column> {
        self.column(name).ok_or_else(|| Error::MissingColumns {
            table: table.to_string(),
            columns: vec![name.to_string()],
        })
    }

    /// Check that every name in `names` is present.
    ///
    /// The error lists all absent columns, in the order they were requested.
    pub fn require_columns<S: AsRef<str>>(&self, table: &str, names: &[S]) -> Result<()> {
        let missing: Vec<String> = names
            .iter()
            .map(AsRef::as_ref)
            .filter(|n| !self.has_column(n))
            .map(str::to_string)
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingColumns {
                table: table.to_string(),
                columns: missing,
            })
        }
    }

    /// Column types in column order.
    pub fn dtypes(&self) -> Vec<(&str, ColumnType)> {
        self.columns.iter().map(|c| (c.name(), c.dtype())).collect()
    }

    /// Missing-value counts, largest first; ties keep column order.
    pub fn missing_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = self
            .columns
            .iter()
            .map(|c| (c.name(), c.n_missing()))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    /// Render the first `n` rows as a text grid.
    pub fn head(&self, n: usize) -> String {
        let header: Vec<&str> = self.column_names().collect();
        let rows = (0..n.min(self.n_rows))
            .map(|row| self.columns.iter().map(|c| c.display(row)).collect());
        render_grid(&header, rows)
    }
}

/// Render rows under a header with right-aligned cells.
pub fn render_grid<I>(header: &[&str], rows: I) -> String
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut grid = Grid::new();
    grid.load_preset("||--+-++|    ++++++");
    grid.set_header(header.to_vec());
    for row in rows {
        grid.add_row(row);
    }
    grid.column_iter_mut().for_each(|c| {
        c.set_cell_alignment(CellAlignment::Right);
    });
    grid.to_string()
}

// =============================================================================
// Tests
// =============================================================================
