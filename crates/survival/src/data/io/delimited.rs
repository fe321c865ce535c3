//! Delimited text reading and writing via the `csv` crate.

use std::io;
use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};
use tracing::info;

use crate::data::{Column, Table};
use crate::error::{Error, Result};

/// Fail with [`Error::MissingFile`] if `path` does not exist.
pub fn ensure_file(path: &Path, name: &str) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(Error::MissingFile {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
    }
}

/// Load a CSV file with a header row into a [`Table`].
///
/// `name` labels the progress messages (e.g. `train.csv`).
pub fn load_table(path: &Path, name: &str) -> Result<Table> {
    info!("Loading {} from: {}", name, path.display());
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_path(path)?;
    let table = read_records(reader)?;
    info!("{} shape: {:?}", name, table.shape());
    Ok(table)
}

/// Read CSV text with a header row into a [`Table`].
pub fn read_table<R: io::Read>(source: R) -> Result<Table> {
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(source);
    read_records(reader)
}

fn read_records<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Table> {
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];

    for record in reader.records() {
        let record = record?;
        for (column, field) in cells.iter_mut().zip(record.iter()) {
            column.push(field.to_string());
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, cells)| Column::from_cells(name, &cells))
        .collect();
    Table::from_columns(columns)
}

/// Write `<id_header>,<target_header>` followed by one row per prediction.
///
/// Rows keep the order of `ids`. Returns the number of data rows written.
pub fn write_predictions<S: AsRef<str>>(
    path: &Path,
    id_header: &str,
    ids: &[S],
    target_header: &str,
    labels: &[u8],
) -> Result<usize> {
    if ids.len() != labels.len() {
        return Err(Error::ShapeMismatch(format!(
            "{} identifiers but {} predictions",
            ids.len(),
            labels.len()
        )));
    }

    let mut writer = WriterBuilder::new().from_path(path)?;
    writer.write_record([id_header, target_header])?;
    for (id, label) in ids.iter().zip(labels) {
        writer.write_record([id.as_ref(), label.to_string().as_str()])?;
    }
    writer.flush()?;
    Ok(ids.len())
}

// =============================================================================
// Tests
// =============================================================================
