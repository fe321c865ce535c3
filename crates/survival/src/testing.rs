//! Fixtures shared by unit and integration tests.
//!
//! Small CSV texts in the shape of the passenger data plus helpers that
//! write them into a data directory or parse them into a [`Table`].
//! Helpers panic on failure.

use std::fs;
use std::path::{Path, PathBuf};

use crate::data::io::read_table;
use crate::data::Table;

/// Four labeled passengers; one `Age` is missing.
pub const TRAIN_CSV: &str = "\
PassengerId,Survived,Pclass,Sex,Age
1,0,3,male,22
2,1,1,female,38
3,1,3,female,
4,0,1,male,35
";

/// Evaluation rows without labels; one `Age` is missing.
pub const TEST_CSV: &str = "\
PassengerId,Pclass,Sex,Age
892,3,male,34.5
893,3,female,47
894,2,male,
";

/// Evaluation rows with labels.
pub const LABELED_TEST_CSV: &str = "\
PassengerId,Survived,Sex,Age
892,0,male,22
893,1,female,38
894,0,male,30
";

/// Write `contents` to `dir/name` and return the path.
pub fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents)
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", path.display()));
    path
}

/// Parse CSV text into a [`Table`].
pub fn table_from_csv(contents: &str) -> Table {
    read_table(contents.as_bytes()).unwrap_or_else(|e| panic!("invalid fixture CSV: {e}"))
}

/// Write `train.csv` and, when given, `test.csv` into `dir`.
pub fn write_data_dir(dir: &Path, train: &str, test: Option<&str>) {
    write_csv(dir, "train.csv", train);
    if let Some(test) = test {
        write_csv(dir, "test.csv", test);
    }
}
