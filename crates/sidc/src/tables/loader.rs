//! CSV loading shared by the lookup tables.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use serde::de::DeserializeOwned;

use crate::errors::{Result, SidcError};

/// File names of the two lookup tables.
pub const MAPPING_TABLE_FILE: &str = "LegacyMappingTableCtoD.csv";
pub const SYMBOL_DICTIONARY_FILE: &str = "mil2525c.csv";

/// Locations of the lookup table files.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TablePaths {
    pub mapping_table: PathBuf,
    pub symbol_dictionary: PathBuf,
}

impl TablePaths {
    /// Standard file names inside a data directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            mapping_table: dir.join(MAPPING_TABLE_FILE),
            symbol_dictionary: dir.join(SYMBOL_DICTIONARY_FILE),
        }
    }
}

/// Read every data row of a headed CSV file.
pub(crate) fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    log::info!("Loading table: {}", path.display());
    let file = File::open(path).map_err(|e| SidcError::TableRead {
        path: path.to_path_buf(),
        source: csv::Error::from(e),
    })?;
    read_rows_from(file, path)
}

/// Read every data row from any reader; `origin` names the source in errors.
///
/// Rows that fail to deserialize are skipped with a warning. Failing to read
/// the header, or ending up with no rows at all, is an error.
pub(crate) fn read_rows_from<T: DeserializeOwned, R: Read>(
    reader: R,
    origin: &Path,
) -> Result<Vec<T>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    csv_reader.headers().map_err(|e| SidcError::TableRead {
        path: origin.to_path_buf(),
        source: e,
    })?;

    let mut rows = Vec::new();
    for (index, record) in csv_reader.deserialize::<T>().enumerate() {
        match record {
            Ok(row) => rows.push(row),
            Err(e) => {
                // Data rows are numbered from 1, after the header
                log::warn!(
                    "Skipping row {} of {}: {}",
                    index + 1,
                    origin.display(),
                    e
                );
            }
        }
    }

    if rows.is_empty() {
        return Err(SidcError::EmptyTable {
            path: origin.to_path_buf(),
        });
    }

    log::debug!("Loaded {} rows from {}", rows.len(), origin.display());
    Ok(rows)
}

/// Zero-pad an all-digit value to `width`.
///
/// Spreadsheet exports drop leading zeros ("1" for symbol set "01").
/// Empty and non-numeric values are returned unchanged.
pub(crate) fn pad_numeric(value: &str, width: usize) -> String {
    if !value.is_empty() && value.len() < width && value.bytes().all(|b| b.is_ascii_digit()) {
        format!("{:0>width$}", value, width = width)
    } else {
        value.to_string()
    }
}
