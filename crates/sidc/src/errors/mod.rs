//! Error types and failure classification for the SIDC crate.
//!
//! This module provides:
//! - [`SidcError`]: The main error enum for all lookup and load operations
//! - [`FailureClass`]: Classification for deciding how a failure degrades

mod class;

pub use class::FailureClass;

use std::path::PathBuf;

use thiserror::Error;

/// Type alias for Result using [`SidcError`].
pub type Result<T> = std::result::Result<T, SidcError>;

/// Errors that can occur while loading tables or resolving codes.
///
/// Each variant is classified into a [`FailureClass`] via the
/// [`class`](Self::class) method.
#[derive(Error, Debug)]
pub enum SidcError {
    /// The code did not have one of the accepted lengths.
    #[error("Bad SIDC length: expected {expected} characters, got {actual}")]
    BadLength {
        /// The accepted length(s), for example "8 or 20"
        expected: &'static str,
        /// The length actually received
        actual: usize,
    },

    /// The code had the right length but is not a usable code
    /// (symbol set "00", non-ASCII characters).
    #[error("Invalid SIDC code: {0}")]
    InvalidCode(String),

    /// No row in the named table matched the key.
    #[error("Not found in {table}: {key}")]
    NotFound {
        /// Which table was searched
        table: &'static str,
        /// The key that was searched for
        key: String,
    },

    /// The resolver was constructed without its lookup tables.
    #[error("Lookup tables not initialized")]
    Uninitialized,

    /// A table file could not be opened or parsed.
    #[error("Could not read table {path}: {source}")]
    TableRead {
        /// Path of the table file
        path: PathBuf,
        /// Underlying CSV/IO error
        #[source]
        source: csv::Error,
    },

    /// A table file parsed but contained no data rows.
    #[error("Table {path} contains no rows")]
    EmptyTable {
        /// Path of the table file
        path: PathBuf,
    },
}

impl SidcError {
    /// Returns the failure classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use milsym_sidc::errors::{FailureClass, SidcError};
    ///
    /// let error = SidcError::BadLength { expected: "8 or 20", actual: 7 };
    /// assert_eq!(error.class(), FailureClass::Malformed);
    ///
    /// let error = SidcError::NotFound { table: "mapping", key: "S*GPUCI---".into() };
    /// assert_eq!(error.class(), FailureClass::NotFound);
    /// ```
    pub fn class(&self) -> FailureClass {
        match self {
            Self::NotFound { .. } => FailureClass::NotFound,

            Self::BadLength { .. } | Self::InvalidCode(_) => FailureClass::Malformed,

            Self::Uninitialized | Self::TableRead { .. } | Self::EmptyTable { .. } => {
                FailureClass::Fatal
            }
        }
    }

    pub(crate) fn not_found(table: &'static str, key: impl Into<String>) -> Self {
        Self::NotFound {
            table,
            key: key.into(),
        }
    }
}
