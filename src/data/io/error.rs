//! Shared error type for table loading.

use std::io;

use crate::data::TableError;

/// Errors that can occur when loading a table from a file.
#[derive(Debug, thiserror::Error)]
pub enum TableLoadError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A field could not be parsed as a number.
    ///
    /// `row` is the 1-based data row (the header row is not counted).
    #[error("row {row}, column {column}: cannot parse {value:?} as a number")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error(transparent)]
    Table(#[from] TableError),
}
