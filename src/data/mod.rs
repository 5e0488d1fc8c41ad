//! Tabular data: named-column numeric tables and the CSV loader.

pub mod io;
mod table;

pub use table::{NumericTable, TableError};
