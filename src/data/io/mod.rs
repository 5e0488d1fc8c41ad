//! Loading numeric tables from delimited files.
//!
//! The regression models never touch files themselves; they consume a
//! [`NumericTable`](crate::data::NumericTable) built here or assembled
//! directly by the caller.

mod csv;
mod error;

pub use self::csv::{read_csv, read_csv_from};
pub use self::error::TableLoadError;
