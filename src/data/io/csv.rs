//! CSV reader producing a [`NumericTable`].

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use super::TableLoadError;
use crate::data::NumericTable;

/// Load a numeric table from a CSV file.
///
/// The first row is taken as headers; every other field must parse as `f64`.
///
/// # Example
///
/// ```no_run
/// use ridgeline::data::io::read_csv;
///
/// let table = read_csv("data/house_prices.csv")?;
/// println!("{} rows, columns: {:?}", table.n_rows(), table.headers());
/// # Ok::<(), ridgeline::data::io::TableLoadError>(())
/// ```
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<NumericTable, TableLoadError> {
    let file = File::open(path)?;
    read_csv_from(file)
}

/// Load a numeric table from any reader yielding CSV with a header row.
///
/// A field that does not parse as a number is an error, not a silent zero:
/// teaching datasets are small enough that a typo should surface immediately.
pub fn read_csv_from<R: Read>(reader: R) -> Result<NumericTable, TableLoadError> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(str::to_owned)
        .collect();

    let mut rows = Vec::new();
    for (row_idx, record) in csv_reader.records().enumerate() {
        let record = record?;
        let mut row = Vec::with_capacity(headers.len());

        for (col_idx, field) in record.iter().enumerate() {
            let value = field.parse::<f64>().map_err(|_| TableLoadError::InvalidNumber {
                row: row_idx + 1,
                column: headers
                    .get(col_idx)
                    .cloned()
                    .unwrap_or_else(|| format!("#{col_idx}")),
                value: field.to_owned(),
            })?;
            row.push(value);
        }

        rows.push(row);
    }

    Ok(NumericTable::new(headers, rows)?)
}
