//! In-memory numeric table with named columns.

/// Table construction and column-selection errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TableError {
    #[error("row {row} has {got} values, expected {expected} to match the headers")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("column not found: {0}")]
    ColumnNotFound(String),
}

/// Ordered rows of `f64` values with a parallel list of column names.
///
/// Rows are rectangular: every row has exactly one value per header, in
/// header order. The regression models read tables immutably; ownership
/// stays with the caller.
///
/// # Example
///
/// ```
/// use ridgeline::data::NumericTable;
///
/// let table = NumericTable::new(
///     vec!["Size".into(), "Price".into()],
///     vec![vec![1400.0, 245.0], vec![1600.0, 312.0]],
/// )?;
///
/// assert_eq!(table.n_rows(), 2);
/// assert_eq!(table.column("Price")?, vec![245.0, 312.0]);
/// # Ok::<(), ridgeline::data::TableError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NumericTable {
    headers: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl NumericTable {
    /// Create a table from headers and rows.
    ///
    /// Every row must have exactly `headers.len()` values.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, TableError> {
        let expected = headers.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(TableError::RaggedRow {
                    row: i,
                    expected,
                    got: row.len(),
                });
            }
        }
        Ok(Self { headers, rows })
    }

    /// Column names, in column order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Rows, in source order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn n_cols(&self) -> usize {
        self.headers.len()
    }

    /// Positional index of a named column.
    pub fn column_index(&self, name: &str) -> Result<usize, TableError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| TableError::ColumnNotFound(name.to_owned()))
    }

    /// Values of a named column, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<f64>, TableError> {
        let idx = self.column_index(name)?;
        Ok(self.rows.iter().map(|row| row[idx]).collect())
    }

    /// Extract feature rows and the target vector by column name.
    ///
    /// Feature values appear in each output row in `feature_columns` order.
    /// This is the boundary both table-based `fit` entry points go through.
    pub fn select(
        &self,
        feature_columns: &[&str],
        target_column: &str,
    ) -> Result<(Vec<Vec<f64>>, Vec<f64>), TableError> {
        let feature_indices = feature_columns
            .iter()
            .map(|name| self.column_index(name))
            .collect::<Result<Vec<_>, _>>()?;
        let target_index = self.column_index(target_column)?;

        let features = self
            .rows
            .iter()
            .map(|row| feature_indices.iter().map(|&i| row[i]).collect())
            .collect();
        let targets = self.rows.iter().map(|row| row[target_index]).collect();

        Ok((features, targets))
    }
}
