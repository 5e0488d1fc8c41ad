//! K-fold cross-validation over a numeric table.

use log::debug;

use crate::data::NumericTable;
use crate::error::RegressionError;
use crate::metrics::mean_squared_error;
use crate::regression::MultipleLinearRegression;

/// Mean held-out MSE over k contiguous folds.
///
/// Rows are partitioned in source order into `k` folds whose sizes differ by
/// at most one. For each fold the model is fitted on the remaining rows,
/// predictions are made for the held-out rows, and their mean squared error
/// is recorded; the arithmetic mean across folds is returned.
///
/// The model is left fitted on the final fold's training split.
///
/// # Errors
///
/// - [`RegressionError::InvalidFoldCount`] unless `2 <= k <= table.n_rows()`.
/// - Any error from column selection, `fit`, or `predict` for a fold.
///
/// # Example
///
/// ```
/// use ridgeline::data::NumericTable;
/// use ridgeline::model_selection::cross_validate;
/// use ridgeline::regression::MultipleLinearRegression;
///
/// let table = NumericTable::new(
///     vec!["x".into(), "y".into()],
///     (1..=8).map(|i| vec![i as f64, 2.0 * i as f64]).collect(),
/// )?;
///
/// let mut model = MultipleLinearRegression::default_config();
/// let mse = cross_validate(&mut model, &table, &["x"], "y", 4)?;
/// assert!(mse < 1e-9);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn cross_validate(
    model: &mut MultipleLinearRegression,
    table: &NumericTable,
    feature_columns: &[&str],
    target_column: &str,
    k: usize,
) -> Result<f64, RegressionError> {
    let n_rows = table.n_rows();
    if k < 2 || k > n_rows {
        return Err(RegressionError::InvalidFoldCount { k, rows: n_rows });
    }

    let (features, targets) = table.select(feature_columns, target_column)?;

    let mut total_mse = 0.0;
    for fold in 0..k {
        let start = fold * n_rows / k;
        let end = (fold + 1) * n_rows / k;

        let mut train_x = Vec::with_capacity(n_rows - (end - start));
        let mut train_y = Vec::with_capacity(n_rows - (end - start));
        for i in (0..start).chain(end..n_rows) {
            train_x.push(features[i].clone());
            train_y.push(targets[i]);
        }

        model.fit(&train_x, &train_y)?;
        let predictions = model.predict(&features[start..end])?;
        let fold_mse = mean_squared_error(&targets[start..end], &predictions)?;

        debug!(
            "fold {}/{k}: {} train rows, {} validation rows, mse = {fold_mse}",
            fold + 1,
            train_x.len(),
            end - start
        );
        total_mse += fold_mse;
    }

    Ok(total_mse / k as f64)
}
