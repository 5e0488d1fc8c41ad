//! Evaluation metrics for fitted models.
//!
//! Metrics operate on `(y_true, y_pred)` pairs produced by the caller, so
//! the same functions evaluate both regression kinds.

use crate::error::RegressionError;

// =============================================================================
// Mean Squared Error
// =============================================================================

/// Mean squared error: `(1/n)·Σ(yᵢ − ŷᵢ)²`. Lower is better.
///
/// # Errors
///
/// [`RegressionError::LengthMismatch`] if the inputs differ in length.
///
/// # Example
///
/// ```
/// use ridgeline::metrics::mean_squared_error;
///
/// let mse = mean_squared_error(&[1.0, 2.0], &[1.0, 2.0])?;
/// assert_eq!(mse, 0.0);
/// # Ok::<(), ridgeline::RegressionError>(())
/// ```
pub fn mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64, RegressionError> {
    check_lengths(y_true, y_pred)?;

    let n = y_true.len() as f64;
    let sum_squared_errors: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(y, y_hat)| (y - y_hat).powi(2))
        .sum();

    Ok(sum_squared_errors / n)
}

// =============================================================================
// R-squared
// =============================================================================

/// Coefficient of determination: `1 − SS_res/SS_tot`. Higher is better.
///
/// `SS_tot` is the total variance of `y_true` around its mean. When the
/// targets are constant, `SS_tot` is zero and the division is NOT guarded:
/// the result is `-inf` (residual error present) or NaN (zero residual),
/// per IEEE semantics. Callers evaluating against a constant target should
/// treat any non-finite value as "R² undefined".
///
/// # Errors
///
/// [`RegressionError::LengthMismatch`] if the inputs differ in length.
pub fn r_squared(y_true: &[f64], y_pred: &[f64]) -> Result<f64, RegressionError> {
    check_lengths(y_true, y_pred)?;

    let n = y_true.len() as f64;
    let mean_y: f64 = y_true.iter().sum::<f64>() / n;

    let ss_total: f64 = y_true.iter().map(|y| (y - mean_y).powi(2)).sum();
    let ss_residual: f64 = y_true
        .iter()
        .zip(y_pred)
        .map(|(y, y_hat)| (y - y_hat).powi(2))
        .sum();

    Ok(1.0 - ss_residual / ss_total)
}

fn check_lengths(y_true: &[f64], y_pred: &[f64]) -> Result<(), RegressionError> {
    if y_true.len() != y_pred.len() {
        return Err(RegressionError::LengthMismatch {
            expected: y_true.len(),
            got: y_pred.len(),
        });
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn mse_perfect_predictions() {
        let y = [1.0, 2.0, 3.0];
        assert_eq!(mean_squared_error(&y, &y).unwrap(), 0.0);
    }

    #[test]
    fn mse_known_value() {
        let y_true = [2.0, 4.0, 5.0, 4.0, 5.0];
        let y_pred = [2.8, 3.4, 4.0, 4.6, 5.2];

        let mse = mean_squared_error(&y_true, &y_pred).unwrap();
        assert_abs_diff_eq!(mse, 0.48, epsilon = 1e-9);
    }

    #[test]
    fn mse_length_mismatch() {
        let err = mean_squared_error(&[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(
            err,
            RegressionError::LengthMismatch { expected: 2, got: 1 }
        ));
    }

    #[test]
    fn r_squared_perfect_predictions() {
        let y = [1.0, 2.0, 3.0];
        assert_abs_diff_eq!(r_squared(&y, &y).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn r_squared_known_value() {
        let y_true = [2.0, 4.0, 5.0, 4.0, 5.0];
        let y_pred = [2.8, 3.4, 4.0, 4.6, 5.2];

        let r2 = r_squared(&y_true, &y_pred).unwrap();
        assert_abs_diff_eq!(r2, 0.6, epsilon = 1e-9);
    }

    #[test]
    fn r_squared_predicting_the_mean_scores_zero() {
        let y_true = [1.0, 2.0, 3.0];
        let y_pred = [2.0, 2.0, 2.0];

        assert_abs_diff_eq!(r_squared(&y_true, &y_pred).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn r_squared_length_mismatch() {
        let err = r_squared(&[1.0], &[1.0, 2.0]).unwrap_err();
        assert!(matches!(err, RegressionError::LengthMismatch { .. }));
    }

    #[test]
    fn r_squared_constant_targets_is_non_finite() {
        // Zero total variance: division by zero propagates, by design.
        let with_residual = r_squared(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(with_residual, f64::NEG_INFINITY);

        let without_residual = r_squared(&[3.0, 3.0, 3.0], &[3.0, 3.0, 3.0]).unwrap();
        assert!(without_residual.is_nan());
    }
}
