//! Simple (single-predictor) linear regression.

use log::debug;

use crate::data::NumericTable;
use crate::error::RegressionError;

/// Fitted line parameters. Set atomically by a successful `fit`.
#[derive(Debug, Clone, Copy)]
struct Line {
    slope: f64,
    intercept: f64,
}

/// Least-squares line fit for a single predictor.
///
/// Computes the closed-form slope and intercept:
///
/// ```text
/// slope     = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
/// intercept = (Σy − slope·Σx) / n
/// ```
///
/// # Example
///
/// ```
/// use ridgeline::regression::SimpleLinearRegression;
///
/// let mut model = SimpleLinearRegression::new();
/// model.fit(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0])?;
///
/// assert_eq!(model.predict(&[4.0])?, vec![8.0]);
/// # Ok::<(), ridgeline::RegressionError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimpleLinearRegression {
    line: Option<Line>,
}

impl SimpleLinearRegression {
    /// Create an unfitted model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fitted slope, if the model has been fitted.
    pub fn slope(&self) -> Option<f64> {
        self.line.map(|l| l.slope)
    }

    /// Fitted intercept, if the model has been fitted.
    pub fn intercept(&self) -> Option<f64> {
        self.line.map(|l| l.intercept)
    }

    /// Fit the least-squares line through `(x[i], y[i])`.
    ///
    /// # Errors
    ///
    /// - [`RegressionError::LengthMismatch`] if `x` and `y` differ in length.
    /// - [`RegressionError::TooFewSamples`] with fewer than two samples.
    /// - [`RegressionError::ConstantFeature`] if all `x` values are equal,
    ///   which makes the slope denominator zero.
    pub fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<(), RegressionError> {
        if x.len() != y.len() {
            return Err(RegressionError::LengthMismatch {
                expected: x.len(),
                got: y.len(),
            });
        }
        if x.len() < 2 {
            return Err(RegressionError::TooFewSamples {
                needed: 2,
                got: x.len(),
            });
        }

        let n = x.len() as f64;
        let sum_x: f64 = x.iter().sum();
        let sum_y: f64 = y.iter().sum();
        let sum_x_squared: f64 = x.iter().map(|v| v * v).sum();
        let sum_xy: f64 = x.iter().zip(y).map(|(a, b)| a * b).sum();

        let denominator = n * sum_x_squared - sum_x * sum_x;
        if denominator == 0.0 {
            return Err(RegressionError::ConstantFeature);
        }

        let slope = (n * sum_xy - sum_x * sum_y) / denominator;
        let intercept = (sum_y - slope * sum_x) / n;

        debug!("fitted line over {} samples: slope = {slope}, intercept = {intercept}", x.len());
        self.line = Some(Line { slope, intercept });
        Ok(())
    }

    /// Fit from a table, resolving columns by name.
    pub fn fit_table(
        &mut self,
        table: &NumericTable,
        feature_column: &str,
        target_column: &str,
    ) -> Result<(), RegressionError> {
        let x = table.column(feature_column)?;
        let y = table.column(target_column)?;
        self.fit(&x, &y)
    }

    /// Predict `slope·x + intercept` for each input, preserving order.
    ///
    /// # Errors
    ///
    /// [`RegressionError::NotFitted`] before any successful [`fit`](Self::fit).
    pub fn predict(&self, xs: &[f64]) -> Result<Vec<f64>, RegressionError> {
        let line = self.line.ok_or(RegressionError::NotFitted)?;
        Ok(xs.iter().map(|x| line.slope * x + line.intercept).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn fits_exact_line() {
        let mut model = SimpleLinearRegression::new();
        model.fit(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();

        assert_eq!(model.predict(&[4.0]).unwrap(), vec![8.0]);
    }

    #[test]
    fn fits_large_dataset() {
        // y = 3x + 5 over x = 1..=100
        let x: Vec<f64> = (1..=100).map(|v| v as f64).collect();
        let y: Vec<f64> = x.iter().map(|v| 3.0 * v + 5.0).collect();

        let mut model = SimpleLinearRegression::new();
        model.fit(&x, &y).unwrap();

        let prediction = model.predict(&[150.0]).unwrap();
        assert_abs_diff_eq!(prediction[0], 455.0, epsilon = 1e-9);
    }

    #[test]
    fn handles_negative_values() {
        // y = 2x - 3
        let x = [-10.0, -5.0, 0.0, 5.0, 10.0];
        let y: Vec<f64> = x.iter().map(|v| 2.0 * v - 3.0).collect();

        let mut model = SimpleLinearRegression::new();
        model.fit(&x, &y).unwrap();

        let prediction = model.predict(&[15.0]).unwrap();
        assert_abs_diff_eq!(prediction[0], 27.0, epsilon = 1e-9);
    }

    #[test]
    fn noisy_fit_matches_reference_line() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 5.0, 4.0, 5.0];

        let mut model = SimpleLinearRegression::new();
        model.fit(&x, &y).unwrap();

        assert_abs_diff_eq!(model.slope().unwrap(), 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(model.intercept().unwrap(), 2.2, epsilon = 1e-12);

        let expected = [2.8, 3.4, 4.0, 4.6, 5.2];
        let predictions = model.predict(&x).unwrap();
        for (pred, want) in predictions.iter().zip(expected) {
            assert_abs_diff_eq!(*pred, want, epsilon = 1e-9);
        }
    }

    #[test]
    fn predict_preserves_length_and_order() {
        let mut model = SimpleLinearRegression::new();
        model.fit(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();

        let xs = [3.0, 1.0, 2.0];
        let predictions = model.predict(&xs).unwrap();

        assert_eq!(predictions, vec![6.0, 2.0, 4.0]);
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let mut model = SimpleLinearRegression::new();
        let err = model.fit(&[1.0, 2.0], &[1.0]).unwrap_err();

        assert!(matches!(
            err,
            RegressionError::LengthMismatch { expected: 2, got: 1 }
        ));
    }

    #[test]
    fn single_sample_is_rejected() {
        let mut model = SimpleLinearRegression::new();
        let err = model.fit(&[1.0], &[2.0]).unwrap_err();

        assert!(matches!(err, RegressionError::TooFewSamples { .. }));
    }

    #[test]
    fn constant_x_is_rejected() {
        let mut model = SimpleLinearRegression::new();
        let err = model.fit(&[3.0, 3.0, 3.0], &[1.0, 2.0, 3.0]).unwrap_err();

        assert!(matches!(err, RegressionError::ConstantFeature));
    }

    #[test]
    fn predict_before_fit_is_rejected() {
        let model = SimpleLinearRegression::new();
        assert!(matches!(
            model.predict(&[1.0]),
            Err(RegressionError::NotFitted)
        ));
    }

    #[test]
    fn failed_refit_preserves_previous_state() {
        let mut model = SimpleLinearRegression::new();
        model.fit(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]).unwrap();

        assert!(model.fit(&[5.0, 5.0], &[1.0, 2.0]).is_err());

        // Old line still answers.
        assert_eq!(model.predict(&[4.0]).unwrap(), vec![8.0]);
    }

    #[test]
    fn fit_from_table() {
        let table = NumericTable::new(
            vec!["Size".into(), "Price".into()],
            vec![
                vec![1.0, 2.0],
                vec![2.0, 4.0],
                vec![3.0, 6.0],
            ],
        )
        .unwrap();

        let mut model = SimpleLinearRegression::new();
        model.fit_table(&table, "Size", "Price").unwrap();

        assert_eq!(model.predict(&[4.0]).unwrap(), vec![8.0]);
    }

    #[test]
    fn fit_from_table_missing_column() {
        let table = NumericTable::new(vec!["a".into()], vec![vec![1.0]]).unwrap();

        let mut model = SimpleLinearRegression::new();
        let err = model.fit_table(&table, "a", "b").unwrap_err();

        assert!(matches!(err, RegressionError::Table(_)));
    }
}
