//! Multiple (N-predictor) linear regression via the normal equation.

use log::debug;

use crate::data::NumericTable;
use crate::error::RegressionError;
use crate::linalg::DenseMatrix;

/// Configuration for the normal-equation solver.
#[derive(Debug, Clone, Copy)]
pub struct NormalEquationConfig {
    /// Ridge regularization strength λ (must be ≥ 0).
    ///
    /// Added to every diagonal term of `XᵀX`, including the intercept's.
    /// Textbook ridge regression leaves the intercept unpenalized; the
    /// uniform penalty is kept here because it is the documented reference
    /// computation.
    pub regularization: f64,

    /// Pivot tolerance for deciding when `XᵀX + λI` is singular.
    pub stabilization: f64,
}

impl Default for NormalEquationConfig {
    fn default() -> Self {
        Self {
            regularization: 0.0,
            stabilization: 1e-8,
        }
    }
}

/// Fitted coefficients. Set atomically by a successful `fit`.
#[derive(Debug, Clone)]
struct Coefficients {
    intercept: f64,
    slopes: Vec<f64>,
}

/// Least-squares fit over N predictors, with optional ridge regularization.
///
/// Solves `θ = (XᵀX + λI)⁻¹ Xᵀy` over the design matrix (features with a
/// prepended ones column). With λ = 0 this is plain OLS; raising λ trades
/// bias for conditioning and shrinks coefficients toward zero, which is the
/// remedy when collinear features make the fit fail as singular.
///
/// Arithmetic is IEEE `f64` throughout: non-finite inputs propagate into
/// non-finite outputs rather than erroring.
///
/// # Example
///
/// ```
/// use ridgeline::regression::{MultipleLinearRegression, NormalEquationConfig};
///
/// let x = vec![
///     vec![1.0, 0.0],
///     vec![0.0, 1.0],
///     vec![1.0, 1.0],
///     vec![2.0, 1.0],
/// ];
/// // y = 3 + 2·x1 − x2
/// let y = vec![5.0, 2.0, 4.0, 6.0];
///
/// let mut model = MultipleLinearRegression::new(NormalEquationConfig::default());
/// model.fit(&x, &y)?;
///
/// let predictions = model.predict(&[vec![3.0, 2.0]])?;
/// assert!((predictions[0] - 7.0).abs() < 1e-9);
/// # Ok::<(), ridgeline::RegressionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct MultipleLinearRegression {
    config: NormalEquationConfig,
    coefficients: Option<Coefficients>,
}

impl Default for MultipleLinearRegression {
    fn default() -> Self {
        Self::new(NormalEquationConfig::default())
    }
}

impl MultipleLinearRegression {
    /// Create an unfitted model with the given solver configuration.
    pub fn new(config: NormalEquationConfig) -> Self {
        Self {
            config,
            coefficients: None,
        }
    }

    /// Create an unfitted model with λ = 0 and the default tolerance.
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Create an unfitted model with the given ridge strength.
    pub fn with_regularization(regularization: f64) -> Self {
        Self::new(NormalEquationConfig {
            regularization,
            ..NormalEquationConfig::default()
        })
    }

    /// Configured ridge strength λ.
    pub fn regularization(&self) -> f64 {
        self.config.regularization
    }

    /// Fitted slope coefficients in feature order, if fitted.
    pub fn coefficients(&self) -> Option<&[f64]> {
        self.coefficients.as_ref().map(|c| c.slopes.as_slice())
    }

    /// Fitted intercept, if fitted.
    pub fn intercept(&self) -> Option<f64> {
        self.coefficients.as_ref().map(|c| c.intercept)
    }

    /// Fit coefficients with the regularized normal equation.
    ///
    /// # Errors
    ///
    /// - [`RegressionError::LengthMismatch`] if `x` and `y` differ in length.
    /// - [`RegressionError::TooFewSamples`] on empty input.
    /// - [`RegressionError::RaggedRow`] if feature rows differ in length.
    /// - [`RegressionError::SingularMatrix`] when `XᵀX + λI` is not
    ///   invertible within tolerance; increase `regularization` and refit.
    pub fn fit(&mut self, x: &[Vec<f64>], y: &[f64]) -> Result<(), RegressionError> {
        if x.len() != y.len() {
            return Err(RegressionError::LengthMismatch {
                expected: x.len(),
                got: y.len(),
            });
        }
        if x.is_empty() {
            return Err(RegressionError::TooFewSamples { needed: 1, got: 0 });
        }

        let n_features = x[0].len();
        for (i, row) in x.iter().enumerate() {
            if row.len() != n_features {
                return Err(RegressionError::RaggedRow {
                    row: i,
                    expected: n_features,
                    got: row.len(),
                });
            }
        }

        debug!(
            "solving normal equation: {} rows, {} features, lambda = {}",
            x.len(),
            n_features,
            self.config.regularization
        );

        // Design matrix: ones column for the intercept, then the features.
        let mut design = Vec::with_capacity(x.len() * (n_features + 1));
        for row in x {
            design.push(1.0);
            design.extend_from_slice(row);
        }
        let design = DenseMatrix::from_vec(design, x.len(), n_features + 1);

        let design_t = design.transpose();
        let penalty =
            DenseMatrix::scaled_identity(n_features + 1, self.config.regularization);
        let gram = design_t.matmul(&design).add(&penalty);

        let inverse = gram
            .inverse(self.config.stabilization)
            .map_err(|_| RegressionError::SingularMatrix)?;

        let theta = inverse.matvec(&design_t.matvec(y));

        self.coefficients = Some(Coefficients {
            intercept: theta[0],
            slopes: theta[1..].to_vec(),
        });
        Ok(())
    }

    /// Fit from a table, resolving feature and target columns by name.
    ///
    /// Feature order in the fitted coefficients follows `feature_columns`.
    pub fn fit_table(
        &mut self,
        table: &NumericTable,
        feature_columns: &[&str],
        target_column: &str,
    ) -> Result<(), RegressionError> {
        let (x, y) = table.select(feature_columns, target_column)?;
        self.fit(&x, &y)
    }

    /// Predict `intercept + Σ coefficients[i]·row[i]` per row.
    ///
    /// # Errors
    ///
    /// - [`RegressionError::NotFitted`] before any successful fit.
    /// - [`RegressionError::FeatureCountMismatch`] if a row's length differs
    ///   from the fitted coefficient count.
    pub fn predict(&self, x: &[Vec<f64>]) -> Result<Vec<f64>, RegressionError> {
        let fitted = self.coefficients.as_ref().ok_or(RegressionError::NotFitted)?;

        let mut output = Vec::with_capacity(x.len());
        for (i, row) in x.iter().enumerate() {
            if row.len() != fitted.slopes.len() {
                return Err(RegressionError::FeatureCountMismatch {
                    row: i,
                    expected: fitted.slopes.len(),
                    got: row.len(),
                });
            }

            let sum: f64 = fitted
                .slopes
                .iter()
                .zip(row)
                .map(|(coef, value)| coef * value)
                .sum();
            output.push(fitted.intercept + sum);
        }
        Ok(output)
    }
}
