//! Shared error taxonomy for fitting, prediction, and evaluation.

use crate::data::TableError;

/// Errors raised by model fitting, prediction, metrics, and cross-validation.
///
/// All errors are raised synchronously at the point of detection. A failed
/// `fit` never leaves a model partially trained: the state from before the
/// call is preserved.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RegressionError {
    /// Features and targets (or `y_true` and `y_pred`) have different lengths.
    #[error("input arrays must have the same length: {expected} vs {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// A feature row does not match the width of the first row.
    #[error("feature row {row} has {got} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// A prediction row does not match the fitted coefficient count.
    #[error("feature row {row} has {got} values, but the model was fitted with {expected} features")]
    FeatureCountMismatch {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Not enough samples to determine a least-squares solution.
    #[error("need at least {needed} samples to fit, got {got}")]
    TooFewSamples { needed: usize, got: usize },

    /// All x values are identical, so the least-squares denominator is zero.
    #[error("x values are constant, the least-squares slope is undefined")]
    ConstantFeature,

    /// `predict` was called before any successful `fit`.
    #[error("model has not been fitted yet")]
    NotFitted,

    /// The normal-equation matrix is not invertible.
    #[error("matrix is singular or nearly singular, consider increasing regularization")]
    SingularMatrix,

    /// Cross-validation fold count outside `2..=n_rows`.
    #[error("fold count must be between 2 and the number of rows ({rows}), got {k}")]
    InvalidFoldCount { k: usize, rows: usize },

    /// Column selection against a [`NumericTable`](crate::data::NumericTable) failed.
    #[error(transparent)]
    Table(#[from] TableError),
}
