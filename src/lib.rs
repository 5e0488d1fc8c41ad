//! ridgeline: closed-form linear regression for small in-memory datasets.
//!
//! This crate provides simple (single-predictor) and multiple (N-predictor)
//! least-squares regression, the latter solved through the normal equation
//! with optional ridge-style regularization, plus evaluation metrics, a
//! named-column numeric table with a CSV loader, and a k-fold
//! cross-validation driver.
//!
//! # Example
//!
//! ```
//! use ridgeline::metrics::{mean_squared_error, r_squared};
//! use ridgeline::regression::MultipleLinearRegression;
//!
//! let x = vec![
//!     vec![1.0, 0.0],
//!     vec![0.0, 1.0],
//!     vec![1.0, 1.0],
//!     vec![2.0, 1.0],
//!     vec![1.0, 3.0],
//! ];
//! // y = 3 + 2·x1 − x2
//! let y: Vec<f64> = x.iter().map(|row| 3.0 + 2.0 * row[0] - row[1]).collect();
//!
//! let mut model = MultipleLinearRegression::default_config();
//! model.fit(&x, &y)?;
//!
//! let predictions = model.predict(&x)?;
//! assert!(mean_squared_error(&y, &predictions)? < 1e-9);
//! assert!(r_squared(&y, &predictions)? > 0.999);
//! # Ok::<(), ridgeline::RegressionError>(())
//! ```

pub mod data;
pub mod error;
pub mod linalg;
pub mod metrics;
pub mod model_selection;
pub mod regression;

pub use error::RegressionError;
pub use regression::{MultipleLinearRegression, NormalEquationConfig, SimpleLinearRegression};
