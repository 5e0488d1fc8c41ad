//! Regression models.
//!
//! Both models follow the same lifecycle: construct, `fit` (raw slices or a
//! [`NumericTable`](crate::data::NumericTable) plus column names), then
//! `predict`. Fitted state is all-or-nothing: a failed `fit` leaves whatever
//! state the model had before the call.

mod multiple;
mod simple;

pub use multiple::{MultipleLinearRegression, NormalEquationConfig};
pub use simple::SimpleLinearRegression;
