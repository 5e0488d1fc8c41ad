//! Small dense linear algebra for the normal-equation solver.
//!
//! The solver only needs transpose, multiply, and inversion of matrices a few
//! columns wide, so the implementation is a plain row-major buffer rather
//! than a general-purpose linear-algebra dependency. Inversion failure is
//! observable as a distinct [`SingularMatrix`] error instead of silently
//! producing garbage.

mod dense;

pub use dense::{DenseMatrix, SingularMatrix};
