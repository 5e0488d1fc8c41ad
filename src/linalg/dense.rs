//! Row-major dense `f64` matrix.

/// The matrix passed to [`DenseMatrix::inverse`] is not invertible.
///
/// A pivot fell below the caller's tolerance during Gauss–Jordan elimination.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("matrix is singular or nearly singular")]
pub struct SingularMatrix;

/// Dense row-major matrix of `f64` values.
///
/// Stores all elements contiguously, row 0 first. Sized for the normal
/// equation: a handful of columns, inverted once per fit.
///
/// # Example
///
/// ```
/// use ridgeline::linalg::DenseMatrix;
///
/// let m = DenseMatrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
/// assert_eq!(m.row_slice(0), &[1.0, 2.0, 3.0]);
/// assert_eq!(m.get(1, 2), Some(6.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DenseMatrix {
    data: Box<[f64]>,
    num_rows: usize,
    num_cols: usize,
}

impl DenseMatrix {
    /// Create a matrix from a row-major buffer, taking ownership.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != num_rows * num_cols`.
    pub fn from_vec(data: Vec<f64>, num_rows: usize, num_cols: usize) -> Self {
        assert_eq!(
            data.len(),
            num_rows * num_cols,
            "data length {} does not match dimensions {}x{}",
            data.len(),
            num_rows,
            num_cols
        );
        Self {
            data: data.into_boxed_slice(),
            num_rows,
            num_cols,
        }
    }

    /// Create a zero-filled matrix.
    pub fn zeros(num_rows: usize, num_cols: usize) -> Self {
        Self {
            data: vec![0.0; num_rows * num_cols].into_boxed_slice(),
            num_rows,
            num_cols,
        }
    }

    /// Create `scale * I` of size `n`.
    pub fn scaled_identity(n: usize, scale: f64) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = scale;
        }
        m
    }

    /// Number of rows.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Number of columns.
    #[inline]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Element at (row, col), or `None` if out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row >= self.num_rows || col >= self.num_cols {
            return None;
        }
        Some(self.data[row * self.num_cols + col])
    }

    /// Row `i` as a contiguous slice. O(1).
    ///
    /// # Panics
    ///
    /// Panics if `i >= num_rows()`.
    #[inline]
    pub fn row_slice(&self, i: usize) -> &[f64] {
        let start = i * self.num_cols;
        &self.data[start..start + self.num_cols]
    }

    /// The underlying row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Transposed copy.
    pub fn transpose(&self) -> DenseMatrix {
        let mut out = DenseMatrix::zeros(self.num_cols, self.num_rows);
        for row in 0..self.num_rows {
            for col in 0..self.num_cols {
                out.data[col * self.num_rows + row] = self.data[row * self.num_cols + col];
            }
        }
        out
    }

    /// Matrix product `self * other`.
    ///
    /// # Panics
    ///
    /// Panics if `self.num_cols() != other.num_rows()`.
    pub fn matmul(&self, other: &DenseMatrix) -> DenseMatrix {
        assert_eq!(
            self.num_cols, other.num_rows,
            "inner dimensions do not match: {}x{} * {}x{}",
            self.num_rows, self.num_cols, other.num_rows, other.num_cols
        );

        let mut out = DenseMatrix::zeros(self.num_rows, other.num_cols);
        for row in 0..self.num_rows {
            for k in 0..self.num_cols {
                let lhs = self.data[row * self.num_cols + k];
                if lhs == 0.0 {
                    continue;
                }
                for col in 0..other.num_cols {
                    out.data[row * other.num_cols + col] +=
                        lhs * other.data[k * other.num_cols + col];
                }
            }
        }
        out
    }

    /// Matrix–vector product `self * v`.
    ///
    /// # Panics
    ///
    /// Panics if `v.len() != self.num_cols()`.
    pub fn matvec(&self, v: &[f64]) -> Vec<f64> {
        assert_eq!(
            v.len(),
            self.num_cols,
            "vector length {} does not match {} columns",
            v.len(),
            self.num_cols
        );

        (0..self.num_rows)
            .map(|row| {
                self.row_slice(row)
                    .iter()
                    .zip(v)
                    .map(|(a, b)| a * b)
                    .sum()
            })
            .collect()
    }

    /// Elementwise sum `self + other`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    pub fn add(&self, other: &DenseMatrix) -> DenseMatrix {
        assert_eq!(self.num_rows, other.num_rows, "row counts differ");
        assert_eq!(self.num_cols, other.num_cols, "column counts differ");

        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        DenseMatrix {
            data,
            num_rows: self.num_rows,
            num_cols: self.num_cols,
        }
    }

    /// Inverse via Gauss–Jordan elimination with partial pivoting.
    ///
    /// A pivot with absolute value at or below `tolerance` is treated as
    /// zero and reported as [`SingularMatrix`].
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    pub fn inverse(&self, tolerance: f64) -> Result<DenseMatrix, SingularMatrix> {
        assert_eq!(
            self.num_rows, self.num_cols,
            "only square matrices can be inverted"
        );
        let n = self.num_rows;

        // Augmented [self | I], reduced in place.
        let mut a = self.data.to_vec();
        let mut inv = DenseMatrix::scaled_identity(n, 1.0).data.to_vec();

        for col in 0..n {
            // Partial pivoting: largest remaining entry in this column.
            let pivot_row = (col..n)
                .max_by(|&r1, &r2| {
                    a[r1 * n + col]
                        .abs()
                        .total_cmp(&a[r2 * n + col].abs())
                })
                .unwrap_or(col);

            let pivot = a[pivot_row * n + col];
            if pivot.abs() <= tolerance {
                return Err(SingularMatrix);
            }

            if pivot_row != col {
                for j in 0..n {
                    a.swap(col * n + j, pivot_row * n + j);
                    inv.swap(col * n + j, pivot_row * n + j);
                }
            }

            let inv_pivot = 1.0 / pivot;
            for j in 0..n {
                a[col * n + j] *= inv_pivot;
                inv[col * n + j] *= inv_pivot;
            }

            for row in 0..n {
                if row == col {
                    continue;
                }
                let factor = a[row * n + col];
                if factor == 0.0 {
                    continue;
                }
                for j in 0..n {
                    a[row * n + j] -= factor * a[col * n + j];
                    inv[row * n + j] -= factor * inv[col * n + j];
                }
            }
        }

        Ok(DenseMatrix {
            data: inv.into_boxed_slice(),
            num_rows: n,
            num_cols: n,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn transpose_swaps_dimensions() {
        let m = DenseMatrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
        let t = m.transpose();

        assert_eq!(t.num_rows(), 3);
        assert_eq!(t.num_cols(), 2);
        assert_eq!(t.row_slice(0), &[1.0, 4.0]);
        assert_eq!(t.row_slice(2), &[3.0, 6.0]);
    }

    #[test]
    fn matmul_known_product() {
        let a = DenseMatrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let b = DenseMatrix::from_vec(vec![5.0, 6.0, 7.0, 8.0], 2, 2);
        let c = a.matmul(&b);

        assert_eq!(c.row_slice(0), &[19.0, 22.0]);
        assert_eq!(c.row_slice(1), &[43.0, 50.0]);
    }

    #[test]
    fn matvec_known_product() {
        let m = DenseMatrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
        let v = m.matvec(&[1.0, 0.0, -1.0]);

        assert_eq!(v, vec![-2.0, -2.0]);
    }

    #[test]
    fn add_elementwise() {
        let a = DenseMatrix::from_vec(vec![1.0, 2.0, 3.0, 4.0], 2, 2);
        let b = DenseMatrix::scaled_identity(2, 0.5);
        let c = a.add(&b);

        assert_eq!(c.row_slice(0), &[1.5, 2.0]);
        assert_eq!(c.row_slice(1), &[3.0, 4.5]);
    }

    #[test]
    fn inverse_of_identity_is_identity() {
        let i = DenseMatrix::scaled_identity(3, 1.0);
        let inv = i.inverse(1e-12).unwrap();
        assert_eq!(inv, i);
    }

    #[test]
    fn inverse_known_2x2() {
        // [[4, 7], [2, 6]]⁻¹ = [[0.6, -0.7], [-0.2, 0.4]]
        let m = DenseMatrix::from_vec(vec![4.0, 7.0, 2.0, 6.0], 2, 2);
        let inv = m.inverse(1e-12).unwrap();

        assert_relative_eq!(inv.get(0, 0).unwrap(), 0.6, max_relative = 1e-12);
        assert_relative_eq!(inv.get(0, 1).unwrap(), -0.7, max_relative = 1e-12);
        assert_relative_eq!(inv.get(1, 0).unwrap(), -0.2, max_relative = 1e-12);
        assert_relative_eq!(inv.get(1, 1).unwrap(), 0.4, max_relative = 1e-12);
    }

    #[test]
    fn inverse_times_original_is_identity() {
        let m = DenseMatrix::from_vec(vec![2.0, 1.0, 0.0, 1.0, 3.0, 1.0, 0.0, 1.0, 2.0], 3, 3);
        let inv = m.inverse(1e-12).unwrap();
        let product = m.matmul(&inv);

        for row in 0..3 {
            for col in 0..3 {
                let expected = if row == col { 1.0 } else { 0.0 };
                assert_relative_eq!(
                    product.get(row, col).unwrap(),
                    expected,
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn singular_matrix_is_detected() {
        // Second row is a multiple of the first.
        let m = DenseMatrix::from_vec(vec![1.0, 2.0, 2.0, 4.0], 2, 2);
        assert!(m.inverse(1e-8).is_err());
    }

    #[test]
    fn nearly_singular_matrix_is_detected() {
        let m = DenseMatrix::from_vec(vec![1.0, 1.0, 1.0, 1.0 + 1e-13], 2, 2);
        assert!(m.inverse(1e-8).is_err());
    }

    #[test]
    #[should_panic(expected = "data length")]
    fn from_vec_wrong_length_panics() {
        DenseMatrix::from_vec(vec![1.0, 2.0, 3.0], 2, 2);
    }
}
