//! Dynamically sized, row-major matrix.
//!
//! # Convention
//! - Vectors are **column vectors** on the right: `M * v`
//! - Translation is stored in the **last column**
//! - Transforms chain **right-to-left**: `A * B * v` applies B first, then A
//!
//! Points enter and leave the matrix world through [`Matrix::from_point`]
//! (a 4x1 homogeneous column) and [`Matrix::to_point`] (divide by w).

use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use thiserror::Error;

use super::vec3::Vec3f;

/// Pivots smaller than this are treated as zero during inversion.
const SINGULAR_EPSILON: f32 = 1e-7;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    #[error("cannot multiply a {lhs_rows}x{lhs_cols} matrix by a {rhs_rows}x{rhs_cols} matrix")]
    DimensionMismatch {
        lhs_rows: usize,
        lhs_cols: usize,
        rhs_rows: usize,
        rhs_cols: usize,
    },
    #[error("expected {expected} elements for the given shape, got {found}")]
    BadLength { expected: usize, found: usize },
    #[error("a {rows}x{cols} matrix is not square")]
    NotSquare { rows: usize, cols: usize },
    #[error("matrix is singular")]
    Singular,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Matrix {
    /// A `rows` x `cols` matrix of zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    pub fn identity(dimensions: usize) -> Self {
        let mut m = Self::zeros(dimensions, dimensions);
        for i in 0..dimensions {
            m[(i, i)] = 1.0;
        }
        m
    }

    /// Build a matrix from row-major data.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self, MatrixError> {
        if data.len() != rows * cols {
            return Err(MatrixError::BadLength {
                expected: rows * cols,
                found: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Homogeneous 4x1 column `[x, y, z, 1]`.
    pub fn from_point(v: Vec3f) -> Self {
        Self {
            rows: 4,
            cols: 1,
            data: vec![v.x(), v.y(), v.z(), 1.0],
        }
    }

    /// Read a 4x1 homogeneous column back into 3-space, dividing by w.
    ///
    /// Returns `None` if the matrix is not 4x1 or w is zero.
    pub fn to_point(&self) -> Option<Vec3f> {
        if self.rows != 4 || self.cols != 1 {
            return None;
        }
        let w = self[(3, 0)];
        if w == 0.0 {
            return None;
        }
        Some(Vec3f::new(
            self[(0, 0)] / w,
            self[(1, 0)] / w,
            self[(2, 0)] / w,
        ))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Access element at (row, col).
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self[(row, col)]
    }

    /// Set element at (row, col).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f32) {
        self[(row, col)] = value;
    }

    pub fn transpose(&self) -> Self {
        let mut t = Self::zeros(self.cols, self.rows);
        for row in 0..self.rows {
            for col in 0..self.cols {
                t[(col, row)] = self[(row, col)];
            }
        }
        t
    }

    /// Dimension-checked matrix product `self * rhs`.
    pub fn try_mul(&self, rhs: &Matrix) -> Result<Matrix, MatrixError> {
        if self.cols != rhs.rows {
            return Err(MatrixError::DimensionMismatch {
                lhs_rows: self.rows,
                lhs_cols: self.cols,
                rhs_rows: rhs.rows,
                rhs_cols: rhs.cols,
            });
        }

        let mut result = Self::zeros(self.rows, rhs.cols);
        for row in 0..self.rows {
            for col in 0..rhs.cols {
                result[(row, col)] = (0..self.cols)
                    .map(|k| self[(row, k)] * rhs[(k, col)])
                    .sum();
            }
        }
        Ok(result)
    }

    /// Gauss-Jordan inversion with partial pivoting.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        if self.rows != self.cols {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let n = self.rows;

        // Augment [A | I] and reduce the left half to the identity.
        let mut aug = Self::zeros(n, 2 * n);
        for row in 0..n {
            for col in 0..n {
                aug[(row, col)] = self[(row, col)];
            }
            aug[(row, n + row)] = 1.0;
        }

        for col in 0..n {
            let pivot_row = (col..n)
                .max_by(|&a, &b| aug[(a, col)].abs().total_cmp(&aug[(b, col)].abs()))
                .unwrap_or(col);
            if aug[(pivot_row, col)].abs() < SINGULAR_EPSILON {
                return Err(MatrixError::Singular);
            }
            aug.swap_rows(col, pivot_row);

            let pivot = aug[(col, col)];
            for k in 0..2 * n {
                aug[(col, k)] /= pivot;
            }

            for row in 0..n {
                if row == col {
                    continue;
                }
                let factor = aug[(row, col)];
                if factor == 0.0 {
                    continue;
                }
                for k in 0..2 * n {
                    let delta = factor * aug[(col, k)];
                    aug[(row, k)] -= delta;
                }
            }
        }

        let mut inverse = Self::zeros(n, n);
        for row in 0..n {
            for col in 0..n {
                inverse[(row, col)] = aug[(row, n + col)];
            }
        }
        Ok(inverse)
    }

    fn swap_rows(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        for col in 0..self.cols {
            self.data.swap(a * self.cols + col, b * self.cols + col);
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f32;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.cols + col]
    }
}

/// Matrix multiplication: `&A * &B`.
///
/// # Panics
/// Panics if the inner dimensions differ. Use [`Matrix::try_mul`] when the
/// shapes are not known to agree.
impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Self::Output {
        match self.try_mul(rhs) {
            Ok(m) => m,
            Err(e) => panic!("{e}"),
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let cells: Vec<String> = (0..self.cols)
                .map(|col| format!("{:.4}", self[(row, col)]))
                .collect();
            writeln!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn assert_matrix_eq(a: &Matrix, b: &Matrix) {
        assert_eq!((a.rows(), a.cols()), (b.rows(), b.cols()));
        for row in 0..a.rows() {
            for col in 0..a.cols() {
                assert_abs_diff_eq!(a[(row, col)], b[(row, col)], epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn identity_is_neutral() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(&Matrix::identity(2) * &m, m);
        assert_eq!(&m * &Matrix::identity(3), m);
    }

    #[test]
    fn multiplication_checks_dimensions() {
        let a = Matrix::zeros(2, 3);
        let b = Matrix::zeros(2, 3);
        assert!(matches!(
            a.try_mul(&b),
            Err(MatrixError::DimensionMismatch { .. })
        ));
        assert_eq!(a.try_mul(&b.transpose()).unwrap().rows(), 2);
    }

    #[test]
    fn product_values() {
        let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
        let expected = Matrix::from_vec(2, 2, vec![19.0, 22.0, 43.0, 50.0]).unwrap();
        assert_eq!(&a * &b, expected);
    }

    #[test]
    fn transpose_swaps_shape() {
        let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let t = m.transpose();
        assert_eq!((t.rows(), t.cols()), (3, 2));
        assert_eq!(t[(2, 1)], 6.0);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn inverse_round_trips_to_identity() {
        let m = Matrix::from_vec(
            4,
            4,
            vec![
                2.0, 0.0, 0.0, 1.0, //
                0.0, 3.0, 0.0, 2.0, //
                0.0, 1.0, 4.0, 3.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        )
        .unwrap();
        let inv = m.inverse().unwrap();
        assert_matrix_eq(&(&m * &inv), &Matrix::identity(4));
        assert_matrix_eq(&(&inv * &m), &Matrix::identity(4));
    }

    #[test]
    fn inverse_needs_pivoting() {
        // Zero in the top-left corner forces a row swap.
        let m = Matrix::from_vec(2, 2, vec![0.0, 1.0, 1.0, 0.0]).unwrap();
        assert_matrix_eq(&m.inverse().unwrap(), &m);
    }

    #[test]
    fn singular_matrix_is_an_error() {
        let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 2.0, 4.0]).unwrap();
        assert_eq!(m.inverse(), Err(MatrixError::Singular));
        assert!(matches!(
            Matrix::zeros(2, 3).inverse(),
            Err(MatrixError::NotSquare { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn point_round_trip_divides_by_w() {
        let mut m = Matrix::from_point(Vec3f::new(2.0, 4.0, 6.0));
        m[(3, 0)] = 2.0;
        assert_eq!(m.to_point(), Some(Vec3f::new(1.0, 2.0, 3.0)));
        m[(3, 0)] = 0.0;
        assert_eq!(m.to_point(), None);
    }
}
