// src/matrix/traits.rs

use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::ops::arithmetic::add_op;
use crate::ops::linalg::matmul_op;
use crate::ops::traits::MatrixElement;
use std::ops::{Add, Index, Mul};

// Operators return `Result` so shape errors surface through `?` instead of panicking.

impl<'a, T: MatrixElement> Add<&'a Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn add(self, rhs: &'a Matrix<T>) -> Self::Output {
        add_op(self, rhs)
    }
}

impl<'a, T: MatrixElement> Mul<&'a Matrix<T>> for &'a Matrix<T> {
    type Output = Result<Matrix<T>, MatrixError>;

    fn mul(self, rhs: &'a Matrix<T>) -> Self::Output {
        matmul_op(self, rhs)
    }
}

/// Indexes by `(row, col)`. Panics when out of bounds; use [`Matrix::get`] to check.
impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.rows && j < self.cols,
            "Index ({}, {}) out of bounds for shape {:?}",
            i,
            j,
            self.shape()
        );
        &self.data[i * self.cols + j]
    }
}
