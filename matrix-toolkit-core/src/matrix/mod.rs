// src/matrix/mod.rs

use crate::error::MatrixError;

pub mod create;
mod debug;
mod linalg_methods;
mod traits;

// Re-export creation functions to make them public
pub use create::{create, eye, from_rows, ones, rand, rand_with_rng, randn, randn_with_rng, zeros};

/// A dense, owned, two-dimensional matrix stored in row-major order.
///
/// A `Matrix` always has at least one row and one column. Operations never
/// modify their inputs: every operation returns a fresh `Matrix`. Two
/// matrices are equal when their shapes and all their elements are equal.
#[derive(Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Matrix<T> {
    /// Creates a new matrix from row-major `data` and a `(rows, cols)` shape.
    ///
    /// Fails with [`MatrixError::EmptyDimension`] when either dimension is zero
    /// and with [`MatrixError::MatrixCreationError`] when `data.len() != rows * cols`.
    pub fn new(data: Vec<T>, rows: usize, cols: usize) -> Result<Self, MatrixError> {
        check_dims(rows, cols)?;
        if data.len() != rows * cols {
            return Err(MatrixError::MatrixCreationError {
                data_len: data.len(),
                shape: (rows, cols),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Builds a matrix whose shape is already known to be valid.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<T>) -> Self {
        debug_assert!(rows >= 1 && cols >= 1);
        debug_assert_eq!(data.len(), rows * cols);
        Matrix { rows, cols, data }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the `(rows, cols)` pair.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Returns the number of elements in the matrix.
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Row-major view of the elements.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Returns row `i` as a slice.
    pub fn row(&self, i: usize) -> Result<&[T], MatrixError> {
        if i >= self.rows {
            return Err(MatrixError::IndexOutOfBounds {
                index: (i, 0),
                shape: self.shape(),
            });
        }
        Ok(&self.data[i * self.cols..(i + 1) * self.cols])
    }

    /// Iterates over the rows of the matrix.
    pub fn row_iter(&self) -> std::slice::Chunks<'_, T> {
        self.data.chunks(self.cols)
    }
}

impl<T: Copy> Matrix<T> {
    /// Returns the element at `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Result<T, MatrixError> {
        if i >= self.rows || j >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                index: (i, j),
                shape: self.shape(),
            });
        }
        Ok(self.data[i * self.cols + j])
    }

    /// Returns column `j` as an owned vector.
    pub fn column(&self, j: usize) -> Result<Vec<T>, MatrixError> {
        if j >= self.cols {
            return Err(MatrixError::IndexOutOfBounds {
                index: (0, j),
                shape: self.shape(),
            });
        }
        Ok(self.row_iter().map(|row| row[j]).collect())
    }

    /// Copies the matrix into nested row vectors.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        self.row_iter().map(|row| row.to_vec()).collect()
    }
}

/// Validates that a requested shape has at least one row and one column.
pub(crate) fn check_dims(rows: usize, cols: usize) -> Result<(), MatrixError> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::EmptyDimension { rows, cols });
    }
    Ok(())
}
