//! Boundary with the dense linear-algebra backend (`nalgebra`).
//!
//! `Matrix` is row-major while `DMatrix` is column-major; these two
//! functions are the only place where that difference is handled.

use crate::matrix::Matrix;
use nalgebra::{DMatrix, Scalar};

/// Copies a `Matrix` into a backend `DMatrix`.
pub(crate) fn to_dmatrix<T: Scalar + Copy>(m: &Matrix<T>) -> DMatrix<T> {
    DMatrix::from_row_slice(m.rows(), m.cols(), m.data())
}

/// Copies a backend `DMatrix` back into a `Matrix`.
pub(crate) fn from_dmatrix<T: Scalar + Copy>(m: &DMatrix<T>) -> Matrix<T> {
    let (rows, cols) = m.shape();
    // Column-major storage of the transpose is the row-major storage of `m`.
    let data = m.transpose().as_slice().to_vec();
    Matrix::from_parts(rows, cols, data)
}
