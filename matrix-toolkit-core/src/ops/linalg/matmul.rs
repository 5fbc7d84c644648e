use crate::backend::{from_dmatrix, to_dmatrix};
use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::ops::traits::MatrixElement;
use log::debug;

/// Performs matrix multiplication C = A @ B.
/// A: [M, K], B: [K, N] -> C: [M, N]
pub fn matmul_op<T: MatrixElement>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    if a.cols() != b.rows() {
        return Err(MatrixError::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
            operation: "matmul".to_string(),
        });
    }
    debug!("matmul_op: delegating {:?} x {:?} to backend", a.shape(), b.shape());

    let product = to_dmatrix(a) * to_dmatrix(b);
    Ok(from_dmatrix(&product))
}

#[cfg(test)]
#[path = "matmul_test.rs"]
mod tests;
