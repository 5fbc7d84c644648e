// matrix-toolkit-core/src/ops/arithmetic/add.rs

use crate::backend::{from_dmatrix, to_dmatrix};
use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::ops::traits::MatrixElement;
use log::debug;

/// Performs element-wise addition of two matrices of identical shape.
///
/// There is no broadcasting: shapes must match exactly, and any difference is a
/// [`MatrixError::ShapeMismatch`].
pub fn add_op<T: MatrixElement>(a: &Matrix<T>, b: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    if a.shape() != b.shape() {
        return Err(MatrixError::ShapeMismatch {
            left: a.shape(),
            right: b.shape(),
            operation: "add".to_string(),
        });
    }
    debug!("add_op: delegating {:?} + {:?} to backend", a.shape(), b.shape());

    let sum = to_dmatrix(a) + to_dmatrix(b);
    Ok(from_dmatrix(&sum))
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
