use crate::backend::to_dmatrix;
use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::ops::ensure_square;
use crate::ops::traits::MatrixElement;
use log::debug;

/// Computes the determinant of a square matrix through the backend's LU factorisation.
pub fn det_op<T: MatrixElement>(a: &Matrix<T>) -> Result<T, MatrixError> {
    ensure_square(a, "determinant")?;
    debug!("det_op: delegating {:?} to backend", a.shape());
    Ok(to_dmatrix(a).determinant())
}
