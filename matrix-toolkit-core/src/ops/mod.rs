//! # Matrix Operations Module (`ops`)
//!
//! Stateless operations over [`Matrix`]. Each operation validates its inputs,
//! converts them through the [`backend`](crate::backend) boundary and lets
//! `nalgebra` do the numerical work.
//!
//! ## Structure:
//!
//! - **`_op` Functions:** Each operation has a core function (`add_op`,
//!   `matmul_op`, ...) returning a `Result`. The methods on `Matrix` forward
//!   to these.
//! - **Traits (`ops::traits`):** The `MatrixElement` bound shared by all operations.
//!
//! ## Key Submodules:
//!
//! - [`arithmetic`]: Element-wise arithmetic (add).
//! - [`linalg`]: Linear algebra (matmul, transpose, determinant, inverse, eigen).

pub mod arithmetic;
pub mod linalg;
pub mod traits;

use crate::error::MatrixError;
use crate::matrix::Matrix;
use traits::MatrixElement;

/// Fails with `NotSquare` unless `m` has as many rows as columns.
pub(crate) fn ensure_square<T>(m: &Matrix<T>, operation: &str) -> Result<usize, MatrixError> {
    if !m.is_square() {
        return Err(MatrixError::NotSquare {
            shape: m.shape(),
            operation: operation.to_string(),
        });
    }
    Ok(m.rows())
}

/// Largest absolute element of `m`, used to scale tolerances.
pub(crate) fn max_abs<T: MatrixElement>(m: &Matrix<T>) -> T {
    m.data().iter().fold(T::zero(), |acc, &x| acc.max(x.abs()))
}
