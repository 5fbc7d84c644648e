use crate::config::Tolerances;
use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::ops::arithmetic::add_op;
use crate::ops::linalg::{
    det_op, eigen_op, eigen_with, inverse_op, inverse_with, matmul_op, symmetric_eigen_op, transpose_op,
    EigenResult, SymmetricEigen,
};
use crate::ops::traits::MatrixElement;

impl<T: MatrixElement> Matrix<T> {
    /// Element-wise sum. See [`add_op`].
    pub fn add(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        add_op(self, other)
    }

    /// Matrix product `self @ other`. See [`matmul_op`].
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
        matmul_op(self, other)
    }

    pub fn transpose(&self) -> Matrix<T> {
        transpose_op(self)
    }

    pub fn det(&self) -> Result<T, MatrixError> {
        det_op(self)
    }

    pub fn inverse(&self) -> Result<Matrix<T>, MatrixError> {
        inverse_op(self)
    }

    pub fn inverse_with(&self, tol: &Tolerances) -> Result<Matrix<T>, MatrixError> {
        inverse_with(self, tol)
    }

    pub fn eigen(&self) -> Result<EigenResult<T>, MatrixError> {
        eigen_op(self)
    }

    pub fn eigen_with(&self, tol: &Tolerances) -> Result<EigenResult<T>, MatrixError> {
        eigen_with(self, tol)
    }

    pub fn symmetric_eigen(&self) -> Result<SymmetricEigen<T>, MatrixError> {
        symmetric_eigen_op(self)
    }
}
