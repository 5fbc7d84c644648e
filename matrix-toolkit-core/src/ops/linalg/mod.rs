// src/ops/linalg/mod.rs

pub mod det;
pub mod eigen;
pub mod inverse;
pub mod matmul;
pub mod transpose;

pub use det::det_op;
pub use eigen::{eigen_op, eigen_with, symmetric_eigen_op, symmetric_eigen_with, EigenResult, SymmetricEigen};
pub use inverse::{inverse_op, inverse_with};
pub use matmul::matmul_op;
pub use transpose::transpose_op;
