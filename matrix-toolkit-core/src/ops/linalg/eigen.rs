//! Eigendecomposition of square matrices.
//!
//! Real non-symmetric matrices can have complex spectra, so [`eigen_op`]
//! always reports complex eigenvalues and eigenvectors. Symmetric input is
//! routed to the backend's symmetric solver and comes back with zero
//! imaginary parts and an orthonormal eigenvector basis. Other input goes
//! through the backend's Schur-based eigenvalues. Eigenvalues that agree
//! within [`Tolerances::eigen_cluster`] form one group; a group of size `m`
//! takes the `m` right singular vectors of `A - λI` with the smallest singular
//! values, so a repeated eigenvalue with a full eigenspace gets independent
//! columns. When the eigenspace is smaller than `m` (a defective matrix) the
//! remaining columns repeat the best vector.
//!
//! In both cases `values[i]` belongs to column `i` of `vectors`, and every
//! eigenvector has unit length. The order of the eigenvalues is the order in
//! which the backend returns them.

use crate::backend::{from_dmatrix, to_dmatrix};
use crate::config::Tolerances;
use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::ops::traits::MatrixElement;
use crate::ops::{ensure_square, max_abs};
use log::debug;
use nalgebra::DMatrix;
use num_complex::Complex;
use std::cmp::Ordering;

/// Eigenvalues of a square matrix with the matching eigenvectors as columns.
#[derive(Debug, Clone, PartialEq)]
pub struct EigenResult<T> {
    pub values: Vec<Complex<T>>,
    pub vectors: Matrix<Complex<T>>,
}

impl<T: MatrixElement> EigenResult<T> {
    /// Real parts of `values`, or `None` if any eigenvalue has a nonzero
    /// imaginary part. Negative zeros come back as `+0`.
    pub fn real_values(&self) -> Option<Vec<T>> {
        real_parts(&self.values)
    }

    /// Real parts of `vectors` when every entry is real, as in `real_values`.
    pub fn real_vectors(&self) -> Option<Matrix<T>> {
        let (rows, cols) = self.vectors.shape();
        real_parts(self.vectors.data()).map(|data| Matrix::from_parts(rows, cols, data))
    }
}

fn real_parts<T: MatrixElement>(zs: &[Complex<T>]) -> Option<Vec<T>> {
    zs.iter()
        .map(|z| if z.im == T::zero() { Some(z.re + T::zero()) } else { None })
        .collect()
}

/// Real eigendecomposition of a symmetric matrix. `vectors` is orthonormal.
#[derive(Debug, Clone, PartialEq)]
pub struct SymmetricEigen<T> {
    pub values: Vec<T>,
    pub vectors: Matrix<T>,
}

pub fn eigen_op<T: MatrixElement>(a: &Matrix<T>) -> Result<EigenResult<T>, MatrixError> {
    eigen_with(a, &Tolerances::default())
}

/// Eigendecomposition with explicit tolerances for picking the solver and
/// for grouping repeated eigenvalues.
pub fn eigen_with<T: MatrixElement>(a: &Matrix<T>, tol: &Tolerances) -> Result<EigenResult<T>, MatrixError> {
    let n = ensure_square(a, "eigen")?;

    if is_symmetric(a, tol.symmetry) {
        debug!("eigen_op: {:?} matrix is symmetric, using symmetric solver", a.shape());
        let sym = decompose_symmetric(a);
        return Ok(EigenResult {
            values: sym.values.iter().map(|&v| real(v)).collect(),
            vectors: Matrix::from_parts(n, n, sym.vectors.data().iter().map(|&x| real(x)).collect()),
        });
    }

    debug!("eigen_op: {:?} matrix is not symmetric, using Schur eigenvalues", a.shape());
    let m = to_dmatrix(a);
    let values: Vec<Complex<T>> = m.complex_eigenvalues().iter().copied().collect();
    let cm: DMatrix<Complex<T>> = m.map(real);

    let radius = nalgebra::convert::<f64, T>(tol.eigen_cluster) * max_abs(a);
    let mut data = vec![real(T::zero()); n * n];
    let mut assigned = vec![false; n];
    for i in 0..n {
        if assigned[i] {
            continue;
        }
        let group: Vec<usize> = (i..n)
            .filter(|&j| !assigned[j] && (values[j] - values[i]).norm_sqr() <= radius * radius)
            .collect();
        let center = group.iter().fold(real(T::zero()), |acc, &j| acc + values[j])
            / nalgebra::convert::<f64, T>(group.len() as f64);
        if group.len() > 1 {
            debug!("eigen_op: eigenvalue {} repeated {} times", center, group.len());
        }

        let basis = null_space(&cm, center, group.len(), tol.eigen_cluster)?;
        for (&col, v) in group.iter().zip(basis) {
            assigned[col] = true;
            for (row, x) in v.into_iter().enumerate() {
                data[row * n + col] = x;
            }
        }
    }

    Ok(EigenResult {
        values,
        vectors: Matrix::from_parts(n, n, data),
    })
}

/// Real eigendecomposition of a symmetric matrix.
///
/// # Errors
/// - [`MatrixError::NotSquare`] if `a` is not square.
/// - [`MatrixError::NotSymmetric`] if `a` is not symmetric within the default tolerance.
pub fn symmetric_eigen_op<T: MatrixElement>(a: &Matrix<T>) -> Result<SymmetricEigen<T>, MatrixError> {
    symmetric_eigen_with(a, &Tolerances::default())
}

pub fn symmetric_eigen_with<T: MatrixElement>(
    a: &Matrix<T>,
    tol: &Tolerances,
) -> Result<SymmetricEigen<T>, MatrixError> {
    ensure_square(a, "symmetric_eigen")?;
    if !is_symmetric(a, tol.symmetry) {
        return Err(MatrixError::NotSymmetric {
            operation: "symmetric_eigen".to_string(),
        });
    }
    debug!("symmetric_eigen_op: delegating {:?} to backend", a.shape());
    Ok(decompose_symmetric(a))
}

fn decompose_symmetric<T: MatrixElement>(a: &Matrix<T>) -> SymmetricEigen<T> {
    let eig = to_dmatrix(a).symmetric_eigen();
    SymmetricEigen {
        values: eig.eigenvalues.iter().copied().collect(),
        vectors: from_dmatrix(&eig.eigenvectors),
    }
}

/// `count` unit vectors from the null space of `cm - λI`, best first.
///
/// Right singular vectors count as null vectors while their singular value is
/// at most `tolerance` times the largest one. If fewer than `count` qualify, the
/// best vector fills the remaining slots.
fn null_space<T: MatrixElement>(
    cm: &DMatrix<Complex<T>>,
    lambda: Complex<T>,
    count: usize,
    tolerance: f64,
) -> Result<Vec<Vec<Complex<T>>>, MatrixError> {
    let mut shifted = cm.clone();
    for i in 0..shifted.nrows() {
        shifted[(i, i)] -= lambda;
    }

    let svd = shifted.svd(false, true);
    let v_t = svd.v_t.ok_or_else(|| MatrixError::DecompositionFailed {
        operation: "eigen".to_string(),
    })?;
    let s = &svd.singular_values;

    let mut order: Vec<usize> = (0..s.len()).collect();
    order.sort_by(|&i, &j| s[i].partial_cmp(&s[j]).unwrap_or(Ordering::Equal));
    let largest = s.iter().fold(T::zero(), |acc, &x| acc.max(x));
    let threshold = nalgebra::convert::<f64, T>(tolerance) * largest;

    // Rows of V^H are conjugated right singular vectors.
    let vector = |k: usize| -> Vec<Complex<T>> { v_t.row(k).iter().map(|z| z.conj()).collect() };
    Ok((0..count)
        .map(|r| {
            let k = order[r];
            if r == 0 || s[k] <= threshold {
                vector(k)
            } else {
                vector(order[0])
            }
        })
        .collect())
}

pub(crate) fn is_symmetric<T: MatrixElement>(a: &Matrix<T>, tolerance: f64) -> bool {
    if !a.is_square() {
        return false;
    }
    let n = a.rows();
    let d = a.data();
    let threshold = nalgebra::convert::<f64, T>(tolerance) * max_abs(a);
    (0..n).all(|i| (i + 1..n).all(|j| (d[i * n + j] - d[j * n + i]).abs() <= threshold))
}

fn real<T: MatrixElement>(x: T) -> Complex<T> {
    Complex::new(x, T::zero())
}

#[cfg(test)]
#[path = "eigen_test.rs"]
mod tests;
