use crate::backend::{from_dmatrix, to_dmatrix};
use crate::config::Tolerances;
use crate::error::MatrixError;
use crate::matrix::Matrix;
use crate::ops::ensure_square;
use crate::ops::traits::MatrixElement;
use log::{debug, warn};

/// Computes the inverse of a square matrix using the default [`Tolerances`].
///
/// # Errors
/// - [`MatrixError::NotSquare`] if `a` is not square.
/// - [`MatrixError::Singular`] if the LU factorisation has a pivot that is
///   negligible next to the largest one.
pub fn inverse_op<T: MatrixElement>(a: &Matrix<T>) -> Result<Matrix<T>, MatrixError> {
    inverse_with(a, &Tolerances::default())
}

/// Computes the inverse of a square matrix, treating it as singular when
/// `min|U_ii| <= tol.singular * max|U_ii|` for the LU factor `U` of `a`.
///
/// The check is a ratio of pivots, so it does not depend on the magnitude of
/// the entries. The determinant is only reported in the error.
pub fn inverse_with<T: MatrixElement>(a: &Matrix<T>, tol: &Tolerances) -> Result<Matrix<T>, MatrixError> {
    let n = ensure_square(a, "inverse")?;
    debug!("inverse_op: delegating {:?} to backend LU", a.shape());

    let lu = to_dmatrix(a).lu();
    let u = lu.u();
    let first = u[(0, 0)].abs();
    let (min_pivot, max_pivot) = (1..n).fold((first, first), |(lo, hi), i| {
        let p = u[(i, i)].abs();
        (lo.min(p), hi.max(p))
    });
    let threshold = nalgebra::convert::<f64, T>(tol.singular) * max_pivot;

    if min_pivot <= threshold {
        let det = lu.determinant();
        warn!(
            "inverse_op: rejecting singular {:?} matrix (pivot ratio {} / {}, det = {})",
            a.shape(),
            min_pivot,
            max_pivot,
            det
        );
        return Err(singular(det));
    }

    match lu.try_inverse() {
        Some(inv) => Ok(from_dmatrix(&inv)),
        None => {
            let det = lu.determinant();
            warn!("inverse_op: backend could not invert {:?} matrix (det = {})", a.shape(), det);
            Err(singular(det))
        }
    }
}

fn singular<T: MatrixElement>(det: T) -> MatrixError {
    MatrixError::Singular {
        determinant: nalgebra::try_convert::<T, f64>(det).unwrap_or(f64::NAN),
    }
}

#[cfg(test)]
#[path = "inverse_test.rs"]
mod tests;
