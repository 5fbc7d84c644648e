// src/matrix/create.rs

use crate::error::MatrixError;
use crate::matrix::{check_dims, Matrix};
use crate::ops::traits::MatrixElement;
use rand::distributions::Standard;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

/// Creates a `rows × cols` matrix with every cell set to `fill`.
pub fn create<T: MatrixElement>(rows: usize, cols: usize, fill: T) -> Result<Matrix<T>, MatrixError> {
    check_dims(rows, cols)?;
    Ok(Matrix::from_parts(rows, cols, vec![fill; rows * cols]))
}

/// Creates a matrix filled with zeros; this is `create` with its default fill.
pub fn zeros<T: MatrixElement>(rows: usize, cols: usize) -> Result<Matrix<T>, MatrixError> {
    create(rows, cols, T::zero())
}

pub fn ones<T: MatrixElement>(rows: usize, cols: usize) -> Result<Matrix<T>, MatrixError> {
    create(rows, cols, T::one())
}

/// Creates the `n × n` identity matrix.
pub fn eye<T: MatrixElement>(n: usize) -> Result<Matrix<T>, MatrixError> {
    let mut m = zeros(n, n)?;
    for i in 0..n {
        m.data[i * n + i] = T::one();
    }
    Ok(m)
}

/// Builds a matrix from nested rows. All rows must have the same length.
pub fn from_rows<T: MatrixElement>(rows: &[Vec<T>]) -> Result<Matrix<T>, MatrixError> {
    let n_rows = rows.len();
    let n_cols = rows.first().map_or(0, |r| r.len());
    check_dims(n_rows, n_cols)?;

    let mut data = Vec::with_capacity(n_rows * n_cols);
    for row in rows {
        if row.len() != n_cols {
            return Err(MatrixError::MatrixCreationError {
                data_len: row.len(),
                shape: (n_rows, n_cols),
            });
        }
        data.extend_from_slice(row);
    }
    Ok(Matrix::from_parts(n_rows, n_cols, data))
}

// Note: rand and randn draw from the thread-local generator; use the
// `_with_rng` variants for reproducible matrices.

/// Matrix of samples drawn uniformly from `[0, 1)`.
pub fn rand<T>(rows: usize, cols: usize) -> Result<Matrix<T>, MatrixError>
where
    T: MatrixElement,
    Standard: Distribution<T>,
{
    rand_with_rng(rows, cols, &mut rand::thread_rng())
}

pub fn rand_with_rng<T, R>(rows: usize, cols: usize, rng: &mut R) -> Result<Matrix<T>, MatrixError>
where
    T: MatrixElement,
    Standard: Distribution<T>,
    R: Rng,
{
    check_dims(rows, cols)?;
    let data: Vec<T> = (0..rows * cols).map(|_| rng.gen::<T>()).collect();
    Ok(Matrix::from_parts(rows, cols, data))
}

/// Matrix of samples drawn from the standard normal distribution.
pub fn randn<T>(rows: usize, cols: usize) -> Result<Matrix<T>, MatrixError>
where
    T: MatrixElement,
    StandardNormal: Distribution<T>,
{
    randn_with_rng(rows, cols, &mut rand::thread_rng())
}

pub fn randn_with_rng<T, R>(rows: usize, cols: usize, rng: &mut R) -> Result<Matrix<T>, MatrixError>
where
    T: MatrixElement,
    StandardNormal: Distribution<T>,
    R: Rng,
{
    check_dims(rows, cols)?;
    let data: Vec<T> = (0..rows * cols)
        .map(|_| StandardNormal.sample(&mut *rng))
        .collect();
    Ok(Matrix::from_parts(rows, cols, data))
}

#[cfg(test)]
#[path = "create_test.rs"]
mod tests;
