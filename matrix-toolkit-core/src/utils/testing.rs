use crate::matrix::Matrix;
use crate::ops::traits::MatrixElement;

/// Checks if two matrices are approximately equal (shape and data within tolerance).
/// Panics if shapes differ or data differs significantly.
pub fn check_matrix_near<T: MatrixElement>(
    actual: &Matrix<T>,
    expected_shape: (usize, usize),
    expected_data: &[T],
    tolerance: T,
) {
    assert_eq!(actual.shape(), expected_shape, "Shape mismatch");
    assert_eq!(
        actual.numel(),
        expected_data.len(),
        "Data length mismatch"
    );

    for (i, (a, e)) in actual.data().iter().zip(expected_data.iter()).enumerate() {
        let diff = (*a - *e).abs();
        if diff > tolerance {
            panic!(
                "Data mismatch at index {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
                i, a, e, diff, tolerance
            );
        }
    }
}

/// Asserts that a square matrix is the identity within `tolerance`.
pub fn assert_near_identity<T: MatrixElement>(actual: &Matrix<T>, tolerance: T) {
    assert!(actual.is_square(), "Expected a square matrix, got {:?}", actual.shape());
    let n = actual.rows();
    for i in 0..n {
        for j in 0..n {
            let expected = if i == j { T::one() } else { T::zero() };
            let diff = (actual[(i, j)] - expected).abs();
            if diff > tolerance {
                panic!(
                    "Not identity at ({}, {}): actual={:?}, diff={:?}, tolerance={:?}",
                    i, j, actual[(i, j)], diff, tolerance
                );
            }
        }
    }
}
