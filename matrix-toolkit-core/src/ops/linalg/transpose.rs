use crate::backend::{from_dmatrix, to_dmatrix};
use crate::matrix::Matrix;
use crate::ops::traits::MatrixElement;
use log::debug;

/// Returns the transpose of `a`: shape `(cols, rows)` with `out[j][i] = a[i][j]`.
///
/// The result owns its own copy of the data.
pub fn transpose_op<T: MatrixElement>(a: &Matrix<T>) -> Matrix<T> {
    debug!("transpose_op: delegating {:?} to backend", a.shape());
    from_dmatrix(&to_dmatrix(a).transpose())
}

#[cfg(test)]
mod tests {
    use crate::matrix::{create, from_rows};
    use crate::ops::linalg::transpose_op;

    #[test]
    fn test_transpose_basic() {
        let t = from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
        let transposed = transpose_op(&t);
        assert_eq!(transposed.shape(), (3, 2));
        assert_eq!(transposed.data(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
        for i in 0..2 {
            for j in 0..3 {
                assert_eq!(transposed.get(j, i).unwrap(), t.get(i, j).unwrap());
            }
        }
    }

    #[test]
    fn test_transpose_twice_is_identity() {
        let t = from_rows(&[vec![1.0_f32, -2.0], vec![0.5, 7.0], vec![3.0, 9.0]]).unwrap();
        assert_eq!(transpose_op(&transpose_op(&t)), t);
    }

    #[test]
    fn test_transpose_constant_square() {
        let a = create(2, 2, 3.0_f64).unwrap();
        assert_eq!(transpose_op(&a), a);
    }
}
