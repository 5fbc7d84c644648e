use crate::error::MatrixError;
use crate::matrix::{create, from_rows};
use crate::ops::arithmetic::add_op;
use crate::utils::testing::check_matrix_near;

#[test]
fn test_add_matrices_ok() {
    let a = from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    let b = from_rows(&[vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
    let result = add_op(&a, &b).unwrap();
    check_matrix_near(&result, (2, 2), &[6.0, 8.0, 10.0, 12.0], 1e-12);
}

#[test]
fn test_add_constant_matrices() {
    let a = create(2, 2, 3.0_f64).unwrap();
    let b = create(2, 2, 5.0_f64).unwrap();
    let result = add_op(&a, &b).unwrap();
    assert_eq!(result, create(2, 2, 8.0).unwrap());
}

#[test]
fn test_add_does_not_modify_inputs() {
    let a = from_rows(&[vec![1.0_f32, 2.0, 3.0]]).unwrap();
    let b = from_rows(&[vec![10.0_f32, 20.0, 30.0]]).unwrap();
    let a_before = a.clone();
    let _ = add_op(&a, &b).unwrap();
    assert_eq!(a, a_before);
}

#[test]
fn test_add_shape_mismatch() {
    let a = create(2, 3, 1.0_f64).unwrap();
    let b = create(3, 2, 1.0_f64).unwrap();
    match add_op(&a, &b) {
        Err(MatrixError::ShapeMismatch { left, right, operation }) => {
            assert_eq!(left, (2, 3));
            assert_eq!(right, (3, 2));
            assert_eq!(operation, "add");
        }
        other => panic!("Expected ShapeMismatch, got {:?}", other),
    }
}
