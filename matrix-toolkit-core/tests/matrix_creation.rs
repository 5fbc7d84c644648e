use matrix_toolkit_core::{create, eye, ones, zeros, Matrix, MatrixError};

mod common;
use common::create_test_matrix;

#[test]
fn test_matrix_creation() {
    let m = Matrix::new(vec![1.0_f64, 2.0, 3.0, 4.0], 2, 2).unwrap();
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.numel(), 4);
    assert_eq!(m[(0, 0)], 1.0);
    assert_eq!(m[(1, 1)], 4.0);
}

#[test]
fn test_matrix_creation_error() {
    let result = Matrix::new(vec![1.0_f32, 2.0, 3.0], 2, 2);
    match result.err().unwrap() {
        MatrixError::MatrixCreationError { data_len, shape } => {
            assert_eq!(data_len, 3);
            assert_eq!(shape, (2, 2));
        }
        e => panic!("Expected MatrixCreationError, got {:?}", e),
    }
}

#[test]
fn test_create_2x2_fill_3() {
    let m = create(2, 2, 3.0_f64).unwrap();
    assert_eq!(m, create_test_matrix(&[vec![3.0, 3.0], vec![3.0, 3.0]]));
}

#[test]
fn test_create_cell_count_matches_shape() {
    for (rows, cols) in [(1, 1), (1, 7), (4, 2), (5, 5)] {
        let m = create(rows, cols, -2.5_f64).unwrap();
        assert_eq!(m.numel(), rows * cols);
        assert!(m.data().iter().all(|&x| x == -2.5));
    }
}

#[test]
fn test_default_fill_is_zero() {
    let z = zeros::<f64>(3, 2).unwrap();
    assert_eq!(z, create(3, 2, 0.0).unwrap());
    let o = ones::<f64>(2, 3).unwrap();
    assert_eq!(o, create(2, 3, 1.0).unwrap());
}

#[test]
fn test_eye_creation() {
    let i2 = eye::<f64>(2).unwrap();
    assert_eq!(i2, create_test_matrix(&[vec![1.0, 0.0], vec![0.0, 1.0]]));
}
