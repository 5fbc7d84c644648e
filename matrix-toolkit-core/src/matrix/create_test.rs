use super::*;
use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn test_create_fills_every_cell() {
    let m = create(2, 2, 3.0_f64).unwrap();
    assert_eq!(m.shape(), (2, 2));
    assert_eq!(m.numel(), 4);
    assert_eq!(m.to_rows(), vec![vec![3.0, 3.0], vec![3.0, 3.0]]);
}

#[test]
fn test_create_non_square() {
    let m = create(3, 1, -1.5_f32).unwrap();
    assert_eq!(m.shape(), (3, 1));
    assert!(m.data().iter().all(|&x| x == -1.5));
}

#[test]
fn test_create_rejects_zero_dimension() {
    assert_eq!(
        create(0, 2, 1.0_f64).err(),
        Some(MatrixError::EmptyDimension { rows: 0, cols: 2 })
    );
    assert_eq!(
        zeros::<f64>(2, 0).err(),
        Some(MatrixError::EmptyDimension { rows: 2, cols: 0 })
    );
}

#[test]
fn test_zeros_and_ones() {
    let z = zeros::<f64>(2, 3).unwrap();
    assert!(z.data().iter().all(|&x| x == 0.0), "Matrix not filled with zeros");
    let o = ones::<f32>(1, 4).unwrap();
    assert!(o.data().iter().all(|&x| x == 1.0), "Matrix not filled with ones");
}

#[test]
fn test_eye() {
    let i3 = eye::<f64>(3).unwrap();
    for r in 0..3 {
        for c in 0..3 {
            let expected = if r == c { 1.0 } else { 0.0 };
            assert_eq!(i3.get(r, c).unwrap(), expected);
        }
    }
    assert!(eye::<f64>(0).is_err());
}

#[test]
fn test_from_rows() {
    let m = from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.data(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_from_rows_ragged() {
    let result = from_rows(&[vec![1.0, 2.0], vec![3.0]]);
    assert_eq!(
        result.err(),
        Some(MatrixError::MatrixCreationError {
            data_len: 1,
            shape: (2, 2)
        })
    );
    assert!(from_rows::<f64>(&[]).is_err());
}

#[test]
fn test_rand() {
    let m = rand::<f64>(4, 5).unwrap();
    assert_eq!(m.shape(), (4, 5));
    assert!(m.data().iter().all(|&x| (0.0..1.0).contains(&x)));
}

#[test]
fn test_randn_seeded_is_reproducible() {
    let a = randn_with_rng::<f64, _>(3, 3, &mut StdRng::seed_from_u64(7)).unwrap();
    let b = randn_with_rng::<f64, _>(3, 3, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(a, b);

    let big = randn_with_rng::<f64, _>(100, 100, &mut StdRng::seed_from_u64(42)).unwrap();
    let mean = big.data().iter().sum::<f64>() / big.numel() as f64;
    assert_relative_eq!(mean, 0.0, epsilon = 0.05);
}
