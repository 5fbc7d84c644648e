use matrix_toolkit_core::{from_rows, Matrix};

// Helper function to create a matrix from nested rows for testing.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub(crate) fn create_test_matrix(rows: &[Vec<f64>]) -> Matrix<f64> {
    from_rows(rows).expect("Test matrix creation failed")
}

/// A seeded, diagonally dominant (hence invertible) `n × n` matrix.
#[allow(dead_code)]
pub(crate) fn well_conditioned(n: usize, seed: u64) -> Matrix<f64> {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let noise = matrix_toolkit_core::randn_with_rng::<f64, _>(n, n, &mut StdRng::seed_from_u64(seed))
        .expect("Random matrix creation failed");
    let mut rows = noise.to_rows();
    for (i, row) in rows.iter_mut().enumerate() {
        row[i] += 2.0 * n as f64;
    }
    create_test_matrix(&rows)
}
