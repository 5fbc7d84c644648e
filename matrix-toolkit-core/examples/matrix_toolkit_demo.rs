//! Walks through every matrix-toolkit operation on two constant 2x2 matrices.
//!
//! Run with `RUST_LOG=debug` to see which backend routine each step uses.

use matrix_toolkit_core::num_complex::Complex;
use matrix_toolkit_core::{create, Matrix, MatrixError};

/// Values that print as zero at four decimals print as `0.0000`, not `-0.0000`.
fn tidy(x: f64) -> f64 {
    if x.abs() < 5e-5 {
        0.0
    } else {
        x
    }
}

fn main() -> Result<(), MatrixError> {
    let _ = env_logger::builder().is_test(false).try_init();

    println!("=== MATRIX TOOLKIT ===");

    let a = create(2, 2, 3.0_f64)?;
    let b = create(2, 2, 5.0_f64)?;

    println!("\nMatrix A:\n{}", a);
    println!("\nMatrix B:\n{}", b);

    println!("\nAdded Matrices:\n{}", a.add(&b)?);
    println!("\nTransposed Matrix A:\n{}", a.transpose());
    println!("\nMatrix Multiplication (A x B):\n{}", a.matmul(&b)?);

    let det_a = a.det()?;
    println!("\nDeterminant of Matrix A: {}", det_a);

    // Only a singular matrix is recovered from; anything else propagates.
    match a.inverse() {
        Ok(inv_a) => println!("\nInverse of Matrix A:\n{}", inv_a),
        Err(MatrixError::Singular { .. }) => {
            println!("\nMatrix A is singular and cannot be inverted.")
        }
        Err(e) => return Err(e),
    }

    let eig = a.eigen()?;
    match (eig.real_values(), eig.real_vectors()) {
        (Some(values), Some(vectors)) => {
            let values: Vec<String> = values.iter().map(|&v| format!("{:.4}", tidy(v))).collect();
            println!("\nEigenvalues of Matrix A:\n[{}]", values.join(", "));
            let (rows, cols) = vectors.shape();
            let vectors = Matrix::new(vectors.into_vec().into_iter().map(tidy).collect(), rows, cols)?;
            println!("\nEigenvectors of Matrix A:\n{:.4}", vectors);
        }
        _ => {
            let tidy_c = |z: &Complex<f64>| Complex::new(tidy(z.re), tidy(z.im));
            let values: Vec<String> = eig.values.iter().map(|v| format!("{:.4}", tidy_c(v))).collect();
            println!("\nEigenvalues of Matrix A:\n[{}]", values.join(", "));
            let (rows, cols) = eig.vectors.shape();
            let vectors = Matrix::new(eig.vectors.data().iter().map(tidy_c).collect(), rows, cols)?;
            println!("\nEigenvectors of Matrix A:\n{:.4}", vectors);
        }
    }

    Ok(())
}
