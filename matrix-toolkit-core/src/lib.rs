// Declare the main modules of the crate
mod backend;
pub mod config;
pub mod matrix;
pub mod ops;
pub mod utils;

pub mod error;
pub use error::MatrixError;

// Re-export the Matrix type so it is reachable as `matrix_toolkit_core::Matrix`
pub use matrix::Matrix;
pub use matrix::{create, eye, from_rows, ones, rand, rand_with_rng, randn, randn_with_rng, zeros};
pub use config::Tolerances;
pub use ops::linalg::{EigenResult, SymmetricEigen};
pub use ops::traits::MatrixElement;

// Re-export crates that appear in public signatures
pub use nalgebra;
pub use num_complex;
pub use num_traits;
