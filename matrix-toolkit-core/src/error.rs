use thiserror::Error;

/// Custom error type for matrix-toolkit operations.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum MatrixError {
    #[error("Shape mismatch during operation {operation}: left {left:?}, right {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
        operation: String,
    },

    #[error("Operation {operation} requires a square matrix, got shape {shape:?}")]
    NotSquare {
        shape: (usize, usize),
        operation: String,
    },

    #[error("Matrix is singular (determinant = {determinant}) and cannot be inverted")]
    Singular { determinant: f64 },

    #[error("Operation {operation} requires a symmetric matrix")]
    NotSymmetric { operation: String },

    #[error("Matrix dimensions must be at least 1x1, got {rows}x{cols}")]
    EmptyDimension { rows: usize, cols: usize },

    #[error("Matrix creation error: data length {data_len} does not match shape {shape:?}")]
    MatrixCreationError {
        data_len: usize,
        shape: (usize, usize),
    },

    #[error("Index out of bounds: index {index:?} for shape {shape:?}")]
    IndexOutOfBounds {
        index: (usize, usize),
        shape: (usize, usize),
    },

    #[error("Backend decomposition failed during {operation}")]
    DecompositionFailed { operation: String },
}
