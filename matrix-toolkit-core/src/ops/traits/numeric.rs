use nalgebra::RealField;

/// A trait representing the element types usable in matrix-toolkit operations.
///
/// This trait bounds the types (`f32`, `f64`) that every backend routine
/// accepts. `RealField` already brings arithmetic, comparison, `Display`,
/// `Debug`, `Send`, `Sync` and the conversions from `f64` used for tolerances.
pub trait MatrixElement: RealField + Copy {}

// The compiler checks if f32/f64 satisfy all the bounds of MatrixElement.
impl MatrixElement for f32 {}
impl MatrixElement for f64 {}
