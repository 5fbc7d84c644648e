pub mod numeric;

pub use numeric::MatrixElement;
