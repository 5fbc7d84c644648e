// src/matrix/debug.rs
use crate::matrix::Matrix;
use std::fmt;

impl<T: fmt::Debug> fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Matrix(shape={:?}, data={:?})", self.shape(), self.data)
    }
}

/// Prints the matrix one row per line with right-aligned columns:
///
/// ```text
/// [[3 3]
///  [3 3]]
/// ```
///
/// A precision given in the format string (`{:.3}`) is applied to every element.
impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cells: Vec<String> = self
            .data
            .iter()
            .map(|x| match f.precision() {
                Some(p) => format!("{:.*}", p, x),
                None => format!("{}", x),
            })
            .collect();
        let width = cells.iter().map(|c| c.len()).max().unwrap_or(0);

        for (i, row) in cells.chunks(self.cols).enumerate() {
            f.write_str(if i == 0 { "[[" } else { " [" })?;
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:>width$}", cell, width = width)?;
            }
            f.write_str("]")?;
            if i + 1 < self.rows {
                f.write_str("\n")?;
            }
        }
        f.write_str("]")
    }
}
