//! Numeric tolerances used by the operations that have to decide whether a
//! floating-point quantity is "zero".

/// Relative thresholds for singularity, symmetry and eigenvalue checks.
///
/// Every value is compared against a ratio, so multiplying a matrix by a
/// nonzero constant never changes the outcome of a check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    /// A matrix is singular when its smallest LU pivot is at or below
    /// `singular` times its largest pivot (`min|U_ii| <= singular · max|U_ii|`).
    pub singular: f64,
    /// Largest allowed `|A[i][j] - A[j][i]| / max|a_ij|` for a matrix to count as symmetric.
    pub symmetry: f64,
    /// Eigenvalues closer than `eigen_cluster · max|a_ij|` are treated as one
    /// repeated eigenvalue when building eigenvectors. A singular value of
    /// `A - λI` at most `eigen_cluster` times the largest counts as zero.
    pub eigen_cluster: f64,
}

impl Tolerances {
    pub const DEFAULT_SINGULAR: f64 = 1e-12;
    pub const DEFAULT_SYMMETRY: f64 = 1e-10;
    pub const DEFAULT_EIGEN_CLUSTER: f64 = 1e-8;

    pub fn new(singular: f64, symmetry: f64, eigen_cluster: f64) -> Self {
        Tolerances {
            singular,
            symmetry,
            eigen_cluster,
        }
    }

    pub fn with_singular(mut self, singular: f64) -> Self {
        self.singular = singular;
        self
    }

    pub fn with_symmetry(mut self, symmetry: f64) -> Self {
        self.symmetry = symmetry;
        self
    }

    pub fn with_eigen_cluster(mut self, eigen_cluster: f64) -> Self {
        self.eigen_cluster = eigen_cluster;
        self
    }
}

impl Default for Tolerances {
    fn default() -> Self {
        Tolerances {
            singular: Self::DEFAULT_SINGULAR,
            symmetry: Self::DEFAULT_SYMMETRY,
            eigen_cluster: Self::DEFAULT_EIGEN_CLUSTER,
        }
    }
}
