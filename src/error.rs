//! Errors shared across the decomposition routines
//!
//! Every fallible operation in the crate reports through
//! [`DecompositionError`]; the `Display` text is the human-readable reason
//! a caller can show directly.

use thiserror::Error;

/// Errors that can occur while validating, factorizing, or solving.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecompositionError {
    /// Cholesky requested on a matrix that is not symmetric.
    #[error("matrix must be symmetric")]
    NotSymmetric,
    /// Doolittle requested on a matrix whose determinant is exactly zero.
    #[error("matrix is singular")]
    Singular,
    /// Cholesky hit a negative radicand or a zero diagonal divisor: the
    /// input passed the symmetry check but is not positive-definite.
    #[error("numeric domain error: matrix is not positive-definite (row {row})")]
    NumericDomain { row: usize },
    /// A zero pivot was encountered during an unpivoted factorization or a
    /// triangular solve. If upstream validation held, this indicates a
    /// contract violation between factorizer and solver.
    #[error("zero pivot encountered at row {row}")]
    SingularSystem { row: usize },
    /// Matrix/vector sizes disagree, or the matrix is not square.
    #[error("matrix dimensions mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
    /// The requested operation name is not one the engine knows.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),
}
