//! Direct factorizations for dense linear systems
//!
//! - [`cholesky`]: L·Lᵗ factorization for symmetric positive-definite matrices
//! - [`doolittle`]: unit-lower L and upper U with L·U = A, no pivoting

mod cholesky;
mod doolittle;

pub use cholesky::cholesky;
pub use doolittle::doolittle;
