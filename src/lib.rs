//! Direct decompositions for small dense linear systems
//!
//! This crate provides the numeric core behind a matrix-calculator front
//! end: determinant, Cholesky, and Doolittle LU decompositions over dense
//! matrices, with forward/back substitution for the follow-up solves.
//!
//! # Features
//!
//! - **Determinant**: Gaussian elimination with row-swap pivoting
//! - **Cholesky**: L·Lᵗ factorization for symmetric positive-definite matrices
//! - **Doolittle**: unit-lower L and upper U with L·U = A (unpivoted)
//! - **Triangular Solves**: forward and back substitution
//! - **Engine**: operation dispatch with precondition checks and labeled errors
//! - **Generic Scalar Types**: works with f64 and f32
//!
//! # Example
//!
//! ```
//! use math_decomp::{run, EngineOutput, Operation};
//! use ndarray::{array, Array1};
//!
//! let a = array![[2.0_f64, 1.0], [1.0, 1.0]];
//! let b: Array1<f64> = array![3.0, 2.0];
//!
//! let output = run(Operation::Doolittle, &a, Some(&b)).unwrap();
//! let decomposition = match output {
//!     EngineOutput::Decomposition(d) => d,
//!     _ => unreachable!(),
//! };
//! let x = decomposition.x.unwrap();
//! assert!((x[0] - 1.0).abs() < 1e-9 && (x[1] - 1.0).abs() < 1e-9);
//! ```

pub mod determinant;
pub mod engine;
pub mod error;
pub mod factor;
pub mod matrix;
pub mod substitution;
pub mod traits;

// Re-export main types
pub use error::DecompositionError;
pub use traits::RealField;

// Re-export the numeric core
pub use determinant::determinant;
pub use factor::{cholesky, doolittle};
pub use substitution::{solve_lower, solve_upper};

// Re-export the engine
pub use engine::{
    run, Decomposition, DirectEngine, EngineOutput, LinearAlgebraEngine, Operation,
};

// Re-export matrix helpers
pub use matrix::{is_square, is_symmetric, transpose};
