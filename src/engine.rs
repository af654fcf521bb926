//! Operation dispatch over the decomposition routines
//!
//! The engine is the single entry point a front end (console, web form,
//! test harness) drives: it receives an [`Operation`] plus an owned matrix
//! and optional right-hand side, runs the precondition checks, invokes the
//! factorizer(s) and triangular solves, and packages the pieces into a
//! [`Decomposition`] the caller can render. Every failure comes back as a
//! [`DecompositionError`] value with a displayable reason; nothing panics
//! across this boundary.

use crate::determinant::determinant;
use crate::error::DecompositionError;
use crate::factor;
use crate::matrix::{is_square, is_symmetric, transpose};
use crate::substitution::{solve_lower, solve_upper};
use crate::traits::RealField;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The operation a caller requests from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Cholesky decomposition (L·Lᵗ = A), optionally followed by a solve.
    Cholesky,
    /// Doolittle LU decomposition (L·U = A), optionally followed by a solve.
    Doolittle,
    /// Determinant only; never consumes a right-hand side.
    Determinant,
}

impl FromStr for Operation {
    type Err = DecompositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cholesky" => Ok(Operation::Cholesky),
            "doolittle" => Ok(Operation::Doolittle),
            "determinant" => Ok(Operation::Determinant),
            other => Err(DecompositionError::UnsupportedOperation(other.to_string())),
        }
    }
}

/// Factors and optional solution vectors produced by a decomposition.
///
/// For Cholesky, `upper` is always the transpose of `lower`. `y` and `x`
/// are present only when a right-hand side was supplied: `y` solves
/// L·y = b and `x` solves U·x = y.
#[derive(Debug, Clone)]
pub struct Decomposition<R: RealField> {
    /// Lower-triangular factor L.
    pub lower: Array2<R>,
    /// Upper-triangular factor (U, or Lᵗ for Cholesky).
    pub upper: Array2<R>,
    /// Intermediate solution of L·y = b.
    pub y: Option<Array1<R>>,
    /// Final solution of the full system A·x = b.
    pub x: Option<Array1<R>>,
}

/// What an engine request produced.
#[derive(Debug, Clone)]
pub enum EngineOutput<R: RealField> {
    /// Scalar determinant.
    Determinant(R),
    /// Factors (and solutions, when a right-hand side was given).
    Decomposition(Decomposition<R>),
}

/// Capability set a linear-algebra engine offers to its callers.
///
/// Abstracting the three operations behind a trait keeps the numeric core
/// free of any presentation dependency: a console, a web handler, and a
/// test harness all drive the same interface with explicit inputs.
pub trait LinearAlgebraEngine<R: RealField> {
    /// Determinant of a square matrix.
    fn determinant(&self, a: &Array2<R>) -> R;

    /// Cholesky decomposition, with an optional follow-up solve of
    /// L·y = b then Lᵗ·x = y.
    fn cholesky(
        &self,
        a: &Array2<R>,
        rhs: Option<&Array1<R>>,
    ) -> Result<Decomposition<R>, DecompositionError>;

    /// Doolittle decomposition, with an optional follow-up solve of
    /// L·y = b then U·x = y.
    fn doolittle(
        &self,
        a: &Array2<R>,
        rhs: Option<&Array1<R>>,
    ) -> Result<Decomposition<R>, DecompositionError>;
}

/// Direct (non-iterative) implementation of [`LinearAlgebraEngine`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectEngine;

impl<R: RealField> LinearAlgebraEngine<R> for DirectEngine {
    fn determinant(&self, a: &Array2<R>) -> R {
        determinant(a)
    }

    fn cholesky(
        &self,
        a: &Array2<R>,
        rhs: Option<&Array1<R>>,
    ) -> Result<Decomposition<R>, DecompositionError> {
        if !is_symmetric(a) {
            log::warn!("cholesky refused: matrix is not symmetric");
            return Err(DecompositionError::NotSymmetric);
        }

        let lower = factor::cholesky(a)?;
        let upper = transpose(&lower);
        let (y, x) = solve_if_requested(&lower, &upper, rhs)?;

        log::debug!("cholesky factorization complete for {}x{} system", a.nrows(), a.ncols());
        Ok(Decomposition { lower, upper, y, x })
    }

    fn doolittle(
        &self,
        a: &Array2<R>,
        rhs: Option<&Array1<R>>,
    ) -> Result<Decomposition<R>, DecompositionError> {
        if determinant(a) == R::zero() {
            log::warn!("doolittle refused: matrix is singular");
            return Err(DecompositionError::Singular);
        }

        let (lower, upper) = factor::doolittle(a)?;
        let (y, x) = solve_if_requested(&lower, &upper, rhs)?;

        log::debug!("doolittle factorization complete for {}x{} system", a.nrows(), a.ncols());
        Ok(Decomposition { lower, upper, y, x })
    }
}

/// Run one operation against a matrix and optional right-hand side.
///
/// This is the convenience entry point mirroring a front end's request
/// cycle: validate squareness, dispatch on the operation, return either a
/// scalar or the packaged factors. The determinant branch ignores `rhs`.
pub fn run<R: RealField>(
    op: Operation,
    a: &Array2<R>,
    rhs: Option<&Array1<R>>,
) -> Result<EngineOutput<R>, DecompositionError> {
    if !is_square(a) {
        return Err(DecompositionError::DimensionMismatch {
            expected: a.nrows(),
            got: a.ncols(),
        });
    }

    log::debug!("dispatching {:?} on {}x{} matrix", op, a.nrows(), a.ncols());
    let engine = DirectEngine;
    match op {
        Operation::Determinant => Ok(EngineOutput::Determinant(engine.determinant(a))),
        Operation::Cholesky => engine.cholesky(a, rhs).map(EngineOutput::Decomposition),
        Operation::Doolittle => engine.doolittle(a, rhs).map(EngineOutput::Decomposition),
    }
}

fn solve_if_requested<R: RealField>(
    lower: &Array2<R>,
    upper: &Array2<R>,
    rhs: Option<&Array1<R>>,
) -> Result<(Option<Array1<R>>, Option<Array1<R>>), DecompositionError> {
    match rhs {
        Some(b) => {
            let y = solve_lower(lower, b)?;
            let x = solve_upper(upper, &y)?;
            Ok((Some(y), Some(x)))
        }
        None => Ok((None, None)),
    }
}
