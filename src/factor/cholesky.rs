//! Cholesky factorization (Cholesky–Banachiewicz)
//!
//! Decomposes a symmetric positive-definite matrix into a lower-triangular
//! factor L with L·Lᵗ = A.

use crate::error::DecompositionError;
use crate::traits::RealField;
use ndarray::Array2;

/// Compute the lower-triangular Cholesky factor L of `a`.
///
/// Precondition: `a` is symmetric. The caller checks this beforehand (see
/// [`crate::matrix::is_symmetric`]); it is not re-verified here.
/// Positive-definiteness is NOT a precondition — it cannot be detected
/// without attempting the factorization, so a negative radicand on the
/// diagonal or a zero diagonal divisor is reported as
/// [`DecompositionError::NumericDomain`] instead of propagating NaN/inf.
///
/// Entries are filled strictly row by row with `j` from 0 to `i`; every
/// `L[j][j]` is computed before any `L[i][j]` below it divides by it. This
/// ordering is load-bearing.
pub fn cholesky<R: RealField>(a: &Array2<R>) -> Result<Array2<R>, DecompositionError> {
    let n = a.nrows();
    let mut lower = Array2::zeros((n, n));

    for i in 0..n {
        for j in 0..=i {
            if i == j {
                let mut sum = R::zero();
                for k in 0..j {
                    sum += lower[[j, k]] * lower[[j, k]];
                }
                let radicand = a[[j, j]] - sum;
                if radicand < R::zero() {
                    return Err(DecompositionError::NumericDomain { row: j });
                }
                lower[[j, j]] = radicand.sqrt();
            } else {
                let mut sum = R::zero();
                for k in 0..j {
                    sum += lower[[i, k]] * lower[[j, k]];
                }
                let diag = lower[[j, j]];
                if diag == R::zero() {
                    return Err(DecompositionError::NumericDomain { row: j });
                }
                lower[[i, j]] = (a[[i, j]] - sum) / diag;
            }
        }
    }

    Ok(lower)
}
