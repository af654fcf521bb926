//! Forward and back substitution for triangular systems
//!
//! Two pure functions, no shared state:
//! - [`solve_lower`]: forward substitution for L·y = b
//! - [`solve_upper`]: back substitution for U·x = y
//!
//! Both validate shapes up front and report a zero diagonal divisor as
//! [`DecompositionError::SingularSystem`] — the factors produced upstream
//! are expected to have a nonzero diagonal, so hitting one here means the
//! factorizer/solver contract was violated.

use crate::error::DecompositionError;
use crate::traits::RealField;
use ndarray::{Array1, Array2};

/// Solve L·y = b by forward substitution.
pub fn solve_lower<R: RealField>(
    lower: &Array2<R>,
    b: &Array1<R>,
) -> Result<Array1<R>, DecompositionError> {
    let n = check_shapes(lower, b)?;
    let mut y = Array1::zeros(n);

    for i in 0..n {
        let mut sum = R::zero();
        for j in 0..i {
            sum += lower[[i, j]] * y[j];
        }
        let diag = lower[[i, i]];
        if diag == R::zero() {
            return Err(DecompositionError::SingularSystem { row: i });
        }
        y[i] = (b[i] - sum) / diag;
    }

    Ok(y)
}

/// Solve U·x = y by back substitution.
pub fn solve_upper<R: RealField>(
    upper: &Array2<R>,
    y: &Array1<R>,
) -> Result<Array1<R>, DecompositionError> {
    let n = check_shapes(upper, y)?;
    let mut x = Array1::zeros(n);

    for i in (0..n).rev() {
        let mut sum = R::zero();
        for j in (i + 1)..n {
            sum += upper[[i, j]] * x[j];
        }
        let diag = upper[[i, i]];
        if diag == R::zero() {
            return Err(DecompositionError::SingularSystem { row: i });
        }
        x[i] = (y[i] - sum) / diag;
    }

    Ok(x)
}

fn check_shapes<R: RealField>(
    a: &Array2<R>,
    b: &Array1<R>,
) -> Result<usize, DecompositionError> {
    let n = a.nrows();
    if a.ncols() != n {
        return Err(DecompositionError::DimensionMismatch {
            expected: n,
            got: a.ncols(),
        });
    }
    if b.len() != n {
        return Err(DecompositionError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }
    Ok(n)
}
