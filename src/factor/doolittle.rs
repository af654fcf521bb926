//! Doolittle LU factorization
//!
//! Decomposes a non-singular matrix into unit-lower-triangular L and
//! upper-triangular U with L·U = A.
//!
//! No pivoting is performed. The singularity pre-check the engine runs
//! (pivoted Gaussian elimination) is stronger than what this recursion
//! tolerates: a non-singular matrix with a zero leading principal minor
//! still hits a zero `U[i][i]` pivot here. That asymmetry is a documented
//! limitation, kept so L and U keep their established values for every
//! matrix that factorizes today; the zero pivot is reported as
//! [`DecompositionError::SingularSystem`] rather than dividing through.

use crate::error::DecompositionError;
use crate::traits::RealField;
use ndarray::Array2;

/// Compute the Doolittle factors `(lower, upper)` of `a`.
///
/// `lower` has a unit diagonal. Precondition: `a` is non-singular (the
/// caller checks via the determinant engine); this is not re-verified.
///
/// Rows are processed in increasing order, and within each row the U-row
/// entries are computed before the L-column entries that divide by
/// `U[i][i]`.
pub fn doolittle<R: RealField>(
    a: &Array2<R>,
) -> Result<(Array2<R>, Array2<R>), DecompositionError> {
    let n = a.nrows();
    let mut lower = Array2::zeros((n, n));
    let mut upper = Array2::zeros((n, n));

    for i in 0..n {
        for j in i..n {
            let mut sum = R::zero();
            for k in 0..i {
                sum += lower[[i, k]] * upper[[k, j]];
            }
            upper[[i, j]] = a[[i, j]] - sum;
        }

        lower[[i, i]] = R::one();
        for j in (i + 1)..n {
            let pivot = upper[[i, i]];
            if pivot == R::zero() {
                return Err(DecompositionError::SingularSystem { row: i });
            }
            let mut sum = R::zero();
            for k in 0..i {
                sum += lower[[j, k]] * upper[[k, i]];
            }
            lower[[j, i]] = (a[[j, i]] - sum) / pivot;
        }
    }

    Ok((lower, upper))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_doolittle_reconstruction() {
        let a = array![[2.0_f64, -1.0, 3.0], [4.0, 2.0, 1.0], [-6.0, -1.0, 2.0]];

        let (lower, upper) = doolittle(&a).expect("non-singular matrix should factorize");
        let reconstructed = lower.dot(&upper);

        for i in 0..3 {
            for j in 0..3 {
                assert_relative_eq!(reconstructed[[i, j]], a[[i, j]], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_doolittle_unit_diagonal() {
        let a = array![[2.0_f64, 1.0], [1.0, 1.0]];
        let (lower, _) = doolittle(&a).expect("non-singular matrix should factorize");
        assert_eq!(lower[[0, 0]], 1.0);
        assert_eq!(lower[[1, 1]], 1.0);
    }

    #[test]
    fn test_doolittle_triangular_shape() {
        let a = array![[2.0_f64, -1.0, 3.0], [4.0, 2.0, 1.0], [-6.0, -1.0, 2.0]];
        let (lower, upper) = doolittle(&a).expect("non-singular matrix should factorize");

        for i in 0..3 {
            for j in (i + 1)..3 {
                assert_eq!(lower[[i, j]], 0.0);
                assert_eq!(upper[[j, i]], 0.0);
            }
        }
    }

    #[test]
    fn test_doolittle_zero_leading_pivot() {
        // Non-singular (det = -1) but the leading principal minor is zero;
        // without pivoting the first division fails.
        let a = array![[0.0_f64, 1.0], [1.0, 1.0]];
        let result = doolittle(&a);
        assert_eq!(result, Err(DecompositionError::SingularSystem { row: 0 }));
    }

    #[test]
    fn test_doolittle_does_not_mutate_input() {
        let a = array![[2.0_f64, 1.0], [1.0, 1.0]];
        let before = a.clone();
        let _ = doolittle(&a);
        assert_eq!(a, before);
    }
}
