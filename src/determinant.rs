//! Determinant via Gaussian elimination with row-swap pivoting
//!
//! Used standalone and as the singularity pre-check for the Doolittle
//! factorizer. The pivot policy takes the FIRST nonzero entry below the
//! diagonal, not the largest-magnitude one; this matches the factorizers'
//! unpivoted convention rather than being numerically optimal.

use crate::traits::RealField;
use ndarray::Array2;

/// Compute the determinant of a square matrix.
///
/// Operates on a private copy; the caller's matrix is never mutated.
/// Returns exactly zero as soon as a column has no nonzero pivot — a zero
/// determinant is a normal numeric outcome, never an error.
///
/// The caller guarantees a well-formed square matrix; behavior is
/// unspecified for non-square input.
pub fn determinant<R: RealField>(a: &Array2<R>) -> R {
    let n = a.nrows();
    let mut m = a.clone();
    let mut det = R::one();

    for i in 0..n {
        if m[[i, i]] == R::zero() {
            // Scan downward for the first nonzero entry in this column.
            let mut swapped = false;
            for j in (i + 1)..n {
                if m[[j, i]] != R::zero() {
                    for k in 0..n {
                        m.swap([i, k], [j, k]);
                    }
                    det = -det;
                    swapped = true;
                    break;
                }
            }
            if !swapped {
                return R::zero();
            }
        }

        for j in (i + 1)..n {
            let factor = m[[j, i]] / m[[i, i]];
            for k in i..n {
                let update = factor * m[[i, k]];
                m[[j, k]] -= update;
            }
        }
        det *= m[[i, i]];
    }

    det
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::transpose;
    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn test_determinant_2x2() {
        let a = array![[2.0_f64, 1.0], [1.0, 1.0]];
        assert_relative_eq!(determinant(&a), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_determinant_3x3() {
        let a = array![[1.0_f64, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 10.0]];
        assert_relative_eq!(determinant(&a), -3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_determinant_row_swap_flips_sign() {
        // Zero leading pivot forces one row swap.
        let a = array![[0.0_f64, 1.0], [1.0, 0.0]];
        assert_relative_eq!(determinant(&a), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_determinant_zero_row_is_exactly_zero() {
        let a = array![[1.0_f64, 2.0, 3.0], [0.0, 0.0, 0.0], [4.0, 5.0, 6.0]];
        assert_eq!(determinant(&a), 0.0);
    }

    #[test]
    fn test_determinant_singular_short_circuit() {
        let a = array![[1.0_f64, 2.0], [2.0, 4.0]];
        assert_eq!(determinant(&a), 0.0);
    }

    #[test]
    fn test_determinant_transpose_invariance() {
        let a = array![[3.0_f64, 1.0, 2.0], [0.0, 4.0, 1.0], [2.0, 2.0, 5.0]];
        assert_relative_eq!(determinant(&a), determinant(&transpose(&a)), epsilon = 1e-9);
    }

    #[test]
    fn test_determinant_does_not_mutate_input() {
        let a = array![[0.0_f64, 1.0], [1.0, 0.0]];
        let before = a.clone();
        let _ = determinant(&a);
        assert_eq!(a, before);
    }
}
