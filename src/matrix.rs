//! Dense matrix predicates and helpers
//!
//! Shared by the factorizers and the engine:
//! - [`is_square`] / [`is_symmetric`]: precondition checks run before a
//!   decomposition is attempted
//! - [`transpose`]: owned transpose, used to derive the Cholesky upper
//!   factor from L

use crate::traits::RealField;
use ndarray::Array2;

/// Check that the matrix has as many rows as columns.
pub fn is_square<R: RealField>(a: &Array2<R>) -> bool {
    a.nrows() == a.ncols()
}

/// Check symmetry with exact element comparison.
///
/// Exact `==` is intentional: the inputs are user-entered values, and a
/// matrix that is only approximately symmetric is refused rather than
/// silently symmetrized.
pub fn is_symmetric<R: RealField>(a: &Array2<R>) -> bool {
    if !is_square(a) {
        return false;
    }
    let n = a.nrows();
    for i in 0..n {
        for j in (i + 1)..n {
            if a[[i, j]] != a[[j, i]] {
                return false;
            }
        }
    }
    true
}

/// Owned transpose of a dense matrix.
pub fn transpose<R: RealField>(a: &Array2<R>) -> Array2<R> {
    a.t().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_is_square() {
        let a = array![[1.0_f64, 2.0], [3.0, 4.0]];
        assert!(is_square(&a));

        let b = Array2::<f64>::zeros((2, 3));
        assert!(!is_square(&b));
    }

    #[test]
    fn test_is_symmetric() {
        let a = array![[4.0_f64, 12.0], [12.0, 37.0]];
        assert!(is_symmetric(&a));

        let b = array![[1.0_f64, 2.0], [3.0, 4.0]];
        assert!(!is_symmetric(&b));
    }

    #[test]
    fn test_non_square_is_not_symmetric() {
        let a = Array2::<f64>::zeros((2, 3));
        assert!(!is_symmetric(&a));
    }

    #[test]
    fn test_transpose() {
        let a = array![[1.0_f64, 2.0], [3.0, 4.0]];
        let at = transpose(&a);
        assert_eq!(at, array![[1.0, 3.0], [2.0, 4.0]]);
    }
}
