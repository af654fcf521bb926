//! Scalar abstraction for the decomposition routines
//!
//! Every routine in this crate is generic over [`RealField`], so the same
//! code serves `f64` (the default for user-entered systems) and `f32`.
//!
//! The field is deliberately real-only: the determinant engine scans for
//! nonzero pivots with exact comparisons, and the Cholesky factorizer must
//! test the sign of a radicand before taking a square root — both need a
//! totally ordered scalar with a real `sqrt`.

use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::Debug;

/// Scalar types the decomposition routines operate on.
///
/// `Float` supplies ordering, `sqrt`, and negation; `NumAssign` the
/// compound-assignment operators used in the elimination loops.
pub trait RealField:
    Float + NumAssign + FromPrimitive + Debug + Send + Sync + 'static
{
}

impl RealField for f64 {}
impl RealField for f32 {}
