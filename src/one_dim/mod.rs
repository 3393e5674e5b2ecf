//! One-dimensional evaluation pattern shared by piecewise interpolants:
//! segment lookup on a sorted knot sequence, an extrapolation flag,
//! and scalar / slice / allocating evaluation.

use alloc::vec::Vec;
use num_traits::Float;

use crate::PchipError;

/// Extrapolation flag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Extrap {
    Inside,
    OutsideLow,
    OutsideHigh,
}

/// Find the segment whose cubic is used at `loc`, along with whether `loc`
/// lies outside the knot range.
///
/// The segment is the one starting at the rightmost knot not exceeding `loc`,
/// so a query exactly on a knot attaches to the segment starting there.
/// The index is clipped to `[0, n-2]`; queries past either end use the
/// nearest boundary segment. NaN maps to segment 0 and `Inside`.
///
/// Requires `knots.len() >= 2`.
#[inline]
pub fn locate<T: Float>(knots: &[T], loc: T) -> (usize, Extrap) {
    let n = knots.len();
    let i = knots
        .partition_point(|v| *v <= loc)
        .saturating_sub(1)
        .min(n - 2);

    let extrap = match loc {
        x if x < knots[0] => Extrap::OutsideLow,
        x if x > knots[n - 1] => Extrap::OutsideHigh,
        _ => Extrap::Inside,
    };

    (i, extrap)
}

/// A one-dimensional interpolant.
pub trait Interp1D<T: Float> {
    /// Evaluate the interpolant at an observation point.
    ///
    /// It is highly recommended to inline implementations of this function.
    fn eval_one(&self, loc: T) -> T;

    /// Evaluate the interpolant at a set of observation points,
    /// preserving their order.
    ///
    /// # Errors
    /// * [`PchipError::Shape`] if `locs` and `out` differ in length
    #[inline]
    fn eval(&self, locs: &[T], out: &mut [T]) -> Result<(), PchipError> {
        if locs.len() != out.len() {
            return Err(PchipError::Shape {
                x_len: locs.len(),
                y_len: out.len(),
            });
        }

        for i in 0..locs.len() {
            out[i] = self.eval_one(locs[i]);
        }

        Ok(())
    }

    /// Evaluate the interpolant at a set of observation points, allocating
    /// for the output values for convenience.
    #[inline]
    fn eval_alloc(&self, locs: &[T]) -> Vec<T> {
        locs.iter().map(|&loc| self.eval_one(loc)).collect()
    }
}
