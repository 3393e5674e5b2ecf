//! Divided differences of orders 1 through 4.

use alloc::vec::Vec;
use num_traits::Float;

/// Divided-difference ladder of the values with respect to the knots.
///
/// Lengths are `n-1`, `n-2`, `n-3` and `n-4` for `n` knots.
#[derive(Clone, Debug)]
pub(crate) struct DividedDifferences<T> {
    /// First order (secants)
    pub s: Vec<T>,
    /// Second order
    pub ds: Vec<T>,
    /// Third order
    pub e: Vec<T>,
    /// Fourth order
    pub f: Vec<T>,
}

impl<T: Float> DividedDifferences<T> {
    /// Build the ladder. Requires `x.len() == y.len() >= 5` and strictly
    /// increasing `x`.
    pub fn new(x: &[T], y: &[T]) -> Self {
        let s = next_order(x, y, 0);
        let ds = next_order(x, &s, 1);
        let e = next_order(x, &ds, 2);
        let f = next_order(x, &e, 3);
        Self { s, ds, e, f }
    }
}

/// One rung: `(prev[i+1] - prev[i]) / (x[i+k+1] - x[i])` where `k` is the
/// order of `prev` (0 for the values themselves).
#[inline]
fn next_order<T: Float>(x: &[T], prev: &[T], k: usize) -> Vec<T> {
    (0..prev.len() - 1)
        .map(|i| (prev[i + 1] - prev[i]) / (x[i + k + 1] - x[i]))
        .collect()
}
