//! Monotonicity limiting of the raw derivative estimates.
//!
//! Each rule shrinks a raw derivative toward zero, using [`minmod`] against
//! bounds built from the neighboring secants, so that the Hermite cubics
//! cannot introduce extrema that disagree with the local trend of the data.
//!
//! * `M3` bounds each knot by three times the smaller adjacent secant,
//!   relaxed by an extended-secant predictor on the interior.
//! * `M4` additionally brings in second-derivative-corrected predictors from
//!   third-order differences on knots with enough neighbors on both sides.
//!
//! References
//! * H. T. Huynh, "Accurate monotone cubic interpolation",
//!   SIAM J. Numer. Anal. 30 (1993)
use alloc::vec::Vec;
use itertools::Itertools;
use num_traits::Float;

use super::ladder::DividedDifferences;
use crate::MonoConstraint;

/// Sign of `v` as -1, 0 or 1. NaN propagates.
#[inline]
pub(crate) fn sign<T: Float>(v: T) -> T {
    if v > T::zero() {
        T::one()
    } else if v < T::zero() {
        -T::one()
    } else {
        // Zero stays zero, NaN stays NaN
        v * T::zero()
    }
}

/// Sign-preserving shrink toward zero: the argument with the smaller
/// magnitude if both have the same sign, otherwise zero.
///
/// ```rust
/// use pchips::minmod;
///
/// assert_eq!(minmod(3.0, 5.0), 3.0);
/// assert_eq!(minmod(-3.0, 5.0), 0.0);
/// assert_eq!(minmod(-3.0, -5.0), -3.0);
/// assert_eq!(minmod(0.0, 7.0), 0.0);
/// ```
#[inline]
pub fn minmod<T: Float>(a: T, b: T) -> T {
    let two = T::one() + T::one();
    (sign(a) + sign(b)) / two * a.abs().min(b.abs())
}

/// Limit the raw derivatives `d` in place with the selected rule.
pub(crate) fn limit_derivatives<T: Float>(
    constraint: MonoConstraint,
    x: &[T],
    dd: &DividedDifferences<T>,
    d: &mut [T],
) {
    match constraint {
        MonoConstraint::M3 => m3(x, dd, d),
        MonoConstraint::M4 => m4(x, dd, d),
    }
}

/// Pairwise minmod of neighbors, one shorter than the input.
fn pairwise_minmod<T: Float>(v: &[T]) -> Vec<T> {
    v.iter()
        .tuple_windows()
        .map(|(&a, &b)| minmod(a, b))
        .collect()
}

/// Slope bounds shared by both rules.
struct Bounds<T> {
    three: T,
    half_three: T,
    /// `minmod(s[k], s[k+1])`, length n-2
    smin: Vec<T>,
    /// `minmod(ds[k], ds[k+1])`, length n-3
    dmin: Vec<T>,
}

impl<T: Float> Bounds<T> {
    fn new(dd: &DividedDifferences<T>) -> Self {
        let two = T::one() + T::one();
        let three = two + T::one();
        Self {
            three,
            half_three: three / two,
            smin: pairwise_minmod(&dd.s),
            dmin: pairwise_minmod(&dd.ds),
        }
    }

    /// Extended-secant consensus at knot `k`: the parabolas through the
    /// segments on either side, each extrapolated to `x[k]`.
    /// Valid for `2 <= k <= n-3`.
    #[inline]
    fn predictor(&self, x: &[T], s: &[T], k: usize) -> T {
        let p1 = s[k - 1] + self.dmin[k - 2] * (x[k] - x[k - 1]);
        let p2 = s[k] + self.dmin[k - 1] * (x[k] - x[k + 1]);
        minmod(p1, p2)
    }

    /// The 3-point interior clamp at knot `k`, for `2 <= k <= n-3`.
    #[inline]
    fn clamp_3pt(&self, x: &[T], s: &[T], d: T, k: usize) -> T {
        let t = self.predictor(x, s, k);
        let bound = (self.three * self.smin[k - 1].abs()).max(self.half_three * t.abs());
        minmod(d, sign(t) * bound)
    }
}

/// Clamp the two end knots against three times their single adjacent secant.
#[inline]
fn clamp_ends<T: Float>(three: T, s: &[T], d: &mut [T]) {
    let n = d.len();
    d[0] = minmod(d[0], three * s[0]);
    d[n - 1] = minmod(d[n - 1], three * s[n - 2]);
}

/// 3-point rule.
fn m3<T: Float>(x: &[T], dd: &DividedDifferences<T>, d: &mut [T]) {
    let n = x.len();
    let s = &dd.s;
    let b = Bounds::new(dd);

    clamp_ends(b.three, s, d);

    // Next-to-end knots see both adjacent secants
    d[1] = minmod(d[1], b.three * b.smin[0]);
    d[n - 2] = minmod(d[n - 2], b.three * b.smin[n - 3]);

    for k in 2..n - 2 {
        d[k] = b.clamp_3pt(x, s, d[k], k);
    }
}

/// 5-point rule.
fn m4<T: Float>(x: &[T], dd: &DividedDifferences<T>, d: &mut [T]) {
    let n = x.len();
    let (s, ds) = (&dd.s, &dd.ds);
    let b = Bounds::new(dd);
    // `minmod(e[k], e[k+1])`, length n-4
    let emin = pairwise_minmod(&dd.e);
    let h: Vec<T> = x.iter().tuple_windows().map(|(&a, &c)| c - a).collect();

    clamp_ends(b.three, s, d);

    // Next-to-end knots: clamp against the near secant, then the far one
    d[1] = minmod(minmod(d[1], b.three * s[0]), b.three * s[1]);
    d[n - 2] = minmod(minmod(d[n - 2], b.three * s[n - 3]), b.three * s[n - 2]);

    // Third knot from either end; for n = 5 these are the same knot
    d[2] = b.clamp_3pt(x, s, d[2], 2);
    d[n - 3] = b.clamp_3pt(x, s, d[n - 3], n - 3);

    // Full interior, empty for n < 7
    for k in 3..n - 3 {
        let t = b.predictor(x, s, k);

        let q1 = s[k - 1]
            - h[k - 1]
                * minmod(
                    ds[k - 2] + emin[k - 3] * (x[k - 1] - x[k - 2]),
                    ds[k - 1] + emin[k - 2] * (x[k - 1] - x[k + 1]),
                );
        let q2 = s[k]
            - h[k]
                * minmod(
                    ds[k - 1] + emin[k - 2] * (x[k] - x[k - 1]),
                    ds[k] + emin[k - 1] * (x[k] - x[k + 2]),
                );
        let tt = minmod(q1, q2);

        let candidates = [T::zero(), b.three * b.smin[k - 1], b.half_three * t, tt];
        let lo = candidates.iter().fold(T::infinity(), |acc, &v| acc.min(v));
        let hi = candidates.iter().fold(T::neg_infinity(), |acc, &v| acc.max(v));

        d[k] = d[k] + minmod(lo - d[k], hi - d[k]);
    }
}
