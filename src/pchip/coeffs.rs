//! Hermite data to power-basis segment coefficients.

use alloc::vec::Vec;
use itertools::izip;
use num_traits::Float;

/// Build one `[c3, c2, c1, c0]` row per segment, in powers of `(x - x[i])`.
pub(crate) fn hermite_coeffs<T: Float>(x: &[T], y: &[T], d: &[T]) -> Vec<[T; 4]> {
    let two = T::one() + T::one();
    let three = two + T::one();

    izip!(x.windows(2), y.windows(2), d.windows(2))
        .map(|(xw, yw, dw)| {
            let h = xw[1] - xw[0];
            let delta = (yw[1] - yw[0]) / h;
            let (d0, d1) = (dw[0], dw[1]);

            let c3 = (d0 - two * delta + d1) / (h * h);
            let c2 = (three * delta - two * d0 - d1) / h;
            [c3, c2, d0, yw[0]]
        })
        .collect()
}

/// Evaluate one segment's cubic at offset `s` from its left knot.
#[inline(always)]
pub(crate) fn horner<T: Float>(c: &[T; 4], s: T) -> T {
    let [c3, c2, c1, c0] = *c;
    c0 + s * (c1 + s * (c2 + s * c3))
}

/// First derivative of one segment's cubic at offset `s`.
#[inline(always)]
pub(crate) fn horner_deriv<T: Float>(c: &[T; 4], s: T) -> T {
    let [c3, c2, c1, _] = *c;
    let two = T::one() + T::one();
    let three = two + T::one();
    c1 + s * (two * c2 + s * three * c3)
}
