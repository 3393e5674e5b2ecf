//! Initial (unconstrained) derivative estimates at each knot.
//!
//! Each knot's derivative comes from differentiating a local polynomial fit
//! through the next few knots, written in closed form over the divided
//! differences. Knots too close to the right end to have a full set of
//! forward neighbors reuse the last complete fit instead, evaluated as a
//! single polynomial in `x`.
use alloc::vec;
use alloc::vec::Vec;
use num_traits::Float;

use super::ladder::DividedDifferences;
use crate::ApproxOrder;

/// Estimate the derivative at every knot with the selected fit order.
pub(crate) fn approx_derivatives<T: Float>(
    order: ApproxOrder,
    x: &[T],
    dd: &DividedDifferences<T>,
) -> Vec<T> {
    match order {
        ApproxOrder::Cubic => cubic(x, dd),
        ApproxOrder::Quartic => quartic(x, dd),
    }
}

/// Four-point cubic fit.
///
/// Knots `0..n-3` use the fit starting at the knot itself.
/// Knots `n-3..n` use the fit through the last four knots.
fn cubic<T: Float>(x: &[T], dd: &DividedDifferences<T>) -> Vec<T> {
    let n = x.len();
    let (s, ds, e) = (&dd.s, &dd.ds, &dd.e);
    let mut d = vec![T::zero(); n];

    let two = T::one() + T::one();
    let three = two + T::one();

    for k in 0..n - 3 {
        let (x0, x1, x2) = (x[k], x[k + 1], x[k + 2]);
        d[k] = s[k] + ds[k] * (x0 - x1) + e[k] * (x0 * x0 + x1 * x2 - x0 * x1 - x0 * x2);
    }

    // Trailing fit, as a quadratic in x
    let m = n - 4;
    let (x0, x1, x2) = (x[m], x[m + 1], x[m + 2]);
    let w1 = three * e[m];
    let w2 = two * (ds[m] - e[m] * (x0 + x1 + x2));
    let rest = s[m] - ds[m] * (x0 + x1) + e[m] * (x0 * x1 + x0 * x2 + x1 * x2);
    for k in n - 3..n {
        let xk = x[k];
        d[k] = w1 * xk * xk + w2 * xk + rest;
    }

    d
}

/// Five-point quartic fit.
///
/// Knots `0..n-4` use the fit starting at the knot itself.
/// Knots `n-4..n` use the fit through the last five knots.
fn quartic<T: Float>(x: &[T], dd: &DividedDifferences<T>) -> Vec<T> {
    let n = x.len();
    let (s, ds, e, f) = (&dd.s, &dd.ds, &dd.e, &dd.f);
    let mut d = vec![T::zero(); n];

    let two = T::one() + T::one();
    let three = two + T::one();
    let four = two + two;

    for k in 0..n - 4 {
        let (x0, x1, x2, x3) = (x[k], x[k + 1], x[k + 2], x[k + 3]);
        d[k] = s[k]
            + ds[k] * (x0 - x1)
            + e[k] * (x0 * (x0 - x1 - x2) + x1 * x2)
            + f[k]
                * (x0 * x0 * (x0 - x1 - x2 - x3) + x0 * (x1 * x2 + x1 * x3 + x2 * x3)
                    - x1 * x2 * x3);
    }

    // Trailing fit, as a cubic in x
    let m = n - 5;
    let (x0, x1, x2, x3) = (x[m], x[m + 1], x[m + 2], x[m + 3]);
    let w1 = four * f[m];
    let w2 = three * (e[m] - f[m] * (x0 + x1 + x2 + x3));
    let w3 = two
        * (ds[m] - e[m] * (x0 + x1 + x2)
            + f[m] * (x0 * (x1 + x2 + x3) + x1 * x2 + x1 * x3 + x2 * x3));
    let rest = s[m] - ds[m] * (x0 + x1) + e[m] * (x0 * x1 + x0 * x2 + x1 * x2)
        - f[m] * (x1 * x2 * x3 + x0 * (x1 * x2 + x1 * x3 + x2 * x3));
    for k in n - 4..n {
        let xk = x[k];
        d[k] = w1 * xk * xk * xk + w2 * xk * xk + w3 * xk + rest;
    }

    d
}
