//! Monotone piecewise cubic Hermite interpolation.
//!
//! Construction runs three stages once, on the sorted samples:
//! 1. Derivative estimation from a local cubic or quartic fit
//!    ([`ApproxOrder`])
//! 2. Monotonicity limiting of those derivatives with the 3-point or
//!    5-point rule ([`MonoConstraint`])
//! 3. Conversion to one power-basis cubic per segment
//!
//! Evaluation then only locates the segment and runs Horner's method,
//! so a built interpolator can be shared freely between threads.
//!
//! ```rust
//! use pchips::{Interp1D, Pchip, PchipOptions};
//!
//! // Samples, in any order
//! let x = [0.0_f64, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [0.0_f64, 1.0, 0.0, 1.0, 0.0, 1.0];
//!
//! let interpolator = Pchip::new(&x, &y, PchipOptions::default()).unwrap();
//!
//! // Interpolate one point
//! let v = interpolator.eval_one(0.5);
//! assert!(v > 0.0 && v < 1.0);
//!
//! // Interpolate / extrapolate several points
//! let obs = [-1.0, 2.5, 6.0];
//! let mut out = [0.0; 3];
//! interpolator.eval(&obs, &mut out).unwrap();
//! ```
//!
//! References
//! * H. T. Huynh, "Accurate monotone cubic interpolation",
//!   SIAM J. Numer. Anal. 30 (1993)
//! * F. N. Fritsch and R. E. Carlson, "Monotone piecewise cubic interpolation",
//!   SIAM J. Numer. Anal. 17 (1980)
use alloc::vec::Vec;
use core::cmp::Ordering;
use num_traits::Float;

use crate::one_dim::{locate, Extrap, Interp1D};
use crate::{PchipError, PchipOptions, MIN_KNOTS};

pub(crate) mod coeffs;
pub(crate) mod estimate;
pub(crate) mod ladder;
pub(crate) mod limit;

use coeffs::{hermite_coeffs, horner, horner_deriv};
use estimate::approx_derivatives;
use ladder::DividedDifferences;
use limit::limit_derivatives;

/// A monotonicity-preserving piecewise cubic interpolant.
///
/// Owns its sorted knots and values, the limited derivative at each knot,
/// and the per-segment coefficient table. Nothing changes after
/// construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Pchip<T> {
    options: PchipOptions,

    /// Sorted, strictly increasing knots
    knots: Vec<T>,

    /// Values at each knot
    values: Vec<T>,

    /// Limited derivative at each knot
    derivs: Vec<T>,

    /// `[c3, c2, c1, c0]` per segment, in powers of `(x - knots[i])`
    coeffs: Vec<[T; 4]>,
}

impl<T: Float> Pchip<T> {
    /// Build an interpolator from samples in any order.
    ///
    /// Samples are sorted by ascending `x` (stable, keeping each `y` with its
    /// `x`) before anything else is computed.
    ///
    /// # Errors
    /// * [`PchipError::Shape`] if `x` and `y` differ in length
    /// * [`PchipError::Size`] if there are fewer than five samples
    /// * [`PchipError::NonFinite`] if any sample is NaN or infinite
    /// * [`PchipError::DegenerateAbscissa`] if any two knots coincide
    pub fn new(x: &[T], y: &[T], options: PchipOptions) -> Result<Self, PchipError> {
        if x.len() != y.len() {
            return Err(PchipError::Shape {
                x_len: x.len(),
                y_len: y.len(),
            });
        }

        let n = x.len();
        if n < MIN_KNOTS {
            return Err(PchipError::Size { len: n });
        }

        if let Some(index) = x
            .iter()
            .zip(y)
            .position(|(a, b)| !(a.is_finite() && b.is_finite()))
        {
            return Err(PchipError::NonFinite { index });
        }

        // Stable sort on knots, keeping values aligned
        let mut pairs: Vec<(T, T)> = x.iter().copied().zip(y.iter().copied()).collect();
        pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        let (knots, values): (Vec<T>, Vec<T>) = pairs.into_iter().unzip();

        if let Some(index) = knots.windows(2).position(|w| w[1] - w[0] <= T::zero()) {
            return Err(PchipError::DegenerateAbscissa { index });
        }

        // Everything below is infallible; results stay local until done
        let dd = DividedDifferences::new(&knots, &values);
        let mut derivs = approx_derivatives(options.order, &knots, &dd);
        limit_derivatives(options.constraint, &knots, &dd, &mut derivs);
        let coeffs = hermite_coeffs(&knots, &values, &derivs);

        Ok(Self {
            options,
            knots,
            values,
            derivs,
            coeffs,
        })
    }

    /// Build with the default options (cubic derivative estimate, M3 limiter).
    pub fn with_defaults(x: &[T], y: &[T]) -> Result<Self, PchipError> {
        Self::new(x, y, PchipOptions::default())
    }

    /// Build with options given by name, like `"quartic"` and `"M4"`.
    ///
    /// The names are checked before the samples.
    ///
    /// # Errors
    /// * [`PchipError::UnsupportedOrder`] or [`PchipError::UnsupportedConstraint`]
    ///   for unknown names
    /// * Any error from [`Pchip::new`]
    pub fn from_names(
        x: &[T],
        y: &[T],
        approx_order: &str,
        mono_constraint: &str,
    ) -> Result<Self, PchipError> {
        let options = PchipOptions::parse(approx_order, mono_constraint)?;
        Self::new(x, y, options)
    }

    pub fn options(&self) -> PchipOptions {
        self.options
    }

    /// Sorted knots.
    pub fn knots(&self) -> &[T] {
        &self.knots
    }

    /// Values, aligned with [`Pchip::knots`].
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Limited derivative at each knot.
    pub fn derivatives(&self) -> &[T] {
        &self.derivs
    }

    /// Per-segment `[c3, c2, c1, c0]` rows.
    pub fn coefficients(&self) -> &[[T; 4]] {
        &self.coeffs
    }

    /// Number of knots.
    pub fn len(&self) -> usize {
        self.knots.len()
    }

    /// Always false; construction requires at least five knots.
    pub fn is_empty(&self) -> bool {
        self.knots.is_empty()
    }

    /// Segment used at `loc`, and whether `loc` is outside the knot range.
    #[inline]
    pub fn locate(&self, loc: T) -> (usize, Extrap) {
        locate(&self.knots, loc)
    }

    /// First derivative of the interpolant at `loc`.
    #[inline]
    pub fn eval_deriv_one(&self, loc: T) -> T {
        let (i, _) = self.locate(loc);
        horner_deriv(&self.coeffs[i], loc - self.knots[i])
    }
}

impl<T: Float> Interp1D<T> for Pchip<T> {
    /// Interpolated value at `loc`. Outside the knot range, the boundary
    /// segment's cubic is extended. NaN in gives NaN out.
    #[inline]
    fn eval_one(&self, loc: T) -> T {
        let (i, _) = self.locate(loc);
        horner(&self.coeffs[i], loc - self.knots[i])
    }
}

/// Build a default (cubic / M3) interpolator and evaluate it at `obs`.
///
/// This is a convenience function; when evaluating the same data more than
/// once, build a [`Pchip`] and reuse it.
pub fn interp<T: Float>(x: &[T], y: &[T], obs: &[T], out: &mut [T]) -> Result<(), PchipError> {
    Pchip::with_defaults(x, y)?.eval(obs, out)
}

/// Like [`interp`], allocating for the output.
pub fn interp_alloc<T: Float>(x: &[T], y: &[T], obs: &[T]) -> Result<Vec<T>, PchipError> {
    Ok(Pchip::with_defaults(x, y)?.eval_alloc(obs))
}

#[cfg(all(test, feature = "std"))]
mod test {
    use super::*;
    use crate::testing::*;
    use crate::utils::linspace;
    use crate::{ApproxOrder, MonoConstraint};

    const X: [f64; 8] = [0.0, 0.7, 1.1, 2.0, 2.2, 3.5, 4.0, 5.3];
    const Y: [f64; 8] = [1.0, 1.8, 0.4, 0.5, 2.6, 2.0, -1.0, 0.3];

    #[test]
    fn test_shape_error() {
        let err = Pchip::with_defaults(&[0.0, 1.0, 2.0, 3.0, 4.0], &[0.0; 6]).unwrap_err();
        assert_eq!(err, PchipError::Shape { x_len: 5, y_len: 6 });
    }

    #[test]
    fn test_size_error() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [0.0, 1.0, 4.0, 9.0];
        assert_eq!(
            Pchip::with_defaults(&x, &y).unwrap_err(),
            PchipError::Size { len: 4 }
        );
        assert_eq!(
            Pchip::<f64>::with_defaults(&[], &[]).unwrap_err(),
            PchipError::Size { len: 0 }
        );
    }

    #[test]
    fn test_non_finite_error() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [0.0, 1.0, f64::NAN, 9.0, 16.0];
        assert_eq!(
            Pchip::with_defaults(&x, &y).unwrap_err(),
            PchipError::NonFinite { index: 2 }
        );

        let x = [0.0, 1.0, 2.0, 3.0, f64::INFINITY];
        let y = [0.0; 5];
        assert_eq!(
            Pchip::with_defaults(&x, &y).unwrap_err(),
            PchipError::NonFinite { index: 4 }
        );
    }

    #[test]
    fn test_duplicate_knots_rejected() {
        // Duplicate is only adjacent after sorting
        let x = [3.0, 1.0, 0.0, 4.0, 1.0];
        let y = [0.0, 1.0, 2.0, 3.0, 4.0];
        assert_eq!(
            Pchip::with_defaults(&x, &y).unwrap_err(),
            PchipError::DegenerateAbscissa { index: 1 }
        );
    }

    /// Unknown option names fail before the samples are looked at,
    /// even when the samples are invalid too.
    #[test]
    fn test_unknown_names_rejected_first() {
        let x = [0.0, 1.0, 2.0];
        let y = [0.0, 1.0];
        assert_eq!(
            Pchip::from_names(&x, &y, "quintic", "M3").unwrap_err(),
            PchipError::UnsupportedOrder("quintic".into())
        );
        assert_eq!(
            Pchip::from_names(&x, &y, "cubic", "M5").unwrap_err(),
            PchipError::UnsupportedConstraint("M5".into())
        );
        // Valid names fall through to the data checks
        assert!(Pchip::from_names(&x, &y, "cubic", "M3")
            .unwrap_err()
            .is_data_error());
    }

    /// Five samples is enough for every combination of options.
    #[test]
    fn test_minimum_size() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0];
        let y = [0.0, 1.0, 0.0, 1.0, 0.0];
        for opts in PchipOptions::all() {
            let p = Pchip::new(&x, &y, opts).unwrap();
            assert_eq!(p.len(), 5);
            assert_eq!(p.coefficients().len(), 4);
            assert_eq!(p.options(), opts);
        }
    }

    /// The interpolant passes through every sample.
    #[test]
    fn test_interpolates_knots() {
        for opts in PchipOptions::all() {
            let p = Pchip::new(&X, &Y, opts).unwrap();
            for (&x, &y) in X.iter().zip(Y.iter()) {
                assert!((p.eval_one(x) - y).abs() < 1e-12, "{opts:?} at {x}");
            }
        }
    }

    /// Straight lines are reproduced everywhere, including under extrapolation.
    #[test]
    fn test_linear_data_reproduced() {
        let x = [-1.0, 0.3, 1.1, 1.5, 2.6, 4.0, 4.1];
        let y: Vec<f64> = x.iter().map(|&v| 0.5 - 2.0 * v).collect();
        let obs = linspace(-3.0, 6.0, 37);
        for opts in PchipOptions::all() {
            let p = Pchip::new(&x, &y, opts).unwrap();
            for &v in &obs {
                assert!((p.eval_one(v) - (0.5 - 2.0 * v)).abs() < 1e-10);
                assert!((p.eval_deriv_one(v) + 2.0).abs() < 1e-10);
            }
        }
    }

    /// Oscillating samples: interior derivatives are flattened all the way to
    /// zero and the first segment stays strictly between its samples.
    #[test]
    fn test_oscillating() {
        let x = [0.0, 1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [0.0, 1.0, 0.0, 1.0, 0.0, 1.0];
        let p = Pchip::with_defaults(&x, &y).unwrap();

        let dd = DividedDifferences::new(&x, &y);
        let raw = approx_derivatives(ApproxOrder::Cubic, &x, &dd);
        for k in 1..5 {
            assert_eq!(p.derivatives()[k], 0.0);
            assert!(raw[k].abs() > 0.5);
        }

        let v = p.eval_one(0.5);
        assert!(v > 0.0 && v < 1.0);
        assert!((v - 0.875).abs() < 1e-12);
    }

    /// Supplying the samples in reverse gives the same interpolant.
    #[test]
    fn test_order_independent() {
        let xr: Vec<f64> = X.iter().rev().copied().collect();
        let yr: Vec<f64> = Y.iter().rev().copied().collect();
        let obs = linspace(-1.0, 6.0, 50);
        for opts in PchipOptions::all() {
            let fwd = Pchip::new(&X, &Y, opts).unwrap();
            let rev = Pchip::new(&xr, &yr, opts).unwrap();
            assert_eq!(fwd, rev);
            assert_eq!(fwd.eval_alloc(&obs), rev.eval_alloc(&obs));
        }
    }

    /// Out-of-range queries extend the boundary cubics instead of failing.
    #[test]
    fn test_extrapolation() {
        for opts in PchipOptions::all() {
            let p = Pchip::new(&X, &Y, opts).unwrap();
            let c0 = p.coefficients()[0];
            let cn = p.coefficients()[X.len() - 2];

            let lo = -0.5;
            let s = lo - X[0];
            let expected = c0[3] + s * (c0[2] + s * (c0[1] + s * c0[0]));
            assert_eq!(p.eval_one(lo), expected);
            assert_eq!(p.locate(lo), (0, Extrap::OutsideLow));

            let hi = 6.0;
            let s = hi - X[X.len() - 2];
            let expected = cn[3] + s * (cn[2] + s * (cn[1] + s * cn[0]));
            assert_eq!(p.eval_one(hi), expected);
            assert_eq!(p.locate(hi), (X.len() - 2, Extrap::OutsideHigh));
        }
    }

    #[test]
    fn test_nan_query() {
        let p = Pchip::with_defaults(&X, &Y).unwrap();
        assert!(p.eval_one(f64::NAN).is_nan());
        let out = p.eval_alloc(&[0.5, f64::NAN, 1.5]);
        assert!(out[0].is_finite() && out[1].is_nan() && out[2].is_finite());
    }

    /// The derivative of the interpolant at each knot is the limited
    /// derivative, and is continuous across segment boundaries.
    #[test]
    fn test_derivative_at_knots() {
        for opts in PchipOptions::all() {
            let p = Pchip::new(&X, &Y, opts).unwrap();
            for (k, &x) in X.iter().enumerate() {
                assert!((p.eval_deriv_one(x) - p.derivatives()[k]).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_convenience_functions() {
        let obs = [0.25, 1.0, 4.5];
        let expected = Pchip::with_defaults(&X, &Y).unwrap().eval_alloc(&obs);

        let mut out = [0.0; 3];
        interp(&X, &Y, &obs, &mut out).unwrap();
        assert_eq!(out.to_vec(), expected);
        assert_eq!(interp_alloc(&X, &Y, &obs).unwrap(), expected);

        let mut short = [0.0; 2];
        assert!(interp(&X, &Y, &obs, &mut short).is_err());
    }

    /// Randomized increasing data with the 3-point rule: derivatives are
    /// never negative, and the interpolant never decreases between samples.
    #[test]
    fn test_random_increasing_data_m3() {
        let mut rng = rng_fixed_seed();
        for _ in 0..200 {
            let n = 5 + (randn::<f64>(&mut rng, 1)[0] * 20.0) as usize;
            let (x, y) = increasing_samples(&mut rng, n);

            for order in ApproxOrder::ALL {
                let opts = PchipOptions::new(order, MonoConstraint::M3);
                let p = Pchip::new(&x, &y, opts).unwrap();
                assert!(p.derivatives().iter().all(|&d| d >= 0.0));

                for i in 0..n - 1 {
                    let obs = linspace(x[i], x[i + 1], 33);
                    let vals = p.eval_alloc(&obs);
                    for w in vals.windows(2) {
                        assert!(w[1] >= w[0] - 1e-9, "{opts:?} segment {i}");
                    }
                }
            }
        }
    }

    /// Randomized increasing data with the 5-point rule: no derivative
    /// points against the data.
    #[test]
    fn test_random_increasing_data_m4() {
        let mut rng = rng_fixed_seed();
        for _ in 0..200 {
            let n = 5 + (randn::<f64>(&mut rng, 1)[0] * 20.0) as usize;
            let (x, y) = increasing_samples(&mut rng, n);

            for order in ApproxOrder::ALL {
                let opts = PchipOptions::new(order, MonoConstraint::M4);
                let p = Pchip::new(&x, &y, opts).unwrap();
                assert!(p.derivatives().iter().all(|&d| d >= 0.0), "{opts:?}");
                for (&xk, &yk) in x.iter().zip(y.iter()) {
                    assert!((p.eval_one(xk) - yk).abs() < 1e-9);
                }
            }
        }
    }
}
