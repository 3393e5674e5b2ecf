//! Monotone piecewise cubic Hermite interpolation (PCHIP) with a choice of
//! derivative estimate and slope limiter.
//!
//! Derivatives at each knot are first estimated from a local cubic or quartic
//! fit, then shrunk toward zero by the 3-point (`M3`) or 5-point (`M4`)
//! monotonicity constraint so that no segment overshoots the local trend of
//! the data. The result is stored as one power-basis cubic per segment.
//!
//! ```rust
//! use pchips::{Interp1D, Pchip};
//!
//! let x = [0.0_f64, 1.0, 2.0, 3.0, 4.0, 5.0];
//! let y = [0.0_f64, 0.1, 0.2, 2.0, 2.1, 2.2];
//!
//! // Options by name, as "cubic" | "quartic" and "M3" | "M4"
//! let interpolator = Pchip::from_names(&x, &y, "quartic", "M4").unwrap();
//!
//! let out = interpolator.eval_alloc(&[0.5, 2.5, 4.5]);
//! assert!(out.windows(2).all(|w| w[1] >= w[0]));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
// These "needless" range loops mirror the index arithmetic of the formulas
#![allow(clippy::needless_range_loop)]

extern crate alloc;

pub mod error;
pub mod one_dim;
pub mod options;
pub mod pchip;

#[cfg(feature = "std")]
pub mod utils;

#[cfg(all(test, feature = "std"))]
pub(crate) mod testing;

pub use error::PchipError;
pub use one_dim::{Extrap, Interp1D};
pub use options::{ApproxOrder, MonoConstraint, PchipOptions};
pub use pchip::limit::minmod;
pub use pchip::{interp, interp_alloc, Pchip};

/// Fewest samples accepted; the quartic estimate needs five points.
pub const MIN_KNOTS: usize = 5;
