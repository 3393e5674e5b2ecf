//! Named failure kinds for interpolator construction.

use alloc::string::String;
use core::fmt;

/// Reasons an interpolator could not be built.
///
/// Every check runs eagerly during construction; evaluation never fails
/// for numeric input, so a constructed interpolator is always usable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PchipError {
    /// Knots and values have different lengths.
    Shape { x_len: usize, y_len: usize },
    /// Too few knots for the highest-order difference formulas.
    Size { len: usize },
    /// NaN or infinite input at this position (input order).
    NonFinite { index: usize },
    /// Zero spacing between sorted knots `index` and `index + 1`.
    DegenerateAbscissa { index: usize },
    /// Unrecognized derivative approximation order.
    UnsupportedOrder(String),
    /// Unrecognized monotonicity constraint.
    UnsupportedConstraint(String),
}

impl PchipError {
    /// True for failures caused by the sample data.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            Self::Shape { .. }
                | Self::Size { .. }
                | Self::NonFinite { .. }
                | Self::DegenerateAbscissa { .. }
        )
    }

    /// True for failures caused by the interpolator options.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedOrder(_) | Self::UnsupportedConstraint(_)
        )
    }
}

impl fmt::Display for PchipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shape { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} entries, y has {y_len}")
            }
            Self::Size { len } => write!(
                f,
                "There should be at least {} data points, got {len}",
                crate::MIN_KNOTS
            ),
            Self::NonFinite { index } => {
                write!(f, "x and y must contain finite values (index {index})")
            }
            Self::DegenerateAbscissa { index } => write!(
                f,
                "The data abscissae should be distinct (knots {} and {} coincide)",
                index,
                index + 1
            ),
            Self::UnsupportedOrder(name) => write!(f, "Unsupported approx_order: {name}"),
            Self::UnsupportedConstraint(name) => {
                write!(f, "Unsupported mono_constraint: {name}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PchipError {}
