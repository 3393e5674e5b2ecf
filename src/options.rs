//! Interpolator configuration: derivative approximation order and
//! monotonicity constraint.
//!
//! Both are closed enumerations. The textual names accepted by
//! [`core::str::FromStr`] are `"cubic"` / `"quartic"` and `"M3"` / `"M4"`;
//! anything else is rejected before any sample data is touched.
//!
//! ```rust
//! use pchips::{ApproxOrder, MonoConstraint, PchipOptions};
//!
//! let opts = PchipOptions::parse("quartic", "M4").unwrap();
//! assert_eq!(opts.order, ApproxOrder::Quartic);
//! assert_eq!(opts.constraint, MonoConstraint::M4);
//!
//! assert!(PchipOptions::parse("quintic", "M3").is_err());
//! ```
use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::PchipError;

/// Polynomial order of the local fit used for the initial derivative estimate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ApproxOrder {
    /// Four-point local cubic fit.
    #[default]
    Cubic,
    /// Five-point local quartic fit.
    Quartic,
}

/// Slope limiting rule, named by the width of its local support.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum MonoConstraint {
    /// 3-point support.
    #[default]
    M3,
    /// 5-point support; tighter near inflections.
    M4,
}

impl ApproxOrder {
    pub const ALL: [Self; 2] = [Self::Cubic, Self::Quartic];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cubic => "cubic",
            Self::Quartic => "quartic",
        }
    }
}

impl MonoConstraint {
    pub const ALL: [Self; 2] = [Self::M3, Self::M4];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M3 => "M3",
            Self::M4 => "M4",
        }
    }
}

impl FromStr for ApproxOrder {
    type Err = PchipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cubic" => Ok(Self::Cubic),
            "quartic" => Ok(Self::Quartic),
            other => Err(PchipError::UnsupportedOrder(other.to_string())),
        }
    }
}

impl FromStr for MonoConstraint {
    type Err = PchipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M3" => Ok(Self::M3),
            "M4" => Ok(Self::M4),
            other => Err(PchipError::UnsupportedConstraint(other.to_string())),
        }
    }
}

impl fmt::Display for ApproxOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for MonoConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full set of construction options. Defaults to cubic / M3.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct PchipOptions {
    pub order: ApproxOrder,
    pub constraint: MonoConstraint,
}

impl PchipOptions {
    pub fn new(order: ApproxOrder, constraint: MonoConstraint) -> Self {
        Self { order, constraint }
    }

    /// Parse options from their textual names.
    ///
    /// # Errors
    /// * [`PchipError::UnsupportedOrder`] for an unknown order name
    /// * [`PchipError::UnsupportedConstraint`] for an unknown constraint name
    pub fn parse(order: &str, constraint: &str) -> Result<Self, PchipError> {
        Ok(Self {
            order: order.parse()?,
            constraint: constraint.parse()?,
        })
    }

    pub fn with_order(mut self, order: ApproxOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_constraint(mut self, constraint: MonoConstraint) -> Self {
        self.constraint = constraint;
        self
    }

    /// Every supported (order, constraint) combination.
    pub fn all() -> impl Iterator<Item = Self> {
        ApproxOrder::ALL.into_iter().flat_map(|order| {
            MonoConstraint::ALL
                .into_iter()
                .map(move |constraint| Self::new(order, constraint))
        })
    }
}
