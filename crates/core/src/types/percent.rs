//! Percentage values used for fees and margins.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative percentage, stored as the human-facing number (`16.5` for 16.5%).
///
/// Negative input is clamped to zero on construction and on deserialization,
/// so a form field holding a half-typed `-5` still produces a usable value.
/// There is deliberately no upper cap: fee and margin sums of 100% or more
/// are handled by the pricing fallback, not rejected here.
///
/// ## Examples
///
/// ```
/// use printcost_core::Percent;
/// use rust_decimal::Decimal;
///
/// let fee = Percent::new(Decimal::new(165, 1));
/// assert_eq!(fee.as_fraction(), Decimal::new(165, 3));
///
/// assert_eq!(Percent::new(Decimal::NEGATIVE_ONE), Percent::ZERO);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "Decimal", into = "Decimal")]
pub struct Percent(Decimal);

impl Percent {
    /// Zero percent.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a percentage, clamping negatives to zero.
    #[must_use]
    pub fn new(value: Decimal) -> Self {
        Self(value.max(Decimal::ZERO))
    }

    /// The percentage as entered (`50` for 50%).
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// The percentage as a fraction (`0.5` for 50%).
    #[must_use]
    pub fn as_fraction(&self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }

    /// Apply this percentage to an amount, saturating at `Decimal::MAX`.
    #[must_use]
    pub fn of(&self, amount: Decimal) -> Decimal {
        amount.saturating_mul(self.as_fraction())
    }
}

impl From<Decimal> for Percent {
    fn from(value: Decimal) -> Self {
        Self::new(value)
    }
}

impl From<Percent> for Decimal {
    fn from(percent: Percent) -> Self {
        percent.0
    }
}

impl core::ops::Add for Percent {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}
