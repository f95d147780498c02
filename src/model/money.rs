use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::iter::Sum;
use std::ops::{Add, Sub};

/// An amount of money in minor currency units (paise).
///
/// Integer arithmetic only; every computed total is exact. Arithmetic saturates
/// instead of wrapping.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Amount given in minor units.
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    /// Amount given in whole rupees.
    pub const fn from_major(major: u64) -> Self {
        Self(major.saturating_mul(100))
    }

    pub const fn minor_units(self) -> u64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// `self * quantity`, saturating.
    pub const fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(quantity as u64))
    }

    /// `self * bps / 10_000`, rounded half up to the nearest minor unit.
    pub fn apply_rate_bps(self, bps: u32) -> Self {
        let scaled = u128::from(self.0) * u128::from(bps);
        let rounded = (scaled + 5_000) / 10_000;
        Self(u64::try_from(rounded).unwrap_or(u64::MAX))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "₹{}.{:02}", self.0 / 100, self.0 % 100)
    }
}
