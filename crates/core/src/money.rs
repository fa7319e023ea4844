//! Monetary amounts in smallest currency unit (e.g. cents).
//!
//! Integer minor units keep price arithmetic exact: `unit_price * quantity`
//! and running totals never pass through floating point, so financial totals
//! cannot accumulate rounding drift. All arithmetic is checked; overflow is
//! surfaced as a [`DomainError`], never wrapped.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A non-negative monetary amount in minor units.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Amount from minor units (e.g. `Money::from_minor(1050)` is 10.50 in a
    /// two-decimal currency).
    pub const fn from_minor(minor: u64) -> Self {
        Self(minor)
    }

    pub const fn minor(&self) -> u64 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition of two amounts.
    pub fn checked_add(self, other: Money) -> DomainResult<Money> {
        self.0
            .checked_add(other.0)
            .map(Money)
            .ok_or_else(|| DomainError::invariant("monetary amount overflow"))
    }

    /// Checked multiplication by an item quantity.
    ///
    /// Widens through `u128` so `u64::MAX`-adjacent unit prices fail cleanly
    /// instead of wrapping.
    pub fn checked_mul_quantity(self, quantity: u32) -> DomainResult<Money> {
        let wide = (self.0 as u128) * (quantity as u128);
        u64::try_from(wide)
            .map(Money)
            .map_err(|_| DomainError::invariant("monetary amount overflow"))
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
