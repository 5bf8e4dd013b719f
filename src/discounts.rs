//! Discounts
//!
//! Quantity-based discount tiers and the pure functional updates used to add
//! and remove them from a product.

use std::{fmt, num::NonZeroU32};

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::products::Product;

/// Errors raised when building or editing discount tiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiscountError {
    /// Tried to remove a tier that does not exist.
    #[error("discount index {index} is out of range for {len} tier(s)")]
    IndexOutOfRange {
        /// Requested position
        index: usize,
        /// Number of tiers on the product
        len: usize,
    },

    /// A tier must require at least one unit.
    #[error("discount quantity must be greater than zero")]
    ZeroQuantity,

    /// Rates are fractions in `[0, 1)`.
    #[error("discount rate {0} is outside [0, 1)")]
    RateOutOfRange(Decimal),
}

/// Fractional discount rate in `[0, 1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiscountRate(Decimal);

impl DiscountRate {
    /// No discount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a rate from a fraction.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::RateOutOfRange`] unless `0 <= rate < 1`.
    pub fn try_new(rate: Decimal) -> Result<Self, DiscountError> {
        if rate < Decimal::ZERO || rate >= Decimal::ONE {
            return Err(DiscountError::RateOutOfRange(rate));
        }

        Ok(Self(rate.normalize()))
    }

    /// Create a rate from a whole percentage, e.g. `5` for 5%.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::RateOutOfRange`] for 100% and above.
    pub fn from_percent(percent: u32) -> Result<Self, DiscountError> {
        Self::try_new(Decimal::from(percent) / Decimal::ONE_HUNDRED)
    }

    /// Returns the rate as a fraction.
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Returns the rate scaled to percent, e.g. `5` for a rate of `0.05`.
    pub fn percent(self) -> Decimal {
        (self.0 * Decimal::ONE_HUNDRED).normalize()
    }

    /// Returns the rate as a [`Percentage`].
    pub fn as_percentage(self) -> Percentage {
        Percentage::from(self.0)
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// A quantity discount tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Discount {
    /// Minimum number of units that must be purchased
    pub quantity: NonZeroU32,

    /// Discount applied once the threshold is met
    pub rate: DiscountRate,
}

impl Discount {
    /// Create a new tier.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::ZeroQuantity`] when `quantity` is zero.
    pub fn new(quantity: u32, rate: DiscountRate) -> Result<Self, DiscountError> {
        let quantity = NonZeroU32::new(quantity).ok_or(DiscountError::ZeroQuantity)?;

        Ok(Self { quantity, rate })
    }

    /// Returns `true` if buying `quantity` units meets this tier's threshold.
    pub fn qualifies(&self, quantity: u32) -> bool {
        quantity >= self.quantity.get()
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+ units: {} off", self.quantity, self.rate)
    }
}

/// Returns a copy of `product` with the tier at `index` removed.
///
/// # Errors
///
/// Returns [`DiscountError::IndexOutOfRange`] if there is no tier at `index`.
pub fn remove_product_discount(product: &Product, index: usize) -> Result<Product, DiscountError> {
    let len = product.discounts.len();

    if index >= len {
        return Err(DiscountError::IndexOutOfRange { index, len });
    }

    let mut updated = product.clone();
    updated.discounts.remove(index);

    Ok(updated)
}

/// Returns a copy of `product` with `discount` appended as its last tier.
pub fn append_product_discount(product: &Product, discount: Discount) -> Product {
    let mut updated = product.clone();
    updated.discounts.push(discount);

    updated
}
