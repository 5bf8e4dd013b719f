//! Input
//!
//! Raw text typed into the edit form is parsed here, before it can reach a
//! draft. Anything that does not describe a valid value is rejected with an
//! [`InputError`] naming the offending field.

use std::{fmt, num::IntErrorKind};

use rust_decimal::Decimal;
use thiserror::Error;

use crate::{discounts::DiscountRate, products::ProductPatch, session::DiscountDraft};

/// Editable numeric fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Product price
    Price,

    /// Product stock level
    Stock,

    /// Discount tier quantity threshold
    Quantity,

    /// Discount tier rate, entered as a percentage
    Rate,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Price => "price",
            Field::Stock => "stock",
            Field::Quantity => "quantity",
            Field::Rate => "rate",
        })
    }
}

/// Input parsing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The text is not a number at all.
    #[error("{field}: '{value}' is not a number")]
    NotANumber {
        /// Field being edited
        field: Field,
        /// Raw text
        value: String,
    },

    /// Negative values are never valid here.
    #[error("{field} cannot be negative")]
    Negative {
        /// Field being edited
        field: Field,
    },

    /// The number does not fit the field.
    #[error("{field} is too large")]
    Overflow {
        /// Field being edited
        field: Field,
    },

    /// The number is outside the range the field accepts.
    #[error("{field}: {value} is out of range")]
    OutOfRange {
        /// Field being edited
        field: Field,
        /// Raw text
        value: String,
    },
}

fn parse_whole(field: Field, raw: &str) -> Result<u64, InputError> {
    let trimmed = raw.trim();

    trimmed.parse::<u64>().map_err(|error| match error.kind() {
        IntErrorKind::PosOverflow => InputError::Overflow { field },
        _ if is_negative_integer(trimmed) => InputError::Negative { field },
        _ => InputError::NotANumber {
            field,
            value: raw.to_string(),
        },
    })
}

fn is_negative_integer(text: &str) -> bool {
    text.strip_prefix('-')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Parse a price.
///
/// # Errors
///
/// Returns an [`InputError`] for empty, non-numeric, negative or oversized input.
pub fn parse_price(raw: &str) -> Result<u64, InputError> {
    parse_whole(Field::Price, raw)
}

/// Parse a stock level.
///
/// # Errors
///
/// Returns an [`InputError`] for empty, non-numeric, negative or oversized input.
pub fn parse_stock(raw: &str) -> Result<u64, InputError> {
    parse_whole(Field::Stock, raw)
}

/// Parse a discount quantity threshold.
///
/// Zero is accepted here since the staged draft starts at zero; it is
/// rejected when the draft is turned into a tier.
///
/// # Errors
///
/// Returns an [`InputError`] for empty, non-numeric, negative or oversized input.
pub fn parse_quantity(raw: &str) -> Result<u32, InputError> {
    let value = parse_whole(Field::Quantity, raw)?;

    u32::try_from(value).map_err(|_err| InputError::Overflow {
        field: Field::Quantity,
    })
}

/// Parse a discount rate entered as a percentage, e.g. `"5"` or `"5%"`.
///
/// # Errors
///
/// Returns an [`InputError`] unless the value is a number in `[0, 100)`.
pub fn parse_rate_percent(raw: &str) -> Result<DiscountRate, InputError> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();

    let percent = number
        .parse::<Decimal>()
        .map_err(|_err| InputError::NotANumber {
            field: Field::Rate,
            value: raw.to_string(),
        })?;

    if percent < Decimal::ZERO {
        return Err(InputError::Negative { field: Field::Rate });
    }

    DiscountRate::try_new(percent / Decimal::ONE_HUNDRED).map_err(|_err| InputError::OutOfRange {
        field: Field::Rate,
        value: raw.to_string(),
    })
}

/// Raw text for the product fields of the edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldInput {
    /// Name text; taken as-is
    pub name: Option<String>,

    /// Price text
    pub price: Option<String>,

    /// Stock text
    pub stock: Option<String>,
}

impl FieldInput {
    /// Validate the raw text into a [`ProductPatch`].
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] encountered.
    pub fn parse(&self) -> Result<ProductPatch, InputError> {
        Ok(ProductPatch {
            name: self.name.clone(),
            price: self.price.as_deref().map(parse_price).transpose()?,
            stock: self.stock.as_deref().map(parse_stock).transpose()?,
        })
    }
}

/// Raw text for the new discount inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscountInput {
    /// Quantity threshold text
    pub quantity: Option<String>,

    /// Rate text, as a percentage
    pub rate: Option<String>,
}

impl DiscountInput {
    /// Overlay the parsed inputs on an existing draft.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError`] encountered.
    pub fn apply(&self, draft: DiscountDraft) -> Result<DiscountDraft, InputError> {
        let quantity = self.quantity.as_deref().map(parse_quantity).transpose()?;
        let rate = self.rate.as_deref().map(parse_rate_percent).transpose()?;

        Ok(DiscountDraft {
            quantity: quantity.unwrap_or(draft.quantity),
            rate: rate.unwrap_or(draft.rate),
        })
    }
}
