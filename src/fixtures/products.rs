//! Catalog Fixtures

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::{
    discounts::{Discount, DiscountRate},
    fixtures::FixtureError,
    products::{Product, ProductId},
};

/// Wrapper for the products in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Products in display order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product identifier
    pub id: String,

    /// Product name
    pub name: String,

    /// Product price
    pub price: u64,

    /// Units in stock
    pub stock: u64,

    /// Discount tiers
    #[serde(default)]
    pub discounts: Vec<DiscountFixture>,
}

/// Discount Fixture
#[derive(Debug, Deserialize)]
pub struct DiscountFixture {
    /// Minimum quantity
    pub quantity: u32,

    /// Rate (e.g. "5%" or "0.05")
    pub rate: String,
}

impl TryFrom<DiscountFixture> for Discount {
    type Error = FixtureError;

    fn try_from(fixture: DiscountFixture) -> Result<Self, Self::Error> {
        Ok(Discount::new(fixture.quantity, parse_rate(&fixture.rate)?)?)
    }
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let discounts = fixture
            .discounts
            .into_iter()
            .map(Discount::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Product::new(
            ProductId::new(fixture.id),
            fixture.name,
            fixture.price,
            fixture.stock,
        )
        .with_discounts(discounts))
    }
}

/// Parse a rate string (e.g. "5%" or "0.05") into a [`DiscountRate`]
///
/// # Errors
///
/// Returns an error if the string is not a number, or is outside `[0, 1)`
/// once converted to a fraction.
pub fn parse_rate(s: &str) -> Result<DiscountRate, FixtureError> {
    let trimmed = s.trim();

    let fraction = if let Some(percent_str) = trimmed.strip_suffix('%') {
        percent_str
            .trim()
            .parse::<Decimal>()
            .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))?
            / Decimal::ONE_HUNDRED
    } else {
        trimmed
            .parse::<Decimal>()
            .map_err(|_err| FixtureError::InvalidPercentage(s.to_string()))?
    };

    Ok(DiscountRate::try_new(fraction)?)
}

#[cfg(test)]
mod tests {
    use crate::discounts::DiscountError;

    use super::*;

    #[test]
    fn parse_rate_accepts_percentage_format() -> Result<(), FixtureError> {
        assert_eq!(parse_rate("15%")?.value(), Decimal::new(15, 2));

        Ok(())
    }

    #[test]
    fn parse_rate_accepts_decimal_format() -> Result<(), FixtureError> {
        assert_eq!(parse_rate("0.05")?.value(), Decimal::new(5, 2));

        Ok(())
    }

    #[test]
    fn parse_rate_rejects_garbage() {
        assert!(matches!(
            parse_rate("lots"),
            Err(FixtureError::InvalidPercentage(_))
        ));
    }

    #[test]
    fn parse_rate_rejects_full_discount() {
        assert!(matches!(
            parse_rate("100%"),
            Err(FixtureError::Discount(DiscountError::RateOutOfRange(_)))
        ));
    }

    #[test]
    fn product_fixture_rejects_zero_quantity_tier() {
        let fixture = ProductFixture {
            id: "p1".to_string(),
            name: "Widget".to_string(),
            price: 100,
            stock: 1,
            discounts: vec![DiscountFixture {
                quantity: 0,
                rate: "5%".to_string(),
            }],
        };

        assert!(matches!(
            Product::try_from(fixture),
            Err(FixtureError::Discount(DiscountError::ZeroQuantity))
        ));
    }
}
