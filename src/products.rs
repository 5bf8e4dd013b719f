//! Products

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::discounts::Discount;

/// Discount tiers attached to a single product, in display order.
pub type DiscountTiers = SmallVec<[Discount; 4]>;

/// Product identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Catalog product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Product price, in whole currency units
    pub price: u64,

    /// Units in stock
    pub stock: u64,

    /// Quantity discount tiers
    pub discounts: DiscountTiers,
}

impl Product {
    /// Create a new product with no discount tiers.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: u64, stock: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock,
            discounts: SmallVec::new(),
        }
    }

    /// Attach discount tiers, replacing any existing ones.
    #[must_use]
    pub fn with_discounts(mut self, discounts: impl IntoIterator<Item = Discount>) -> Self {
        self.discounts = discounts.into_iter().collect();
        self
    }

    /// Apply a partial field update in place.
    pub fn apply_patch(&mut self, patch: &ProductPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }

        if let Some(price) = patch.price {
            self.price = price;
        }

        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
    }

    /// Returns the best discount tier a purchase of `quantity` units qualifies for.
    ///
    /// Ties on rate go to the tier listed first.
    pub fn best_discount_for(&self, quantity: u32) -> Option<&Discount> {
        self.discounts
            .iter()
            .filter(|discount| discount.qualifies(quantity))
            .fold(None, |best: Option<&Discount>, discount| match best {
                Some(current) if current.rate >= discount.rate => Some(current),
                _ => Some(discount),
            })
    }
}

/// Partial update of a product's editable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPatch {
    /// New name
    pub name: Option<String>,

    /// New price
    pub price: Option<u64>,

    /// New stock level
    pub stock: Option<u64>,
}

impl ProductPatch {
    /// Patch that only changes the name.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Patch that only changes the price.
    pub fn price(price: u64) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }

    /// Patch that only changes the stock level.
    pub fn stock(stock: u64) -> Self {
        Self {
            stock: Some(stock),
            ..Self::default()
        }
    }

    /// Returns `true` when the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.stock.is_none()
    }
}

/// Look up a product by identifier.
pub fn find_product<'a>(products: &'a [Product], id: &ProductId) -> Option<&'a Product> {
    products.iter().find(|product| &product.id == id)
}
