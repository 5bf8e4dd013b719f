//! Catalog
//!
//! The canonical, ordered product list. The editor never owns it; it only
//! reads from it and hands new product versions back through
//! [`ProductUpdateSink`].

use std::io;

use rustc_hash::FxHashSet;
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;
use tracing::warn;

use crate::{
    editor::ProductUpdateSink,
    products::{Product, ProductId, find_product},
};

/// Catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No product with this id.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// Two products share an id.
    #[error("duplicate product id {0}")]
    DuplicateProduct(ProductId),

    /// Writing the table failed.
    #[error("failed to write catalog table")]
    Io(#[from] io::Error),
}

/// Ordered product catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateProduct`] if two products share an id.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = FxHashSet::default();

        for product in &products {
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateProduct(product.id.clone()));
            }
        }

        Ok(Self { products })
    }

    /// Products in display order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product.
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        find_product(&self.products, id)
    }

    /// Replace the product with the same id, keeping its position.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::ProductNotFound`] if no product has that id.
    pub fn replace(&mut self, product: Product) -> Result<(), CatalogError> {
        let slot = self
            .products
            .iter_mut()
            .find(|existing| existing.id == product.id)
            .ok_or_else(|| CatalogError::ProductNotFound(product.id.clone()))?;

        *slot = product;

        Ok(())
    }

    /// Write a summary table of the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Io`] if `out` cannot be written to.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), CatalogError> {
        let mut builder = Builder::default();

        builder.push_record(["Id", "Name", "Price", "Stock", "Discounts"]);

        for product in &self.products {
            let tiers = product
                .discounts
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n");

            builder.push_record([
                product.id.to_string(),
                product.name.clone(),
                product.price.to_string(),
                product.stock.to_string(),
                tiers,
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(2..4), Alignment::right());
        table.modify(Rows::first(), Alignment::center());

        writeln!(out, "{table}")?;

        Ok(())
    }
}

impl ProductUpdateSink for Catalog {
    fn on_product_update(&mut self, product: Product) {
        let id = product.id.clone();

        if let Err(error) = self.replace(product) {
            warn!(product_id = %id, %error, "dropping update for unknown product");
        }
    }
}
