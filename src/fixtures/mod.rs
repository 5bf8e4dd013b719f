//! Fixtures
//!
//! YAML catalogs and recorded action scripts.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::{
    catalog::{Catalog, CatalogError},
    discounts::DiscountError,
    fixtures::{products::CatalogFixture, script::ScriptFixture},
    products::Product,
};

pub mod products;
pub mod script;

pub use script::{ReplayReport, ScriptStep, StepError, replay};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid percentage format
    #[error("Invalid percentage format: {0}")]
    InvalidPercentage(String),

    /// Invalid discount tier
    #[error("Invalid discount: {0}")]
    Discount(#[from] DiscountError),

    /// Invalid catalog
    #[error("Invalid catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// Parse a catalog from YAML.
///
/// # Errors
///
/// Returns an error if the YAML is malformed, a tier is invalid, or two
/// products share an id.
pub fn catalog_from_str(yaml: &str) -> Result<Catalog, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

    let products = fixture
        .products
        .into_iter()
        .map(Product::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Catalog::new(products)?)
}

/// Read and parse a catalog file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or see [`catalog_from_str`].
pub fn catalog_from_path(path: impl AsRef<Path>) -> Result<Catalog, FixtureError> {
    catalog_from_str(&fs::read_to_string(path)?)
}

/// Parse an action script from YAML.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or names an unknown action.
pub fn script_from_str(yaml: &str) -> Result<Vec<ScriptStep>, FixtureError> {
    let fixture: ScriptFixture = serde_norway::from_str(yaml)?;

    Ok(fixture.actions)
}

/// Read and parse an action script file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, or see [`script_from_str`].
pub fn script_from_path(path: impl AsRef<Path>) -> Result<Vec<ScriptStep>, FixtureError> {
    script_from_str(&fs::read_to_string(path)?)
}

/// Named fixture sets under a base directory.
///
/// A set called `demo` lives at `catalogs/demo.yml` and `scripts/demo.yml`.
#[derive(Debug, Clone)]
pub struct Fixture {
    base_path: PathBuf,
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

impl Fixture {
    /// Fixtures under `./fixtures`
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Fixtures under a custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Load the catalog called `name`.
    ///
    /// # Errors
    ///
    /// See [`catalog_from_path`].
    pub fn catalog(&self, name: &str) -> Result<Catalog, FixtureError> {
        catalog_from_path(self.base_path.join("catalogs").join(format!("{name}.yml")))
    }

    /// Load the action script called `name`.
    ///
    /// # Errors
    ///
    /// See [`script_from_path`].
    pub fn script(&self, name: &str) -> Result<Vec<ScriptStep>, FixtureError> {
        script_from_path(self.base_path.join("scripts").join(format!("{name}.yml")))
    }
}
