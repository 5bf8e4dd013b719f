//! Tier Editor
//!
//! State model for an admin panel that edits catalog products (name, price,
//! stock) and their quantity discount tiers. Rendering is left to the host;
//! this crate owns the accordion state, the edit session, and the discount
//! updates that flow back to the catalog.

pub mod accordion;
pub mod catalog;
pub mod config;
pub mod discounts;
pub mod editor;
pub mod fixtures;
pub mod input;
pub mod logging;
pub mod prelude;
pub mod products;
pub mod session;
pub mod view;
