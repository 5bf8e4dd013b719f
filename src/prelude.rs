//! Tier editor prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    accordion::OpenSet,
    catalog::{Catalog, CatalogError},
    discounts::{
        Discount, DiscountError, DiscountRate, append_product_discount, remove_product_discount,
    },
    editor::{Action, EditorError, EditorState, ProductEditor, ProductUpdateSink, Transition},
    fixtures::{Fixture, FixtureError, ReplayReport, ScriptStep, StepError, replay},
    input::{DiscountInput, Field, FieldInput, InputError},
    products::{DiscountTiers, Product, ProductId, ProductPatch, find_product},
    session::{DiscountDraft, EditSession, SessionError},
    view::{PanelBody, PanelView},
};
