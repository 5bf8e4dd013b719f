//! Edit Session
//!
//! At most one product is edited at a time. Its fields are staged on a draft
//! copy that diverges from the catalog until it is committed.

use thiserror::Error;

use crate::{
    discounts::{Discount, DiscountError, DiscountRate},
    products::{Product, ProductId, ProductPatch},
};

/// Edit session errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The session is not editing this product, or is not editing at all.
    #[error("product {0} is not being edited")]
    NotEditing(ProductId),
}

/// A new discount tier being typed in, before it is added.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiscountDraft {
    /// Quantity threshold; zero until entered
    pub quantity: u32,

    /// Discount rate
    pub rate: DiscountRate,
}

impl DiscountDraft {
    /// Create a draft.
    pub const fn new(quantity: u32, rate: DiscountRate) -> Self {
        Self { quantity, rate }
    }

    /// Turn the draft into a tier.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::ZeroQuantity`] if no quantity has been entered.
    pub fn validate(self) -> Result<Discount, DiscountError> {
        Discount::new(self.quantity, self.rate)
    }
}

/// Product edit session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditSession {
    draft: Option<Product>,
    new_discount: DiscountDraft,
}

impl EditSession {
    /// Create an idle session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing a copy of `product`.
    ///
    /// Any previous draft is discarded without being committed.
    pub fn begin_edit(&mut self, product: &Product) {
        self.draft = Some(product.clone());
        self.new_discount = DiscountDraft::default();
    }

    /// Apply `patch` to the draft, provided it is a draft of `id`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NotEditing`] if the session targets another
    /// product or is idle.
    pub fn update_field(
        &mut self,
        id: &ProductId,
        patch: &ProductPatch,
    ) -> Result<(), SessionError> {
        match self.draft.as_mut() {
            Some(draft) if &draft.id == id => {
                draft.apply_patch(patch);
                Ok(())
            }
            _ => Err(SessionError::NotEditing(id.clone())),
        }
    }

    /// Hand the draft to `on_commit` and end the session.
    ///
    /// Returns `false` without calling `on_commit` when nothing is being edited.
    pub fn commit_edit(&mut self, on_commit: impl FnOnce(Product)) -> bool {
        let Some(draft) = self.take_draft() else {
            return false;
        };

        on_commit(draft);

        true
    }

    /// End the session, returning the draft if there was one.
    pub fn take_draft(&mut self) -> Option<Product> {
        self.new_discount = DiscountDraft::default();
        self.draft.take()
    }

    /// End the session, discarding the draft.
    pub fn clear_edit(&mut self) {
        self.draft = None;
        self.new_discount = DiscountDraft::default();
    }

    /// Replace the staged new discount.
    pub fn stage_discount(&mut self, draft: DiscountDraft) {
        self.new_discount = draft;
    }

    /// Reset the staged new discount.
    pub fn clear_discount_draft(&mut self) {
        self.new_discount = DiscountDraft::default();
    }

    /// Current draft, if any.
    pub fn draft(&self) -> Option<&Product> {
        self.draft.as_ref()
    }

    /// Staged new discount.
    pub const fn new_discount(&self) -> DiscountDraft {
        self.new_discount
    }

    /// Returns `true` while a product is being edited.
    pub const fn is_active(&self) -> bool {
        self.draft.is_some()
    }

    /// Returns `true` if the draft belongs to `id`.
    pub fn editing(&self, id: &ProductId) -> bool {
        self.draft.as_ref().is_some_and(|draft| &draft.id == id)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use testresult::TestResult;

    use super::*;

    fn widget() -> Product {
        Product::new("p1", "Widget", 10_000, 20)
    }

    #[test]
    fn begin_then_clear_leaves_session_empty() -> TestResult {
        let product = widget();
        let mut session = EditSession::new();

        session.begin_edit(&product);
        session.stage_discount(DiscountDraft::new(5, DiscountRate::from_percent(2)?));
        session.clear_edit();

        assert_eq!(session, EditSession::new());
        assert_eq!(product, widget());

        Ok(())
    }

    #[test]
    fn begin_edit_replaces_previous_draft() -> TestResult {
        let mut session = EditSession::new();
        session.begin_edit(&widget());
        session.update_field(&ProductId::from("p1"), &ProductPatch::name("Renamed"))?;

        session.begin_edit(&Product::new("p2", "Gadget", 500, 1));

        assert!(session.editing(&ProductId::from("p2")));
        assert!(!session.editing(&ProductId::from("p1")));

        Ok(())
    }

    #[test]
    fn update_field_ignores_other_products() {
        let mut session = EditSession::new();
        session.begin_edit(&widget());

        let result = session.update_field(&ProductId::from("p2"), &ProductPatch::price(1));

        assert_eq!(result, Err(SessionError::NotEditing(ProductId::from("p2"))));
        assert_eq!(session.draft().map(|d| d.price), Some(10_000));
    }

    #[test]
    fn update_field_requires_active_session() {
        let mut session = EditSession::new();

        assert!(
            session
                .update_field(&ProductId::from("p1"), &ProductPatch::stock(3))
                .is_err()
        );
    }

    #[test]
    fn commit_hands_over_draft_exactly_once() -> TestResult {
        let committed = RefCell::new(Vec::new());
        let mut session = EditSession::new();
        session.begin_edit(&widget());
        session.update_field(&ProductId::from("p1"), &ProductPatch::stock(7))?;
        let expected = session.draft().cloned();

        assert!(session.commit_edit(|draft| committed.borrow_mut().push(draft)));
        assert!(!session.commit_edit(|draft| committed.borrow_mut().push(draft)));

        assert_eq!(committed.borrow().len(), 1);
        assert_eq!(committed.borrow().first().cloned(), expected);
        assert!(!session.is_active());

        Ok(())
    }

    #[test]
    fn empty_discount_draft_does_not_validate() {
        assert_eq!(
            DiscountDraft::default().validate(),
            Err(DiscountError::ZeroQuantity)
        );
    }
}
