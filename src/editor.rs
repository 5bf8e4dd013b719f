//! Editor
//!
//! Ties the accordion and the edit session together. Every user action is fed
//! through [`EditorState::reduce`], which never mutates in place: it returns
//! the next state plus any product that must be sent upward. [`ProductEditor`]
//! wraps that in the stateful shape a host application drives.

use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::{
    accordion::OpenSet,
    discounts::{DiscountError, append_product_discount, remove_product_discount},
    products::{Product, ProductId, ProductPatch, find_product},
    session::{DiscountDraft, EditSession, SessionError},
};

/// Editor errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// The product is not in the catalog.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// Editing starts from an open panel.
    #[error("panel for product {0} is closed")]
    PanelClosed(ProductId),

    /// Adding a discount requires an active edit session.
    #[error("no product is being edited")]
    NoActiveSession,

    /// Edit session error
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Discount tier error
    #[error(transparent)]
    Discount(#[from] DiscountError),
}

/// User actions understood by the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Expand or collapse a product's panel.
    Toggle {
        /// Target product
        product: ProductId,
    },

    /// Start editing a product whose panel is open.
    BeginEdit {
        /// Target product
        product: ProductId,
    },

    /// Change fields of the draft.
    UpdateField {
        /// Product the edit form belongs to
        product: ProductId,
        /// Already-validated field values
        patch: ProductPatch,
    },

    /// Send the draft upward and end the session.
    CommitEdit,

    /// Discard the draft.
    ClearEdit,

    /// Replace the staged new discount.
    StageDiscount(DiscountDraft),

    /// Reset the staged new discount.
    ClearDiscountDraft,

    /// Remove a tier from the catalog version of a product.
    RemoveDiscount {
        /// Target product
        product: ProductId,
        /// Tier position
        index: usize,
    },

    /// Append the staged discount to the catalog version of a product.
    AddDiscount {
        /// Target product
        product: ProductId,
    },
}

impl Action {
    /// Short action name, for logging.
    pub const fn name(&self) -> &'static str {
        match self {
            Action::Toggle { .. } => "toggle",
            Action::BeginEdit { .. } => "begin_edit",
            Action::UpdateField { .. } => "update_field",
            Action::CommitEdit => "commit_edit",
            Action::ClearEdit => "clear_edit",
            Action::StageDiscount(_) => "stage_discount",
            Action::ClearDiscountDraft => "clear_discount_draft",
            Action::RemoveDiscount { .. } => "remove_discount",
            Action::AddDiscount { .. } => "add_discount",
        }
    }
}

/// Receives every new product version the editor produces.
pub trait ProductUpdateSink {
    /// Called with the updated product.
    fn on_product_update(&mut self, product: Product);
}

impl<F: FnMut(Product)> ProductUpdateSink for F {
    fn on_product_update(&mut self, product: Product) {
        self(product);
    }
}

/// Result of reducing one action.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// State after the action
    pub state: EditorState,

    /// Product to propagate upward, if the action produced one
    pub emitted: Option<Product>,
}

/// Editor UI state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    /// Expanded panels
    pub open: OpenSet,

    /// Current edit session
    pub session: EditSession,
}

impl EditorState {
    /// Create a state with every panel closed and nothing being edited.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the state that follows `action`.
    ///
    /// Lookups go to `products`, the catalog as the host currently sees it;
    /// discount changes are made against that version rather than the draft.
    ///
    /// # Errors
    ///
    /// Returns an [`EditorError`] when the target product is missing, its panel
    /// is closed when editing starts, the action needs an edit session that is
    /// not there, or a discount change is invalid.
    pub fn reduce(&self, products: &[Product], action: Action) -> Result<Transition, EditorError> {
        let mut next = self.clone();
        let mut emitted = None;

        match action {
            Action::Toggle { product } => {
                next.open.toggle(&product);
            }
            Action::BeginEdit { product } => {
                let source = lookup(products, &product)?;

                if !self.open.is_open(&product) {
                    return Err(EditorError::PanelClosed(product));
                }

                next.session.begin_edit(source);
            }
            Action::UpdateField { product, patch } => {
                next.session.update_field(&product, &patch)?;
            }
            Action::CommitEdit => {
                emitted = next.session.take_draft();
            }
            Action::ClearEdit => next.session.clear_edit(),
            Action::StageDiscount(draft) => next.session.stage_discount(draft),
            Action::ClearDiscountDraft => next.session.clear_discount_draft(),
            Action::RemoveDiscount { product, index } => {
                let updated = remove_product_discount(lookup(products, &product)?, index)?;

                next.session.begin_edit(&updated);
                emitted = Some(updated);
            }
            Action::AddDiscount { product } => {
                let source = lookup(products, &product)?;

                if !self.session.is_active() {
                    return Err(EditorError::NoActiveSession);
                }

                let discount = self.session.new_discount().validate()?;
                let updated = append_product_discount(source, discount);

                next.session.begin_edit(&updated);
                next.session.clear_discount_draft();
                emitted = Some(updated);
            }
        }

        Ok(Transition {
            state: next,
            emitted,
        })
    }
}

fn lookup<'a>(products: &'a [Product], id: &ProductId) -> Result<&'a Product, EditorError> {
    find_product(products, id).ok_or_else(|| EditorError::ProductNotFound(id.clone()))
}

/// Stateful editor driven by a host application.
#[derive(Debug, Clone, Default)]
pub struct ProductEditor {
    state: EditorState,
}

impl ProductEditor {
    /// Create an editor with every panel closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state.
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Apply `action`, forwarding any new product version to `sink`.
    ///
    /// On error the state is left exactly as it was.
    ///
    /// # Errors
    ///
    /// See [`EditorState::reduce`].
    #[instrument(skip_all, fields(action = action.name()))]
    pub fn dispatch<S>(
        &mut self,
        products: &[Product],
        action: Action,
        sink: &mut S,
    ) -> Result<(), EditorError>
    where
        S: ProductUpdateSink + ?Sized,
    {
        let Transition { state, emitted } = self
            .state
            .reduce(products, action)
            .inspect_err(|error| warn!(%error, "action rejected"))?;

        self.state = state;

        if let Some(product) = emitted {
            debug!(product_id = %product.id, tiers = product.discounts.len(), "product updated");
            sink.on_product_update(product);
        }

        Ok(())
    }
}
