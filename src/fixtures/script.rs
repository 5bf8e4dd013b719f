//! Action Script Fixtures
//!
//! A script is a recorded sequence of user actions. Text inputs are kept as
//! typed so they go through the same validation as the edit form.

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    catalog::Catalog,
    editor::{Action, EditorError, EditorState, ProductEditor, ProductUpdateSink},
    input::{DiscountInput, FieldInput, InputError},
    products::{Product, ProductId},
};

/// Wrapper for the actions in YAML
#[derive(Debug, Deserialize)]
pub struct ScriptFixture {
    /// Steps in dispatch order
    pub actions: Vec<ScriptStep>,
}

/// A recorded user action.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ScriptStep {
    /// Click a product's toggle button.
    Toggle {
        /// Target product
        product: ProductId,
    },

    /// Click "edit".
    BeginEdit {
        /// Target product
        product: ProductId,
    },

    /// Type into the name, price or stock inputs.
    UpdateField {
        /// Target product
        product: ProductId,
        /// Name text
        #[serde(default)]
        name: Option<String>,
        /// Price text
        #[serde(default)]
        price: Option<String>,
        /// Stock text
        #[serde(default)]
        stock: Option<String>,
    },

    /// Click "done".
    CommitEdit,

    /// Abandon the edit.
    ClearEdit,

    /// Type into the new discount inputs.
    StageDiscount {
        /// Quantity text
        #[serde(default)]
        quantity: Option<String>,
        /// Rate text, as a percentage
        #[serde(default)]
        rate: Option<String>,
    },

    /// Reset the new discount inputs.
    ClearDiscountDraft,

    /// Click "remove" on a tier.
    RemoveDiscount {
        /// Target product
        product: ProductId,
        /// Tier position
        index: usize,
    },

    /// Click "add discount".
    AddDiscount {
        /// Target product
        product: ProductId,
    },
}

impl ScriptStep {
    /// Validate the step's text inputs and turn it into an [`Action`].
    ///
    /// Discount inputs are overlaid on the draft currently staged in `state`.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] when a text input does not hold a valid value.
    pub fn to_action(&self, state: &EditorState) -> Result<Action, InputError> {
        Ok(match self {
            ScriptStep::Toggle { product } => Action::Toggle {
                product: product.clone(),
            },
            ScriptStep::BeginEdit { product } => Action::BeginEdit {
                product: product.clone(),
            },
            ScriptStep::UpdateField {
                product,
                name,
                price,
                stock,
            } => Action::UpdateField {
                product: product.clone(),
                patch: FieldInput {
                    name: name.clone(),
                    price: price.clone(),
                    stock: stock.clone(),
                }
                .parse()?,
            },
            ScriptStep::CommitEdit => Action::CommitEdit,
            ScriptStep::ClearEdit => Action::ClearEdit,
            ScriptStep::StageDiscount { quantity, rate } => Action::StageDiscount(
                DiscountInput {
                    quantity: quantity.clone(),
                    rate: rate.clone(),
                }
                .apply(state.session.new_discount())?,
            ),
            ScriptStep::ClearDiscountDraft => Action::ClearDiscountDraft,
            ScriptStep::RemoveDiscount { product, index } => Action::RemoveDiscount {
                product: product.clone(),
                index: *index,
            },
            ScriptStep::AddDiscount { product } => Action::AddDiscount {
                product: product.clone(),
            },
        })
    }
}

/// Why a step was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    /// A text input was invalid.
    #[error(transparent)]
    Input(#[from] InputError),

    /// The editor refused the action.
    #[error(transparent)]
    Editor(#[from] EditorError),
}

/// Outcome of replaying a script.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayReport {
    /// Steps that were applied
    pub applied: usize,

    /// Rejected steps, by position in the script
    pub rejected: Vec<(usize, StepError)>,
}

/// Replay `steps` against `catalog`.
///
/// A rejected step is recorded and skipped, the way a form ignores input it
/// cannot use; the remaining steps still run.
pub fn replay(
    steps: &[ScriptStep],
    editor: &mut ProductEditor,
    catalog: &mut Catalog,
) -> ReplayReport {
    let mut report = ReplayReport::default();

    for (position, step) in steps.iter().enumerate() {
        match replay_step(step, editor, catalog) {
            Ok(()) => report.applied += 1,
            Err(error) => {
                warn!(position, %error, "step rejected");
                report.rejected.push((position, error));
            }
        }
    }

    info!(
        applied = report.applied,
        rejected = report.rejected.len(),
        "script replayed"
    );

    report
}

fn replay_step(
    step: &ScriptStep,
    editor: &mut ProductEditor,
    catalog: &mut Catalog,
) -> Result<(), StepError> {
    let action = step.to_action(editor.state())?;
    let mut updates = Vec::new();

    editor.dispatch(catalog.products(), action, &mut |product: Product| {
        updates.push(product);
    })?;

    for product in updates {
        catalog.on_product_update(product);
    }

    Ok(())
}
