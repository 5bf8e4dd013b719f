//! View model for a single product panel.

use crate::{editor::EditorState, products::Product, session::DiscountDraft};

/// What a product panel shows below its header.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelBody {
    /// Collapsed.
    Closed,

    /// Expanded, showing the catalog tiers.
    ReadOnly {
        /// One line per tier, in display order
        discounts: Vec<String>,
    },

    /// Expanded, showing the edit form.
    Editing {
        /// Draft being edited
        draft: Product,
        /// New discount being typed in
        staged: DiscountDraft,
    },
}

/// Everything needed to render one product panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelView {
    /// Stable test identifier, `product-N` counting from one
    pub test_id: String,

    /// Toggle button label
    pub header: String,

    /// Panel body
    pub body: PanelBody,
}

/// Toggle button label for `product`.
pub fn panel_header(product: &Product) -> String {
    format!(
        "{} - {} (stock: {})",
        product.name, product.price, product.stock
    )
}

impl EditorState {
    /// Build the view for `product`, shown at position `index` in the list.
    ///
    /// The edit form only appears while the panel is open and the draft
    /// belongs to this product. A draft survives its panel being closed.
    pub fn panel(&self, product: &Product, index: usize) -> PanelView {
        let body = if self.open.is_open(&product.id) {
            match self.session.draft() {
                Some(draft) if draft.id == product.id => PanelBody::Editing {
                    draft: draft.clone(),
                    staged: self.session.new_discount(),
                },
                _ => PanelBody::ReadOnly {
                    discounts: product.discounts.iter().map(ToString::to_string).collect(),
                },
            }
        } else {
            PanelBody::Closed
        };

        PanelView {
            test_id: format!("product-{}", index.saturating_add(1)),
            header: panel_header(product),
            body,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        discounts::{Discount, DiscountRate},
        editor::{Action, EditorState},
        products::ProductId,
    };

    use super::*;

    fn widget() -> TestResult<Product> {
        Ok(Product::new("p1", "Widget", 10_000, 20)
            .with_discounts([Discount::new(10, DiscountRate::from_percent(5)?)?]))
    }

    #[test]
    fn closed_panel() -> TestResult {
        let view = EditorState::new().panel(&widget()?, 0);

        assert_eq!(view.test_id, "product-1");
        assert_eq!(view.header, "Widget - 10000 (stock: 20)");
        assert_eq!(view.body, PanelBody::Closed);

        Ok(())
    }

    #[test]
    fn open_panel_lists_tiers() -> TestResult {
        let products = vec![widget()?];
        let state = EditorState::new()
            .reduce(&products, Action::Toggle { product: ProductId::from("p1") })?
            .state;

        let view = state.panel(&widget()?, 2);

        assert_eq!(view.test_id, "product-3");
        assert_eq!(
            view.body,
            PanelBody::ReadOnly {
                discounts: vec!["10+ units: 5% off".to_string()]
            }
        );

        Ok(())
    }

    #[test]
    fn editing_hidden_while_closed_and_restored_on_reopen() -> TestResult {
        let products = vec![widget()?];
        let toggle = Action::Toggle { product: ProductId::from("p1") };

        let state = EditorState::new().reduce(&products, toggle.clone())?.state;
        let state = state
            .reduce(&products, Action::BeginEdit { product: ProductId::from("p1") })?
            .state;
        assert!(matches!(state.panel(&widget()?, 0).body, PanelBody::Editing { .. }));

        let state = state.reduce(&products, toggle.clone())?.state;
        assert_eq!(state.panel(&widget()?, 0).body, PanelBody::Closed);

        let state = state.reduce(&products, toggle)?.state;
        assert!(matches!(state.panel(&widget()?, 0).body, PanelBody::Editing { .. }));

        Ok(())
    }
}
