//! Accordion

use rustc_hash::FxHashSet;

use crate::products::ProductId;

/// Set of product ids whose detail panel is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenSet {
    ids: FxHashSet<ProductId>,
}

impl OpenSet {
    /// Create an empty set; every panel starts closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `id`, returning `true` if the panel is now open.
    pub fn toggle(&mut self, id: &ProductId) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        }
    }

    /// Returns `true` if the panel for `id` is open.
    pub fn is_open(&self, id: &ProductId) -> bool {
        self.ids.contains(id)
    }

    /// Number of open panels.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if every panel is closed.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
