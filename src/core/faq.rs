//! FAQ accordion with a single expanded item

use super::config::FaqConfig;
use super::view::{PageView, ViewNode};

pub struct FaqAccordion<N: ViewNode> {
    items: Vec<N>,
    expanded_class: &'static str,
}

impl<N: ViewNode> FaqAccordion<N> {
    pub fn bind<V: PageView<Node = N>>(view: &V, config: &FaqConfig) -> Self {
        Self {
            items: view.query_all(config.item),
            expanded_class: config.expanded_class,
        }
    }

    pub fn items(&self) -> &[N] {
        &self.items
    }

    /// Index of the expanded item, if any
    pub fn expanded(&self) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.has_class(self.expanded_class))
    }

    /// Question of item `index` was clicked.
    ///
    /// Collapses every item, then expands the clicked one unless it was the
    /// one already open. Returns whether it ends up expanded.
    pub fn toggle(&self, index: usize) -> bool {
        let Some(clicked) = self.items.get(index) else {
            return false;
        };
        let was_expanded = clicked.has_class(self.expanded_class);

        for item in &self.items {
            item.remove_class(self.expanded_class);
        }

        if !was_expanded {
            clicked.add_class(self.expanded_class);
        }
        !was_expanded
    }
}
