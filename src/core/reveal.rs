//! Entrance animations triggered by viewport intersection

use super::config::RevealConfig;
use super::view::ViewNode;

/// Marks blocks as revealed the first time they intersect the viewport.
///
/// The transition is one-way: leaving the viewport never removes the class.
#[derive(Debug, Clone)]
pub struct Revealer {
    revealed_class: &'static str,
}

impl Revealer {
    pub fn new(config: &RevealConfig) -> Self {
        Self {
            revealed_class: config.revealed_class,
        }
    }

    /// Handle one intersection entry, returning true if the block was newly revealed
    pub fn on_intersection<N: ViewNode>(&self, target: &N, is_intersecting: bool) -> bool {
        if !is_intersecting || target.has_class(self.revealed_class) {
            return false;
        }
        target.add_class(self.revealed_class);
        true
    }
}
