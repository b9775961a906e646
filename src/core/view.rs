//! Narrow view interface over the page
//!
//! The controllers never touch the DOM directly. They go through these two
//! traits so they can run against the browser (`ui::dom`) or against the
//! in-memory page used by the tests.

use super::error::SiteError;

/// A handle to one element of the page.
///
/// Handles are cheap to clone and compare by identity.
pub trait ViewNode: Clone + 'static {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    /// Replace the whole class attribute
    fn set_class_name(&self, class_name: &str);

    /// Flip a class, returning whether it is now present
    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }

    fn attribute(&self, name: &str) -> Option<String>;

    /// First descendant matching `selector`
    fn find(&self, selector: &str) -> Option<Self>;

    /// Closest ancestor (or self) matching `selector`
    fn closest(&self, selector: &str) -> Option<Self>;

    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    fn set_visible(&self, visible: bool);

    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);

    /// Distance from the top of the offset parent
    fn offset_top(&self) -> f64;
    fn offset_height(&self) -> f64;
    fn scroll_into_view(&self);

    /// Current `name → value` pairs of a form, in document order
    fn form_fields(&self) -> Vec<(String, String)>;
    fn reset_form(&self);

    /// Dispatch a synthetic click
    fn click(&self);

    /// Create a `tag` element with `class_name` as this node's next sibling
    fn insert_after(&self, tag: &str, class_name: &str) -> Result<Self, SiteError>;
}

/// Document-level capabilities.
pub trait PageView {
    type Node: ViewNode;

    fn query(&self, selector: &str) -> Option<Self::Node>;
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;
    fn by_id(&self, id: &str) -> Option<Self::Node>;

    /// Absolute vertical scroll offset of the viewport
    fn scroll_offset(&self) -> f64;

    /// Smoothly scroll the viewport to `top`
    fn scroll_to(&self, top: f64);

    /// Path component of the current URL
    fn path(&self) -> String;
}
