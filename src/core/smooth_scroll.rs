//! Smooth scrolling for in-page anchors

use super::view::{PageView, ViewNode};

/// Element id referenced by an in-page `href`, if any
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() { None } else { Some(id) }
}

/// Viewport offset that puts `target` just below the header
pub fn scroll_position<N: ViewNode>(target: &N, header: Option<&N>) -> f64 {
    let header_height = header.map_or(0.0, |h| h.offset_height());
    target.offset_top() - header_height
}

/// Handle a click on an in-page link.
///
/// Scrolls to the referenced element and returns the target offset, or
/// does nothing when the element does not exist.
pub fn scroll_to_anchor<V: PageView>(view: &V, href: &str, header: Option<&V::Node>) -> Option<f64> {
    let target = view.by_id(fragment_id(href)?)?;
    let top = scroll_position(&target, header);
    view.scroll_to(top);
    Some(top)
}
