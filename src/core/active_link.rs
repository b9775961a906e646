//! Highlight the navigation link of the current page

use super::config::ActiveLinkConfig;
use super::view::{PageView, ViewNode};

fn last_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or_default()
}

/// Page identifier for a URL path, `home_page` when the path ends with `/`
pub fn current_page<'a>(path: &'a str, home_page: &'a str) -> &'a str {
    match last_segment(path) {
        "" => home_page,
        page => page,
    }
}

/// Page identifier a link points to
pub fn link_page(href: &str) -> &str {
    last_segment(href)
}

/// Flag the links pointing at the current page and clear the others.
///
/// Returns how many links were marked active. Safe to run repeatedly.
pub fn mark_active_links<V: PageView>(view: &V, config: &ActiveLinkConfig) -> usize {
    let path = view.path();
    let current = current_page(&path, config.home_page);
    let mut marked = 0;

    for link in view.query_all(config.link) {
        let is_current = link
            .attribute("href")
            .is_some_and(|href| link_page(&href) == current);
        if is_current {
            link.add_class(config.active_class);
            marked += 1;
        } else {
            link.remove_class(config.active_class);
        }
    }
    marked
}
