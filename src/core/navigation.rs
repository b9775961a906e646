//! Mobile navigation menu and dropdown sub-menus

use super::config::NavigationConfig;
use super::view::{PageView, ViewNode};

/// What the browser should do with a navigation link click
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkAction {
    /// Let the navigation happen
    Follow,
    /// Cancel the default navigation
    PreventDefault,
}

/// Mobile menu state, held as the open class on the toggle and the panel
pub struct NavigationMenu<N: ViewNode> {
    toggle: N,
    panel: Option<N>,
    config: NavigationConfig,
}

impl<N: ViewNode> NavigationMenu<N> {
    /// Returns `None` when the page has no menu toggle button
    pub fn bind<V: PageView<Node = N>>(view: &V, config: &NavigationConfig) -> Option<Self> {
        let toggle = view.query(config.menu_toggle)?;
        Some(Self {
            toggle,
            panel: view.query(config.panel),
            config: config.clone(),
        })
    }

    pub fn toggle_button(&self) -> &N {
        &self.toggle
    }

    pub fn is_open(&self) -> bool {
        self.toggle.has_class(self.config.open_class)
    }

    /// Flip the menu open/closed
    pub fn toggle(&self) -> bool {
        let open = self.toggle.toggle_class(self.config.open_class);
        if let Some(panel) = &self.panel {
            panel.toggle_class(self.config.open_class);
        }
        open
    }

    pub fn close(&self) {
        self.toggle.remove_class(self.config.open_class);
        if let Some(panel) = &self.panel {
            panel.remove_class(self.config.open_class);
        }
    }

    /// A `.nav-link` was clicked.
    ///
    /// Links owning a dropdown marker expand their item instead of
    /// navigating; every other link closes the menu.
    pub fn on_link_click(&self, link: &N) -> LinkAction {
        if link.find(self.config.dropdown_marker).is_some() {
            if let Some(item) = link.closest(self.config.nav_item) {
                item.toggle_class(self.config.expanded_class);
            }
            LinkAction::PreventDefault
        } else {
            self.close();
            LinkAction::Follow
        }
    }

    /// A link inside a dropdown was clicked
    pub fn on_dropdown_link_click(&self) -> LinkAction {
        self.close();
        LinkAction::Follow
    }
}
