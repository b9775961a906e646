//! Scroll-reactive header
//!
//! The header slides away while the visitor scrolls down past a threshold
//! and comes back as soon as they scroll up or reach the top of the page.

use super::config::HeaderConfig;
use super::view::{PageView, ViewNode};

/// Header visibility derived from a scroll notification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeaderState {
    Shown,
    Hidden,
}

/// Direction-detecting filter over successive scroll offsets.
///
/// Owns the last observed offset; one value per header.
#[derive(Debug, Clone)]
pub struct HeaderVisibility {
    last_offset: f64,
    hide_threshold: f64,
}

impl HeaderVisibility {
    pub fn new(hide_threshold: f64) -> Self {
        Self {
            last_offset: 0.0,
            hide_threshold,
        }
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Feed one scroll offset and get the resulting visibility.
    ///
    /// At or above the top the header is always shown and the recorded
    /// offset is left as is.
    pub fn observe(&mut self, offset: f64) -> HeaderState {
        if offset <= 0.0 {
            return HeaderState::Shown;
        }

        let state = if offset > self.last_offset && offset > self.hide_threshold {
            HeaderState::Hidden
        } else {
            HeaderState::Shown
        };

        self.last_offset = offset;
        state
    }
}

/// Applies `HeaderVisibility` to the header element
pub struct HeaderController<N: ViewNode> {
    header: N,
    hidden_class: &'static str,
    visibility: HeaderVisibility,
}

impl<N: ViewNode> HeaderController<N> {
    /// Returns `None` when the page has no header
    pub fn bind<V: PageView<Node = N>>(view: &V, config: &HeaderConfig) -> Option<Self> {
        let header = view.query(config.selector)?;
        Some(Self {
            header,
            hidden_class: config.hidden_class,
            visibility: HeaderVisibility::new(config.hide_threshold),
        })
    }

    /// Read the current offset from the page and apply it
    pub fn on_page_scroll<V: PageView<Node = N>>(&mut self, view: &V) -> HeaderState {
        self.on_scroll(view.scroll_offset())
    }

    pub fn on_scroll(&mut self, offset: f64) -> HeaderState {
        let state = self.visibility.observe(offset);
        match state {
            HeaderState::Hidden => self.header.add_class(self.hidden_class),
            HeaderState::Shown => self.header.remove_class(self.hidden_class),
        }
        state
    }
}
