//! Browser-independent page behavior
//!
//! Each feature is a small controller written against the `view` traits.

pub mod active_link;
pub mod config;
pub mod contact;
pub mod error;
pub mod faq;
pub mod header;
pub mod keyboard;
pub mod navigation;
pub mod relative_date;
pub mod reveal;
pub mod smooth_scroll;
pub mod testimonials;
pub mod view;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{PayloadEncoding, SiteConfig};
pub use error::SiteError;
pub use view::{PageView, ViewNode};
