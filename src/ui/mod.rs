//! Browser bindings: the DOM-backed view, event plumbing, the fetch
//! transport and the Leptos testimonial strip.

pub mod dom;
pub mod events;
pub mod testimonial_strip;
pub mod transport;

pub use dom::{DomNode, DomView};
pub use testimonial_strip::{TestimonialStrip, inject_testimonial_strip};
pub use transport::FetchTransport;
