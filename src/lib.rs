//! Patrimoine - page behavior for the Valeurs & Patrimoine website
//!
//! Enhances the static marketing pages with a mobile menu, a scroll-aware
//! header, smooth anchor scrolling, entrance animations, an FAQ accordion,
//! active-link highlighting, a testimonial strip and the contact form,
//! compiled to WebAssembly.
//!
//! The behavior lives in [`core`] and is written against a small view
//! interface; [`ui`] provides the DOM implementation (feature `csr`).

pub mod core;

#[cfg(feature = "csr")]
pub mod app;
#[cfg(feature = "csr")]
pub mod ui;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    crate::app::boot();
}
