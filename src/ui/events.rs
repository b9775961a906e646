//! Event listener helpers
//!
//! Listeners stay registered for the page lifetime, so the closures are
//! leaked with `Closure::forget`.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

use crate::core::error::SiteError;

/// Register `handler` for `event` on `target`
pub fn listen(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), SiteError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(SiteError::dom)?;
    closure.forget();
    Ok(())
}

/// Like `listen`, but marks the listener passive (it never calls `preventDefault`)
pub fn listen_passive(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), SiteError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(SiteError::dom)?;
    closure.forget();
    Ok(())
}

/// Run `f` on the next animation frame
pub fn next_frame(window: &web_sys::Window, f: impl FnOnce() + 'static) -> Result<(), SiteError> {
    let callback = Closure::once_into_js(f);
    window
        .request_animation_frame(callback.unchecked_ref())
        .map_err(SiteError::dom)?;
    Ok(())
}
