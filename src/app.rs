//! Page start-up
//!
//! Waits for the document structure, then wires every feature
//! independently: a feature whose elements are missing is skipped and a
//! feature that fails to bind is logged without affecting the others.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::Utc;
use leptos::logging::{error, log};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, KeyboardEvent};

use crate::core::active_link::mark_active_links;
use crate::core::config::{
    FaqConfig, HeaderConfig, NavigationConfig, RevealConfig, ServiceCardConfig, SiteConfig,
};
use crate::core::contact::ContactForm;
use crate::core::error::SiteError;
use crate::core::faq::FaqAccordion;
use crate::core::header::HeaderController;
use crate::core::keyboard::activate_on_key;
use crate::core::navigation::{LinkAction, NavigationMenu};
use crate::core::reveal::Revealer;
use crate::core::smooth_scroll::scroll_to_anchor;
use crate::core::view::{PageView, ViewNode};
use crate::ui::dom::{DomNode, DomView};
use crate::ui::events::{listen, listen_passive, next_frame};
use crate::ui::testimonial_strip::inject_testimonial_strip;
use crate::ui::transport::FetchTransport;

/// Entry point: run `init` once the document has been parsed
pub fn boot() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::from_build_env();
    let view = match DomView::new() {
        Ok(view) => Rc::new(view),
        Err(err) => {
            error!("Page controller not started: {}", err);
            return;
        }
    };

    if view.document().ready_state() != "loading" {
        init(view, config);
        return;
    }

    let document = view.document().clone();
    let mut pending = Some((view, config));
    let result = listen(&document, "DOMContentLoaded", move |_| {
        if let Some((view, config)) = pending.take() {
            init(view, config);
        }
    });
    if let Err(err) = result {
        error!("Could not wait for DOMContentLoaded: {}", err);
    }
}

fn report(feature: &str, result: Result<(), SiteError>) {
    if let Err(err) = result {
        error!("{} not enabled: {}", feature, err);
    }
}

fn init(view: Rc<DomView>, config: SiteConfig) {
    report("Navigation", bind_navigation(&view, &config.navigation));
    report("Header", bind_header(&view, &config.header));
    report(
        "Smooth scroll",
        bind_smooth_scroll(&view, &config.header, config.smooth_scroll.anchor_selector),
    );
    report("Reveal animations", bind_reveal(&view, &config.reveal));
    report("FAQ", bind_faq(&view, &config.faq));

    let marked = mark_active_links(view.as_ref(), &config.active_link);
    log!("Active nav links: {}", marked);

    report("Service cards", bind_service_cards(&view, &config.service_cards));
    report("Contact form", bind_contact_form(&view, &config));

    match inject_testimonial_strip(&view, &config.reviews) {
        Ok(true) => {}
        Ok(false) => log!("No {} on this page, testimonials skipped", config.reviews.anchor),
        Err(err) => error!("Testimonials not injected: {}", err),
    }
}

fn bind_navigation(view: &Rc<DomView>, config: &NavigationConfig) -> Result<(), SiteError> {
    let Some(menu) = NavigationMenu::bind(view.as_ref(), config) else {
        log!("No {} on this page, mobile menu skipped", config.menu_toggle);
        return Ok(());
    };
    let menu = Rc::new(menu);

    let toggle = menu.toggle_button().clone();
    let on_toggle = menu.clone();
    listen(toggle.element(), "click", move |_| {
        on_toggle.toggle();
    })?;

    for link in view.query_all(config.link) {
        let menu = menu.clone();
        let target = link.clone();
        listen(link.element(), "click", move |event| {
            if menu.on_link_click(&target) == LinkAction::PreventDefault {
                event.prevent_default();
            }
        })?;
    }

    for link in view.query_all(config.dropdown_link) {
        let menu = menu.clone();
        listen(link.element(), "click", move |_| {
            menu.on_dropdown_link_click();
        })?;
    }
    Ok(())
}

fn bind_header(view: &Rc<DomView>, config: &HeaderConfig) -> Result<(), SiteError> {
    let Some(controller) = HeaderController::bind(view.as_ref(), config) else {
        log!("No {} on this page, header behavior skipped", config.selector);
        return Ok(());
    };
    let controller = Rc::new(RefCell::new(controller));
    let frame_pending = Rc::new(Cell::new(false));

    // One offset read per animation frame, however many scroll events fire
    let page = view.clone();
    listen_passive(view.window(), "scroll", move |_| {
        if frame_pending.replace(true) {
            return;
        }
        let controller = controller.clone();
        let pending = frame_pending.clone();
        let frame_page = page.clone();
        let scheduled = next_frame(page.window(), move || {
            pending.set(false);
            controller.borrow_mut().on_page_scroll(&*frame_page);
        });
        if let Err(err) = scheduled {
            error!("Header update not scheduled: {}", err);
            frame_pending.set(false);
        }
    })
}

fn bind_smooth_scroll(
    view: &Rc<DomView>,
    header: &HeaderConfig,
    anchor_selector: &str,
) -> Result<(), SiteError> {
    let header = view.query(header.selector);

    for anchor in view.query_all(anchor_selector) {
        let page = view.clone();
        let header = header.clone();
        let link = anchor.clone();
        listen(anchor.element(), "click", move |event| {
            event.prevent_default();
            let href = link.attribute("href").unwrap_or_default();
            scroll_to_anchor(page.as_ref(), &href, header.as_ref());
        })?;
    }
    Ok(())
}

fn bind_reveal(view: &Rc<DomView>, config: &RevealConfig) -> Result<(), SiteError> {
    let revealer = Revealer::new(config);
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                revealer.on_intersection(&DomNode(entry.target()), entry.is_intersecting());
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin());

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(SiteError::dom)?;
    callback.forget();

    for target in view.query_all(config.targets) {
        observer.observe(target.element());
    }
    Ok(())
}

fn bind_faq(view: &Rc<DomView>, config: &FaqConfig) -> Result<(), SiteError> {
    let faq = Rc::new(FaqAccordion::bind(view.as_ref(), config));

    for (index, item) in faq.items().iter().enumerate() {
        let Some(question) = item.find(config.question) else {
            continue;
        };
        let faq = faq.clone();
        listen(question.element(), "click", move |_| {
            faq.toggle(index);
        })?;
    }
    Ok(())
}

fn bind_service_cards(view: &Rc<DomView>, config: &ServiceCardConfig) -> Result<(), SiteError> {
    for card in view.query_all(config.selector) {
        let target = card.clone();
        listen(card.element(), "keypress", move |event| {
            if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                activate_on_key(&target, &key_event.key());
            }
        })?;
    }
    Ok(())
}

fn bind_contact_form(view: &Rc<DomView>, config: &SiteConfig) -> Result<(), SiteError> {
    let Some(form) = ContactForm::bind(view.as_ref(), &config.contact, FetchTransport)? else {
        log!("No #{} on this page, contact form skipped", config.contact.form_id);
        return Ok(());
    };
    let form = Rc::new(form);

    let form_node = form.form().clone();
    listen(form_node.element(), "submit", move |event| {
        event.prevent_default();
        let form = form.clone();
        wasm_bindgen_futures::spawn_local(async move {
            form.submit(Utc::now()).await;
        });
    })
}
