//! `web-sys` implementation of the view traits

use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions, Window,
};

use crate::core::error::SiteError;
use crate::core::view::{PageView, ViewNode};

/// A live DOM element
#[derive(Clone, Debug, PartialEq)]
pub struct DomNode(pub Element);

impl DomNode {
    pub fn element(&self) -> &Element {
        &self.0
    }

    fn html(&self) -> Option<&HtmlElement> {
        self.0.dyn_ref::<HtmlElement>()
    }
}

impl ViewNode for DomNode {
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.0.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.0.class_list().remove_1(class);
    }

    fn set_class_name(&self, class_name: &str) {
        self.0.set_class_name(class_name);
    }

    fn toggle_class(&self, class: &str) -> bool {
        self.0.class_list().toggle(class).unwrap_or(false)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn find(&self, selector: &str) -> Option<Self> {
        self.0.query_selector(selector).ok().flatten().map(DomNode)
    }

    fn closest(&self, selector: &str) -> Option<Self> {
        self.0.closest(selector).ok().flatten().map(DomNode)
    }

    fn text(&self) -> String {
        self.0.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_visible(&self, visible: bool) {
        if let Some(html) = self.html() {
            let display = if visible { "block" } else { "none" };
            let _ = html.style().set_property("display", display);
        }
    }

    fn is_disabled(&self) -> bool {
        match self.0.dyn_ref::<HtmlButtonElement>() {
            Some(button) => button.disabled(),
            None => self.0.has_attribute("disabled"),
        }
    }

    fn set_disabled(&self, disabled: bool) {
        if let Some(button) = self.0.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
        } else if disabled {
            let _ = self.0.set_attribute("disabled", "");
        } else {
            let _ = self.0.remove_attribute("disabled");
        }
    }

    fn offset_top(&self) -> f64 {
        self.html().map_or(0.0, |h| f64::from(h.offset_top()))
    }

    fn offset_height(&self) -> f64 {
        self.html().map_or(0.0, |h| f64::from(h.offset_height()))
    }

    fn scroll_into_view(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Nearest);
        self.0
            .scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn form_fields(&self) -> Vec<(String, String)> {
        let Some(form) = self.0.dyn_ref::<HtmlFormElement>() else {
            return Vec::new();
        };
        let Ok(data) = web_sys::FormData::new_with_form(form) else {
            return Vec::new();
        };
        let Ok(Some(entries)) = js_sys::try_iter(&data) else {
            return Vec::new();
        };

        entries
            .filter_map(Result::ok)
            .filter_map(|entry| {
                let pair: js_sys::Array = entry.unchecked_into();
                // File inputs yield non-string values and are skipped
                Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
            })
            .collect()
    }

    fn reset_form(&self) {
        if let Some(form) = self.0.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn click(&self) {
        if let Some(html) = self.html() {
            html.click();
        }
    }

    fn insert_after(&self, tag: &str, class_name: &str) -> Result<Self, SiteError> {
        let document = self
            .0
            .owner_document()
            .ok_or_else(|| SiteError::missing("document"))?;
        let element = document.create_element(tag).map_err(SiteError::dom)?;
        element.set_class_name(class_name);
        self.0.after_with_node_1(&element).map_err(SiteError::dom)?;
        Ok(DomNode(element))
    }
}

/// The current document and window
pub struct DomView {
    window: Window,
    document: Document,
}

impl DomView {
    pub fn new() -> Result<Self, SiteError> {
        let window = web_sys::window().ok_or_else(|| SiteError::missing("window"))?;
        let document = window
            .document()
            .ok_or_else(|| SiteError::missing("document"))?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl PageView for DomView {
    type Node = DomNode;

    fn query(&self, selector: &str) -> Option<DomNode> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .map(DomNode)
    }

    fn query_all(&self, selector: &str) -> Vec<DomNode> {
        let Ok(list) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(DomNode)
            .collect()
    }

    fn by_id(&self, id: &str) -> Option<DomNode> {
        self.document.get_element_by_id(id).map(DomNode)
    }

    fn scroll_offset(&self) -> f64 {
        self.window.page_y_offset().unwrap_or(0.0)
    }

    fn scroll_to(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn path(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }
}
