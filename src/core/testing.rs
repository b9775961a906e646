//! In-memory page used by the controller tests
//!
//! `FakeNode` is a tiny element tree with just enough selector support for
//! the selectors in `SiteConfig` (tag, `.class`, `#id`, `[attr]`,
//! `[attr="v"]`, `[attr^="v"]` and comma lists). No combinators.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use super::error::SiteError;
use super::view::{PageView, ViewNode};

#[derive(Default)]
struct NodeData {
    tag: String,
    classes: Vec<String>,
    attrs: BTreeMap<String, String>,
    text: String,
    children: Vec<FakeNode>,
    parent: Weak<RefCell<NodeData>>,
    offset_top: f64,
    offset_height: f64,
    disabled: bool,
    visible: Option<bool>,
    fields: Vec<(String, String)>,
    scrolled_into_view: usize,
    clicks: usize,
}

#[derive(Clone)]
pub struct FakeNode(Rc<RefCell<NodeData>>);

impl PartialEq for FakeNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl std::fmt::Debug for FakeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let data = self.0.borrow();
        write!(f, "<{} class=\"{}\">", data.tag, data.classes.join(" "))
    }
}

impl FakeNode {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(NodeData {
            tag: tag.to_string(),
            ..Default::default()
        })))
    }

    pub fn with_class(self, class: &str) -> Self {
        for c in class.split_whitespace() {
            self.add_class(c);
        }
        self
    }

    pub fn with_attr(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .attrs
            .insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    pub fn with_text(self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_geometry(self, offset_top: f64, offset_height: f64) -> Self {
        {
            let mut data = self.0.borrow_mut();
            data.offset_top = offset_top;
            data.offset_height = offset_height;
        }
        self
    }

    pub fn with_field(self, name: &str, value: &str) -> Self {
        self.0
            .borrow_mut()
            .fields
            .push((name.to_string(), value.to_string()));
        self
    }

    pub fn with_child(self, child: FakeNode) -> Self {
        self.append(child);
        self
    }

    pub fn append(&self, child: FakeNode) {
        child.0.borrow_mut().parent = Rc::downgrade(&self.0);
        self.0.borrow_mut().children.push(child);
    }

    pub fn children(&self) -> Vec<FakeNode> {
        self.0.borrow().children.clone()
    }

    pub fn classes(&self) -> Vec<String> {
        self.0.borrow().classes.clone()
    }

    pub fn visible(&self) -> Option<bool> {
        self.0.borrow().visible
    }

    pub fn scrolled_into_view(&self) -> usize {
        self.0.borrow().scrolled_into_view
    }

    pub fn clicks(&self) -> usize {
        self.0.borrow().clicks
    }

    fn parent(&self) -> Option<FakeNode> {
        self.0.borrow().parent.upgrade().map(FakeNode)
    }

    fn descendants(&self) -> Vec<FakeNode> {
        let mut out = Vec::new();
        for child in self.0.borrow().children.iter() {
            out.push(child.clone());
            out.extend(child.descendants());
        }
        out
    }

    fn matches(&self, selector: &str) -> bool {
        selector
            .split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .any(|part| Compound::parse(part).matches(self))
    }
}

impl ViewNode for FakeNode {
    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.iter().any(|c| c == class)
    }

    fn add_class(&self, class: &str) {
        if !self.has_class(class) {
            self.0.borrow_mut().classes.push(class.to_string());
        }
    }

    fn remove_class(&self, class: &str) {
        self.0.borrow_mut().classes.retain(|c| c != class);
    }

    fn set_class_name(&self, class_name: &str) {
        self.0.borrow_mut().classes = class_name.split_whitespace().map(String::from).collect();
    }

    fn attribute(&self, name: &str) -> Option<String> {
        let data = self.0.borrow();
        if name == "class" {
            return Some(data.classes.join(" "));
        }
        data.attrs.get(name).cloned()
    }

    fn find(&self, selector: &str) -> Option<Self> {
        self.descendants().into_iter().find(|n| n.matches(selector))
    }

    fn closest(&self, selector: &str) -> Option<Self> {
        let mut current = Some(self.clone());
        while let Some(node) = current {
            if node.matches(selector) {
                return Some(node);
            }
            current = node.parent();
        }
        None
    }

    fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    fn set_text(&self, text: &str) {
        self.0.borrow_mut().text = text.to_string();
    }

    fn set_visible(&self, visible: bool) {
        self.0.borrow_mut().visible = Some(visible);
    }

    fn is_disabled(&self) -> bool {
        self.0.borrow().disabled
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.borrow_mut().disabled = disabled;
    }

    fn offset_top(&self) -> f64 {
        self.0.borrow().offset_top
    }

    fn offset_height(&self) -> f64 {
        self.0.borrow().offset_height
    }

    fn scroll_into_view(&self) {
        self.0.borrow_mut().scrolled_into_view += 1;
    }

    fn form_fields(&self) -> Vec<(String, String)> {
        self.0.borrow().fields.clone()
    }

    fn reset_form(&self) {
        for (_, value) in self.0.borrow_mut().fields.iter_mut() {
            value.clear();
        }
    }

    fn click(&self) {
        self.0.borrow_mut().clicks += 1;
    }

    fn insert_after(&self, tag: &str, class_name: &str) -> Result<Self, SiteError> {
        let parent = self.parent().ok_or_else(|| SiteError::missing("parent node"))?;
        let sibling = FakeNode::new(tag).with_class(class_name);
        sibling.0.borrow_mut().parent = Rc::downgrade(&parent.0);

        let mut data = parent.0.borrow_mut();
        let index = data
            .children
            .iter()
            .position(|child| child == self)
            .map_or(data.children.len(), |i| i + 1);
        data.children.insert(index, sibling.clone());
        Ok(sibling)
    }
}

enum AttrTest {
    Exists(String),
    Equals(String, String),
    Prefix(String, String),
}

#[derive(Default)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attrs: Vec<AttrTest>,
}

impl Compound {
    fn parse(selector: &str) -> Self {
        let mut compound = Compound::default();
        let chars: Vec<char> = selector.chars().collect();
        let mut i = 0;

        let ident = |i: &mut usize| -> String {
            let start = *i;
            while *i < chars.len() && (chars[*i].is_alphanumeric() || "-_".contains(chars[*i])) {
                *i += 1;
            }
            chars[start..*i].iter().collect()
        };

        let tag = ident(&mut i);
        if !tag.is_empty() {
            compound.tag = Some(tag);
        }

        while i < chars.len() {
            match chars[i] {
                '.' => {
                    i += 1;
                    compound.classes.push(ident(&mut i));
                }
                '#' => {
                    i += 1;
                    compound.id = Some(ident(&mut i));
                }
                '[' => {
                    let end = chars[i..].iter().position(|c| *c == ']').map_or(chars.len(), |p| i + p);
                    let body: String = chars[i + 1..end].iter().collect();
                    compound.attrs.push(AttrTest::parse(&body));
                    i = end + 1;
                }
                _ => i += 1,
            }
        }
        compound
    }

    fn matches(&self, node: &FakeNode) -> bool {
        let data = node.0.borrow();
        if let Some(tag) = &self.tag {
            if &data.tag != tag {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if data.attrs.get("id") != Some(id) {
                return false;
            }
        }
        if !self.classes.iter().all(|c| data.classes.contains(c)) {
            return false;
        }
        self.attrs.iter().all(|test| match test {
            AttrTest::Exists(name) => data.attrs.contains_key(name),
            AttrTest::Equals(name, value) => data.attrs.get(name) == Some(value),
            AttrTest::Prefix(name, prefix) => data
                .attrs
                .get(name)
                .is_some_and(|v| v.starts_with(prefix.as_str())),
        })
    }
}

impl AttrTest {
    fn parse(body: &str) -> Self {
        let unquote = |v: &str| v.trim().trim_matches('"').trim_matches('\'').to_string();
        if let Some((name, value)) = body.split_once("^=") {
            AttrTest::Prefix(name.trim().to_string(), unquote(value))
        } else if let Some((name, value)) = body.split_once('=') {
            AttrTest::Equals(name.trim().to_string(), unquote(value))
        } else {
            AttrTest::Exists(body.trim().to_string())
        }
    }
}

/// A page backed by a `FakeNode` tree
pub struct FakePage {
    pub root: FakeNode,
    scroll: Cell<f64>,
    scrolls: RefCell<Vec<f64>>,
    path: String,
}

impl FakePage {
    pub fn new(root: FakeNode) -> Self {
        Self::at_path(root, "/")
    }

    pub fn at_path(root: FakeNode, path: &str) -> Self {
        Self {
            root,
            scroll: Cell::new(0.0),
            scrolls: RefCell::new(Vec::new()),
            path: path.to_string(),
        }
    }

    pub fn set_scroll_offset(&self, offset: f64) {
        self.scroll.set(offset);
    }

    /// Targets passed to `scroll_to`, oldest first
    pub fn scrolls(&self) -> Vec<f64> {
        self.scrolls.borrow().clone()
    }
}

impl PageView for FakePage {
    type Node = FakeNode;

    fn query(&self, selector: &str) -> Option<FakeNode> {
        self.root.find(selector)
    }

    fn query_all(&self, selector: &str) -> Vec<FakeNode> {
        self.root
            .descendants()
            .into_iter()
            .filter(|n| n.matches(selector))
            .collect()
    }

    fn by_id(&self, id: &str) -> Option<FakeNode> {
        self.root
            .descendants()
            .into_iter()
            .find(|n| n.attribute("id").as_deref() == Some(id))
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll.get()
    }

    fn scroll_to(&self, top: f64) {
        self.scroll.set(top);
        self.scrolls.borrow_mut().push(top);
    }

    fn path(&self) -> String {
        self.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selector_matching() {
        let link = FakeNode::new("a").with_class("nav-link").with_attr("href", "#services");
        let button = FakeNode::new("button").with_attr("type", "submit");

        assert!(link.matches(".nav-link"));
        assert!(link.matches("a[href^=\"#\"]"));
        assert!(link.matches(".dropdown-link, .nav-link"));
        assert!(!link.matches("a[href^=\"/\"]"));
        assert!(button.matches("button[type=\"submit\"]"));
        assert!(!button.matches("button[type=\"reset\"]"));
    }

    #[test]
    fn test_closest_walks_up() {
        let arrow = FakeNode::new("span").with_class("dropdown-arrow");
        let link = FakeNode::new("a").with_class("nav-link").with_child(arrow.clone());
        let item = FakeNode::new("li").with_class("nav-item").with_child(link.clone());

        assert_eq!(arrow.closest(".nav-item"), Some(item));
        assert_eq!(link.find(".dropdown-arrow"), Some(arrow));
    }

    #[test]
    fn test_insert_after_detached_node_fails() {
        let orphan = FakeNode::new("div");
        assert!(matches!(
            orphan.insert_after("section", "x"),
            Err(SiteError::MissingElement(_))
        ));
    }
}
