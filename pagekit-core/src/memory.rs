//! An in-memory [`Dom`] implementation.
//!
//! `MemoryDocument` models the `<body>` of a page as an element tree. Elements carry a tag name
//! plus string attributes; `id` and `class` are plain attributes, exactly like in HTML. Selector
//! queries serialize the attached tree to HTML and run it through `scraper`, so selector syntax
//! and matching follow a real CSS engine (combinators, `:not(...)`, attribute operators, and
//! `SyntaxError`-style rejection of invalid input).
//!
//! Markup the HTML parser would restructure (an `<a>` inside an `<a>`, a `<div>` inside a `<p>`)
//! is not supported. Nothing here renders.

use std::cell::RefCell;
use std::fmt::Write as _;
use std::rc::Rc;

use scraper::{Html, Selector};

use crate::{ClickHandler, ClickOutcome, Dom, Error, Result, ScrollIntoViewOptions};

/// Attribute stamped on serialized elements to map `scraper` matches back to nodes.
const NODE_ATTRIBUTE: &str = "data-pagekit-node";

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Handle to an element of a [`MemoryDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A recorded `scroll_into_view` request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollRequest {
    pub node: NodeId,
    pub options: ScrollIntoViewOptions,
}

type SharedHandler = Rc<RefCell<ClickHandler>>;

struct ElementData {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<NodeId>,
    attached: bool,
    listeners: Vec<SharedHandler>,
}

impl ElementData {
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        let name = name.to_ascii_lowercase();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value.to_owned(),
            None => self.attributes.push((name, value.to_owned())),
        }
    }

    fn classes(&self) -> Vec<String> {
        self.attribute("class")
            .map(|list| list.split_ascii_whitespace().map(str::to_owned).collect())
            .unwrap_or_default()
    }

    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|list| list.split_ascii_whitespace().any(|c| c == class))
    }
}

/// Rejects names `setAttribute` would refuse with `InvalidCharacterError`.
fn check_attribute_name(name: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '/' | '='));
    if invalid {
        return Err(Error::Host(format!(
            "InvalidCharacterError: {name:?} is not a valid attribute name"
        )));
    }
    Ok(())
}

fn escape_attribute(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            c => out.push(c),
        }
    }
}

#[derive(Default)]
struct Inner {
    elements: Vec<ElementData>,
    /// Top-level elements (children of `<body>`), in document order.
    roots: Vec<NodeId>,
    scroll_log: Vec<ScrollRequest>,
}

impl Inner {
    /// Attached elements in tree order. A removed element hides its whole subtree.
    fn document_order(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.roots.iter().rev().copied().collect();
        while let Some(node) = stack.pop() {
            let el = &self.elements[node.0];
            if !el.attached {
                continue;
            }
            out.push(node);
            stack.extend(el.children.iter().rev().copied());
        }
        out
    }

    fn write_element(&self, node: NodeId, out: &mut String) {
        let el = &self.elements[node.0];
        if !el.attached {
            return;
        }
        let _ = write!(out, "<{} {NODE_ATTRIBUTE}=\"{}\"", el.tag, node.0);
        for (name, value) in &el.attributes {
            let _ = write!(out, " {name}=\"");
            escape_attribute(value, out);
            out.push('"');
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&el.tag.as_str()) {
            return;
        }
        for child in &el.children {
            self.write_element(*child, out);
        }
        let _ = write!(out, "</{}>", el.tag);
    }

    fn to_html(&self) -> String {
        let mut out = String::from("<!DOCTYPE html><html><head></head><body>");
        for root in &self.roots {
            self.write_element(*root, &mut out);
        }
        out.push_str("</body></html>");
        out
    }
}

/// A shared, single-threaded in-memory document. Cloning yields another handle to the same
/// document.
#[derive(Clone, Default)]
pub struct MemoryDocument {
    inner: Rc<RefCell<Inner>>,
}

impl core::fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("MemoryDocument")
            .field("elements", &inner.elements.len())
            .field("scroll_requests", &inner.scroll_log.len())
            .finish()
    }
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new element to the end of `<body>` and returns a builder for it.
    pub fn element(&self, tag: &str) -> ElementBuilder<'_> {
        self.insert(None, tag)
    }

    /// Appends a new element as the last child of `parent`.
    pub fn element_in(&self, parent: NodeId, tag: &str) -> ElementBuilder<'_> {
        self.insert(Some(parent), tag)
    }

    fn insert(&self, parent: Option<NodeId>, tag: &str) -> ElementBuilder<'_> {
        let mut guard = self.inner.borrow_mut();
        let inner = &mut *guard;
        let node = NodeId(inner.elements.len());
        inner.elements.push(ElementData {
            tag: tag.to_ascii_lowercase(),
            attributes: Vec::new(),
            children: Vec::new(),
            attached: true,
            listeners: Vec::new(),
        });
        match parent.and_then(|p| inner.elements.get_mut(p.0)) {
            Some(parent) => parent.children.push(node),
            None => inner.roots.push(node),
        }
        ElementBuilder { doc: self, node }
    }

    /// Detaches `node` and its subtree; they no longer match queries. Handles and listeners
    /// stay valid.
    pub fn remove(&self, node: NodeId) {
        if let Some(el) = self.inner.borrow_mut().elements.get_mut(node.0) {
            el.attached = false;
        }
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn tag(&self, node: NodeId) -> Option<String> {
        self.inner.borrow().elements.get(node.0).map(|el| el.tag.clone())
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        let inner = self.inner.borrow();
        inner.elements.get(node.0)?.attribute(name).map(str::to_owned)
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.inner
            .borrow()
            .elements
            .get(node.0)
            .map(ElementData::classes)
            .unwrap_or_default()
    }

    pub fn listener_count(&self, node: NodeId) -> usize {
        self.inner
            .borrow()
            .elements
            .get(node.0)
            .map_or(0, |el| el.listeners.len())
    }

    /// Serializes the attached tree as an HTML document.
    pub fn to_html(&self) -> String {
        self.inner.borrow().to_html()
    }

    /// Every `scroll_into_view` request received so far, oldest first.
    pub fn scroll_log(&self) -> Vec<ScrollRequest> {
        self.inner.borrow().scroll_log.clone()
    }

    /// Simulates a user click on `node`.
    ///
    /// Listeners run in registration order. Listeners added while dispatching do not run for this
    /// click. The result is `PreventDefault` if any listener prevented the default action.
    pub fn click(&self, node: NodeId) -> ClickOutcome {
        // Snapshot first: listeners re-enter the document.
        let listeners: Vec<SharedHandler> = self
            .inner
            .borrow()
            .elements
            .get(node.0)
            .map(|el| el.listeners.clone())
            .unwrap_or_default();

        listeners
            .iter()
            .fold(ClickOutcome::AllowDefault, |acc, listener| {
                let mut handler = listener.borrow_mut();
                acc.merge((*handler)())
            })
    }

    fn find_all(&self, selector: &str, limit: usize) -> Result<Vec<NodeId>> {
        let parsed = Selector::parse(selector)
            .map_err(|err| Error::invalid_selector(selector, err.to_string()))?;
        let html = Html::parse_document(&self.to_html());
        Ok(html
            .select(&parsed)
            .filter_map(|el| el.value().attr(NODE_ATTRIBUTE)?.parse().ok())
            .map(NodeId)
            .take(limit)
            .collect())
    }

    fn with_element<R>(&self, node: NodeId, f: impl FnOnce(&mut ElementData) -> R) -> Option<R> {
        self.inner.borrow_mut().elements.get_mut(node.0).map(f)
    }
}

impl Dom for MemoryDocument {
    type Element = NodeId;

    fn query_selector(&self, selector: &str) -> Result<Option<NodeId>> {
        Ok(self.find_all(selector, 1)?.into_iter().next())
    }

    fn query_selector_all(&self, selector: &str) -> Result<Vec<NodeId>> {
        self.find_all(selector, usize::MAX)
    }

    fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        let inner = self.inner.borrow();
        inner
            .document_order()
            .into_iter()
            .find(|node| inner.elements[node.0].attribute("id") == Some(id))
    }

    fn get_attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.attribute(*element, name)
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) -> Result<()> {
        check_attribute_name(name)?;
        self.with_element(*element, |el| el.set_attribute(name, value));
        Ok(())
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        let inner = self.inner.borrow();
        inner
            .elements
            .get(element.0)
            .is_some_and(|el| el.has_class(class))
    }

    /// Like `DOMTokenList.toggle`: removing drops every occurrence of the token.
    fn toggle_class(&self, element: &NodeId, class: &str) -> Result<bool> {
        let present = self.with_element(*element, |el| {
            let mut classes = el.classes();
            let present = if classes.iter().any(|c| c == class) {
                classes.retain(|c| c != class);
                false
            } else {
                classes.push(class.to_owned());
                true
            };
            el.set_attribute("class", &classes.join(" "));
            present
        });
        Ok(present.unwrap_or(false))
    }

    fn scroll_into_view(&self, element: &NodeId, options: ScrollIntoViewOptions) {
        self.inner.borrow_mut().scroll_log.push(ScrollRequest {
            node: *element,
            options,
        });
    }

    fn add_click_listener(&self, element: &NodeId, handler: ClickHandler) -> Result<()> {
        self.with_element(*element, |el| {
            el.listeners.push(Rc::new(RefCell::new(handler)));
        });
        Ok(())
    }
}

/// Sets up an element created by [`MemoryDocument::element`].
pub struct ElementBuilder<'a> {
    doc: &'a MemoryDocument,
    node: NodeId,
}

impl ElementBuilder<'_> {
    pub fn with_id(self, id: &str) -> Self {
        self.with_attribute("id", id)
    }

    /// Adds one class to the element's class list.
    pub fn with_class(self, class: &str) -> Self {
        self.doc.with_element(self.node, |el| {
            let mut classes = el.classes();
            if !classes.iter().any(|c| c == class) {
                classes.push(class.to_owned());
            }
            el.set_attribute("class", &classes.join(" "));
        });
        self
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.doc
            .with_element(self.node, |el| el.set_attribute(name, value));
        self
    }

    pub fn node(self) -> NodeId {
        self.node
    }
}
