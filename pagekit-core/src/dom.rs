use crate::{ClickOutcome, Result, ScrollIntoViewOptions};

/// A click callback registered on an element.
///
/// Handlers run to completion on the host's event loop; the returned outcome tells the host
/// whether to call `preventDefault()`.
pub type ClickHandler = Box<dyn FnMut() -> ClickOutcome>;

/// The capability set behaviors need from a document.
///
/// Implementations are cheap handles (`Clone` shares the same underlying document), so a click
/// handler can capture the document and resolve elements lazily when it fires.
///
/// - [`crate::memory::MemoryDocument`] is an in-memory implementation for tests and demos.
/// - `pagekit_web::WebDocument` wraps a browser `web_sys::Document`.
pub trait Dom: Clone + 'static {
    type Element: Clone + 'static;

    /// First element matching `selector`, in document order.
    ///
    /// Returns `Err(Error::InvalidSelector)` when `selector` does not parse.
    fn query_selector(&self, selector: &str) -> Result<Option<Self::Element>>;

    /// All elements matching `selector`, in document order. The result is a snapshot.
    fn query_selector_all(&self, selector: &str) -> Result<Vec<Self::Element>>;

    fn get_element_by_id(&self, id: &str) -> Option<Self::Element>;

    fn get_attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str) -> Result<()>;

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Flips `class` on `element` and returns whether it is present afterwards.
    fn toggle_class(&self, element: &Self::Element, class: &str) -> Result<bool>;

    /// Requests a scroll of `element` into view. Fire-and-forget.
    fn scroll_into_view(&self, element: &Self::Element, options: ScrollIntoViewOptions);

    fn add_click_listener(&self, element: &Self::Element, handler: ClickHandler) -> Result<()>;
}
