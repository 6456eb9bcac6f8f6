use pagekit_core::{
    ClickHandler, ClickOutcome, Dom, Error, Result, ScrollBehavior, ScrollBlock,
    ScrollIntoViewOptions,
};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, ScrollLogicalPosition};

/// [`Dom`] over a browser `web_sys::Document`.
///
/// Listeners are leaked (`Closure::forget`): bindings live as long as the page.
#[derive(Clone, Debug)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The document of the current `window`, if there is one.
    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Selector APIs reject with `SyntaxError`; everything else is a host failure.
fn selector_error(selector: &str, value: JsValue) -> Error {
    Error::InvalidSelector {
        selector: selector.to_owned(),
        reason: js_message(&value),
    }
}

fn host_error(value: JsValue) -> Error {
    Error::Host(js_message(&value))
}

pub(crate) fn scroll_behavior(behavior: ScrollBehavior) -> web_sys::ScrollBehavior {
    match behavior {
        ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
        ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        ScrollBehavior::Instant => web_sys::ScrollBehavior::Instant,
    }
}

pub(crate) fn logical_position(block: ScrollBlock) -> ScrollLogicalPosition {
    match block {
        ScrollBlock::Start => ScrollLogicalPosition::Start,
        ScrollBlock::Center => ScrollLogicalPosition::Center,
        ScrollBlock::End => ScrollLogicalPosition::End,
        ScrollBlock::Nearest => ScrollLogicalPosition::Nearest,
    }
}

impl Dom for WebDocument {
    type Element = Element;

    fn query_selector(&self, selector: &str) -> Result<Option<Element>> {
        self.document
            .query_selector(selector)
            .map_err(|e| selector_error(selector, e))
    }

    fn query_selector_all(&self, selector: &str) -> Result<Vec<Element>> {
        let list = self
            .document
            .query_selector_all(selector)
            .map_err(|e| selector_error(selector, e))?;
        Ok((0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn get_element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn get_attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) -> Result<()> {
        element.set_attribute(name, value).map_err(host_error)
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn toggle_class(&self, element: &Element, class: &str) -> Result<bool> {
        element.class_list().toggle(class).map_err(host_error)
    }

    fn scroll_into_view(&self, element: &Element, options: ScrollIntoViewOptions) {
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(scroll_behavior(options.behavior));
        opts.set_block(logical_position(options.block));
        opts.set_inline(logical_position(options.inline));
        element.scroll_into_view_with_scroll_into_view_options(&opts);
    }

    fn add_click_listener(&self, element: &Element, mut handler: ClickHandler) -> Result<()> {
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if handler() == ClickOutcome::PreventDefault {
                event.prevent_default();
            }
        });
        element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(host_error)?;
        closure.forget();
        Ok(())
    }
}
