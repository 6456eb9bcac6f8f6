use crate::{BehaviorOptions, ClickOutcome, Dom, Result, ScrollIntoViewOptions};

/// Outcome of resolving an anchor's fragment reference against the document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnchorResolution<E> {
    Found(E),
    NotFound,
}

impl<E> AnchorResolution<E> {
    pub fn target_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn into_target(self) -> Option<E> {
        match self {
            Self::Found(el) => Some(el),
            Self::NotFound => None,
        }
    }
}

/// Resolves `href` (e.g. `"#sec1"`) by using it as a selector.
///
/// Selector errors (`"#"`, `"#1abc"`, ...) are treated exactly like "no match".
pub fn resolve_anchor_target<D: Dom>(doc: &D, href: &str) -> AnchorResolution<D::Element> {
    match doc.query_selector(href) {
        Ok(Some(el)) => AnchorResolution::Found(el),
        Ok(None) => {
            pdebug!(href, "anchor target not found");
            AnchorResolution::NotFound
        }
        Err(_err) => {
            pdebug!(href, error = %_err, "anchor reference is not a valid selector");
            AnchorResolution::NotFound
        }
    }
}

/// Handles one click on `anchor`.
///
/// The fragment reference is read at click time and the target is resolved lazily, so a target
/// that appears or disappears after initialization is honored.
pub fn activate_anchor<D: Dom>(
    doc: &D,
    anchor: &D::Element,
    scroll: ScrollIntoViewOptions,
) -> ClickOutcome {
    let Some(href) = doc.get_attribute(anchor, "href") else {
        return ClickOutcome::AllowDefault;
    };

    match resolve_anchor_target(doc, &href) {
        AnchorResolution::Found(target) => {
            ptrace!(href = %href, "smooth-scrolling to anchor target");
            doc.scroll_into_view(&target, scroll);
            ClickOutcome::PreventDefault
        }
        AnchorResolution::NotFound => ClickOutcome::AllowDefault,
    }
}

/// Binds the smooth-scroll handler to every anchor matching `options.anchor_selector`.
///
/// The anchor set is a snapshot: anchors inserted later are left to the browser's default
/// behavior. Returns the number of anchors bound.
pub fn bind_anchor_scroller<D: Dom>(doc: &D, options: &BehaviorOptions) -> Result<usize> {
    let anchors = doc.query_selector_all(&options.anchor_selector)?;
    for anchor in &anchors {
        let handler_doc = doc.clone();
        let handler_anchor = anchor.clone();
        let scroll = options.scroll;
        doc.add_click_listener(
            anchor,
            Box::new(move || activate_anchor(&handler_doc, &handler_anchor, scroll)),
        )?;
    }
    pdebug!(count = anchors.len(), "anchor scroller bound");
    Ok(anchors.len())
}
