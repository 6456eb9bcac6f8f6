use crate::{BehaviorOptions, Bindings, Dom, Result, bind_anchor_scroller, bind_nav_toggle};

/// Attaches every page behavior to `doc`. Call once, after the document has been parsed.
///
/// - Every anchor matching `options.anchor_selector` gets the smooth-scroll handler.
/// - The navigation toggle is bound only if both its button and its panel exist.
///
/// Missing elements are not errors. The only failures are host rejections while attaching
/// listeners (or an invalid `anchor_selector`).
pub fn initialize<D: Dom>(doc: &D, options: &BehaviorOptions) -> Result<Bindings> {
    let anchors = bind_anchor_scroller(doc, options)?;
    let nav_toggle = bind_nav_toggle(doc, options)?;
    let bindings = Bindings {
        anchors,
        nav_toggle,
    };
    pdebug!(anchors, nav_toggle, "page behaviors initialized");
    Ok(bindings)
}
