use pagekit_core::{BehaviorOptions, Error, Result, initialize};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::WebDocument;
use crate::document::js_message;

/// `true` while the HTML parser is still running (`document.readyState === "loading"`).
pub(crate) fn is_still_parsing(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn run(doc: &WebDocument, options: &BehaviorOptions) {
    match initialize(doc, options) {
        Ok(_bindings) => {
            wdebug!(bindings = ?_bindings, "page behaviors attached");
        }
        Err(_err) => {
            werror!(error = %_err, "failed to attach page behaviors");
        }
    }
}

/// Runs [`initialize`] once the document's structure is available.
///
/// If the parser is still running, this defers to a one-shot `DOMContentLoaded` listener;
/// otherwise (script loaded with `defer`/`async`, or injected late) it initializes right away.
pub fn initialize_when_ready(doc: WebDocument, options: BehaviorOptions) -> Result<()> {
    if !is_still_parsing(&doc.document().ready_state()) {
        run(&doc, &options);
        return Ok(());
    }

    let target = doc.document().clone();
    let mut pending = Some((doc, options));
    let closure = Closure::<dyn FnMut()>::new(move || {
        // DOMContentLoaded fires once; `take` keeps a stray second dispatch harmless.
        if let Some((doc, options)) = pending.take() {
            run(&doc, &options);
        }
    });
    target
        .add_event_listener_with_callback("DOMContentLoaded", closure.as_ref().unchecked_ref())
        .map_err(|e| Error::Host(js_message(&e)))?;
    closure.forget();
    Ok(())
}

/// The module's start hook: binds the default behaviors to `window.document`.
///
/// Nothing is thrown back to JavaScript; a page without a window/document is a no-op.
#[wasm_bindgen(start)]
pub fn start() {
    let Some(doc) = WebDocument::from_window() else {
        wdebug!("no window.document; page behaviors skipped");
        return;
    };
    if let Err(_err) = initialize_when_ready(doc, BehaviorOptions::default()) {
        werror!(error = %_err, "failed to schedule page behaviors");
    }
}
