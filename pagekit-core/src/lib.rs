//! Headless page behaviors for server-rendered sites.
//!
//! For a browser binding (web-sys + a `wasm-bindgen` start hook), see the `pagekit-web` crate.
//!
//! Two independent behaviors are attached once the document has been parsed:
//! - an anchor smooth-scroller: clicks on `#fragment` links animate the target into view instead
//!   of jumping, and fall back to the browser default when the target does not exist
//! - a navigation toggle: a button flips an "open" marker class on the mobile navigation panel
//!   and keeps its `aria-expanded` attribute in sync
//!
//! It is DOM-agnostic. A host provides a [`Dom`] implementation with the small capability set
//! the behaviors need (query, attributes, class toggle, scroll, click listeners);
//! [`memory::MemoryDocument`] is an in-memory one for tests and simulations.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod anchor;
mod behavior;
mod dom;
mod error;
pub mod memory;
mod nav;
mod options;
mod types;


pub use anchor::{AnchorResolution, activate_anchor, bind_anchor_scroller, resolve_anchor_target};
pub use behavior::initialize;
pub use dom::{ClickHandler, Dom};
pub use error::{Error, Result};
pub use nav::{NavToggle, bind_nav_toggle};
pub use options::{
    ARIA_EXPANDED, BehaviorOptions, DEFAULT_ANCHOR_SELECTOR, DEFAULT_NAV_PANEL_ID,
    DEFAULT_OPEN_CLASS, DEFAULT_TOGGLE_SELECTOR,
};
pub use types::{
    Bindings, ClickOutcome, NavState, ScrollBehavior, ScrollBlock, ScrollIntoViewOptions,
};
