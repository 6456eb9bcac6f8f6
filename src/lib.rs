//! Page behaviors for server-rendered sites.
//!
//! This crate re-exports [`pagekit_core`] (behaviors, the `Dom` capability trait, and an
//! in-memory document) and, with `feature = "web"`, the browser adapter `pagekit_web`.
//!
//! ```
//! use pagekit::memory::MemoryDocument;
//! use pagekit::{BehaviorOptions, ClickOutcome, initialize};
//!
//! let doc = MemoryDocument::new();
//! let link = doc.element("a").with_attribute("href", "#latest").node();
//! doc.element("section").with_id("latest");
//!
//! initialize(&doc, &BehaviorOptions::default()).unwrap();
//! assert_eq!(doc.click(link), ClickOutcome::PreventDefault);
//! ```
#![forbid(unsafe_code)]

pub use pagekit_core::*;

#[cfg(feature = "web")]
pub use pagekit_web as web;
