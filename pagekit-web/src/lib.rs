//! Browser adapter for `pagekit-core`.
//!
//! The `pagekit-core` crate is DOM-agnostic and holds the behaviors. This crate provides:
//!
//! - [`WebDocument`]: the `Dom` capability set on top of `web-sys`
//! - [`start`]: a `wasm-bindgen` start hook that attaches the default behaviors once the page
//!   has been parsed
//!
//! Built as a `cdylib`, the module can replace the site's static `main.js`.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod document;
mod start;

#[cfg(test)]
mod tests;

pub use document::WebDocument;
pub use start::{initialize_when_ready, start};
