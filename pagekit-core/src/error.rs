//! Error types for page behaviors.

use thiserror::Error;

/// Failures reported by a [`crate::Dom`] implementation.
///
/// None of these escape a click handler: behaviors treat them as "target not found" and fall
/// back to the browser's default action.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The string is not a valid CSS selector (a browser would throw `SyntaxError`).
    #[error("invalid selector {selector:?}: {reason}")]
    InvalidSelector {
        selector: String,
        reason: String,
    },

    /// The hosting platform rejected an operation.
    #[error("host error: {0}")]
    Host(String),
}

impl Error {
    pub(crate) fn invalid_selector(selector: &str, reason: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.to_owned(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for page behavior operations.
pub type Result<T> = std::result::Result<T, Error>;
