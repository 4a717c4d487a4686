#![forbid(unsafe_code)]

use std::fmt;

/// Failures at the DOM boundary.
///
/// Editing itself never fails; these only arise while wiring the element
/// into the page or handing style tables to the JavaScript engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebError {
    /// The host element is not owned by a document.
    NoDocument,
    /// `attachShadow` was rejected (e.g. the element already has a shadow root).
    ShadowRoot(String),
    /// Another DOM call failed.
    Dom(String),
    /// A style table could not be encoded as JSON.
    Encode(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoDocument => write!(f, "host element has no owner document"),
            Self::ShadowRoot(msg) => write!(f, "cannot attach shadow root: {msg}"),
            Self::Dom(msg) => write!(f, "DOM operation failed: {msg}"),
            Self::Encode(msg) => write!(f, "cannot encode style table: {msg}"),
        }
    }
}

impl std::error::Error for WebError {}

impl From<serde_json::Error> for WebError {
    fn from(err: serde_json::Error) -> Self {
        Self::Encode(err.to_string())
    }
}
