#![forbid(unsafe_code)]

//! WASM frontend for the feed-face editor.
//!
//! Exposes [`FeedFace`], the backing object of the `<feed-face>` custom
//! element. Each element renders into a container inside its own open
//! shadow root, so page styles do not leak in and the editor's styles do
//! not leak out. The editing engine itself lives in JavaScript and is
//! reached through an imported `feedfaceEngine` namespace; style tables
//! are handed over as JSON.

pub mod error;
pub mod payload;

#[cfg(target_arch = "wasm32")]
mod wasm;

pub use error::WebError;

#[cfg(target_arch = "wasm32")]
pub use wasm::{DomHost, FeedFace, JsEngine, JsSession, JsStyling};

/// Native builds compile this crate as a stub so `cargo check --workspace` stays
/// green on non-wasm targets.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub struct FeedFace;

#[cfg(not(target_arch = "wasm32"))]
impl FeedFace {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self
    }
}
