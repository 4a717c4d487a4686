#![forbid(unsafe_code)]

//! Editing-engine boundary for the feed-face widget.
//!
//! The crate defines what the widget asks of an engine (sessions built
//! from an immutable [`CapabilityList`], a styling API, per-language
//! tokens) and ships [`memory::MemoryEngine`], a headless reference
//! implementation.

pub mod capability;
pub mod engine;
pub mod language;
pub mod memory;

pub use capability::{Capability, CapabilityKind, CapabilityList, KeyBindings};
pub use engine::{EditingEngine, EditingSession};
pub use language::{Language, LanguageSupport, UnknownLanguage};
pub use memory::{MemoryContainer, MemoryEngine, MemoryExtension, MemorySession};
