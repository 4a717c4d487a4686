#![forbid(unsafe_code)]

//! The hosting element, seen from the controller.

use std::collections::HashMap;

/// Attribute carrying the language selector.
pub const LANGUAGE_ATTR: &str = "language";
/// Attribute carrying the document content.
pub const VALUE_ATTR: &str = "value";

/// The element a widget is mounted on.
///
/// The controller only reads attributes and light-DOM text, and clears
/// that text once it has moved into the editing surface.
pub trait HostElement {
    /// Current value of an attribute.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Concatenated text of the element's own children.
    fn text_content(&self) -> String;

    /// Remove the element's own children.
    fn clear_content(&mut self);
}

/// Host element kept entirely in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryHost {
    attributes: HashMap<String, String>,
    text: String,
}

impl MemoryHost {
    /// An element with no attributes and no children.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Set the children's text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }
}

impl HostElement for MemoryHost {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn text_content(&self) -> String {
        self.text.clone()
    }

    fn clear_content(&mut self) {
        self.text.clear();
    }
}
