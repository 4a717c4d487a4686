#![forbid(unsafe_code)]

//! Widget configuration.

use feedface_engine::{KeyBindings, Language};

/// How the widget reacts to language selector changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageMode {
    /// Follow the `language` selector; a change rebuilds the session.
    #[default]
    Switchable,
    /// Always highlight one language. The selector is still mirrored for
    /// reads but never triggers a rebuild.
    Fixed(Language),
}

/// Configuration applied to every session the widget builds.
///
/// `X` is the engine's extension token; extras are appended after the
/// language entry of each capability list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetConfig<X> {
    pub language_mode: LanguageMode,
    pub key_bindings: KeyBindings,
    pub extras: Vec<X>,
}

impl<X> Default for WidgetConfig<X> {
    fn default() -> Self {
        Self {
            language_mode: LanguageMode::default(),
            key_bindings: KeyBindings::default(),
            extras: Vec::new(),
        }
    }
}

impl<X> WidgetConfig<X> {
    /// Default configuration: switchable language, tab indents.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration of a single-language widget.
    #[must_use]
    pub fn fixed(language: Language) -> Self {
        Self::new().with_language_mode(LanguageMode::Fixed(language))
    }

    #[must_use]
    pub fn with_language_mode(mut self, mode: LanguageMode) -> Self {
        self.language_mode = mode;
        self
    }

    #[must_use]
    pub fn with_key_bindings(mut self, bindings: KeyBindings) -> Self {
        self.key_bindings = bindings;
        self
    }

    /// Append a caller-supplied capability.
    #[must_use]
    pub fn with_extra(mut self, extra: X) -> Self {
        self.extras.push(extra);
        self
    }

    /// The language a session should highlight for `selector`.
    #[must_use]
    pub fn effective_language(&self, selector: Option<&str>) -> Option<Language> {
        match self.language_mode {
            LanguageMode::Fixed(language) => Some(language),
            LanguageMode::Switchable => selector.and_then(Language::from_selector),
        }
    }
}
