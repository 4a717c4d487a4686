#![forbid(unsafe_code)]

//! feed-face public facade crate.
//!
//! Re-exports the style table, the engine boundary and the widget
//! controller, and offers a prelude for hosts that embed the editor.

// --- Style re-exports ------------------------------------------------------

pub use feedface_style::{
    Category, ChromeTheme, Color, CssStyling, HighlightStyle, StyleDirective, StyleTable,
    StylingApi, Tag, ThemeExtension, build_theme, solarized_dark,
};

// --- Engine re-exports -----------------------------------------------------

pub use feedface_engine::{
    Capability, CapabilityKind, CapabilityList, EditingEngine, EditingSession, KeyBindings,
    Language, LanguageSupport, MemoryContainer, MemoryEngine, MemoryExtension, MemorySession,
};

// --- Widget re-exports -----------------------------------------------------

pub use feedface_widget::{
    EditorWidget, HostElement, LANGUAGE_ATTR, LanguageMode, MemoryHost, Phase, VALUE_ATTR,
    WidgetConfig,
};

#[cfg(feature = "web")]
pub use feedface_web::FeedFace;

/// A widget driven by the in-memory engine and host.
pub type HeadlessWidget = EditorWidget<MemoryEngine, MemoryHost>;

/// Build a [`HeadlessWidget`] around `host` with its own container.
#[must_use]
pub fn headless(host: MemoryHost) -> HeadlessWidget {
    EditorWidget::new(MemoryEngine::new(), host, MemoryContainer::new())
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Color, EditingEngine, EditingSession, EditorWidget, HeadlessWidget, HostElement, Language,
        LanguageMode, MemoryHost, Phase, WidgetConfig, headless, solarized_dark,
    };

    pub use crate::{engine, style, widget};
}

pub use feedface_engine as engine;
pub use feedface_style as style;
pub use feedface_widget as widget;
#[cfg(feature = "web")]
pub use feedface_web as web;
