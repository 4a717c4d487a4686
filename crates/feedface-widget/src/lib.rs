#![forbid(unsafe_code)]

//! Lifecycle and reconfiguration controller for the feed-face editor.
//!
//! An [`EditorWidget`] sits between a host element (attributes, light-DOM
//! text) and an [`EditingEngine`](feedface_engine::EditingEngine). It keeps
//! at most one session alive, rebuilds it when the language changes and
//! patches it in place when only the content changes.
//!
//! ```
//! use feedface_engine::{MemoryContainer, MemoryEngine};
//! use feedface_widget::{EditorWidget, MemoryHost};
//!
//! let host = MemoryHost::new().with_text("console.log(1)");
//! let mut widget = EditorWidget::new(MemoryEngine::new(), host, MemoryContainer::new());
//! widget.set_language(Some("js"));
//! widget.attach();
//! assert_eq!(widget.value(), "console.log(1)");
//! ```

pub mod config;
pub mod host;
pub mod state;
pub mod widget;

pub use config::{LanguageMode, WidgetConfig};
pub use host::{HostElement, LANGUAGE_ATTR, MemoryHost, VALUE_ATTR};
pub use state::{Effect, Input, Phase, Transition, transition};
pub use widget::{EditorWidget, OBSERVED_ATTRIBUTES};
