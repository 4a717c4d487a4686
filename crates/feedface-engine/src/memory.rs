#![forbid(unsafe_code)]

//! In-memory reference engine.
//!
//! [`MemoryEngine`] keeps documents as strings and "renders" into a
//! [`MemoryContainer`] that records which sessions are mounted, the CSS
//! they installed and the language they highlight. It backs headless
//! hosts and lets tests observe rebuilds without a browser.
//!
//! Everything is single-threaded (`Rc<RefCell<_>>`), matching the UI
//! thread model of the widget.

use std::cell::RefCell;
use std::rc::Rc;

use feedface_style::{ChromeTheme, CssStyling, HighlightStyle, StylingApi};
use tracing::{debug, trace, warn};

use crate::capability::{Capability, CapabilityList, KeyBindings};
use crate::engine::{EditingEngine, EditingSession};
use crate::language::Language;

/// Identifier assigned to each session the engine creates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u64);

/// Capability token of the memory engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryExtension {
    /// CSS text installed into the container.
    Stylesheet(String),
    /// Language highlighting.
    Language(Language),
    /// Caller-defined extension, identified by name.
    Named(String),
}

/// Styling API of the memory engine: scoped CSS wrapped as extensions.
#[derive(Debug, Clone)]
pub struct MemoryStyling {
    css: CssStyling,
}

impl MemoryStyling {
    /// Scope generated CSS under `.{scope}`.
    #[must_use]
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            css: CssStyling::new(scope),
        }
    }
}

impl StylingApi for MemoryStyling {
    type Extension = MemoryExtension;

    fn theme(&self, chrome: &ChromeTheme) -> MemoryExtension {
        MemoryExtension::Stylesheet(self.css.theme(chrome))
    }

    fn syntax_highlighting(&self, style: &HighlightStyle) -> MemoryExtension {
        MemoryExtension::Stylesheet(self.css.syntax_highlighting(style))
    }
}

/// What one mounted session put into the container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountedView {
    pub session: SessionId,
    pub stylesheets: Vec<String>,
    pub language: Option<Language>,
    pub key_bindings: KeyBindings,
    pub line_wrapping: bool,
    pub extras: Vec<String>,
}

#[derive(Debug, Default)]
struct Surface {
    mounted: Vec<MountedView>,
    peak: usize,
}

/// Render target of the memory engine.
///
/// Cloning yields another handle to the same surface.
#[derive(Debug, Clone, Default)]
pub struct MemoryContainer {
    surface: Rc<RefCell<Surface>>,
}

impl MemoryContainer {
    /// An empty container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions currently rendered here.
    #[must_use]
    pub fn live_sessions(&self) -> usize {
        self.surface.borrow().mounted.len()
    }

    /// Highest number of simultaneously rendered sessions ever observed.
    #[must_use]
    pub fn peak_live_sessions(&self) -> usize {
        self.surface.borrow().peak
    }

    /// The currently mounted view, if exactly one is mounted.
    #[must_use]
    pub fn view(&self) -> Option<MountedView> {
        match self.surface.borrow().mounted.as_slice() {
            [view] => Some(view.clone()),
            _ => None,
        }
    }

    /// Whether nothing is rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live_sessions() == 0
    }

    fn mount(&self, view: MountedView) {
        let mut surface = self.surface.borrow_mut();
        if !surface.mounted.is_empty() {
            warn!(
                session = view.session.0,
                already_mounted = surface.mounted.len(),
                "mounting into a container that still holds a session"
            );
        }
        surface.mounted.push(view);
        surface.peak = surface.peak.max(surface.mounted.len());
    }

    fn unmount(&self, session: SessionId) {
        self.surface
            .borrow_mut()
            .mounted
            .retain(|view| view.session != session);
    }
}

/// In-memory editing engine.
#[derive(Debug)]
pub struct MemoryEngine {
    styling: MemoryStyling,
    next_id: u64,
}

impl Default for MemoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryEngine {
    /// Root class used for generated CSS.
    pub const DEFAULT_SCOPE: &'static str = "feed-face";

    /// Create an engine scoping CSS under [`Self::DEFAULT_SCOPE`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_scope(Self::DEFAULT_SCOPE)
    }

    /// Create an engine scoping CSS under `.{scope}`.
    #[must_use]
    pub fn with_scope(scope: impl Into<String>) -> Self {
        Self {
            styling: MemoryStyling::new(scope),
            next_id: 0,
        }
    }

    /// Number of sessions created so far.
    #[must_use]
    pub fn sessions_created(&self) -> u64 {
        self.next_id
    }
}

impl EditingEngine for MemoryEngine {
    type Extension = MemoryExtension;
    type Container = MemoryContainer;
    type Session = MemorySession;
    type Styling = MemoryStyling;

    fn styling(&self) -> &MemoryStyling {
        &self.styling
    }

    fn language_support(&self, language: Language) -> MemoryExtension {
        MemoryExtension::Language(language)
    }

    fn create_session(
        &mut self,
        initial_text: &str,
        capabilities: CapabilityList<MemoryExtension>,
        container: &MemoryContainer,
    ) -> MemorySession {
        self.next_id += 1;
        let id = SessionId(self.next_id);

        let mut view = MountedView {
            session: id,
            stylesheets: Vec::new(),
            language: None,
            key_bindings: KeyBindings::empty(),
            line_wrapping: false,
            extras: Vec::new(),
        };
        for capability in &capabilities {
            match capability {
                Capability::BaseBehavior => {}
                Capability::KeyBindings(bindings) => view.key_bindings |= *bindings,
                Capability::LineWrapping => view.line_wrapping = true,
                Capability::Theme(theme) => {
                    for extension in theme.iter() {
                        view.apply(extension);
                    }
                }
                Capability::Language(Some(support)) => view.apply(&support.extension),
                Capability::Language(None) => {}
                Capability::Extra(extension) => view.apply(extension),
            }
        }

        debug!(
            session = id.0,
            language = ?view.language,
            capabilities = capabilities.len(),
            "memory session created"
        );
        container.mount(view);

        MemorySession {
            id,
            document: initial_text.to_owned(),
            capabilities,
            container: container.clone(),
        }
    }
}

impl MountedView {
    fn apply(&mut self, extension: &MemoryExtension) {
        match extension {
            MemoryExtension::Stylesheet(css) => self.stylesheets.push(css.clone()),
            MemoryExtension::Language(language) => self.language = Some(*language),
            MemoryExtension::Named(name) => self.extras.push(name.clone()),
        }
    }
}

/// A live session of the memory engine.
///
/// Dropping the session unmounts it, so a session can never outlive its
/// place in the container.
#[derive(Debug)]
pub struct MemorySession {
    id: SessionId,
    document: String,
    capabilities: CapabilityList<MemoryExtension>,
    container: MemoryContainer,
}

impl MemorySession {
    /// This session's identifier.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }
}

impl EditingSession for MemorySession {
    type Extension = MemoryExtension;

    fn text(&self) -> String {
        self.document.clone()
    }

    fn replace_text(&mut self, text: &str) {
        trace!(session = self.id.0, len = text.len(), "replace document");
        self.document.clear();
        self.document.push_str(text);
    }

    fn capabilities(&self) -> &CapabilityList<MemoryExtension> {
        &self.capabilities
    }

    fn destroy(self) {
        debug!(session = self.id.0, "memory session destroyed");
    }
}

impl Drop for MemorySession {
    fn drop(&mut self) {
        self.container.unmount(self.id);
    }
}
