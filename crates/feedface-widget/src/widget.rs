#![forbid(unsafe_code)]

//! The editable-widget controller.
//!
//! [`EditorWidget`] owns at most one engine session and routes every host
//! callback through [`transition`]. The effect returned by the table
//! decides whether the session is patched in place, rebuilt around its
//! current content, or released.

use std::fmt;

use feedface_engine::{CapabilityList, EditingEngine, EditingSession, LanguageSupport};
use feedface_style::{ThemeExtension, build_theme};
use tracing::{debug, trace};

use crate::config::{LanguageMode, WidgetConfig};
use crate::host::{HostElement, LANGUAGE_ATTR, VALUE_ATTR};
use crate::state::{Effect, Input, Phase, transition};

/// Attributes the widget reacts to.
pub const OBSERVED_ATTRIBUTES: [&str; 2] = [LANGUAGE_ATTR, VALUE_ATTR];

/// One widget instance bound to a host element.
pub struct EditorWidget<E: EditingEngine, H: HostElement> {
    engine: E,
    host: H,
    container: E::Container,
    config: WidgetConfig<E::Extension>,
    theme: ThemeExtension<E::Extension>,
    phase: Phase,
    language: Option<String>,
    /// A selector was set explicitly or adopted at a mount.
    language_set: bool,
    pending_value: Option<String>,
    session: Option<E::Session>,
    rebuilds: u64,
}

impl<E: EditingEngine, H: HostElement> EditorWidget<E, H> {
    /// Construct an unattached widget. Nothing is rendered until
    /// [`attach`](Self::attach).
    pub fn new(engine: E, host: H, container: E::Container) -> Self {
        let theme = build_theme(engine.styling());
        Self {
            engine,
            host,
            container,
            config: WidgetConfig::default(),
            theme,
            phase: Phase::Unattached,
            language: None,
            language_set: false,
            pending_value: None,
            session: None,
            rebuilds: 0,
        }
    }

    /// Replace the configuration. Takes effect on the next rebuild.
    #[must_use]
    pub fn with_config(mut self, config: WidgetConfig<E::Extension>) -> Self {
        self.config = config;
        self
    }

    /// Attribute names routed through [`attribute_changed`](Self::attribute_changed).
    #[must_use]
    pub const fn observed_attributes() -> &'static [&'static str] {
        &OBSERVED_ATTRIBUTES
    }

    fn step(&mut self, input: Input) -> Effect {
        let t = transition(self.phase, input);
        if t.effect == Effect::Ignore {
            trace!(phase = ?self.phase, ?input, "input ignored");
        } else {
            trace!(from = ?self.phase, to = ?t.next, ?input, effect = ?t.effect, "transition");
        }
        self.phase = t.next;
        t.effect
    }

    /// The host element entered a live document.
    ///
    /// Initial content comes from a value set before attachment, then the
    /// `value` attribute, then the host's own text. The host text is
    /// cleared so it is not rendered twice.
    pub fn attach(&mut self) {
        if self.step(Input::Attach) != Effect::Mount {
            return;
        }

        let content = self
            .pending_value
            .take()
            .or_else(|| self.host.attribute(VALUE_ATTR))
            .unwrap_or_else(|| self.host.text_content());
        self.host.clear_content();

        // The attribute seeds the selector only when nothing was ever set;
        // an explicit clear must survive later mounts.
        if !self.language_set {
            self.language = self.host.attribute(LANGUAGE_ATTR);
            self.language_set = true;
        }

        debug!(
            len = content.len(),
            language = self.language.as_deref().unwrap_or(""),
            "widget attached"
        );
        let selector = self.language.clone();
        self.rebuild_session(&content, selector.as_deref());
    }

    /// The host element left the document.
    ///
    /// The session is destroyed; its content is kept for a later
    /// re-attach.
    pub fn detach(&mut self) {
        if self.step(Input::Detach) != Effect::Release {
            return;
        }
        if let Some(session) = self.session.take() {
            let text = session.text();
            debug!(len = text.len(), "widget detached, session released");
            self.pending_value = Some(text);
            session.destroy();
        }
    }

    /// Current language selector, as last set.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Set the language selector.
    ///
    /// A different selector on an attached widget rebuilds the session
    /// around its current content. Setting the current selector again does
    /// nothing.
    pub fn set_language(&mut self, selector: Option<&str>) {
        self.language_set = true;
        let input = if self.language.as_deref() == selector {
            Input::LanguageUnchanged
        } else {
            Input::LanguageChanged
        };

        match self.step(input) {
            Effect::RecordLanguage => {
                self.language = selector.map(str::to_owned);
            }
            Effect::RecordLanguageAndRebuild => {
                self.language = selector.map(str::to_owned);
                if let LanguageMode::Fixed(language) = self.config.language_mode {
                    debug!(
                        %language,
                        selector = selector.unwrap_or(""),
                        "language fixed, selector mirrored only"
                    );
                    return;
                }
                let content = self.value();
                self.rebuild_session(&content, selector);
            }
            _ => {}
        }
    }

    /// Current document content.
    ///
    /// Reads the live session when there is one, otherwise the content the
    /// next attachment would start from.
    #[must_use]
    pub fn value(&self) -> String {
        if let Some(session) = &self.session {
            return session.text();
        }
        self.pending_value
            .clone()
            .or_else(|| self.host.attribute(VALUE_ATTR))
            .unwrap_or_default()
    }

    /// Replace the document content.
    ///
    /// Patches the live session in place; before attachment the text is
    /// kept for the next mount.
    pub fn set_value(&mut self, text: &str) {
        match self.step(Input::ValueSet) {
            Effect::ReplaceContent => {
                if let Some(session) = self.session.as_mut() {
                    session.replace_text(text);
                }
            }
            Effect::StorePending => {
                self.pending_value = Some(text.to_owned());
            }
            _ => {}
        }
    }

    /// Route an observed attribute change.
    ///
    /// Removing `value` leaves the content alone; unknown names are
    /// ignored.
    pub fn attribute_changed(&mut self, name: &str, new_value: Option<&str>) {
        match (name, new_value) {
            (LANGUAGE_ATTR, selector) => self.set_language(selector),
            (VALUE_ATTR, Some(text)) => self.set_value(text),
            (VALUE_ATTR, None) => trace!("value attribute removed"),
            _ => trace!(name, "unobserved attribute"),
        }
    }

    fn rebuild_session(&mut self, initial_text: &str, selector: Option<&str>) {
        let _span = tracing::debug_span!(
            "rebuild_session",
            selector = selector.unwrap_or(""),
            rebuild = self.rebuilds + 1
        )
        .entered();

        if let Some(previous) = self.session.take() {
            previous.destroy();
        }

        let language = self.config.effective_language(selector);
        if let (None, Some(selector)) = (language, selector) {
            debug!(selector, "unrecognized language, editing as plain text");
        }
        let support = language.map(|language| LanguageSupport {
            language,
            extension: self.engine.language_support(language),
        });

        let capabilities = CapabilityList::standard(
            self.config.key_bindings,
            self.theme.clone(),
            support,
            self.config.extras.iter().cloned(),
        );
        let session = self
            .engine
            .create_session(initial_text, capabilities, &self.container);
        self.session = Some(session);
        self.rebuilds += 1;
        debug!(rebuilds = self.rebuilds, ?language, "session rebuilt");
    }

    /// Lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Sessions built so far.
    #[must_use]
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    #[must_use]
    pub fn session(&self) -> Option<&E::Session> {
        self.session.as_ref()
    }

    #[must_use]
    pub fn container(&self) -> &E::Container {
        &self.container
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    #[must_use]
    pub fn engine(&self) -> &E {
        &self.engine
    }

    #[must_use]
    pub fn config(&self) -> &WidgetConfig<E::Extension> {
        &self.config
    }
}

impl<E: EditingEngine, H: HostElement> fmt::Debug for EditorWidget<E, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorWidget")
            .field("phase", &self.phase)
            .field("language", &self.language)
            .field("language_mode", &self.config.language_mode)
            .field("pending_len", &self.pending_value.as_ref().map(String::len))
            .field("has_session", &self.session.is_some())
            .field("rebuilds", &self.rebuilds)
            .finish_non_exhaustive()
    }
}
