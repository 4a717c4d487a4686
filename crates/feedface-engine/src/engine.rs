#![forbid(unsafe_code)]

//! The editing-engine boundary.
//!
//! The widget never edits or renders text itself. It talks to an engine
//! through these two traits: [`EditingEngine`] constructs sessions and
//! supplies styling and language tokens, [`EditingSession`] is one live,
//! configured editing surface.

use std::fmt;

use feedface_style::StylingApi;

use crate::capability::CapabilityList;
use crate::language::Language;

/// Factory for editing sessions.
pub trait EditingEngine {
    /// Opaque capability token composed into sessions.
    type Extension: Clone + fmt::Debug;

    /// Visual container a session renders into.
    type Container;

    /// Live session type.
    type Session: EditingSession<Extension = Self::Extension>;

    /// Styling surface consumed by the theme provider.
    type Styling: StylingApi<Extension = Self::Extension>;

    /// The engine's styling API.
    fn styling(&self) -> &Self::Styling;

    /// Highlighting support for `language`.
    fn language_support(&self, language: Language) -> Self::Extension;

    /// Construct a session bound to `initial_text` and `capabilities` and
    /// render it into `container`.
    ///
    /// The container must not already hold a live session; callers destroy
    /// the previous session first.
    fn create_session(
        &mut self,
        initial_text: &str,
        capabilities: CapabilityList<Self::Extension>,
        container: &Self::Container,
    ) -> Self::Session;
}

/// One live editing surface.
///
/// Its capability list is fixed at construction. Changing capabilities
/// means destroying the session and creating another.
pub trait EditingSession {
    /// Capability token type.
    type Extension;

    /// Current document content.
    fn text(&self) -> String;

    /// Replace the whole document, keeping the capability list.
    fn replace_text(&mut self, text: &str);

    /// The list the session was built from.
    fn capabilities(&self) -> &CapabilityList<Self::Extension>;

    /// Tear down the session and clear what it rendered.
    fn destroy(self);
}
