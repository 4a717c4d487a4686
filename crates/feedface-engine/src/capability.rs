#![forbid(unsafe_code)]

//! Capability tokens and the ordered, immutable capability list.
//!
//! A session is configured once from a [`CapabilityList`]. The list can
//! only be built through [`CapabilityList::standard`], which fixes the
//! order:
//!
//! 1. base editing behavior
//! 2. key-binding overrides
//! 3. line wrapping
//! 4. theme (chrome, then syntax)
//! 5. language support (or a no-op for plain text)
//! 6. caller-supplied extras
//!
//! Language support follows every generic entry so its syntax rules are
//! never shadowed.

use std::sync::Arc;

use bitflags::bitflags;
use feedface_style::ThemeExtension;

use crate::language::{Language, LanguageSupport};

bitflags! {
    /// Key-binding overrides layered over the engine defaults.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KeyBindings: u8 {
        /// Tab indents the selection instead of moving focus.
        const INDENT_WITH_TAB = 1 << 0;
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::INDENT_WITH_TAB
    }
}

/// One entry of a capability list. `X` is the engine's extension token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability<X> {
    BaseBehavior,
    KeyBindings(KeyBindings),
    LineWrapping,
    Theme(ThemeExtension<X>),
    /// `None` is plain text.
    Language(Option<LanguageSupport<X>>),
    Extra(X),
}

/// Discriminant of a [`Capability`], for order checks and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CapabilityKind {
    BaseBehavior,
    KeyBindings,
    LineWrapping,
    Theme,
    Language,
    Extra,
}

impl<X> Capability<X> {
    /// The entry's kind.
    #[must_use]
    pub const fn kind(&self) -> CapabilityKind {
        match self {
            Self::BaseBehavior => CapabilityKind::BaseBehavior,
            Self::KeyBindings(_) => CapabilityKind::KeyBindings,
            Self::LineWrapping => CapabilityKind::LineWrapping,
            Self::Theme(_) => CapabilityKind::Theme,
            Self::Language(_) => CapabilityKind::Language,
            Self::Extra(_) => CapabilityKind::Extra,
        }
    }
}

/// Immutable, ordered capability list.
///
/// Cloning shares the underlying storage, so a session and the widget that
/// built it can hold the same list without copying tokens.
#[derive(Debug, PartialEq, Eq)]
pub struct CapabilityList<X> {
    entries: Arc<[Capability<X>]>,
}

impl<X> Clone for CapabilityList<X> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<X> CapabilityList<X> {
    /// Compose the standard list.
    #[must_use]
    pub fn standard(
        key_bindings: KeyBindings,
        theme: ThemeExtension<X>,
        language: Option<LanguageSupport<X>>,
        extras: impl IntoIterator<Item = X>,
    ) -> Self {
        let entries: Vec<Capability<X>> = [
            Capability::BaseBehavior,
            Capability::KeyBindings(key_bindings),
            Capability::LineWrapping,
            Capability::Theme(theme),
            Capability::Language(language),
        ]
        .into_iter()
        .chain(extras.into_iter().map(Capability::Extra))
        .collect();
        Self {
            entries: entries.into(),
        }
    }

    /// Entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Capability<X>> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Kinds in order.
    #[must_use]
    pub fn kinds(&self) -> Vec<CapabilityKind> {
        self.entries.iter().map(Capability::kind).collect()
    }

    /// The language the list highlights, `None` for plain text.
    #[must_use]
    pub fn language(&self) -> Option<Language> {
        self.entries.iter().find_map(|entry| match entry {
            Capability::Language(support) => support.as_ref().map(|s| s.language),
            _ => None,
        })
    }

    /// Whether both lists share storage (same configuration instance).
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }
}

impl<'a, X> IntoIterator for &'a CapabilityList<X> {
    type Item = &'a Capability<X>;
    type IntoIter = std::slice::Iter<'a, Capability<X>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
