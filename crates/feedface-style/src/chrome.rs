#![forbid(unsafe_code)]

//! Editor chrome: background, caret, selection, gutters, panels, tooltips.
//!
//! Chrome rules target structural parts of the editing surface rather than
//! syntax tokens. Targets are engine-neutral; [`ChromeTarget::selector`]
//! gives the selector understood by class-based engines, where `&` stands
//! for the editor root.

use crate::directive::Declaration;

/// A structural part of the editing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChromeTarget {
    /// The editor root element.
    Root,
    /// The editable content area.
    Content,
    /// A single gutter column.
    Gutter,
    /// The gutter container.
    Gutters,
    /// Primary caret and drop caret.
    Cursor,
    /// Selected text background (focused and unfocused).
    Selection,
    Panels,
    PanelsTop,
    PanelsBottom,
    SearchMatch,
    SearchMatchSelected,
    ActiveLine,
    ActiveLineGutter,
    SelectionMatch,
    /// Matching and non-matching bracket outline while focused.
    MatchingBracket,
    FoldPlaceholder,
    Tooltip,
    TooltipArrowBefore,
    TooltipArrowAfter,
    /// Highlighted entry of the completion list.
    AutocompleteSelected,
}

impl ChromeTarget {
    /// Selector for class-based engines.
    #[must_use]
    pub const fn selector(self) -> &'static str {
        match self {
            Self::Root => "&",
            Self::Content => ".cm-content",
            Self::Gutter => ".cm-gutter",
            Self::Gutters => ".cm-gutters",
            Self::Cursor => ".cm-cursor, .cm-dropCursor",
            Self::Selection => {
                "&.cm-focused > .cm-scroller > .cm-selectionLayer .cm-selectionBackground, \
                 .cm-selectionBackground, .cm-content ::selection"
            }
            Self::Panels => ".cm-panels",
            Self::PanelsTop => ".cm-panels.cm-panels-top",
            Self::PanelsBottom => ".cm-panels.cm-panels-bottom",
            Self::SearchMatch => ".cm-searchMatch",
            Self::SearchMatchSelected => ".cm-searchMatch.cm-searchMatch-selected",
            Self::ActiveLine => ".cm-activeLine",
            Self::ActiveLineGutter => ".cm-activeLineGutter",
            Self::SelectionMatch => ".cm-selectionMatch",
            Self::MatchingBracket => {
                "&.cm-focused .cm-matchingBracket, &.cm-focused .cm-nonmatchingBracket"
            }
            Self::FoldPlaceholder => ".cm-foldPlaceholder",
            Self::Tooltip => ".cm-tooltip",
            Self::TooltipArrowBefore => ".cm-tooltip .cm-tooltip-arrow:before",
            Self::TooltipArrowAfter => ".cm-tooltip .cm-tooltip-arrow:after",
            Self::AutocompleteSelected => ".cm-tooltip-autocomplete > ul > li[aria-selected]",
        }
    }
}

/// Declarations applied to one or more chrome targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeRule {
    pub targets: Vec<ChromeTarget>,
    pub declarations: Vec<Declaration>,
}

impl ChromeRule {
    /// Start a rule for the given targets.
    #[must_use]
    pub fn new(targets: impl IntoIterator<Item = ChromeTarget>) -> Self {
        Self {
            targets: targets.into_iter().collect(),
            declarations: Vec::new(),
        }
    }

    /// Append a declaration.
    #[must_use]
    pub fn set(mut self, property: &'static str, value: impl Into<crate::CssValue>) -> Self {
        self.declarations.push(Declaration::new(property, value));
        self
    }

    /// Joined selector for class-based engines.
    #[must_use]
    pub fn selector(&self) -> String {
        self.targets
            .iter()
            .map(|t| t.selector())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The value declared for `property`, if any.
    #[must_use]
    pub fn value_of(&self, property: &str) -> Option<&crate::CssValue> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| &d.value)
    }
}

/// Ordered chrome rules plus the light/dark hint engines use for their
/// own defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChromeTheme {
    pub rules: Vec<ChromeRule>,
    pub dark: bool,
}

impl ChromeTheme {
    /// Rules that mention `target`, in order.
    pub fn rules_for(&self, target: ChromeTarget) -> impl Iterator<Item = &ChromeRule> {
        self.rules
            .iter()
            .filter(move |rule| rule.targets.contains(&target))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ChromeTheme {
    /// `{selector: {property: value}}`, in rule order.
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        struct Declarations<'a>(&'a [Declaration]);

        impl serde::Serialize for Declarations<'_> {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for decl in self.0 {
                    map.serialize_entry(decl.property, &decl.value.to_string())?;
                }
                map.end()
            }
        }

        let mut map = serializer.serialize_map(Some(self.rules.len()))?;
        for rule in &self.rules {
            map.serialize_entry(&rule.selector(), &Declarations(&rule.declarations))?;
        }
        map.end()
    }
}
