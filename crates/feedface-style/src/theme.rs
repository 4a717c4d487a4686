#![forbid(unsafe_code)]

//! Theme provider.
//!
//! A [`StyleTable`] pairs the editor chrome with the syntax highlight style.
//! [`build_theme`] hands both halves to an engine's [`StylingApi`] and
//! returns the engine's extension tokens as a [`ThemeExtension`], chrome
//! first so that syntax rules can override chrome defaults in engines that
//! resolve by declaration order.
//!
//! # Example
//! ```
//! use feedface_style::{build_theme, CssStyling};
//!
//! let styling = CssStyling::new("ff-editor");
//! let theme = build_theme(&styling);
//! assert!(theme.chrome.contains(".ff-editor .cm-content"));
//! assert_eq!(theme, build_theme(&styling));
//! ```

use std::sync::LazyLock;

use crate::chrome::{ChromeRule, ChromeTarget, ChromeTheme};
use crate::color::{Color, solarized::*};
use crate::directive::{Border, StyleDirective, UnderlinePosition};
use crate::highlight::{HighlightRule, HighlightStyle};
use crate::tag::{Category as C, Tag};

/// Styling surface an editing engine exposes to the theme provider.
///
/// Implementations turn engine-neutral tables into whatever token the
/// engine composes into a session (a CSS string, a JS object handle …).
pub trait StylingApi {
    /// Engine capability token.
    type Extension;

    /// Materialize chrome rules.
    fn theme(&self, chrome: &ChromeTheme) -> Self::Extension;

    /// Materialize a syntax highlight style.
    fn syntax_highlighting(&self, style: &HighlightStyle) -> Self::Extension;
}

/// The pair of engine tokens produced by [`build_theme`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeExtension<X> {
    /// Chrome rules token.
    pub chrome: X,
    /// Syntax highlighting token.
    pub syntax: X,
}

impl<X> ThemeExtension<X> {
    /// Borrow both tokens, chrome first.
    pub fn iter(&self) -> impl Iterator<Item = &X> {
        [&self.chrome, &self.syntax].into_iter()
    }

    /// Map both tokens.
    pub fn map<Y>(self, mut f: impl FnMut(X) -> Y) -> ThemeExtension<Y> {
        ThemeExtension {
            chrome: f(self.chrome),
            syntax: f(self.syntax),
        }
    }
}

impl<X> IntoIterator for ThemeExtension<X> {
    type Item = X;
    type IntoIter = std::array::IntoIter<X, 2>;

    fn into_iter(self) -> Self::IntoIter {
        [self.chrome, self.syntax].into_iter()
    }
}

/// Chrome plus syntax style. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleTable {
    pub chrome: ChromeTheme,
    pub highlight: HighlightStyle,
}

impl StyleTable {
    /// Resolve the directive for a syntax tag (with fallback).
    #[must_use]
    pub fn directive_for(&self, tag: Tag) -> Option<&StyleDirective> {
        self.highlight.resolve(tag)
    }
}

static SOLARIZED_DARK: LazyLock<StyleTable> = LazyLock::new(|| StyleTable {
    chrome: solarized_dark_chrome(),
    highlight: solarized_dark_highlight(),
});

/// The process-wide Solarized Dark table, built on first use.
#[must_use]
pub fn solarized_dark() -> &'static StyleTable {
    &SOLARIZED_DARK
}

/// Build the theme extension pair for an engine.
///
/// Pure: the same API yields the same tokens on every call.
pub fn build_theme<A: StylingApi + ?Sized>(api: &A) -> ThemeExtension<A::Extension> {
    let table = solarized_dark();
    ThemeExtension {
        chrome: api.theme(&table.chrome),
        syntax: api.syntax_highlighting(&table.highlight),
    }
}

fn solarized_dark_chrome() -> ChromeTheme {
    use ChromeTarget::*;

    let rules = vec![
        ChromeRule::new([Root])
            .set("color", BASE05)
            .set("background-color", BACKGROUND),
        // Keeps an empty editor from collapsing to zero height.
        ChromeRule::new([Content, Gutter]).set("min-height", "75vh"),
        ChromeRule::new([Content]).set("caret-color", CURSOR),
        ChromeRule::new([Cursor]).set("border-left-color", CURSOR),
        ChromeRule::new([Selection]).set("background-color", SELECTION),
        ChromeRule::new([Panels])
            .set("background-color", DARK_BACKGROUND)
            .set("color", BASE03),
        ChromeRule::new([PanelsTop]).set("border-bottom", Border::solid(2, Color::BLACK)),
        ChromeRule::new([PanelsBottom]).set("border-top", Border::solid(2, Color::BLACK)),
        ChromeRule::new([SearchMatch])
            .set("background-color", Color::hex_alpha(0x72a1ff59))
            .set("outline", Border::solid(1, Color::hex(0x457dff))),
        ChromeRule::new([SearchMatchSelected])
            .set("background-color", Color::hex_alpha(0x6199ff2f)),
        ChromeRule::new([ActiveLine]).set("background-color", HIGHLIGHT_BACKGROUND),
        ChromeRule::new([SelectionMatch]).set("background-color", Color::hex_alpha(0xaafe661a)),
        ChromeRule::new([MatchingBracket]).set("outline", Border::solid(1, BASE06)),
        ChromeRule::new([Gutters])
            .set("background-color", DARK_BACKGROUND)
            .set("color", STONE)
            .set("border", "none"),
        ChromeRule::new([ActiveLineGutter]).set("background-color", HIGHLIGHT_BACKGROUND),
        ChromeRule::new([FoldPlaceholder])
            .set("background-color", "transparent")
            .set("border", "none")
            .set("color", Color::rgb(0xdd, 0xdd, 0xdd)),
        ChromeRule::new([Tooltip])
            .set("border", "none")
            .set("background-color", TOOLTIP_BACKGROUND),
        ChromeRule::new([TooltipArrowBefore])
            .set("border-top-color", "transparent")
            .set("border-bottom-color", "transparent"),
        ChromeRule::new([TooltipArrowAfter])
            .set("border-top-color", TOOLTIP_BACKGROUND)
            .set("border-bottom-color", TOOLTIP_BACKGROUND),
        ChromeRule::new([AutocompleteSelected])
            .set("background-color", HIGHLIGHT_BACKGROUND)
            .set("color", BASE03),
    ];

    ChromeTheme { rules, dark: true }
}

fn solarized_dark_highlight() -> HighlightStyle {
    let fg = |color: Color| StyleDirective::new().color(color);
    let tag = Tag::new;

    HighlightStyle::define([
        HighlightRule::new([C::Keyword], fg(GREEN)),
        HighlightRule::new(
            [C::Name, C::Deleted, C::Character, C::PropertyName, C::MacroName],
            fg(CYAN),
        ),
        HighlightRule::new([C::VariableName], fg(BASE05)),
        HighlightRule::new([tag(C::VariableName).function()], fg(BLUE)),
        HighlightRule::new([C::LabelName], fg(MAGENTA)),
        HighlightRule::new(
            [tag(C::Color), tag(C::Name).constant(), tag(C::Name).standard()],
            fg(YELLOW),
        ),
        HighlightRule::new([tag(C::Name).definition(), tag(C::Separator)], fg(CYAN)),
        HighlightRule::new([C::Brace], fg(MAGENTA)),
        HighlightRule::new(
            [C::Number, C::Changed, C::Annotation, C::Modifier, C::SelfKeyword, C::Namespace],
            fg(MAGENTA),
        ),
        HighlightRule::new([C::TypeName, C::ClassName], fg(ORANGE)),
        HighlightRule::new([C::Operator, C::OperatorKeyword], fg(VIOLET)),
        HighlightRule::new([C::TagName], fg(BLUE)),
        HighlightRule::new([C::SquareBracket], fg(RED)),
        HighlightRule::new([C::AngleBracket], fg(BASE02)),
        HighlightRule::new([C::AttributeName], fg(BASE05)),
        HighlightRule::new([C::Regexp], fg(INVALID)),
        HighlightRule::new([C::Quote], fg(GREEN)),
        HighlightRule::new([C::String], fg(YELLOW)),
        HighlightRule::new(
            [C::Link],
            fg(CYAN)
                .underline()
                .underline_position(UnderlinePosition::Under),
        ),
        HighlightRule::new(
            [tag(C::Url), tag(C::Escape), tag(C::String).special()],
            fg(YELLOW),
        ),
        HighlightRule::new([C::Meta], fg(RED)),
        HighlightRule::new([C::Comment], fg(BASE02).italic()),
        HighlightRule::new([C::Strong], fg(BASE06).bold()),
        HighlightRule::new([C::Emphasis], fg(GREEN).italic()),
        HighlightRule::new([C::Strikethrough], StyleDirective::new().line_through()),
        HighlightRule::new([C::Heading], fg(YELLOW).bold()),
        HighlightRule::new([C::Heading1], fg(BASE07).bold()),
        HighlightRule::new([C::Heading2, C::Heading3, C::Heading4], fg(BASE06).bold()),
        HighlightRule::new([C::Heading5, C::Heading6], fg(BASE06)),
        HighlightRule::new(
            [tag(C::Atom), tag(C::Bool), tag(C::VariableName).special()],
            fg(MAGENTA),
        ),
        HighlightRule::new([C::ProcessingInstruction, C::Inserted], fg(RED)),
        HighlightRule::new([C::ContentSeparator], fg(YELLOW)),
        HighlightRule::new(
            [C::Invalid],
            fg(BASE02).border_bottom(Border::dotted(1, RED)),
        ),
    ])
}
