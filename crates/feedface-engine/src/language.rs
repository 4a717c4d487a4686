#![forbid(unsafe_code)]

//! Language selector table.

use std::fmt;
use std::str::FromStr;

/// Languages with dedicated highlighting support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    Html,
    Css,
    Json,
    Markdown,
}

/// Recognized selector strings, lowercase.
const SELECTORS: &[(&str, Language)] = &[
    ("javascript", Language::JavaScript),
    ("js", Language::JavaScript),
    ("html", Language::Html),
    ("css", Language::Css),
    ("json", Language::Json),
    ("markdown", Language::Markdown),
    ("md", Language::Markdown),
];

impl Language {
    /// Every supported language.
    pub const ALL: [Language; 5] = [
        Self::JavaScript,
        Self::Html,
        Self::Css,
        Self::Json,
        Self::Markdown,
    ];

    /// Look up a selector, ignoring ASCII case and surrounding whitespace.
    ///
    /// Unknown selectors return `None`; callers degrade to plain text.
    #[must_use]
    pub fn from_selector(selector: &str) -> Option<Self> {
        let selector = selector.trim();
        SELECTORS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(selector))
            .map(|&(_, language)| language)
    }

    /// Canonical selector.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::Html => "html",
            Self::Css => "css",
            Self::Json => "json",
            Self::Markdown => "markdown",
        }
    }

    /// Every selector that resolves to this language.
    pub fn selectors(self) -> impl Iterator<Item = &'static str> {
        SELECTORS
            .iter()
            .filter(move |(_, language)| *language == self)
            .map(|(name, _)| *name)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_selector(s).ok_or_else(|| UnknownLanguage(s.to_owned()))
    }
}

/// A selector that names no supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language selector: {:?}", self.0)
    }
}

impl std::error::Error for UnknownLanguage {}

/// An engine's highlighting token for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSupport<X> {
    pub language: Language,
    pub extension: X,
}
