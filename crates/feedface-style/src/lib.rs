#![forbid(unsafe_code)]

//! Style tables and the theme provider for the feed-face editor widget.
//!
//! The crate has no knowledge of widgets or sessions. It builds one
//! immutable [`StyleTable`] (Solarized Dark) and hands it to whatever
//! [`StylingApi`] an editing engine exposes.

pub mod chrome;
pub mod color;
pub mod css;
pub mod directive;
pub mod highlight;
pub mod tag;
pub mod theme;

pub use chrome::{ChromeRule, ChromeTarget, ChromeTheme};
pub use color::{Color, ParseColorError};
pub use css::CssStyling;
pub use directive::{
    Border, BorderLine, CssValue, Declaration, Decoration, FontStyle, FontWeight, StyleDirective,
    UnderlinePosition,
};
pub use highlight::{HighlightRule, HighlightStyle};
pub use tag::{Category, Tag, TagModifiers};
pub use theme::{StyleTable, StylingApi, ThemeExtension, build_theme, solarized_dark};
