#![forbid(unsafe_code)]

//! Rendering directives attached to syntax tags and chrome targets.
//!
//! A [`StyleDirective`] is the per-token half of the theme: a color plus
//! optional font weight, font style, decoration and bottom border. It is
//! built with the same chained style as a terminal `Style`:
//!
//! ```
//! use feedface_style::{Color, StyleDirective};
//!
//! let heading = StyleDirective::new().color(Color::hex(0xfdf6e3)).bold();
//! assert!(heading.is_bold());
//! ```

use std::borrow::Cow;
use std::fmt;

use bitflags::bitflags;

use crate::color::Color;

bitflags! {
    /// Text decoration lines.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Decoration: u8 {
        /// Line below the text.
        const UNDERLINE = 1 << 0;
        /// Line through the middle of the text.
        const LINE_THROUGH = 1 << 1;
    }
}

impl Decoration {
    fn css(self) -> Option<&'static str> {
        match (
            self.contains(Self::UNDERLINE),
            self.contains(Self::LINE_THROUGH),
        ) {
            (true, true) => Some("underline line-through"),
            (true, false) => Some("underline"),
            (false, true) => Some("line-through"),
            (false, false) => None,
        }
    }
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    Normal,
    Bold,
}

impl FontWeight {
    const fn css(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Bold => "bold",
        }
    }
}

/// Font style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Normal,
    Italic,
}

impl FontStyle {
    const fn css(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Italic => "italic",
        }
    }
}

/// Where an underline is drawn relative to the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnderlinePosition {
    Auto,
    /// Below descenders, which keeps underlined links readable.
    Under,
}

impl UnderlinePosition {
    const fn css(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Under => "under",
        }
    }
}

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderLine {
    Solid,
    Dotted,
    Dashed,
}

impl BorderLine {
    const fn css(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Dotted => "dotted",
            Self::Dashed => "dashed",
        }
    }
}

/// A single border (or outline) edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Border {
    /// Width in CSS pixels.
    pub width_px: u8,
    /// Line style.
    pub line: BorderLine,
    /// Line color.
    pub color: Color,
}

impl Border {
    /// Solid border of `width_px` pixels.
    #[must_use]
    pub const fn solid(width_px: u8, color: Color) -> Self {
        Self {
            width_px,
            line: BorderLine::Solid,
            color,
        }
    }

    /// Dotted border of `width_px` pixels.
    #[must_use]
    pub const fn dotted(width_px: u8, color: Color) -> Self {
        Self {
            width_px,
            line: BorderLine::Dotted,
            color,
        }
    }
}

impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px {} {}", self.width_px, self.line.css(), self.color)
    }
}

/// The value side of a CSS declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CssValue {
    Color(Color),
    Border(Border),
    /// Keyword or length passed through verbatim (`none`, `75vh`, `bold`).
    Raw(Cow<'static, str>),
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(color) => color.fmt(f),
            Self::Border(border) => border.fmt(f),
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}

impl From<Color> for CssValue {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<Border> for CssValue {
    fn from(border: Border) -> Self {
        Self::Border(border)
    }
}

impl From<&'static str> for CssValue {
    fn from(raw: &'static str) -> Self {
        Self::Raw(Cow::Borrowed(raw))
    }
}

/// A `property: value` pair. Property names use CSS kebab case.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Declaration {
    pub property: &'static str,
    pub value: CssValue,
}

impl Declaration {
    /// Create a declaration.
    #[must_use]
    pub fn new(property: &'static str, value: impl Into<CssValue>) -> Self {
        Self {
            property,
            value: value.into(),
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {};", self.property, self.value)
    }
}

/// Rendering directive for one syntax category.
///
/// Every field is optional; unset fields inherit from the surrounding text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct StyleDirective {
    pub color: Option<Color>,
    pub font_weight: Option<FontWeight>,
    pub font_style: Option<FontStyle>,
    pub decoration: Decoration,
    pub underline_position: Option<UnderlinePosition>,
    pub border_bottom: Option<Border>,
}

impl StyleDirective {
    /// An empty directive.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            color: None,
            font_weight: None,
            font_style: None,
            decoration: Decoration::empty(),
            underline_position: None,
            border_bottom: None,
        }
    }

    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.font_weight = Some(FontWeight::Bold);
        self
    }

    #[must_use]
    pub const fn italic(mut self) -> Self {
        self.font_style = Some(FontStyle::Italic);
        self
    }

    #[must_use]
    pub const fn underline(mut self) -> Self {
        self.decoration = self.decoration.union(Decoration::UNDERLINE);
        self
    }

    #[must_use]
    pub const fn line_through(mut self) -> Self {
        self.decoration = self.decoration.union(Decoration::LINE_THROUGH);
        self
    }

    #[must_use]
    pub const fn underline_position(mut self, position: UnderlinePosition) -> Self {
        self.underline_position = Some(position);
        self
    }

    #[must_use]
    pub const fn border_bottom(mut self, border: Border) -> Self {
        self.border_bottom = Some(border);
        self
    }

    /// Whether the directive sets a bold weight.
    #[must_use]
    pub const fn is_bold(&self) -> bool {
        matches!(self.font_weight, Some(FontWeight::Bold))
    }

    /// Whether the directive sets an italic style.
    #[must_use]
    pub const fn is_italic(&self) -> bool {
        matches!(self.font_style, Some(FontStyle::Italic))
    }

    /// Whether no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::new()
    }

    /// CSS declarations in a stable order.
    #[must_use]
    pub fn declarations(&self) -> Vec<Declaration> {
        let mut out = Vec::with_capacity(6);
        if let Some(color) = self.color {
            out.push(Declaration::new("color", color));
        }
        if let Some(weight) = self.font_weight {
            out.push(Declaration::new("font-weight", weight.css()));
        }
        if let Some(style) = self.font_style {
            out.push(Declaration::new("font-style", style.css()));
        }
        if let Some(decoration) = self.decoration.css() {
            out.push(Declaration::new("text-decoration", decoration));
        }
        if let Some(position) = self.underline_position {
            out.push(Declaration::new("text-underline-position", position.css()));
        }
        if let Some(border) = self.border_bottom {
            out.push(Declaration::new("border-bottom", border));
        }
        out
    }
}
