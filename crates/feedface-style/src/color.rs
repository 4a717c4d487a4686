#![forbid(unsafe_code)]

//! Color type, hex parsing and CSS formatting.

use std::fmt;
use std::str::FromStr;

/// RGBA color.
///
/// Alpha is kept as a byte so the color round-trips through `#rrggbbaa`
/// notation without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
    /// Alpha channel (0 = transparent, 255 = opaque).
    pub a: u8,
}

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Create an opaque color.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with an explicit alpha channel.
    #[must_use]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from a packed `0xRRGGBB` value.
    #[must_use]
    pub const fn hex(value: u32) -> Self {
        Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    /// Create a color from a packed `0xRRGGBBAA` value.
    #[must_use]
    pub const fn hex_alpha(value: u32) -> Self {
        Self::rgba(
            (value >> 24) as u8,
            (value >> 16) as u8,
            (value >> 8) as u8,
            value as u8,
        )
    }

    /// Whether the alpha channel is fully opaque.
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa` notation.
    pub fn parse_hex(input: &str) -> Result<Self, ParseColorError> {
        let digits = input
            .strip_prefix('#')
            .ok_or(ParseColorError::MissingHash)?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit);
        }
        // All bytes are ASCII hex digits past this point, so slicing is safe
        // and from_str_radix cannot fail.
        let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);
        match digits.len() {
            3 => {
                let short = |i: usize| channel(&digits[i..=i]) * 17;
                Ok(Self::rgb(short(0), short(1), short(2)))
            }
            6 => Ok(Self::rgb(
                channel(&digits[0..2]),
                channel(&digits[2..4]),
                channel(&digits[4..6]),
            )),
            8 => Ok(Self::rgba(
                channel(&digits[0..2]),
                channel(&digits[2..4]),
                channel(&digits[4..6]),
                channel(&digits[6..8]),
            )),
            len => Err(ParseColorError::InvalidLength(len)),
        }
    }

    /// Format as CSS hex notation. Opaque colors use `#rrggbb`.
    #[must_use]
    pub fn to_css(self) -> String {
        if self.is_opaque() {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }

    /// Compute perceived luminance (BT.709) as a `u8` (0 = black, 255 = white).
    ///
    /// Alpha is ignored.
    #[must_use]
    pub fn luminance_u8(self) -> u8 {
        let r = self.r as u32;
        let g = self.g as u32;
        let b = self.b as u32;
        let luma = 2126 * r + 7152 * g + 722 * b;
        ((luma + 5000) / 10_000) as u8
    }

    /// Whether the color reads as a dark background.
    #[must_use]
    pub fn is_dark(self) -> bool {
        self.luminance_u8() < 128
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s.trim())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

/// Error returned when a hex color string cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseColorError {
    /// The string does not start with `#`.
    MissingHash,
    /// A character after `#` is not a hex digit.
    InvalidDigit,
    /// The digit count is not 3, 6 or 8.
    InvalidLength(usize),
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHash => write!(f, "color must start with '#'"),
            Self::InvalidDigit => write!(f, "color contains a non-hex digit"),
            Self::InvalidLength(len) => {
                write!(f, "color has {len} digits, expected 3, 6 or 8")
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// The Solarized palette.
///
/// See <https://ethanschoonover.com/solarized/>.
pub mod solarized {
    use super::Color;

    pub const BASE00: Color = Color::hex(0x002b36);
    pub const BASE01: Color = Color::hex(0x073642);
    pub const BASE02: Color = Color::hex(0x586e75);
    pub const BASE03: Color = Color::hex(0x657b83);
    pub const BASE04: Color = Color::hex(0x839496);
    pub const BASE05: Color = Color::hex(0x93a1a1);
    pub const BASE06: Color = Color::hex(0xeee8d5);
    pub const BASE07: Color = Color::hex(0xfdf6e3);
    pub const RED: Color = Color::hex(0xdc322f);
    pub const ORANGE: Color = Color::hex(0xcb4b16);
    pub const YELLOW: Color = Color::hex(0xb58900);
    pub const GREEN: Color = Color::hex(0x859900);
    pub const CYAN: Color = Color::hex(0x2aa198);
    pub const BLUE: Color = Color::hex(0x268bd2);
    pub const VIOLET: Color = Color::hex(0x6c71c4);
    pub const MAGENTA: Color = Color::hex(0xd33682);

    // Derived slots used by the editor chrome.
    pub const INVALID: Color = Color::hex(0xd30102);
    pub const STONE: Color = BASE04;
    pub const DARK_BACKGROUND: Color = Color::hex(0x00252f);
    pub const HIGHLIGHT_BACKGROUND: Color = Color::hex(0x173541);
    pub const BACKGROUND: Color = BASE00;
    pub const TOOLTIP_BACKGROUND: Color = BASE01;
    pub const SELECTION: Color = Color::hex(0x173541);
    pub const CURSOR: Color = BASE04;
}
