//! Color types for markup.
//!
//! A color is either one of the terminal palette names the markup knows
//! about, or a 24-bit RGB value.

use crossterm::style::Color as TermColor;

use crate::error::ColorParseError;

/// Terminal palette colors addressable by tag name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    Gray,
}

/// A foreground or background color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Palette color (e.g. "red", "cyan").
    Named(NamedColor),
    /// RGB color components.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Build an RGB color from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(r, g, b)
    }

    /// Build an RGB color from a packed `0xRRGGBB` value.
    ///
    /// ```
    /// use markup::Color;
    ///
    /// assert_eq!(Color::from_u32(0xff8000), Color::Rgb(255, 128, 0));
    /// ```
    pub const fn from_u32(value: u32) -> Self {
        Color::Rgb(
            ((value >> 16) & 0xff) as u8,
            ((value >> 8) & 0xff) as u8,
            (value & 0xff) as u8,
        )
    }

    /// Parse a `#RRGGBB` color: a leading `#` followed by exactly six hex
    /// digits, read as an unsigned 24-bit integer.
    ///
    /// ```
    /// use markup::Color;
    ///
    /// assert_eq!(Color::parse_hex("#ff5733").unwrap(), Color::Rgb(255, 87, 51));
    /// assert!(Color::parse_hex("#f00").is_err());
    /// ```
    pub fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        let invalid = || ColorParseError::InvalidHex(input.to_string());

        let digits = input.trim().strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        Ok(Self::from_u32(value))
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Color::Named(named)
    }
}

impl From<Color> for TermColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Rgb(r, g, b) => TermColor::Rgb { r, g, b },
            Color::Named(NamedColor::Black) => TermColor::Black,
            Color::Named(NamedColor::Red) => TermColor::DarkRed,
            Color::Named(NamedColor::Green) => TermColor::DarkGreen,
            Color::Named(NamedColor::Yellow) => TermColor::DarkYellow,
            Color::Named(NamedColor::Blue) => TermColor::DarkBlue,
            Color::Named(NamedColor::Magenta) => TermColor::DarkMagenta,
            Color::Named(NamedColor::Cyan) => TermColor::DarkCyan,
            // The terminal "grey" slots are too light; use the mid-gray RGB.
            Color::Named(NamedColor::Gray) => TermColor::Rgb {
                r: 128,
                g: 128,
                b: 128,
            },
        }
    }
}
