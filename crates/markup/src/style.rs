//! Style types for markup.
//!
//! A Style combines colors and emphasis modifiers into a single specification.

use bitflags::bitflags;

use crate::color::{Color, NamedColor};

bitflags! {
    /// Text emphasis modifiers. Independent of each other and of colors.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Emphasis: u8 {
        const BOLD = 1;
        const UNDERLINE = 1 << 1;
        const ITALIC = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
    }
}

/// Complete style specification including colors and modifiers.
///
/// `Style::default()` is the identity style: applying it leaves text untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground (text) color.
    pub fg: Option<Color>,
    /// Background color.
    pub bg: Option<Color>,
    /// Emphasis modifiers.
    pub emphasis: Emphasis,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// A style with only the given emphasis.
    pub const fn emphasis(emphasis: Emphasis) -> Self {
        Self {
            fg: None,
            bg: None,
            emphasis,
        }
    }

    /// A style with only a foreground color.
    pub const fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            bg: None,
            emphasis: Emphasis::empty(),
        }
    }

    /// A style with only a background color.
    pub const fn bg(color: Color) -> Self {
        Self {
            fg: None,
            bg: Some(color),
            emphasis: Emphasis::empty(),
        }
    }

    /// A style with a palette foreground color.
    pub const fn named(color: NamedColor) -> Self {
        Self::fg(Color::Named(color))
    }

    /// Builder-style: add emphasis to this style.
    pub fn with_emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis |= emphasis;
        self
    }

    /// Returns true if no style properties are set.
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.emphasis.is_empty()
    }

    /// Compose `child` on top of this (inherited) style.
    ///
    /// Emphasis flags are OR'd together. A color set in `child` overrides the
    /// inherited one; an unset child color keeps the inherited color.
    pub fn patch(&self, child: &Style) -> Style {
        Style {
            fg: child.fg.or(self.fg),
            bg: child.bg.or(self.bg),
            emphasis: self.emphasis | child.emphasis,
        }
    }
}
