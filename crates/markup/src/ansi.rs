//! ANSI styling engine.
//!
//! Turns a [`Style`] into SGR escape sequences with crossterm's style
//! commands and wraps text in them.

use crossterm::Command;
use crossterm::style::{Attribute, SetAttribute, SetBackgroundColor, SetForegroundColor};

use crate::color::{Color, NamedColor};
use crate::style::{Emphasis, Style};

/// The SGR reset sequence emitted after every styled span.
pub const RESET: &str = "\x1b[0m";

const ATTRIBUTES: [(Emphasis, Attribute); 4] = [
    (Emphasis::BOLD, Attribute::Bold),
    (Emphasis::ITALIC, Attribute::Italic),
    (Emphasis::UNDERLINE, Attribute::Underlined),
    (Emphasis::STRIKETHROUGH, Attribute::CrossedOut),
];

/// The escape sequences that switch the terminal into `style`.
pub fn sgr(style: &Style) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    for (flag, attribute) in ATTRIBUTES {
        if style.emphasis.contains(flag) {
            let _ = SetAttribute(attribute).write_ansi(&mut out);
        }
    }
    if let Some(fg) = style.fg {
        let _ = SetForegroundColor(fg.into()).write_ansi(&mut out);
    }
    if let Some(bg) = style.bg {
        let _ = SetBackgroundColor(bg.into()).write_ansi(&mut out);
    }
    out
}

/// Wrap `text` in the escape sequences for `style`.
///
/// The identity style returns `text` unchanged. Resets already embedded in
/// `text` (from nested spans) are followed by the prefix again, so the
/// enclosing style stays in effect after a nested span ends.
///
/// ```
/// use markup::{ansi, metrics, Emphasis, Style};
///
/// let bold = ansi::apply(&Style::emphasis(Emphasis::BOLD), "hi");
/// assert_eq!(bold, "\x1b[1mhi\x1b[0m");
/// assert_eq!(metrics::strip(&bold), "hi");
/// ```
pub fn apply(style: &Style, text: &str) -> String {
    if style.is_empty() {
        return text.to_string();
    }

    let prefix = sgr(style);
    let body = if text.contains(RESET) {
        text.replace(RESET, &format!("{RESET}{prefix}"))
    } else {
        text.to_string()
    };

    let mut out = String::with_capacity(prefix.len() + body.len() + RESET.len());
    out.push_str(&prefix);
    out.push_str(&body);
    out.push_str(RESET);
    out
}

/// Foreground-color `text`.
pub fn paint(color: impl Into<Color>, text: &str) -> String {
    apply(&Style::fg(color.into()), text)
}

/// Background-color `text`.
pub fn on(color: impl Into<Color>, text: &str) -> String {
    apply(&Style::bg(color.into()), text)
}

pub fn bold(text: &str) -> String {
    apply(&Style::emphasis(Emphasis::BOLD), text)
}

pub fn italic(text: &str) -> String {
    apply(&Style::emphasis(Emphasis::ITALIC), text)
}

pub fn underline(text: &str) -> String {
    apply(&Style::emphasis(Emphasis::UNDERLINE), text)
}

pub fn strikethrough(text: &str) -> String {
    apply(&Style::emphasis(Emphasis::STRIKETHROUGH), text)
}

pub fn black(text: &str) -> String {
    paint(NamedColor::Black, text)
}

pub fn red(text: &str) -> String {
    paint(NamedColor::Red, text)
}

pub fn green(text: &str) -> String {
    paint(NamedColor::Green, text)
}

pub fn yellow(text: &str) -> String {
    paint(NamedColor::Yellow, text)
}

pub fn blue(text: &str) -> String {
    paint(NamedColor::Blue, text)
}

pub fn magenta(text: &str) -> String {
    paint(NamedColor::Magenta, text)
}

pub fn cyan(text: &str) -> String {
    paint(NamedColor::Cyan, text)
}

pub fn gray(text: &str) -> String {
    paint(NamedColor::Gray, text)
}
