//! Escape-aware text metrics.
//!
//! Styled strings carry invisible `ESC [ ... m` sequences. Everything that
//! computes column widths goes through this module so that embedded color
//! codes never distort alignment padding.

use std::borrow::Cow;

const ESC: char = '\x1b';

/// Horizontal alignment of content inside a fixed-width field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Align {
    Left,
    #[default]
    Middle,
    Right,
}

/// Length in bytes of the SGR sequence (`ESC [ [0-9;]* m`) at the start of
/// `s`, if there is one.
fn sgr_len(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    if bytes.first() != Some(&0x1b) || bytes.get(1) != Some(&b'[') {
        return None;
    }
    let params = bytes[2..]
        .iter()
        .take_while(|b| b.is_ascii_digit() || **b == b';')
        .count();
    (bytes.get(2 + params) == Some(&b'm')).then_some(3 + params)
}

/// Remove every `ESC [ digits-and-semicolons m` sequence from `s`.
///
/// Borrows the input when it contains no escape character at all.
///
/// ```
/// use markup::metrics::strip;
///
/// assert_eq!(strip("\x1b[1mbold\x1b[0m"), "bold");
/// ```
pub fn strip(s: &str) -> Cow<'_, str> {
    if !s.contains(ESC) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(pos) = rest.find(ESC) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        match sgr_len(tail) {
            Some(len) => rest = &tail[len..],
            None => {
                // Not an SGR sequence: keep the escape character as text.
                out.push(ESC);
                rest = &tail[ESC.len_utf8()..];
            }
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}

/// Number of Unicode code points left once escape sequences are stripped.
pub fn visible_length(s: &str) -> usize {
    strip(s).chars().count()
}

/// Number of invisible escape characters embedded in `s`.
///
/// Adding this to a target width lets `format!` padding, which counts
/// characters, produce a field of the intended visible width.
pub fn escape_overhead(s: &str) -> usize {
    s.chars().count() - visible_length(s)
}

/// Pad `s` into a field of `width` visible columns.
///
/// Left alignment pads on the right, right alignment on the left, and middle
/// alignment splits the padding with any odd remainder on the right. Content
/// wider than the field is returned unpadded, never truncated.
pub fn pad(s: &str, width: usize, align: Align) -> String {
    let field = width + escape_overhead(s);
    match align {
        Align::Left => format!("{s:<field$}"),
        Align::Middle => format!("{s:^field$}"),
        Align::Right => format!("{s:>field$}"),
    }
}
