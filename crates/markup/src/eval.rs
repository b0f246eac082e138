//! Markup evaluator.
//!
//! Walks a markup AST top-down, threading the inherited [`Style`] from each
//! element to its children, and wraps every element's rendered body in the
//! escape sequences for its composed style.

use std::collections::HashSet;
use std::sync::Mutex;

use log::{error, warn};
use once_cell::sync::Lazy;
use phf::phf_map;

use crate::ansi;
use crate::ast::{MarkupNode, NodeKind};
use crate::color::{Color, NamedColor};
use crate::error::MarkupError;
use crate::parser;
use crate::style::{Emphasis, Style};

/// What a recognized tag contributes to the style of its body.
#[derive(Clone, Copy, Debug)]
enum TagStyle {
    Emphasis(Emphasis),
    Foreground(NamedColor),
    /// `<color=#RRGGBB>`
    RgbForeground,
    /// `<bgcolor=#RRGGBB>`
    RgbBackground,
}

static TAGS: phf::Map<&'static str, TagStyle> = phf_map! {
    "b" => TagStyle::Emphasis(Emphasis::BOLD),
    "u" => TagStyle::Emphasis(Emphasis::UNDERLINE),
    "i" => TagStyle::Emphasis(Emphasis::ITALIC),
    "s" => TagStyle::Emphasis(Emphasis::STRIKETHROUGH),
    "red" => TagStyle::Foreground(NamedColor::Red),
    "black" => TagStyle::Foreground(NamedColor::Black),
    "green" => TagStyle::Foreground(NamedColor::Green),
    "yellow" => TagStyle::Foreground(NamedColor::Yellow),
    "blue" => TagStyle::Foreground(NamedColor::Blue),
    "magenta" => TagStyle::Foreground(NamedColor::Magenta),
    "cyan" => TagStyle::Foreground(NamedColor::Cyan),
    "gray" => TagStyle::Foreground(NamedColor::Gray),
    "color" => TagStyle::RgbForeground,
    "bgcolor" => TagStyle::RgbBackground,
};

/// Most malformed color arguments remembered at a time.
const MAX_REPORTED: usize = 256;

/// Malformed color arguments already reported, so each is logged once.
static REPORTED: Lazy<Mutex<HashSet<String>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Render markup text into a string with embedded ANSI escape sequences.
///
/// Fail-closed: if `text` does not parse, the error is logged and the result
/// is empty. Use [`try_render`] to get the error instead.
///
/// # Examples
///
/// ```
/// use markup::render;
///
/// assert_eq!(render("no tags here"), "no tags here");
/// assert_eq!(render("<b>bold</b>"), "\x1b[1mbold\x1b[0m");
/// assert_eq!(render("<b>oops</i>"), "");
/// ```
pub fn render(text: &str) -> String {
    try_render(text).unwrap_or_else(|err| {
        error!("{err}");
        String::new()
    })
}

/// Render markup text, returning the parse error on malformed input.
pub fn try_render(text: &str) -> Result<String, MarkupError> {
    let ast = parser::optimize(parser::parse(text)?);
    Ok(evaluate(&ast, &Style::default()))
}

/// Evaluate a markup tree with `inherited` as the style of its surroundings.
///
/// Text is emitted verbatim, content nodes concatenate their children left
/// to right, and elements compose their tag's style onto `inherited`.
/// Unknown tags contribute nothing to the style but are otherwise treated
/// like any other element.
pub fn evaluate<N: MarkupNode>(node: &N, inherited: &Style) -> String {
    match node.kind() {
        NodeKind::Text => node.token().to_string(),
        NodeKind::Content => node
            .children()
            .iter()
            .map(|child| evaluate(child, inherited))
            .collect(),
        NodeKind::Element => evaluate_element(node, inherited),
        NodeKind::StartTag | NodeKind::TagName | NodeKind::Argument => String::new(),
    }
}

fn evaluate_element<N: MarkupNode>(node: &N, inherited: &Style) -> String {
    let Some((tag, body)) = node.children().split_first() else {
        return String::new();
    };

    let (name, argument) = tag_parts(tag);
    let style = inherited.patch(&style_for(name, argument));

    let inner: String = body.iter().map(|child| evaluate(child, &style)).collect();
    ansi::apply(&style, &inner)
}

/// Tag name and argument of a start tag, which the optimizer may have
/// collapsed down to its bare name.
fn tag_parts<N: MarkupNode>(tag: &N) -> (&str, Option<&str>) {
    if tag.kind() == NodeKind::TagName {
        return (tag.token(), None);
    }

    let find = |kind| {
        tag.children()
            .iter()
            .find(|child| child.kind() == kind)
            .map(|child| child.token())
    };
    (find(NodeKind::TagName).unwrap_or_default(), find(NodeKind::Argument))
}

/// The style a single tag contributes, ignoring inheritance.
///
/// Unknown tags and malformed color arguments yield the identity style.
pub fn style_for(name: &str, argument: Option<&str>) -> Style {
    match TAGS.get(name) {
        None => Style::default(),
        Some(TagStyle::Emphasis(emphasis)) => Style::emphasis(*emphasis),
        Some(TagStyle::Foreground(color)) => Style::named(*color),
        Some(TagStyle::RgbForeground) => hex_argument(name, argument).map_or_else(Style::default, Style::fg),
        Some(TagStyle::RgbBackground) => hex_argument(name, argument).map_or_else(Style::default, Style::bg),
    }
}

fn hex_argument(name: &str, argument: Option<&str>) -> Option<Color> {
    let argument = argument.unwrap_or_default();
    match Color::parse_hex(argument) {
        Ok(color) => Some(color),
        Err(err) => {
            let key = format!("{name}={argument}");
            let first = REPORTED
                .lock()
                .map(|mut seen| first_report(&mut seen, key))
                .unwrap_or(true);
            if first {
                warn!("ignoring color of <{name}>: {err}");
            }
            None
        }
    }
}

/// Remember `key`, returning whether it is new.
///
/// The set is emptied once it holds [`MAX_REPORTED`] keys, so a stream of
/// distinct bad arguments costs bounded memory and may be reported again.
fn first_report(seen: &mut HashSet<String>, key: String) -> bool {
    if seen.contains(&key) {
        return false;
    }
    if seen.len() >= MAX_REPORTED {
        seen.clear();
    }
    seen.insert(key)
}
