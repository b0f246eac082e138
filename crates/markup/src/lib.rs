//! Inline tag markup for terminal text styling.
//!
//! This crate evaluates HTML-like inline tags such as `<b><red>Hello</red></b>`
//! into text carrying ANSI escape sequences, and provides escape-aware text
//! metrics so that styled strings can still be aligned in fixed-width columns.
//!
//! # Overview
//!
//! The markup language is deliberately small:
//!
//! - `<b>`, `<u>`, `<i>`, `<s>` - bold, underline, italic, strikethrough
//! - `<red>`, `<black>`, `<green>`, `<yellow>`, `<blue>`, `<magenta>`,
//!   `<cyan>`, `<gray>` - named foreground colors
//! - `<color=#RRGGBB>` - 24-bit foreground color
//! - `<bgcolor=#RRGGBB>` - 24-bit background color
//!
//! Every tag must be closed with a matching `</name>`. Styles are inherited
//! by nested tags: `<b><red>x</red></b>` renders `x` bold and red. Unknown
//! tags are transparent containers.
//!
//! # Pipeline
//!
//! ```text
//! text -> parser::parse -> parser::optimize -> eval::evaluate -> styled text
//!                                                    |
//!                                               ansi::apply
//! ```
//!
//! # Usage
//!
//! ```
//! use markup::{metrics, render};
//!
//! let styled = render("<b>Hello</b> World");
//! assert_eq!(metrics::strip(&styled), "Hello World");
//! assert_eq!(metrics::visible_length(&styled), 11);
//!
//! // Parse failures are fail-closed
//! assert_eq!(render("<b>unterminated"), "");
//! ```

pub mod ansi;
pub mod ast;
pub mod color;
pub mod error;
pub mod eval;
pub mod metrics;
pub mod parser;
pub mod style;

// Re-export main types at crate root
pub use ast::{Ast, MarkupNode, NodeKind};
pub use color::{Color, NamedColor};
pub use error::{ColorParseError, MarkupError};
pub use eval::{evaluate, render, try_render};
pub use metrics::Align;
pub use style::{Emphasis, Style};
