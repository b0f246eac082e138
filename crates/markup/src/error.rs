//! Error types for markup evaluation.

use thiserror::Error;

/// Errors that can occur when evaluating markup.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// The input does not match the markup grammar.
    ///
    /// `line` and `column` are 1-based; the column counts characters.
    #[error("Parse error at {line}:{column} => {message}")]
    Parse {
        line: usize,
        column: usize,
        message: String,
    },
}

/// Errors that can occur when parsing a color argument.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}
