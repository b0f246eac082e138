//! Error types for printing.

use thiserror::Error;

/// Errors from pushing and popping gutter states.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GutterError {
    /// A pop would have removed the base state.
    #[error("cannot pop {requested} gutter state(s): only {available} pushed")]
    Underflow { requested: usize, available: usize },
}

/// Errors from placeholder substitution.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder refers past the end of the argument list.
    #[error("placeholder {{{index}}} has no argument ({count} given)")]
    MissingArgument { index: usize, count: usize },

    /// A `{` or `}` that is neither doubled nor part of a placeholder.
    #[error("unmatched brace at offset {0}")]
    UnmatchedBrace(usize),

    /// An argument's `Display` implementation failed.
    #[error("argument formatting failed")]
    Format(#[from] std::fmt::Error),
}

#[derive(Debug, Error)]
pub enum PrintError {
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template error: {0}")]
    Template(#[from] TemplateError),

    #[error("Gutter error: {0}")]
    Gutter(#[from] GutterError),
}

pub type Result<T> = std::result::Result<T, PrintError>;
