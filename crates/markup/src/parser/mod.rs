//! Grammar engine for markup.
//!
//! - [`parse`]: turn markup text into an [`Ast`]
//! - [`optimize`]: merge adjacent text runs and collapse single-child nodes
//!
//! ## Grammar
//!
//! ```text
//! CONTENT   <- (ELEMENT / TEXT)*
//! ELEMENT   <- START_TAG CONTENT END_TAG
//! START_TAG <- '<' _ TAG_NAME _ ('=' ARG)? _ '>'
//! END_TAG   <- '</' _ TAG_NAME _ '>'        (same name as START_TAG)
//! TAG_NAME  <- [a-zA-Z]+
//! ARG       <- [^>]*
//! TEXT      <- [^<]+
//! _         <- [ \t\r\n]*
//! ```
//!
//! The whole input must match `CONTENT`.

mod grammar;

use nom::combinator::all_consuming;
use nom::error::{VerboseError, VerboseErrorKind};

use crate::ast::{Ast, NodeKind};
use crate::error::MarkupError;

pub use grammar::MAX_DEPTH;

/// Parse markup text into an AST.
///
/// # Examples
///
/// ```
/// use markup::parser::parse;
/// use markup::NodeKind;
///
/// let ast = parse("<b>Hello</b> World").unwrap();
/// assert_eq!(ast.kind, NodeKind::Content);
/// assert_eq!(ast.nodes.len(), 2);
///
/// assert!(parse("<b>Hello</i>").is_err());
/// ```
pub fn parse(text: &str) -> Result<Ast, MarkupError> {
    match all_consuming(|i| grammar::content(i, 0))(text) {
        Ok((_, ast)) => Ok(ast),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(convert_error(text, e)),
        Err(nom::Err::Incomplete(_)) => Err(error_at(text, text.len(), "unexpected end of input")),
    }
}

/// Simplify a parsed tree without changing what it renders to.
///
/// Adjacent text runs are merged, content nodes with a single child are
/// replaced by that child, and start tags without an argument collapse to
/// their tag name.
pub fn optimize(ast: Ast) -> Ast {
    let mut nodes: Vec<Ast> = Vec::with_capacity(ast.nodes.len());
    for child in ast.nodes.into_iter().map(optimize) {
        if ast.kind == NodeKind::Content && child.kind == NodeKind::Text {
            if let Some(last) = nodes.last_mut().filter(|last| last.kind == NodeKind::Text) {
                last.token.push_str(&child.token);
                continue;
            }
        }
        nodes.push(child);
    }

    let collapses = matches!(ast.kind, NodeKind::Content | NodeKind::StartTag) && nodes.len() == 1;
    if collapses {
        return nodes.remove(0);
    }

    Ast {
        kind: ast.kind,
        token: ast.token,
        nodes,
    }
}

/// Report the innermost context (the construct that was being matched), or
/// the raw failure position when there is none.
fn convert_error(source: &str, error: VerboseError<&str>) -> MarkupError {
    let context = error.errors.iter().find_map(|(at, kind)| match kind {
        VerboseErrorKind::Context(context) => Some((*at, (*context).to_string())),
        _ => None,
    });

    let (at, message) = match context {
        Some(found) => found,
        None => match error.errors.first() {
            Some((at, _)) => (*at, describe(at)),
            None => (source, "invalid markup".to_string()),
        },
    };

    error_at(source, source.len() - at.len(), &message)
}

/// Explain why parsing stopped at `rest` when no context was recorded.
fn describe(rest: &str) -> String {
    if rest.starts_with("</") {
        "closing tag without matching opening tag".to_string()
    } else if rest.starts_with('<') {
        "expected a tag name after `<`".to_string()
    } else {
        "unexpected input".to_string()
    }
}

fn error_at(source: &str, offset: usize, message: &str) -> MarkupError {
    let consumed = &source[..offset];
    let line = consumed.matches('\n').count() + 1;
    let column = consumed
        .rsplit('\n')
        .next()
        .map_or(0, |last| last.chars().count())
        + 1;

    MarkupError::Parse {
        line,
        column,
        message: message.to_string(),
    }
}
