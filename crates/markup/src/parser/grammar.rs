//! nom rules for the markup grammar.

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_till, take_till1};
use nom::character::complete::{alpha1, char, multispace0};
use nom::combinator::{cut, map, opt, verify};
use nom::error::{VerboseError, VerboseErrorKind, context};
use nom::multi::many0;
use nom::sequence::{delimited, pair, preceded, terminated};

use crate::ast::Ast;

/// Deepest element nesting accepted. Deeper input is a parse error so that
/// neither the parser nor the recursive evaluator can exhaust the stack.
pub const MAX_DEPTH: usize = 128;

type Res<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

/// CONTENT <- (ELEMENT / TEXT)*
pub(super) fn content(input: &str, depth: usize) -> Res<'_, Ast> {
    map(
        many0(alt((move |i| element(i, depth), text_run))),
        Ast::content,
    )(input)
}

/// TEXT <- [^<]+
fn text_run(input: &str) -> Res<'_, Ast> {
    map(take_till1(|c: char| c == '<'), Ast::text)(input)
}

/// ELEMENT <- START_TAG CONTENT END_TAG
///
/// Once `<name` has been seen the element is committed: any later mismatch
/// is a hard failure rather than a fallback to text.
fn element(input: &str, depth: usize) -> Res<'_, Ast> {
    let (rest, name) = preceded(pair(char('<'), multispace0), alpha1)(input)?;

    if depth >= MAX_DEPTH {
        return Err(nom::Err::Failure(VerboseError {
            errors: vec![(input, VerboseErrorKind::Context("nesting too deep"))],
        }));
    }

    let (rest, argument) = cut(context(
        "`>` closing the start tag",
        terminated(
            preceded(multispace0, opt(argument)),
            pair(multispace0, char('>')),
        ),
    ))(rest)?;

    let (rest, body) = content(rest, depth + 1)?;

    let (rest, _) = cut(context("matching closing tag", |i| end_tag(i, name)))(rest)?;

    Ok((rest, Ast::element(name, argument, body)))
}

/// ARG <- '=' [^>]*
fn argument(input: &str) -> Res<'_, &str> {
    map(preceded(char('='), take_till(|c: char| c == '>')), str::trim)(input)
}

/// END_TAG <- '</' _ TAG_NAME _ '>', where TAG_NAME must equal `name`.
fn end_tag<'a>(input: &'a str, name: &str) -> Res<'a, &'a str> {
    delimited(
        pair(tag("</"), multispace0),
        verify(alpha1, |found: &str| found == name),
        pair(multispace0, char('>')),
    )(input)
}
