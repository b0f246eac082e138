//! Placeholder substitution.
//!
//! Templates use a small subset of Rust's format syntax: `{}` takes the next
//! argument, `{N}` takes argument `N`, and `{{` / `}}` are literal braces.
//! Format specs (`{:>4}` and the like) are not supported.

use std::fmt::{Display, Write};

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{is_not, tag};
use nom::character::complete::{char, digit1};
use nom::combinator::{map, map_res, opt, value};
use nom::error::VerboseError;
use nom::sequence::delimited;

use crate::error::TemplateError;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Piece<'a> {
    Literal(&'a str),
    Brace(char),
    /// `{}` when `None`, `{N}` otherwise.
    Placeholder(Option<usize>),
}

type Res<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

fn piece(input: &str) -> Res<'_, Piece<'_>> {
    alt((
        value(Piece::Brace('{'), tag("{{")),
        value(Piece::Brace('}'), tag("}}")),
        map(
            delimited(
                char('{'),
                opt(map_res(digit1, str::parse::<usize>)),
                char('}'),
            ),
            Piece::Placeholder,
        ),
        map(is_not("{}"), Piece::Literal),
    ))(input)
}

/// Replace the placeholders in `template` with `args`.
///
/// ```
/// use printer::template::substitute;
///
/// let out = substitute("{} {{}} {1}", &[&"a", &'b']).unwrap();
/// assert_eq!(out, "a {} b");
/// ```
pub fn substitute(template: &str, args: &[&dyn Display]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut next = 0;

    while !rest.is_empty() {
        let (tail, found) =
            piece(rest).map_err(|_| TemplateError::UnmatchedBrace(template.len() - rest.len()))?;

        match found {
            Piece::Literal(text) => out.push_str(text),
            Piece::Brace(brace) => out.push(brace),
            Piece::Placeholder(index) => {
                let index = index.unwrap_or_else(|| {
                    next += 1;
                    next - 1
                });
                let arg = args.get(index).ok_or(TemplateError::MissingArgument {
                    index,
                    count: args.len(),
                })?;
                write!(out, "{arg}")?;
            }
        }
        rest = tail;
    }

    Ok(out)
}
