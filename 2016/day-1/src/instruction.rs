use std::str::FromStr;

use chumsky::prelude::*;

use crate::error::RouteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Right,
    Left,
}

/// One step of the recruiting document: turn, then walk `length` blocks.
///
/// `length` is never zero; parsing rejects `R0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub turn: Turn,
    pub length: u32,
}

impl Instruction {
    pub fn right(length: u32) -> Self {
        Self {
            turn: Turn::Right,
            length,
        }
    }

    pub fn left(length: u32) -> Self {
        Self {
            turn: Turn::Left,
            length,
        }
    }
}

impl FromStr for Instruction {
    type Err = RouteError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        parse_with(instruction(), token)
    }
}

fn turn<'a>() -> impl Parser<'a, &'a str, Turn, extra::Err<Rich<'a, char>>> {
    choice((just('R').to(Turn::Right), just('L').to(Turn::Left)))
}

/// Block count after the turn letter. Leading zeros are fine, zero blocks is not.
fn length<'a>() -> impl Parser<'a, &'a str, u32, extra::Err<Rich<'a, char>>> {
    text::digits(10)
        .to_slice()
        .try_map(|digits: &str, span| match digits.parse::<u32>() {
            Ok(0) => Err(Rich::custom(span, "length must be at least 1 block")),
            Ok(length) => Ok(length),
            Err(err) => Err(Rich::custom(
                span,
                format!("`{digits}` is not a valid block count: {err}"),
            )),
        })
}

/// A single `R8`-shaped token.
pub(crate) fn instruction<'a>() -> impl Parser<'a, &'a str, Instruction, extra::Err<Rich<'a, char>>>
{
    turn()
        .then(length())
        .map(|(turn, length)| Instruction { turn, length })
}

/// A whole document line: `R2, L3, R10`. Whitespace around it (trailing newline
/// included) is ignored.
pub(crate) fn route<'a>() -> impl Parser<'a, &'a str, Vec<Instruction>, extra::Err<Rich<'a, char>>>
{
    instruction()
        .separated_by(just(',').padded())
        .collect::<Vec<_>>()
        .padded()
}

/// Runs `parser` over all of `src`, turning the first parse error into a
/// diagnostic that points at the offending text.
pub(crate) fn parse_with<'a, T>(
    parser: impl Parser<'a, &'a str, T, extra::Err<Rich<'a, char>>>,
    src: &'a str,
) -> Result<T, RouteError> {
    parser.parse(src).into_result().map_err(|errors| {
        let (span, reason) = errors
            .first()
            .map(|error| (error.span().start..error.span().end, error.to_string()))
            .unwrap_or_else(|| (0..src.len(), String::from("unrecognised instruction")));

        RouteError::InvalidInstructionFormat {
            src: src.to_string(),
            span: span.into(),
            reason,
        }
    })
}
