#![warn(clippy::uninlined_format_args)]

//! Inline balance notation: `alice +200, marc -100, henri -100`.

use nom::{
    IResult, Parser,
    bytes::complete::take_while1,
    character::complete::{char, digit1, multispace0, multispace1, one_of},
    combinator::{map_res, opt, recognize},
};
use rust_decimal::Decimal;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("No balances given.")]
    Empty,
    #[error("Unexpected end of input at offset {offset}.")]
    UnexpectedEnd { offset: usize },
    #[error("Syntax error at offset {offset}: unexpected '{fragment}'.")]
    Syntax { offset: usize, fragment: String },
}

fn name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != ',').parse(input)
}

// [+-]digits[.digits]
fn amount(input: &str) -> IResult<&str, Decimal> {
    map_res(
        recognize((opt(one_of("+-")), digit1, opt((char('.'), digit1)))),
        |text: &str| Decimal::from_str(text.strip_prefix('+').unwrap_or(text)),
    )
    .parse(input)
}

// {name} {amount}
fn entry(input: &str) -> IResult<&str, (&str, Decimal)> {
    (multispace0, name, multispace1, amount, multispace0)
        .map(|(_, name, _, amount, _)| (name, amount))
        .parse(input)
}

fn separator(input: &str) -> IResult<&str, char> {
    (char(','), multispace0).map(|(sep, _)| sep).parse(input)
}

/// Parses comma-separated `name amount` pairs.
///
/// Names are returned in input order; a name given twice appears twice.
pub fn parse_balances(input: &str) -> Result<Vec<(&str, Decimal)>, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut entries = Vec::new();
    let mut rest = input;
    loop {
        let (after, parsed) = entry(rest).map_err(|err| match err {
            nom::Err::Error(err) | nom::Err::Failure(err) => unexpected(input, err.input),
            nom::Err::Incomplete(_) => ParseError::UnexpectedEnd {
                offset: input.len(),
            },
        })?;
        entries.push(parsed);

        if after.is_empty() {
            return Ok(entries);
        }
        match separator(after) {
            Ok((next, _)) => rest = next,
            Err(_) => return Err(unexpected(input, after)),
        }
    }
}

fn unexpected(input: &str, remaining: &str) -> ParseError {
    let offset = input.len() - remaining.len();
    let token_len = remaining
        .find(|c: char| c.is_whitespace() || c == ',')
        .unwrap_or(remaining.len());
    let fragment = match token_len {
        0 => remaining.chars().next().map(String::from),
        len => Some(remaining[..len].to_string()),
    };

    match fragment {
        Some(fragment) => ParseError::Syntax { offset, fragment },
        None => ParseError::UnexpectedEnd { offset },
    }
}
