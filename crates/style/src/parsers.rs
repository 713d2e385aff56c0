//! Low-level nom parser functions for CSS-like style values.
//!
//! This module provides composable parser functions for the
//! pattern-constrained string formats in the element schema: dimension
//! values (`"12px"`, `"100%"`) and url references (`"url('bg.png')"`).
//! Keyword sets (text-align, background-repeat, position) get plain
//! match-based parsers.

use crate::background::{BackgroundRepeat, ImageUrl};
use crate::dimension::{Dimension, Unit};
use crate::position::Position;
use crate::text::TextAlign;
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{tag, take_until, take_while_m_n};
use nom::character::complete::char;
use nom::combinator::{map, map_res, opt, recognize};
use nom::sequence::{delimited, pair, tuple};
use thiserror::Error;

/// Errors that can occur during style value parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

// --- Helper Parsers ---

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize(pair(
            opt(alt((char('+'), char('-')))),
            alt((
                recognize(tuple((
                    take_while_m_n(1, 10, |c: char| c.is_ascii_digit()),
                    opt(tuple((
                        char('.'),
                        take_while_m_n(1, 10, |c: char| c.is_ascii_digit()),
                    ))),
                ))),
                recognize(tuple((
                    char('.'),
                    take_while_m_n(1, 10, |c: char| c.is_ascii_digit()),
                ))),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )(input)
}

fn parse_unit(input: &str) -> IResult<&str, Unit> {
    alt((
        map(tag("px"), |_| Unit::Px),
        map(tag("rem"), |_| Unit::Rem),
        map(tag("%"), |_| Unit::Percent),
    ))(input)
}

// --- Dimension & Url Parsers ---

/// Parses a dimension value: a number immediately followed by a unit
/// suffix (e.g. "0px", "1.5rem", "100%"). Bare numbers are rejected.
pub fn parse_dimension(input: &str) -> IResult<&str, Dimension> {
    map(pair(parse_f32, parse_unit), |(value, unit)| Dimension {
        value,
        unit,
    })(input)
}

/// Parses a `url('...')` or `url(...)` reference.
pub fn parse_url(input: &str) -> IResult<&str, ImageUrl> {
    delimited(
        tag("url("),
        alt((
            map(
                delimited(char('\''), take_until("'"), char('\'')),
                |target: &str| ImageUrl::new(target),
            ),
            map(take_until(")"), |target: &str| ImageUrl::unquoted(target)),
        )),
        char(')'),
    )(input)
}

/// Helper to run a nom parser and convert its result to a `Result<T, StyleParseError>`.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Fn(&'a str) -> IResult<&'a str, T>,
{
    match parser(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(StyleParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

// --- High-level Parse Functions ---

/// Parses a text-align keyword.
pub fn parse_text_align(s: &str) -> Result<TextAlign, StyleParseError> {
    match s.to_lowercase().as_str() {
        "left" => Ok(TextAlign::Left),
        "center" => Ok(TextAlign::Center),
        "right" => Ok(TextAlign::Right),
        _ => Err(StyleParseError::InvalidValue {
            property: "text-align".to_string(),
            value: s.to_string(),
        }),
    }
}

/// Parses a background-repeat keyword.
pub fn parse_background_repeat(s: &str) -> Result<BackgroundRepeat, StyleParseError> {
    match s.to_lowercase().as_str() {
        "no-repeat" => Ok(BackgroundRepeat::NoRepeat),
        "repeat" => Ok(BackgroundRepeat::Repeat),
        "repeat-x" => Ok(BackgroundRepeat::RepeatX),
        "repeat-y" => Ok(BackgroundRepeat::RepeatY),
        _ => Err(StyleParseError::InvalidValue {
            property: "background-repeat".to_string(),
            value: s.to_string(),
        }),
    }
}

/// Parses a position keyword.
pub fn parse_position(s: &str) -> Result<Position, StyleParseError> {
    match s.to_lowercase().as_str() {
        "fixed" => Ok(Position::Fixed),
        _ => Err(StyleParseError::InvalidValue {
            property: "position".to_string(),
            value: s.to_string(),
        }),
    }
}
