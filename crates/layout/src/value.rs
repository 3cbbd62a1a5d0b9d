//! Classification of raw attribute values.
//!
//! Every attribute read from a document is classified exactly once, before any
//! merging happens, into either a literal value or a relative adjustment such
//! as `+= 10` or `-=2.5`.

use deckle_types::AttributeValue;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::multispace0;
use nom::combinator::{all_consuming, map};
use nom::number::complete::double;
use nom::sequence::{delimited, preceded};
use nom::{IResult, Parser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    Plus,
    Minus,
}

/// An increment or decrement applied to an inherited numeric value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Adjustment {
    pub sign: Sign,
    pub magnitude: f64,
}

impl Adjustment {
    pub fn apply(&self, base: f64) -> f64 {
        match self.sign {
            Sign::Plus => base + self.magnitude,
            Sign::Minus => base - self.magnitude,
        }
    }
}

/// An attribute value as written in a layout document.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Literal(AttributeValue),
    Relative(Adjustment),
}

impl RawValue {
    /// Classifies a string attribute.
    ///
    /// Returns `Err` with a description when the string starts like an
    /// adjustment but is not a well-formed one, e.g. `"+=wide"`.
    pub fn from_text(text: &str) -> Result<Self, String> {
        if !looks_relative(text) {
            return Ok(RawValue::Literal(AttributeValue::Text(text.to_string())));
        }
        parse_adjustment(text)
            .map(RawValue::Relative)
            .ok_or_else(|| format!("'{}' is not a valid relative adjustment", text))
    }

    pub fn is_relative(&self) -> bool {
        matches!(self, RawValue::Relative(_))
    }
}

impl From<AttributeValue> for RawValue {
    fn from(value: AttributeValue) -> Self {
        RawValue::Literal(value)
    }
}

fn looks_relative(text: &str) -> bool {
    let trimmed = text.trim_start();
    trimmed.starts_with("+=") || trimmed.starts_with("-=")
}

fn sign(input: &str) -> IResult<&str, Sign> {
    alt((map(tag("+="), |_| Sign::Plus), map(tag("-="), |_| Sign::Minus))).parse(input)
}

fn adjustment(input: &str) -> IResult<&str, Adjustment> {
    map(
        (preceded(multispace0, sign), delimited(multispace0, double, multispace0)),
        |(sign, magnitude)| Adjustment { sign, magnitude },
    )
    .parse(input)
}

/// Parses `^\s*(\+=|-=)\s*<number>\s*$`.
pub fn parse_adjustment(input: &str) -> Option<Adjustment> {
    all_consuming(adjustment)
        .parse(input)
        .ok()
        .map(|(_, adj)| adj)
        .filter(|adj| adj.magnitude.is_finite())
}
