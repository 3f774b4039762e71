//! Numeral literals and their radix prefixes.
//!
//! | literal    | radix          |
//! |------------|----------------|
//! | `42`       | 10             |
//! | `0x2a`     | 16             |
//! | `1x000`    | unary tally: 3 |
//! | `5x132`    | 5 (any of 2-9) |
//!
//! A fractional part is accepted here and rejected by the evaluator.

use core::fmt;

use crate::lexer::{LexError, LexErrorKind};
use crate::syntax::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Radix {
    /// Counts the `0` digits.
    Unary,
    Positional(u32),
}

impl Radix {
    fn from_prefix(prefix: u8) -> Self {
        match prefix {
            b'0' => Radix::Positional(16),
            b'1' => Radix::Unary,
            digit => Radix::Positional(u32::from(digit - b'0')),
        }
    }

    pub fn accepts(self, c: char) -> bool {
        match self {
            Radix::Unary => c == '0',
            Radix::Positional(radix) => c.is_digit(radix),
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radix::Unary => write!(f, "unary"),
            Radix::Positional(radix) => write!(f, "base {}", radix),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral<'a> {
    /// Integer digits, prefix stripped.
    pub digits: &'a str,
    pub radix: Radix,
    pub fractional: bool,
}

impl<'a> Numeral<'a> {
    /// Splits a numeral lexeme into prefix, integer and fractional parts and
    /// checks every digit against the radix.
    pub fn parse(text: &'a str, span: &Span) -> Result<Self, LexError> {
        let (radix, body_start) = match text.as_bytes() {
            [prefix @ b'0'..=b'9', b'x', ..] => (Radix::from_prefix(*prefix), 2),
            _ => (Radix::Positional(10), 0),
        };

        let body = &text[body_start..];
        let (digits, fraction) = match body.split_once('.') {
            Some((digits, fraction)) => (digits, Some(fraction)),
            None => (body, None),
        };

        if digits.is_empty() {
            return Err(LexError::new(
                LexErrorKind::EmptyNumeral {
                    prefix: text[..body_start].into(),
                },
                span.clone(),
            ));
        }

        let offset = span.start() + body_start;
        for (i, c) in body.char_indices() {
            if c == '.' || radix.accepts(c) {
                continue;
            }
            return Err(LexError::new(
                LexErrorKind::InvalidDigit { digit: c, radix },
                Span::new(offset + i, offset + i + c.len_utf8()),
            ));
        }

        Ok(Self {
            digits,
            radix,
            fractional: fraction.is_some(),
        })
    }
}
