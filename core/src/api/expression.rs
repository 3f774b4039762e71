//! Parsed expressions.

use core::fmt;

use super::{Error, ParserOptions};
use crate::evaluator;
use crate::number::Number;
use crate::parser::{self, Token};

/// An expression that passed lexing and syntax checks, kept in both infix
/// and postfix order.
///
/// Borrows from its source text.
///
/// # Example
///
/// ```
/// use abacus_core::api::{Expression, ParserOptions};
///
/// let expr = Expression::compile("-2 ^ 2", &ParserOptions::default()).unwrap();
/// assert_eq!(expr.postfix_string(), "2 2 ^ neg");
/// assert_eq!(expr.run().unwrap().to_i64(), Some(-4));
/// ```
#[derive(Debug, Clone)]
pub struct Expression<'a> {
    source: &'a str,
    infix: Vec<Token<'a>>,
    postfix: Vec<Token<'a>>,
}

impl<'a> Expression<'a> {
    pub fn compile(source: &'a str, options: &ParserOptions) -> Result<Self, Error> {
        let infix = parser::parse_infix(source, options)?;
        let postfix = parser::shunting_yard(infix.clone());
        Ok(Self {
            source,
            infix,
            postfix,
        })
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Classified tokens in source order.
    pub fn infix(&self) -> &[Token<'a>] {
        &self.infix
    }

    pub fn postfix(&self) -> &[Token<'a>] {
        &self.postfix
    }

    pub fn infix_string(&self) -> String {
        join(&self.infix)
    }

    pub fn postfix_string(&self) -> String {
        join(&self.postfix)
    }

    pub fn run(&self) -> Result<Number, Error> {
        Ok(evaluator::eval(&self.postfix)?)
    }
}

impl fmt::Display for Expression<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

fn join(tokens: &[Token<'_>]) -> String {
    tokens
        .iter()
        .map(|token| token.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
