use thiserror::Error;

use crate::lexer::Radix;
use crate::syntax::Span;

/// Lexer error with the location of the offending text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    #[error("unknown symbol '{0}'")]
    UnknownSymbol(String),

    #[error("digit '{digit}' is not valid in a {radix} number")]
    InvalidDigit { digit: char, radix: Radix },

    #[error("number prefix '{prefix}' is not followed by any digit")]
    EmptyNumeral { prefix: String },
}

impl LexError {
    pub fn new(kind: LexErrorKind, span: Span) -> Self {
        Self { kind, span }
    }
}
