//! Public error types.
//!
//! Each stage keeps its own error type with a span. [`Error`] wraps them so
//! that callers of [`evaluate`](super::evaluate) deal with a single type, and
//! [`Error::to_diagnostic`] turns any of them into a renderable
//! [`Diagnostic`].

use thiserror::Error;

use crate::evaluator::EvalError;
use crate::lexer::{LexError, LexErrorKind};
use crate::number::ArithmeticError;
use crate::parser::{ParseError, ParseErrorKind};
use crate::syntax::Span;

/// Any error from lexing, parsing or evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    pub fn span(&self) -> &Span {
        match self {
            Error::Lex(err) => &err.span,
            Error::Parse(err) => &err.span,
            Error::Eval(err) => err.span(),
        }
    }

    /// Error code for documentation lookup.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Lex(err) => match err.kind {
                LexErrorKind::UnknownSymbol(_) => "L001",
                LexErrorKind::InvalidDigit { .. } => "L002",
                LexErrorKind::EmptyNumeral { .. } => "L003",
            },
            Error::Parse(err) => match err.kind {
                ParseErrorKind::Empty => "P001",
                ParseErrorKind::MismatchedParen { .. } => "P002",
                ParseErrorKind::UnexpectedToken { .. } => "P003",
                ParseErrorKind::MisplacedComma { .. } => "P004",
                ParseErrorKind::MaxDepthExceeded { .. } => "P005",
            },
            Error::Eval(err) => match err {
                EvalError::Unsupported { .. } => "E001",
                EvalError::Arithmetic {
                    source: ArithmeticError::NegativeExponent,
                    ..
                } => "E002",
                EvalError::Arithmetic {
                    source: ArithmeticError::ExponentTooLarge,
                    ..
                } => "E003",
                EvalError::Numeral { .. } => "E004",
                EvalError::Malformed { .. } => "E005",
                EvalError::Arithmetic {
                    source: ArithmeticError::PowerTooLarge,
                    ..
                } => "E006",
            },
        }
    }

    fn help(&self) -> Option<String> {
        let help = match self {
            Error::Lex(err) => match &err.kind {
                LexErrorKind::UnknownSymbol(_) => {
                    "only numbers, names, parentheses, commas and + - * ^ are allowed".into()
                }
                LexErrorKind::InvalidDigit { radix, .. } => {
                    format!("a {} number only takes digits below its base", radix)
                }
                LexErrorKind::EmptyNumeral { .. } => "write the digits right after the prefix".into(),
            },
            Error::Parse(err) => match &err.kind {
                ParseErrorKind::MismatchedParen { paren: '(' } => {
                    "this parenthesis is never closed".into()
                }
                ParseErrorKind::MismatchedParen { .. } => {
                    "this parenthesis has no matching '('".into()
                }
                ParseErrorKind::MisplacedComma { .. } => {
                    "commas only separate function arguments".into()
                }
                ParseErrorKind::MaxDepthExceeded { .. } => {
                    "simplify the expression to reduce nesting".into()
                }
                ParseErrorKind::Empty | ParseErrorKind::UnexpectedToken { .. } => return None,
            },
            Error::Eval(EvalError::Arithmetic {
                source: ArithmeticError::ExponentTooLarge,
                ..
            }) => "the exponent must fit in a 64-bit integer".into(),
            Error::Eval(EvalError::Arithmetic {
                source: ArithmeticError::PowerTooLarge,
                ..
            }) => "use a smaller exponent".into(),
            Error::Eval(_) => return None,
        };
        Some(help)
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic {
            message: self.to_string(),
            span: self.span().clone(),
            help: self.help(),
            code: Some(self.code().into()),
        }
    }
}

/// An error message with its source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Primary diagnostic message.
    pub message: String,

    /// Source location of the primary issue.
    pub span: Span,

    /// Optional help text suggesting how to fix the issue.
    pub help: Option<String>,

    /// Optional error code (e.g., "P002") for documentation lookup.
    pub code: Option<String>,
}

