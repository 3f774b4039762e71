use thiserror::Error;

use crate::syntax::Span;

/// Syntax error with the location of the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("empty expression")]
    Empty,

    #[error("mismatched parenthesis '{paren}'")]
    MismatchedParen { paren: char },

    #[error("unexpected token '{found}'")]
    UnexpectedToken { found: String },

    #[error("misplaced comma{}", in_function(.function))]
    MisplacedComma { function: Option<String> },

    #[error("parenthesis nesting depth exceeds maximum of {max_depth} levels")]
    MaxDepthExceeded { max_depth: usize },
}

fn in_function(function: &Option<String>) -> String {
    match function {
        Some(name) => format!(" in function '{}'", name),
        None => String::new(),
    }
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub(crate) fn unexpected(source: &str, span: &Span) -> Self {
        Self::new(
            ParseErrorKind::UnexpectedToken {
                found: source[span.0.clone()].into(),
            },
            span.clone(),
        )
    }
}
