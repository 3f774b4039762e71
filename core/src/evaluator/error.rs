//! Evaluation errors.
//!
//! Lexing and parsing already rejected malformed input, so what is left is
//! arithmetic that cannot be carried out and syntax that is recognized but
//! not evaluated (variables, functions, fractional numbers).

use thiserror::Error;

use crate::big_int::BigIntError;
use crate::number::ArithmeticError;
use crate::syntax::Span;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("unmanaged feature: {feature}")]
    Unsupported { feature: String, span: Span },

    #[error("{source}")]
    Arithmetic {
        source: ArithmeticError,
        span: Span,
    },

    #[error("invalid numeral: {source}")]
    Numeral { source: BigIntError, span: Span },

    /// The postfix sequence left the operand stack unbalanced.
    #[error("malformed expression")]
    Malformed { span: Span },
}

impl EvalError {
    pub fn span(&self) -> &Span {
        match self {
            EvalError::Unsupported { span, .. }
            | EvalError::Arithmetic { span, .. }
            | EvalError::Numeral { span, .. }
            | EvalError::Malformed { span } => span,
        }
    }
}
