//! Postfix evaluator.
//!
//! Walks the postfix tokens once, keeping operands on a `Vec<Number>` stack.

mod error;

#[cfg(test)]
mod eval_test;

pub use error::EvalError;

use tracing::{debug, trace};

use crate::lexer::{Numeral, Radix};
use crate::number::Number;
use crate::parser::{Token, TokenKind};
use crate::syntax::Span;

/// Evaluates a postfix token sequence as produced by
/// [`parser::parse`](crate::parser::parse).
pub fn eval(postfix: &[Token<'_>]) -> Result<Number, EvalError> {
    let mut stack: Vec<Number> = Vec::new();

    for token in postfix {
        trace!(token = %token, depth = stack.len(), "eval");
        match &token.kind {
            TokenKind::Num(numeral) => stack.push(literal(numeral, &token.span)?),
            TokenKind::Var(name) => {
                return Err(unsupported(format!("variable '{}'", name), token));
            }
            TokenKind::Func(name) => {
                return Err(unsupported(format!("function '{}'", name), token));
            }
            TokenKind::Plus => {
                // Only checks that an operand is there.
                let value = pop(&mut stack, token)?;
                stack.push(value);
            }
            TokenKind::Minus => {
                let value = pop(&mut stack, token)?;
                stack.push(value.neg());
            }
            TokenKind::Add | TokenKind::Sub | TokenKind::Mul | TokenKind::Pow => {
                let rhs = pop(&mut stack, token)?;
                let lhs = pop(&mut stack, token)?;
                stack.push(binary(&token.kind, lhs, &rhs, &token.span)?);
            }
            TokenKind::LParen | TokenKind::RParen | TokenKind::Comma => {
                return Err(EvalError::Malformed {
                    span: token.span.clone(),
                });
            }
        }
    }

    let result = stack.pop();
    match (result, stack.is_empty()) {
        (Some(result), true) => {
            debug!(big = result.is_big(), "evaluated");
            Ok(result)
        }
        _ => Err(EvalError::Malformed {
            span: postfix.last().map(|t| t.span.clone()).unwrap_or_default(),
        }),
    }
}

fn literal(numeral: &Numeral<'_>, span: &Span) -> Result<Number, EvalError> {
    if numeral.fractional {
        return Err(EvalError::Unsupported {
            feature: "fractional numbers".into(),
            span: span.clone(),
        });
    }

    match numeral.radix {
        Radix::Unary => Ok(Number::from_u64(numeral.digits.len() as u64)),
        Radix::Positional(radix) => {
            Number::from_text(numeral.digits, radix).map_err(|source| EvalError::Numeral {
                source,
                span: span.clone(),
            })
        }
    }
}

fn binary(op: &TokenKind<'_>, lhs: Number, rhs: &Number, span: &Span) -> Result<Number, EvalError> {
    let result = match op {
        TokenKind::Add => lhs.add(rhs),
        TokenKind::Sub => lhs.sub(rhs),
        TokenKind::Mul => lhs.mul(rhs),
        TokenKind::Pow => lhs.pow(rhs).map_err(|source| EvalError::Arithmetic {
            source,
            span: span.clone(),
        })?,
        _ => return Err(EvalError::Malformed { span: span.clone() }),
    };
    Ok(result)
}

fn pop(stack: &mut Vec<Number>, token: &Token<'_>) -> Result<Number, EvalError> {
    stack.pop().ok_or_else(|| EvalError::Malformed {
        span: token.span.clone(),
    })
}

fn unsupported(feature: String, token: &Token<'_>) -> EvalError {
    EvalError::Unsupported {
        feature,
        span: token.span.clone(),
    }
}
