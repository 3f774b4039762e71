use tracing::trace;

use crate::api::ParserOptions;
use crate::parser::{ParseError, ParseErrorKind, Token, TokenKind};
use crate::syntax::Span;

/// Validates the classified token sequence.
///
/// Parenthesis balance and nesting depth are checked over the whole
/// sequence first, so an unbalanced input reports the offending
/// parenthesis. A second pass then checks that:
/// - every token may follow the previous one,
/// - commas only separate arguments of a function call,
/// - the expression does not end on an operator.
pub fn check_syntax(
    source: &str,
    tokens: &[Token<'_>],
    options: &ParserOptions,
) -> Result<(), ParseError> {
    let Some(last) = tokens.last() else {
        return Err(ParseError::new(
            ParseErrorKind::Empty,
            Span::new(0, source.len()),
        ));
    };

    check_parentheses(tokens, options.max_depth)?;

    // For each open parenthesis, the function it calls, if any.
    let mut groups: Vec<Option<&str>> = Vec::new();

    for (i, token) in tokens.iter().enumerate() {
        let prev = i.checked_sub(1).map(|p| &tokens[p].kind);
        let before_prev = i.checked_sub(2).map(|p| &tokens[p].kind);

        match &token.kind {
            TokenKind::LParen => {
                let function = match prev {
                    Some(TokenKind::Func(name)) => Some(*name),
                    _ => None,
                };
                groups.push(function);
            }
            TokenKind::RParen => {
                groups.pop();
            }
            TokenKind::Comma => {
                let in_call = groups.last().is_some_and(Option::is_some);
                if !in_call {
                    let function = groups.iter().rev().find_map(|function| *function);
                    return Err(ParseError::new(
                        ParseErrorKind::MisplacedComma {
                            function: function.map(Into::into),
                        },
                        token.span.clone(),
                    ));
                }
            }
            _ => {}
        }

        if !may_follow(prev, before_prev, &token.kind) {
            trace!(token = %token, "token not allowed here");
            return Err(ParseError::unexpected(source, &token.span));
        }
    }

    if !matches!(
        last.kind,
        TokenKind::Num(_) | TokenKind::Var(_) | TokenKind::RParen
    ) {
        return Err(ParseError::unexpected(source, &last.span));
    }

    Ok(())
}

/// Reports the first `)` without an opening match, the first `(` nested
/// deeper than `max_depth`, or else the innermost `(` left open.
fn check_parentheses(tokens: &[Token<'_>], max_depth: usize) -> Result<(), ParseError> {
    let mut open: Vec<&Span> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::LParen => {
                open.push(&token.span);
                if open.len() > max_depth {
                    return Err(ParseError::new(
                        ParseErrorKind::MaxDepthExceeded { max_depth },
                        token.span.clone(),
                    ));
                }
            }
            TokenKind::RParen => {
                if open.pop().is_none() {
                    return Err(ParseError::new(
                        ParseErrorKind::MismatchedParen { paren: ')' },
                        token.span.clone(),
                    ));
                }
            }
            _ => {}
        }
    }

    match open.pop() {
        Some(unclosed) => Err(ParseError::new(
            ParseErrorKind::MismatchedParen { paren: '(' },
            unclosed.clone(),
        )),
        None => Ok(()),
    }
}

/// Whether `current` may come right after `prev`. `before_prev` is only
/// looked at to allow the empty argument list of a call.
fn may_follow(
    prev: Option<&TokenKind<'_>>,
    before_prev: Option<&TokenKind<'_>>,
    current: &TokenKind<'_>,
) -> bool {
    let starts_operand = current.is_operand()
        || current.is_unary()
        || matches!(current, TokenKind::LParen | TokenKind::Func(_));

    match prev {
        None => starts_operand,
        Some(TokenKind::Num(_) | TokenKind::Var(_) | TokenKind::RParen) => {
            current.is_binary() || matches!(current, TokenKind::RParen | TokenKind::Comma)
        }
        Some(TokenKind::LParen) => {
            starts_operand
                || (matches!(current, TokenKind::RParen)
                    && matches!(before_prev, Some(TokenKind::Func(_))))
        }
        Some(TokenKind::Func(_)) => matches!(current, TokenKind::LParen),
        Some(_) => starts_operand,
    }
}
