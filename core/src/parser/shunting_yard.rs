use tracing::trace;

use crate::parser::{Token, TokenKind};

/// Reorders checked infix tokens to postfix.
///
/// Parentheses disappear from the output. A function name is emitted after
/// its arguments, once its closing parenthesis is reached. Prefix operators
/// are pushed without popping anything, so `2 ^ -3` keeps the `^` waiting
/// for its operand.
pub fn shunting_yard(infix: Vec<Token<'_>>) -> Vec<Token<'_>> {
    let mut output = Vec::with_capacity(infix.len());
    let mut stack: Vec<Token<'_>> = Vec::new();

    for token in infix {
        match token.kind {
            TokenKind::Num(_) | TokenKind::Var(_) => output.push(token),
            TokenKind::Func(_) | TokenKind::LParen => stack.push(token),
            TokenKind::Comma => {
                while stack.last().is_some_and(|top| top.kind != TokenKind::LParen) {
                    output.extend(stack.pop());
                }
            }
            TokenKind::RParen => {
                while let Some(top) = stack.pop() {
                    if top.kind == TokenKind::LParen {
                        break;
                    }
                    output.push(top);
                }
                if stack
                    .last()
                    .is_some_and(|top| matches!(top.kind, TokenKind::Func(_)))
                {
                    output.extend(stack.pop());
                }
            }
            _ if token.kind.is_unary() => stack.push(token),
            _ => {
                let precedence = token.kind.precedence().unwrap_or_default();
                let left_assoc = !token.kind.is_right_associative();
                let pops = |top: &Token<'_>| match top.kind.precedence() {
                    Some(top_precedence) => {
                        top_precedence > precedence
                            || (top_precedence == precedence && left_assoc)
                    }
                    None => false,
                };
                while stack.last().is_some_and(pops) {
                    output.extend(stack.pop());
                }
                stack.push(token);
            }
        }
    }

    while let Some(top) = stack.pop() {
        output.push(top);
    }

    trace!(
        postfix = %output.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(" "),
        "shunting yard"
    );
    output
}
