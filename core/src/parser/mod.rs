//! Parser: lexemes to a postfix token sequence.
//!
//! Three passes run in order:
//!
//! 1. [`classify`] decides what each lexeme means in context (binary or
//!    unary sign, variable or function name).
//! 2. [`check_syntax`] rejects malformed token orders, unbalanced
//!    parentheses, stray commas and too deep nesting.
//! 3. [`shunting_yard`] reorders the infix tokens to postfix.

mod check;
mod error;
mod shunting_yard;


pub use check::check_syntax;
pub use error::{ParseError, ParseErrorKind};
pub use shunting_yard::shunting_yard;

use core::fmt;

use tracing::debug;

use crate::api::ParserOptions;
use crate::api::Error;
use crate::lexer::{self, Lexeme, LexemeKind, Numeral, Radix};
use crate::syntax::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind<'a> {
    Num(Numeral<'a>),
    Var(&'a str),
    Func(&'a str),
    Add,
    Sub,
    Mul,
    Pow,
    /// Unary `+`.
    Plus,
    /// Unary `-`.
    Minus,
    LParen,
    RParen,
    Comma,
}

impl TokenKind<'_> {
    pub fn is_operand(&self) -> bool {
        matches!(self, TokenKind::Num(_) | TokenKind::Var(_))
    }

    pub fn is_unary(&self) -> bool {
        matches!(self, TokenKind::Plus | TokenKind::Minus)
    }

    pub fn is_binary(&self) -> bool {
        matches!(
            self,
            TokenKind::Add | TokenKind::Sub | TokenKind::Mul | TokenKind::Pow
        )
    }

    /// Binding strength of operators; `None` for everything else.
    pub fn precedence(&self) -> Option<u8> {
        match self {
            TokenKind::Pow => Some(15),
            TokenKind::Plus | TokenKind::Minus => Some(14),
            TokenKind::Mul => Some(13),
            TokenKind::Add | TokenKind::Sub => Some(12),
            _ => None,
        }
    }

    pub fn is_right_associative(&self) -> bool {
        matches!(self, TokenKind::Pow | TokenKind::Plus | TokenKind::Minus)
    }
}

impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Num(numeral) => {
                match numeral.radix {
                    Radix::Unary => write!(f, "1x")?,
                    Radix::Positional(10) => {}
                    Radix::Positional(16) => write!(f, "0x")?,
                    Radix::Positional(radix) => write!(f, "{}x", radix)?,
                }
                write!(f, "{}", numeral.digits)?;
                if numeral.fractional {
                    write!(f, ".")?;
                }
                Ok(())
            }
            TokenKind::Var(name) => write!(f, "{}", name),
            TokenKind::Func(name) => write!(f, "{}()", name),
            TokenKind::Add => write!(f, "+"),
            TokenKind::Sub => write!(f, "-"),
            TokenKind::Mul => write!(f, "*"),
            TokenKind::Pow => write!(f, "^"),
            TokenKind::Plus => write!(f, "pos"),
            TokenKind::Minus => write!(f, "neg"),
            TokenKind::LParen => write!(f, "("),
            TokenKind::RParen => write!(f, ")"),
            TokenKind::Comma => write!(f, ","),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub span: Span,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}

/// Gives each lexeme its meaning in context.
///
/// `+` and `-` are binary only right after an operand or a closing
/// parenthesis. A name directly followed by `(` is a function name.
pub fn classify<'a>(lexemes: Vec<Lexeme<'a>>) -> Vec<Token<'a>> {
    let mut tokens: Vec<Token<'a>> = Vec::with_capacity(lexemes.len());
    let mut lexemes = lexemes.into_iter().peekable();

    while let Some(Lexeme { kind, span }) = lexemes.next() {
        let after_operand = matches!(
            tokens.last().map(|t| &t.kind),
            Some(TokenKind::Num(_) | TokenKind::Var(_) | TokenKind::RParen)
        );

        let kind = match kind {
            LexemeKind::Numeral(numeral) => TokenKind::Num(numeral),
            LexemeKind::Name(name) => {
                let is_call = matches!(
                    lexemes.peek(),
                    Some(Lexeme {
                        kind: LexemeKind::LParen,
                        ..
                    })
                );
                if is_call {
                    TokenKind::Func(name)
                } else {
                    TokenKind::Var(name)
                }
            }
            LexemeKind::Plus if after_operand => TokenKind::Add,
            LexemeKind::Plus => TokenKind::Plus,
            LexemeKind::Minus if after_operand => TokenKind::Sub,
            LexemeKind::Minus => TokenKind::Minus,
            LexemeKind::Star => TokenKind::Mul,
            LexemeKind::Caret => TokenKind::Pow,
            LexemeKind::LParen => TokenKind::LParen,
            LexemeKind::RParen => TokenKind::RParen,
            LexemeKind::Comma => TokenKind::Comma,
        };
        tokens.push(Token { kind, span });
    }

    tokens
}

/// Lexes, classifies and checks `source`, returning the infix tokens.
pub fn parse_infix<'a>(source: &'a str, options: &ParserOptions) -> Result<Vec<Token<'a>>, Error> {
    let tokens = classify(lexer::tokenize(source)?);
    check_syntax(source, &tokens, options)?;
    Ok(tokens)
}

/// Runs every stage and returns the postfix tokens ready for evaluation.
pub fn parse<'a>(source: &'a str, options: &ParserOptions) -> Result<Vec<Token<'a>>, Error> {
    let infix = parse_infix(source, options)?;
    let postfix = shunting_yard(infix);
    debug!(count = postfix.len(), "parsed to postfix");
    Ok(postfix)
}
