//! Lexer: source text to a flat list of spanned lexemes.
//!
//! Built on `logos`. Numerals are validated against their radix here so that
//! later stages only ever see well-formed digits.

mod error;
mod numeral;


pub use error::{LexError, LexErrorKind};
pub use numeral::{Numeral, Radix};

use logos::Logos;
use tracing::debug;

use crate::syntax::Span;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[token(",")]
    Comma,

    #[token("+")]
    Plus,

    #[token("-")]
    Minus,

    #[token("*")]
    Star,

    #[token("^")]
    Caret,

    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Name,

    // Letters are allowed so that `0xff` and `12ab` come out as one lexeme;
    // the latter is then rejected with the offending digit.
    #[regex(r"[0-9][0-9A-Za-z]*(\.[0-9A-Za-z]*)?")]
    Numeral,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexemeKind<'a> {
    LParen,
    RParen,
    Comma,
    Plus,
    Minus,
    Star,
    Caret,
    Name(&'a str),
    Numeral(Numeral<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme<'a> {
    pub kind: LexemeKind<'a>,
    pub span: Span,
}

pub fn tokenize(source: &str) -> Result<Vec<Lexeme<'_>>, LexError> {
    let mut lexemes = Vec::new();

    for (token, range) in RawToken::lexer(source).spanned() {
        let text = &source[range.clone()];
        let span = Span(range);

        let kind = match token {
            Ok(RawToken::LParen) => LexemeKind::LParen,
            Ok(RawToken::RParen) => LexemeKind::RParen,
            Ok(RawToken::Comma) => LexemeKind::Comma,
            Ok(RawToken::Plus) => LexemeKind::Plus,
            Ok(RawToken::Minus) => LexemeKind::Minus,
            Ok(RawToken::Star) => LexemeKind::Star,
            Ok(RawToken::Caret) => LexemeKind::Caret,
            Ok(RawToken::Name) => LexemeKind::Name(text),
            Ok(RawToken::Numeral) => LexemeKind::Numeral(Numeral::parse(text, &span)?),
            Err(()) => {
                return Err(LexError::new(
                    LexErrorKind::UnknownSymbol(text.into()),
                    span,
                ));
            }
        };
        lexemes.push(Lexeme { kind, span });
    }

    debug!(count = lexemes.len(), "lexed");
    Ok(lexemes)
}

/// Count of parentheses still open at the end of `source`.
///
/// Returns `None` when the text cannot be lexed. More closing than opening
/// parentheses counts as zero.
pub fn paren_depth(source: &str) -> Option<usize> {
    let mut depth: isize = 0;

    for token in RawToken::lexer(source) {
        match token {
            Ok(RawToken::LParen) => depth += 1,
            Ok(RawToken::RParen) => depth -= 1,
            Ok(_) => {}
            Err(_) => return None,
        }
    }

    Some(depth.max(0) as usize)
}
