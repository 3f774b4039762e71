//! Arbitrary-precision integer arithmetic and a small expression evaluator.
//!
//! - [`big_int`]: sign-magnitude integers over a growable base-256 buffer.
//! - [`number`]: machine integers that promote to big ones on overflow.
//! - [`lexer`], [`parser`], [`evaluator`]: text to postfix to [`Number`].
//! - [`api`]: the one-call [`evaluate`](api::evaluate) entry point and the
//!   unified [`Error`](api::Error).

pub mod api;
pub mod big_int;
pub mod evaluator;
pub mod lexer;
pub mod number;
pub mod parser;
pub mod syntax;


pub use api::{Error, EvaluatorOptions, ParserOptions, evaluate};
pub use big_int::BigInt;
pub use number::Number;
