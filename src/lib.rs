//! Abacus - arbitrary-precision integer expressions
//!
//! # Overview
//!
//! Abacus evaluates integer expressions with `+`, `-`, `*`, `^` and
//! parentheses. Numbers stay machine integers while they fit and switch to
//! arbitrary precision on overflow, so results are always exact.
//!
//! Numerals may carry a radix prefix: `0x` for hexadecimal, `2x` to `9x` for
//! bases 2 to 9, and `1x` for unary tallies (`1x000` is 3).
//!
//! # Quick Start
//!
//! ```
//! use abacus::{EvaluatorOptions, evaluate};
//!
//! let result = evaluate("2 ^ 64 + 0xff", &EvaluatorOptions::default()).unwrap();
//! assert!(result.is_big());
//! assert_eq!(result.to_string(), "BIG 0x100000000000000ff");
//!
//! let small = evaluate("-(3x12 * 1x0000)", &EvaluatorOptions::default()).unwrap();
//! assert_eq!(small.to_i64(), Some(-20));
//! ```
//!
//! # Errors
//!
//! Every stage reports errors with the span of the offending text. Use
//! [`render_error`] or [`render_error_to_string`] to print them with the
//! source line underlined.

mod error_renderer;

// Re-export public API from abacus_core
pub use abacus_core::api::{
    Diagnostic, Error, EvaluatorOptions, Expression, ParserOptions, evaluate,
};

// Re-export value types
pub use abacus_core::big_int::{self, BigInt, Sign};
pub use abacus_core::number::{ArithmeticError, Number};

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
