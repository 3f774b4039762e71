//! Public API for evaluating integer expressions.
//!
//! # Example
//!
//! ```
//! use abacus_core::api::{EvaluatorOptions, evaluate};
//!
//! let result = evaluate("2 ^ 64 - 1", &EvaluatorOptions::default()).unwrap();
//! assert_eq!(result.to_string(), "BIG 0xffffffffffffffff");
//! ```

pub mod error;
pub mod expression;
pub mod options;


pub use error::{Diagnostic, Error};
pub use expression::Expression;
pub use options::{EvaluatorOptions, ParserOptions};

use tracing::debug;

use crate::number::Number;

/// Parses and evaluates `source` in one go.
pub fn evaluate(source: &str, options: &EvaluatorOptions) -> Result<Number, Error> {
    debug!(source, "evaluate");
    Expression::compile(source, &options.parser)?.run()
}
