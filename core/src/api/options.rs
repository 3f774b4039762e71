//! Configuration options for parsing and evaluation.

/// Options for the parser.
///
/// # Example
///
/// ```
/// use abacus_core::api::ParserOptions;
///
/// let options = ParserOptions { max_depth: 32 };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Maximum parenthesis nesting depth.
    ///
    /// Default: 256
    pub max_depth: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self { max_depth: 256 }
    }
}

/// Options for [`evaluate`](super::evaluate).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvaluatorOptions {
    pub parser: ParserOptions,
}
