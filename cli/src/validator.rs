use abacus_core::lexer::paren_depth;
use reedline::{ValidationResult, Validator};

/// Keeps reading lines while parentheses are left open.
///
/// Input that does not lex is reported as complete so that the evaluator
/// gets to point at the bad symbol.
pub struct ParenValidator;

impl Validator for ParenValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        match paren_depth(line) {
            Some(depth) if depth > 0 => ValidationResult::Incomplete,
            _ => ValidationResult::Complete,
        }
    }
}
