use thiserror::Error;

/// Errors from building a [`BigInt`](super::BigInt) out of text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BigIntError {
    #[error("radix {0} is out of range, it must be between 2 and 36")]
    InvalidRadix(u32),

    #[error("empty numeral")]
    Empty,

    #[error("digit '{digit}' is not valid in base {radix}")]
    InvalidDigit { digit: char, radix: u32 },
}
