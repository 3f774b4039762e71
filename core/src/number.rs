//! Overflow-promoting integers.
//!
//! A [`Number`] stays a machine `i64` as long as results fit. When a native
//! operation overflows, both operands are promoted to [`BigInt`] and the
//! operation is redone there. Big results that fit back in an `i64` are
//! demoted, so `Machine` is used whenever the value fits.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;
use tracing::{debug, trace};

use crate::big_int::{self, BigInt, BigIntError};

/// Largest power [`Number::pow`] computes, in bits of the result.
pub const MAX_POW_BITS: u64 = 1 << 20;

/// Recoverable arithmetic errors. Operands are not modified when one is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("negative exponent isn't allowed")]
    NegativeExponent,

    #[error("exponent too big, it must fit in a 64-bit integer")]
    ExponentTooLarge,

    #[error("power too big, results are limited to {} bits", MAX_POW_BITS)]
    PowerTooLarge,
}

#[derive(Debug, Clone)]
pub enum Number {
    Machine(i64),
    Big(BigInt),
}

impl Number {
    /// Parses an unsigned numeral in `radix` (2 to 36).
    ///
    /// Accumulates a native integer first and falls back to a big integer
    /// when the value does not fit.
    pub fn from_text(text: &str, radix: u32) -> Result<Self, BigIntError> {
        let digits = big_int::radix_digits(text, radix)?;

        let native = digits.iter().rev().try_fold(0i64, |acc, &digit| {
            acc.checked_mul(i64::from(radix))?
                .checked_add(i64::from(digit))
        });

        match native {
            Some(value) => Ok(Number::Machine(value)),
            None => {
                debug!(text, radix, "numeral does not fit in i64, using big integer");
                Ok(Number::Big(BigInt::from_radix_digits(digits, radix)))
            }
        }
    }

    pub fn from_u64(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(native) => Number::Machine(native),
            Err(_) => Number::Big(BigInt::from_u64(value)),
        }
    }

    /// Wraps a big integer, demoting it when it fits in an `i64`.
    pub fn from_big(value: BigInt) -> Self {
        match value.to_i64() {
            Some(native) => Number::Machine(native),
            None => Number::Big(value),
        }
    }

    #[inline]
    pub fn is_big(&self) -> bool {
        matches!(self, Number::Big(_))
    }

    /// The value as an `i64`, or `None` when it does not fit.
    pub fn to_i64(&self) -> Option<i64> {
        match self {
            Number::Machine(value) => Some(*value),
            Number::Big(value) => value.to_i64(),
        }
    }

    pub fn into_big(self) -> BigInt {
        match self {
            Number::Machine(value) => BigInt::from_i64(value),
            Number::Big(value) => value,
        }
    }

    fn to_big(&self) -> Cow<'_, BigInt> {
        match self {
            Number::Machine(value) => Cow::Owned(BigInt::from_i64(*value)),
            Number::Big(value) => Cow::Borrowed(value),
        }
    }

    /// Runs `native` when both operands are machine integers and it does not
    /// overflow, otherwise runs `big` on promoted operands.
    fn binary(
        self,
        rhs: &Number,
        op: &'static str,
        native: fn(i64, i64) -> Option<i64>,
        big: fn(BigInt, &BigInt) -> BigInt,
    ) -> Number {
        if let (Number::Machine(lhs), Number::Machine(rhs)) = (&self, rhs) {
            match native(*lhs, *rhs) {
                Some(result) => {
                    trace!(lhs, rhs, result, op, "native");
                    return Number::Machine(result);
                }
                None => debug!(lhs, rhs, op, "native overflow, promoting to big integer"),
            }
        }

        let rhs = rhs.to_big();
        Number::from_big(big(self.into_big(), &rhs))
    }

    pub fn add(self, rhs: &Number) -> Number {
        self.binary(rhs, "add", i64::checked_add, BigInt::add)
    }

    pub fn sub(self, rhs: &Number) -> Number {
        self.binary(rhs, "sub", i64::checked_sub, BigInt::sub)
    }

    pub fn mul(self, rhs: &Number) -> Number {
        self.binary(rhs, "mul", i64::checked_mul, BigInt::mul)
    }

    /// Only `i64::MIN` needs promotion.
    pub fn neg(self) -> Number {
        match self {
            Number::Machine(value) => match value.checked_neg() {
                Some(result) => Number::Machine(result),
                None => {
                    debug!(value, "native negation overflow, promoting to big integer");
                    Number::Big(BigInt::from_i64(value).neg())
                }
            },
            Number::Big(value) => Number::from_big(value.neg()),
        }
    }

    /// Narrows `self` to a non-negative exponent.
    pub fn to_exponent(&self) -> Result<u64, ArithmeticError> {
        let exponent = self.to_i64().ok_or(ArithmeticError::ExponentTooLarge)?;
        u64::try_from(exponent).map_err(|_| ArithmeticError::NegativeExponent)
    }

    /// Number of significant bits of the absolute value.
    pub fn bits(&self) -> u64 {
        match self {
            Number::Machine(value) => u64::from(64 - value.unsigned_abs().leading_zeros()),
            Number::Big(value) => value.bits(),
        }
    }

    /// `self ^ exponent`.
    ///
    /// The exponent is validated before any work is done. When `|self| >= 2`
    /// and the result would need more than [`MAX_POW_BITS`] bits,
    /// `PowerTooLarge` is returned instead of running out of memory.
    pub fn pow(self, exponent: &Number) -> Result<Number, ArithmeticError> {
        let exponent = exponent.to_exponent()?;

        // A base of `bits` bits raised to `exponent` needs at least
        // `(bits - 1) * exponent + 1` bits.
        let min_bits = self.bits().saturating_sub(1).checked_mul(exponent);
        if min_bits.is_none_or(|bits| bits >= MAX_POW_BITS) {
            debug!(exponent, base_bits = self.bits(), "power result too large");
            return Err(ArithmeticError::PowerTooLarge);
        }

        if let Number::Machine(base) = self {
            if let Some(result) = u32::try_from(exponent)
                .ok()
                .and_then(|e| base.checked_pow(e))
            {
                trace!(base, exponent, result, "native pow");
                return Ok(Number::Machine(result));
            }
            debug!(base, exponent, "native pow overflow, promoting to big integer");
        }

        Ok(Number::from_big(self.into_big().pow(exponent)))
    }
}

impl Default for Number {
    fn default() -> Self {
        Number::Machine(0)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Machine(value)
    }
}

impl From<BigInt> for Number {
    fn from(value: BigInt) -> Self {
        Number::from_big(value)
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Number::Machine(lhs), Number::Machine(rhs)) => lhs.cmp(rhs),
            _ => self.to_big().cmp(&other.to_big()),
        }
    }
}

fn fmt_native(value: i64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if value < 0 {
        write!(f, "INT -{:#x} = {}", value.unsigned_abs(), value)
    } else {
        write!(f, "INT {:#x} = {}", value, value)
    }
}

/// `INT 0x1e240 = 123456` for values that fit in an `i64`,
/// `BIG -0x...` otherwise.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_i64() {
            Some(value) => fmt_native(value, f),
            None => write!(f, "BIG {}", self.to_big()),
        }
    }
}
