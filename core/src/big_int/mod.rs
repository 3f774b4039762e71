//! Arbitrary-precision signed integers.
//!
//! A [`BigInt`] is a sign plus a [`Magnitude`]. Arithmetic consumes the left
//! operand and returns the result in its (possibly regrown) storage; the right
//! operand is only borrowed:
//!
//! ```
//! use abacus_core::big_int::BigInt;
//!
//! let a = BigInt::from_radix_str("123456789012345678901234567890", 10).unwrap();
//! let b = BigInt::from_i64(-42);
//! let product = a.mul(&b);
//! assert!(product.is_negative());
//! ```
//!
//! Zero has a single representation: one zero digit with a positive sign.

mod buffer;
mod error;

#[cfg(test)]
mod buffer_test;

pub use buffer::Magnitude;
pub use error::BigIntError;

use core::cmp::Ordering;
use core::fmt;
use core::ops;

use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl ops::Not for Sign {
    type Output = Sign;

    fn not(self) -> Sign {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

#[derive(Clone)]
pub struct BigInt {
    sign: Sign,
    magnitude: Magnitude,
}

/// Validates an unsigned numeral and returns its digit values, least
/// significant first.
///
/// Digits are `0-9` then `a-z`, case-insensitive, and must be below `radix`,
/// which must be in `2..=36`.
pub fn radix_digits(text: &str, radix: u32) -> Result<Vec<u8>, BigIntError> {
    if !(2..=36).contains(&radix) {
        return Err(BigIntError::InvalidRadix(radix));
    }
    if text.is_empty() {
        return Err(BigIntError::Empty);
    }

    let mut digits = text
        .chars()
        .map(|c| {
            c.to_digit(radix)
                .map(|d| d as u8)
                .ok_or(BigIntError::InvalidDigit { digit: c, radix })
        })
        .collect::<Result<Vec<u8>, _>>()?;
    digits.reverse();
    Ok(digits)
}

impl BigInt {
    pub fn zero() -> Self {
        Self {
            sign: Sign::Positive,
            magnitude: Magnitude::zero(),
        }
    }

    pub fn one() -> Self {
        Self {
            sign: Sign::Positive,
            magnitude: Magnitude::one(),
        }
    }

    pub fn from_i64(value: i64) -> Self {
        let sign = if value < 0 {
            Sign::Negative
        } else {
            Sign::Positive
        };
        Self {
            sign,
            magnitude: Magnitude::from_u64(value.unsigned_abs()),
        }
    }

    pub fn from_u64(value: u64) -> Self {
        Self {
            sign: Sign::Positive,
            magnitude: Magnitude::from_u64(value),
        }
    }

    /// Parses an unsigned numeral written in `radix` (2 to 36).
    ///
    /// Digits are `0-9` then `a-z`, case-insensitive. Leading zeros are
    /// accepted.
    pub fn from_radix_str(text: &str, radix: u32) -> Result<Self, BigIntError> {
        let digits = radix_digits(text, radix)?;
        Ok(Self::from_radix_digits(digits, radix))
    }

    /// Builds a non-negative value from digit values, least significant
    /// first, as returned by [`radix_digits`].
    pub fn from_radix_digits(digits: Vec<u8>, radix: u32) -> Self {
        debug!(len = digits.len(), radix, "parsing big integer numeral");
        Self {
            sign: Sign::Positive,
            magnitude: Magnitude::from_radix_digits(digits, radix),
        }
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    /// Number of base-256 digits in use.
    #[inline]
    pub fn len(&self) -> usize {
        self.magnitude.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.magnitude.capacity()
    }

    /// Base-256 digits in use, least significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        self.magnitude.digits()
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Number of significant bits of the magnitude.
    #[inline]
    pub fn bits(&self) -> u64 {
        self.magnitude.bits()
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    fn set_zero(&mut self) {
        self.sign = Sign::Positive;
        self.magnitude.set_zero();
    }

    /// Flips the sign. Zero stays positive.
    pub fn neg(mut self) -> Self {
        if !self.is_zero() {
            self.sign = !self.sign;
        }
        self
    }

    pub fn abs(mut self) -> Self {
        self.sign = Sign::Positive;
        self
    }

    pub fn add(self, rhs: &BigInt) -> Self {
        trace!(lhs = self.len(), rhs = rhs.len(), "big add");
        self.add_signed(rhs, rhs.sign)
    }

    pub fn sub(self, rhs: &BigInt) -> Self {
        trace!(lhs = self.len(), rhs = rhs.len(), "big sub");
        // Subtracting is adding the opposite. A zero `rhs` flipped to
        // negative still lands in a branch that leaves `self` unchanged.
        self.add_signed(rhs, !rhs.sign)
    }

    /// `self + (rhs_sign · |rhs|)`.
    ///
    /// Equal signs add magnitudes. Opposite signs subtract the smaller
    /// magnitude from the larger; when `|self|` is the smaller one the
    /// operands trade places and the result takes `rhs_sign`.
    fn add_signed(mut self, rhs: &BigInt, rhs_sign: Sign) -> Self {
        if self.sign == rhs_sign {
            self.magnitude.add_assign(&rhs.magnitude);
            return self;
        }

        match self.magnitude.cmp(&rhs.magnitude) {
            Ordering::Equal => self.set_zero(),
            Ordering::Greater => self.magnitude.sub_assign(&rhs.magnitude, false),
            Ordering::Less => {
                self.magnitude.sub_assign(&rhs.magnitude, true);
                self.sign = rhs_sign;
            }
        }
        self
    }

    pub fn mul(mut self, rhs: &BigInt) -> Self {
        trace!(lhs = self.len(), rhs = rhs.len(), "big mul");
        if self.is_zero() || rhs.is_zero() {
            self.set_zero();
            return self;
        }

        self.magnitude.mul_assign(&rhs.magnitude);
        self.sign = if self.sign == rhs.sign {
            Sign::Positive
        } else {
            Sign::Negative
        };
        self
    }

    /// `self * self`, always non-negative.
    pub fn square(mut self) -> Self {
        trace!(len = self.len(), "big square");
        self.sign = Sign::Positive;
        self.magnitude.square_assign();
        self
    }

    /// Binary exponentiation (square-and-multiply).
    ///
    /// The result is negative iff `self` is negative and `exponent` is odd.
    pub fn pow(self, mut exponent: u64) -> Self {
        debug!(len = self.len(), exponent, "big pow");
        match exponent {
            0 => return Self::one(),
            1 => return self,
            2 => return self.square(),
            _ => {}
        }

        let negative = self.is_negative() && exponent % 2 == 1;
        let mut base = self.abs();
        let mut acc = Self::one();

        while exponent != 1 {
            if exponent % 2 == 1 {
                acc = acc.mul(&base);
                exponent -= 1;
            }
            base = base.square();
            exponent /= 2;
        }
        acc = acc.mul(&base);

        if negative { acc.neg() } else { acc }
    }

    /// The value as an `i64`, or `None` when it does not fit.
    pub fn to_i64(&self) -> Option<i64> {
        let magnitude = self.magnitude.to_u64()?;
        match self.sign {
            Sign::Positive => i64::try_from(magnitude).ok(),
            Sign::Negative => 0i64.checked_sub_unsigned(magnitude),
        }
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        Self::from_u64(value)
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.magnitude == other.magnitude
    }
}

impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Positive, Sign::Negative) => Ordering::Greater,
            (Sign::Negative, Sign::Positive) => Ordering::Less,
            (Sign::Positive, Sign::Positive) => self.magnitude.cmp(&other.magnitude),
            (Sign::Negative, Sign::Negative) => other.magnitude.cmp(&self.magnitude),
        }
    }
}

impl ops::Add<&BigInt> for BigInt {
    type Output = BigInt;

    fn add(self, rhs: &BigInt) -> BigInt {
        BigInt::add(self, rhs)
    }
}

impl ops::Sub<&BigInt> for BigInt {
    type Output = BigInt;

    fn sub(self, rhs: &BigInt) -> BigInt {
        BigInt::sub(self, rhs)
    }
}

impl ops::Mul<&BigInt> for BigInt {
    type Output = BigInt;

    fn mul(self, rhs: &BigInt) -> BigInt {
        BigInt::mul(self, rhs)
    }
}

impl ops::Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        BigInt::neg(self)
    }
}

impl fmt::LowerHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        if f.alternate() {
            f.write_str("0x")?;
        }
        write!(f, "{:x}", self.magnitude)
    }
}

impl fmt::UpperHex for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        if f.alternate() {
            f.write_str("0x")?;
        }
        write!(f, "{:X}", self.magnitude)
    }
}

/// Signed, `0x`-prefixed hexadecimal: `-0x1e240`.
impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({:#x}, len: {}, cap: {})", self, self.len(), self.capacity())
    }
}
