//! Magnitude buffer: the unsigned digits of a big integer.
//!
//! Digits are base 256 and little-endian, so for `[0x40, 0xE2, 0x01]` the
//! value is `0x01E240`. The buffer owns its storage; the storage length is
//! the capacity and only the first `len` digits are meaningful. Digits past
//! `len` may hold stale values from earlier operations and are never read.
//!
//! Invariants kept by every operation:
//!
//! - `len >= 1`, and zero is exactly `len == 1, digits[0] == 0`.
//! - `digits[len - 1] != 0` whenever `len > 1`.
//! - `capacity >= len`, and capacity only ever grows.
//!
//! Kernels that may write past the current length call [`Magnitude::reserve`]
//! with the largest possible result size before touching the buffer.

use core::cmp::Ordering;
use core::fmt;

use tracing::trace;

/// Radix of a single digit.
pub(crate) const BASE: u64 = 256;

/// Capacity used when converting a native integer.
pub(crate) const NATIVE_CAPACITY: usize = 16;

/// Digits needed to hold any `u64`.
const U64_DIGITS: usize = 8;

/// Capacity after a request for `requested` digits on a buffer holding `current`.
///
/// Growth is the larger of doubling and the exact request.
#[inline]
pub(crate) fn grown_capacity(current: usize, requested: usize) -> usize {
    if requested <= current {
        current
    } else {
        requested.max(2 * current)
    }
}

/// Divides a little-endian base-`radix` digit string by two in place.
///
/// Returns the new active length (most significant zeros trimmed) and the
/// remainder of the division, which is the parity of the value before the
/// call.
pub(crate) fn halve_digits(digits: &mut [u8], radix: u32) -> (usize, u8) {
    debug_assert!((2..=36).contains(&radix));

    let mut carry: u32 = 0;
    for digit in digits.iter_mut().rev() {
        let value = u32::from(*digit) + carry * radix;
        *digit = (value / 2) as u8;
        carry = value % 2;
    }

    (active_len(digits), carry as u8)
}

/// Length of a little-endian digit string without its most significant zeros.
#[inline]
pub(crate) fn active_len(digits: &[u8]) -> usize {
    digits.iter().rposition(|&d| d != 0).map_or(0, |i| i + 1)
}

#[derive(Clone)]
pub struct Magnitude {
    digits: Vec<u8>,
    len: usize,
}

impl Magnitude {
    /// A zero magnitude able to hold `capacity` digits without growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            digits: vec![0; capacity.max(1)],
            len: 1,
        }
    }

    pub fn zero() -> Self {
        Self::with_capacity(1)
    }

    pub fn one() -> Self {
        let mut magnitude = Self::zero();
        magnitude.set_one();
        magnitude
    }

    /// Byte-wise radix-256 decomposition of `value`.
    pub fn from_u64(mut value: u64) -> Self {
        let mut magnitude = Self::with_capacity(NATIVE_CAPACITY);
        let mut i = 0;
        loop {
            magnitude.digits[i] = (value & 0xff) as u8;
            value >>= 8;
            i += 1;
            if value == 0 {
                break;
            }
        }
        magnitude.len = i;
        magnitude
    }

    /// Converts little-endian base-`radix` digits to base 256.
    ///
    /// Works by repeated halving: each pass divides the whole digit string by
    /// two and the remainder becomes the next output bit. Eight bits make one
    /// output digit. Quadratic in the input length, but needs no
    /// multiplication, which is fine for numerals typed by a person.
    ///
    /// Every digit must be below `radix`.
    pub fn from_radix_digits(mut digits: Vec<u8>, radix: u32) -> Self {
        debug_assert!(digits.iter().all(|&d| u32::from(d) < radix));

        // The output never needs more digits than the input since radix <= 256.
        let mut magnitude = Self::with_capacity(digits.len());
        let mut len = active_len(&digits);
        let mut written = 0;

        while len > 0 {
            let mut byte = 0u8;
            for bit in 0..8 {
                let (next_len, parity) = halve_digits(&mut digits[..len], radix);
                byte |= parity << bit;
                len = next_len;
                if len == 0 {
                    break;
                }
            }
            magnitude.digits[written] = byte;
            written += 1;
        }

        magnitude.len = written.max(1);
        magnitude.normalize();
        trace!(radix, len = magnitude.len, "converted radix digits");
        magnitude
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.digits.len()
    }

    /// The digits in use, least significant first.
    #[inline]
    pub fn digits(&self) -> &[u8] {
        &self.digits[..self.len]
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.len == 1 && self.digits[0] == 0
    }

    /// Number of significant bits; zero for zero.
    pub fn bits(&self) -> u64 {
        let top = self.digits[self.len - 1];
        (self.len as u64 - 1) * 8 + u64::from(8 - top.leading_zeros())
    }

    /// Digit at `index`, or zero past the used length.
    #[inline]
    fn digit(&self, index: usize) -> u8 {
        if index < self.len {
            self.digits[index]
        } else {
            0
        }
    }

    /// Makes room for at least `capacity` digits.
    pub fn reserve(&mut self, capacity: usize) {
        let current = self.capacity();
        let new_capacity = grown_capacity(current, capacity);
        if new_capacity == current {
            return;
        }
        trace!(from = current, to = new_capacity, "growing magnitude buffer");
        self.digits.resize(new_capacity, 0);
    }

    pub fn set_zero(&mut self) {
        self.digits[0] = 0;
        self.len = 1;
    }

    pub fn set_one(&mut self) {
        self.digits[0] = 1;
        self.len = 1;
    }

    /// Trims most significant zero digits, keeping canonical zero.
    fn normalize(&mut self) {
        self.len = active_len(&self.digits[..self.len]).max(1);
    }

    /// `self += rhs`, ripple carry in base 256.
    pub fn add_assign(&mut self, rhs: &Magnitude) {
        let longest = self.len.max(rhs.len);
        self.reserve(longest + 1);

        let mut carry: u16 = 0;
        for i in 0..longest {
            let sum = u16::from(self.digit(i)) + u16::from(rhs.digit(i)) + carry;
            self.digits[i] = sum as u8;
            carry = sum >> 8;
        }

        let mut len = longest;
        if carry > 0 {
            self.digits[len] = carry as u8;
            len += 1;
        }
        self.len = len;
    }

    /// `self = self - rhs`, or `self = rhs - self` when `reversed`.
    ///
    /// The minuend must not be smaller than the subtrahend. The reversed form
    /// lets the caller subtract a larger borrowed operand without copying it.
    pub fn sub_assign(&mut self, rhs: &Magnitude, reversed: bool) {
        debug_assert!(if reversed { *rhs >= *self } else { *self >= *rhs });

        let longest = self.len.max(rhs.len);
        self.reserve(longest);

        let mut borrow: i16 = 0;
        let mut len = 1;
        for i in 0..longest {
            let (minuend, subtrahend) = if reversed {
                (rhs.digit(i), self.digit(i))
            } else {
                (self.digit(i), rhs.digit(i))
            };

            let mut diff = i16::from(minuend) - i16::from(subtrahend) - borrow;
            borrow = 0;
            if diff < 0 {
                diff += BASE as i16;
                borrow = 1;
            }

            self.digits[i] = diff as u8;
            if diff != 0 {
                len = i + 1;
            }
        }
        debug_assert_eq!(borrow, 0);
        self.len = len;
    }

    /// `self *= rhs`, schoolbook convolution.
    ///
    /// Output digit `w` is the column sum of `longer[i] * shorter[w - i]`
    /// plus the carry from the previous column, accumulated in a `u64`. The
    /// product goes to a freshly owned buffer that then replaces `self`'s, so
    /// no operand storage is ever shared.
    pub fn mul_assign(&mut self, rhs: &Magnitude) {
        if self.is_zero() || rhs.is_zero() {
            self.set_zero();
            return;
        }

        let (longer, shorter) = if self.len >= rhs.len {
            (self.digits(), rhs.digits())
        } else {
            (rhs.digits(), self.digits())
        };

        let needed = longer.len() + shorter.len();
        let mut product = vec![0u8; grown_capacity(self.capacity(), needed)];
        let mut remainder: u64 = 0;

        for w in 0..needed - 1 {
            let low = w.saturating_sub(shorter.len() - 1);
            let high = w.min(longer.len() - 1);
            for i in low..=high {
                remainder += u64::from(longer[i]) * u64::from(shorter[w - i]);
            }
            product[w] = (remainder % BASE) as u8;
            remainder /= BASE;
        }

        let mut len = needed - 1;
        debug_assert!(remainder < BASE);
        if remainder > 0 {
            product[len] = remainder as u8;
            len += 1;
        }

        trace!(lhs = self.len, rhs = rhs.len, len, "multiplied magnitudes");
        self.digits = product;
        self.len = len;
        self.normalize();
    }

    /// `self *= self`.
    ///
    /// Same convolution as [`Magnitude::mul_assign`], but each cross term
    /// `a[i] * a[j]` with `i != j` is computed once and counted twice.
    pub fn square_assign(&mut self) {
        let digits = self.digits();
        let n = digits.len();
        let needed = 2 * n;
        let mut product = vec![0u8; grown_capacity(self.capacity(), needed)];
        let mut remainder: u64 = 0;

        for w in 0..needed - 1 {
            let mut i = w.saturating_sub(n - 1);
            let mut j = w - i;

            let mut cross: u64 = 0;
            while i < j {
                cross += u64::from(digits[i]) * u64::from(digits[j]);
                i += 1;
                j -= 1;
            }
            remainder += 2 * cross;
            if i == j {
                remainder += u64::from(digits[i]) * u64::from(digits[i]);
            }

            product[w] = (remainder % BASE) as u8;
            remainder /= BASE;
        }

        let mut len = needed - 1;
        debug_assert!(remainder < BASE);
        if remainder > 0 {
            product[len] = remainder as u8;
            len += 1;
        }

        trace!(n, len, "squared magnitude");
        self.digits = product;
        self.len = len;
        self.normalize();
    }

    /// The value as a `u64`, or `None` when it needs more than 64 bits.
    pub fn to_u64(&self) -> Option<u64> {
        if self.len > U64_DIGITS {
            return None;
        }
        Some(
            self.digits()
                .iter()
                .rev()
                .fold(0u64, |acc, &d| (acc << 8) | u64::from(d)),
        )
    }
}

impl PartialEq for Magnitude {
    fn eq(&self, other: &Self) -> bool {
        self.digits() == other.digits()
    }
}

impl Eq for Magnitude {}

impl PartialOrd for Magnitude {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Magnitude {
    /// Longer wins, then the highest differing digit decides.
    fn cmp(&self, other: &Self) -> Ordering {
        self.len
            .cmp(&other.len)
            .then_with(|| self.digits().iter().rev().cmp(other.digits().iter().rev()))
    }
}

impl fmt::LowerHex for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = self.digits().iter().rev();
        if let Some(top) = digits.next() {
            write!(f, "{:x}", top)?;
        }
        for digit in digits {
            write!(f, "{:02x}", digit)?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = self.digits().iter().rev();
        if let Some(top) = digits.next() {
            write!(f, "{:X}", top)?;
        }
        for digit in digits {
            write!(f, "{:02X}", digit)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Magnitude")
            .field("digits", &self.digits())
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .finish()
    }
}
