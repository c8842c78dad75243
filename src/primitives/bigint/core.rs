//! Core `BigInt` type
//!
//! Sign, cached decimal length and magnitude, with the total order and
//! bucket hash used by the memo cache.

use crate::cache::BucketHash;
use crate::primitives::digits::{Digits, RADIX};

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Sign of a `BigInt`. Zero is always `Plus`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    Minus,
    Plus,
}

impl Sign {
    /// The opposite sign.
    pub fn flip(self) -> Sign {
        match self {
            Sign::Minus => Sign::Plus,
            Sign::Plus => Sign::Minus,
        }
    }

    /// Sign of a product of two values carrying `self` and `other`.
    pub fn product(self, other: Sign) -> Sign {
        if self == other { Sign::Plus } else { Sign::Minus }
    }
}

/// Signed arbitrary-precision integer.
///
/// Stored as a sign, the decimal length of the magnitude and the magnitude
/// itself. The decimal length is cached because comparisons look at it
/// before any cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BigInt {
    sign: Sign,
    decimal_len: usize,
    digits: Digits,
}

impl BigInt {
    /// Assembles a value, folding a negative zero into zero.
    pub(crate) fn from_parts(sign: Sign, digits: Digits) -> Self {
        let sign = if digits.is_zero() { Sign::Plus } else { sign };

        Self {
            sign,
            decimal_len: digits.decimal_len(),
            digits,
        }
    }

    pub fn zero() -> Self {
        Self::from_parts(Sign::Plus, Digits::zero())
    }

    pub fn one() -> Self {
        Self::from_parts(Sign::Plus, Digits::one())
    }

    pub fn sign(&self) -> Sign {
        self.sign
    }

    /// Number of decimal digits of the magnitude, sign excluded.
    pub fn decimal_len(&self) -> usize {
        self.decimal_len
    }

    pub fn magnitude(&self) -> &Digits {
        &self.digits
    }

    /// Consumes the value and returns its magnitude.
    pub fn into_magnitude(self) -> Digits {
        self.digits
    }

    pub fn is_zero(&self) -> bool {
        self.digits.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Minus
    }

    /// Absolute value.
    pub fn abs(&self) -> BigInt {
        Self::from_parts(Sign::Plus, self.digits.clone())
    }

    /// Value with the opposite sign. Zero stays zero.
    pub fn negate(&self) -> BigInt {
        Self::from_parts(self.sign.flip(), self.digits.clone())
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.decimal_len
            .cmp(&other.decimal_len)
            .then_with(|| self.digits.cmp(&other.digits))
    }
}

impl Default for BigInt {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for BigInt {
    /// Any non-negative value is above any negative one. With equal signs
    /// the decimal length decides first, then the cells; both comparisons
    /// are reversed for negative values.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (Sign::Plus, Sign::Minus) => Ordering::Greater,
            (Sign::Minus, Sign::Plus) => Ordering::Less,
            (Sign::Plus, Sign::Plus) => self.cmp_magnitude(other),
            (Sign::Minus, Sign::Minus) => self.cmp_magnitude(other).reverse(),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl BucketHash for BigInt {
    /// Mixes the signed decimal length into the magnitude hash.
    fn bucket_hash(&self) -> u32 {
        let len = self.decimal_len as i64;
        let tag = match self.sign {
            Sign::Plus => len,
            Sign::Minus => 1 - len,
        };

        (tag as u32).wrapping_mul(RADIX) ^ self.digits.bucket_hash()
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.bucket_hash());
    }
}
