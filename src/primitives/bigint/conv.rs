//! Conversions between `BigInt`, decimal text and machine integers.

use super::core::{BigInt, Sign};

use crate::error::Error;
use crate::primitives::digits::Digits;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Parses an optional leading `-` followed by ASCII decimal digits.
///
/// Leading zeros are accepted, and `-0` parses to zero.
impl FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (sign, body, offset) = match s.strip_prefix('-') {
            Some(rest) => (Sign::Minus, rest, 1),
            None => (Sign::Plus, s, 0),
        };

        let digits = Digits::parse_decimal(body).map_err(|e| match e {
            Error::InvalidDigit { index, found } => Error::InvalidDigit {
                index: index + offset,
                found,
            },
            other => other,
        })?;

        Ok(BigInt::from_parts(sign, digits))
    }
}

impl TryFrom<&str> for BigInt {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<u32> for BigInt {
    fn from(value: u32) -> Self {
        BigInt::from_parts(Sign::Plus, Digits::from_u32(value))
    }
}

impl From<i32> for BigInt {
    fn from(value: i32) -> Self {
        let sign = if value < 0 { Sign::Minus } else { Sign::Plus };
        BigInt::from_parts(sign, Digits::from_u32(value.unsigned_abs()))
    }
}

impl From<u64> for BigInt {
    fn from(value: u64) -> Self {
        BigInt::from_parts(Sign::Plus, Digits::from_u64(value))
    }
}

impl From<i64> for BigInt {
    fn from(value: i64) -> Self {
        let sign = if value < 0 { Sign::Minus } else { Sign::Plus };
        BigInt::from_parts(sign, Digits::from_u64(value.unsigned_abs()))
    }
}

impl From<Digits> for BigInt {
    fn from(value: Digits) -> Self {
        BigInt::from_parts(Sign::Plus, value)
    }
}

/// Attempts to narrow into `i64` (fails outside `i64::MIN..=i64::MAX`).
impl TryFrom<&BigInt> for i64 {
    type Error = ();

    fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
        let magnitude = u64::try_from(value.magnitude())?;

        match value.sign() {
            Sign::Plus => i64::try_from(magnitude).map_err(|_| ()),
            Sign::Minus => 0i64.checked_sub_unsigned(magnitude).ok_or(()),
        }
    }
}

impl Display for BigInt {
    /// Writes `-` for negative values followed by the decimal magnitude.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }

        write!(f, "{}", self.magnitude())
    }
}
