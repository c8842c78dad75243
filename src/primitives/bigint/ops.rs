//! Signed arithmetic for `BigInt`
//!
//! Each operation picks the magnitude routine from the operand signs and
//! then reattaches a sign:
//! - addition and subtraction reduce to one magnitude addition or one
//!   subtraction of the smaller magnitude from the larger
//! - multiplication multiplies magnitudes, the sign being the product of
//!   the operand signs
//! - division and remainder follow the floor convention, so the remainder
//!   takes the divisor's sign and `q · d + r == n` always holds
//!
//! Fallible operations are exposed as `checked_*` methods returning
//! [`Result`]. The `Div` and `Rem` operator impls panic on a zero divisor,
//! like the primitive integer types do.

use super::core::{BigInt, Sign};

use crate::cache::MemoCache;
use crate::error::{Error, Result};
use crate::params::PowModParams;
use crate::primitives::digits::Digits;

use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// Adds two signed magnitudes.
fn signed_sum(a_sign: Sign, a: &Digits, b_sign: Sign, b: &Digits) -> BigInt {
    if a_sign == b_sign {
        return BigInt::from_parts(a_sign, a.add(b));
    }

    match a.cmp(b) {
        Ordering::Greater => BigInt::from_parts(a_sign, a.sub(b)),
        Ordering::Less => BigInt::from_parts(b_sign, b.sub(a)),
        Ordering::Equal => BigInt::zero(),
    }
}

fn add(a: &BigInt, b: &BigInt) -> BigInt {
    signed_sum(a.sign(), a.magnitude(), b.sign(), b.magnitude())
}

fn sub(a: &BigInt, b: &BigInt) -> BigInt {
    signed_sum(a.sign(), a.magnitude(), b.sign().flip(), b.magnitude())
}

fn mul(a: &BigInt, b: &BigInt) -> BigInt {
    if a.is_zero() || b.is_zero() {
        return BigInt::zero();
    }

    BigInt::from_parts(a.sign().product(b.sign()), a.magnitude().mul(b.magnitude()))
}

impl BigInt {
    /// Floor division and remainder in one pass.
    ///
    /// The quotient is rounded toward negative infinity and the remainder
    /// carries the sign of `divisor` (or is zero).
    ///
    /// # Errors
    /// [`Error::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        let (q, r) = self.magnitude().div_rem(divisor.magnitude())?;

        if self.sign() == divisor.sign() || self.is_zero() {
            return Ok((
                BigInt::from_parts(Sign::Plus, q),
                BigInt::from_parts(divisor.sign(), r),
            ));
        }

        if r.is_zero() {
            return Ok((BigInt::from_parts(Sign::Minus, q), BigInt::zero()));
        }

        let quotient = BigInt::from_parts(Sign::Minus, q.add(&Digits::one()));
        let remainder = BigInt::from_parts(divisor.sign(), divisor.magnitude().sub(&r));

        Ok((quotient, remainder))
    }

    /// Floor quotient `⌊self / divisor⌋`.
    ///
    /// # Errors
    /// [`Error::DivisionByZero`] if `divisor` is zero.
    pub fn checked_div(&self, divisor: &BigInt) -> Result<BigInt> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if divisor.magnitude().is_one() {
            return Ok(BigInt::from_parts(
                self.sign().product(divisor.sign()),
                self.magnitude().clone(),
            ));
        }

        self.div_rem(divisor).map(|(q, _)| q)
    }

    /// Remainder of floor division; zero or of the sign of `modulus`.
    ///
    /// # Errors
    /// [`Error::DivisionByZero`] if `modulus` is zero.
    pub fn checked_rem(&self, modulus: &BigInt) -> Result<BigInt> {
        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if modulus.magnitude().is_one() {
            return Ok(BigInt::zero());
        }

        self.div_rem(modulus).map(|(_, r)| r)
    }

    /// Integer logarithm: the largest `e` with `base^e <= self`.
    ///
    /// Found by dividing by `base` until the running quotient drops below
    /// it, so the cost grows with the result.
    ///
    /// # Errors
    /// [`Error::LogOfNonPositive`] if `self <= 0`, [`Error::InvalidLogBase`]
    /// if `base <= 1`.
    pub fn ilog(&self, base: &BigInt) -> Result<BigInt> {
        if self.is_zero() || self.is_negative() {
            return Err(Error::LogOfNonPositive);
        }
        if base.is_negative() || base.is_zero() || base.magnitude().is_one() {
            return Err(Error::InvalidLogBase);
        }

        let base = base.magnitude();
        let mut quotient = self.magnitude().clone();
        let mut exponent = Digits::zero();

        while quotient >= *base {
            quotient = quotient.div_rem_unchecked(base).0;
            exponent = exponent.add(&Digits::one());
        }

        Ok(BigInt::from_parts(Sign::Plus, exponent))
    }

    /// `self^exponent mod modulus` with default [`PowModParams`].
    ///
    /// # Errors
    /// See [`BigInt::pow_mod_with`].
    pub fn pow_mod(&self, exponent: &BigInt, modulus: &BigInt) -> Result<BigInt> {
        self.pow_mod_with(exponent, modulus, &PowModParams::default())
    }

    /// `self^exponent mod modulus`.
    ///
    /// The result follows [`BigInt::checked_rem`]: it is zero or has the
    /// sign of `modulus`. A fresh memo cache, sized by `params`, is used for
    /// this call only.
    ///
    /// Not suitable for secrets: the running time depends on every operand.
    ///
    /// # Errors
    /// [`Error::DivisionByZero`] if `modulus` is zero,
    /// [`Error::NegativeExponent`] if `exponent < 0`, and
    /// [`Error::InvalidParams`] if `params` is rejected.
    pub fn pow_mod_with(
        &self,
        exponent: &BigInt,
        modulus: &BigInt,
        params: &PowModParams,
    ) -> Result<BigInt> {
        params.validate()?;

        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if exponent.is_negative() {
            return Err(Error::NegativeExponent);
        }

        let buckets = params.bucket_count(exponent.decimal_len());
        let mut memo = MemoCache::with_buckets(buckets);

        tracing::debug!(
            buckets,
            exponent_len = exponent.decimal_len(),
            "starting modular exponentiation"
        );

        let residue =
            self.magnitude()
                .pow_mod(exponent.magnitude(), modulus.magnitude(), &mut memo)?;

        tracing::debug!(memoized = memo.len(), "modular exponentiation done");

        let sign = if self.is_negative() && exponent.magnitude().is_odd() {
            Sign::Minus
        } else {
            Sign::Plus
        };

        BigInt::from_parts(sign, residue).checked_rem(modulus)
    }
}

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        let sign = self.sign().flip();
        BigInt::from_parts(sign, self.into_magnitude())
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

/// Implements a binary operator for every owned/borrowed operand pair on
/// top of a function taking both operands by reference.
macro_rules! forward_binop {
    ($imp:ident, $method:ident, $call:expr) => {
        impl $imp<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                $call(self, rhs)
            }
        }

        impl $imp<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                $call(self, &rhs)
            }
        }

        impl $imp<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                $call(&self, rhs)
            }
        }

        impl $imp<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                $call(&self, &rhs)
            }
        }
    };
}

fn div_or_panic(n: &BigInt, d: &BigInt) -> BigInt {
    match n.checked_div(d) {
        Ok(q) => q,
        Err(e) => panic!("{}", e),
    }
}

fn rem_or_panic(n: &BigInt, m: &BigInt) -> BigInt {
    match n.checked_rem(m) {
        Ok(r) => r,
        Err(e) => panic!("{}", e),
    }
}

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, sub);
forward_binop!(Mul, mul, mul);
forward_binop!(Div, div, div_or_panic);
forward_binop!(Rem, rem, rem_or_panic);
