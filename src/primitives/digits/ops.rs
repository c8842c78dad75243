//! Arithmetic on unsigned magnitudes
//!
//! Every operation borrows its operands and returns a freshly owned,
//! canonical result. Division-like operations check for a zero divisor and
//! report it as an error; the internal helpers they call rely on that check
//! having been made.

use super::core::{Digits, QuoRem, RADIX};

use crate::cache::MemoCache;
use crate::error::{Error, Result};

use std::cmp::Ordering;

impl Digits {
    /// Sum of two magnitudes.
    ///
    /// Once the shorter operand and the carry are both exhausted, the
    /// remaining cells of the longer one are copied in a single pass.
    pub fn add(&self, other: &Digits) -> Digits {
        let (long, short) = if self.0.len() >= other.0.len() {
            (&self.0, &other.0)
        } else {
            (&other.0, &self.0)
        };

        let mut out = Vec::with_capacity(long.len() + 1);
        let mut carry = 0u32;

        for (i, &a) in long.iter().enumerate() {
            if i >= short.len() && carry == 0 {
                out.extend_from_slice(&long[i..]);
                break;
            }

            let b = short.get(i).copied().unwrap_or(0);
            let sum = a + b + carry;

            if sum >= RADIX {
                out.push(sum - RADIX);
                carry = 1;
            } else {
                out.push(sum);
                carry = 0;
            }
        }

        if carry == 1 {
            out.push(1);
        }

        Digits(out)
    }

    /// Difference `self − other`.
    ///
    /// The caller guarantees `self >= other`; the result is trimmed back to
    /// canonical form but never shorter than one cell.
    pub fn sub(&self, other: &Digits) -> Digits {
        debug_assert!(*self >= *other, "magnitude subtraction would underflow");

        let mut out = Vec::with_capacity(self.0.len());
        let mut borrow = 0u32;

        for (i, &a) in self.0.iter().enumerate() {
            if i >= other.0.len() && borrow == 0 {
                out.extend_from_slice(&self.0[i..]);
                break;
            }

            let b = other.0.get(i).copied().unwrap_or(0) + borrow;

            if a >= b {
                out.push(a - b);
                borrow = 0;
            } else {
                out.push(a + RADIX - b);
                borrow = 1;
            }
        }

        let mut diff = Digits(out);
        diff.normalize();

        diff
    }

    /// Schoolbook product in `O(len(a) · len(b))`.
    pub fn mul(&self, other: &Digits) -> Digits {
        if self.is_zero() || other.is_zero() {
            return Digits::zero();
        }
        if self.is_one() {
            return other.clone();
        }
        if other.is_one() {
            return self.clone();
        }

        let radix = RADIX as u64;
        let mut acc = vec![0u32; self.0.len() + other.0.len()];

        for (i, &a) in self.0.iter().enumerate() {
            let mut carry = 0u64;

            for (j, &b) in other.0.iter().enumerate() {
                let tmp = acc[i + j] as u64 + a as u64 * b as u64 + carry;
                acc[i + j] = (tmp % radix) as u32;
                carry = tmp / radix;
            }

            acc[i + other.0.len()] = carry as u32;
        }

        let mut product = Digits(acc);
        product.normalize();

        product
    }

    /// One step of long division: the single cell `q` and remainder `r`
    /// such that `self = q · divisor + r`.
    ///
    /// The quotient is located by doubling a trial value until its product
    /// reaches `self`, then bisecting between the last two trials.
    ///
    /// # Errors
    /// [`Error::DivisionByZero`] if `divisor` is zero,
    /// [`Error::QuotientOverflow`] if `self >= divisor · RADIX`.
    pub fn single_div_rem(&self, divisor: &Digits) -> Result<QuoRem> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }
        if *self >= divisor.shift_by_digit() {
            return Err(Error::QuotientOverflow);
        }

        Ok(self.single_div_rem_unchecked(divisor))
    }

    fn single_div_rem_unchecked(&self, divisor: &Digits) -> QuoRem {
        debug_assert!(
            *self < divisor.shift_by_digit(),
            "single-cell quotient overflow"
        );

        // Invariant once the doubling stops: lo · divisor <= self < hi · divisor.
        let mut lo = 0u32;
        let mut hi = 1u32;

        loop {
            match divisor.mul(&Digits::from_u32(hi)).cmp(self) {
                Ordering::Equal => {
                    return QuoRem {
                        quotient: hi,
                        remainder: Digits::zero(),
                    };
                }
                Ordering::Greater => break,
                Ordering::Less if hi >= RADIX / 2 => {
                    lo = hi;
                    hi = RADIX;
                    break;
                }
                Ordering::Less => {
                    lo = hi;
                    hi *= 2;
                }
            }
        }

        while hi - lo > 1 {
            let mid = lo + (hi - lo) / 2;

            if divisor.mul(&Digits::from_u32(mid)) > *self {
                hi = mid;
            } else {
                lo = mid;
            }
        }

        QuoRem {
            quotient: lo,
            remainder: self.sub(&divisor.mul(&Digits::from_u32(lo))),
        }
    }

    /// Long division returning `(quotient, remainder)`.
    ///
    /// # Errors
    /// [`Error::DivisionByZero`] if `divisor` is zero.
    pub fn div_rem(&self, divisor: &Digits) -> Result<(Digits, Digits)> {
        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }

        Ok(self.div_rem_unchecked(divisor))
    }

    /// Long division for a divisor already known to be non-zero.
    ///
    /// The first window is the top `len(divisor)` cells of `self`, widened by
    /// one cell when that is still smaller than the divisor. Each step then
    /// brings down the next lower cell next to the running remainder.
    pub(crate) fn div_rem_unchecked(&self, divisor: &Digits) -> (Digits, Digits) {
        if self < divisor {
            return (Digits::zero(), self.clone());
        }
        if divisor.is_one() {
            return (self.clone(), Digits::zero());
        }

        let top = self.0.len() + 1;
        let mut pos = self.0.len() - divisor.0.len() + 1;
        let mut window = self.slice(pos, top);
        let mut carry = Digits::zero();

        if window < *divisor {
            pos -= 1;
            carry = window.shift_by_digit();
            window = self.slice(pos, pos + 1);
        }

        let mut quotient = vec![0u32; pos];

        loop {
            let step = window.add(&carry).single_div_rem_unchecked(divisor);
            quotient[pos - 1] = step.quotient;

            if pos == 1 {
                let mut q = Digits(quotient);
                q.normalize();

                return (q, step.remainder);
            }

            carry = step.remainder.shift_by_digit();
            window = self.slice(pos - 1, pos);
            pos -= 1;
        }
    }

    /// `self^exponent mod modulus`, computed by halving the exponent.
    ///
    /// The exponent `e` is split into `⌊e/2⌋` and `e − ⌊e/2⌋`; both halves
    /// are solved recursively and their results multiplied and reduced.
    /// Halves repeat across branches, so every solved exponent is kept in
    /// `memo` and looked up before recursing. Entries are keyed by exponent
    /// alone, so `memo` is cleared on entry and only holds this call's
    /// results afterwards.
    ///
    /// # Errors
    /// [`Error::DivisionByZero`] if `modulus` is zero.
    pub fn pow_mod(
        &self,
        exponent: &Digits,
        modulus: &Digits,
        memo: &mut MemoCache<Digits, Digits>,
    ) -> Result<Digits> {
        if modulus.is_zero() {
            return Err(Error::DivisionByZero);
        }

        memo.clear();
        let base = self.div_rem_unchecked(modulus).1;

        Ok(pow_mod_reduced(&base, exponent, modulus, memo))
    }
}

/// Recursive step of [`Digits::pow_mod`]; `base` is already below `modulus`.
fn pow_mod_reduced(
    base: &Digits,
    exponent: &Digits,
    modulus: &Digits,
    memo: &mut MemoCache<Digits, Digits>,
) -> Digits {
    if modulus.is_one() {
        return Digits::zero();
    }
    if exponent.is_zero() {
        return Digits::one();
    }
    if base.is_zero() {
        return Digits::zero();
    }
    if base.is_one() {
        return Digits::one();
    }
    if exponent.is_one() {
        return base.clone();
    }

    let (low, _) = exponent.div_rem_unchecked(&Digits::from_u32(2));
    let high = exponent.sub(&low);

    let a = memoized(base, low, modulus, memo);
    let b = memoized(base, high, modulus, memo);

    a.mul(&b).div_rem_unchecked(modulus).1
}

fn memoized(
    base: &Digits,
    exponent: Digits,
    modulus: &Digits,
    memo: &mut MemoCache<Digits, Digits>,
) -> Digits {
    if let Some(hit) = memo.get(&exponent) {
        return hit.clone();
    }

    tracing::trace!(exponent = %exponent, "pow_mod cache miss");

    let result = pow_mod_reduced(base, &exponent, modulus, memo);
    memo.insert(exponent, result.clone());

    result
}
