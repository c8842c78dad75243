//! Tuning parameters for modular exponentiation.
//!
//! The only tunable piece is the memoization cache that lives for one
//! `pow_mod` call. By default its bucket count follows the bit length of the
//! exponent, which is also the recursion depth of the computation.

use crate::error::{Error, Result};

/// Configuration for [`BigInt::pow_mod_with`](crate::primitives::BigInt::pow_mod_with).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PowModParams {
    /// Fixed bucket count for the memo cache. `None` sizes it from the
    /// exponent.
    pub buckets: Option<usize>,
    /// Upper bound for the size estimate derived from the exponent.
    pub max_buckets: usize,
}

impl PowModParams {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.buckets == Some(0) {
            return Err(Error::InvalidParams("bucket count must be at least 1"));
        }

        if self.max_buckets == 0 {
            return Err(Error::InvalidParams("bucket cap must be at least 1"));
        }

        Ok(())
    }

    /// Bucket count for an exponent with `decimal_len` decimal digits.
    ///
    /// The bit length is estimated as `⌈decimal_len · 10 / 3⌉`.
    pub(crate) fn bucket_count(&self, decimal_len: usize) -> usize {
        match self.buckets {
            Some(n) => n,
            None => decimal_len
                .saturating_mul(10)
                .div_ceil(3)
                .clamp(1, self.max_buckets),
        }
    }
}

impl Default for PowModParams {
    /// Buckets sized from the exponent, capped at 4096.
    fn default() -> Self {
        Self {
            buckets: None,
            max_buckets: 4096,
        }
    }
}
