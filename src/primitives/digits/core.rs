//! Core `Digits` type
//!
//! Canonical little-endian radix-10^9 cells plus the constructors, accessors
//! and ordering every other magnitude routine builds on.

use crate::cache::BucketHash;
use crate::error::{Error, Result};

use std::cmp::Ordering;

/// Value of one digit cell.
pub const RADIX: u32 = 1_000_000_000;

/// Number of decimal digits packed into one cell.
pub const RADIX_DECIMALS: usize = 9;

const HASH_PRIME: u64 = 1_000_003;
const HASH_MULTIPLIER: u64 = 3137;

/// Unsigned arbitrary-precision magnitude.
///
/// Cells are stored least significant first and every cell is below
/// [`RADIX`]. The vector is never empty and never ends with a zero cell,
/// except for the single-cell zero.
///
/// Values are plain owned vectors: cloning copies the cells and no two
/// `Digits` ever share storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Digits(pub(crate) Vec<u32>);

/// Result of one long-division step: a single-cell quotient and the
/// remaining magnitude.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuoRem {
    pub quotient: u32,
    pub remainder: Digits,
}

impl Digits {
    /// The value zero.
    pub fn zero() -> Self {
        Self(vec![0])
    }

    /// The value one.
    pub fn one() -> Self {
        Self(vec![1])
    }

    /// Builds a magnitude from a machine integer.
    ///
    /// `u32::MAX` is below 4 × 10⁹, so two cells are always enough.
    pub fn from_u32(n: u32) -> Self {
        if n < RADIX {
            Self(vec![n])
        } else {
            Self(vec![n % RADIX, n / RADIX])
        }
    }

    pub fn from_u64(mut n: u64) -> Self {
        let mut cells = Vec::with_capacity(3);

        loop {
            cells.push((n % RADIX as u64) as u32);
            n /= RADIX as u64;

            if n == 0 {
                break;
            }
        }

        Self(cells)
    }

    /// Builds a magnitude from raw little-endian cells.
    ///
    /// Zero cells at the most significant end are dropped and an empty slice
    /// is read as zero.
    ///
    /// # Errors
    /// [`Error::DigitOutOfRange`] if a cell is not below [`RADIX`].
    pub fn from_le(cells: &[u32]) -> Result<Self> {
        if let Some((index, &value)) = cells.iter().enumerate().find(|(_, c)| **c >= RADIX) {
            return Err(Error::DigitOutOfRange { index, value });
        }

        let mut out = Self(cells.to_vec());
        out.normalize();

        Ok(out)
    }

    /// Restores the canonical form after an operation that may have left
    /// zero cells on top.
    pub(crate) fn normalize(&mut self) {
        while self.0.len() > 1 && self.0.last() == Some(&0) {
            self.0.pop();
        }

        if self.0.is_empty() {
            self.0.push(0);
        }
    }

    /// Number of active cells (always at least one).
    pub fn cell_count(&self) -> usize {
        self.0.len()
    }

    /// Little-endian view of the cells.
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub(crate) fn top(&self) -> u32 {
        self.0[self.0.len() - 1]
    }

    pub fn is_zero(&self) -> bool {
        self.0.len() == 1 && self.0[0] == 0
    }

    pub fn is_one(&self) -> bool {
        self.0.len() == 1 && self.0[0] == 1
    }

    pub(crate) fn is_odd(&self) -> bool {
        self.0[0] & 1 == 1
    }

    /// Number of decimal digits needed to write the value (one for zero).
    pub fn decimal_len(&self) -> usize {
        let top = self.top();

        if top == 0 {
            return 1;
        }

        (top.ilog10() as usize + 1) + RADIX_DECIMALS * (self.0.len() - 1)
    }

    /// Extracts cells `start..end`, counted from one at the least
    /// significant end. The window is normalized, so zero cells on its top
    /// disappear.
    ///
    /// # Panics
    /// If the window does not lie within `1..=len + 1`.
    pub fn slice(&self, start: usize, end: usize) -> Self {
        assert!(
            start >= 1 && start <= end && end <= self.0.len() + 1,
            "digit window {start}..{end} out of range for {} cells",
            self.0.len()
        );

        let mut out = Self(self.0[start - 1..end - 1].to_vec());
        out.normalize();

        out
    }

    /// Multiplies by the radix by prepending a zero cell.
    pub fn shift_by_digit(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }

        let mut cells = Vec::with_capacity(self.0.len() + 1);
        cells.push(0);
        cells.extend_from_slice(&self.0);

        Self(cells)
    }
}

impl Default for Digits {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ord for Digits {
    /// Orders by cell count first, then cell by cell from the top.
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.iter().rev().cmp(other.0.iter().rev()))
    }
}

impl PartialOrd for Digits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl BucketHash for Digits {
    fn bucket_hash(&self) -> u32 {
        let len = self.0.len() as u32;
        let seed = len.wrapping_mul(RADIX).rotate_left(self.top() % 32) as u64;

        self.0.iter().fold(seed % HASH_PRIME, |acc, &cell| {
            (acc + HASH_MULTIPLIER * cell as u64) % HASH_PRIME
        }) as u32
    }
}
