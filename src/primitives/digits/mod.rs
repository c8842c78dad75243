//! Unsigned magnitude kernel
//!
//! This module defines `Digits`, the unsigned magnitude of every `BigInt`.
//! A magnitude is a little-endian vector of cells in radix 10⁹, so each cell
//! holds nine decimal digits and decimal conversion never needs a real base
//! change.
//!
//! All multi-word algorithms live here:
//! - carry/borrow propagating addition and subtraction
//! - schoolbook multiplication with 64-bit accumulation
//! - long division, one quotient cell per step, where each cell is found by
//!   an exponential search followed by a binary search
//! - memoized divide-and-conquer modular exponentiation
//!
//! Every value is kept canonical: at least one cell, and no zero cell at the
//! most significant end unless the value is zero itself.

mod conv;
mod core;
mod ops;

pub use self::core::{Digits, QuoRem, RADIX, RADIX_DECIMALS};
