//! Signed arbitrary-precision integer
//!
//! `BigInt` pairs a sign with an unsigned `Digits` magnitude and the number
//! of decimal digits of that magnitude. The kernel does all the multi-word
//! work; this layer decides which magnitude operation to run and which sign
//! the result carries.
//!
//! Zero always has the positive sign, so there is exactly one representation
//! of every value and derived equality is value equality.

mod conv;
mod core;
mod ops;

pub use self::core::{BigInt, Sign};
