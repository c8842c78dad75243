//! Integer primitives
//!
//! Two layers, one on top of the other:
//! - `Digits`: an unsigned magnitude stored as radix-10⁹ cells, together
//!   with all multi-word algorithms
//! - `BigInt`: a sign and a `Digits` magnitude, exposing the public signed
//!   arithmetic, comparisons and decimal conversions
//!
//! Both types are plain owned values. Every operation borrows its operands
//! and returns a new value, so no input is ever consumed or modified behind
//! the caller's back.

mod bigint;
mod digits;

pub use bigint::{BigInt, Sign};
pub use digits::{Digits, QuoRem, RADIX, RADIX_DECIMALS};
