//! Arbitrary-precision signed integers in radix 10⁹
//!
//! This crate provides a small big-integer library built around a decimal
//! friendly representation: magnitudes are stored as little-endian cells of
//! nine decimal digits each, so parsing and printing decimal text is a
//! matter of chunking rather than base conversion.
//!
//! # Module overview
//!
//! - `primitives`
//!   The `Digits` magnitude kernel (addition, subtraction, schoolbook
//!   multiplication, long division, memoized modular exponentiation) and
//!   the signed `BigInt` built on top of it.
//!
//! - `cache`
//!   A generic fixed-bucket hash table with separate chaining. Modular
//!   exponentiation uses it to remember results for exponents it has
//!   already solved during one call.
//!
//! - `params`
//!   Tuning parameters for modular exponentiation.
//!
//! - `error`
//!   The crate error type. Division by zero, logarithms outside their
//!   domain and malformed decimal text are all reported as values, never
//!   by aborting.
//!
//! # Example
//!
//! ```
//! use gigint::primitives::BigInt;
//!
//! let a: BigInt = "1999999999111111111".parse().unwrap();
//! let b: BigInt = "-3222222222111111111000000000".parse().unwrap();
//!
//! assert_eq!((&a + &b).to_string(), "-3222222220111111111888888889");
//!
//! let q = b.checked_div(&BigInt::from(-1_000_000_000)).unwrap();
//! assert_eq!(q.to_string(), "3222222222111111111");
//! ```
//!
//! # Design goals
//!
//! - Explicit ownership: operations borrow and return fresh values
//! - Canonical representation, so derived equality is value equality
//! - Predictable, documented sign conventions (floor division)
//!
//! The running time of every operation depends on its operands. Nothing
//! here is suitable for handling secrets.

pub mod cache;
pub mod error;
pub mod params;
pub mod primitives;

pub use error::{Error, Result};
