//! Error type shared by every fallible operation in the crate.
//!
//! Conditions that would otherwise abort a computation (a zero divisor, a
//! logarithm outside its domain, malformed decimal text) are reported before
//! any work is done, so an `Err` never carries a partial result.

/// Errors produced by big-integer construction and arithmetic.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Division, remainder or modular reduction by zero.
    #[error("division by zero")]
    DivisionByZero,
    /// Single-step division whose quotient does not fit one cell.
    #[error("quotient does not fit a single digit cell")]
    QuotientOverflow,
    /// Logarithm of a value that is zero or negative.
    #[error("logarithm of a non-positive value")]
    LogOfNonPositive,
    /// Logarithm in a base smaller than two.
    #[error("logarithm base must be greater than one")]
    InvalidLogBase,
    /// Modular exponentiation with a negative exponent.
    #[error("exponent must not be negative")]
    NegativeExponent,
    /// Decimal text without any digit.
    #[error("cannot parse integer from empty string")]
    EmptyInput,
    /// Decimal text containing something other than an ASCII digit.
    #[error("invalid digit {found:?} at byte {index}")]
    InvalidDigit { index: usize, found: char },
    /// Raw digit cell that is not below the radix.
    #[error("digit {value} at position {index} is not below the radix")]
    DigitOutOfRange { index: usize, value: u32 },
    /// Rejected configuration value.
    #[error("invalid parameters: {0}")]
    InvalidParams(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
