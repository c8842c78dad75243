//! Memoization cache
//!
//! A small key/value store with a fixed number of buckets and separate
//! chaining. It knows nothing about integers: keys only need equality and a
//! 32-bit bucket hash, and the store is printable whenever its keys and
//! values are.
//!
//! The arithmetic kernel uses it to remember partial results of a single
//! modular exponentiation. A cache is meant to live for one computation and
//! be dropped (or cleared) afterwards.

mod core;

pub use self::core::{BucketHash, MemoCache};
