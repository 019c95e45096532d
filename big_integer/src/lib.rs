//! Big Integer \
//! This crate provides:
//! - [`BigInt`]: Immutable arbitrary-precision integers.  All operations behave as if BigInt were represented in two's-complement notation.
//! - [`BigIntError`]: the failures of the checked operations (division by zero, malformed decimal text, invalid shift amounts, narrowing conversions).

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod error;

pub use big_int::{abs, BigInt};
pub use error::{BigIntError, Result};
