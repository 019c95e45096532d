//! Error definitions for the big_integer crate.

/// Failure of a fallible [`BigInt`](crate::BigInt) operation.
#[allow(missing_docs)] // errors are self-documenting
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BigIntError {
    #[error("attempt to divide by zero")]
    DivisionByZero,
    #[error("malformed decimal literal {input:?}: {reason}")]
    MalformedInput { input: String, reason: &'static str },
    #[error("shift amount {amount} is outside 0..={}", u32::MAX)]
    InvalidShift { amount: i64 },
    #[error("value does not fit in {target}")]
    OutOfRange { target: &'static str },
}

pub type Result<T, E = BigIntError> = std::result::Result<T, E>;
