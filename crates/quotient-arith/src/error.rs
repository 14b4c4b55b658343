//! Errors raised by fraction arithmetic.

use thiserror::Error;

/// Errors that can occur during fraction arithmetic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArithError {
    /// A zero divisor reached `lcm` or `add`.
    #[error("division by zero")]
    DivisionByZero,

    /// The result does not fit in an `i64`.
    #[error("integer overflow")]
    Overflow,

    /// A fraction was constructed or reduced with a zero denominator.
    #[error("denominator cannot be zero")]
    ZeroDenominator,
}
