//! Errors raised by fraction collections and value sources.

use std::io;

use quotient_arith::ArithError;
use thiserror::Error;

/// Errors produced by a [`ValueSource`](crate::ValueSource).
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source ran out of values before the collection was full.
    #[error("value source exhausted at fraction {}", .index + 1)]
    Exhausted {
        /// Index of the fraction being populated.
        index: usize,
    },

    /// Input ended before a fraction count was read.
    #[error("no fraction count in input")]
    MissingCount,

    /// A line was not a valid integer under strict parsing.
    #[error("invalid number: {line:?}")]
    InvalidNumber {
        /// The offending line, without its line terminator.
        line: String,
    },

    /// Reading input or writing a prompt failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Errors that can occur while managing a fraction collection.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// A negative count was requested.
    #[error("invalid fraction count {0}")]
    InvalidCount(i64),

    /// Storage for the requested count could not be reserved.
    #[error("cannot allocate storage for {count} fractions")]
    AllocationFailure {
        /// Number of fractions requested.
        count: u64,
    },

    /// A zero denominator was supplied or encountered.
    #[error("zero denominator at fraction {}", .index + 1)]
    ZeroDenominator {
        /// Index of the offending fraction.
        index: usize,
    },

    /// The value source failed during population.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Fraction arithmetic failed.
    #[error(transparent)]
    Arith(#[from] ArithError),
}
