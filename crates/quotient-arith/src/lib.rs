//! # quotient-arith
//!
//! Fixed-width fraction arithmetic for the quotient workspace.
//!
//! This crate provides:
//! - The `Fraction` value type, an unreduced numerator/denominator pair
//! - Euclidean `gcd` over any primitive integer
//! - `lcm` and fraction `add` with an `i128` intermediate
//!
//! ## Representation Notes
//!
//! - Results of `add` are never reduced: `1/2 + 3/5` is `11/10` and
//!   `1/4 + 1/4` is `2/4`
//! - Reduction is explicit, through `Fraction::reduced`
//! - Division by zero and overflow are reported as `ArithError`, never
//!   coerced to a value

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod fraction;
pub mod gcd;

#[cfg(test)]
mod proptests;

pub use error::ArithError;
pub use fraction::{add, sum, Fraction};
pub use gcd::{gcd, lcm};
