//! # Quotient
//!
//! Fraction arithmetic and owned fraction collections.
//!
//! ## Features
//!
//! - **Unreduced Arithmetic**: `gcd`, `lcm` and lcm-based fraction addition
//!   that reports division by zero and overflow instead of wrapping
//! - **Owned Collections**: fixed-length fraction blocks with an explicit
//!   allocate, populate, invert, enumerate and release lifecycle
//! - **Value Sources**: populate from in-memory pairs or line-oriented text
//!
//! ## Quick Start
//!
//! ```rust
//! use quotient::prelude::*;
//!
//! let sum = add(Fraction::new(1, 2), Fraction::new(3, 5))?;
//! assert_eq!(sum.to_string(), "11/10");
//!
//! let mut fractions = FractionCollection::allocate(2)?;
//! fractions.populate(&mut PairSource::new([(1, 2), (3, 4)]))?;
//! fractions.invert_all();
//! print!("{}", fractions.listing());
//! fractions.release();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use quotient_arith as arith;
pub use quotient_collection as collection;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use quotient_arith::{add, gcd, lcm, sum, ArithError, Fraction};
    pub use quotient_collection::{
        CollectionConfig, CollectionError, FractionCollection, LineSource, Listing, PairSource,
        ParseMode, SourceError, ValueSource,
    };
}
