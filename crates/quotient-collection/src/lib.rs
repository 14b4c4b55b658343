//! # quotient-collection
//!
//! Owned, fixed-length collections of fractions.
//!
//! This crate provides:
//! - `FractionCollection`, a single-owner block of `Fraction` records
//! - Value sources that feed numerator/denominator pairs into a collection
//! - A `Listing` display sink for human-readable output
//!
//! ## Lifecycle
//!
//! A collection is allocated with a fixed count, populated from a
//! `ValueSource`, transformed in place with `invert_all`, read through
//! `iter`, and finally released. `release` consumes the collection, so any
//! later use is rejected by the compiler rather than detected at runtime.
//!
//! ```rust
//! use quotient_collection::{FractionCollection, PairSource};
//!
//! let mut fractions = FractionCollection::allocate(3)?;
//! fractions.populate(&mut PairSource::new([(1, 2), (3, 4), (5, 6)]))?;
//! fractions.invert_all();
//! assert_eq!(fractions.listing().to_string(), "1: 2/1\n2: 4/3\n3: 6/5\n");
//! fractions.release();
//! # Ok::<(), quotient_collection::CollectionError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collection;
pub mod config;
pub mod error;
pub mod listing;
pub mod source;

#[cfg(test)]
mod proptests;

pub use collection::{Entries, FractionCollection};
pub use config::{CollectionConfig, ParseMode};
pub use error::{CollectionError, SourceError};
pub use listing::Listing;
pub use source::{LineSource, PairSource, ValueSource};
