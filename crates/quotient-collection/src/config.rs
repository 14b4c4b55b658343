//! Configuration for collections and text value sources.

use quotient_arith::Fraction;

/// Configuration for allocating and populating a collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectionConfig {
    /// Largest number of fractions a single collection may hold.
    pub max_len: usize,
    /// Reject zero denominators during population.
    pub reject_zero_denominator: bool,
}

impl Default for CollectionConfig {
    fn default() -> Self {
        Self {
            max_len: isize::MAX.unsigned_abs() / std::mem::size_of::<Fraction>(),
            reject_zero_denominator: true,
        }
    }
}

impl CollectionConfig {
    /// Accepts zero denominators during population, like a raw memory
    /// block would. Arithmetic on such records still fails.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            reject_zero_denominator: false,
            ..Self::default()
        }
    }
}

/// How a line of text is turned into an integer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Leading whitespace, an optional sign and leading digits are read;
    /// anything else is ignored. Empty or non-numeric lines read as `0`,
    /// out-of-range values saturate.
    #[default]
    Permissive,
    /// The trimmed line must be a valid `i64`.
    Strict,
}
