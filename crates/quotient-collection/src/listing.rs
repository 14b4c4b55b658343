//! Human-readable listing of a fraction block.

use std::fmt;

use quotient_arith::Fraction;

/// Displays fractions one per line as `<position>: <numerator>/<denominator>`,
/// with positions starting at 1.
#[derive(Clone, Copy, Debug)]
pub struct Listing<'a> {
    records: &'a [Fraction],
}

impl<'a> Listing<'a> {
    /// Creates a listing over a slice of fractions.
    #[must_use]
    pub fn new(records: &'a [Fraction]) -> Self {
        Self { records }
    }
}

impl fmt::Display for Listing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, fraction) in self.records.iter().enumerate() {
            writeln!(f, "{}: {fraction}", index + 1)?;
        }
        Ok(())
    }
}
