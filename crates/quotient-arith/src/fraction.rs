//! Unreduced fractions.
//!
//! A `Fraction` is a raw numerator/denominator pair. Nothing normalizes it
//! behind the caller's back: `2/4` and `1/2` are different values under
//! `==`, and `add` returns the lcm-based result as is.

use std::fmt;

use crate::{gcd, lcm, ArithError};

/// A fraction `numerator / denominator` over `i64`.
///
/// The pair is stored verbatim. A zero denominator is representable, since
/// inverting `0/d` in place must not fail, but every arithmetic operation
/// rejects it. Use [`Fraction::try_new`] to validate at construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Fraction {
    numerator: i64,
    denominator: i64,
}

impl Fraction {
    /// The fraction `0/1`.
    pub const ZERO: Self = Self::new(0, 1);

    /// The fraction `1/1`.
    pub const ONE: Self = Self::new(1, 1);

    /// Creates a fraction from its parts without validation.
    #[must_use]
    pub const fn new(numerator: i64, denominator: i64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Creates a fraction, rejecting a zero denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::ZeroDenominator`] if `denominator` is zero.
    pub const fn try_new(numerator: i64, denominator: i64) -> Result<Self, ArithError> {
        if denominator == 0 {
            return Err(ArithError::ZeroDenominator);
        }
        Ok(Self::new(numerator, denominator))
    }

    /// Returns the numerator.
    #[must_use]
    pub const fn numerator(self) -> i64 {
        self.numerator
    }

    /// Returns the denominator.
    #[must_use]
    pub const fn denominator(self) -> i64 {
        self.denominator
    }

    /// Returns true if the denominator is nonzero.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.denominator != 0
    }

    /// Swaps numerator and denominator in place.
    pub fn invert(&mut self) {
        std::mem::swap(&mut self.numerator, &mut self.denominator);
    }

    /// Returns the fraction with numerator and denominator swapped.
    #[must_use]
    pub const fn inverted(self) -> Self {
        Self::new(self.denominator, self.numerator)
    }

    /// Returns the fraction in lowest terms with a positive denominator.
    ///
    /// # Errors
    ///
    /// Returns [`ArithError::ZeroDenominator`] for a zero denominator and
    /// [`ArithError::Overflow`] when the sign cannot be moved to the
    /// numerator (`i64::MIN` involved).
    pub fn reduced(self) -> Result<Self, ArithError> {
        if self.denominator == 0 {
            return Err(ArithError::ZeroDenominator);
        }

        let g = gcd(self.numerator, self.denominator);
        let mut numerator = self.numerator.checked_div(g).ok_or(ArithError::Overflow)?;
        let mut denominator = self.denominator.checked_div(g).ok_or(ArithError::Overflow)?;

        if denominator < 0 {
            numerator = numerator.checked_neg().ok_or(ArithError::Overflow)?;
            denominator = denominator.checked_neg().ok_or(ArithError::Overflow)?;
        }

        Ok(Self::new(numerator, denominator))
    }

    /// Returns true if both fractions denote the same rational value.
    ///
    /// Unlike `==`, this treats `2/4` and `1/2` as equal. Fractions with a
    /// zero denominator are equal to nothing.
    #[must_use]
    pub fn value_eq(self, other: Self) -> bool {
        if !self.is_valid() || !other.is_valid() {
            return false;
        }
        i128::from(self.numerator) * i128::from(other.denominator)
            == i128::from(other.numerator) * i128::from(self.denominator)
    }

    /// Adds two fractions without reducing the result. See [`add`].
    ///
    /// # Errors
    ///
    /// Same as [`add`].
    pub fn checked_add(self, other: Self) -> Result<Self, ArithError> {
        add(self, other)
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Debug for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fraction({}/{})", self.numerator, self.denominator)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl From<(i64, i64)> for Fraction {
    fn from((numerator, denominator): (i64, i64)) -> Self {
        Self::new(numerator, denominator)
    }
}

impl From<Fraction> for (i64, i64) {
    fn from(f: Fraction) -> Self {
        (f.numerator, f.denominator)
    }
}

impl From<i64> for Fraction {
    fn from(n: i64) -> Self {
        Self::new(n, 1)
    }
}

/// Adds two fractions over the lcm of their denominators.
///
/// Each numerator is scaled by `lcm / denominator` and the scaled
/// numerators are summed. The result is deliberately left unreduced:
/// `1/2 + 3/5` is `11/10`, `1/4 + 1/4` is `2/4`.
///
/// # Errors
///
/// Returns [`ArithError::DivisionByZero`] if either denominator is zero and
/// [`ArithError::Overflow`] if the common denominator or the scaled sum
/// does not fit in an `i64`.
pub fn add(f1: Fraction, f2: Fraction) -> Result<Fraction, ArithError> {
    if !f1.is_valid() || !f2.is_valid() {
        return Err(ArithError::DivisionByZero);
    }

    let denom = lcm(f1.denominator, f2.denominator)?;
    let scaled = |f: Fraction| {
        denom
            .checked_div(f.denominator)
            .and_then(|factor| factor.checked_mul(f.numerator))
            .ok_or(ArithError::Overflow)
    };
    let numer = scaled(f1)?
        .checked_add(scaled(f2)?)
        .ok_or(ArithError::Overflow)?;

    Ok(Fraction::new(numer, denom))
}

/// Sums fractions left to right with [`add`], starting from `0/1`.
///
/// # Errors
///
/// Stops at the first error [`add`] reports.
pub fn sum<I>(fractions: I) -> Result<Fraction, ArithError>
where
    I: IntoIterator<Item = Fraction>,
{
    fractions.into_iter().try_fold(Fraction::ZERO, add)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_unreduced() {
        // lcm(2, 5) = 10, 5*1 + 2*3 = 11
        let sum = add(Fraction::new(1, 2), Fraction::new(3, 5)).unwrap();
        assert_eq!(sum, Fraction::new(11, 10));

        // lcm(4, 4) = 4, result stays 2/4
        let sum = add(Fraction::new(1, 4), Fraction::new(1, 4)).unwrap();
        assert_eq!(sum, Fraction::new(2, 4));
        assert_ne!(sum, Fraction::new(1, 2));
        assert!(sum.value_eq(Fraction::new(1, 2)));
    }

    #[test]
    fn test_add_negative_denominator() {
        // lcm(4, -6) = -12: -3*1 + 2*1 = -1, i.e. -1/-12
        let sum = add(Fraction::new(1, 4), Fraction::new(1, -6)).unwrap();
        assert_eq!(sum, Fraction::new(-1, -12));
        assert!(sum.value_eq(Fraction::new(1, 12)));
    }

    #[test]
    fn test_add_zero_denominator() {
        assert_eq!(
            add(Fraction::new(1, 0), Fraction::new(1, 2)),
            Err(ArithError::DivisionByZero)
        );
        assert_eq!(
            add(Fraction::new(1, 2), Fraction::new(1, 0)),
            Err(ArithError::DivisionByZero)
        );
    }

    #[test]
    fn test_add_overflow() {
        let big = Fraction::new(i64::MAX, 1);
        assert_eq!(add(big, big), Err(ArithError::Overflow));
    }

    #[test]
    fn test_sum() {
        let total = sum([
            Fraction::new(1, 2),
            Fraction::new(1, 3),
            Fraction::new(1, 6),
        ])
        .unwrap();
        assert!(total.value_eq(Fraction::ONE));
        assert_eq!(sum(std::iter::empty()), Ok(Fraction::ZERO));
    }

    #[test]
    fn test_try_new() {
        assert_eq!(Fraction::try_new(1, 0), Err(ArithError::ZeroDenominator));
        assert_eq!(Fraction::try_new(3, 4), Ok(Fraction::new(3, 4)));
    }

    #[test]
    fn test_reduced() {
        assert_eq!(Fraction::new(4, 6).reduced(), Ok(Fraction::new(2, 3)));
        assert_eq!(Fraction::new(4, -6).reduced(), Ok(Fraction::new(-2, 3)));
        assert_eq!(Fraction::new(-4, -6).reduced(), Ok(Fraction::new(2, 3)));
        assert_eq!(Fraction::new(0, -5).reduced(), Ok(Fraction::new(0, 1)));
        assert_eq!(
            Fraction::new(1, 0).reduced(),
            Err(ArithError::ZeroDenominator)
        );
    }

    #[test]
    fn test_invert() {
        let mut f = Fraction::new(3, 4);
        f.invert();
        assert_eq!(f, Fraction::new(4, 3));
        assert_eq!(f.inverted(), Fraction::new(3, 4));

        // 0/5 inverts to 5/0, which arithmetic then refuses
        let zero = Fraction::new(0, 5).inverted();
        assert!(!zero.is_valid());
    }

    #[test]
    fn test_copy_semantics() {
        let f2 = Fraction::new(1, 2);
        let f1 = f2;
        assert_eq!(f1, f2);
        assert_eq!(f1.to_string(), "1/2");
    }

    #[test]
    fn test_layout() {
        assert_eq!(
            std::mem::size_of::<Fraction>(),
            2 * std::mem::size_of::<i64>()
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Fraction::new(3, 1).to_string(), "3/1");
        assert_eq!(Fraction::new(-2, 3).to_string(), "-2/3");
        assert_eq!(format!("{:?}", Fraction::new(2, 3)), "Fraction(2/3)");
    }
}
