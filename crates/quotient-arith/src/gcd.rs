//! Greatest common divisor and least common multiple.

use num_traits::{CheckedRem, PrimInt, Zero};

use crate::ArithError;

/// Computes the greatest common divisor with the Euclidean algorithm.
///
/// The sign of the result follows the truncated remainder, so
/// `gcd(4, -6) == -2` while `gcd(-4, 6) == 2`. `gcd(a, 0)` is `a` and
/// `gcd(0, 0)` is `0`.
#[must_use]
pub fn gcd<T: PrimInt + CheckedRem>(mut a: T, mut b: T) -> T {
    while !b.is_zero() {
        // MIN % -1 overflows; its mathematical value is 0
        let r = a.checked_rem(&b).unwrap_or_else(T::zero);
        a = b;
        b = r;
    }
    a
}

/// Computes the least common multiple as `|a * b| / gcd(a, b)`.
///
/// The product is formed in `i128`, so it never overflows; only a result
/// outside the `i64` range does. The sign follows `gcd`, which keeps
/// `lcm(a, b) * gcd(a, b) == |a * b|` for every pair.
///
/// # Errors
///
/// Returns [`ArithError::DivisionByZero`] if both arguments are zero and
/// [`ArithError::Overflow`] if the result does not fit in an `i64`.
pub fn lcm(a: i64, b: i64) -> Result<i64, ArithError> {
    let g = gcd(a, b);
    if g == 0 {
        return Err(ArithError::DivisionByZero);
    }

    let product = (i128::from(a) * i128::from(b)).abs();
    i64::try_from(product / i128::from(g)).map_err(|_| ArithError::Overflow)
}
