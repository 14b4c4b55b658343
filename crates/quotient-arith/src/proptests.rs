//! Property-based tests for fraction arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{add, gcd, lcm, Fraction};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn fraction() -> impl Strategy<Value = Fraction> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Fraction::new(n, d))
    }

    proptest! {
        // GCD properties

        #[test]
        fn gcd_with_zero_is_identity(a in any::<i64>()) {
            prop_assert_eq!(gcd(a, 0), a);
        }

        #[test]
        fn gcd_divides_both(a in non_zero_int(), b in non_zero_int()) {
            let g = gcd(a, b);
            prop_assert_eq!(a % g, 0);
            prop_assert_eq!(b % g, 0);
        }

        #[test]
        fn gcd_commutative_up_to_sign(a in small_int(), b in small_int()) {
            prop_assert_eq!(gcd(a, b).abs(), gcd(b, a).abs());
        }

        // LCM properties

        #[test]
        fn lcm_times_gcd_is_abs_product(a in non_zero_int(), b in non_zero_int()) {
            let l = lcm(a, b).unwrap();
            prop_assert_eq!(l * gcd(a, b), (a * b).abs());
        }

        #[test]
        fn lcm_is_multiple_of_both(a in non_zero_int(), b in non_zero_int()) {
            let l = lcm(a, b).unwrap();
            prop_assert_eq!(l % a, 0);
            prop_assert_eq!(l % b, 0);
        }

        // Addition properties

        #[test]
        fn add_self_doubles_numerator(f in fraction()) {
            let sum = add(f, f).unwrap();
            prop_assert_eq!(sum, Fraction::new(2 * f.numerator(), f.denominator()));
        }

        #[test]
        fn add_matches_rational_sum(a in fraction(), b in fraction()) {
            let sum = add(a, b).unwrap();
            let expected = Fraction::new(
                a.numerator() * b.denominator() + b.numerator() * a.denominator(),
                a.denominator() * b.denominator(),
            );
            prop_assert!(sum.value_eq(expected));
        }

        #[test]
        fn add_commutative_in_value(a in fraction(), b in fraction()) {
            // lcm(4, -4) and lcm(-4, 4) differ in sign, so only values agree
            let ab = add(a, b).unwrap();
            let ba = add(b, a).unwrap();
            prop_assert!(ab.value_eq(ba));
        }

        #[test]
        fn add_zero_denominator_fails(n in small_int(), f in fraction()) {
            prop_assert!(add(Fraction::new(n, 0), f).is_err());
        }

        // Reduction properties

        #[test]
        fn reduced_preserves_value(f in fraction()) {
            let r = f.reduced().unwrap();
            prop_assert!(r.value_eq(f));
            prop_assert!(r.denominator() > 0);
            prop_assert_eq!(gcd(r.numerator(), r.denominator()).abs(), 1);
        }

        #[test]
        fn invert_twice_is_identity(f in fraction()) {
            let mut g = f;
            g.invert();
            g.invert();
            prop_assert_eq!(g, f);
        }
    }
}
