//! Property-based tests for fraction collections.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{FractionCollection, PairSource};

    fn pairs() -> impl Strategy<Value = Vec<(i64, i64)>> {
        let non_zero = prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)];
        prop::collection::vec((-1000i64..1000i64, non_zero), 0..32)
    }

    fn populated(pairs: &[(i64, i64)]) -> FractionCollection {
        let count = i64::try_from(pairs.len()).unwrap();
        let mut fractions = FractionCollection::allocate(count).unwrap();
        fractions
            .populate(&mut PairSource::new(pairs.iter().copied()))
            .unwrap();
        fractions
    }

    proptest! {
        #[test]
        fn invert_all_twice_restores(pairs in pairs()) {
            let mut fractions = populated(&pairs);
            let original = fractions.as_slice().to_vec();

            fractions.invert_all();
            fractions.invert_all();

            prop_assert_eq!(fractions.as_slice(), original.as_slice());
        }

        #[test]
        fn invert_all_keeps_len(pairs in pairs()) {
            let mut fractions = populated(&pairs);
            fractions.invert_all();
            prop_assert_eq!(fractions.len(), pairs.len());
        }

        #[test]
        fn iter_yields_ascending_indices(pairs in pairs()) {
            let fractions = populated(&pairs);
            let entries: Vec<_> = fractions.iter().collect();

            prop_assert_eq!(entries.len(), pairs.len());
            for (position, (index, fraction)) in entries.into_iter().enumerate() {
                prop_assert_eq!(index, position);
                prop_assert_eq!(<(i64, i64)>::from(fraction), pairs[position]);
            }
        }

        #[test]
        fn reduce_all_preserves_values(pairs in pairs()) {
            let mut fractions = populated(&pairs);
            let original = fractions.as_slice().to_vec();

            fractions.reduce_all().unwrap();

            for (reduced, before) in fractions.as_slice().iter().zip(&original) {
                prop_assert!(reduced.value_eq(*before));
                prop_assert!(reduced.denominator() > 0);
            }
        }
    }
}
