use ivy::compute::{contains, grade, rotate, slice, sorted_copy, to_vector};
use ivy::test_harness::{NumericContext, int_view};
use ivy::{Config, Value, Vector};
use proptest::prelude::*;

fn chunks() -> impl Strategy<Value = Vec<Vec<i64>>> {
    prop::collection::vec(prop::collection::vec(-50i64..50, 0..6), 0..6)
}

fn view_of(chunks: &[Vec<i64>]) -> ivy::ColumnView {
    let slices: Vec<&[i64]> = chunks.iter().map(Vec::as_slice).collect();
    int_view(&slices)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        rng_seed: proptest::test_runner::RngSeed::Fixed(0),
        failure_persistence: None,
        .. ProptestConfig::default()
    })]

    #[test]
    fn get_matches_flattened_chunks(chunks in chunks()) {
        let view = view_of(&chunks);
        let flat: Vec<i64> = chunks.concat();
        prop_assert_eq!(view.len(), flat.len());
        for (i, expected) in flat.iter().enumerate() {
            prop_assert_eq!(view.get(i).unwrap(), Value::from(*expected));
        }
        prop_assert!(view.get(flat.len()).is_err());
    }

    #[test]
    fn slices_match_flattened_chunks(chunks in chunks(), a in 0usize..40, b in 0usize..40) {
        let view = view_of(&chunks);
        let flat: Vec<i64> = chunks.concat();
        let (begin, end) = (a.min(b).min(flat.len()), a.max(b).min(flat.len()));
        let sliced = slice(&view, begin, end).unwrap();
        prop_assert_eq!(
            to_vector(&sliced).unwrap(),
            Vector::from_ints(flat[begin..end].iter().copied())
        );
    }

    #[test]
    fn rotation_is_undone_by_its_inverse(chunks in chunks(), n in -100i64..100) {
        let flat = to_vector(&view_of(&chunks)).unwrap();
        prop_assume!(flat.len() > 1);
        let Value::Vector(rotated) = rotate(&flat, n).unwrap() else {
            panic!("rotating more than one element yields a vector");
        };
        prop_assert_eq!(rotate(&rotated, -n).unwrap(), Value::Vector(flat));
    }

    #[test]
    fn grade_is_a_stable_sorting_permutation(chunks in chunks(), origin in 0usize..2) {
        let view = view_of(&chunks);
        let flat: Vec<i64> = chunks.concat();
        let ctx = NumericContext::new(Config::try_new(origin, 64).unwrap());
        let positions: Vec<usize> = grade(&view, &ctx)
            .unwrap()
            .iter()
            .map(|v| usize::try_from(v.as_int().unwrap()).unwrap() - origin)
            .collect();

        let mut seen = positions.clone();
        seen.sort_unstable();
        prop_assert_eq!(seen, (0..flat.len()).collect::<Vec<_>>());
        for pair in positions.windows(2) {
            let (l, r) = (pair[0], pair[1]);
            prop_assert!(flat[l] < flat[r] || (flat[l] == flat[r] && l < r));
        }
    }

    #[test]
    fn contains_agrees_with_a_linear_scan(chunks in chunks(), x in -60i64..60) {
        let ctx = NumericContext::default();
        let sorted = sorted_copy(&view_of(&chunks), &ctx).unwrap();
        let expected = chunks.concat().contains(&x);
        prop_assert_eq!(contains(&sorted, &ctx, &Value::from(x)).unwrap(), expected);
    }

    #[test]
    fn materializing_twice_changes_nothing(chunks in chunks()) {
        let once = to_vector(&view_of(&chunks)).unwrap();
        prop_assert_eq!(to_vector(&once).unwrap(), once);
    }
}
