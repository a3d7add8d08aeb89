use proptest::{collection::vec, prelude::*};
use sortkit::prelude::*;

fn sorted_copy(v: &[i32]) -> Vec<i32> {
    let mut expected = v.to_vec();
    expected.sort();
    expected
}

fn short_vec() -> impl Strategy<Value = Vec<i32>> {
    vec(-50..50i32, 0..40)
}

fn long_vec() -> impl Strategy<Value = Vec<i32>> {
    vec(any::<i32>(), 0..2_000)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn every_algorithm_sorts_short_inputs(v in short_vec()) {
        let expected = sorted_copy(&v);
        prop_assert_eq!(insertion_sort(&v), expected.clone());
        prop_assert_eq!(quick_sort(&v), expected.clone());
        prop_assert_eq!(dual_pivot_quick_sort(&v), expected.clone());
        prop_assert_eq!(merge_sort(&v), expected.clone());
        prop_assert_eq!(tim_sort(&v), expected);
    }

    #[test]
    fn small_thresholds_still_sort(v in short_vec(), threshold in 1usize..12) {
        let options = SortOptions::new().insertion_threshold(threshold);
        let expected = sorted_copy(&v);
        prop_assert_eq!(quick_sort_with(&v, natural_order, &options), expected.clone());
        prop_assert_eq!(dual_pivot_quick_sort_with(&v, natural_order, &options), expected);
    }

    #[test]
    fn range_outside_is_untouched(v in vec(any::<i16>(), 1..200), start in -10isize..210, end in -10isize..210) {
        let options = SortOptions::new().range(start, end);
        let (low, high) = validate_range(&v, start, end).bounds().unwrap();

        for sorted in [
            quick_sort_with(&v, natural_order, &options),
            dual_pivot_quick_sort_with(&v, natural_order, &options),
            tim_sort_with(&v, natural_order, &options),
        ] {
            prop_assert_eq!(&sorted[..low], &v[..low]);
            prop_assert_eq!(&sorted[high + 1..], &v[high + 1..]);
            prop_assert!(sorted[low..=high].windows(2).all(|w| w[0] <= w[1]));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn every_algorithm_sorts_long_inputs(v in long_vec()) {
        let expected = sorted_copy(&v);
        prop_assert_eq!(quick_sort(&v), expected.clone());
        prop_assert_eq!(dual_pivot_quick_sort(&v), expected.clone());
        prop_assert_eq!(merge_sort(&v), expected.clone());
        prop_assert_eq!(tim_sort(&v), expected);
    }

    #[test]
    fn stable_sorts_keep_equal_keys_in_input_order(keys in vec(0u8..6, 0..500)) {
        let tagged: Vec<(u8, usize)> = keys.into_iter().enumerate().map(|(i, k)| (k, i)).collect();
        let by_key = |a: &(u8, usize), b: &(u8, usize)| a.0.cmp(&b.0);

        let mut expected = tagged.clone();
        expected.sort_by(by_key);

        prop_assert_eq!(merge_sort_by(&tagged, by_key), expected.clone());
        prop_assert_eq!(tim_sort_by(&tagged, by_key), expected);
    }

    #[test]
    fn sorting_twice_changes_nothing(v in long_vec()) {
        let once = tim_sort(&v);
        prop_assert_eq!(quick_sort(&once), once.clone());
        prop_assert_eq!(dual_pivot_quick_sort(&once), once.clone());
        prop_assert_eq!(merge_sort(&once), once.clone());
        prop_assert_eq!(tim_sort(&once), once);
    }

    #[test]
    fn ultra_number_sort_is_a_sorted_permutation(
        v in vec(prop_oneof![
            (-1_000i64..1_000).prop_map(|x| x as f64),
            (-1e12f64..1e12).prop_map(f64::trunc),
            -1e6f64..1e6,
            Just(f64::NAN),
        ], 0..600),
        ascending in any::<bool>(),
    ) {
        let sorted = ultra_number_sort(&v, ascending);
        prop_assert_eq!(sorted.len(), v.len());

        let nans = v.iter().filter(|x| x.is_nan()).count();
        let split = v.len() - nans;
        prop_assert!(sorted[split..].iter().all(|x| x.is_nan()));

        let mut expected: Vec<f64> = v.iter().copied().filter(|x| !x.is_nan()).collect();
        if ascending {
            expected.sort_by(|a, b| a.total_cmp(b));
        } else {
            expected.sort_by(|a, b| b.total_cmp(a));
        }
        prop_assert_eq!(&sorted[..split], expected.as_slice());
    }
}
