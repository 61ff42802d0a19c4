mod algorithms;

use std::fmt;
use std::str::FromStr;

pub use algorithms::lomuto::partition;
pub use algorithms::recursive::quick_sort;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SortVariant {
    Recursive,
    TailLoop,
}

pub const ALL_VARIANTS: [SortVariant; 2] = [SortVariant::Recursive, SortVariant::TailLoop];

pub fn all_variants() -> &'static [SortVariant] {
    &ALL_VARIANTS
}

pub fn variant_name(variant: SortVariant) -> &'static str {
    match variant {
        SortVariant::Recursive => "lomuto_recursive",
        SortVariant::TailLoop => "lomuto_tail_loop",
    }
}

impl fmt::Display for SortVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(variant_name(*self))
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sort variant `{}` (expected `recursive` or `tail-loop`)",
            self.0
        )
    }
}

impl std::error::Error for UnknownVariant {}

impl FromStr for SortVariant {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "recursive" | "lomuto_recursive" => Ok(Self::Recursive),
            "tail-loop" | "tail_loop" | "lomuto_tail_loop" => Ok(Self::TailLoop),
            _ => Err(UnknownVariant(s.to_owned())),
        }
    }
}

/// Sorts the whole slice with the recursive Lomuto quicksort.
pub fn sort<T: Ord>(data: &mut [T]) {
    sort_with_variant(SortVariant::Recursive, data);
}

/// Sorts the whole slice with the given sorter.
///
/// Empty slices are returned as is, so `len - 1` is never computed for them.
pub fn sort_with_variant<T: Ord>(variant: SortVariant, data: &mut [T]) {
    let Some(high) = data.len().checked_sub(1) else {
        return;
    };
    match variant {
        SortVariant::Recursive => algorithms::recursive::quick_sort(data, 0, high),
        SortVariant::TailLoop => algorithms::tail_loop::quick_sort(data, 0, high),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn assert_sorts_like_std<T: Ord + Clone + fmt::Debug>(data: &[T]) {
        for &variant in all_variants() {
            let mut actual = data.to_vec();
            sort_with_variant(variant, &mut actual);

            let mut expected = data.to_vec();
            expected.sort_unstable();

            assert_eq!(
                actual,
                expected,
                "variant={} input_len={}",
                variant_name(variant),
                data.len(),
            );
        }
    }

    #[test]
    fn variant_names_are_unique() {
        let mut seen = HashSet::new();
        for &variant in all_variants() {
            assert!(seen.insert(variant_name(variant)));
        }
    }

    #[test]
    fn variant_names_parse_back() {
        for &variant in all_variants() {
            assert_eq!(variant_name(variant).parse::<SortVariant>(), Ok(variant));
        }
        assert_eq!("recursive".parse::<SortVariant>(), Ok(SortVariant::Recursive));
        assert_eq!("tail-loop".parse::<SortVariant>(), Ok(SortVariant::TailLoop));
        assert!("hoare".parse::<SortVariant>().is_err());
    }

    #[test]
    fn concrete_scenarios() {
        let mut data = vec![10, 7, 8, 9, 1, 5];
        sort(&mut data);
        assert_eq!(data, [1, 5, 7, 8, 9, 10]);

        let mut data = vec![5, 4, 3, 2, 1];
        sort(&mut data);
        assert_eq!(data, [1, 2, 3, 4, 5]);

        let mut data = vec![1];
        sort(&mut data);
        assert_eq!(data, [1]);

        let mut data: Vec<i32> = Vec::new();
        sort(&mut data);
        assert!(data.is_empty());
    }

    #[test]
    fn edge_cases() {
        let cases: [Vec<i64>; 8] = [
            vec![],
            vec![42],
            vec![2, 1],
            vec![1, 2, 3, 4, 5, 6],
            vec![6, 5, 4, 3, 2, 1],
            vec![7; 128],
            vec![i64::MIN, 1, i64::MAX, 0, i64::MAX - 1, -2],
            vec![5, 5, 3, 3, 1, 1, 4, 4, 2, 2, 0, 0],
        ];

        for case in &cases {
            assert_sorts_like_std(case);
        }
    }

    #[test]
    fn sorting_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(0x1DE4_2026);
        for &variant in all_variants() {
            let mut data: Vec<i32> = (0..500).map(|_| rng.random_range(-50..50)).collect();
            sort_with_variant(variant, &mut data);
            let once = data.clone();
            sort_with_variant(variant, &mut data);
            assert_eq!(data, once, "variant={}", variant_name(variant));
        }
    }

    #[test]
    fn sorts_strings() {
        let words = ["pear", "apple", "fig", "banana", "apple", "cherry"];
        let data: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        assert_sorts_like_std(&data);
    }

    #[test]
    fn presorted_inputs() {
        // Both variants must cope with the worst-case pivot skew.
        let ascending: Vec<u64> = (0..2048).collect();
        let descending: Vec<u64> = (0..2048).rev().collect();
        assert_sorts_like_std(&ascending);
        assert_sorts_like_std(&descending);
    }

    #[test]
    fn fixed_seed_random_cases() {
        let mut rng = StdRng::seed_from_u64(0x5EED_2026);
        for &size in &[2_usize, 3, 8, 31, 32, 63, 64, 127, 128, 511, 2048] {
            let mut data = Vec::with_capacity(size);
            for _ in 0..size {
                data.push(rng.random::<u64>());
            }
            assert_sorts_like_std(&data);
        }
    }

    #[test]
    fn fixed_seed_many_duplicates() {
        let mut rng = StdRng::seed_from_u64(0xD0D1_2026);
        for &size in &[64_usize, 1024, 4096] {
            let mut data = Vec::with_capacity(size);
            for _ in 0..size {
                data.push((rng.random::<u64>() % 16) * 17);
            }
            assert_sorts_like_std(&data);
        }
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        proptest! {
            #[test]
            fn output_is_sorted_permutation(
                data in prop::collection::vec(any::<i32>(), 0..300),
                variant in prop::sample::select(ALL_VARIANTS.to_vec()),
            ) {
                let mut actual = data.clone();
                sort_with_variant(variant, &mut actual);
                prop_assert!(actual.is_sorted());

                let mut expected = data;
                expected.sort_unstable();
                prop_assert_eq!(actual, expected);
            }

            #[test]
            fn partition_splits_range(
                data in prop::collection::vec(-16_i8..16, 1..120),
                bounds in (any::<prop::sample::Index>(), any::<prop::sample::Index>()),
            ) {
                let a = bounds.0.index(data.len());
                let b = bounds.1.index(data.len());
                let (low, high) = (a.min(b), a.max(b));

                let mut actual = data.clone();
                let p = partition(&mut actual, low, high);

                prop_assert!(low <= p && p <= high);
                prop_assert!(actual[low..p].iter().all(|v| *v <= actual[p]));
                prop_assert!(actual[(p + 1)..=high].iter().all(|v| *v >= actual[p]));
                prop_assert_eq!(&actual[..low], &data[..low]);
                prop_assert_eq!(&actual[(high + 1)..], &data[(high + 1)..]);
            }

            #[test]
            fn range_sort_only_touches_range(
                data in prop::collection::vec(any::<u16>(), 2..200),
                bounds in (any::<prop::sample::Index>(), any::<prop::sample::Index>()),
                variant in prop::sample::select(ALL_VARIANTS.to_vec()),
            ) {
                let a = bounds.0.index(data.len());
                let b = bounds.1.index(data.len());
                let (low, high) = (a.min(b), a.max(b));

                let mut actual = data.clone();
                match variant {
                    SortVariant::Recursive => quick_sort(&mut actual, low, high),
                    SortVariant::TailLoop => {
                        crate::algorithms::tail_loop::quick_sort(&mut actual, low, high)
                    }
                }

                prop_assert!(actual[low..=high].is_sorted());
                prop_assert_eq!(&actual[..low], &data[..low]);
                prop_assert_eq!(&actual[(high + 1)..], &data[(high + 1)..]);
            }
        }
    }
}
