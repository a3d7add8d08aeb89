//! Adaptive sorting for `f64` sequences ("ultra" sort).
//!
//! A single scan builds a [`NumericProfile`] of the input, and the profile selects a
//! [`Strategy`]:
//! - **Inline**: comparison networks for two or three elements.
//! - **NaN segregation**: NaNs are set aside and appended last, whatever the direction.
//! - **Counting sort**: small dense integer ranges, O(n + range).
//! - **Radix sort**: larger integer sets, LSD over 8-bit digits of the magnitudes.
//! - **Quicksort**: everything else, iterative with an explicit range stack.
//!
//! The main entry points are [`ultra_number_sort`] and [`ultra_number_sort_in_place`].

use cuneiform::cuneiform;

/// Below this many elements the numeric quicksort switches to insertion sort.
const NUMERIC_INSERTION_CUTOFF: usize = 16;

/// Counting sort is only used when `max - min` stays below this bound.
const COUNTING_RANGE_LIMIT: f64 = 1_000_000.0;

/// Radix sort needs more than this many elements to pay for its passes.
const RADIX_MIN_LEN: usize = 100;

/// Number of buckets per radix pass (one byte).
const RADIX_BUCKETS: usize = 256;

/// Largest magnitude at which every integer is exactly representable in `f64`.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Shape of a numeric sequence, as seen by the dispatcher.
///
/// The scan stops at the first NaN, so when `has_nan` is set `min_value`,
/// `max_value` and `all_integers` only describe the values before it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericProfile {
    pub length: usize,
    pub all_integers: bool,
    pub min_value: f64,
    pub max_value: f64,
    pub has_nan: bool,
}

impl NumericProfile {
    /// Profiles `v` in a single pass.
    ///
    /// Infinities and integers too large to be exact in `f64` do not count as
    /// integers.
    pub fn scan(v: &[f64]) -> Self {
        let first = v.first().copied().unwrap_or(0.0);
        let mut profile = Self {
            length: v.len(),
            all_integers: true,
            min_value: first,
            max_value: first,
            has_nan: false,
        };

        for &value in v {
            if value.is_nan() {
                profile.has_nan = true;
                break;
            }
            if value < profile.min_value {
                profile.min_value = value;
            }
            if value > profile.max_value {
                profile.max_value = value;
            }
            if profile.all_integers && !is_exact_integer(value) {
                profile.all_integers = false;
            }
        }

        profile
    }

    #[inline]
    fn span(&self) -> f64 {
        self.max_value - self.min_value
    }
}

#[inline]
fn is_exact_integer(value: f64) -> bool {
    value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER
}

/// The algorithm [`ultra_number_sort`] applies to a given input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Zero or one element.
    Trivial,
    /// Two elements, one conditional swap.
    Inline2,
    /// Three elements, comparison network.
    Inline3,
    /// NaNs present; the remaining values are dispatched again without them.
    NanSegregated,
    Counting,
    Radix,
    QuickSort,
}

/// Returns the strategy [`ultra_number_sort`] would pick for `v`.
///
/// # Examples
///
/// ```
/// use sortkit::numeric::{choose_strategy, Strategy};
///
/// assert_eq!(choose_strategy(&[3.0, 1.0, 2.0, 2.0]), Strategy::Counting);
/// assert_eq!(choose_strategy(&[0.5, 0.25, 2.0, 1.0]), Strategy::QuickSort);
/// assert_eq!(choose_strategy(&[1.0, f64::NAN, 3.0, 2.0]), Strategy::NanSegregated);
/// ```
pub fn choose_strategy(v: &[f64]) -> Strategy {
    plan(v).0
}

/// Picks the strategy for `v`, along with the profile when one was scanned.
fn plan(v: &[f64]) -> (Strategy, Option<NumericProfile>) {
    match v.len() {
        0 | 1 => return (Strategy::Trivial, None),
        2 if !v.iter().any(|x| x.is_nan()) => return (Strategy::Inline2, None),
        3 if !v.iter().any(|x| x.is_nan()) => return (Strategy::Inline3, None),
        _ => {}
    }

    let profile = NumericProfile::scan(v);
    let strategy = if profile.has_nan {
        Strategy::NanSegregated
    } else {
        strategy_for(&profile)
    };
    (strategy, Some(profile))
}

/// Strategy for a NaN-free profile of at least two elements.
fn strategy_for(profile: &NumericProfile) -> Strategy {
    debug_assert!(!profile.has_nan);
    let span = profile.span();

    if profile.all_integers && span < (profile.length * 2) as f64 && span < COUNTING_RANGE_LIMIT
    {
        Strategy::Counting
    } else if profile.all_integers && profile.length > RADIX_MIN_LEN {
        Strategy::Radix
    } else {
        Strategy::QuickSort
    }
}

/// Returns a sorted copy of `v`.
///
/// The strategy is chosen from a single scan of the input; see [`choose_strategy`].
///
/// # Arguments
///
/// * `v` - The values to sort. It is not modified.
/// * `ascending` - `true` for smallest first, `false` for largest first.
///
/// # Returns
///
/// A permutation of `v` in the requested order, with every NaN at the end for both
/// directions. `-0.0` sorts next to `0.0` and keeps its sign. Not stable.
///
/// # Examples
///
/// ```
/// use sortkit::ultra_number_sort;
///
/// assert_eq!(ultra_number_sort(&[3.0, 1.0, 4.0, 1.0, 5.0], false), vec![5.0, 4.0, 3.0, 1.0, 1.0]);
///
/// let sorted = ultra_number_sort(&[3.0, f64::NAN, 1.0, f64::NAN, 2.0], true);
/// assert_eq!(&sorted[..3], &[1.0, 2.0, 3.0]);
/// assert!(sorted[3..].iter().all(|x| x.is_nan()));
/// ```
pub fn ultra_number_sort(v: &[f64], ascending: bool) -> Vec<f64> {
    let mut result = v.to_vec();
    ultra_number_sort_in_place(&mut result, ascending);
    result
}

/// Sorts `v` in place; see [`ultra_number_sort`].
pub fn ultra_number_sort_in_place(v: &mut [f64], ascending: bool) {
    match plan(v) {
        (Strategy::Inline2, _) => {
            if out_of_order(v[0], v[1], ascending) {
                v.swap(0, 1);
            }
        }
        (Strategy::Inline3, _) => inline_sort3(v, ascending),
        (Strategy::NanSegregated, _) => nan_segregated_sort(v, ascending),
        (Strategy::Counting, Some(profile)) => {
            counting_sort(v, profile.min_value, profile.max_value, ascending)
        }
        (Strategy::Radix, _) => radix_sort(v, ascending),
        (Strategy::QuickSort, _) => quick_sort(v, ascending),
        _ => {}
    }
}

/// `true` if `a` must come after `b`.
#[inline(always)]
fn out_of_order(a: f64, b: f64, ascending: bool) -> bool {
    if ascending { a > b } else { a < b }
}

fn inline_sort3(v: &mut [f64], ascending: bool) {
    if out_of_order(v[0], v[1], ascending) {
        v.swap(0, 1);
    }
    if out_of_order(v[1], v[2], ascending) {
        v.swap(1, 2);
        if out_of_order(v[0], v[1], ascending) {
            v.swap(0, 1);
        }
    }
}

/// Compacts the non-NaN values to the front, sorts them and fills the tail with NaN.
fn nan_segregated_sort(v: &mut [f64], ascending: bool) {
    let mut valid = 0;
    for i in 0..v.len() {
        if !v[i].is_nan() {
            v[valid] = v[i];
            valid += 1;
        }
    }
    v[valid..].fill(f64::NAN);

    // The prefix is NaN-free, so this never comes back here.
    ultra_number_sort_in_place(&mut v[..valid], ascending);
}

fn counting_sort(v: &mut [f64], min: f64, max: f64, ascending: bool) {
    let range = (max - min) as usize + 1;
    let mut counts = vec![0usize; range];
    let mut negative_zeros = 0;
    for &value in v.iter() {
        counts[(value - min) as usize] += 1;
        if value == 0.0 && value.is_sign_negative() {
            negative_zeros += 1;
        }
    }

    let mut emit = v.iter_mut();
    let mut fill = |value: f64, count: usize| {
        for slot in emit.by_ref().take(count) {
            *slot = value;
        }
    };
    let mut fill_bucket = |offset: usize, count: usize| {
        let value = min + offset as f64;
        if value != 0.0 {
            fill(value, count);
        } else if ascending {
            fill(-0.0, negative_zeros);
            fill(0.0, count - negative_zeros);
        } else {
            fill(0.0, count - negative_zeros);
            fill(-0.0, negative_zeros);
        }
    };

    if ascending {
        counts.iter().enumerate().for_each(|(i, &c)| fill_bucket(i, c));
    } else {
        counts.iter().enumerate().rev().for_each(|(i, &c)| fill_bucket(i, c));
    }
}

// Cache-aligned histogram for one radix pass.
#[cuneiform]
struct RadixCounts {
    data: [usize; RADIX_BUCKETS],
}

/// Sorts integer-valued `v` by radix-sorting positive and negative magnitudes
/// separately and stitching them back together around the zeros, negative zeros
/// first when ascending.
fn radix_sort(v: &mut [f64], ascending: bool) {
    let mut positive: Vec<u64> = Vec::new();
    let mut negative: Vec<u64> = Vec::new();
    let mut zeros = 0;
    let mut negative_zeros = 0;

    for &value in v.iter() {
        if value > 0.0 {
            positive.push(value as u64);
        } else if value < 0.0 {
            negative.push((-value) as u64);
        } else if value.is_sign_negative() {
            negative_zeros += 1;
        } else {
            zeros += 1;
        }
    }

    radix_sort_magnitudes(&mut positive);
    radix_sort_magnitudes(&mut negative);

    let mut out = v.iter_mut();
    let mut place = |value: f64| {
        if let Some(slot) = out.next() {
            *slot = value;
        }
    };

    if ascending {
        negative.iter().rev().for_each(|&m| place(-(m as f64)));
        (0..negative_zeros).for_each(|_| place(-0.0));
        (0..zeros).for_each(|_| place(0.0));
        positive.iter().for_each(|&m| place(m as f64));
    } else {
        positive.iter().rev().for_each(|&m| place(m as f64));
        (0..zeros).for_each(|_| place(0.0));
        (0..negative_zeros).for_each(|_| place(-0.0));
        negative.iter().for_each(|&m| place(-(m as f64)));
    }
}

/// LSD radix sort over 8-bit digits, stopping once the largest value has no digits
/// left.
fn radix_sort_magnitudes(v: &mut Vec<u64>) {
    if v.len() <= 1 {
        return;
    }

    let max = v.iter().copied().max().unwrap_or(0);
    let mut buffer = vec![0u64; v.len()];
    let mut shift = 0u32;

    while shift < u64::BITS && (max >> shift) > 0 {
        let mut counts = RadixCounts {
            data: [0; RADIX_BUCKETS],
        };
        let counts = &mut counts.data;

        v.iter().for_each(|&m| {
            counts[((m >> shift) & 0xff) as usize] += 1;
        });

        // Exclusive prefix sums give each digit's first output slot.
        let mut sum = 0;
        counts.iter_mut().for_each(|count| {
            let c = *count;
            *count = sum;
            sum += c;
        });

        v.iter().for_each(|&m| {
            let digit = ((m >> shift) & 0xff) as usize;
            buffer[counts[digit]] = m;
            counts[digit] += 1;
        });

        std::mem::swap(v, &mut buffer);
        shift += 8;
    }
}

/// Iterative quicksort over the whole slice.
fn quick_sort(v: &mut [f64], ascending: bool) {
    if v.len() < 2 {
        return;
    }

    let mut stack: Vec<(usize, usize)> = vec![(0, v.len() - 1)];

    while let Some((low, high)) = stack.pop() {
        if high <= low {
            continue;
        }
        if high - low < NUMERIC_INSERTION_CUTOFF {
            insertion_sort(v, low, high, ascending);
            continue;
        }

        let p = partition(v, low, high, ascending);

        // Larger side first, so the smaller side is popped next.
        let left = (low, p - 1);
        let right = (p + 1, high);
        if p - low > high - p {
            stack.push(left);
            stack.push(right);
        } else {
            stack.push(right);
            stack.push(left);
        }
    }
}

fn insertion_sort(v: &mut [f64], low: usize, high: usize, ascending: bool) {
    for i in (low + 1)..=high {
        let key = v[i];
        let mut j = i;
        while j > low && out_of_order(v[j - 1], key, ascending) {
            v[j] = v[j - 1];
            j -= 1;
        }
        v[j] = key;
    }
}

/// Median-of-three partition of `[low, high]` (at least three elements).
///
/// After ordering `low`, `mid` and `high` they act as sentinels for the scan, and the
/// pivot is parked at `high - 1`. Returns the pivot's final index.
fn partition(v: &mut [f64], low: usize, high: usize, ascending: bool) -> usize {
    debug_assert!(high - low >= 2);
    let mid = low + ((high - low) >> 1);

    if out_of_order(v[low], v[mid], ascending) {
        v.swap(low, mid);
    }
    if out_of_order(v[low], v[high], ascending) {
        v.swap(low, high);
    }
    if out_of_order(v[mid], v[high], ascending) {
        v.swap(mid, high);
    }

    v.swap(mid, high - 1);
    let pivot = v[high - 1];

    let mut i = low;
    let mut j = high - 1;
    loop {
        i += 1;
        while out_of_order(pivot, v[i], ascending) {
            i += 1;
        }
        j -= 1;
        while out_of_order(v[j], pivot, ascending) {
            j -= 1;
        }
        if i >= j {
            break;
        }
        v.swap(i, j);
    }

    v.swap(i, high - 1);
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_stops_at_first_nan() {
        let profile = NumericProfile::scan(&[2.0, -3.0, f64::NAN, 100.0, 0.5]);
        assert!(profile.has_nan);
        assert_eq!(profile.min_value, -3.0);
        assert_eq!(profile.max_value, 2.0);
        assert!(profile.all_integers);
        assert_eq!(profile.length, 5);
    }

    #[test]
    fn huge_and_infinite_values_are_not_integers() {
        assert!(!NumericProfile::scan(&[1.0, 1e300, 2.0, 3.0]).all_integers);
        assert!(!NumericProfile::scan(&[1.0, f64::INFINITY, 2.0, 3.0]).all_integers);
        assert!(NumericProfile::scan(&[1.0, -0.0, 2.0, 3.0]).all_integers);
    }

    #[test]
    fn radix_magnitudes_cover_every_byte() {
        let mut v = vec![u64::MAX >> 11, 1, 0x0100, 0xff, 0x0001_0000_0000, 42, 0x0100];
        let mut expected = v.clone();
        expected.sort_unstable();
        radix_sort_magnitudes(&mut v);
        assert_eq!(v, expected);
    }

    #[test]
    fn partition_leaves_pivot_in_place() {
        for ascending in [true, false] {
            let mut v = vec![5.0, 9.0, 1.0, 7.0, 3.0, 8.0, 2.0, 6.0, 4.0, 0.0];
            let high = v.len() - 1;
            let p = partition(&mut v, 0, high, ascending);
            let pivot = v[p];
            assert!(v[..p].iter().all(|&x| !out_of_order(x, pivot, ascending)));
            assert!(v[p + 1..].iter().all(|&x| !out_of_order(pivot, x, ascending)));
        }
    }

    #[test]
    fn dispatch_by_shape() {
        let dense: Vec<f64> = (0..50).map(|i| (i % 7) as f64).collect();
        assert_eq!(choose_strategy(&dense), Strategy::Counting);

        let sparse: Vec<f64> = (0..200).map(|i| (i * 10_007) as f64).collect();
        assert_eq!(choose_strategy(&sparse), Strategy::Radix);

        let small_sparse: Vec<f64> = (0..50).map(|i| (i * 10_007) as f64).collect();
        assert_eq!(choose_strategy(&small_sparse), Strategy::QuickSort);

        assert_eq!(choose_strategy(&[1.0, f64::NAN]), Strategy::NanSegregated);
        assert_eq!(choose_strategy(&[2.0, 1.0]), Strategy::Inline2);
        assert_eq!(choose_strategy(&[]), Strategy::Trivial);
    }
}
