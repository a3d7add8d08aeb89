//! Insertion sort: the standalone algorithm and the small-range fallback used by
//! every divide-and-conquer sort in this crate.

use crate::core::{SortOptions, natural_order};
use std::cmp::Ordering;

/// Sorts the inclusive range `[start, end]` of `v` in place.
///
/// Each element is shifted left while its predecessor compares strictly greater,
/// so equal elements never pass each other and the sort is stable.
/// O(n²) in the worst case, O(n) on already sorted input.
///
/// Bounds past the end of `v` are clamped; an empty or inverted range is a no-op.
pub fn insertion_sort_range<T, F>(v: &mut [T], compare: &mut F, start: usize, end: usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.is_empty() {
        return;
    }
    let end = end.min(v.len() - 1);
    if start >= end {
        return;
    }

    for i in (start + 1)..=end {
        let mut j = i;
        while j > start && compare(&v[j - 1], &v[j]) == Ordering::Greater {
            v.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Insertion-sorts `[low, high]` if it holds at most `threshold` elements.
///
/// Returns `true` if the range was sorted here, `false` (without touching `v`)
/// if the caller should keep dividing it.
#[inline]
pub fn apply_insertion_sort_if_needed<T, F>(
    v: &mut [T],
    low: usize,
    high: usize,
    compare: &mut F,
    threshold: usize,
) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    if high < low || high - low + 1 <= threshold {
        insertion_sort_range(v, compare, low, high);
        return true;
    }
    false
}

/// Returns a sorted copy of `v` using the default comparator.
///
/// # Examples
///
/// ```
/// use sortkit::insertion_sort;
///
/// assert_eq!(insertion_sort(&[3, 1, 2]), vec![1, 2, 3]);
/// ```
pub fn insertion_sort<T: Clone + PartialOrd>(v: &[T]) -> Vec<T> {
    insertion_sort_with(v, natural_order, &SortOptions::default())
}

/// Returns a copy of `v` sorted by `compare`.
pub fn insertion_sort_by<T, F>(v: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort_with(v, compare, &SortOptions::default())
}

/// Returns a copy of `v` where only the range selected by `options` is sorted.
///
/// # Arguments
///
/// * `v` - The sequence to sort. It is not modified.
/// * `compare` - Ordering used for every comparison.
/// * `options` - Range to sort (clamped). The insertion threshold has no effect here.
///
/// # Returns
///
/// A new vector, stably sorted inside the range and identical to `v` outside it.
pub fn insertion_sort_with<T, F>(v: &[T], mut compare: F, options: &SortOptions) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut result = v.to_vec();
    if let Some((low, high)) = options.resolve_range(v.len()).bounds() {
        insertion_sort_range(&mut result, &mut compare, low, high);
    }
    result
}

/// Sorts `v` in place using the default comparator.
pub fn insertion_sort_in_place<T: PartialOrd>(v: &mut [T]) {
    insertion_sort_in_place_by(v, natural_order);
}

/// Sorts `v` in place by `compare`.
pub fn insertion_sort_in_place_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() > 1 {
        let end = v.len() - 1;
        insertion_sort_range(v, &mut compare, 0, end);
    }
}
