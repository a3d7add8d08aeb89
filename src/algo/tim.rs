//! Simplified tim sort: fixed-length insertion-sorted runs merged bottom-up.
//!
//! Runs are `min_run` long rather than discovered from the data, and merges proceed in
//! passes of doubling width. Stable, O(n log n) in the worst case.

use crate::algo::insertion::insertion_sort_range;
use crate::core::{SortOptions, natural_order};
use std::cmp::Ordering;

pub const MIN_RUN: usize = 32;

/// Run length for a range of `n` elements.
///
/// Keeps the top bits of `n` below [`MIN_RUN`] and adds one if any shifted-out bit
/// was set, so `n / min_run` is close to, but not above, a power of two.
pub fn min_run_length(mut n: usize) -> usize {
    let mut r = 0;
    while n >= MIN_RUN {
        r |= n & 1;
        n >>= 1;
    }
    n + r
}

/// Merges the sorted runs `[start, mid]` and `[mid + 1, end]`, preferring the left
/// run on ties.
fn merge<T, F>(v: &mut [T], start: usize, mid: usize, end: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let left = v[start..=mid].to_vec();
    let right = v[mid + 1..=end].to_vec();

    let (mut i, mut j, mut k) = (0, 0, start);
    while i < left.len() && j < right.len() {
        if compare(&left[i], &right[j]) == Ordering::Greater {
            v[k] = right[j].clone();
            j += 1;
        } else {
            v[k] = left[i].clone();
            i += 1;
        }
        k += 1;
    }

    for item in left[i..].iter().chain(&right[j..]) {
        v[k] = item.clone();
        k += 1;
    }
}

fn sort_range<T, F>(v: &mut [T], low: usize, high: usize, compare: &mut F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if low >= high {
        return;
    }

    let n = high - low + 1;
    let min_run = min_run_length(n);

    let mut run_start = low;
    while run_start <= high {
        let run_end = (run_start + min_run - 1).min(high);
        insertion_sort_range(v, compare, run_start, run_end);
        run_start += min_run;
    }

    let mut size = min_run;
    while size < n {
        let mut left = low;
        while left <= high {
            let mid = left + size - 1;
            let right = (left + 2 * size - 1).min(high);
            if mid < right {
                merge(v, left, mid, right, compare);
            }
            left += 2 * size;
        }
        size *= 2;
    }
}

/// Returns a stably sorted copy of `v` using the default comparator.
///
/// # Examples
///
/// ```
/// use sortkit::tim_sort;
///
/// assert_eq!(tim_sort(&["b", "a", "c"]), vec!["a", "b", "c"]);
/// ```
pub fn tim_sort<T: Clone + PartialOrd>(v: &[T]) -> Vec<T> {
    tim_sort_with(v, natural_order, &SortOptions::default())
}

/// Returns a copy of `v` stably sorted by `compare`.
pub fn tim_sort_by<T, F>(v: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    tim_sort_with(v, compare, &SortOptions::default())
}

/// Returns a copy of `v` where the range selected by `options` is stably sorted by
/// `compare`.
///
/// # Arguments
///
/// * `v` - The sequence to sort. It is not modified.
/// * `compare` - Ordering used for every comparison.
/// * `options` - Range to sort (clamped). The run length is derived from the range
///   length, so `options.insertion_threshold` is ignored.
///
/// # Returns
///
/// A new vector, stably sorted inside the range and identical to `v` outside it.
pub fn tim_sort_with<T, F>(v: &[T], mut compare: F, options: &SortOptions) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut result = v.to_vec();
    if let Some((low, high)) = options.resolve_range(v.len()).bounds() {
        sort_range(&mut result, low, high, &mut compare);
    }
    result
}

/// Stably sorts `v` in place using the default comparator.
pub fn tim_sort_in_place<T: Clone + PartialOrd>(v: &mut [T]) {
    tim_sort_in_place_by(v, natural_order);
}

/// Stably sorts `v` in place by `compare`.
pub fn tim_sort_in_place_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() > 1 {
        let high = v.len() - 1;
        sort_range(v, 0, high, &mut compare);
    }
}
