//! Single-pivot quicksort with median-of-three pivots and Hoare partitioning.
//!
//! Pending ranges live on an explicit `(low, high)` stack. After every partition the
//! larger side is pushed and the loop continues on the smaller one, so at most
//! O(log n) ranges are pending even when the running time degrades to O(n²).

use crate::algo::insertion::apply_insertion_sort_if_needed;
use crate::core::{SortOptions, natural_order};
use std::cmp::Ordering;

pub const DEFAULT_INSERTION_SORT_THRESHOLD: usize = 10;

/// Returns a clone of the median of `v[a]`, `v[b]` and `v[c]`.
///
/// Uses at most three pairwise comparisons and never reorders the triple.
fn median_of_three<T, F>(v: &[T], a: usize, b: usize, c: usize, compare: &mut F) -> T
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if compare(&v[a], &v[b]) == Ordering::Less {
        if compare(&v[b], &v[c]) == Ordering::Less {
            return v[b].clone();
        }
        if compare(&v[a], &v[c]) == Ordering::Less {
            return v[c].clone();
        }
        return v[a].clone();
    }
    if compare(&v[a], &v[c]) == Ordering::Less {
        return v[a].clone();
    }
    if compare(&v[b], &v[c]) == Ordering::Less {
        return v[c].clone();
    }
    v[b].clone()
}

/// Hoare partition of `[low, high]` (at least two elements).
///
/// Returns `p` with `low <= p < high` such that every element of `[low, p]` is not
/// greater than every element of `[p + 1, high]`.
fn partition<T, F>(v: &mut [T], low: usize, high: usize, compare: &mut F) -> usize
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(low < high);
    let pivot = median_of_three(v, low, low + (high - low) / 2, high, compare);
    let mut left = low;
    let mut right = high;

    loop {
        // The bounds checks only matter for comparators that are not a total order.
        while left < high && compare(&v[left], &pivot) == Ordering::Less {
            left += 1;
        }
        while right > low && compare(&v[right], &pivot) == Ordering::Greater {
            right -= 1;
        }

        if left >= right {
            return right.min(high - 1);
        }

        v.swap(left, right);
        left += 1;
        right -= 1;
    }
}

fn sort_range<T, F>(v: &mut [T], low: usize, high: usize, compare: &mut F, threshold: usize)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut pending: Vec<(usize, usize)> = Vec::new();
    let (mut low, mut high) = (low, high);

    loop {
        if low < high && !apply_insertion_sort_if_needed(v, low, high, compare, threshold) {
            let p = partition(v, low, high, compare);

            // Continue with the smaller side, park the larger one.
            if p - low < high - p - 1 {
                pending.push((p + 1, high));
                high = p;
            } else {
                pending.push((low, p));
                low = p + 1;
            }
            continue;
        }

        match pending.pop() {
            Some((l, h)) => {
                low = l;
                high = h;
            }
            None => break,
        }
    }
}

/// Returns a sorted copy of `v` using the default comparator.
///
/// # Examples
///
/// ```
/// use sortkit::quick_sort;
///
/// let v = [3, 1, 4, 1, 5, 9, 2, 6];
/// assert_eq!(quick_sort(&v), vec![1, 1, 2, 3, 4, 5, 6, 9]);
/// ```
pub fn quick_sort<T: Clone + PartialOrd>(v: &[T]) -> Vec<T> {
    quick_sort_with(v, natural_order, &SortOptions::default())
}

/// Returns a copy of `v` sorted by `compare`. Not stable.
pub fn quick_sort_by<T, F>(v: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    quick_sort_with(v, compare, &SortOptions::default())
}

/// Returns a copy of `v` where the range selected by `options` is sorted by
/// `compare`.
///
/// # Arguments
///
/// * `v` - The sequence to sort. It is not modified.
/// * `compare` - Ordering used for every comparison.
/// * `options` - Range to sort (clamped) and the size at or below which a range is
///   insertion-sorted instead of partitioned (default 10).
///
/// # Returns
///
/// A new vector, sorted inside the range and identical to `v` outside it.
///
/// # Examples
///
/// ```
/// use sortkit::core::{natural_order, SortOptions};
/// use sortkit::quick_sort_with;
///
/// let sorted = quick_sort_with(&[5, 3, 1, 4, 2], natural_order, &SortOptions::new().range(1, 3));
/// assert_eq!(sorted, vec![5, 1, 3, 4, 2]);
/// ```
pub fn quick_sort_with<T, F>(v: &[T], mut compare: F, options: &SortOptions) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let mut result = v.to_vec();
    let threshold = options.resolve_threshold(DEFAULT_INSERTION_SORT_THRESHOLD);

    if let Some((low, high)) = options.resolve_range(v.len()).bounds() {
        sort_range(&mut result, low, high, &mut compare, threshold);
    }

    result
}

/// Sorts `v` in place using the default comparator.
pub fn quick_sort_in_place<T: Clone + PartialOrd>(v: &mut [T]) {
    quick_sort_in_place_by(v, natural_order);
}

/// Sorts `v` in place by `compare`. Not stable.
pub fn quick_sort_in_place_by<T, F>(v: &mut [T], mut compare: F)
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() > 1 {
        let high = v.len() - 1;
        sort_range(v, 0, high, &mut compare, DEFAULT_INSERTION_SORT_THRESHOLD);
    }
}
