//! Dual-pivot quicksort.
//!
//! Two pivots `P1 <= P2` split a range into `< P1`, `P1..=P2` and `> P2`. The middle
//! region soaks up runs of pivot-equal values, which makes this variant cheaper than
//! single-pivot quicksort on inputs with many duplicates.

use crate::algo::insertion::apply_insertion_sort_if_needed;
use crate::core::{SortOptions, natural_order};
use std::cmp::Ordering;

pub const DEFAULT_INSERTION_SORT_THRESHOLD: usize = 10;

/// Index of the median of `v[a]`, `v[b]` and `v[c]`.
fn median_index<T, F>(v: &[T], a: usize, b: usize, c: usize, compare: &mut F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    if compare(&v[a], &v[b]) == Ordering::Less {
        if compare(&v[b], &v[c]) == Ordering::Less {
            b
        } else if compare(&v[a], &v[c]) == Ordering::Less {
            c
        } else {
            a
        }
    } else if compare(&v[a], &v[c]) == Ordering::Less {
        a
    } else if compare(&v[b], &v[c]) == Ordering::Less {
        c
    } else {
        b
    }
}

/// Moves the two pivots to `low` and `high`, ordered so that `v[low] <= v[high]`.
fn select_pivots<T, F>(v: &mut [T], low: usize, high: usize, compare: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let gap = ((high - low) / 3).max(1);

    let left = median_index(v, low, low + gap, (low + 2 * gap).min(high), compare);
    let mut right = median_index(
        v,
        low.max(high.saturating_sub(2 * gap)),
        high - gap,
        high,
        compare,
    );

    v.swap(low, left);
    // Follow the right pivot if the first swap moved it.
    if right == low {
        right = left;
    } else if right == left {
        right = low;
    }
    v.swap(high, right);

    if compare(&v[low], &v[high]) == Ordering::Greater {
        v.swap(low, high);
    }
}

/// Three-way partition of `[low, high]` (at least two elements).
///
/// Returns the final positions `(lp, rp)` of the pivots, `lp < rp`, with
/// `[low, lp) < v[lp] <= (lp, rp) <= v[rp] < (rp, high]`.
fn partition<T, F>(v: &mut [T], low: usize, high: usize, compare: &mut F) -> (usize, usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    debug_assert!(low < high);
    select_pivots(v, low, high, compare);

    let mut left = low + 1;
    let mut right = high - 1;
    let mut current = left;

    while current <= right {
        if compare(&v[current], &v[low]) == Ordering::Less {
            v.swap(current, left);
            left += 1;
        } else if compare(&v[current], &v[high]) == Ordering::Greater {
            while current < right && compare(&v[right], &v[high]) == Ordering::Greater {
                right -= 1;
            }
            v.swap(current, right);
            right -= 1;

            if compare(&v[current], &v[low]) == Ordering::Less {
                v.swap(current, left);
                left += 1;
            }
        }
        current += 1;
    }

    left -= 1;
    right += 1;
    v.swap(low, left);
    v.swap(high, right);

    (left, right)
}

/// Sorts `[low, high]`.
///
/// The two smaller regions are handled by nested calls and the largest by the loop,
/// so the call depth stays logarithmic.
fn sort_range<T, F>(v: &mut [T], low: usize, high: usize, compare: &mut F, threshold: usize)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let (mut low, mut high) = (low, high);

    loop {
        if low >= high || apply_insertion_sort_if_needed(v, low, high, compare, threshold) {
            return;
        }

        let (lp, rp) = partition(v, low, high, compare);
        // With equal pivots the middle region holds only pivot-equal values.
        let pivots_equal = compare(&v[lp], &v[rp]) == Ordering::Equal;

        let regions = [
            (lp > low).then(|| (low, lp - 1)),
            (rp > lp + 2 && !pivots_equal).then(|| (lp + 1, rp - 1)),
            (rp < high).then(|| (rp + 1, high)),
        ];

        let largest = regions
            .iter()
            .enumerate()
            .filter_map(|(i, region)| region.map(|(l, h)| (i, h - l)))
            .max_by_key(|&(_, span)| span)
            .map(|(i, _)| i);

        for (i, region) in regions.iter().enumerate() {
            if Some(i) == largest {
                continue;
            }
            if let Some((l, h)) = *region {
                sort_range(v, l, h, compare, threshold);
            }
        }

        match largest.and_then(|i| regions[i]) {
            Some((l, h)) => {
                low = l;
                high = h;
            }
            None => return,
        }
    }
}

/// Returns a sorted copy of `v` using the default comparator.
///
/// # Examples
///
/// ```
/// use sortkit::dual_pivot_quick_sort;
///
/// let v = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3];
/// assert_eq!(dual_pivot_quick_sort(&v), vec![1, 1, 2, 3, 3, 4, 5, 5, 6, 9]);
/// ```
pub fn dual_pivot_quick_sort<T: Clone + PartialOrd>(v: &[T]) -> Vec<T> {
    dual_pivot_quick_sort_with(v, natural_order, &SortOptions::default())
}

/// Returns a copy of `v` sorted by `compare`. Not stable.
pub fn dual_pivot_quick_sort_by<T, F>(v: &[T], compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    dual_pivot_quick_sort_with(v, compare, &SortOptions::default())
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
pub fn dual_pivot_quick_sort_with<T, F>(v: &[T], mut compare: F, options: &SortOptions) -> Vec<T>
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
pub fn dual_pivot_quick_sort_in_place<T: PartialOrd>(v: &mut [T]) {
    dual_pivot_quick_sort_in_place_by(v, natural_order);
}

/// Sorts `v` in place by `compare`. Not stable.
pub fn dual_pivot_quick_sort_in_place_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() > 1 {
        let high = v.len() - 1;
        sort_range(v, 0, high, &mut compare, DEFAULT_INSERTION_SORT_THRESHOLD);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partition_places_pivots() {
        let mut cmp = natural_order::<i32>;
        let mut v = vec![9, 3, 7, 1, 8, 2, 6, 4, 5, 0, 7, 3];
        let high = v.len() - 1;
        let (lp, rp) = partition(&mut v, 0, high, &mut cmp);

        assert!(lp < rp);
        assert!(v[..lp].iter().all(|x| *x < v[lp]));
        assert!(v[lp + 1..rp].iter().all(|x| v[lp] <= *x && *x <= v[rp]));
        assert!(v[rp + 1..].iter().all(|x| *x > v[rp]));
    }

    #[test]
    fn two_element_partition() {
        let mut cmp = natural_order::<i32>;
        let mut v = vec![2, 1];
        assert_eq!(partition(&mut v, 0, 1, &mut cmp), (0, 1));
        assert_eq!(v, vec![1, 2]);
    }

    #[test]
    fn in_place_matches_copying_sort() {
        let input: Vec<i32> = (0..300).map(|i| (i * 53) % 41).collect();
        let expected = dual_pivot_quick_sort(&input);

        let mut v = input.clone();
        dual_pivot_quick_sort_in_place(&mut v);
        assert_eq!(v, expected);

        let mut w = input;
        dual_pivot_quick_sort_in_place_by(&mut w, |a: &i32, b: &i32| b.cmp(a));
        assert_eq!(w, expected.into_iter().rev().collect::<Vec<_>>());
    }
}
