//! Top-down merge sort. The stability reference of the crate: ties always resolve
//! to the element from the left half.

use crate::core::natural_order;
use std::cmp::Ordering;

fn sort_owned<T, F>(v: &[T], compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    if v.len() <= 1 {
        return v.to_vec();
    }

    let mid = v.len() / 2;
    let left = sort_owned(&v[..mid], compare);
    let right = sort_owned(&v[mid..], compare);
    merge(left, right, compare)
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    while let (Some(l), Some(r)) = (left.peek(), right.peek()) {
        let next = if compare(l, r) == Ordering::Greater {
            right.next()
        } else {
            left.next()
        };
        out.extend(next);
    }

    out.extend(left);
    out.extend(right);
    out
}

/// Returns a stably sorted copy of `v` using the default comparator.
pub fn merge_sort<T: Clone + PartialOrd>(v: &[T]) -> Vec<T> {
    merge_sort_by(v, natural_order)
}

/// Returns a copy of `v` stably sorted by `compare`.
///
/// Always O(n log n) comparisons and O(n) extra space.
///
/// # Examples
///
/// ```
/// use sortkit::core::reverse_order;
/// use sortkit::merge_sort_by;
///
/// assert_eq!(merge_sort_by(&[1, 3, 2, 4, 5], reverse_order), vec![5, 4, 3, 2, 1]);
/// ```
pub fn merge_sort_by<T, F>(v: &[T], mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    sort_owned(v, &mut compare)
}
