//! Core contracts shared by every algorithm in the crate.
//!
//! This module defines:
//! - The comparator contract: any `FnMut(&T, &T) -> Ordering`, with [`natural_order`]
//!   as the default and [`signed`] to adapt `i32`-returning comparators.
//! - [`SortRange`] and [`validate_range`]: lenient clamping of inclusive sub-ranges.
//! - [`SortOptions`]: per-call range and insertion-sort threshold.

use std::cmp::Ordering;

/// Sentinel `end_index` reported for an empty sequence.
pub const EMPTY_RANGE_END: isize = -1;

/// Default comparator: orders by `<` and `>`.
///
/// Values that are neither less nor greater (equal values, or incomparable ones
/// such as `NaN` against anything) compare as [`Ordering::Equal`].
///
/// # Examples
///
/// ```
/// use std::cmp::Ordering;
/// use sortkit::core::natural_order;
///
/// assert_eq!(natural_order(&1, &2), Ordering::Less);
/// assert_eq!(natural_order(&f64::NAN, &1.0), Ordering::Equal);
/// ```
#[inline]
pub fn natural_order<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Descending counterpart of [`natural_order`].
#[inline]
pub fn reverse_order<T: PartialOrd + ?Sized>(a: &T, b: &T) -> Ordering {
    natural_order(b, a)
}

/// Adapts a comparator returning a signed number (negative, zero, positive) into
/// an [`Ordering`] comparator.
///
/// # Examples
///
/// ```
/// use sortkit::core::signed;
/// use sortkit::merge_sort_by;
///
/// let by_len = signed(|a: &&str, b: &&str| a.len() as i32 - b.len() as i32);
/// assert_eq!(merge_sort_by(&["aaa", "a", "aa"], by_len), vec!["a", "aa", "aaa"]);
/// ```
pub fn signed<T, F>(mut compare: F) -> impl FnMut(&T, &T) -> Ordering
where
    F: FnMut(&T, &T) -> i32,
{
    move |a: &T, b: &T| compare(a, b).cmp(&0)
}

/// An inclusive, validated sub-range of a sequence.
///
/// When `should_sort` is `true`, `0 <= start_index <= end_index <= len - 1`.
/// An empty sequence yields `{ start_index: 0, end_index: -1, should_sort: false }`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortRange {
    pub start_index: isize,
    pub end_index: isize,
    pub should_sort: bool,
}

impl SortRange {
    /// Clamps raw bounds against a sequence of `len` elements.
    pub fn clamp(len: usize, start: isize, end: isize) -> Self {
        if len == 0 {
            return Self {
                start_index: 0,
                end_index: EMPTY_RANGE_END,
                should_sort: false,
            };
        }

        // Zero-sized elements allow lengths beyond `isize::MAX`.
        let last = isize::try_from(len - 1).unwrap_or(isize::MAX);
        let start_index = start.clamp(0, last);
        let end_index = end.clamp(start_index, last);

        Self {
            start_index,
            end_index,
            should_sort: end_index >= start_index,
        }
    }

    /// The bounds as indices, or `None` if there is nothing to sort.
    #[inline]
    pub fn bounds(&self) -> Option<(usize, usize)> {
        if self.should_sort {
            Some((self.start_index as usize, self.end_index as usize))
        } else {
            None
        }
    }

    /// Number of elements covered by the range.
    #[inline]
    pub fn len(&self) -> usize {
        self.bounds().map_or(0, |(low, high)| high - low + 1)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Clamps `[start, end]` (inclusive) to the bounds of `sequence`.
///
/// Never fails: negative, out-of-bounds and inverted bounds are corrected rather
/// than rejected.
///
/// # Examples
///
/// ```
/// use sortkit::core::{validate_range, SortRange};
///
/// let range = validate_range(&[1, 2, 3, 4, 5], -1, 10);
/// assert_eq!(range, SortRange { start_index: 0, end_index: 4, should_sort: true });
///
/// let empty: [i32; 0] = [];
/// assert!(!validate_range(&empty, 0, 0).should_sort);
/// ```
pub fn validate_range<T>(sequence: &[T], start: isize, end: isize) -> SortRange {
    SortRange::clamp(sequence.len(), start, end)
}

/// Per-call knobs accepted by the `*_with` entry points.
///
/// Unset fields resolve to the algorithm's own defaults at call entry: the whole
/// sequence for the bounds, and the algorithm's built-in insertion-sort threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortOptions {
    pub start: Option<isize>,
    pub end: Option<isize>,
    pub insertion_threshold: Option<usize>,
}

impl SortOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the sort to the inclusive range `[start, end]`.
    pub fn range(mut self, start: isize, end: isize) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    pub fn start(mut self, start: isize) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: isize) -> Self {
        self.end = Some(end);
        self
    }

    /// Sub-ranges of at most `threshold` elements are insertion-sorted.
    pub fn insertion_threshold(mut self, threshold: usize) -> Self {
        self.insertion_threshold = Some(threshold);
        self
    }

    /// Resolves the requested bounds against `len` elements.
    pub(crate) fn resolve_range(&self, len: usize) -> SortRange {
        let start = self.start.unwrap_or(0);
        let end = self.end.unwrap_or(len as isize - 1);
        SortRange::clamp(len, start, end)
    }

    /// Resolves the insertion-sort threshold, never below 1.
    pub(crate) fn resolve_threshold(&self, default: usize) -> usize {
        self.insertion_threshold.unwrap_or(default).max(1)
    }
}
