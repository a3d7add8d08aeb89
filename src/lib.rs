//! # Sortkit
//!
//! `sortkit` is a small sorting engine: a family of comparator-driven sorts sharing one
//! range-validation and insertion-sort-fallback protocol, plus an adaptive sort for
//! `f64` sequences that picks its algorithm from the shape of the data.
//!
//! ## Key Features
//!
//! - **Comparator-driven**: every generic algorithm takes any
//!   `FnMut(&T, &T) -> Ordering`; the plain entry points default to [`crate::core::natural_order`].
//! - **Lenient ranges**: sub-range bounds are clamped to the sequence rather than rejected,
//!   so a caller cannot cause an out-of-bounds access through the API.
//! - **Bounded stack use**: quicksort keeps its pending ranges on an explicit stack and
//!   always continues with the smaller side.
//! - **Adaptive numeric sort**: [`ultra_number_sort`] routes integers to counting or radix
//!   sort, everything else to an iterative quicksort, and always puts NaNs last.
//!
//! ## Usage
//!
//! ```rust
//! use sortkit::prelude::*;
//!
//! let v = vec![3, 1, 4, 1, 5, 9, 2, 6];
//! assert_eq!(quick_sort(&v), vec![1, 1, 2, 3, 4, 5, 6, 9]);
//!
//! // Stable sort by a key.
//! let people = vec![("bob", 30), ("amy", 25), ("cat", 30)];
//! let by_age = merge_sort_by(&people, |a, b| a.1.cmp(&b.1));
//! assert_eq!(by_age, vec![("amy", 25), ("bob", 30), ("cat", 30)]);
//!
//! // Only sort indices 1..=3.
//! let partial = quick_sort_with(&[5, 3, 1, 4, 2], natural_order, &SortOptions::new().range(1, 3));
//! assert_eq!(partial, vec![5, 1, 3, 4, 2]);
//! ```
//!
//! ## Choosing an Algorithm
//!
//! - Need stability: [`merge_sort`] or [`tim_sort`].
//! - Many duplicates: [`dual_pivot_quick_sort`].
//! - Plain `f64` data: [`ultra_number_sort`].
//!
//! Tie-break order of the unstable sorts is unspecified.

pub mod algo;
pub mod core;
pub mod numeric;

pub use crate::algo::{
    dual_pivot_quick_sort, dual_pivot_quick_sort_by, dual_pivot_quick_sort_in_place,
    dual_pivot_quick_sort_in_place_by, dual_pivot_quick_sort_with, insertion_sort,
    insertion_sort_by, insertion_sort_in_place, insertion_sort_in_place_by, insertion_sort_with,
    merge_sort, merge_sort_by, quick_sort, quick_sort_by, quick_sort_in_place,
    quick_sort_in_place_by, quick_sort_with, tim_sort, tim_sort_by, tim_sort_in_place,
    tim_sort_in_place_by, tim_sort_with,
};
pub use crate::core::{SortOptions, SortRange, validate_range};
pub use crate::numeric::{ultra_number_sort, ultra_number_sort_in_place};

pub mod prelude {
    pub use crate::algo::{
        dual_pivot_quick_sort, dual_pivot_quick_sort_by, dual_pivot_quick_sort_with,
        insertion_sort, insertion_sort_by, insertion_sort_with, merge_sort, merge_sort_by,
        quick_sort, quick_sort_by, quick_sort_with, tim_sort, tim_sort_by, tim_sort_with,
    };
    pub use crate::core::{SortOptions, natural_order, reverse_order, validate_range};
    pub use crate::numeric::ultra_number_sort;
}
