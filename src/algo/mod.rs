//! Comparator-driven sorting algorithms.
//!
//! Every algorithm here shares two leaves:
//! - Range validation from [`crate::core`]: requested bounds are clamped, never rejected.
//! - [`insertion::apply_insertion_sort_if_needed`]: the small-range fallback of the
//!   divide-and-conquer sorts.
//!
//! | Algorithm | Stable | Extra space | Range / threshold |
//! |---|---|---|---|
//! | [`insertion`] | yes | O(1) | range |
//! | [`quick`] | no | O(log n) | both |
//! | [`dual_pivot`] | no | O(log n) | both |
//! | [`merge`] | yes | O(n) | neither |
//! | [`tim`] | yes | O(n) | range |
//!
//! Each algorithm comes as `name` (default comparator), `name_by` (custom comparator)
//! and, where it accepts a range, `name_with` taking [`crate::core::SortOptions`].
//! All of them return a new `Vec`; the `*_in_place` variants sort a slice the caller
//! owns.

pub mod dual_pivot;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod tim;

pub use dual_pivot::{
    dual_pivot_quick_sort, dual_pivot_quick_sort_by, dual_pivot_quick_sort_in_place,
    dual_pivot_quick_sort_in_place_by, dual_pivot_quick_sort_with,
};
pub use insertion::{
    apply_insertion_sort_if_needed, insertion_sort, insertion_sort_by, insertion_sort_in_place,
    insertion_sort_in_place_by, insertion_sort_range, insertion_sort_with,
};
pub use merge::{merge_sort, merge_sort_by};
pub use quick::{quick_sort, quick_sort_by, quick_sort_in_place, quick_sort_in_place_by, quick_sort_with};
pub use tim::{tim_sort, tim_sort_by, tim_sort_in_place, tim_sort_in_place_by, tim_sort_with};
