//! Sorting algorithms.
//!
//! Every algorithm sorts a `&mut [T]` in place and is exposed both as a free function and,
//! for the comparison sorts, as a configurable [`Sorter`](crate::core::Sorter):
//! - **Bubble sort**: [`bubble_sort`], [`BubbleSorter`].
//! - **Selection sort**: [`selection_sort`], [`SelectionSorter`].
//! - **Insertion sort**: [`insertion_sort`], [`InsertionSorter`].
//! - **Merge sort**: [`merge_sort`], [`merge_sort_bottom_up`], [`MergeSorter`].
//! - **Counting sort**: [`counting_sort`], [`counting_sort_auto`].

mod bubble;
mod counting;
mod insertion;
mod merge;
mod selection;

pub use bubble::{BubbleSorter, bubble_sort};
pub use counting::{SMALL_DOMAIN_BUCKETS, counting_sort, counting_sort_auto};
pub use insertion::{InsertionSorter, insertion_sort};
pub use merge::{MergeSorter, MergeStrategy, merge_sort, merge_sort_bottom_up};
pub use selection::{SelectionSorter, selection_sort};
