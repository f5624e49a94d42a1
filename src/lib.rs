//! # Classort
//!
//! `classort` is a small library of classical sorting algorithms: bubble, selection,
//! insertion, merge and counting sort. Each one is an independent entry point with its
//! own complexity profile, and all of them share a single ownership contract: they sort
//! a caller-provided `&mut [T]` **in place**.
//!
//! ## Key Features
//!
//! - **One Contract**: Every algorithm takes `&mut [T]` and leaves it sorted ascending.
//!   Merge sort allocates its auxiliary buffers internally and writes the result back.
//! - **Natural Ordering**: Comparison sorts require `T: Ord`. Types without a total order
//!   are rejected at compile time.
//! - **Typed Failures**: [`counting_sort`] validates its bounded integer domain up front and
//!   reports violations as a [`CountingSortError`] without touching the input.
//! - **Configurable Sorters**: The [`Sorter`] trait and its implementors
//!   ([`BubbleSorter`], [`SelectionSorter`], [`InsertionSorter`], [`MergeSorter`]) expose
//!   optional variants such as early-exit bubble sort or bottom-up merge sort.
//!
//! ## Usage
//!
//! ### Basic Usage
//!
//! ```rust
//! use classort::{bubble_sort, merge_sort};
//!
//! let mut data = vec![1, 1, 4, 2, 2, 3, 7];
//! bubble_sort(&mut data);
//! assert_eq!(data, vec![1, 1, 2, 2, 3, 4, 7]);
//!
//! let mut data = vec![5, 3, 8, 1];
//! merge_sort(&mut data);
//! assert_eq!(data, vec![1, 3, 5, 8]);
//! ```
//!
//! ### Bounded Integers
//!
//! ```rust
//! use classort::{counting_sort, CountingSortError};
//!
//! let mut data = vec![1, 1, 4, 2, 2, 3, 7];
//! counting_sort(&mut data, 7).unwrap();
//! assert_eq!(data, vec![1, 1, 2, 2, 3, 4, 7]);
//!
//! let mut bad = vec![1, 8];
//! assert!(matches!(
//!     counting_sort(&mut bad, 7),
//!     Err(CountingSortError::ValueOutOfRange { position: 1, .. })
//! ));
//! ```
//!
//! ### Picking an Algorithm at Runtime
//!
//! ```rust
//! use classort::{Algorithm, COMPARISON_ALGORITHMS};
//!
//! for algo in COMPARISON_ALGORITHMS {
//!     let mut data = vec!["pear", "apple", "fig"];
//!     algo.sort(&mut data);
//!     assert_eq!(data, vec!["apple", "fig", "pear"]);
//! }
//! ```
//!
//! ## Performance Characteristics
//!
//! | Algorithm | Time | Extra space | Stable |
//! |---|---|---|---|
//! | Bubble | O(N²) | O(1) | yes |
//! | Selection | O(N²) comparisons, O(N) swaps | O(1) | no |
//! | Insertion | O(N²), O(N) on sorted input | O(1) | yes |
//! | Merge | O(N log N) | O(N) | yes |
//! | Counting | O(N + K) | O(K) | keys only |
//!
//! ## Logging
//!
//! Entry points emit [`tracing`] events (`trace` for every call, `debug` for counting sort
//! bucket allocation and rejected input). The crate never installs a subscriber.

pub mod algo;
pub mod core;
pub mod error;

pub use algo::{
    BubbleSorter, InsertionSorter, MergeSorter, MergeStrategy, SMALL_DOMAIN_BUCKETS,
    SelectionSorter, bubble_sort, counting_sort, counting_sort_auto, insertion_sort, merge_sort,
    merge_sort_bottom_up, selection_sort,
};
pub use crate::core::{Algorithm, COMPARISON_ALGORITHMS, CountingKey, Sorter, is_sorted};
pub use crate::error::CountingSortError;

pub mod prelude {
    pub use crate::algo::{
        BubbleSorter, InsertionSorter, MergeSorter, MergeStrategy, SMALL_DOMAIN_BUCKETS,
        SelectionSorter, bubble_sort, counting_sort, counting_sort_auto, insertion_sort,
        merge_sort, merge_sort_bottom_up, selection_sort,
    };
    pub use crate::core::{Algorithm, COMPARISON_ALGORITHMS, CountingKey, Sorter, is_sorted};
    pub use crate::error::CountingSortError;
}
