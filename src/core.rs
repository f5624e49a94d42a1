//! Core traits and types for Classort.
//!
//! This module defines:
//! - [`Sorter`]: The ordering contract every comparison sort implements.
//! - [`Algorithm`]: Runtime selection of a comparison sort.
//! - [`CountingKey`]: The bounded integer domain accepted by counting sort.

use crate::algo::{BubbleSorter, InsertionSorter, MergeSorter, SelectionSorter};

/// A comparison sort over a totally-ordered element type.
///
/// Implementors sort the slice **in place**, ascending. Empty and single-element
/// slices are left untouched.
///
/// # Examples
///
/// Implementing for a custom algorithm:
///
/// ```
/// use classort::core::Sorter;
///
/// struct StdSorter;
///
/// impl<T: Ord> Sorter<T> for StdSorter {
///     fn sort(&self, slice: &mut [T]) {
///         slice.sort();
///     }
/// }
///
/// let mut data = [3, 1, 2];
/// StdSorter.sort(&mut data);
/// assert_eq!(data, [1, 2, 3]);
/// ```
pub trait Sorter<T>
where
    T: Ord,
{
    /// Sorts `slice` ascending in place.
    fn sort(&self, slice: &mut [T]);
}

/// The comparison sorts shipped by this crate.
///
/// Counting sort is not listed: it only accepts bounded integers and can fail, so it is
/// reached through [`counting_sort`](crate::counting_sort) directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Merge,
}

/// Every [`Algorithm`], in declaration order.
pub const COMPARISON_ALGORITHMS: [Algorithm; 4] = [
    Algorithm::Bubble,
    Algorithm::Selection,
    Algorithm::Insertion,
    Algorithm::Merge,
];

impl Algorithm {
    /// Short snake_case name, used in log events and benchmark ids.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble_sort",
            Algorithm::Selection => "selection_sort",
            Algorithm::Insertion => "insertion_sort",
            Algorithm::Merge => "merge_sort",
        }
    }

    /// Whether equal elements keep their relative input order.
    pub fn is_stable(self) -> bool {
        !matches!(self, Algorithm::Selection)
    }

    /// Sorts `slice` in place with the default configuration of this algorithm.
    ///
    /// # Examples
    ///
    /// ```
    /// use classort::Algorithm;
    ///
    /// let mut data = vec![5, 3, 8, 1];
    /// Algorithm::Merge.sort(&mut data);
    /// assert_eq!(data, vec![1, 3, 5, 8]);
    /// ```
    pub fn sort<T: Ord + Clone>(self, slice: &mut [T]) {
        match self {
            Algorithm::Bubble => BubbleSorter::default().sort(slice),
            Algorithm::Selection => SelectionSorter.sort(slice),
            Algorithm::Insertion => InsertionSorter::default().sort(slice),
            Algorithm::Merge => MergeSorter::default().sort(slice),
        }
    }
}

/// Returns `true` if `slice` is non-decreasing.
///
/// ```
/// use classort::is_sorted;
///
/// assert!(is_sorted(&[1, 1, 2]));
/// assert!(!is_sorted(&[2, 1]));
/// assert!(is_sorted::<u8>(&[]));
/// ```
pub fn is_sorted<T: Ord>(slice: &[T]) -> bool {
    slice.windows(2).all(|w| w[0] <= w[1])
}

/// An integer key that counting sort can map onto a bucket index.
///
/// Implemented for all primitive integers up to 64 bits. Signed types are accepted so
/// that negative values can be reported as invalid input instead of being
/// unrepresentable.
pub trait CountingKey: Copy + Ord {
    /// The additive identity, the smallest valid key.
    const ZERO: Self;

    /// Bucket index of a non-negative key, or `None` if the key does not fit in `usize`.
    fn to_bucket(self) -> Option<usize>;

    /// Inverse of [`to_bucket`](CountingKey::to_bucket).
    ///
    /// Only called with indices obtained from a valid key of the same type.
    fn from_bucket(bucket: usize) -> Self;

    /// Widened value, used for error reporting.
    fn to_i128(self) -> i128;
}

macro_rules! impl_counting_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl CountingKey for $t {
                const ZERO: Self = 0;

                #[inline(always)]
                fn to_bucket(self) -> Option<usize> {
                    usize::try_from(self).ok()
                }

                #[inline(always)]
                fn from_bucket(bucket: usize) -> Self {
                    bucket as $t
                }

                #[inline(always)]
                fn to_i128(self) -> i128 {
                    self as i128
                }
            }
        )*
    };
}

impl_counting_key!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
