use crate::core::Sorter;

/// Sorts `slice` in place with top-down [Merge Sort](https://en.wikipedia.org/wiki/Merge_sort).
///
/// The slice is split at `len / 2` and each half is sorted recursively until it holds at
/// most one element. Both halves are then copied into a fresh buffer and merged back into
/// `slice`, always taking the lesser front and preferring the left half on ties.
///
/// `O(N log N)` time, `O(N)` auxiliary space per merge level, recursion depth `log2(N)`.
/// Stable.
///
/// # Examples
///
/// ```
/// use classort::merge_sort;
///
/// let mut data = vec![5, 3, 8, 1];
/// merge_sort(&mut data);
/// assert_eq!(data, vec![1, 3, 5, 8]);
/// ```
pub fn merge_sort<T: Ord + Clone>(slice: &mut [T]) {
    tracing::trace!(algorithm = "merge_sort", len = slice.len(), "sorting");
    top_down(slice);
}

fn top_down<T: Ord + Clone>(slice: &mut [T]) {
    let len = slice.len();
    if len < 2 {
        return;
    }

    let mid = len / 2;
    top_down(&mut slice[..mid]);
    top_down(&mut slice[mid..]);

    let scratch = slice.to_vec();
    merge_into(&scratch[..mid], &scratch[mid..], slice);
}

/// Sorts `slice` in place with iterative, bottom-up merge sort.
///
/// Merges adjacent runs of width 1, 2, 4, ... through a single scratch buffer. Output and
/// stability match [`merge_sort`], but stack usage is constant regardless of `N`.
///
/// # Examples
///
/// ```
/// use classort::merge_sort_bottom_up;
///
/// let mut data = vec![5, 3, 8, 1, 9, 2];
/// merge_sort_bottom_up(&mut data);
/// assert_eq!(data, vec![1, 2, 3, 5, 8, 9]);
/// ```
pub fn merge_sort_bottom_up<T: Ord + Clone>(slice: &mut [T]) {
    tracing::trace!(
        algorithm = "merge_sort",
        len = slice.len(),
        bottom_up = true,
        "sorting"
    );

    let len = slice.len();
    if len < 2 {
        return;
    }

    let mut scratch = slice.to_vec();
    let mut width = 1;
    while width < len {
        scratch.clone_from_slice(slice);

        let mut lo = 0;
        while lo < len {
            let mid = (lo + width).min(len);
            let hi = (mid + width).min(len);
            merge_into(&scratch[lo..mid], &scratch[mid..hi], &mut slice[lo..hi]);
            lo = hi;
        }

        width = width.saturating_mul(2);
    }
}

/// Merges two sorted runs into `out`, which must hold exactly `left.len() + right.len()`
/// elements.
///
/// Cursors walk both runs; nothing is removed from their fronts. Ties take from `left`.
#[inline]
fn merge_into<T: Ord + Clone>(left: &[T], right: &[T], out: &mut [T]) {
    debug_assert_eq!(left.len() + right.len(), out.len());

    let (mut l, mut r, mut o) = (0, 0, 0);
    while l < left.len() && r < right.len() {
        if right[r] < left[l] {
            out[o] = right[r].clone();
            r += 1;
        } else {
            out[o] = left[l].clone();
            l += 1;
        }
        o += 1;
    }

    // At most one of the runs has a remainder.
    let rest = if l < left.len() { &left[l..] } else { &right[r..] };
    out[o..].clone_from_slice(rest);
}

/// Which merge sort variant a [`MergeSorter`] runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MergeStrategy {
    /// Recursive halving, see [`merge_sort`].
    #[default]
    TopDown,
    /// Iterative run doubling, see [`merge_sort_bottom_up`].
    BottomUp,
}

/// [`Sorter`] for merge sort.
///
/// # Usage
///```
/// use classort::{MergeSorter, MergeStrategy, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// MergeSorter { strategy: MergeStrategy::BottomUp }.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MergeSorter {
    pub strategy: MergeStrategy,
}

impl<T> Sorter<T> for MergeSorter
where
    T: Ord + Clone,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        match self.strategy {
            MergeStrategy::TopDown => merge_sort(slice),
            MergeStrategy::BottomUp => merge_sort_bottom_up(slice),
        }
    }
}
