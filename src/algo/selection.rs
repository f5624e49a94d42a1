use crate::core::Sorter;

/// Sorts `slice` in place with [Selection Sort](https://en.wikipedia.org/wiki/Selection_sort).
///
/// For each position `i` in `0..n-1`, finds the first minimum of `slice[i..]` and swaps it
/// into `i`. `O(N²)` comparisons, at most `n - 1` swaps, `O(1)` extra space.
///
/// Not stable: the long-distance swap can carry an element past an equal one.
///
/// # Examples
///
/// ```
/// use classort::selection_sort;
///
/// let mut data = vec![4, 2, 3, 5, 1];
/// selection_sort(&mut data);
/// assert_eq!(data, vec![1, 2, 3, 4, 5]);
/// ```
pub fn selection_sort<T: Ord>(slice: &mut [T]) {
    tracing::trace!(algorithm = "selection_sort", len = slice.len(), "sorting");

    let len = slice.len();
    for unsorted in 0..len.saturating_sub(1) {
        let mut smallest_in_rest = unsorted;
        for i in (unsorted + 1)..len {
            if slice[i] < slice[smallest_in_rest] {
                smallest_in_rest = i;
            }
        }
        if unsorted != smallest_in_rest {
            slice.swap(unsorted, smallest_in_rest);
        }
    }
}

/// [`Sorter`] for selection sort.
///
/// # Usage
///```
/// use classort::{SelectionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// SelectionSorter.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionSorter;

impl<T> Sorter<T> for SelectionSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        selection_sort(slice)
    }
}
