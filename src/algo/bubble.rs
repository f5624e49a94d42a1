use crate::core::Sorter;

/// Sorts `slice` in place with [Bubble Sort](https://en.wikipedia.org/wiki/Bubble_sort).
///
/// Runs exactly `n - 1` full passes over the adjacent pairs of the slice, swapping any pair
/// found out of order. There is no early exit: an already sorted slice still costs the full
/// `O(N²)` comparisons. Use [`BubbleSorter`] with `early_exit` for the short-circuiting
/// variant.
///
/// Stable: equal neighbours are never swapped. `O(1)` extra space.
///
/// # Examples
///
/// ```
/// use classort::bubble_sort;
///
/// let mut data = vec![1, 1, 4, 2, 2, 3, 7];
/// bubble_sort(&mut data);
/// assert_eq!(data, vec![1, 1, 2, 2, 3, 4, 7]);
/// ```
pub fn bubble_sort<T: Ord>(slice: &mut [T]) {
    bubble_sort_by(slice, false)
}

fn bubble_sort_by<T: Ord>(slice: &mut [T], early_exit: bool) {
    tracing::trace!(
        algorithm = "bubble_sort",
        len = slice.len(),
        early_exit,
        "sorting"
    );

    let passes = slice.len().saturating_sub(1);
    for _ in 0..passes {
        if !bubble_pass(slice) && early_exit {
            break;
        }
    }
}

/// One left-to-right pass. Returns whether any pair was swapped.
#[inline]
fn bubble_pass<T: Ord>(slice: &mut [T]) -> bool {
    let mut swapped = false;
    for i in 1..slice.len() {
        if slice[i - 1] > slice[i] {
            slice.swap(i - 1, i);
            swapped = true;
        }
    }
    swapped
}

/// [`Sorter`] for bubble sort.
///
/// With `early_exit` set, sorting stops after the first pass that performs no swap. The
/// output is identical either way; only the number of passes changes.
///
/// # Usage
///```
/// use classort::{BubbleSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// BubbleSorter { early_exit: true }.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BubbleSorter {
    pub early_exit: bool,
}

impl<T> Sorter<T> for BubbleSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        bubble_sort_by(slice, self.early_exit)
    }
}
