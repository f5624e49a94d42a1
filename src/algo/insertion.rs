use crate::core::Sorter;

/// Sorts `slice` in place with [Insertion Sort](https://en.wikipedia.org/wiki/Insertion_sort).
///
/// `slice[..1]` is a trivially sorted prefix. Each following element is shifted left past
/// every strictly greater element of the prefix, so equal elements keep their order.
///
/// `O(N²)` worst case, `O(N)` on already sorted input, `O(1)` extra space. Stable.
///
/// # Examples
///
/// ```
/// use classort::insertion_sort;
///
/// let mut data = vec![3, 2, 1];
/// insertion_sort(&mut data);
/// assert_eq!(data, vec![1, 2, 3]);
/// ```
pub fn insertion_sort<T: Ord>(slice: &mut [T]) {
    tracing::trace!(algorithm = "insertion_sort", len = slice.len(), "sorting");

    for unsorted in 1..slice.len() {
        let mut i = unsorted;
        while i > 0 && slice[i - 1] > slice[i] {
            slice.swap(i - 1, i);
            i -= 1;
        }
    }
}

fn binary_insertion_sort<T: Ord>(slice: &mut [T]) {
    tracing::trace!(
        algorithm = "insertion_sort",
        len = slice.len(),
        binary = true,
        "sorting"
    );

    for unsorted in 1..slice.len() {
        // Upper bound: land after every element equal to the one being inserted.
        let (prefix, rest) = slice.split_at(unsorted);
        let i = prefix.partition_point(|x| x <= &rest[0]);
        slice[i..=unsorted].rotate_right(1);
    }
}

/// [`Sorter`] for insertion sort.
///
/// With `binary` set, the insertion point is found by binary search over the sorted prefix
/// and the element is rotated into place. This trades `O(N²)` comparisons for
/// `O(N log N)`; moves stay `O(N²)` and stability is kept.
///
/// # Usage
///```
/// use classort::{InsertionSorter, Sorter};
///
/// let mut slice = [1, 5, 4, 2, 3];
/// InsertionSorter { binary: true }.sort(&mut slice);
/// assert_eq!(slice, [1, 2, 3, 4, 5]);
///```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InsertionSorter {
    pub binary: bool,
}

impl<T> Sorter<T> for InsertionSorter
where
    T: Ord,
{
    #[inline]
    fn sort(&self, slice: &mut [T]) {
        if self.binary {
            binary_insertion_sort(slice)
        } else {
            insertion_sort(slice)
        }
    }
}
