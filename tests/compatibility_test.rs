use classort::prelude::*;
use std::cmp::Ordering;

// A record ordered by `key` only; `tag` records the input position.
#[derive(Clone, Debug)]
struct Tagged {
    key: u8,
    tag: usize,
}

impl PartialEq for Tagged {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Tagged {}

impl PartialOrd for Tagged {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tagged {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

fn tagged(keys: &[u8]) -> Vec<Tagged> {
    keys.iter()
        .enumerate()
        .map(|(tag, &key)| Tagged { key, tag })
        .collect()
}

fn assert_stable(name: &str, sorted: &[Tagged]) {
    for w in sorted.windows(2) {
        assert!(w[0].key <= w[1].key, "{name}: not sorted");
        if w[0].key == w[1].key {
            assert!(w[0].tag < w[1].tag, "{name}: equal keys reordered");
        }
    }
}

#[test]
fn test_stable_algorithms_keep_tag_order() {
    let keys = [3, 1, 2, 3, 1, 2, 3, 1, 2, 0, 0, 5, 4, 5];
    let mut sorters: Vec<(&str, Box<dyn Sorter<Tagged>>)> = Vec::new();
    sorters.push(("bubble", Box::new(BubbleSorter::default())));
    sorters.push(("bubble (early exit)", Box::new(BubbleSorter { early_exit: true })));
    sorters.push(("insertion", Box::new(InsertionSorter::default())));
    sorters.push(("insertion (binary)", Box::new(InsertionSorter { binary: true })));
    sorters.push(("merge", Box::new(MergeSorter::default())));
    sorters.push((
        "merge (bottom-up)",
        Box::new(MergeSorter {
            strategy: MergeStrategy::BottomUp,
        }),
    ));

    for (name, sorter) in sorters {
        let mut data = tagged(&keys);
        sorter.sort(&mut data);
        assert_stable(name, &data);
    }
}

#[test]
fn test_stable_flag_matches_behaviour() {
    let keys = [2, 1, 2, 1, 0, 2];
    for algo in COMPARISON_ALGORITHMS.into_iter().filter(|a| a.is_stable()) {
        let mut data = tagged(&keys);
        algo.sort(&mut data);
        assert_stable(algo.name(), &data);
    }
}

#[test]
fn test_selection_sort_is_not_stable() {
    // The first swap carries tag 0 past tag 1.
    let mut data = tagged(&[2, 2, 1]);
    selection_sort(&mut data);

    let tags: Vec<usize> = data.iter().map(|t| t.tag).collect();
    assert_eq!(tags, vec![2, 1, 0]);
}

#[test]
fn test_selection_sort_preserves_multiset() {
    let keys = [3, 1, 2, 3, 1, 2, 3];
    let mut data = tagged(&keys);
    selection_sort(&mut data);

    let mut tags: Vec<usize> = data.iter().map(|t| t.tag).collect();
    tags.sort();
    assert_eq!(tags, (0..keys.len()).collect::<Vec<_>>());
    assert!(is_sorted(&data));
}

// A sorter defined outside the crate plugs into the same trait.
struct StdStableSorter;

impl<T: Ord> Sorter<T> for StdStableSorter {
    fn sort(&self, slice: &mut [T]) {
        slice.sort();
    }
}

#[test]
fn test_external_sorter_compatibility() {
    let sorter: &dyn Sorter<i32> = &StdStableSorter;
    let mut data = vec![5, 3, 8, 1];
    sorter.sort(&mut data);
    assert_eq!(data, vec![1, 3, 5, 8]);
}
