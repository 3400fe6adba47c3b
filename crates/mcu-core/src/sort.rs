//! In-place comparison sorts used by the listing screens.
//!
//! Both sorts are quadratic and operate on the live collection, so the
//! resulting order sticks for the rest of the session and is saved with
//! the snapshot.

use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    /// True when `a` must come before `b`.
    fn precedes<K: PartialOrd>(self, a: &K, b: &K) -> bool {
        match (self, a.partial_cmp(b)) {
            (Direction::Ascending, Some(Ordering::Less)) => true,
            (Direction::Descending, Some(Ordering::Greater)) => true,
            _ => false,
        }
    }
}

/// Selection sort: for each position, scan the rest for the best key and swap it in.
pub fn selection_sort_by_key<T, K, F>(items: &mut [T], key: F, direction: Direction)
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    let n = items.len();
    for i in 0..n.saturating_sub(1) {
        let mut best = i;
        let mut best_key = key(&items[i]);
        for j in (i + 1)..n {
            let candidate = key(&items[j]);
            if direction.precedes(&candidate, &best_key) {
                best = j;
                best_key = candidate;
            }
        }
        if best != i {
            items.swap(i, best);
        }
    }
}

/// Insertion sort: shift earlier elements right while the new element's key precedes theirs.
///
/// Equal keys never shift past each other, so this sort is stable.
pub fn insertion_sort_by_key<T, K, F>(items: &mut [T], key: F, direction: Direction)
where
    K: PartialOrd,
    F: Fn(&T) -> K,
{
    for i in 1..items.len() {
        let current = key(&items[i]);
        let mut j = i;
        while j > 0 && direction.precedes(&current, &key(&items[j - 1])) {
            j -= 1;
        }
        // Rotating moves items[j..i] right by one and drops items[i] at j.
        items[j..=i].rotate_right(1);
    }
}
