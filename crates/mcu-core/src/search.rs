//! Searching over entity slices.
//!
//! - [`sequential_search`]: first case-insensitive substring match on a text field
//! - [`filter_indices`]: every index matching a predicate
//! - [`binary_search_by_id`]: ID lookup over ID-ascending data
//! - [`linear_search_by_id`]: ID lookup with no ordering requirement

use crate::models::Entity;

/// Return the first index whose `field` contains `query`, ignoring case.
///
/// Order dependent: after a sort the same query may hit a different entity.
/// An empty query matches index 0 of any non-empty slice.
pub fn sequential_search<T, F>(items: &[T], query: &str, field: F) -> Option<usize>
where
    F: Fn(&T) -> &str,
{
    let needle = query.to_lowercase();
    items
        .iter()
        .position(|item| field(item).to_lowercase().contains(&needle))
}

/// Return every index whose item satisfies `predicate`, in current order.
pub fn filter_indices<T, P>(items: &[T], predicate: P) -> Vec<usize>
where
    P: Fn(&T) -> bool,
{
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| predicate(item))
        .map(|(i, _)| i)
        .collect()
}

/// Classic binary search by ID.
///
/// `items` must be sorted ascending by ID; on any other order the result is
/// unspecified. [`crate::store::Collection::find_by_id`] checks this before
/// calling.
pub fn binary_search_by_id<T: Entity>(items: &[T], id: u32) -> Option<usize> {
    let mut left = 0usize;
    let mut right = items.len();

    while left < right {
        let mid = left + (right - left) / 2;
        let mid_id = items[mid].id();
        if mid_id == id {
            return Some(mid);
        } else if mid_id < id {
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    None
}

/// ID lookup by scanning; correct for any order.
pub fn linear_search_by_id<T: Entity>(items: &[T], id: u32) -> Option<usize> {
    items.iter().position(|item| item.id() == id)
}

/// True when IDs strictly increase along the slice.
pub fn is_id_ascending<T: Entity>(items: &[T]) -> bool {
    items.windows(2).all(|pair| pair[0].id() < pair[1].id())
}
