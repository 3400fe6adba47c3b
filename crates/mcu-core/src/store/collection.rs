//! Capacity-bounded, ordered entity collection.

use std::collections::HashSet;

use crate::models::Entity;
use crate::search::{binary_search_by_id, is_id_ascending, linear_search_by_id};
use crate::sort::{insertion_sort_by_key, selection_sort_by_key, Direction};

use super::{StoreError, StoreResult};

/// An ordered list of entities with a hard capacity.
///
/// Besides the items it tracks the highest ID ever issued, so deleted IDs
/// are never handed out again, and whether the items are currently in
/// ascending ID order, which decides if ID lookups may binary search.
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T> {
    items: Vec<T>,
    capacity: usize,
    last_id: u32,
    id_ordered: bool,
}

impl<T: Entity> Collection<T> {
    /// Create an empty collection.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            capacity,
            last_id: 0,
            id_ordered: true,
        }
    }

    /// Rebuild a collection from decoded snapshot items.
    ///
    /// Rejects more items than `capacity` and duplicate IDs. A missing
    /// `last_id` falls back to the largest stored ID.
    pub(crate) fn from_parts(
        items: Vec<T>,
        capacity: usize,
        last_id: Option<u32>,
    ) -> StoreResult<Self> {
        if items.len() > capacity {
            return Err(StoreError::Corrupt(format!(
                "{} {}s exceed capacity {}",
                items.len(),
                T::KIND,
                capacity
            )));
        }

        if let Some(low) = items.iter().map(T::id).find(|id| *id < T::ID_START) {
            return Err(StoreError::Corrupt(format!(
                "{} id {} is below {}",
                T::KIND,
                low,
                T::ID_START
            )));
        }

        let mut seen = HashSet::with_capacity(items.len());
        if let Some(dup) = items.iter().map(T::id).find(|id| !seen.insert(*id)) {
            return Err(StoreError::Corrupt(format!("duplicate {} id {}", T::KIND, dup)));
        }

        let max_id = items.iter().map(T::id).max().unwrap_or(0);
        let id_ordered = is_id_ascending(&items);
        Ok(Self {
            items,
            capacity,
            last_id: last_id.unwrap_or(0).max(max_id),
            id_ordered,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Items in current order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Highest ID ever issued, or 0 if none.
    pub fn last_id(&self) -> u32 {
        self.last_id
    }

    /// Whether items are currently in ascending ID order.
    pub fn is_id_ordered(&self) -> bool {
        self.id_ordered
    }

    /// The ID the next insert will receive.
    ///
    /// Scans every item, so it does not rely on the current order. Fails
    /// once the ID space is used up.
    pub fn next_id(&self) -> StoreResult<u32> {
        let max_stored = self
            .items
            .iter()
            .map(T::id)
            .fold(T::ID_START - 1, u32::max);
        max_stored
            .max(self.last_id)
            .checked_add(1)
            .ok_or(StoreError::IdsExhausted { kind: T::KIND })
    }

    /// Allocate an ID, build the entity with it, and append it.
    ///
    /// Fails with [`StoreError::CapacityExceeded`] before allocating when full,
    /// leaving the collection untouched.
    pub fn insert_with<F>(&mut self, build: F) -> StoreResult<&T>
    where
        F: FnOnce(u32) -> T,
    {
        if self.is_full() {
            return Err(StoreError::CapacityExceeded {
                kind: T::KIND,
                capacity: self.capacity,
            });
        }

        let id = self.next_id()?;
        let entity = build(id);
        debug_assert_eq!(entity.id(), id, "builder must use the allocated id");

        // The new id exceeds every stored id, so appending keeps ID order.
        self.items.push(entity);
        self.last_id = id;
        tracing::debug!(kind = T::KIND, id, len = self.items.len(), "inserted");

        Ok(&self.items[self.items.len() - 1])
    }

    /// Remove the item at `index`, shifting later items down by one.
    pub fn delete_at(&mut self, index: usize) -> StoreResult<T> {
        self.check_index(index)?;
        let removed = self.items.remove(index);
        tracing::debug!(kind = T::KIND, id = removed.id(), index, "deleted");
        Ok(removed)
    }

    /// Mutate the item at `index` in place. The mutator must not change the ID.
    pub(crate) fn update<F>(&mut self, index: usize, mutate: F) -> StoreResult<&T>
    where
        F: FnOnce(&mut T),
    {
        self.check_index(index)?;
        let item = &mut self.items[index];
        let id = item.id();
        mutate(&mut *item);
        debug_assert_eq!(item.id(), id, "update must not change the id");
        tracing::debug!(kind = T::KIND, id, index, "updated");
        Ok(&self.items[index])
    }

    /// Index of the item with `id`.
    ///
    /// Binary search is used only while the collection is known to be in ID
    /// order; after a sort by any other key this falls back to a scan.
    pub fn find_by_id(&self, id: u32) -> Option<usize> {
        if self.id_ordered {
            binary_search_by_id(&self.items, id)
        } else {
            linear_search_by_id(&self.items, id)
        }
    }

    /// Reorder the live items with selection sort.
    pub fn selection_sort<K, F>(&mut self, key: F, direction: Direction)
    where
        K: PartialOrd,
        F: Fn(&T) -> K,
    {
        selection_sort_by_key(&mut self.items, key, direction);
        self.after_sort();
    }

    /// Reorder the live items with insertion sort.
    pub fn insertion_sort<K, F>(&mut self, key: F, direction: Direction)
    where
        K: PartialOrd,
        F: Fn(&T) -> K,
    {
        insertion_sort_by_key(&mut self.items, key, direction);
        self.after_sort();
    }

    fn after_sort(&mut self) {
        self.id_ordered = is_id_ascending(&self.items);
        tracing::debug!(kind = T::KIND, id_ordered = self.id_ordered, "sorted");
    }

    fn check_index(&self, index: usize) -> StoreResult<()> {
        if index >= self.items.len() {
            return Err(StoreError::IndexOutOfRange {
                kind: T::KIND,
                index,
                len: self.items.len(),
            });
        }
        Ok(())
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Patient};
    use proptest::prelude::*;

    fn patient(id: u32, name: &str) -> Patient {
        Patient::new(id, name, Gender::Male, 40)
    }

    fn filled(names: &[&str]) -> Collection<Patient> {
        let mut collection = Collection::new(100);
        for name in names {
            collection
                .insert_with(|id| patient(id, name))
                .unwrap();
        }
        collection
    }

    #[test]
    fn test_empty_collection_starts_at_start_constant() {
        let collection: Collection<Patient> = Collection::new(100);
        assert_eq!(collection.next_id().unwrap(), 20001);
    }

    #[test]
    fn test_next_id_ignores_order() {
        let items = vec![patient(20005, "A"), patient(20003, "B"), patient(20010, "C")];
        let collection = Collection::from_parts(items, 100, None).unwrap();
        assert_eq!(collection.next_id().unwrap(), 20011);
        assert!(!collection.is_id_ordered());
    }

    #[test]
    fn test_deleted_max_id_is_not_reused() {
        let mut collection = filled(&["A", "B", "C"]);
        let last = collection.len() - 1;
        let removed = collection.delete_at(last).unwrap();
        assert_eq!(removed.id, 20003);

        let added = collection.insert_with(|id| patient(id, "D")).unwrap();
        assert_eq!(added.id, 20004);
    }

    #[test]
    fn test_insert_at_capacity_fails_without_mutation() {
        let mut collection: Collection<Patient> = Collection::new(2);
        collection.insert_with(|id| patient(id, "A")).unwrap();
        collection.insert_with(|id| patient(id, "B")).unwrap();
        let before = collection.clone();

        let err = collection.insert_with(|id| patient(id, "C")).unwrap_err();
        assert!(matches!(
            err,
            StoreError::CapacityExceeded { kind: "patient", capacity: 2 }
        ));
        assert_eq!(collection, before);
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut collection = filled(&["A", "B", "C", "D", "E"]);
        let before: Vec<Patient> = collection.items().to_vec();

        collection.delete_at(2).unwrap();

        assert_eq!(collection.len(), 4);
        assert_eq!(&collection.items()[..2], &before[..2]);
        assert_eq!(&collection.items()[2..], &before[3..]);
    }

    #[test]
    fn test_delete_out_of_range() {
        let mut collection = filled(&["A"]);
        let err = collection.delete_at(1).unwrap_err();
        assert!(matches!(err, StoreError::IndexOutOfRange { index: 1, len: 1, .. }));
        assert_eq!(collection.len(), 1);
    }

    #[test]
    fn test_find_by_id_after_name_sort() {
        let mut collection = filled(&["Charlie", "Alice", "Bob"]);
        assert!(collection.is_id_ordered());
        assert_eq!(collection.find_by_id(20002), Some(1));

        collection.selection_sort(|p| p.name.to_lowercase(), Direction::Ascending);
        assert!(!collection.is_id_ordered());

        // Alice(20002), Bob(20003), Charlie(20001): a blind binary search
        // for 20001 would look at index 1 and go left, missing it.
        assert_eq!(collection.find_by_id(20001), Some(2));
        assert_eq!(collection.find_by_id(20002), Some(0));
        assert_eq!(collection.find_by_id(20009), None);

        collection.selection_sort(|p| p.id, Direction::Ascending);
        assert!(collection.is_id_ordered());
        assert_eq!(collection.find_by_id(20001), Some(0));
    }

    #[test]
    fn test_from_parts_rejects_duplicates_and_overflow() {
        let dup = vec![patient(20001, "A"), patient(20001, "B")];
        assert!(matches!(
            Collection::from_parts(dup, 100, None),
            Err(StoreError::Corrupt(_))
        ));

        let many = vec![patient(20001, "A"), patient(20002, "B")];
        assert!(matches!(
            Collection::from_parts(many, 1, None),
            Err(StoreError::Corrupt(_))
        ));
    }

    #[test]
    fn test_from_parts_keeps_high_water_mark() {
        let items = vec![patient(20001, "A")];
        let collection = Collection::from_parts(items, 100, Some(20007)).unwrap();
        assert_eq!(collection.last_id(), 20007);
        assert_eq!(collection.next_id().unwrap(), 20008);
    }

    #[test]
    fn test_from_parts_rejects_ids_below_start() {
        let items = vec![patient(5, "A")];
        assert!(matches!(
            Collection::from_parts(items, 100, None),
            Err(StoreError::Corrupt(_))
        ));
    }

    #[test]
    fn test_exhausted_id_space_is_an_error() {
        let items = vec![patient(u32::MAX, "A")];
        let mut collection = Collection::from_parts(items, 100, None).unwrap();
        assert!(matches!(
            collection.next_id(),
            Err(StoreError::IdsExhausted { .. })
        ));

        let err = collection.insert_with(|id| patient(id, "B")).unwrap_err();
        assert!(matches!(err, StoreError::IdsExhausted { .. }));
        assert_eq!(collection.len(), 1);

        // A high-water mark alone can exhaust the space too
        let collection: Collection<Patient> =
            Collection::from_parts(Vec::new(), 100, Some(u32::MAX)).unwrap();
        assert!(collection.next_id().is_err());
    }

    proptest! {
        #[test]
        fn next_id_exceeds_every_stored_id(ids in proptest::collection::hash_set(20001u32..30000, 0..50)) {
            let items: Vec<Patient> = ids.iter().map(|id| patient(*id, "P")).collect();
            let collection = Collection::from_parts(items, 100, None).unwrap();
            let next = collection.next_id().unwrap();
            prop_assert!(next >= 20001);
            prop_assert!(collection.iter().all(|p| p.id < next));
        }
    }
}
