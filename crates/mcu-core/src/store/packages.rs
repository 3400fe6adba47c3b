//! Package operations.

use super::{clean_name, ClinicStore, StoreError, StoreResult};
use crate::models::{Category, Entity, Package, PackageChanges};
use crate::search::{filter_indices, sequential_search};
use crate::sort::Direction;

/// Orderings offered on the package list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageSort {
    /// Name A-Z, case-insensitive (selection sort)
    Name,
    /// Cheapest first (selection sort)
    Price,
    /// Category name A-Z (insertion sort)
    Category,
    /// Ascending ID (insertion sort)
    Id,
}

fn check_price(price: f64) -> StoreResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(StoreError::Invalid(format!(
            "price {} must be a non-negative number",
            price
        )));
    }
    Ok(())
}

impl ClinicStore {
    /// Add a new package with the next package ID.
    pub fn add_package(&mut self, name: &str, category: Category, price: f64) -> StoreResult<Package> {
        let name = clean_name(Package::KIND, name)?;
        check_price(price)?;
        let package = self
            .packages
            .insert_with(|id| Package::new(id, name, category, price))?;
        Ok(package.clone())
    }

    pub fn get_package(&self, index: usize) -> Option<&Package> {
        self.packages.get(index)
    }

    /// Index of the package with `id`.
    pub fn find_package_by_id(&self, id: u32) -> Option<usize> {
        self.packages.find_by_id(id)
    }

    /// First package, in current order, whose name contains `query`.
    pub fn search_package_by_name(&self, query: &str) -> Option<usize> {
        sequential_search(self.packages.items(), query, |p| p.name.as_str())
    }

    /// Every package in `category`, in current order.
    pub fn find_packages_by_category(&self, category: Category) -> Vec<usize> {
        filter_indices(self.packages.items(), |p| p.category == category)
    }

    /// Apply field changes to the package at `index`.
    ///
    /// Records already billed keep the price they were created with.
    pub fn update_package(&mut self, index: usize, changes: PackageChanges) -> StoreResult<Package> {
        let name = changes
            .name
            .as_deref()
            .map(|n| clean_name(Package::KIND, n))
            .transpose()?;
        if let Some(price) = changes.price {
            check_price(price)?;
        }

        let updated = self.packages.update(index, |package| {
            if let Some(name) = name {
                package.name = name;
            }
            if let Some(category) = changes.category {
                package.category = category;
            }
            if let Some(price) = changes.price {
                package.price = price;
            }
        })?;
        Ok(updated.clone())
    }

    /// Remove the package at `index`. Records referencing it are kept.
    pub fn delete_package(&mut self, index: usize) -> StoreResult<Package> {
        self.packages.delete_at(index)
    }

    /// Reorder the live package list.
    pub fn sort_packages(&mut self, by: PackageSort) {
        match by {
            PackageSort::Name => self
                .packages
                .selection_sort(|p| p.name.to_lowercase(), Direction::Ascending),
            PackageSort::Price => self.packages.selection_sort(|p| p.price, Direction::Ascending),
            PackageSort::Category => self
                .packages
                .insertion_sort(|p| p.category.name().to_lowercase(), Direction::Ascending),
            PackageSort::Id => self.packages.insertion_sort(|p| p.id, Direction::Ascending),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreConfig;

    fn setup_store() -> ClinicStore {
        let mut store = ClinicStore::new(StoreConfig::default());
        store.add_package("Executive Plus", Category::Executive, 300.0).unwrap();
        store.add_package("Basic Panel", Category::Basic, 100.0).unwrap();
        store.add_package("Heart Standard", Category::Standard, 200.0).unwrap();
        store
    }

    #[test]
    fn test_add_assigns_package_ids() {
        let store = setup_store();
        assert_eq!(store.get_package(0).unwrap().id, 10001);
        assert_eq!(store.packages().next_id().unwrap(), 10004);
    }

    #[test]
    fn test_rejects_bad_price() {
        let mut store = ClinicStore::new(StoreConfig::default());
        assert!(store.add_package("Free", Category::Basic, 0.0).is_ok());
        assert!(matches!(
            store.add_package("Refund", Category::Basic, -1.0),
            Err(StoreError::Invalid(_))
        ));
        assert!(matches!(
            store.add_package("Broken", Category::Basic, f64::NAN),
            Err(StoreError::Invalid(_))
        ));
    }

    #[test]
    fn test_sort_by_price() {
        let mut store = setup_store();
        store.sort_packages(PackageSort::Price);
        let prices: Vec<f64> = store.packages().iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![100.0, 200.0, 300.0]);
    }

    #[test]
    fn test_sort_by_category() {
        let mut store = setup_store();
        store.sort_packages(PackageSort::Category);
        let categories: Vec<Category> = store.packages().iter().map(|p| p.category).collect();
        assert_eq!(
            categories,
            vec![Category::Basic, Category::Executive, Category::Standard]
        );
    }

    #[test]
    fn test_sort_by_category_is_alphabetical() {
        let mut store = ClinicStore::new(StoreConfig::default());
        store.add_package("A", Category::Standard, 1.0).unwrap();
        store.add_package("B", Category::Premium, 1.0).unwrap();
        store.add_package("C", Category::Executive, 1.0).unwrap();
        store.add_package("D", Category::Basic, 1.0).unwrap();
        store.add_package("E", Category::Premium, 2.0).unwrap();

        store.sort_packages(PackageSort::Category);
        let order: Vec<&str> = store.packages().iter().map(|p| p.name.as_str()).collect();
        // Stable: the two Premium packages keep their relative order
        assert_eq!(order, vec!["D", "C", "B", "E", "A"]);
    }

    #[test]
    fn test_search_and_category_filter() {
        let mut store = setup_store();
        store.add_package("Basic Kids", Category::Basic, 80.0).unwrap();

        assert_eq!(store.search_package_by_name("heart"), Some(2));
        assert_eq!(store.search_package_by_name("gold"), None);
        assert_eq!(store.find_packages_by_category(Category::Basic), vec![1, 3]);
        assert!(store.find_packages_by_category(Category::Premium).is_empty());
    }

    #[test]
    fn test_update_package() {
        let mut store = setup_store();
        let idx = store.find_package_by_id(10002).unwrap();
        let updated = store
            .update_package(
                idx,
                PackageChanges {
                    category: Some(Category::Premium),
                    price: Some(120.0),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.name, "Basic Panel");
        assert_eq!(updated.category, Category::Premium);
        assert_eq!(updated.price, 120.0);
    }
}
