//! Check-up record operations.

use super::{ClinicStore, StoreError, StoreResult};
use crate::models::{CheckupDate, CheckupRecord, Entity, Package, Patient, RecordChanges};
use crate::search::filter_indices;
use crate::sort::Direction;

/// Orderings offered on the record list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordSort {
    /// Newest check-up first (insertion sort)
    DateNewest,
    /// Patient name A-Z (selection sort)
    PatientName,
    /// Package name A-Z (insertion sort)
    PackageName,
    /// Ascending ID (insertion sort)
    Id,
}

impl ClinicStore {
    fn patient_snapshot(&self, id: u32) -> StoreResult<Patient> {
        self.find_patient_by_id(id)
            .and_then(|idx| self.patients.get(idx))
            .cloned()
            .ok_or(StoreError::NotFound {
                kind: Patient::KIND,
                id,
            })
    }

    fn package_snapshot(&self, id: u32) -> StoreResult<Package> {
        self.find_package_by_id(id)
            .and_then(|idx| self.packages.get(idx))
            .cloned()
            .ok_or(StoreError::NotFound {
                kind: Package::KIND,
                id,
            })
    }

    /// Record a check-up for an existing patient and package.
    ///
    /// The patient and package are copied into the record as they are now.
    pub fn add_record(
        &mut self,
        patient_id: u32,
        package_id: u32,
        date: CheckupDate,
    ) -> StoreResult<CheckupRecord> {
        if self.records.is_full() {
            return Err(StoreError::CapacityExceeded {
                kind: CheckupRecord::KIND,
                capacity: self.records.capacity(),
            });
        }
        let patient = self.patient_snapshot(patient_id)?;
        let package = self.package_snapshot(package_id)?;

        let record = self
            .records
            .insert_with(|id| CheckupRecord::new(id, patient, package, date))?;
        Ok(record.clone())
    }

    pub fn get_record(&self, index: usize) -> Option<&CheckupRecord> {
        self.records.get(index)
    }

    /// Index of the record with `id`.
    pub fn find_record_by_id(&self, id: u32) -> Option<usize> {
        self.records.find_by_id(id)
    }

    /// Records whose patient snapshot name contains `query`, ignoring case.
    pub fn search_records_by_patient_name(&self, query: &str) -> Vec<usize> {
        let needle = query.to_lowercase();
        filter_indices(self.records.items(), |r| {
            r.patient.name.to_lowercase().contains(&needle)
        })
    }

    /// Records whose package snapshot name contains `query`, ignoring case.
    pub fn search_records_by_package_name(&self, query: &str) -> Vec<usize> {
        let needle = query.to_lowercase();
        filter_indices(self.records.items(), |r| {
            r.package.name.to_lowercase().contains(&needle)
        })
    }

    /// Records dated exactly `date`.
    pub fn search_records_by_date(&self, date: CheckupDate) -> Vec<usize> {
        filter_indices(self.records.items(), |r| r.date == date)
    }

    /// Edit the record at `index`.
    ///
    /// A new patient or package ID replaces the embedded snapshot with a
    /// fresh copy of that entity.
    pub fn update_record(&mut self, index: usize, changes: RecordChanges) -> StoreResult<CheckupRecord> {
        let patient = changes
            .patient_id
            .map(|id| self.patient_snapshot(id))
            .transpose()?;
        let package = changes
            .package_id
            .map(|id| self.package_snapshot(id))
            .transpose()?;

        let updated = self.records.update(index, |record| {
            if let Some(patient) = patient {
                record.patient = patient;
            }
            if let Some(package) = package {
                record.package = package;
            }
            if let Some(date) = changes.date {
                record.date = date;
            }
        })?;
        Ok(updated.clone())
    }

    pub fn delete_record(&mut self, index: usize) -> StoreResult<CheckupRecord> {
        self.records.delete_at(index)
    }

    /// Reorder the live record list.
    pub fn sort_records(&mut self, by: RecordSort) {
        match by {
            RecordSort::DateNewest => self.records.insertion_sort(|r| r.date, Direction::Descending),
            RecordSort::PatientName => self
                .records
                .selection_sort(|r| r.patient.name.to_lowercase(), Direction::Ascending),
            RecordSort::PackageName => self
                .records
                .insertion_sort(|r| r.package.name.to_lowercase(), Direction::Ascending),
            RecordSort::Id => self.records.insertion_sort(|r| r.id, Direction::Ascending),
        }
    }
}
