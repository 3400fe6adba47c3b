//! Patient operations.

use super::{clean_name, ClinicStore, StoreError, StoreResult};
use crate::models::{Entity, Gender, Patient, PatientChanges, MAX_AGE};
use crate::search::sequential_search;
use crate::sort::Direction;

/// Orderings offered on the patient list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatientSort {
    /// Name A-Z, case-insensitive (selection sort)
    Name,
    /// Youngest first (insertion sort)
    Age,
    /// Ascending ID (insertion sort)
    Id,
}

fn check_age(age: u32) -> StoreResult<()> {
    if age > MAX_AGE {
        return Err(StoreError::Invalid(format!(
            "age {} is outside 0-{}",
            age, MAX_AGE
        )));
    }
    Ok(())
}

impl ClinicStore {
    /// Register a new patient with the next patient ID.
    pub fn add_patient(&mut self, name: &str, gender: Gender, age: u32) -> StoreResult<Patient> {
        let name = clean_name(Patient::KIND, name)?;
        check_age(age)?;
        let patient = self
            .patients
            .insert_with(|id| Patient::new(id, name, gender, age))?;
        Ok(patient.clone())
    }

    pub fn get_patient(&self, index: usize) -> Option<&Patient> {
        self.patients.get(index)
    }

    /// Index of the patient with `id`.
    pub fn find_patient_by_id(&self, id: u32) -> Option<usize> {
        self.patients.find_by_id(id)
    }

    /// First patient, in current order, whose name contains `query`.
    pub fn search_patient_by_name(&self, query: &str) -> Option<usize> {
        sequential_search(self.patients.items(), query, |p| p.name.as_str())
    }

    /// Apply field changes to the patient at `index`.
    ///
    /// Existing check-up records keep their own snapshot of the patient.
    pub fn update_patient(&mut self, index: usize, changes: PatientChanges) -> StoreResult<Patient> {
        let name = changes
            .name
            .as_deref()
            .map(|n| clean_name(Patient::KIND, n))
            .transpose()?;
        if let Some(age) = changes.age {
            check_age(age)?;
        }

        let updated = self.patients.update(index, |patient| {
            if let Some(name) = name {
                patient.name = name;
            }
            if let Some(gender) = changes.gender {
                patient.gender = gender;
            }
            if let Some(age) = changes.age {
                patient.age = age;
            }
        })?;
        Ok(updated.clone())
    }

    /// Remove the patient at `index`. Records referencing them are kept.
    pub fn delete_patient(&mut self, index: usize) -> StoreResult<Patient> {
        self.patients.delete_at(index)
    }

    /// Reorder the live patient list.
    pub fn sort_patients(&mut self, by: PatientSort) {
        match by {
            PatientSort::Name => self
                .patients
                .selection_sort(|p| p.name.to_lowercase(), Direction::Ascending),
            PatientSort::Age => self.patients.insertion_sort(|p| p.age, Direction::Ascending),
            PatientSort::Id => self.patients.insertion_sort(|p| p.id, Direction::Ascending),
        }
    }
}
