//! Check-up record models.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{CheckupDate, Entity, Package, Patient};
use crate::config::RECORD_ID_START;

/// A completed check-up.
///
/// `patient` and `package` are historical snapshots taken when the record
/// was created. They are owned copies, not references: editing or deleting
/// the source patient or package leaves existing records unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckupRecord {
    /// Sequential ID, starting at 30001
    pub id: u32,
    /// Patient as they were at check-up time
    pub patient: Patient,
    /// Package as it was priced at check-up time
    pub package: Package,
    pub date: CheckupDate,
}

impl CheckupRecord {
    pub fn new(id: u32, patient: Patient, package: Package, date: CheckupDate) -> Self {
        Self {
            id,
            patient,
            package,
            date,
        }
    }

    /// Amount billed for this check-up.
    pub fn revenue(&self) -> f64 {
        self.package.price
    }
}

impl Entity for CheckupRecord {
    const KIND: &'static str = "record";
    const ID_START: u32 = RECORD_ID_START;

    fn id(&self) -> u32 {
        self.id
    }

    fn blank_slot() -> serde_json::Value {
        json!({
            "id": 0,
            "patient": Patient::blank_slot(),
            "package": Package::blank_slot(),
            "date": ""
        })
    }
}

/// Changes to a record. A replaced patient or package is snapshotted again
/// from the live entity with the given ID.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordChanges {
    pub patient_id: Option<u32>,
    pub package_id: Option<u32>,
    pub date: Option<CheckupDate>,
}

impl RecordChanges {
    pub fn is_empty(&self) -> bool {
        self.patient_id.is_none() && self.package_id.is_none() && self.date.is_none()
    }
}
