//! JSON snapshot of the whole store.
//!
//! On-disk shape:
//!
//! ```text
//! {
//!   "patients": { "daftar": [ ...capacity slots... ], "n": 3, "last_id": 20003 },
//!   "packages": { "daftar": [ ... ], "n": 2, "last_id": 10002 },
//!   "records":  { "daftar": [ ... ], "n": 1, "last_id": 30001 }
//! }
//! ```
//!
//! `daftar` always holds `capacity` slots; only the first `n` are
//! meaningful and the rest are zero-valued padding. `last_id` is optional
//! on read.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{ClinicStore, Collection, StoreError, StoreResult};
use crate::models::Entity;

/// One persisted collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Slots {
    /// Fixed-length slot array
    pub daftar: Vec<Value>,
    /// Number of meaningful slots
    pub n: usize,
    /// Highest ID ever issued
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_id: Option<u32>,
}

/// The whole persisted document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub patients: Slots,
    pub packages: Slots,
    pub records: Slots,
}

impl Slots {
    fn from_collection<T: Entity>(collection: &Collection<T>) -> StoreResult<Self> {
        let width = collection.capacity().max(collection.len());
        let mut daftar = Vec::with_capacity(width);
        for item in collection {
            daftar.push(serde_json::to_value(item)?);
        }
        daftar.resize(width, T::blank_slot());

        Ok(Self {
            daftar,
            n: collection.len(),
            last_id: Some(collection.last_id()).filter(|id| *id > 0),
        })
    }

    fn into_collection<T: Entity>(self, capacity: usize) -> StoreResult<Collection<T>> {
        if self.n > self.daftar.len() {
            return Err(StoreError::Corrupt(format!(
                "{}s: n = {} but only {} slots present",
                T::KIND,
                self.n,
                self.daftar.len()
            )));
        }

        let items = self
            .daftar
            .into_iter()
            .take(self.n)
            .map(serde_json::from_value::<T>)
            .collect::<Result<Vec<_>, _>>()?;

        Collection::from_parts(items, capacity, self.last_id)
    }
}

impl Snapshot {
    /// Capture the current contents of `store`.
    pub fn capture(store: &ClinicStore) -> StoreResult<Self> {
        Ok(Self {
            patients: Slots::from_collection(&store.patients)?,
            packages: Slots::from_collection(&store.packages)?,
            records: Slots::from_collection(&store.records)?,
        })
    }

    /// Pretty JSON with two-space indentation.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl ClinicStore {
    /// Write the snapshot to the configured data file.
    pub fn save(&self) -> StoreResult<()> {
        let path = self.config.data_file.clone();
        self.save_to(&path)
    }

    /// Write the snapshot to `path`.
    ///
    /// The file is truncated and rewritten in place; there is no temp file,
    /// so an interrupted write can leave a damaged file behind.
    pub fn save_to(&self, path: &Path) -> StoreResult<()> {
        let mut json = Snapshot::capture(self)?.to_json()?;
        json.push('\n');
        fs::write(path, json)?;

        tracing::info!(
            path = %path.display(),
            patients = self.patients.len(),
            packages = self.packages.len(),
            records = self.records.len(),
            "saved snapshot"
        );
        Ok(())
    }

    /// Replace the store contents with the configured data file.
    pub fn load(&mut self) -> StoreResult<()> {
        let path = self.config.data_file.clone();
        self.load_from(&path)
    }

    /// Replace the store contents with the snapshot at `path`.
    ///
    /// A missing file leaves the store empty and is not an error. Any
    /// other failure leaves the current contents untouched.
    pub fn load_from(&mut self, path: &Path) -> StoreResult<()> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "no data file, starting empty");
                let capacity = self.config.capacity;
                self.patients = Collection::new(capacity);
                self.packages = Collection::new(capacity);
                self.records = Collection::new(capacity);
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let snapshot: Snapshot = serde_json::from_str(&raw)?;
        let capacity = self.config.capacity;
        let patients = snapshot.patients.into_collection(capacity)?;
        let packages = snapshot.packages.into_collection(capacity)?;
        let records = snapshot.records.into_collection(capacity)?;

        self.patients = patients;
        self.packages = packages;
        self.records = records;

        tracing::info!(
            path = %path.display(),
            patients = self.patients.len(),
            packages = self.packages.len(),
            records = self.records.len(),
            "loaded snapshot"
        );
        Ok(())
    }
}
