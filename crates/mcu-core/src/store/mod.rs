//! In-memory record store for the clinic.

mod collection;
mod packages;
mod patients;
mod persistence;
mod records;

pub use collection::*;
pub use packages::*;
pub use patients::*;
pub use persistence::*;
pub use records::*;

use thiserror::Error;

use crate::config::StoreConfig;
use crate::models::{CheckupRecord, Package, Patient};

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Cannot add more {kind}s: maximum capacity of {capacity} reached")]
    CapacityExceeded { kind: &'static str, capacity: usize },

    #[error("No {kind} with ID {id}")]
    NotFound { kind: &'static str, id: u32 },

    #[error("No {kind} IDs left to allocate")]
    IdsExhausted { kind: &'static str },

    #[error("{kind} index {index} out of range ({len} stored)")]
    IndexOutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Invalid input: {0}")]
    Invalid(String),

    #[error("Corrupt data file: {0}")]
    Corrupt(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// All clinic data for one session.
///
/// Owned by whoever drives the session; there is no global state. Tests
/// build a fresh store each time.
#[derive(Debug, Clone)]
pub struct ClinicStore {
    config: StoreConfig,
    patients: Collection<Patient>,
    packages: Collection<Package>,
    records: Collection<CheckupRecord>,
}

impl ClinicStore {
    /// Create an empty store. Nothing is read from disk.
    pub fn new(config: StoreConfig) -> Self {
        let capacity = config.capacity;
        Self {
            config,
            patients: Collection::new(capacity),
            packages: Collection::new(capacity),
            records: Collection::new(capacity),
        }
    }

    /// Create a store and load the snapshot named in `config`, if it exists.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        let mut store = Self::new(config);
        store.load()?;
        Ok(store)
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn patients(&self) -> &Collection<Patient> {
        &self.patients
    }

    pub fn packages(&self) -> &Collection<Package> {
        &self.packages
    }

    pub fn records(&self) -> &Collection<CheckupRecord> {
        &self.records
    }
}

/// Trim a free-text name and reject it when nothing is left.
fn clean_name(kind: &str, name: &str) -> StoreResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(StoreError::Invalid(format!("{} name cannot be empty", kind)));
    }
    Ok(trimmed.to_string())
}
