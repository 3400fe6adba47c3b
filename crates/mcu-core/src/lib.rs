//! MCU Core Library
//!
//! Record keeping for a medical check-up clinic: patients, service
//! packages, and check-up records, persisted as a single JSON snapshot.
//!
//! # Architecture
//!
//! ```text
//!            Date Validator        ID Allocator
//!                  │                     │
//!                  ▼                     ▼
//!   models ──► Record Store (ClinicStore: 3 × Collection<T>)
//!                  │            │             │
//!                  ▼            ▼             ▼
//!               search         sort      persistence ──► data.json
//!                  │            │
//!                  └─────┬──────┘
//!                        ▼
//!                     reports
//! ```
//!
//! # Core Principle
//!
//! **Records hold snapshots.** A check-up record copies the patient and
//! package it was created with; later edits never rewrite history.
//!
//! # Modules
//!
//! - [`config`]: Constants and [`StoreConfig`]
//! - [`models`]: Domain types (Patient, Package, CheckupRecord, CheckupDate)
//! - [`store`]: Capacity-bounded collections, CRUD, and JSON persistence
//! - [`search`]: Name and ID search
//! - [`sort`]: Selection and insertion sort
//! - [`reports`]: Aggregate statistics and revenue

pub mod config;
pub mod models;
pub mod reports;
pub mod search;
pub mod sort;
pub mod store;

// Re-export commonly used types
pub use config::StoreConfig;
pub use models::{
    is_leap_year, is_valid_date, Category, CheckupDate, CheckupRecord, Gender, ModelError,
    Package, PackageChanges, Patient, PatientChanges, RecordChanges, YearMonth,
};
pub use store::{
    ClinicStore, Collection, PackageSort, PatientSort, RecordSort, StoreError, StoreResult,
};
