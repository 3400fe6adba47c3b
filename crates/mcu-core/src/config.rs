//! Store configuration and application constants.

use std::path::PathBuf;

/// Application name, used in banners.
pub const APP_NAME: &str = "Medical Check-Up Management System";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Snapshot file, relative to the working directory.
pub const DATA_FILE: &str = "data.json";

/// Maximum number of entities per collection.
pub const MAX_CAPACITY: usize = 100;

/// First ID handed out for each entity type.
pub const PATIENT_ID_START: u32 = 20001;
pub const PACKAGE_ID_START: u32 = 10001;
pub const RECORD_ID_START: u32 = 30001;

/// Filter used when `RUST_LOG` is unset. Diagnostics go to stderr, so the
/// default stays quiet to keep the menu readable.
pub fn default_log_filter() -> &'static str {
    "warn"
}

/// Where the store lives and how large each collection may grow.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    /// Path of the JSON snapshot
    pub data_file: PathBuf,
    /// Per-collection capacity
    pub capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DATA_FILE),
            capacity: MAX_CAPACITY,
        }
    }
}

impl StoreConfig {
    /// Config pointing at a specific snapshot file with the default capacity.
    pub fn with_data_file(path: impl Into<PathBuf>) -> Self {
        Self {
            data_file: path.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_uses_working_directory_file() {
        let config = StoreConfig::default();
        assert_eq!(config.data_file, PathBuf::from("data.json"));
        assert_eq!(config.capacity, 100);
    }

    #[test]
    fn with_data_file_keeps_default_capacity() {
        let config = StoreConfig::with_data_file("/tmp/clinic.json");
        assert_eq!(config.data_file, PathBuf::from("/tmp/clinic.json"));
        assert_eq!(config.capacity, MAX_CAPACITY);
    }

    #[test]
    fn id_ranges_do_not_overlap() {
        assert!(PACKAGE_ID_START < PATIENT_ID_START);
        assert!(PATIENT_ID_START < RECORD_ID_START);
    }
}
