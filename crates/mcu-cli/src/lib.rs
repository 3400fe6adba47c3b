//! MCU terminal front end.
//!
//! Menu-driven session over [`mcu_core::ClinicStore`]. Input and output
//! are generic so a whole session can be scripted in tests.
//!
//! # Modules
//!
//! - [`prompt`]: Validated line input (text, numbers, dates, choices)
//! - [`render`]: Plain-text tables and report screens
//! - [`menu`]: The interactive [`Session`]

pub mod menu;
pub mod prompt;
pub mod render;

use std::io::{self, Write};

use mcu_core::{ClinicStore, StoreConfig};

pub use menu::Session;

/// Load the store for a new session, falling back to an empty store when
/// the data file cannot be read.
pub fn open_store(config: StoreConfig, out: &mut impl Write) -> io::Result<ClinicStore> {
    let existed = config.data_file.exists();

    match ClinicStore::open(config.clone()) {
        Ok(store) if existed => {
            writeln!(
                out,
                "✓ Data loaded: {} patient(s), {} package(s), {} record(s)",
                store.patients().len(),
                store.packages().len(),
                store.records().len()
            )?;
            Ok(store)
        }
        Ok(store) => {
            writeln!(out, "No saved data found. Starting fresh.")?;
            Ok(store)
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                path = %config.data_file.display(),
                "could not load data file, starting empty"
            );
            writeln!(out, "✗ Failed to load data: {}", e)?;
            writeln!(out, "Starting with empty data.")?;
            Ok(ClinicStore::new(config))
        }
    }
}
