//! Domain models for the clinic.

mod date;
mod package;
mod patient;
mod record;

pub use date::*;
pub use package::*;
pub use patient::*;
pub use record::*;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors raised while building or parsing model values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("Invalid date: {0} (expected DD/MM/YYYY between 1900 and 2100)")]
    InvalidDate(String),

    #[error("Invalid gender: {0} (expected M or F)")]
    InvalidGender(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),
}

/// A stored entity with a sequential numeric ID.
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// Human-readable kind, used in errors and logs.
    const KIND: &'static str;
    /// First ID ever handed out for this kind.
    const ID_START: u32;

    fn id(&self) -> u32;

    /// The zero-valued slot written after the last meaningful entry of a snapshot array.
    fn blank_slot() -> serde_json::Value;
}
