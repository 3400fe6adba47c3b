//! Patient models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{Entity, ModelError};
use crate::config::PATIENT_ID_START;

/// Oldest age the clinic accepts.
pub const MAX_AGE: u32 = 150;

/// Patient gender as recorded at registration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Gender {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Single-letter code used on disk.
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Gender {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "M" | "MALE" => Ok(Gender::Male),
            "F" | "FEMALE" => Ok(Gender::Female),
            _ => Err(ModelError::InvalidGender(s.to_string())),
        }
    }
}

/// A registered patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Sequential ID, starting at 20001
    pub id: u32,
    /// Full name
    pub name: String,
    pub gender: Gender,
    /// Age in years
    pub age: u32,
}

impl Patient {
    pub fn new(id: u32, name: impl Into<String>, gender: Gender, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            gender,
            age,
        }
    }
}

impl Entity for Patient {
    const KIND: &'static str = "patient";
    const ID_START: u32 = PATIENT_ID_START;

    fn id(&self) -> u32 {
        self.id
    }

    fn blank_slot() -> serde_json::Value {
        json!({ "id": 0, "name": "", "gender": "", "age": 0 })
    }
}

/// Field changes for a patient. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientChanges {
    pub name: Option<String>,
    pub gender: Option<Gender>,
    pub age: Option<u32>,
}

impl PatientChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.gender.is_none() && self.age.is_none()
    }
}
