//! Check-up package models.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::{Entity, ModelError};
use crate::config::PACKAGE_ID_START;

/// Package tier. Declaration order is the display order used in menus and reports.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Basic,
    Standard,
    Premium,
    Executive,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Basic,
        Category::Standard,
        Category::Premium,
        Category::Executive,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Basic => "Basic",
            Category::Standard => "Standard",
            Category::Premium => "Premium",
            Category::Executive => "Executive",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.name().to_lowercase() == wanted)
            .ok_or_else(|| ModelError::InvalidCategory(s.to_string()))
    }
}

/// A check-up service package offered by the clinic.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Package {
    /// Sequential ID, starting at 10001
    pub id: u32,
    /// Package name
    pub name: String,
    pub category: Category,
    /// Price charged per check-up
    pub price: f64,
}

impl Package {
    pub fn new(id: u32, name: impl Into<String>, category: Category, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            price,
        }
    }
}

impl Entity for Package {
    const KIND: &'static str = "package";
    const ID_START: u32 = PACKAGE_ID_START;

    fn id(&self) -> u32 {
        self.id
    }

    fn blank_slot() -> serde_json::Value {
        json!({ "id": 0, "name": "", "category": "", "price": 0 })
    }
}

/// Field changes for a package. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PackageChanges {
    pub name: Option<String>,
    pub category: Option<Category>,
    pub price: Option<f64>,
}

impl PackageChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.price.is_none()
    }
}
