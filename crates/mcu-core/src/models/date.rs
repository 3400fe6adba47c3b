//! Calendar date validation and the check-up date type.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::ModelError;

/// Earliest year accepted for a check-up.
pub const MIN_YEAR: i32 = 1900;
/// Latest year accepted for a check-up.
pub const MAX_YEAR: i32 = 2100;

const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Check a day/month/year triple against the month table and the accepted year range.
pub fn is_valid_date(day: u32, month: u32, year: i32) -> bool {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return false;
    }
    if !(1..=12).contains(&month) {
        return false;
    }

    let mut last_day = DAYS_IN_MONTH[(month - 1) as usize];
    if month == 2 && is_leap_year(year) {
        last_day = 29;
    }

    (1..=last_day).contains(&day)
}

/// A validated check-up date, written as `DD/MM/YYYY`.
///
/// Ordering is chronological, so sorting by date never depends on the
/// textual form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CheckupDate(NaiveDate);

impl CheckupDate {
    /// Build a date from its parts, rejecting anything `is_valid_date` rejects.
    pub fn new(day: u32, month: u32, year: i32) -> Result<Self, ModelError> {
        if !is_valid_date(day, month, year) {
            return Err(ModelError::InvalidDate(format!(
                "{:02}/{:02}/{:04}",
                day, month, year
            )));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| ModelError::InvalidDate(format!("{:02}/{:02}/{:04}", day, month, year)))
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Calendar month this date falls in, used for revenue grouping.
    pub fn year_month(&self) -> YearMonth {
        YearMonth {
            year: self.year(),
            month: self.month(),
        }
    }
}

impl fmt::Display for CheckupDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day(), self.month(), self.year())
    }
}

impl FromStr for CheckupDate {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ModelError::InvalidDate(s.to_string());

        let parts: Vec<&str> = s.trim().split('/').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }

        let day: u32 = parts[0].trim().parse().map_err(|_| invalid())?;
        let month: u32 = parts[1].trim().parse().map_err(|_| invalid())?;
        let year: i32 = parts[2].trim().parse().map_err(|_| invalid())?;

        Self::new(day, month, year).map_err(|_| invalid())
    }
}

impl Serialize for CheckupDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CheckupDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A calendar month, displayed as `MM/YYYY` and ordered chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    // Field order matters for the derived ordering.
    pub year: i32,
    pub month: u32,
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}
