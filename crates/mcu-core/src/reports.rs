//! Read-only aggregate reports over the store.
//!
//! Every report scans the relevant collection once. Reports over an empty
//! collection never divide by zero: patient and package statistics return
//! `None`, and revenue returns an all-zero report.

use std::collections::BTreeMap;

use crate::models::{Category, Gender, YearMonth};
use crate::store::ClinicStore;

/// A count with its share of the total, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Share {
    pub count: usize,
    pub percent: f64,
}

/// An amount with its share of total revenue, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevenueShare {
    pub amount: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatientStats {
    pub total: usize,
    pub by_gender: BTreeMap<Gender, Share>,
    pub average_age: f64,
    pub min_age: u32,
    pub max_age: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PackageStats {
    pub total: usize,
    pub by_category: BTreeMap<Category, Share>,
    pub average_price: f64,
    pub min_price: f64,
    pub max_price: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevenueReport {
    pub record_count: usize,
    pub total: f64,
    pub average_per_record: f64,
    /// Revenue per calendar month, oldest first
    pub by_month: BTreeMap<YearMonth, f64>,
    pub by_category: BTreeMap<Category, RevenueShare>,
}

impl RevenueReport {
    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}

/// Headline numbers shown on the report screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Overview {
    pub total_income: f64,
    pub patient_count: usize,
    pub package_count: usize,
    pub record_count: usize,
}

/// Income for a single month.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyIncome {
    pub month: YearMonth,
    pub income: f64,
    pub record_count: usize,
}

fn percent(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part * 100.0 / whole
    }
}

fn shares<K: Ord + Copy>(counts: BTreeMap<K, usize>, total: usize) -> BTreeMap<K, Share> {
    counts
        .into_iter()
        .map(|(key, count)| {
            (
                key,
                Share {
                    count,
                    percent: percent(count as f64, total as f64),
                },
            )
        })
        .collect()
}

/// Gender breakdown and age range of registered patients.
pub fn patient_stats(store: &ClinicStore) -> Option<PatientStats> {
    let patients = store.patients();
    if patients.is_empty() {
        return None;
    }

    let mut counts = BTreeMap::new();
    let mut total_age: u64 = 0;
    let mut min_age = u32::MAX;
    let mut max_age: u32 = 0;

    for patient in patients {
        *counts.entry(patient.gender).or_insert(0) += 1;
        total_age += u64::from(patient.age);
        min_age = min_age.min(patient.age);
        max_age = max_age.max(patient.age);
    }

    let total = patients.len();
    Some(PatientStats {
        total,
        by_gender: shares(counts, total),
        average_age: total_age as f64 / total as f64,
        min_age,
        max_age,
    })
}

/// Category breakdown and price range of offered packages.
pub fn package_stats(store: &ClinicStore) -> Option<PackageStats> {
    let packages = store.packages();
    if packages.is_empty() {
        return None;
    }

    let mut counts = BTreeMap::new();
    let mut total_price = 0.0;
    let mut min_price = f64::INFINITY;
    let mut max_price = f64::NEG_INFINITY;

    for package in packages {
        *counts.entry(package.category).or_insert(0) += 1;
        total_price += package.price;
        min_price = min_price.min(package.price);
        max_price = max_price.max(package.price);
    }

    let total = packages.len();
    Some(PackageStats {
        total,
        by_category: shares(counts, total),
        average_price: total_price / total as f64,
        min_price,
        max_price,
    })
}

/// Revenue from all check-up records, by month and by package category.
///
/// Uses the price captured in each record, not the package's current price.
pub fn revenue_report(store: &ClinicStore) -> RevenueReport {
    let records = store.records();
    if records.is_empty() {
        return RevenueReport::default();
    }

    let mut total = 0.0;
    let mut by_month: BTreeMap<YearMonth, f64> = BTreeMap::new();
    let mut by_category_amount: BTreeMap<Category, f64> = BTreeMap::new();

    for record in records {
        let price = record.revenue();
        total += price;
        *by_month.entry(record.date.year_month()).or_insert(0.0) += price;
        *by_category_amount.entry(record.package.category).or_insert(0.0) += price;
    }

    let by_category = by_category_amount
        .into_iter()
        .map(|(category, amount)| {
            (
                category,
                RevenueShare {
                    amount,
                    percent: percent(amount, total),
                },
            )
        })
        .collect();

    RevenueReport {
        record_count: records.len(),
        total,
        average_per_record: total / records.len() as f64,
        by_month,
        by_category,
    }
}

pub fn overview(store: &ClinicStore) -> Overview {
    Overview {
        total_income: store.records().iter().map(|r| r.revenue()).sum(),
        patient_count: store.patients().len(),
        package_count: store.packages().len(),
        record_count: store.records().len(),
    }
}

/// Income and record count for the given month.
pub fn monthly_income(store: &ClinicStore, month: YearMonth) -> MonthlyIncome {
    let (income, record_count) = store
        .records()
        .iter()
        .filter(|r| r.date.year_month() == month)
        .fold((0.0, 0), |(sum, n), r| (sum + r.revenue(), n + 1));

    MonthlyIncome {
        month,
        income,
        record_count,
    }
}
