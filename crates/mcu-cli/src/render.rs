//! Plain-text tables and report screens.

use std::fmt::Write as _;

use mcu_core::reports::{MonthlyIncome, Overview, PackageStats, PatientStats, RevenueReport};
use mcu_core::{CheckupRecord, Package, Patient};

const RULE_WIDTH: usize = 78;

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

/// A boxed section title.
pub fn header(title: &str) -> String {
    let line = "=".repeat(RULE_WIDTH);
    format!("\n{}\n{:^width$}\n{}", line, title, line, width = RULE_WIDTH)
}

pub fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Clip `s` to `width` characters.
fn clip(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(width.saturating_sub(3)).collect();
        out.push_str("...");
        out
    }
}

pub fn patient_table<'a, I>(patients: I) -> String
where
    I: IntoIterator<Item = &'a Patient>,
{
    let mut out = String::new();
    let _ = writeln!(out, "{:<4} {:<8} {:<30} {:<8} {:>4}", "No", "ID", "Name", "Gender", "Age");
    let _ = writeln!(out, "{}", rule());
    for (i, p) in patients.into_iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<4} {:<8} {:<30} {:<8} {:>4}",
            i + 1,
            p.id,
            clip(&p.name, 30),
            p.gender.label(),
            p.age
        );
    }
    out
}

pub fn package_table<'a, I>(packages: I) -> String
where
    I: IntoIterator<Item = &'a Package>,
{
    let mut out = String::new();
    let _ = writeln!(out, "{:<4} {:<8} {:<30} {:<10} {:>14}", "No", "ID", "Name", "Category", "Price");
    let _ = writeln!(out, "{}", rule());
    for (i, p) in packages.into_iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<4} {:<8} {:<30} {:<10} {:>14}",
            i + 1,
            p.id,
            clip(&p.name, 30),
            p.category,
            money(p.price)
        );
    }
    out
}

pub fn record_table<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a CheckupRecord>,
{
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<4} {:<8} {:<12} {:<22} {:<22} {:>12}",
        "No", "ID", "Date", "Patient", "Package", "Price"
    );
    let _ = writeln!(out, "{}", rule());
    for (i, r) in records.into_iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<4} {:<8} {:<12} {:<22} {:<22} {:>12}",
            i + 1,
            r.id,
            r.date,
            clip(&r.patient.name, 22),
            clip(&r.package.name, 22),
            money(r.package.price)
        );
    }
    out
}

pub fn patient_detail(p: &Patient) -> String {
    format!(
        "ID     : {}\nName   : {}\nGender : {}\nAge    : {}",
        p.id,
        p.name,
        p.gender.label(),
        p.age
    )
}

pub fn package_detail(p: &Package) -> String {
    format!(
        "ID       : {}\nName     : {}\nCategory : {}\nPrice    : {}",
        p.id,
        p.name,
        p.category,
        money(p.price)
    )
}

pub fn record_detail(r: &CheckupRecord) -> String {
    format!(
        "Record ID : {}\nDate      : {}\nPatient   : {} ({}, {}, {} years)\nPackage   : {} ({}, {})",
        r.id,
        r.date,
        r.patient.name,
        r.patient.id,
        r.patient.gender.label(),
        r.patient.age,
        r.package.name,
        r.package.category,
        money(r.package.price)
    )
}

pub fn patient_stats(stats: Option<&PatientStats>) -> String {
    let Some(stats) = stats else {
        return "No patients registered.".to_string();
    };

    let mut out = String::new();
    let _ = writeln!(out, "Total patients : {}", stats.total);
    for (gender, share) in &stats.by_gender {
        let _ = writeln!(out, "  {:<7}: {} ({:.1}%)", gender.label(), share.count, share.percent);
    }
    let _ = writeln!(out, "Average age    : {:.1}", stats.average_age);
    let _ = write!(out, "Age range      : {} - {}", stats.min_age, stats.max_age);
    out
}

pub fn package_stats(stats: Option<&PackageStats>) -> String {
    let Some(stats) = stats else {
        return "No packages available.".to_string();
    };

    let mut out = String::new();
    let _ = writeln!(out, "Total packages : {}", stats.total);
    for (category, share) in &stats.by_category {
        let _ = writeln!(out, "  {:<10}: {} ({:.1}%)", category, share.count, share.percent);
    }
    let _ = writeln!(out, "Average price  : {}", money(stats.average_price));
    let _ = write!(
        out,
        "Price range    : {} - {}",
        money(stats.min_price),
        money(stats.max_price)
    );
    out
}

pub fn revenue(report: &RevenueReport) -> String {
    if report.is_empty() {
        return "No check-up records yet.".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "Records          : {}", report.record_count);
    let _ = writeln!(out, "Total revenue    : {}", money(report.total));
    let _ = writeln!(out, "Average / record : {}", money(report.average_per_record));
    let _ = writeln!(out, "\nBy month:");
    for (month, amount) in &report.by_month {
        let _ = writeln!(out, "  {:<8} {:>14}", month.to_string(), money(*amount));
    }
    let _ = write!(out, "\nBy category:");
    for (category, share) in &report.by_category {
        let _ = write!(
            out,
            "\n  {:<10} {:>14} ({:.1}%)",
            category,
            money(share.amount),
            share.percent
        );
    }
    out
}

pub fn overview(summary: &Overview) -> String {
    format!(
        "Total income : {}\nPatients     : {}\nPackages     : {}\nRecords      : {}",
        money(summary.total_income),
        summary.patient_count,
        summary.package_count,
        summary.record_count
    )
}

pub fn monthly_income(income: &MonthlyIncome) -> String {
    format!(
        "Income for {} : {} from {} check-up(s)",
        income.month,
        money(income.income),
        income.record_count
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcu_core::reports;
    use mcu_core::{Category, ClinicStore, Gender, StoreConfig};

    fn setup_store() -> ClinicStore {
        let mut store = ClinicStore::new(StoreConfig::default());
        store.add_patient("Budi Santoso", Gender::Male, 42).unwrap();
        store.add_package("Basic Panel", Category::Basic, 150.0).unwrap();
        store.add_record(20001, 10001, "05/03/2024".parse().unwrap()).unwrap();
        store
    }

    #[test]
    fn test_tables_list_rows() {
        let store = setup_store();

        let patients = patient_table(store.patients());
        assert!(patients.contains("20001"));
        assert!(patients.contains("Budi Santoso"));
        assert!(patients.contains("Male"));

        let packages = package_table(store.packages());
        assert!(packages.contains("Basic"));
        assert!(packages.contains("$150.00"));

        let records = record_table(store.records());
        assert!(records.contains("30001"));
        assert!(records.contains("05/03/2024"));
    }

    #[test]
    fn test_clip_long_names() {
        assert_eq!(clip("short", 10), "short");
        assert_eq!(clip("a very long package name", 10), "a very ...");
    }

    #[test]
    fn test_empty_reports() {
        let store = ClinicStore::new(StoreConfig::default());
        assert_eq!(
            patient_stats(reports::patient_stats(&store).as_ref()),
            "No patients registered."
        );
        assert_eq!(
            package_stats(reports::package_stats(&store).as_ref()),
            "No packages available."
        );
        assert_eq!(revenue(&reports::revenue_report(&store)), "No check-up records yet.");
    }

    #[test]
    fn test_revenue_report_text() {
        let store = setup_store();
        let text = revenue(&reports::revenue_report(&store));
        assert!(text.contains("Total revenue    : $150.00"));
        assert!(text.contains("03/2024"));
        assert!(text.contains("(100.0%)"));
    }
}
