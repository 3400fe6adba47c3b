//! Snapshot save/load integration tests.

use std::fs;
use std::path::Path;

use mcu_core::models::Entity;
use mcu_core::{
    Category, CheckupDate, ClinicStore, Gender, Patient, PatientSort, StoreConfig, StoreError,
};
use tempfile::tempdir;

fn store_at(path: &Path) -> ClinicStore {
    ClinicStore::new(StoreConfig::with_data_file(path))
}

fn date(s: &str) -> CheckupDate {
    s.parse().unwrap()
}

fn assert_same_contents(a: &ClinicStore, b: &ClinicStore) {
    assert_eq!(a.patients().items(), b.patients().items());
    assert_eq!(a.packages().items(), b.packages().items());
    assert_eq!(a.records().items(), b.records().items());
}

#[test]
fn test_round_trip_empty_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");

    let store = store_at(&path);
    store.save().unwrap();

    let loaded = ClinicStore::open(StoreConfig::with_data_file(&path)).unwrap();
    assert!(loaded.patients().is_empty());
    assert!(loaded.packages().is_empty());
    assert!(loaded.records().is_empty());
    assert_eq!(loaded.patients().next_id().unwrap(), 20001);
}

#[test]
fn test_round_trip_single_entities() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");

    let mut store = store_at(&path);
    store.add_patient("Budi Santoso", Gender::Male, 42).unwrap();
    store
        .add_package("Executive Full Body", Category::Executive, 2_500_000.5)
        .unwrap();
    store.add_record(20001, 10001, date("29/02/2024")).unwrap();
    store.save().unwrap();

    let loaded = ClinicStore::open(StoreConfig::with_data_file(&path)).unwrap();
    assert_same_contents(&store, &loaded);

    let record = loaded.get_record(0).unwrap();
    assert_eq!(record.patient.name, "Budi Santoso");
    assert_eq!(record.package.price, 2_500_000.5);
    assert_eq!(record.date.to_string(), "29/02/2024");
}

#[test]
fn test_round_trip_full_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");

    let mut store = store_at(&path);
    for i in 0..100u32 {
        let gender = if i % 2 == 0 { Gender::Female } else { Gender::Male };
        store.add_patient(&format!("Patient {:03}", i), gender, i % 90).unwrap();
        let category = Category::ALL[(i % 4) as usize];
        store
            .add_package(&format!("Package {:03}", i), category, f64::from(i) * 12.5)
            .unwrap();
    }
    for i in 0..100u32 {
        let day = i % 28 + 1;
        let month = i % 12 + 1;
        store
            .add_record(20001 + i, 10001 + (99 - i), CheckupDate::new(day, month, 2023).unwrap())
            .unwrap();
    }
    assert!(store.patients().is_full());
    assert!(store.records().is_full());
    store.save().unwrap();

    let loaded = ClinicStore::open(StoreConfig::with_data_file(&path)).unwrap();
    assert_eq!(loaded.patients().len(), 100);
    assert_eq!(loaded.packages().len(), 100);
    assert_eq!(loaded.records().len(), 100);
    assert_same_contents(&store, &loaded);
}

#[test]
fn test_saved_file_shape() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");

    let mut store = store_at(&path);
    store.add_patient("Rina", Gender::Female, 29).unwrap();
    store.save().unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    for key in ["patients", "packages", "records"] {
        assert_eq!(value[key]["daftar"].as_array().unwrap().len(), 100, "{}", key);
    }
    assert_eq!(value["patients"]["n"], 1);
    assert_eq!(value["patients"]["daftar"][0]["name"], "Rina");
    assert_eq!(value["patients"]["daftar"][0]["gender"], "F");
    assert_eq!(value["patients"]["daftar"][1], Patient::blank_slot());
    assert_eq!(value["records"]["n"], 0);
    assert!(raw.contains("\n  \"packages\": {"));
}

#[test]
fn test_missing_file_is_empty_store() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");

    let store = ClinicStore::open(StoreConfig::with_data_file(&path)).unwrap();
    assert!(store.patients().is_empty());
    assert!(!path.exists());
}

#[test]
fn test_malformed_file_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, "{ not json").unwrap();

    let result = ClinicStore::open(StoreConfig::with_data_file(&path));
    assert!(matches!(result, Err(StoreError::Json(_))));
}

#[test]
fn test_schema_mismatch_is_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    // "age" as a string in a live slot
    fs::write(
        &path,
        r#"{
  "patients": { "daftar": [ {"id": 20001, "name": "Budi", "gender": "M", "age": "forty"} ], "n": 1 },
  "packages": { "daftar": [], "n": 0 },
  "records":  { "daftar": [], "n": 0 }
}"#,
    )
    .unwrap();

    let result = ClinicStore::open(StoreConfig::with_data_file(&path));
    assert!(matches!(result, Err(StoreError::Json(_))));

    // Missing top-level section
    fs::write(&path, r#"{ "patients": { "daftar": [], "n": 0 } }"#).unwrap();
    let result = ClinicStore::open(StoreConfig::with_data_file(&path));
    assert!(matches!(result, Err(StoreError::Json(_))));
}

#[test]
fn test_failed_load_keeps_current_contents() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, "[]").unwrap();

    let mut store = store_at(&path);
    store.add_patient("Rina", Gender::Female, 29).unwrap();
    assert!(store.load().is_err());
    assert_eq!(store.patients().len(), 1);
}

#[test]
fn test_loads_file_without_last_id() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    // Older files carry only daftar and n; padding uses empty strings.
    fs::write(
        &path,
        r#"{
  "patients": {
    "daftar": [
      {"id": 20005, "name": "A", "gender": "F", "age": 30},
      {"id": 20003, "name": "B", "gender": "M", "age": 31},
      {"id": 20010, "name": "C", "gender": "F", "age": 32},
      {"id": 0, "name": "", "gender": "", "age": 0}
    ],
    "n": 3
  },
  "packages": { "daftar": [ {"id": 0, "name": "", "category": "", "price": 0} ], "n": 0 },
  "records": {
    "daftar": [
      {"id": 0, "patient": {"id": 0, "name": "", "gender": "", "age": 0},
       "package": {"id": 0, "name": "", "category": "", "price": 0}, "date": ""}
    ],
    "n": 0
  }
}"#,
    )
    .unwrap();

    let store = ClinicStore::open(StoreConfig::with_data_file(&path)).unwrap();
    assert_eq!(store.patients().len(), 3);
    assert_eq!(store.patients().next_id().unwrap(), 20011);
    assert!(!store.patients().is_id_ordered());
    assert_eq!(store.find_patient_by_id(20003), Some(1));
}

#[test]
fn test_high_water_mark_survives_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");

    let mut store = store_at(&path);
    store.add_patient("A", Gender::Female, 30).unwrap();
    store.add_patient("B", Gender::Male, 31).unwrap();
    store.delete_patient(1).unwrap();
    store.save().unwrap();

    let mut loaded = ClinicStore::open(StoreConfig::with_data_file(&path)).unwrap();
    let added = loaded.add_patient("C", Gender::Female, 32).unwrap();
    assert_eq!(added.id, 20003);
}

#[test]
fn test_sort_order_is_saved() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");

    let mut store = store_at(&path);
    store.add_patient("Charlie", Gender::Male, 45).unwrap();
    store.add_patient("Alice", Gender::Female, 30).unwrap();
    store.add_patient("Bob", Gender::Male, 52).unwrap();
    store.sort_patients(PatientSort::Name);
    store.save().unwrap();

    let loaded = ClinicStore::open(StoreConfig::with_data_file(&path)).unwrap();
    let names: Vec<&str> = loaded.patients().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);
    assert_eq!(loaded.find_patient_by_id(20001), Some(2));
}

#[test]
fn test_snapshot_larger_than_capacity_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");

    let mut store = store_at(&path);
    store.add_patient("A", Gender::Female, 30).unwrap();
    store.add_patient("B", Gender::Male, 31).unwrap();
    store.save().unwrap();

    let small = StoreConfig {
        capacity: 1,
        ..StoreConfig::with_data_file(&path)
    };
    assert!(matches!(
        ClinicStore::open(small),
        Err(StoreError::Corrupt(_))
    ));
}

#[test]
fn test_maximum_id_in_file_does_not_overflow() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(
        &path,
        r#"{
  "patients": { "daftar": [ {"id": 4294967295, "name": "Last", "gender": "F", "age": 30} ], "n": 1 },
  "packages": { "daftar": [], "n": 0 },
  "records":  { "daftar": [], "n": 0 }
}"#,
    )
    .unwrap();

    let mut store = ClinicStore::open(StoreConfig::with_data_file(&path)).unwrap();
    let err = store.add_patient("Next", Gender::Female, 30).unwrap_err();
    assert!(matches!(err, StoreError::IdsExhausted { .. }));
    assert_eq!(store.patients().len(), 1);
}

#[test]
fn test_id_below_start_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(
        &path,
        r#"{
  "patients": { "daftar": [ {"id": 5, "name": "Early", "gender": "M", "age": 30} ], "n": 1 },
  "packages": { "daftar": [], "n": 0 },
  "records":  { "daftar": [], "n": 0 }
}"#,
    )
    .unwrap();

    let result = ClinicStore::open(StoreConfig::with_data_file(&path));
    assert!(matches!(result, Err(StoreError::Corrupt(_))));
}
