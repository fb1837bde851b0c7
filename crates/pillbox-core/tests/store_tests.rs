//! Store integration tests.

use pillbox_core::{Database, DbConfig, DbError, Drug, FileStore, Patient};
use tempfile::TempDir;

fn make_drug(id: i64, name: &str) -> Drug {
    Drug::new(id, name, 9.99, "100mg daily")
}

#[test]
fn test_drug_ledger_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("drug_data.txt"));

    let drugs = vec![
        make_drug(1, "Carprofen"),
        make_drug(2, "Meloxicam"),
        make_drug(3, "Acepromazine"),
    ];
    for drug in &drugs {
        store.append(drug).unwrap();
    }

    assert_eq!(store.read_all().unwrap(), drugs);
}

#[test]
fn test_drug_ledger_survives_corrupt_record() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("drug_data.txt");
    let store = FileStore::new(&path);

    store.append(&make_drug(1, "Carprofen")).unwrap();
    // Simulate an interleaved writer corrupting one record.
    std::fs::write(
        &path,
        format!(
            "{}\ngarbage line\n{}\n",
            make_drug(1, "Carprofen").to_line(),
            make_drug(2, "Meloxicam").to_line()
        ),
    )
    .unwrap();

    let drugs = store.read_all().unwrap();
    assert_eq!(drugs.len(), 2);
    assert_eq!(drugs[0].name, "Carprofen");
    assert_eq!(drugs[1].name, "Meloxicam");
}

#[test]
fn test_patient_registry_round_trip() {
    let dir = TempDir::new().unwrap();
    let db = Database::new(DbConfig::new(dir.path().join("patients.db")));
    db.ensure_schema().unwrap();

    db.insert_patient(&Patient::new(999, "Jane", "Doe", "1990-01-01"))
        .unwrap();

    let patients = db.list_patients().unwrap();
    assert_eq!(patients.len(), 1);
    assert_eq!(patients[0].patient_id, 999);
    assert_eq!(patients[0].full_name(), "Jane Doe");
    assert_eq!(patients[0].dob, "1990-01-01");
}

#[test]
fn test_patient_registry_duplicate_id() {
    let dir = TempDir::new().unwrap();
    let db = Database::new(DbConfig::new(dir.path().join("patients.db")));
    db.ensure_schema().unwrap();

    db.insert_patient(&Patient::new(1, "Jane", "Doe", "1990-01-01"))
        .unwrap();
    let second = db.insert_patient(&Patient::new(1, "John", "Roe", "1985-06-15"));
    assert!(matches!(second, Err(DbError::Constraint(_))));

    let patients = db.list_patients().unwrap();
    assert_eq!(patients.len(), 1);
    assert_eq!(patients[0].first_name, "Jane");
}

#[test]
fn test_schema_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("patients.db");

    {
        let db = Database::new(DbConfig::new(&path));
        db.ensure_schema().unwrap();
        db.insert_patient(&Patient::new(1, "Jane", "Doe", "1990-01-01"))
            .unwrap();
    }

    // A fresh handle against the same file sees the stored rows.
    let db = Database::new(DbConfig::new(&path));
    db.ensure_schema().unwrap();
    assert_eq!(db.list_patients().unwrap().len(), 1);
}

#[test]
fn test_stores_are_independent() {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(dir.path().join("drug_data.txt"));
    let db = Database::new(DbConfig::new(dir.path().join("patients.db")));
    db.ensure_schema().unwrap();

    store.append(&make_drug(1, "Carprofen")).unwrap();
    db.insert_patient(&Patient::new(1, "Jane", "Doe", "1990-01-01"))
        .unwrap();

    assert_eq!(store.read_all().unwrap().len(), 1);
    assert_eq!(db.list_patients().unwrap().len(), 1);
}
