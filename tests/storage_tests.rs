// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use rust_decimal::Decimal;
use tempfile::TempDir;

use spendlog::error::Error;
use spendlog::storage::Storage;

fn setup() -> (TempDir, Storage, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expenses.json");
    let storage = Storage::open(Some(path.clone())).unwrap();
    (dir, storage, path)
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn open_seeds_an_empty_record() {
    let (_dir, _storage, path) = setup();
    let raw = std::fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["last_id"], 0);
    assert_eq!(doc["expenses"], serde_json::json!([]));
    assert_eq!(doc["budgets"], serde_json::json!({}));
}

#[test]
fn open_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("a").join("b").join("expenses.json");
    Storage::open(Some(path.clone())).unwrap();
    assert!(path.exists());
}

#[test]
fn reopening_preserves_existing_data() {
    let (_dir, storage, path) = setup();
    storage.set_budget("2024-03", dec("15")).unwrap();
    assert_eq!(storage.next_id().unwrap(), 1);

    let reopened = Storage::open(Some(path)).unwrap();
    assert_eq!(
        reopened.get_budgets().unwrap().get("2024-03").copied(),
        Some(dec("15"))
    );
    assert_eq!(reopened.next_id().unwrap(), 2);
}

#[test]
fn next_id_is_strictly_increasing() {
    let (_dir, storage, _path) = setup();
    assert_eq!(storage.next_id().unwrap(), 1);
    assert_eq!(storage.next_id().unwrap(), 2);
    assert_eq!(storage.next_id().unwrap(), 3);
}

#[test]
fn replace_all_preserves_last_id_and_budgets() {
    let (_dir, storage, path) = setup();
    storage.set_budget("2024-03", dec("15")).unwrap();
    storage.next_id().unwrap();
    storage.next_id().unwrap();

    storage.replace_all_expenses(Vec::new()).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(doc["last_id"], 2);
    assert_eq!(doc["budgets"]["2024-03"], serde_json::json!(15.0));
}

#[test]
fn expense_without_category_field_loads_as_none() {
    let (_dir, storage, path) = setup();
    std::fs::write(
        &path,
        r#"{
            "last_id": 1,
            "expenses": [
                {"id": 1, "description": "Bus", "amount": 2.5, "date": "2024-03-06"}
            ],
            "budgets": {}
        }"#,
    )
    .unwrap();

    let expenses = storage.read_all_expenses().unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].category, None);
    assert_eq!(expenses[0].amount, dec("2.5"));
}

#[test]
fn unparseable_document_is_a_corrupt_record() {
    let (_dir, storage, path) = setup();
    std::fs::write(&path, "{not json").unwrap();
    let err = storage.read_all_expenses().unwrap_err();
    assert!(matches!(err, Error::CorruptRecord { .. }));
}

#[test]
fn negative_amount_in_document_is_a_corrupt_record() {
    let (_dir, storage, path) = setup();
    std::fs::write(
        &path,
        r#"{
            "last_id": 1,
            "expenses": [
                {"id": 1, "description": "Lunch", "amount": -5.0, "date": "2024-03-05"}
            ],
            "budgets": {}
        }"#,
    )
    .unwrap();
    let err = storage.read_all_expenses().unwrap_err();
    assert!(matches!(err, Error::CorruptRecord { .. }));
}

#[test]
fn blank_description_in_document_is_a_corrupt_record() {
    let (_dir, storage, path) = setup();
    std::fs::write(
        &path,
        r#"{
            "last_id": 1,
            "expenses": [
                {"id": 1, "description": "  ", "amount": 5.0, "date": "2024-03-05"}
            ],
            "budgets": {}
        }"#,
    )
    .unwrap();
    let err = storage.read_all_expenses().unwrap_err();
    assert!(matches!(err, Error::CorruptRecord { .. }));
}

#[test]
fn unparseable_date_in_document_is_a_corrupt_record() {
    let (_dir, storage, path) = setup();
    std::fs::write(
        &path,
        r#"{
            "last_id": 1,
            "expenses": [
                {"id": 1, "description": "Lunch", "amount": 5.0, "date": "2024-13-40"}
            ],
            "budgets": {}
        }"#,
    )
    .unwrap();
    let err = storage.read_all_expenses().unwrap_err();
    assert!(matches!(err, Error::CorruptRecord { .. }));
}

#[test]
fn negative_budget_in_document_is_a_corrupt_record() {
    let (_dir, storage, path) = setup();
    std::fs::write(
        &path,
        r#"{"last_id": 0, "expenses": [], "budgets": {"2024-03": -1.0}}"#,
    )
    .unwrap();
    let err = storage.get_budgets().unwrap_err();
    assert!(matches!(err, Error::CorruptRecord { .. }));
}
