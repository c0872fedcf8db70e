// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use tempfile::TempDir;

use spendlog::service::ExpenseService;
use spendlog::storage::Storage;
use spendlog::{cli, commands};

fn setup() -> (TempDir, ExpenseService) {
    let dir = tempfile::tempdir().unwrap();
    let storage = Storage::open(Some(dir.path().join("expenses.json"))).unwrap();
    (dir, ExpenseService::new(storage))
}

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn add_command_records_an_expense() {
    let (_dir, svc) = setup();
    let matches = cli::build_cli().get_matches_from([
        "spendlog",
        "add",
        "--description",
        "Lunch",
        "--amount",
        "20",
        "--category",
        "Food",
        "--date",
        "2024-03-05",
    ]);
    let Some(("add", sub)) = matches.subcommand() else {
        panic!("no add subcommand");
    };
    commands::expenses::add(&svc, sub).unwrap();

    let expenses = svc.list_expenses().unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].id, 1);
    assert_eq!(expenses[0].description, "Lunch");
    assert_eq!(expenses[0].amount, dec("20"));
    assert_eq!(expenses[0].category.as_deref(), Some("Food"));
}

#[test]
fn update_command_requires_at_least_one_field() {
    let (_dir, svc) = setup();
    let matches = cli::build_cli().get_matches_from(["spendlog", "update", "--id", "1"]);
    let Some(("update", sub)) = matches.subcommand() else {
        panic!("no update subcommand");
    };
    assert!(commands::expenses::update(&svc, sub).is_err());
}

#[test]
fn budget_set_command_stores_the_budget() {
    let (_dir, svc) = setup();
    let matches = cli::build_cli().get_matches_from([
        "spendlog", "budget", "set", "--amount", "100", "--month", "3", "--year", "2024",
    ]);
    let Some(("budget", budget_m)) = matches.subcommand() else {
        panic!("no budget subcommand");
    };
    commands::budgets::handle(&svc, budget_m).unwrap();

    assert_eq!(
        svc.get_monthly_budget(Some(3), Some(2024)).unwrap(),
        Some(dec("100"))
    );
}

#[test]
fn export_command_writes_the_csv_file() {
    let (dir, svc) = setup();
    svc.add_expense(
        "Lunch",
        dec("20"),
        None,
        Some(chrono::NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()),
    )
    .unwrap();

    let out_path = dir.path().join("export.csv");
    let out_str = out_path.to_string_lossy().to_string();
    let matches =
        cli::build_cli().get_matches_from(["spendlog", "export", "--out", &out_str]);
    let Some(("export", export_m)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    commands::exporter::handle(&svc, export_m).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert!(contents.starts_with("id,date,description,amount,category"));
    assert!(contents.contains("1,2024-03-05,Lunch,"));
}
