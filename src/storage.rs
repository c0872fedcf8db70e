// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Expense;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Spendlog", "spendlog"));

/// Platform data file used when the caller does not supply a path.
pub fn default_store_path() -> Option<PathBuf> {
    ProjectDirs::from(APP.0, APP.1, APP.2).map(|proj| proj.data_dir().join("expenses.json"))
}

/// The entire durable state, persisted as a single JSON document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Record {
    last_id: u64,
    expenses: Vec<Expense>,
    budgets: BTreeMap<String, Decimal>,
}

/// Whole-record persistence over one JSON file. Every operation is a full
/// read-modify-write; there is no locking, so concurrent writers race
/// (single-invocation CLI usage is the supported mode).
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    /// Opens the store at `path`, or at the platform default when `None`,
    /// seeding an empty record if none exists yet.
    pub fn open(path: Option<PathBuf>) -> Result<Self> {
        let file_path = match path {
            Some(p) => p,
            None => default_store_path().ok_or_else(|| Error::Io {
                path: PathBuf::from("expenses.json"),
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "could not determine a platform data directory",
                ),
            })?,
        };
        let storage = Self { file_path };
        storage.ensure_exists()?;
        Ok(storage)
    }

    /// Creates the parent directory and an initial empty record if the
    /// backing file is missing. Idempotent.
    pub fn ensure_exists(&self) -> Result<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }
        if !self.file_path.exists() {
            self.write_record(&Record::default())?;
        }
        Ok(())
    }

    pub fn read_all_expenses(&self) -> Result<Vec<Expense>> {
        Ok(self.read_record()?.expenses)
    }

    /// Overwrites the expense sequence, preserving `last_id` and budgets.
    pub fn replace_all_expenses(&self, expenses: Vec<Expense>) -> Result<()> {
        let mut record = self.read_record()?;
        record.expenses = expenses;
        self.write_record(&record)
    }

    /// Bumps and returns the id counter. Ids are never recycled, so each
    /// call returns a value strictly greater than every earlier one.
    pub fn next_id(&self) -> Result<u64> {
        let mut record = self.read_record()?;
        record.last_id += 1;
        self.write_record(&record)?;
        Ok(record.last_id)
    }

    pub fn get_budgets(&self) -> Result<BTreeMap<String, Decimal>> {
        Ok(self.read_record()?.budgets)
    }

    pub fn set_budget(&self, key: &str, amount: Decimal) -> Result<()> {
        let mut record = self.read_record()?;
        record.budgets.insert(key.to_string(), amount);
        self.write_record(&record)
    }

    fn read_record(&self) -> Result<Record> {
        let raw = fs::read_to_string(&self.file_path).map_err(|e| self.io_err(e))?;
        let record: Record = serde_json::from_str(&raw).map_err(|e| self.corrupt(e.to_string()))?;
        for expense in &record.expenses {
            expense.ensure_valid().map_err(|reason| self.corrupt(reason))?;
        }
        if let Some((key, amount)) = record.budgets.iter().find(|(_, a)| **a < Decimal::ZERO) {
            return Err(self.corrupt(format!("budget for {} is negative ({})", key, amount)));
        }
        Ok(record)
    }

    fn write_record(&self, record: &Record) -> Result<()> {
        let body =
            serde_json::to_string_pretty(record).map_err(|e| self.corrupt(e.to_string()))?;
        fs::write(&self.file_path, body).map_err(|e| self.io_err(e))
    }

    fn io_err(&self, source: std::io::Error) -> Error {
        Error::Io {
            path: self.file_path.clone(),
            source,
        }
    }

    fn corrupt(&self, reason: impl Into<String>) -> Error {
        Error::CorruptRecord {
            path: self.file_path.clone(),
            reason: reason.into(),
        }
    }
}
