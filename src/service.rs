// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::Decimal;

use crate::error::{Error, Result};
use crate::models::{self, Expense};
use crate::storage::Storage;
use crate::utils::{fmt_money, month_key};

/// Domain operations over the stored expense record. Every call reads the
/// full record, transforms it in memory, and writes it back through
/// [`Storage`]; there are no partial updates.
pub struct ExpenseService {
    storage: Storage,
}

fn check_month(month: u32) -> Result<()> {
    if !(1..=12).contains(&month) {
        return Err(Error::InvalidInput("month must be between 1 and 12".into()));
    }
    Ok(())
}

impl ExpenseService {
    pub fn new(storage: Storage) -> Self {
        Self { storage }
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// Records a new expense dated `spent_on` (today when `None`) and
    /// returns it together with a budget warning for its month, if any.
    pub fn add_expense(
        &self,
        description: &str,
        amount: Decimal,
        category: Option<String>,
        spent_on: Option<NaiveDate>,
    ) -> Result<(Expense, Option<String>)> {
        // Inputs are checked before next_id so a rejected add does not
        // consume an id or touch the record at all.
        models::check_description(description)?;
        models::check_amount(amount)?;

        let mut expenses = self.storage.read_all_expenses()?;
        let date = spent_on.unwrap_or_else(Self::today);
        let expense = Expense::new(self.storage.next_id()?, description, amount, date, category)?;
        expenses.push(expense.clone());
        self.storage.replace_all_expenses(expenses)?;

        let warning = self.budget_warning_for_month(expense.date.month(), expense.date.year())?;
        Ok((expense, warning))
    }

    /// Overwrites the provided fields of the expense with the given id.
    /// Fields left as `None` are untouched; a call providing no fields is a
    /// caller-level usage error and applies nothing.
    pub fn update_expense(
        &self,
        id: u64,
        description: Option<String>,
        amount: Option<Decimal>,
        category: Option<String>,
    ) -> Result<(Expense, Option<String>)> {
        let mut expenses = self.storage.read_all_expenses()?;
        let Some(expense) = expenses.iter_mut().find(|e| e.id == id) else {
            return Err(Error::NotFound(id));
        };
        if let Some(description) = description {
            models::check_description(&description)?;
            expense.description = description;
        }
        if let Some(amount) = amount {
            models::check_amount(amount)?;
            expense.amount = amount;
        }
        if let Some(category) = category {
            expense.category = Some(category);
        }
        let updated = expense.clone();
        self.storage.replace_all_expenses(expenses)?;

        let warning = self.budget_warning_for_month(updated.date.month(), updated.date.year())?;
        Ok((updated, warning))
    }

    pub fn delete_expense(&self, id: u64) -> Result<()> {
        let mut expenses = self.storage.read_all_expenses()?;
        let before = expenses.len();
        expenses.retain(|e| e.id != id);
        if expenses.len() == before {
            return Err(Error::NotFound(id));
        }
        self.storage.replace_all_expenses(expenses)
    }

    pub fn list_expenses(&self) -> Result<Vec<Expense>> {
        self.storage.read_all_expenses()
    }

    pub fn total_expenses(&self) -> Result<Decimal> {
        Ok(self
            .storage
            .read_all_expenses()?
            .iter()
            .map(|e| e.amount)
            .sum())
    }

    pub fn total_expenses_for_month(&self, month: u32, year: Option<i32>) -> Result<Decimal> {
        check_month(month)?;
        let year = year.unwrap_or_else(|| Self::today().year());
        self.spent_for_month(month, year)
    }

    /// Distinct, trimmed category labels in use. Blank labels contribute
    /// nothing; comparison is case-sensitive.
    pub fn get_categories(&self) -> Result<BTreeSet<String>> {
        Ok(self
            .storage
            .read_all_expenses()?
            .iter()
            .filter_map(|e| e.category.as_deref())
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect())
    }

    pub fn list_expenses_by_category(&self, category: &str) -> Result<Vec<Expense>> {
        let wanted = category.trim();
        if wanted.is_empty() {
            return Err(Error::InvalidInput("category cannot be empty".into()));
        }
        Ok(self
            .storage
            .read_all_expenses()?
            .into_iter()
            .filter(|e| e.category.as_deref().map(str::trim) == Some(wanted))
            .collect())
    }

    /// Writes every stored expense to `path` as CSV, creating missing
    /// parent directories, and returns the written location.
    pub fn export_to_csv(&self, path: &Path) -> Result<PathBuf> {
        let expenses = self.storage.read_all_expenses()?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| io_err(path, e))?;
            }
        }
        let mut wtr = csv::Writer::from_path(path).map_err(|e| csv_err(path, e))?;
        wtr.write_record(["id", "date", "description", "amount", "category"])
            .map_err(|e| csv_err(path, e))?;
        for expense in &expenses {
            wtr.write_record([
                expense.id.to_string(),
                expense.date.to_string(),
                expense.description.clone(),
                expense.amount.to_string(),
                expense.category.clone().unwrap_or_default(),
            ])
            .map_err(|e| csv_err(path, e))?;
        }
        wtr.flush().map_err(|e| io_err(path, e))?;
        Ok(path.to_path_buf())
    }

    /// Sets the budget for the given month (current month when omitted) and
    /// returns its `YYYY-MM` key. Later calls overwrite earlier ones.
    pub fn set_monthly_budget(
        &self,
        amount: Decimal,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<String> {
        models::check_amount(amount)?;
        let today = Self::today();
        let month = month.unwrap_or_else(|| today.month());
        check_month(month)?;
        let year = year.unwrap_or_else(|| today.year());
        let key = month_key(year, month);
        self.storage.set_budget(&key, amount)?;
        Ok(key)
    }

    pub fn get_monthly_budget(
        &self,
        month: Option<u32>,
        year: Option<i32>,
    ) -> Result<Option<Decimal>> {
        let today = Self::today();
        let month = month.unwrap_or_else(|| today.month());
        check_month(month)?;
        let year = year.unwrap_or_else(|| today.year());
        let key = month_key(year, month);
        Ok(self.storage.get_budgets()?.get(&key).copied())
    }

    /// Total spend for a month. Trusted internal helper, no range check.
    pub fn spent_for_month(&self, month: u32, year: i32) -> Result<Decimal> {
        Ok(self
            .storage
            .read_all_expenses()?
            .iter()
            .filter(|e| e.date.year() == year && e.date.month() == month)
            .map(|e| e.amount)
            .sum())
    }

    /// `None` when no budget is set for the month or spend is within it;
    /// otherwise a message naming the month-key, spend, and budget.
    pub fn budget_warning_for_month(&self, month: u32, year: i32) -> Result<Option<String>> {
        let key = month_key(year, month);
        let Some(budget) = self.storage.get_budgets()?.get(&key).copied() else {
            return Ok(None);
        };
        let spent = self.spent_for_month(month, year)?;
        if spent > budget {
            return Ok(Some(format!(
                "budget exceeded for {}: spent {} against a budget of {}",
                key,
                fmt_money(&spent),
                fmt_money(&budget)
            )));
        }
        Ok(None)
    }
}

fn io_err(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn csv_err(path: &Path, err: csv::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source: std::io::Error::other(err),
    }
}
