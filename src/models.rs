// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single recorded expense. Ids are assigned by storage and never reused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: u64,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

pub(crate) fn check_description(description: &str) -> Result<()> {
    if description.trim().is_empty() {
        return Err(Error::InvalidInput("description cannot be empty".into()));
    }
    Ok(())
}

pub(crate) fn check_amount(amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        return Err(Error::InvalidInput("amount cannot be negative".into()));
    }
    Ok(())
}

impl Expense {
    pub fn new(
        id: u64,
        description: impl Into<String>,
        amount: Decimal,
        date: NaiveDate,
        category: Option<String>,
    ) -> Result<Self> {
        let description = description.into();
        check_description(&description)?;
        check_amount(amount)?;
        Ok(Self {
            id,
            description,
            amount,
            date,
            category,
        })
    }

    /// Re-checks the construction invariants; used when decoding a record
    /// that may have been edited out-of-band.
    pub(crate) fn ensure_valid(&self) -> std::result::Result<(), String> {
        if self.description.trim().is_empty() {
            return Err(format!("expense {} has an empty description", self.id));
        }
        if self.amount < Decimal::ZERO {
            return Err(format!("expense {} has a negative amount", self.id));
        }
        Ok(())
    }
}
