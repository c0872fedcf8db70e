// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};

use crate::service::ExpenseService;
use crate::utils::{fmt_money, parse_date, parse_decimal, pretty_table};

pub fn add(svc: &ExpenseService, sub: &clap::ArgMatches) -> Result<()> {
    let description = sub.get_one::<String>("description").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let category = sub.get_one::<String>("category").map(|s| s.to_string());
    let spent_on = match sub.get_one::<String>("date") {
        Some(s) => Some(parse_date(s)?),
        None => None,
    };

    let (expense, warning) = svc.add_expense(description, amount, category, spent_on)?;
    println!(
        "Recorded expense {} ({} on {})",
        expense.id,
        fmt_money(&expense.amount),
        expense.date
    );
    if let Some(warning) = warning {
        println!("Warning: {}", warning);
    }
    Ok(())
}

pub fn list(svc: &ExpenseService, sub: &clap::ArgMatches) -> Result<()> {
    let expenses = match sub.get_one::<String>("category") {
        Some(category) => svc.list_expenses_by_category(category)?,
        None => svc.list_expenses()?,
    };
    if expenses.is_empty() {
        println!("No expenses recorded.");
        return Ok(());
    }
    let rows = expenses
        .iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.date.to_string(),
                e.description.clone(),
                fmt_money(&e.amount),
                e.category.clone().unwrap_or_default(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["ID", "Date", "Description", "Amount", "Category"], rows)
    );
    Ok(())
}

pub fn update(svc: &ExpenseService, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<u64>("id").unwrap();
    let description = sub.get_one::<String>("description").map(|s| s.to_string());
    let amount = match sub.get_one::<String>("amount") {
        Some(s) => Some(parse_decimal(s)?),
        None => None,
    };
    let category = sub.get_one::<String>("category").map(|s| s.to_string());

    // The service applies whatever subset it is given; an empty update is a
    // usage error at this layer.
    if description.is_none() && amount.is_none() && category.is_none() {
        bail!("nothing to update: provide --description, --amount, and/or --category");
    }

    let (expense, warning) = svc.update_expense(id, description, amount, category)?;
    println!("Updated expense {}", expense.id);
    if let Some(warning) = warning {
        println!("Warning: {}", warning);
    }
    Ok(())
}

pub fn delete(svc: &ExpenseService, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<u64>("id").unwrap();
    svc.delete_expense(id)?;
    println!("Deleted expense {}", id);
    Ok(())
}
