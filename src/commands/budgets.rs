// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{Datelike, Local};

use crate::service::ExpenseService;
use crate::utils::{fmt_money, month_key, parse_decimal};

pub fn handle(svc: &ExpenseService, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(svc, sub)?,
        Some(("show", sub)) => show(svc, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(svc: &ExpenseService, sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let month = sub.get_one::<u32>("month").copied();
    let year = sub.get_one::<i32>("year").copied();
    let key = svc.set_monthly_budget(amount, month, year)?;
    println!("Budget for {} set to {}", key, fmt_money(&amount));
    Ok(())
}

fn show(svc: &ExpenseService, sub: &clap::ArgMatches) -> Result<()> {
    let today = Local::now().date_naive();
    let month = sub.get_one::<u32>("month").copied().unwrap_or_else(|| today.month());
    let year = sub.get_one::<i32>("year").copied().unwrap_or_else(|| today.year());
    let key = month_key(year, month);

    match svc.get_monthly_budget(Some(month), Some(year))? {
        Some(budget) => {
            let spent = svc.spent_for_month(month, year)?;
            let status = if spent > budget {
                format!("exceeded by {}", fmt_money(&(spent - budget)))
            } else {
                format!("{} remaining", fmt_money(&(budget - spent)))
            };
            println!(
                "{}: budget {}, spent {} ({})",
                key,
                fmt_money(&budget),
                fmt_money(&spent),
                status
            );
        }
        None => println!("No budget set for {}", key),
    }
    Ok(())
}
