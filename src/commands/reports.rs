// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::service::ExpenseService;
use crate::utils::{fmt_money, month_name};

pub fn summary(svc: &ExpenseService, sub: &clap::ArgMatches) -> Result<()> {
    match sub.get_one::<u32>("month") {
        Some(&month) => {
            let year = sub.get_one::<i32>("year").copied();
            let total = svc.total_expenses_for_month(month, year)?;
            println!(
                "Total expenses for {}: {}",
                month_name(month),
                fmt_money(&total)
            );
        }
        None => {
            let total = svc.total_expenses()?;
            println!("Total expenses: {}", fmt_money(&total));
        }
    }
    Ok(())
}
