// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::service::ExpenseService;
use crate::utils::pretty_table;

pub fn handle(svc: &ExpenseService, m: &clap::ArgMatches) -> Result<()> {
    if let Some(("list", _)) = m.subcommand() {
        let categories = svc.get_categories()?;
        if categories.is_empty() {
            println!("No categories in use.");
            return Ok(());
        }
        let rows = categories.into_iter().map(|c| vec![c]).collect();
        println!("{}", pretty_table(&["Category"], rows));
    }
    Ok(())
}
