// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::Result;

use spendlog::{cli, commands, service::ExpenseService, storage::Storage};

/// Overrides the store location; used by scripted runs and tests.
const STORE_ENV: &str = "SPENDLOG_STORE";

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let store_path = std::env::var_os(STORE_ENV).map(PathBuf::from);
    let service = ExpenseService::new(Storage::open(store_path)?);

    match matches.subcommand() {
        Some(("add", sub)) => commands::expenses::add(&service, sub)?,
        Some(("list", sub)) => commands::expenses::list(&service, sub)?,
        Some(("update", sub)) => commands::expenses::update(&service, sub)?,
        Some(("delete", sub)) => commands::expenses::delete(&service, sub)?,
        Some(("summary", sub)) => commands::reports::summary(&service, sub)?,
        Some(("category", sub)) => commands::categories::handle(&service, sub)?,
        Some(("budget", sub)) => commands::budgets::handle(&service, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&service, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
