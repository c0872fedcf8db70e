// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, Command};

pub fn build_cli() -> Command {
    Command::new("spendlog")
        .version(crate_version!())
        .about("Personal expense tracking with monthly budgets and CSV export")
        .subcommand(
            Command::new("add")
                .about("Record a new expense")
                .arg(
                    Arg::new("description")
                        .long("description")
                        .required(true)
                        .help("What the money went to"),
                )
                .arg(
                    Arg::new("amount")
                        .long("amount")
                        .required(true)
                        .help("Amount spent (non-negative)"),
                )
                .arg(Arg::new("category").long("category").help("Category label"))
                .arg(
                    Arg::new("date")
                        .long("date")
                        .help("Spend date as YYYY-MM-DD (defaults to today)"),
                ),
        )
        .subcommand(
            Command::new("list").about("List recorded expenses").arg(
                Arg::new("category")
                    .long("category")
                    .help("Only expenses with this category"),
            ),
        )
        .subcommand(
            Command::new("update")
                .about("Update an expense by id")
                .arg(
                    Arg::new("id")
                        .long("id")
                        .required(true)
                        .value_parser(clap::value_parser!(u64)),
                )
                .arg(Arg::new("description").long("description").help("New description"))
                .arg(Arg::new("amount").long("amount").help("New amount (non-negative)"))
                .arg(Arg::new("category").long("category").help("New category")),
        )
        .subcommand(
            Command::new("delete").about("Delete an expense by id").arg(
                Arg::new("id")
                    .long("id")
                    .required(true)
                    .value_parser(clap::value_parser!(u64)),
            ),
        )
        .subcommand(
            Command::new("summary")
                .about("Total spend, optionally narrowed to one month")
                .arg(
                    Arg::new("month")
                        .long("month")
                        .value_parser(clap::value_parser!(u32))
                        .help("Month 1-12"),
                )
                .arg(
                    Arg::new("year")
                        .long("year")
                        .value_parser(clap::value_parser!(i32))
                        .help("Year (defaults to the current one)"),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Category queries")
                .subcommand(Command::new("list").about("List distinct categories in use")),
        )
        .subcommand(
            Command::new("export").about("Export all expenses to CSV").arg(
                Arg::new("out")
                    .long("out")
                    .required(true)
                    .help("Destination file"),
            ),
        )
        .subcommand(
            Command::new("budget")
                .about("Monthly budgets")
                .subcommand(
                    Command::new("set")
                        .about("Set the budget for a month")
                        .arg(
                            Arg::new("amount")
                                .long("amount")
                                .required(true)
                                .help("Budget amount (non-negative)"),
                        )
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .value_parser(clap::value_parser!(u32))
                                .help("Month 1-12 (defaults to the current one)"),
                        )
                        .arg(
                            Arg::new("year")
                                .long("year")
                                .value_parser(clap::value_parser!(i32))
                                .help("Year (defaults to the current one)"),
                        ),
                )
                .subcommand(
                    Command::new("show")
                        .about("Show budget vs spend for a month")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .value_parser(clap::value_parser!(u32))
                                .help("Month 1-12 (defaults to the current one)"),
                        )
                        .arg(
                            Arg::new("year")
                                .long("year")
                                .value_parser(clap::value_parser!(i32))
                                .help("Year (defaults to the current one)"),
                        ),
                ),
        )
}
