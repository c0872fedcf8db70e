// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::Path;

use anyhow::Result;

use crate::service::ExpenseService;

pub fn handle(svc: &ExpenseService, m: &clap::ArgMatches) -> Result<()> {
    let out = m.get_one::<String>("out").unwrap();
    let path = svc.export_to_csv(Path::new(out))?;
    println!("Exported expenses to {}", path.display());
    Ok(())
}
