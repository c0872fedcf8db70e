// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use thiserror::Error;

/// Error kinds surfaced by the expense core. The CLI maps anything that
/// bubbles up to a non-zero exit via anyhow.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    InvalidInput(String),

    #[error("expense with id {0} not found")]
    NotFound(u64),

    #[error("corrupt expense record at {}: {reason}", path.display())]
    CorruptRecord { path: PathBuf, reason: String },

    #[error("storage failure at {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
