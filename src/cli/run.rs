// envseed: Dotenv-style environment file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `run` command.

use crate::loader::DEFAULT_ENV_FILE;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the `run` command.
#[derive(Debug, Clone, Args)]
pub struct RunArgs {
    /// Path to the environment file.
    #[arg(short = 'f', long = "file", value_name = "FILE", default_value = DEFAULT_ENV_FILE)]
    pub file: PathBuf,

    /// Command to run with the seeded environment, after a `--` separator.
    #[arg(last = true, required = true, num_args = 1.., value_name = "COMMAND")]
    pub command: Vec<String>,
}
