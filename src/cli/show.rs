// envseed: Dotenv-style environment file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments for the `show` command.

use crate::loader::DEFAULT_ENV_FILE;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the `show` command.
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Path to the environment file.
    #[arg(short = 'f', long = "file", value_name = "FILE", default_value = DEFAULT_ENV_FILE)]
    pub file: PathBuf,

    /// Print the pairs as a JSON object instead of KEY=VALUE lines.
    #[arg(long)]
    pub json: bool,
}
