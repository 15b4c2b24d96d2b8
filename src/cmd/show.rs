// envseed: Dotenv-style environment file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Show command for envseed.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cli::show::ShowArgs;
use crate::error::Result;
use crate::loader;

/// JSON payload printed by `show --json`.
#[derive(Debug, Serialize)]
pub struct ShowReport {
    pub path: String,
    pub vars: BTreeMap<String, String>,
}

/// Run the show command.
///
/// Prints the pairs a load of the env file would commit, without touching
/// the process environment. A missing file prints nothing (or an empty JSON
/// object), mirroring the loader's silent no-op.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, or if JSON
/// serialization fails.
pub async fn run_show_command(args: &ShowArgs) -> Result<()> {
    let vars = loader::preview(&args.file).await?;

    if args.json {
        let report = ShowReport {
            path: args.file.display().to_string(),
            vars,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for (key, value) in &vars {
            println!("{key}={value}");
        }
    }

    Ok(())
}
