// envseed: Dotenv-style environment file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Run command for envseed.
//!
//! ```text
//! run_run_command(args)
//!   loader::load_from(file)      (seeds the process environment)
//!   which::which(program)        (PATH resolution)
//!   tokio::process::Command      (inherited stdio + environment)
//!   --> child exit code
//! ```

use std::process::ExitCode;

use tokio::process::Command;
use tracing::debug;

use crate::cli::run::RunArgs;
use crate::error::{ProcessError, Result, bail_out};
use crate::loader;

/// Run the run command.
///
/// Loads the env file into the process environment, then executes the child
/// command, which inherits the seeded environment and the parent's stdio.
/// The child's exit code becomes envseed's exit code.
///
/// # Errors
///
/// Returns an error if the env file exists but cannot be read, if the
/// executable cannot be found in PATH, if spawning or waiting fails, or if
/// the child was terminated without an exit code.
pub async fn run_run_command(args: &RunArgs) -> Result<ExitCode> {
    loader::load_from(&args.file).await?;

    let Some((program, rest)) = args.command.split_first() else {
        // clap enforces a non-empty command; kept as a guard for direct calls
        return Err(bail_out("no command specified").into());
    };

    let exe = which::which(program).map_err(|_| ProcessError::ExecutableNotFound {
        name: program.clone(),
    })?;
    debug!(exe = %exe.display(), "resolved executable");

    let mut child = Command::new(&exe)
        .args(rest)
        .spawn()
        .map_err(|e| ProcessError::SpawnFailed {
            command: program.clone(),
            source: e,
        })?;

    let status = child.wait().await.map_err(|e| ProcessError::WaitFailed {
        command: program.clone(),
        source: e,
    })?;

    match status.code() {
        Some(0) => Ok(ExitCode::SUCCESS),
        Some(code) => {
            debug!(code, "child exited non-zero");
            Ok(u8::try_from(code).map_or(ExitCode::FAILURE, ExitCode::from))
        }
        None => Err(ProcessError::Interrupted {
            command: program.clone(),
        }
        .into()),
    }
}
