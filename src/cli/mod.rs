// envseed: Dotenv-style environment file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envseed using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envseed [global options] <command>
//! show [-f FILE] [--json]
//! run [-f FILE] -- COMMAND [ARGS...]
//! version
//! ```

pub mod global;
pub mod run;
pub mod show;


use crate::cli::global::GlobalOptions;
use crate::cli::run::RunArgs;
use crate::cli::show::ShowArgs;
use clap::{Parser, Subcommand};

/// Dotenv-style environment file loader
///
/// Seeds the process environment from a `.env` file and runs commands with
/// the result.
#[derive(Debug, Parser)]
#[command(
    name = "envseed",
    author,
    version,
    about = "Dotenv-style environment file loader",
    long_about = "envseed Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Loads KEY=VALUE pairs from a dotenv-style file into the\n\
                  process environment. `envseed run -- cmd` seeds the\n\
                  environment and executes a command with it; `envseed show`\n\
                  prints the pairs a load would apply.",
    after_help = "ENV FILES:\n\n\
                  An env file holds one directive per line: `# comment` lines\n\
                  and blank lines are ignored, `KEY=VALUE` lines are applied.\n\
                  The value may itself contain `=` characters and may reference\n\
                  already-set variables as `$NAME`; references are expanded\n\
                  once, in file order, against the environment as it is at\n\
                  that line. A missing file is not an error: nothing is\n\
                  loaded and the command proceeds with the inherited\n\
                  environment."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Prints the pairs a load of the env file would apply.
    Show(ShowArgs),

    /// Loads the env file, then runs a command with the seeded environment.
    Run(RunArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version
/// information was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
