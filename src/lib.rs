// envseed: Dotenv-style environment file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                  main.rs
//!                     |
//!          +----------+----------+
//!          v                     v
//!       cli (clap)          cmd (handlers)
//!          |                 show / run
//!          +----------+----------+
//!                     v
//!        ,-------------------------,
//!        |         loader          |
//!        |  file -> lines -> parse |
//!        |  -> subst -> store.set  |
//!        '-----------+------------'
//!                    |
//!                    v
//!        env   EnvStore: ProcessEnv | EnvMap
//!
//!   +--------------------------------------+
//!   |  foundation       error, logging     |
//!   +--------------------------------------+
//! ```
//!
//! The common entry point is [`loader::load`] (or [`loader::load_from`]),
//! which seeds the process environment from a dotenv file:
//!
//! ```no_run
//! # async fn example() -> envseed::error::Result<()> {
//! envseed::loader::load().await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod cmd;
pub mod env;
pub mod error;
pub mod loader;
pub mod logging;
