// envseed: Dotenv-style environment file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Dotenv file loading.
//!
//! # Loader Pipeline
//!
//! ```text
//! load() / load_from(path) / load_into(path, store)
//!   file missing --> Ok(()), nothing to do
//!   tokio File --> BufReader.lines()
//!        |
//!        v  (per line, in file order)
//!   parse::line() --> Comment | Blank | Malformed: skip
//!                 --> Assignment { key, value }
//!        |
//!        v
//!   subst::expand($VAR against current store state)
//!        |
//!        v
//!   store.set(key, value)   (non-empty pairs only)
//! ```
//!
//! The pass is strictly sequential: a variable committed by an earlier line
//! is visible to the substitution of every later line, and a variable
//! defined later in the file is not visible to an earlier line.
//!
//! Substitution is literal substring replacement of `$NAME` tokens, not
//! identifier-aware: a variable whose name is a prefix of another (`$FOO`
//! vs `$FOOBAR`) can match inside the longer token. One pass only, no
//! recursive expansion.

pub mod parse;
pub mod subst;


use std::collections::BTreeMap;
use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, trace};

use crate::env::{EnvStore, ProcessEnv, process_env};
use crate::error::{LoadError, Result};

/// Default environment file name.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Loads `.env` from the current directory into the process environment.
///
/// A missing file is a normal, silent no-op.
///
/// # Errors
///
/// Returns an error only if the file exists but reading the line stream
/// fails unexpectedly.
pub async fn load() -> Result<()> {
    load_from(DEFAULT_ENV_FILE).await
}

/// Loads the given environment file into the process environment.
///
/// # Errors
///
/// Returns an error only if the file exists but reading the line stream
/// fails unexpectedly.
pub async fn load_from(path: impl AsRef<Path>) -> Result<()> {
    let mut store = ProcessEnv;
    load_into(path, &mut store).await
}

/// Loads the given environment file into an arbitrary [`EnvStore`].
///
/// Comments (`#`-prefixed), blank lines and lines without `=` are skipped.
/// Assignments are split on the first `=` (further `=` characters stay in
/// the value), key and value are trimmed, `$VAR` tokens are expanded once
/// against the store's current state, and only pairs with a non-empty key
/// and value are committed. Existing entries are overwritten, never removed.
///
/// # Errors
///
/// Returns an error only if the file exists but reading the line stream
/// fails unexpectedly.
pub async fn load_into(path: impl AsRef<Path>, store: &mut impl EnvStore) -> Result<()> {
    let path = path.as_ref();

    if !path.exists() {
        debug!(path = %path.display(), "no env file found, nothing to load");
        return Ok(());
    }

    let file = File::open(path).await.map_err(|e| LoadError::ReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut lines = BufReader::new(file).lines();
    let mut applied: usize = 0;

    while let Some(line) = lines.next_line().await.map_err(|e| LoadError::ReadError {
        path: path.display().to_string(),
        source: e,
    })? {
        match parse::line(&line) {
            parse::Directive::Comment | parse::Directive::Blank => {}
            parse::Directive::Malformed => {
                trace!("skipping line without assignment");
            }
            parse::Directive::Assignment { key, value } => {
                let value = subst::expand(value, &*store);
                if key.is_empty() || value.is_empty() {
                    trace!("skipping assignment with empty key or value");
                    continue;
                }
                store.set(key, &value);
                applied += 1;
                trace!(key, "loaded env var");
            }
        }
    }

    debug!(path = %path.display(), applied, "env file loaded");
    Ok(())
}

/// Collects the pairs a [`load_from`] of `path` would commit, without
/// touching the process environment.
///
/// Substitution consults a snapshot of the process environment, and pairs
/// committed by earlier lines are visible to later lines exactly as in a
/// real load.
///
/// # Errors
///
/// Returns an error only if the file exists but reading the line stream
/// fails unexpectedly.
pub async fn preview(path: impl AsRef<Path>) -> Result<BTreeMap<String, String>> {
    let mut store = RecordingStore {
        inner: process_env(),
        committed: BTreeMap::new(),
    };
    load_into(path, &mut store).await?;
    Ok(store.committed)
}

/// Store wrapper that records every committed pair while delegating reads
/// and writes to the wrapped store.
struct RecordingStore<S> {
    inner: S,
    committed: BTreeMap<String, String>,
}

impl<S: EnvStore> EnvStore for RecordingStore<S> {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.inner.set(key, value);
        self.committed.insert(key.to_owned(), value.to_owned());
    }

    fn vars(&self) -> Vec<(String, String)> {
        self.inner.vars()
    }
}
