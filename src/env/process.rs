// envseed: Dotenv-style environment file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process environment store.
//!
//! ```text
//! ProcessEnv
//!   get  --> std::env::var
//!   set  --> std::env::set_var (unsafe, single-threaded loader)
//!   vars --> std::env::vars, sorted
//! ```

use super::EnvStore;
use std::collections::BTreeMap;

/// The real process environment.
///
/// Writes are visible to the whole process and inherited by child processes
/// spawned afterwards. The loader is the sole writer expected to touch the
/// environment during its run; callers await full completion before relying
/// on any loaded variable.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvStore for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn set(&mut self, key: &str, value: &str) {
        // SAFETY: the loader runs as a single cooperatively-sequential task
        // and no other thread is mutating the environment during a load.
        unsafe { std::env::set_var(key, value) };
    }

    fn vars(&self) -> Vec<(String, String)> {
        // Collect through a BTreeMap for a key-sorted snapshot.
        let sorted: BTreeMap<String, String> = std::env::vars().collect();
        sorted.into_iter().collect()
    }
}
