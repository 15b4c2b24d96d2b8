// envseed: Dotenv-style environment file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! In-memory environment map with copy-on-write semantics.
//!
//! # Architecture
//!
//! ```text
//! EnvMap (copy-on-write)
//! data: Option<Arc<BTreeMap<String, String>>> + owned flag
//! clone shares Arc until copy_for_write()
//! ```

use super::EnvStore;
use std::collections::BTreeMap;
use std::sync::Arc;

/// A set of environment variables with copy-on-write semantics.
///
/// This struct provides efficient cloning by sharing data between copies
/// until a modification is made. A [`crate::env::process_env`] snapshot can
/// therefore be handed around cheaply.
///
/// # Thread Safety
/// `EnvMap` is `Send` and `Sync` due to its use of `Arc`.
#[derive(Debug, Clone)]
pub struct EnvMap {
    data: Option<Arc<BTreeMap<String, String>>>,
    /// Whether we own the data exclusively (for copy-on-write)
    owned: bool,
}

impl Default for EnvMap {
    fn default() -> Self {
        Self::new()
    }
}

impl EnvMap {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            data: None,
            owned: false,
        }
    }

    /// Creates an environment map from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self {
            data: Some(Arc::new(vars)),
            owned: true,
        }
    }

    /// Sets a variable, overwriting any prior value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.copy_for_write();
        if let Some(ref mut data) = self.data {
            let data = Arc::make_mut(data);
            data.insert(key.into(), value.into());
        }
        self
    }

    /// Gets a variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.get(key).map(String::as_str))
    }

    /// Returns all variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.data
            .as_ref()
            .map(|d| d.as_ref().clone())
            .unwrap_or_default()
    }

    /// Returns an iterator over variables in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.data
            .iter()
            .flat_map(|d| d.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.as_ref().is_none_or(|d| d.is_empty())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.len())
    }

    /// Ensures we have exclusive ownership of the data for modification.
    fn copy_for_write(&mut self) {
        if self.owned {
            return;
        }

        match &self.data {
            Some(data) => {
                self.data = Some(Arc::new((**data).clone()));
            }
            None => {
                self.data = Some(Arc::new(BTreeMap::new()));
            }
        }

        self.owned = true;
    }
}

impl EnvStore for EnvMap {
    fn get(&self, key: &str) -> Option<String> {
        self.data.as_ref().and_then(|d| d.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) {
        self.copy_for_write();
        if let Some(ref mut data) = self.data {
            let data = Arc::make_mut(data);
            data.insert(key.to_owned(), value.to_owned());
        }
    }

    fn vars(&self) -> Vec<(String, String)> {
        // BTreeMap iteration is already key-sorted
        self.iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }
}
