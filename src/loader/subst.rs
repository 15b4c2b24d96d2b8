// envseed: Dotenv-style environment file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! One-pass `$VAR` substitution.
//!
//! ```text
//! expand("pg://$HOST:$PORT", store)
//!   for each (name, value) in store.vars()   (sorted, non-empty values)
//!     "$" + name contained in text? replace all occurrences
//!   --> "pg://localhost:5432"
//! ```
//!
//! Replacement is plain substring search over the value text. Substituted
//! text is never re-scanned for the same token, and the pass over the
//! variables happens exactly once, so no recursive expansion occurs.

use crate::env::EnvStore;

/// Expands `$NAME` tokens in `raw` against the store's current state.
///
/// Variables with empty values never substitute. Matching is not
/// identifier-aware: `$FOO` also matches the front of a `$FOOBAR` token.
/// The scan iterates the store's sorted snapshot, so the outcome is
/// deterministic.
#[must_use]
pub fn expand<S: EnvStore + ?Sized>(raw: &str, store: &S) -> String {
    if !raw.contains('$') {
        return raw.to_owned();
    }

    let mut value = raw.to_owned();
    for (name, current) in store.vars() {
        if current.is_empty() {
            continue;
        }
        // Containment is tested against the raw input, so tokens introduced
        // by an earlier replacement are not expanded again.
        let token = format!("${name}");
        if raw.contains(&token) {
            value = value.replace(&token, &current);
        }
    }
    value
}
