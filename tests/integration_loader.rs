// envseed: Dotenv-style environment file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for dotenv loading.
//!
//! Exercises the loader through the public API with realistic env files.

use std::path::PathBuf;

use envseed::env::EnvMap;
use envseed::loader;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn env_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("failed to write env file");
    path
}

// =============================================================================
// Realistic files
// =============================================================================

#[tokio::test]
async fn realistic_file_loads_in_order() {
    let dir = temp_dir();
    let path = env_file(
        &dir,
        ".env",
        "# service configuration\n\
         \n\
         DB_HOST=localhost\n\
         DB_PORT=5432\n\
         DB_URL=postgres://$DB_HOST:$DB_PORT/app?sslmode=disable\n\
         \n\
         # token with '=' padding inside\n\
         API_TOKEN=abc==\n\
         \n\
         this line has no assignment\n\
         EMPTY=\n",
    );

    let mut store = EnvMap::new();
    loader::load_into(&path, &mut store).await.unwrap();

    assert_eq!(store.get("DB_HOST"), Some("localhost"));
    assert_eq!(store.get("DB_PORT"), Some("5432"));
    assert_eq!(
        store.get("DB_URL"),
        Some("postgres://localhost:5432/app?sslmode=disable")
    );
    assert_eq!(store.get("API_TOKEN"), Some("abc=="));
    assert_eq!(store.get("EMPTY"), None, "empty values are never committed");
    assert_eq!(store.len(), 4);
}

#[tokio::test]
async fn substitution_chains_through_file_order() {
    let dir = temp_dir();
    let path = env_file(
        &dir,
        ".env",
        "ROOT=/srv/app\nDATA=$ROOT/data\nCACHE=$DATA/cache\n",
    );

    let mut store = EnvMap::new();
    loader::load_into(&path, &mut store).await.unwrap();

    assert_eq!(store.get("DATA"), Some("/srv/app/data"));
    assert_eq!(store.get("CACHE"), Some("/srv/app/data/cache"));
}

#[tokio::test]
async fn reloading_the_same_file_is_idempotent() {
    let dir = temp_dir();
    let path = env_file(&dir, ".env", "A=1\nB=$A-two\nC=x=y\n");

    let mut store = EnvMap::new();
    loader::load_into(&path, &mut store).await.unwrap();
    let after_first = store.to_map();

    loader::load_into(&path, &mut store).await.unwrap();
    assert_eq!(store.to_map(), after_first);
}

// =============================================================================
// Missing files
// =============================================================================

#[tokio::test]
async fn missing_file_completes_without_effect() {
    let dir = temp_dir();
    let path = dir.path().join("nope.env");

    let mut store = EnvMap::new();
    store.set("KEEP", "me");
    let before = store.to_map();

    loader::load_into(&path, &mut store).await.unwrap();
    assert_eq!(store.to_map(), before);
}

#[tokio::test]
async fn preview_of_missing_file_is_empty() {
    let dir = temp_dir();
    let pairs = loader::preview(dir.path().join("nope.env")).await.unwrap();
    assert!(pairs.is_empty());
}

// =============================================================================
// Process environment
// =============================================================================

#[tokio::test]
async fn load_from_seeds_the_process_environment() {
    let dir = temp_dir();
    let path = env_file(
        &dir,
        ".env",
        "_ENVSEED_IT_BASE=alpha\n_ENVSEED_IT_DERIVED=$_ENVSEED_IT_BASE-beta\n",
    );

    loader::load_from(&path).await.unwrap();

    assert_eq!(std::env::var("_ENVSEED_IT_BASE").as_deref(), Ok("alpha"));
    assert_eq!(
        std::env::var("_ENVSEED_IT_DERIVED").as_deref(),
        Ok("alpha-beta")
    );
}

#[tokio::test]
async fn preview_reflects_the_process_environment_without_writing() {
    // SAFETY: unique test-local name, nothing else reads it concurrently
    unsafe { std::env::set_var("_ENVSEED_IT_SRC", "from-process") };

    let dir = temp_dir();
    let path = env_file(&dir, ".env", "_ENVSEED_IT_PREVIEW=$_ENVSEED_IT_SRC\n");

    let pairs = loader::preview(&path).await.unwrap();

    assert_eq!(pairs["_ENVSEED_IT_PREVIEW"], "from-process");
    assert!(std::env::var("_ENVSEED_IT_PREVIEW").is_err());
}
