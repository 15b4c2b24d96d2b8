// envseed: Dotenv-style environment file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{EnvseedError, EnvseedResult, LoadError, ProcessError, bail_out};

#[test]
fn test_load_error_display() {
    let err = LoadError::ReadError {
        path: ".env".to_string(),
        source: std::io::Error::other("stream broke"),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"failed to read env file '.env': stream broke"
    );
}

#[test]
fn test_process_error_display() {
    let err = ProcessError::ExecutableNotFound {
        name: "printenv".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"executable not found: 'printenv' (not in PATH)"
    );
}

#[test]
fn test_bail_out_display() {
    let err = bail_out("no command specified");
    insta::assert_snapshot!(err.to_string(), @"fatal error: no command specified");
}

#[test]
fn test_envseed_error_size() {
    // EnvseedError should be reasonably small
    // Box<str> variants (Bailed, Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<EnvseedError>();
    assert!(size <= 24, "EnvseedError is {size} bytes, expected <= 24");
}

#[test]
fn test_envseed_result_size() {
    // Result<(), EnvseedError> should be reasonably small
    let size = std::mem::size_of::<EnvseedResult<()>>();
    assert!(size <= 24, "EnvseedResult<()> is {size} bytes, expected <= 24");
}
