// envseed: Dotenv-style environment file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!          EnvseedError (~24 bytes)
//!                 |
//!        +--------+--------+--------+
//!        |        |        |        |
//!        v        v        v        v
//!      Bail     Load     Proc    Io/Other
//!               Box      Box     Box<str>
//!
//! Sub-errors (unboxed internally):
//!   Load     ReadError
//!   Process  ExecutableNotFound, SpawnFailed, WaitFailed, Interrupted
//!
//! All variants boxed => EnvseedError fits in 24 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`EnvseedError`].
pub type EnvseedResult<T> = std::result::Result<T, EnvseedError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum EnvseedError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Environment file loading failed.
    #[error("load error: {0}")]
    Load(#[from] Box<LoadError>),

    /// Child process execution failed.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),

    /// Generic error with message.
    #[error("{0}")]
    Other(Box<str>),
}

/// Create a fatal [`EnvseedError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> EnvseedError {
    EnvseedError::Bailed(message.into().into_boxed_str())
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for EnvseedError {
                fn from(err: $error) -> Self {
                    EnvseedError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    LoadError => Load,
    ProcessError => Process,
    std::io::Error => Io,
}

// --- Load Errors ---

/// Environment file loading errors.
///
/// A missing file is not represented here at all: the loader treats it as a
/// normal no-op. The only failure it surfaces is an unexpected I/O error
/// from the underlying line stream.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading the environment file failed mid-stream.
    #[error("failed to read env file '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Process Errors ---

/// Child process execution errors (the `run` command).
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to wait for the process to finish.
    #[error("failed to wait for process '{command}': {source}")]
    WaitFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process was terminated by a signal and reported no exit code.
    #[error("process '{command}' was interrupted")]
    Interrupted { command: String },
}

#[cfg(test)]
mod tests;
