// envseed: Dotenv-style environment file loader
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing and command handlers.

use envseed::cli::{self, Command};

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn cli_parse_from_show() {
    let cli = cli::parse_from(["envseed", "show", "-f", "stage.env"]);
    let Some(Command::Show(args)) = cli.command else {
        panic!("expected show command");
    };
    assert_eq!(args.file, std::path::Path::new("stage.env"));
}

#[test]
fn cli_parse_from_run_with_args() {
    let cli = cli::parse_from(["envseed", "-l", "4", "run", "--", "env", "-0"]);
    assert_eq!(cli.global.log_level, Some(4));
    let Some(Command::Run(args)) = cli.command else {
        panic!("expected run command");
    };
    assert_eq!(args.command, ["env", "-0"]);
}

// =============================================================================
// Run handler
// =============================================================================

#[cfg(unix)]
mod run_handler {
    use std::path::PathBuf;

    use envseed::cli::run::RunArgs;
    use envseed::cmd::run::run_run_command;
    use envseed::error::ProcessError;
    use tempfile::TempDir;

    fn temp_dir() -> TempDir {
        tempfile::tempdir().expect("failed to create temp dir")
    }

    fn env_file(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join(".env");
        std::fs::write(&path, content).expect("failed to write env file");
        path
    }

    #[tokio::test]
    async fn run_seeds_the_environment_before_spawning() {
        let dir = temp_dir();
        let path = env_file(&dir, "_ENVSEED_IT_RUN=seeded\n");

        let args = RunArgs {
            file: path,
            command: vec!["true".to_string()],
        };
        run_run_command(&args).await.expect("run should succeed");

        // load_from mutates this process's environment, which the child
        // inherited
        assert_eq!(std::env::var("_ENVSEED_IT_RUN").as_deref(), Ok("seeded"));
    }

    #[tokio::test]
    async fn run_with_missing_env_file_still_executes() {
        let dir = temp_dir();

        let args = RunArgs {
            file: dir.path().join("nope.env"),
            command: vec!["true".to_string()],
        };
        run_run_command(&args).await.expect("run should succeed");
    }

    #[tokio::test]
    async fn run_unknown_executable_is_reported() {
        let dir = temp_dir();

        let args = RunArgs {
            file: dir.path().join("nope.env"),
            command: vec!["_envseed_no_such_binary_".to_string()],
        };
        let err = run_run_command(&args).await.expect_err("must fail");

        let process_err = err
            .downcast_ref::<ProcessError>()
            .expect("should be a ProcessError");
        assert!(matches!(
            process_err,
            ProcessError::ExecutableNotFound { name } if name == "_envseed_no_such_binary_"
        ));
    }

    #[tokio::test]
    async fn run_propagates_child_failure_as_ok_exit_code() {
        let dir = temp_dir();

        let args = RunArgs {
            file: dir.path().join("nope.env"),
            command: vec!["false".to_string()],
        };
        // A failing child is not an envseed error; its code is passed through.
        run_run_command(&args)
            .await
            .expect("non-zero child exit is not an error");
    }
}
