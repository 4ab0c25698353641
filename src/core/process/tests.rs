// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::builder::{ProcessBuilder, ProcessFlags};
use crate::error::{ProcessError, ScopeError};

fn process_error(err: &ScopeError) -> &ProcessError {
    match err {
        ScopeError::Process(inner) => inner.as_ref(),
        other => panic!("expected a process error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_process_echo() {
    #[cfg(windows)]
    let output = ProcessBuilder::raw("echo hello")
        .capture_output()
        .run()
        .await
        .expect("echo should succeed");

    #[cfg(not(windows))]
    let output = ProcessBuilder::new("echo")
        .arg("hello")
        .capture_output()
        .run()
        .await
        .expect("echo should succeed");

    assert!(output.success());
    insta::assert_snapshot!(output.stdout().trim(), @"hello");
}

#[tokio::test]
async fn test_process_exit_code_allowed() {
    let output = ProcessBuilder::raw("exit 42")
        .flag(ProcessFlags::ALLOW_FAILURE)
        .run()
        .await
        .expect("process should complete");

    insta::assert_snapshot!(output.exit_code().to_string(), @"42");
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_non_zero_exit_carries_output() {
    let err = ProcessBuilder::raw("echo boom 1>&2; exit 3")
        .capture_output()
        .run()
        .await
        .expect_err("non-zero exit should fail");

    match process_error(&err) {
        ProcessError::NonZeroExit { code, output, .. } => {
            assert_eq!(*code, 3);
            assert_eq!(output, "boom");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.raw_output(), Some("boom"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_combined_output_contains_both_streams() {
    let output = ProcessBuilder::raw("echo out; echo err 1>&2")
        .capture_output()
        .run()
        .await
        .expect("process should succeed");

    assert_eq!(output.stdout(), "out");
    assert_eq!(output.stderr(), "err");
    let mut lines: Vec<_> = output.combined().lines().collect();
    lines.sort_unstable();
    assert_eq!(lines, ["err", "out"]);
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_env_is_layered_on_inherited() {
    let output = ProcessBuilder::raw("echo $GITSCOPE_TEST_VAR")
        .env("GITSCOPE_TEST_VAR", "test_value")
        .capture_output()
        .run()
        .await
        .expect("process should succeed");

    insta::assert_snapshot!(output.stdout().trim(), @"test_value");
}

#[tokio::test]
async fn test_process_invalid_directory_is_checked_before_spawn() {
    let temp = tempfile::tempdir().expect("failed to create temp dir");
    let missing = temp.path().join("does-not-exist");

    let err = ProcessBuilder::raw("exit 0")
        .cwd(&missing)
        .run()
        .await
        .expect_err("missing cwd should fail");

    assert!(matches!(
        process_error(&err),
        ProcessError::InvalidDirectory { .. }
    ));
}

#[tokio::test]
async fn test_process_missing_executable() {
    let err = ProcessBuilder::new("gitscope-definitely-not-a-real-tool")
        .run()
        .await
        .expect_err("spawn should fail");

    assert!(matches!(
        process_error(&err),
        ProcessError::ExecutableNotFound { .. }
    ));
}

#[test]
fn test_executable_lookup_not_found() {
    assert!(ProcessBuilder::which("gitscope-definitely-not-a-real-tool").is_err());
    assert!(!ProcessBuilder::exists("gitscope-definitely-not-a-real-tool"));
    assert!(ProcessBuilder::find("gitscope-definitely-not-a-real-tool").is_none());
}

#[cfg(unix)]
#[test]
fn test_executable_lookup_found() {
    let builder = ProcessBuilder::which("sh").expect("sh should be found in PATH");
    assert!(builder.program().exists());
    assert!(ProcessBuilder::exists("sh"));
}

#[test]
fn test_command_line_quotes_spaced_args() {
    let builder = ProcessBuilder::new("git").args(["commit", "-m", "first commit"]);
    insta::assert_snapshot!(builder.command_line(), @r#"git commit -m "first commit""#);
}

#[cfg(unix)]
#[tokio::test]
async fn test_process_invalid_utf8_output_is_read_to_end() {
    let output = ProcessBuilder::raw(
        r"printf 'ok line\n\377\376 bad\nafter\r\n'; head -c 300000 /dev/zero | tr '\0' 'x'; echo; echo tail-marker",
    )
    .capture_output()
    .run()
    .await
    .expect("process should succeed");

    assert!(output.success());
    let lines: Vec<&str> = output.stdout().lines().collect();
    assert_eq!(lines[0], "ok line");
    assert_eq!(lines[1], "\u{FFFD}\u{FFFD} bad");
    assert_eq!(lines[2], "after");
    assert_eq!(lines[3].len(), 300_000);
    assert_eq!(lines.last(), Some(&"tail-marker"));
}
