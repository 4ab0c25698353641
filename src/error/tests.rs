// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, RecoveryStep, RepoError, ScopeError, ScopeResult};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "watcher".to_string(),
        key: "interval_ms".to_string(),
        message: "must be greater than zero".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'interval_ms' in section '[watcher]': must be greater than zero"
    );
}

#[test]
fn test_scope_error_size() {
    // Box<str> variants (Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<ScopeError>();
    assert!(size <= 24, "ScopeError is {size} bytes, expected <= 24");
}

#[test]
fn test_scope_result_size() {
    let size = std::mem::size_of::<ScopeResult<()>>();
    assert!(size <= 24, "ScopeResult<()> is {size} bytes, expected <= 24");
}

#[test]
fn test_repo_error_displays_without_prefix() {
    let err: ScopeError = RepoError::EmptyMessage.into();
    insta::assert_snapshot!(err.to_string(), @"commit message cannot be empty");
}

#[test]
fn test_raw_output_through_recovery_error() {
    let inner: ScopeError = RepoError::CommandFailed {
        command: "git checkout main".to_string(),
        output: "error: pathspec 'main' did not match".to_string(),
    }
    .into();
    let err: ScopeError = RepoError::RecoverySequenceFailed {
        step: RecoveryStep::Checkout,
        original: "! [rejected] main -> main (non-fast-forward)".to_string(),
        cause: Box::new(inner),
    }
    .into();

    assert_eq!(
        err.raw_output(),
        Some("error: pathspec 'main' did not match")
    );
    assert!(err.to_string().contains("checkout failed during recovery"));
}

#[test]
fn test_recovery_error_renders_step_and_rejection_once() {
    let inner: ScopeError = RepoError::CommandFailed {
        command: "git checkout main".to_string(),
        output: "error: pathspec 'main' did not match".to_string(),
    }
    .into();
    let err: ScopeError = RepoError::RecoverySequenceFailed {
        step: RecoveryStep::Checkout,
        original: "! [rejected] main -> main (non-fast-forward)".to_string(),
        cause: Box::new(inner),
    }
    .into();

    insta::assert_snapshot!(format!("{:#}", anyhow::Error::from(err)), @r"
    push was rejected and checkout failed during recovery: git checkout main failed:
    error: pathspec 'main' did not match

    rejected push output:
    ! [rejected] main -> main (non-fast-forward)
    ");
}

#[test]
fn test_repo_error_alternate_display_is_not_repeated() {
    let err = anyhow::Error::from(ScopeError::from(RepoError::EmptyMessage));
    insta::assert_snapshot!(format!("{err:#}"), @"commit message cannot be empty");

    let err = anyhow::Error::from(ScopeError::from(RepoError::CommandFailed {
        command: "git log --oneline".to_string(),
        output: "fatal: your current branch 'main' does not have any commits yet".to_string(),
    }));
    insta::assert_snapshot!(format!("{err:#}"), @r"
    git log --oneline failed:
    fatal: your current branch 'main' does not have any commits yet
    ");
}

#[test]
fn test_process_error_alternate_display_is_not_repeated() {
    let err = anyhow::Error::from(ScopeError::from(super::ProcessError::SpawnFailed {
        command: "git status".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    }));
    insta::assert_snapshot!(
        format!("{err:#}"),
        @"process error: failed to spawn process 'git status': denied"
    );
}

#[test]
fn test_recovery_step_names() {
    let names: Vec<_> = [
        RecoveryStep::Checkout,
        RecoveryStep::Pull,
        RecoveryStep::RetryPush,
    ]
    .iter()
    .map(ToString::to_string)
    .collect();
    assert_eq!(names, ["checkout", "pull", "push"]);
}
