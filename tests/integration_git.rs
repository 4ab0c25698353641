// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for repository operations.
//!
//! Runs the service against real temporary repositories. Every test returns
//! early when git is not installed.

use std::fs;
use std::path::Path;
use std::process::Command;
use std::sync::Arc;
use std::time::Duration;

use gitscope::error::RepoError;
use gitscope::git::remote_spec::Direction;
use gitscope::git::{
    Classification, Classifier, RepositoryHandle, RepositoryService, ServiceOptions, ShellRunner,
};
use gitscope::watch::BranchWatcher;
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn service() -> Option<RepositoryService> {
    let runner = ShellRunner::detect("git", Classifier::default()).ok()?;
    Some(RepositoryService::new(
        Arc::new(runner),
        ServiceOptions::default(),
    ))
}

/// Helper to run git commands in a directory
fn run_git(args: &[&str], cwd: &Path) -> bool {
    Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@test.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@test.com")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn git_stdout(args: &[&str], cwd: &Path) -> String {
    Command::new("git")
        .args(args)
        .current_dir(cwd)
        .output()
        .map(|o| String::from_utf8_lossy(&o.stdout).into_owned())
        .unwrap_or_default()
}

/// Local identity and merge settings for a repository the service commits in.
fn configure(dir: &Path) {
    run_git(&["config", "user.email", "test@test.com"], dir);
    run_git(&["config", "user.name", "Test"], dir);
    run_git(&["config", "commit.gpgsign", "false"], dir);
    run_git(&["config", "pull.rebase", "false"], dir);
}

/// Initialized repository on branch `main`.
fn init_test_repo(dir: &Path) {
    run_git(&["init", "-q"], dir);
    run_git(&["symbolic-ref", "HEAD", "refs/heads/main"], dir);
    configure(dir);
}

fn commit_file(dir: &Path, name: &str, content: &str, message: &str) {
    fs::write(dir.join(name), content).expect("failed to write file");
    run_git(&["add", "."], dir);
    run_git(&["commit", "-q", "-m", message], dir);
}

fn open(dir: &Path) -> RepositoryHandle {
    RepositoryHandle::open(dir).expect("directory exists")
}

// =============================================================================
// init / stage / commit
// =============================================================================

#[tokio::test]
async fn git_init_stage_commit() {
    let Some(service) = service() else { return };
    let temp = temp_dir();
    let repo = open(temp.path());

    service.init(&repo).await.expect("init");
    assert!(repo.is_initialized());
    configure(temp.path());

    fs::write(temp.path().join("README.md"), "# Test").expect("write");
    let staged = service.stage(&repo).await.expect("stage");
    assert_eq!(staged.message, "All changes staged successfully.");
    assert_eq!(
        service.staged_files(&repo).await.expect("staged files"),
        ["README.md"]
    );

    let committed = service.commit(&repo, "first commit").await.expect("commit");
    assert!(committed.message.contains("first commit"));

    let err = service
        .commit(&repo, "again")
        .await
        .expect_err("nothing staged");
    assert!(matches!(err.as_repo(), Some(RepoError::NothingStaged)));

    let log = service.log(&repo).await.expect("log");
    assert!(log.message.contains("first commit"));
}

#[tokio::test]
async fn git_commit_outside_repository() {
    let Some(service) = service() else { return };
    let temp = temp_dir();

    let err = service
        .commit(&open(temp.path()), "message")
        .await
        .expect_err("not a repository");
    assert!(matches!(
        err.as_repo(),
        Some(RepoError::InvalidRepository { .. })
    ));
}

// =============================================================================
// push / clone
// =============================================================================

#[tokio::test]
async fn git_push_recovers_from_non_fast_forward() {
    let Some(service) = service() else { return };
    let temp = temp_dir();
    let bare = temp.path().join("remote.git");
    fs::create_dir(&bare).expect("create bare dir");
    run_git(&["init", "-q", "--bare"], &bare);
    run_git(&["symbolic-ref", "HEAD", "refs/heads/main"], &bare);
    let url = bare.display().to_string();

    // First working copy publishes main.
    let first = temp.path().join("first");
    fs::create_dir(&first).expect("create first");
    init_test_repo(&first);
    commit_file(&first, "a.txt", "a", "first: a");
    let first_repo = open(&first);
    service
        .remote_add(&first_repo, &format!("origin {url}"))
        .await
        .expect("remote add");
    let pushed = service.push(&first_repo, "main").await.expect("push");
    assert_eq!(pushed.message, "Repository pushed successfully.");

    // Second working copy, cloned through the service, moves main ahead.
    let clones = temp.path().join("clones");
    let clones_repo = RepositoryHandle::create(&clones).expect("create clones");
    let cloned = service
        .clone_repository(&clones_repo, &url)
        .await
        .expect("clone");
    assert_eq!(cloned.classification, Classification::Success);
    let second = clones.join("remote");
    configure(&second);
    commit_file(&second, "b.txt", "b", "second: b");
    service.push(&open(&second), "main").await.expect("push second");

    // The first copy diverges and learns about the new remote tip.
    commit_file(&first, "c.txt", "c", "first: c");
    run_git(&["fetch", "-q", "origin"], &first);

    let recovered = service
        .push(&first_repo, "main")
        .await
        .expect("push after recovery");
    assert_eq!(recovered.classification, Classification::Success);

    let remote_log = git_stdout(&["log", "--format=%s", "main"], &bare);
    assert!(remote_log.contains("second: b"));
    assert!(remote_log.contains("first: c"));
}

#[tokio::test]
async fn git_create_branch_without_remote() {
    let Some(service) = service() else { return };
    let temp = temp_dir();
    init_test_repo(temp.path());
    commit_file(temp.path(), "a.txt", "a", "initial");
    let repo = open(temp.path());

    let err = service
        .create_branch(&repo, "topic")
        .await
        .expect_err("no origin to push to");
    assert!(matches!(
        err.as_repo(),
        Some(RepoError::UpstreamSetFailed { branch, .. }) if branch == "topic"
    ));

    let branches = service.list_branches(&repo).await.expect("list");
    assert!(branches.contains("topic"));
    assert_eq!(branches.current(), Some("main"));
}

// =============================================================================
// branches
// =============================================================================

#[tokio::test]
async fn git_rename_switch_delete_branch() {
    let Some(service) = service() else { return };
    let temp = temp_dir();
    init_test_repo(temp.path());
    commit_file(temp.path(), "a.txt", "a", "initial");
    run_git(&["branch", "draft"], temp.path());
    let repo = open(temp.path());

    service
        .rename_branch(&repo, "draft", "feature")
        .await
        .expect("rename");
    service.switch_branch(&repo, "feature").await.expect("switch");
    let branches = service.list_branches(&repo).await.expect("list");
    assert_eq!(branches.names(), ["feature", "main"]);
    assert_eq!(branches.current(), Some("feature"));

    service.switch_branch(&repo, "main").await.expect("switch back");
    service.delete_branch(&repo, "feature").await.expect("delete");
    let branches = service.list_branches(&repo).await.expect("list");
    assert_eq!(branches.names(), ["main"]);
}

// =============================================================================
// revert
// =============================================================================

#[tokio::test]
async fn git_revert_clean_tree() {
    let Some(service) = service() else { return };
    let temp = temp_dir();
    init_test_repo(temp.path());
    commit_file(temp.path(), "a.txt", "one", "first");
    commit_file(temp.path(), "a.txt", "two", "second");

    let outcome = service
        .revert(&open(temp.path()), "HEAD")
        .await
        .expect("revert");
    assert_eq!(outcome.classification, Classification::Success);
    assert_eq!(
        fs::read_to_string(temp.path().join("a.txt")).expect("read"),
        "one"
    );
}

#[tokio::test]
async fn git_revert_with_untracked_file_reports_dirty_tree() {
    let Some(service) = service() else { return };
    let temp = temp_dir();
    init_test_repo(temp.path());
    commit_file(temp.path(), "a.txt", "one", "first");
    commit_file(temp.path(), "a.txt", "two", "second");
    fs::write(temp.path().join("scratch.txt"), "notes").expect("write scratch");

    let err = service
        .revert(&open(temp.path()), "HEAD")
        .await
        .expect_err("scratch file remains");
    let Some(RepoError::DirtyWorkingTree { status, .. }) = err.as_repo() else {
        panic!("expected DirtyWorkingTree, got {err}");
    };
    assert!(status.contains("scratch.txt"));

    // The revert itself happened and the scratch file was restored.
    assert_eq!(
        fs::read_to_string(temp.path().join("a.txt")).expect("read"),
        "one"
    );
    assert!(temp.path().join("scratch.txt").exists());
}

#[tokio::test]
async fn git_revert_empty_reference() {
    let Some(service) = service() else { return };
    let temp = temp_dir();
    init_test_repo(temp.path());

    let err = service
        .revert(&open(temp.path()), "  ")
        .await
        .expect_err("empty reference");
    assert!(matches!(err.as_repo(), Some(RepoError::EmptyReference)));
}

// =============================================================================
// remotes / ignore file
// =============================================================================

#[tokio::test]
async fn git_remote_add_replaces_origin() {
    let Some(service) = service() else { return };
    let temp = temp_dir();
    init_test_repo(temp.path());
    let repo = open(temp.path());

    service
        .remote_add(&repo, "origin https://example.invalid/a.git")
        .await
        .expect("first add");
    let outcome = service
        .remote_add(&repo, "git remote add origin https://example.invalid/b.git")
        .await
        .expect("replacing add");
    assert_eq!(
        outcome.message,
        "Remote 'origin' added: https://example.invalid/b.git"
    );

    let remotes = service.remote_list(&repo).await.expect("list");
    assert_eq!(remotes.len(), 2);
    assert!(
        remotes
            .iter()
            .all(|r| r.name == "origin" && r.url == "https://example.invalid/b.git")
    );
    assert!(remotes.iter().any(|r| r.direction == Direction::Push));

    let err = service
        .remote_add(&repo, "upstream")
        .await
        .expect_err("missing url");
    assert!(matches!(
        err.as_repo(),
        Some(RepoError::MalformedRemoteSpec { .. })
    ));
}

#[tokio::test]
async fn git_ignore_file_round_trip() {
    let Some(service) = service() else { return };
    let temp = temp_dir();
    init_test_repo(temp.path());
    let repo = open(temp.path());

    let created = service
        .open_ignore_file(&repo, "target/\n")
        .await
        .expect("open");
    assert_eq!(created, "target/\n");

    // Existing content wins over the initial text.
    let reopened = service
        .open_ignore_file(&repo, "ignored\n")
        .await
        .expect("reopen");
    assert_eq!(reopened, "target/\n");

    service
        .save_ignore_file(&repo, "*.log\n")
        .await
        .expect("save");
    assert_eq!(
        fs::read_to_string(repo.ignore_file()).expect("read"),
        "*.log\n"
    );
}

// =============================================================================
// watcher
// =============================================================================

#[tokio::test]
async fn git_watcher_sees_new_branch() {
    let Some(service) = service() else { return };
    let temp = temp_dir();
    init_test_repo(temp.path());
    commit_file(temp.path(), "a.txt", "a", "initial");

    let watcher =
        BranchWatcher::new(Arc::new(service)).with_interval(Duration::from_millis(50));
    let (watch, stop) = watcher.start(open(temp.path())).await.expect("start");
    assert_eq!(watch.current().names(), ["main"]);

    run_git(&["branch", "topic"], temp.path());
    let changed = tokio::time::timeout(Duration::from_secs(10), watch.changes().recv_async())
        .await
        .expect("change within timeout")
        .expect("watcher still running");
    assert_eq!(changed.names(), ["main", "topic"]);

    stop.join().await;
}
