// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Single-repository commands.

use crate::cli::repo::{CloneArgs, CommitArgs, DiffArgs, PullArgs, PushArgs, RevertArgs};
use crate::cmd::session::{Session, print_outcome, with_spinner};
use crate::error::Result;
use crate::git::{BranchList, PullMode};

/// Prints a branch list, marking the checked-out branch.
pub fn print_branches(branches: &BranchList) {
    let current = branches.current();
    for name in branches.names() {
        let marker = if Some(name.as_str()) == current { '*' } else { ' ' };
        println!("{marker} {name}");
    }
}

/// Validates the directory and shows what it contains.
///
/// # Errors
///
/// Returns an error if the directory is invalid or listing branches fails.
pub async fn run_open_command(session: &Session) -> Result<()> {
    let repo = session.select()?;
    println!("{repo}");
    if repo.is_initialized() {
        let branches = session.service().list_branches(&repo).await?;
        print_branches(&branches);
    } else {
        println!("not a git repository yet, run `gitscope init`");
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if the directory is invalid or `git init` fails.
pub async fn run_init_command(session: &Session) -> Result<()> {
    let repo = session.select()?;
    let outcome = with_spinner("Initializing", session.service().init(&repo)).await?;
    print_outcome(&outcome);
    Ok(())
}

/// # Errors
///
/// Returns an error if the repository is invalid or `git status` fails.
pub async fn run_status_command(session: &Session) -> Result<()> {
    let repo = session.select()?;
    print_outcome(&session.service().status(&repo).await?);
    Ok(())
}

/// # Errors
///
/// Returns an error if the repository is invalid or staging fails.
pub async fn run_stage_command(session: &Session) -> Result<()> {
    let repo = session.select()?;
    print_outcome(&session.service().stage(&repo).await?);
    Ok(())
}

/// # Errors
///
/// Returns an error if the message is empty, nothing is staged, or the
/// commit fails.
pub async fn run_commit_command(args: &CommitArgs, session: &Session) -> Result<()> {
    let repo = session.select()?;
    let outcome = session.service().commit(&repo, &args.message).await?;
    print_outcome(&outcome);
    Ok(())
}

/// Pushes after checking that nothing is left unstaged or uncommitted.
///
/// # Errors
///
/// Returns an error if the working tree is not ready, or the push and its
/// recovery fail.
pub async fn run_push_command(args: &PushArgs, session: &Session) -> Result<()> {
    let repo = session.select()?;
    if !args.no_check {
        session.service().check_push_ready(&repo).await?;
    }
    let outcome = with_spinner("Pushing", session.service().push(&repo, &args.branch)).await?;
    print_outcome(&outcome);
    Ok(())
}

/// # Errors
///
/// Returns an error if the pull, or the reset before it, fails.
pub async fn run_pull_command(args: &PullArgs, session: &Session) -> Result<()> {
    let repo = session.select()?;
    let mode = if args.reset_last_commit {
        PullMode::ResetLastCommit
    } else {
        PullMode::Merge
    };
    let outcome =
        with_spinner("Pulling", session.service().pull(&repo, &args.branch, mode)).await?;
    print_outcome(&outcome);
    Ok(())
}

/// # Errors
///
/// Returns an error if the repository is invalid or `git log` fails.
pub async fn run_log_command(session: &Session) -> Result<()> {
    let repo = session.select()?;
    print_outcome(&session.service().log(&repo).await?);
    Ok(())
}

/// # Errors
///
/// Returns an error if the repository is invalid or `git reflog` fails.
pub async fn run_reflog_command(session: &Session) -> Result<()> {
    let repo = session.select()?;
    print_outcome(&session.service().reflog(&repo).await?);
    Ok(())
}

/// # Errors
///
/// Returns an error if the repository is invalid or the diff fails.
pub async fn run_diff_command(args: &DiffArgs, session: &Session) -> Result<()> {
    let repo = session.select()?;
    if args.cached {
        for file in session.service().staged_files(&repo).await? {
            println!("{file}");
        }
    } else {
        print_outcome(&session.service().diff(&repo).await?);
    }
    Ok(())
}

/// # Errors
///
/// Returns an error if the reference is empty, local changes would be
/// left behind, or the revert fails.
pub async fn run_revert_command(args: &RevertArgs, session: &Session) -> Result<()> {
    let repo = session.select()?;
    let outcome =
        with_spinner("Reverting", session.service().revert(&repo, &args.reference)).await?;
    print_outcome(&outcome);
    Ok(())
}

/// Clones into the repository directory, creating it if needed.
///
/// # Errors
///
/// Returns an error if the URL is empty or the clone fails.
pub async fn run_clone_command(args: &CloneArgs, session: &Session) -> Result<()> {
    let repo = session.select_or_create()?;
    let outcome = with_spinner(
        "Cloning",
        session.service().clone_repository(&repo, &args.url),
    )
    .await?;
    print_outcome(&outcome);
    Ok(())
}
