// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Script and watch command implementations.

use std::sync::Arc;

use anyhow::anyhow;

use crate::cli::script::{ScriptArgs, WatchArgs};
use crate::cmd::ignore::read_input;
use crate::cmd::repo::print_branches;
use crate::cmd::session::Session;
use crate::error::Result;
use crate::script::ScriptRunner;
use crate::watch::BranchWatcher;

/// Runs a pasted script and prints the report.
///
/// # Errors
///
/// Returns an error if the input cannot be read, the directory is invalid,
/// or any line failed.
pub async fn run_script_command(args: &ScriptArgs, session: &Session) -> Result<()> {
    let text = read_input(args.file.as_deref()).await?;
    let repo = if args.create {
        session.select_or_create()?
    } else {
        session.select()?
    };

    let runner = ScriptRunner::new(session.service().clone(), session.classifier().clone());
    let report = runner.run(&repo, &text).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.summary());
    }

    if report.succeeded() {
        Ok(())
    } else {
        Err(anyhow!(
            "{} of {} lines failed",
            report.failures().count(),
            report.outcomes.len()
        ))
    }
}

/// Prints the branch list, then every change until Ctrl+C.
///
/// # Errors
///
/// Returns an error if the repository is invalid or the first poll fails.
pub async fn run_watch_command(args: &WatchArgs, session: &Session) -> Result<()> {
    let repo = session.select()?;
    let interval = args
        .interval_ms
        .map_or_else(|| session.config().watcher.interval(), std::time::Duration::from_millis);

    let watcher =
        BranchWatcher::new(Arc::new(session.service().clone())).with_interval(interval);
    let (watch, stop) = watcher.start(repo).await?;
    print_branches(&watch.current());

    loop {
        tokio::select! {
            signal = tokio::signal::ctrl_c() => {
                if let Err(err) = signal {
                    tracing::warn!(error = %err, "failed to listen for Ctrl+C");
                }
                break;
            }
            changed = watch.changes().recv_async() => match changed {
                Ok(branches) => {
                    println!();
                    print_branches(&branches);
                }
                Err(_) => break,
            },
        }
    }

    stop.join().await;
    Ok(())
}
