// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch and remote command implementations.

use crate::cli::branch::{BranchArgs, BranchSubcommand};
use crate::cli::remote::{RemoteArgs, RemoteSubcommand};
use crate::cmd::repo::print_branches;
use crate::cmd::session::{Session, print_outcome, with_spinner};
use crate::error::Result;

/// Main handler for the branch command.
///
/// # Errors
///
/// Returns an error if the repository is invalid or the git operation fails.
pub async fn run_branch_command(args: &BranchArgs, session: &Session) -> Result<()> {
    let repo = session.select()?;
    let service = session.service();
    let outcome = match &args.subcommand {
        BranchSubcommand::Create { name } => {
            with_spinner("Creating branch", service.create_branch(&repo, name)).await?
        }
        BranchSubcommand::Delete { name } => service.delete_branch(&repo, name).await?,
        BranchSubcommand::Rename { old, new } => service.rename_branch(&repo, old, new).await?,
        BranchSubcommand::Switch { name } => service.switch_branch(&repo, name).await?,
        BranchSubcommand::List => {
            print_branches(&service.list_branches(&repo).await?);
            return Ok(());
        }
    };
    print_outcome(&outcome);
    Ok(())
}

/// Main handler for the remote command.
///
/// # Errors
///
/// Returns an error if the repository is invalid, the remote spec is
/// malformed, or git fails.
pub async fn run_remote_command(args: &RemoteArgs, session: &Session) -> Result<()> {
    let repo = session.select()?;
    let service = session.service();
    match &args.subcommand {
        RemoteSubcommand::List => {
            for remote in service.remote_list(&repo).await? {
                println!(
                    "{:<12} {} ({})",
                    remote.name,
                    remote.url,
                    remote.direction.as_str()
                );
            }
        }
        RemoteSubcommand::Add { spec } => {
            print_outcome(&service.remote_add(&repo, &spec.join(" ")).await?);
        }
        RemoteSubcommand::Remove { name } => {
            print_outcome(&service.remote_remove(&repo, name).await?);
        }
    }
    Ok(())
}
