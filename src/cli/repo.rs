// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Arguments of the single-repository commands.

use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Arguments for `commit`.
#[derive(Debug, Clone, Args)]
pub struct CommitArgs {
    /// Commit message.
    #[arg(short = 'm', long)]
    pub message: String,
}

/// Arguments for `push`.
#[derive(Debug, Clone, Args)]
pub struct PushArgs {
    /// Branch to push; it gets the configured remote as upstream.
    pub branch: String,

    /// Skips the unstaged and uncommitted changes check.
    #[arg(long = "no-check")]
    pub no_check: bool,
}

/// Arguments for `pull`.
#[derive(Debug, Clone, Args)]
pub struct PullArgs {
    /// Branch to pull from the configured remote.
    pub branch: String,

    /// Soft-resets the last commit before pulling, keeping its changes staged.
    #[arg(long = "reset-last-commit")]
    pub reset_last_commit: bool,
}

/// Arguments for `revert`.
#[derive(Debug, Clone, Args)]
pub struct RevertArgs {
    /// Commit to revert (hash, tag or expression such as HEAD~2).
    #[arg(value_name = "COMMIT")]
    pub reference: String,
}

/// Arguments for `clone`.
#[derive(Debug, Clone, Args)]
pub struct CloneArgs {
    /// URL of the repository to clone into the repository directory.
    pub url: String,
}

/// Arguments for `diff`.
#[derive(Debug, Clone, Default, Args)]
pub struct DiffArgs {
    /// Lists the staged file names instead of the working-tree diff.
    #[arg(long)]
    pub cached: bool,
}

/// Arguments for `ignore`.
#[derive(Debug, Clone, Args)]
pub struct IgnoreArgs {
    #[command(subcommand)]
    pub subcommand: IgnoreSubcommand,
}

/// Ignore-file subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum IgnoreSubcommand {
    /// Prints .gitignore, creating it first if needed.
    Show {
        /// Content written when the file does not exist yet.
        #[arg(long, default_value = "")]
        initial: String,
    },

    /// Overwrites .gitignore with the content of FILE (stdin when omitted).
    Save {
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },
}
