// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for gitscope using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! gitscope [global options] <command>
//! open | init | status | stage | commit -m MSG | log | reflog | diff
//! push BRANCH | pull BRANCH [--reset-last-commit]
//! revert COMMIT | clone URL
//! branch {create|delete|rename|switch|list}
//! remote {list|add|remove}
//! ignore {show|save}
//! script [FILE] | watch
//! options | version
//! ```

pub mod branch;
pub mod global;
pub mod remote;
pub mod repo;
pub mod script;

#[cfg(test)]
mod tests;

use crate::cli::branch::BranchArgs;
use crate::cli::global::GlobalOptions;
use crate::cli::remote::RemoteArgs;
use crate::cli::repo::{
    CloneArgs, CommitArgs, DiffArgs, IgnoreArgs, PullArgs, PushArgs, RevertArgs,
};
use crate::cli::script::{ScriptArgs, WatchArgs};
use clap::{Parser, Subcommand};

/// Git front-end orchestration core
///
/// Runs git on behalf of a front-end and reports classified results.
#[derive(Debug, Parser)]
#[command(
    name = "gitscope",
    author,
    version,
    about = "Git front-end orchestration core",
    long_about = "gitscope Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Runs git on behalf of a front-end: validates preconditions,\n\
                  classifies git's output into success, benign warning or\n\
                  failure, and recovers from rejected pushes.\n\n\
                  Invoking `gitscope -C some/repo status` shows the status of\n\
                  that repository. See `gitscope <command> --help` for more\n\
                  information about a command.",
    after_help = "CONFIGURATION:\n\n\
                  gitscope reads `gitscope.toml` from the current directory if\n\
                  present, then the file given with --config, then GITSCOPE_*\n\
                  environment variables such as GITSCOPE_GIT__REMOTE=upstream.\n\
                  Command-line flags override everything."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values.
    Options,

    /// Validates the repository directory and prints its branches.
    Open,

    /// Initializes a repository in the directory.
    Init,

    /// Shows the working tree status.
    Status,

    /// Stages all changes.
    Stage,

    /// Commits the staged changes.
    Commit(CommitArgs),

    /// Pushes a branch, recovering from non-fast-forward rejections.
    Push(PushArgs),

    /// Pulls a branch from the configured remote.
    Pull(PullArgs),

    /// Shows the one-line commit log.
    Log,

    /// Reverts a commit, shelving local changes around it.
    Revert(RevertArgs),

    /// Clones a repository into the directory.
    Clone(CloneArgs),

    /// Manages branches.
    Branch(BranchArgs),

    /// Shows the reflog.
    Reflog,

    /// Shows unstaged changes.
    Diff(DiffArgs),

    /// Manages remotes.
    Remote(RemoteArgs),

    /// Shows or saves .gitignore.
    Ignore(IgnoreArgs),

    /// Runs a multi-line script of git commands.
    Script(ScriptArgs),

    /// Prints the branch list whenever it changes, until Ctrl+C.
    Watch(WatchArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
