// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote command arguments.
//!
//! ```text
//! remote list             → remote -v
//! remote add NAME URL     → remote add (origin is replaced)
//! remote remove NAME      → remote remove NAME
//! ```

use clap::{Args, Subcommand};

/// Arguments for the `remote` command.
#[derive(Debug, Clone, Args)]
pub struct RemoteArgs {
    #[command(subcommand)]
    pub subcommand: RemoteSubcommand,
}

/// Remote subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum RemoteSubcommand {
    /// Lists remotes with their fetch and push URLs.
    List,

    /// Adds a remote. Accepts `NAME URL` or a pasted `git remote add NAME URL`.
    Add {
        #[arg(value_name = "SPEC", required = true, num_args = 1..)]
        spec: Vec<String>,
    },

    /// Removes a remote.
    Remove { name: String },
}
