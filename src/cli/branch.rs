// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch command arguments.
//!
//! # Subcommands
//!
//! ```text
//! branch create NAME      → branch NAME, push -u <remote> NAME
//! branch delete NAME      → branch -d NAME
//! branch rename OLD NEW   → branch -m OLD NEW
//! branch switch NAME      → switch NAME
//! branch list             → branch --list
//! ```

use clap::{Args, Subcommand};

/// Arguments for the `branch` command.
#[derive(Debug, Clone, Args)]
pub struct BranchArgs {
    #[command(subcommand)]
    pub subcommand: BranchSubcommand,
}

/// Branch subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum BranchSubcommand {
    /// Creates a branch and pushes it with upstream tracking.
    Create { name: String },

    /// Deletes a merged branch.
    Delete { name: String },

    /// Renames a branch.
    Rename { old: String, new: String },

    /// Checks out a branch.
    Switch { name: String },

    /// Lists local branches, marking the current one.
    List,
}
