// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `.gitignore` editing and shared input helpers.

use std::path::Path;

use anyhow::Context;
use tokio::io::AsyncReadExt;

use crate::cli::repo::{IgnoreArgs, IgnoreSubcommand};
use crate::cmd::session::Session;
use crate::error::Result;

/// Reads `file`, or all of stdin when it is `None`.
///
/// # Errors
///
/// Returns an error if the input cannot be read as UTF-8.
pub async fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut text = String::new();
            tokio::io::stdin()
                .read_to_string(&mut text)
                .await
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

/// Main handler for the ignore command.
///
/// # Errors
///
/// Returns an error if the repository is invalid or the file cannot be
/// read or written.
pub async fn run_ignore_command(args: &IgnoreArgs, session: &Session) -> Result<()> {
    let repo = session.select()?;
    match &args.subcommand {
        IgnoreSubcommand::Show { initial } => {
            let content = session.service().open_ignore_file(&repo, initial).await?;
            print!("{content}");
        }
        IgnoreSubcommand::Save { file } => {
            let content = read_input(file.as_deref()).await?;
            session.service().save_ignore_file(&repo, &content).await?;
            println!("Saved {}", repo.ignore_file().display());
        }
    }
    Ok(())
}
