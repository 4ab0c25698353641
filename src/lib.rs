// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)        cmd (Session + handlers)
//!                |                     |
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |  TOML + GITSCOPE_* env    |
//!              '--+-----------+--------+---'
//!                 |           |        |
//!                 v           v        v
//!              script       watch     git::service
//!           line runner  branch poll  RepositoryService
//!                 |           |        |
//!                 +-----------+--------+
//!                             v
//!                  git::backend (dyn GitRunner)
//!                  git::classify (CommandResult)
//!
//!   +-----------------------------------------+
//!   |  core   process (spawn, capture, flags) |
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
pub mod script;
pub mod watch;
