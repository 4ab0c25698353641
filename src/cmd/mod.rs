// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> Session --> cmd::run_* handlers
//!   repo, branch, remote, ignore, script, watch, config
//! ```

pub mod branch;
pub mod config;
pub mod ignore;
pub mod repo;
pub mod script;
pub mod session;
