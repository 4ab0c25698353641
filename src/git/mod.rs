// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git orchestration.
//!
//! ```text
//!            RepositoryService (service/)
//!     commit.rs  sync.rs  branch.rs  remote.rs  ignore.rs
//!                     |
//!                     v
//!      ,------------------------------,
//!      |  backend: dyn GitRunner      |
//!      '--------------+---------------'
//!                     |
//!                     v
//!               ShellRunner --> git -C <repo> ...
//!                     |
//!                     v
//!            classify: CommandResult
//!
//! handle.rs       RepositoryHandle, ActiveRepository
//! branches.rs     BranchList        (branch --list)
//! remote_spec.rs  RemoteSpec/Remote (remote add text, remote -v)
//! status.rs       WorkingTreeState  (status --porcelain)
//! ```

pub mod backend;
pub mod branches;
pub mod classify;
pub mod handle;
pub mod remote_spec;
pub mod service;
pub mod status;

pub use backend::{GitRunner, ShellRunner};
pub use branches::BranchList;
pub use classify::{Classification, Classifier, CommandResult};
pub use handle::{ActiveRepository, RepositoryHandle};
pub use service::{Outcome, PullMode, RepositoryService, ServiceOptions};
