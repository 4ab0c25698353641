// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Live branch list by polling.
//!
//! ```text
//! BranchWatcher::start(repo)
//!   poll once (error => start fails)
//!   spawn:
//!     loop {
//!       select! { cancelled => break, sleep(interval) => {} }
//!       poll                      (runs to completion)
//!       cancelled? => break
//!       names differ from last?  => store + send on flume
//!       poll error               => warn!, keep last
//!     }
//!   --> (BranchWatch { current(), changes() }, StopHandle)
//! ```
//!
//! Comparison is on the ordered names only; a reordering is a change, a
//! different checked-out branch with the same names is not.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use futures_util::future::BoxFuture;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::error::ScopeResult;
use crate::git::branches::BranchList;
use crate::git::handle::RepositoryHandle;
use crate::git::service::RepositoryService;

/// Interval between polls when none is configured.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(3);

/// Anything that can list a repository's branches.
pub trait BranchSource: Send + Sync {
    fn branches<'a>(&'a self, repo: &'a RepositoryHandle) -> BoxFuture<'a, ScopeResult<BranchList>>;
}

impl BranchSource for RepositoryService {
    fn branches<'a>(&'a self, repo: &'a RepositoryHandle) -> BoxFuture<'a, ScopeResult<BranchList>> {
        Box::pin(self.list_branches(repo))
    }
}

/// Starts polling loops.
#[derive(Clone)]
pub struct BranchWatcher {
    source: Arc<dyn BranchSource>,
    interval: Duration,
}

impl BranchWatcher {
    pub fn new(source: Arc<dyn BranchSource>) -> Self {
        Self {
            source,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Sets the poll interval. A zero interval keeps the default.
    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        if !interval.is_zero() {
            self.interval = interval;
        }
        self
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Polls once, then keeps polling `repo` in a background task.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns the error of the initial poll; no task is spawned then.
    pub async fn start(&self, repo: RepositoryHandle) -> ScopeResult<(BranchWatch, StopHandle)> {
        let initial = self.source.branches(&repo).await?;
        debug!(repo = %repo, branches = initial.len(), "branch watch started");

        let latest = Arc::new(Mutex::new(initial));
        let (tx, rx) = flume::unbounded();
        let token = CancellationToken::new();

        let poller = Poller {
            source: Arc::clone(&self.source),
            repo,
            interval: self.interval,
            latest: Arc::clone(&latest),
            tx,
            token: token.clone(),
        };
        let task = tokio::spawn(poller.run());

        Ok((
            BranchWatch { latest, rx },
            StopHandle {
                token,
                task: Some(task),
            },
        ))
    }
}

struct Poller {
    source: Arc<dyn BranchSource>,
    repo: RepositoryHandle,
    interval: Duration,
    latest: Arc<Mutex<BranchList>>,
    tx: flume::Sender<BranchList>,
    token: CancellationToken,
}

impl Poller {
    async fn run(self) {
        loop {
            tokio::select! {
                () = self.token.cancelled() => break,
                () = tokio::time::sleep(self.interval) => {}
            }

            let polled = self.source.branches(&self.repo).await;
            if self.token.is_cancelled() {
                break;
            }

            match polled {
                Ok(list) => {
                    if !self.publish(list) {
                        debug!(repo = %self.repo, "branch watch receiver dropped");
                        break;
                    }
                }
                Err(err) => warn!(repo = %self.repo, error = %err, "branch poll failed"),
            }
        }
        debug!(repo = %self.repo, "branch watch stopped");
    }

    /// Stores and sends `list` if its names changed. Returns false once
    /// nobody is listening.
    fn publish(&self, list: BranchList) -> bool {
        {
            let mut latest = self.latest.lock().unwrap_or_else(PoisonError::into_inner);
            let changed = !latest.same_names(&list);
            *latest = list.clone();
            if !changed {
                return true;
            }
        }
        debug!(repo = %self.repo, branches = list.len(), "branch list changed");
        self.tx.send(list).is_ok()
    }
}

/// Consumer side of a running watch.
#[derive(Debug)]
pub struct BranchWatch {
    latest: Arc<Mutex<BranchList>>,
    rx: flume::Receiver<BranchList>,
}

impl BranchWatch {
    /// Returns the last known branch list.
    #[must_use]
    pub fn current(&self) -> BranchList {
        self.latest
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the preselected branch (the first one listed).
    #[must_use]
    pub fn selected(&self) -> Option<String> {
        self.current().first().map(String::from)
    }

    /// Receiver of changed lists, one message per change.
    #[must_use]
    pub const fn changes(&self) -> &flume::Receiver<BranchList> {
        &self.rx
    }
}

/// Stops the polling task. Dropping it stops the task too.
#[derive(Debug)]
pub struct StopHandle {
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl StopHandle {
    /// Requests the task to stop. A poll in flight completes but is not
    /// published.
    pub fn stop(&self) {
        self.token.cancel();
    }

    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Stops and waits for the task to exit.
    pub async fn join(mut self) {
        self.token.cancel();
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                warn!(error = %err, "branch watch task ended abnormally");
            }
        }
    }
}

impl Drop for StopHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
