// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scripted [`GitRunner`] for unit tests.
//!
//! Calls are recorded as `"git <args>"` or `"sh: <line>"`. Replies are
//! queued per call and consumed in order; calls without a queued reply
//! succeed with empty output.

use std::collections::VecDeque;
use std::path::Path;
use std::sync::Mutex;

use futures_util::future::BoxFuture;

use super::GitRunner;
use crate::git::classify::{Classifier, CommandResult};
use crate::error::ScopeResult;

#[derive(Debug, Default)]
pub(crate) struct ScriptedRunner {
    replies: Mutex<VecDeque<(String, bool, String)>>,
    calls: Mutex<Vec<String>>,
    classifier: Classifier,
}

impl ScriptedRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queues a successful reply for `call`.
    pub(crate) fn ok(self, call: &str, output: &str) -> Self {
        self.push(call, true, output)
    }

    /// Queues a failing reply for `call`.
    pub(crate) fn fail(self, call: &str, output: &str) -> Self {
        self.push(call, false, output)
    }

    fn push(self, call: &str, succeeded: bool, output: &str) -> Self {
        self.replies.lock().expect("replies poisoned").push_back((
            call.to_string(),
            succeeded,
            output.to_string(),
        ));
        self
    }

    /// Returns every call seen so far, in order.
    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls poisoned").clone()
    }

    fn respond(&self, call: String) -> CommandResult {
        self.calls.lock().expect("calls poisoned").push(call.clone());

        let mut replies = self.replies.lock().expect("replies poisoned");
        let reply = replies
            .iter()
            .position(|(expected, _, _)| *expected == call)
            .and_then(|idx| replies.remove(idx));

        let (succeeded, output) = reply.map_or((true, String::new()), |(_, ok, out)| (ok, out));
        self.classifier.result(call, succeeded, output)
    }
}

impl GitRunner for ScriptedRunner {
    fn git<'a>(
        &'a self,
        _repo: &'a Path,
        args: &'a [&'a str],
    ) -> BoxFuture<'a, ScopeResult<CommandResult>> {
        let result = self.respond(format!("git {}", args.join(" ")));
        Box::pin(async move { Ok(result) })
    }

    fn shell<'a>(&'a self, _cwd: &'a Path, line: &'a str) -> BoxFuture<'a, ScopeResult<CommandResult>> {
        let result = self.respond(format!("sh: {line}"));
        Box::pin(async move { Ok(result) })
    }
}
