// gitscope: Git front-end orchestration core
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! I/O streaming and output capture for processes.
//!
//! ```text
//! run_child()
//!   stdout/stderr reader tasks
//!   one unbounded channel tags each line with its stream
//!   lines are read as raw bytes up to EOF, decoded lossily as UTF-8
//!   wait for exit, then drain readers
//!   --> ProcessOutput { stdout, stderr, combined, exit_code }
//! ```

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Child;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use super::builder::{ProcessBuilder, ProcessOutput, StreamFlags};
use crate::error::{ProcessError, ScopeResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

/// Spawns a reader task for one stream if its flags ask for the content.
fn spawn_reader<R>(
    reader: Option<R>,
    stream: Stream,
    flags: StreamFlags,
    process_name: &str,
    tx: mpsc::UnboundedSender<(Stream, String)>,
) -> Option<JoinHandle<()>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    if !flags.intersects(StreamFlags::FORWARD_TO_LOG | StreamFlags::KEEP_IN_STRING) {
        return None;
    }
    let name = process_name.to_string();
    reader.map(|reader| {
        tokio::spawn(async move {
            read_stream(reader, stream, flags, &name, tx).await;
        })
    })
}

/// Decodes one raw line, dropping the trailing `\n` or `\r\n`.
///
/// Invalid UTF-8 becomes U+FFFD so that commit messages or paths in a
/// legacy encoding never cut the stream short.
fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}

/// Reads lines from a stream until EOF, logging and forwarding them.
async fn read_stream<R>(
    reader: R,
    stream: Stream,
    flags: StreamFlags,
    process_name: &str,
    tx: mpsc::UnboundedSender<(Stream, String)>,
) where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut raw = Vec::new();
    loop {
        raw.clear();
        match reader.read_until(b'\n', &mut raw).await {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                debug!(process = %process_name, stream = stream.as_str(), error = %e, "stream read failed");
                break;
            }
        }
        let line = decode_line(&raw);
        if flags.contains(StreamFlags::FORWARD_TO_LOG) {
            trace!(process = %process_name, stream = stream.as_str(), line = %line, "output");
        }
        if flags.contains(StreamFlags::KEEP_IN_STRING) {
            let _ = tx.send((stream, line));
        }
    }
}

fn push_line(buffer: &mut String, line: &str) {
    if !buffer.is_empty() {
        buffer.push('\n');
    }
    buffer.push_str(line);
}

impl ProcessBuilder {
    /// Runs the child process, capturing output and waiting for completion.
    pub(super) async fn run_child(
        &self,
        name: &str,
        cmd_line: &str,
        child: &mut Child,
    ) -> ScopeResult<ProcessOutput> {
        let (tx, mut rx) = mpsc::unbounded_channel::<(Stream, String)>();

        let stdout_handle = spawn_reader(
            child.stdout.take(),
            Stream::Stdout,
            self.stdout_flags(),
            name,
            tx.clone(),
        );
        let stderr_handle = spawn_reader(
            child.stderr.take(),
            Stream::Stderr,
            self.stderr_flags(),
            name,
            tx,
        );

        let exit_status = child
            .wait()
            .await
            .map_err(|source| ProcessError::WaitFailed {
                command: cmd_line.to_string(),
                source,
            })?;

        for handle in [stdout_handle, stderr_handle].into_iter().flatten() {
            let _ = handle.await;
        }

        let mut stdout = String::new();
        let mut stderr = String::new();
        let mut combined = String::new();
        while let Ok((stream, line)) = rx.try_recv() {
            match stream {
                Stream::Stdout => push_line(&mut stdout, &line),
                Stream::Stderr => push_line(&mut stderr, &line),
            }
            push_line(&mut combined, &line);
        }

        Ok(ProcessOutput::new(
            exit_status.code().unwrap_or(-1),
            stdout,
            stderr,
            combined,
        ))
    }
}
