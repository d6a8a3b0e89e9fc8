//! Child-process session speaking line-delimited JSON-RPC over stdio.
use std::{
    path::PathBuf,
    process::{ExitStatus, Stdio},
    time::Duration,
};

use serde::Serialize;
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines},
    process::{Child, ChildStdin, ChildStdout, Command},
    task::JoinHandle,
    time,
};
use tracing::{debug, warn, Instrument, Span};

use crate::lib::errors::CheckError;

use super::protocol::{self, IncomingMessage, JsonRpcRequest, RpcReply};

/// Executable and arguments for the server under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerLaunch {
    pub program: PathBuf,
    pub args: Vec<String>,
}

/// How the child ended during shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownKind {
    Exited(ExitStatus),
    Killed,
}

/// A running server with piped stdio, spoken to one line at a time.
pub struct ServerSession {
    child: Child,
    stdin: Option<ChildStdin>,
    stdout: Lines<BufReader<ChildStdout>>,
    stderr_task: Option<JoinHandle<()>>,
    response_timeout: Duration,
}

impl ServerSession {
    pub fn spawn(launch: &ServerLaunch, response_timeout: Duration) -> Result<Self, CheckError> {
        let mut command = Command::new(&launch.program);
        command
            .args(&launch.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = command.spawn().map_err(|source| CheckError::Launch {
            path: launch.program.clone(),
            source,
        })?;
        debug!(
            target: "excel_mcp::check",
            program = %launch.program.display(),
            pid = child.id(),
            "Spawned server process"
        );

        let stdin = child
            .stdin
            .take()
            .ok_or(CheckError::PipeUnavailable { stream: "stdin" })?;
        let stdout = child
            .stdout
            .take()
            .ok_or(CheckError::PipeUnavailable { stream: "stdout" })?;
        let stderr_task = child.stderr.take().map(|stderr| {
            tokio::spawn(
                async move {
                    let mut lines = BufReader::new(stderr).lines();
                    while let Ok(Some(line)) = lines.next_line().await {
                        debug!(target: "excel_mcp::check", %line, "server stderr");
                    }
                }
                .instrument(Span::current()),
            )
        });

        Ok(Self {
            child,
            stdin: Some(stdin),
            stdout: BufReader::new(stdout).lines(),
            stderr_task,
            response_timeout,
        })
    }

    /// Send `request` and wait for the response carrying its id.
    pub async fn call<P: Serialize>(
        &mut self,
        request: &JsonRpcRequest<P>,
    ) -> Result<RpcReply, CheckError> {
        self.send(request).await?;
        self.receive(request.method, request.id).await
    }

    async fn send<P: Serialize>(&mut self, request: &JsonRpcRequest<P>) -> Result<(), CheckError> {
        let line = request.to_line().map_err(|source| CheckError::Io {
            action: "encoding a request",
            source: source.into(),
        })?;
        let stdin = self
            .stdin
            .as_mut()
            .ok_or(CheckError::PipeUnavailable { stream: "stdin" })?;
        stdin
            .write_all(line.as_bytes())
            .await
            .map_err(|source| CheckError::Io {
                action: "writing a request",
                source,
            })?;
        stdin.flush().await.map_err(|source| CheckError::Io {
            action: "flushing a request",
            source,
        })?;
        debug!(
            target: "excel_mcp::check",
            method = request.method,
            id = request.id,
            "Sent request"
        );
        Ok(())
    }

    async fn receive(&mut self, method: &'static str, id: u64) -> Result<RpcReply, CheckError> {
        let timeout = self.response_timeout;
        match time::timeout(timeout, self.next_reply(method, id)).await {
            Ok(result) => result,
            Err(_) => Err(CheckError::ResponseTimeout { method, timeout }),
        }
    }

    async fn next_reply(&mut self, method: &'static str, id: u64) -> Result<RpcReply, CheckError> {
        loop {
            let line = self
                .stdout
                .next_line()
                .await
                .map_err(|source| CheckError::Io {
                    action: "reading a response",
                    source,
                })?
                .ok_or(CheckError::EmptyResponse { method })?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            match protocol::decode_line(line, method)? {
                IncomingMessage::Notification { method: note } => {
                    debug!(
                        target: "excel_mcp::check",
                        notification = %note,
                        "Skipped notification"
                    );
                }
                IncomingMessage::Response(reply) if reply.answers(id) => return Ok(reply),
                IncomingMessage::Response(reply) => {
                    warn!(
                        target: "excel_mcp::check",
                        expected_id = id,
                        received_id = ?reply.id,
                        "Skipped response with unexpected id"
                    );
                }
            }
        }
    }

    /// Close stdin, ask the server to stop, then force-kill after `grace`.
    pub async fn shutdown(mut self, grace: Duration) -> std::io::Result<ShutdownKind> {
        drop(self.stdin.take());

        let result = match self.child.try_wait()? {
            Some(status) => Ok(ShutdownKind::Exited(status)),
            None => {
                request_termination(&self.child);
                match time::timeout(grace, self.child.wait()).await {
                    Ok(status) => status.map(ShutdownKind::Exited),
                    Err(_) => {
                        warn!(
                            target: "excel_mcp::check",
                            grace_secs = grace.as_secs(),
                            "Server ignored termination; killing"
                        );
                        self.child.kill().await.map(|_| ShutdownKind::Killed)
                    }
                }
            }
        };

        if let Some(task) = self.stderr_task.take() {
            task.abort();
        }
        result
    }
}

#[cfg(unix)]
fn request_termination(child: &Child) {
    let Some(pid) = child.id() else {
        return;
    };
    let Ok(pid) = libc::pid_t::try_from(pid) else {
        return;
    };
    // SAFETY: `pid` belongs to a child we spawned and have not reaped yet.
    let rc = unsafe { libc::kill(pid, libc::SIGTERM) };
    if rc != 0 {
        debug!(
            target: "excel_mcp::check",
            pid,
            error = %std::io::Error::last_os_error(),
            "SIGTERM delivery failed"
        );
    }
}

#[cfg(not(unix))]
fn request_termination(_child: &Child) {
    // Closing stdin is the only portable stop request; the bounded wait and kill follow.
}
