//! Backend process management

use std::process::Stdio;
use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, Command};
use tokio::sync::mpsc;

use super::commands::{CommandSender, RequestTracker};
use super::events::BackendEvent;
use crate::common::prelude::*;
use crate::config::BackendSettings;

/// Manages the mining supervisor child process
pub struct BackendProcess {
    /// The child process handle
    child: Child,
    /// Sender for stdin command lines
    stdin_tx: mpsc::Sender<String>,
    /// Process ID for logging
    pid: Option<u32>,
}

impl BackendProcess {
    /// Spawn the backend process described by `settings`
    ///
    /// Events are sent to `event_tx` for processing by the TUI event loop.
    pub async fn spawn(
        settings: &BackendSettings,
        event_tx: mpsc::Sender<BackendEvent>,
    ) -> Result<Self> {
        info!("Spawning backend process: {}", settings.command);

        let mut child = Command::new(&settings.command)
            .args(&settings.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::BackendNotFound {
                        command: settings.command.clone(),
                    }
                } else {
                    Error::ProcessSpawn {
                        reason: e.to_string(),
                    }
                }
            })?;

        let pid = child.id();
        info!("Backend process started with PID: {:?}", pid);

        // Take ownership of stdin and create the command channel
        let stdin = child.stdin.take().expect("stdin was configured");
        let (stdin_tx, stdin_rx) = mpsc::channel::<String>(32);
        tokio::spawn(Self::stdin_writer(stdin, stdin_rx));

        // Spawn stdout reader task
        let stdout = child.stdout.take().expect("stdout was configured");
        tokio::spawn(Self::stdout_reader(stdout, event_tx.clone()));

        // Spawn stderr reader task
        let stderr = child.stderr.take().expect("stderr was configured");
        tokio::spawn(Self::stderr_reader(stderr, event_tx));

        Ok(Self {
            child,
            stdin_tx,
            pid,
        })
    }

    /// Read lines from stdout and send as BackendEvents
    async fn stdout_reader(stdout: tokio::process::ChildStdout, tx: mpsc::Sender<BackendEvent>) {
        let mut reader = BufReader::new(stdout).lines();

        while let Ok(Some(line)) = reader.next_line().await {
            trace!("stdout: {}", line);

            if tx.send(BackendEvent::Stdout(line)).await.is_err() {
                debug!("stdout channel closed");
                break;
            }
        }

        info!("stdout reader finished, backend likely exited");
        let _ = tx.send(BackendEvent::Exited { code: None }).await;
    }

    /// Read lines from stderr and send as BackendEvents
    async fn stderr_reader(stderr: tokio::process::ChildStderr, tx: mpsc::Sender<BackendEvent>) {
        let mut reader = BufReader::new(stderr).lines();

        while let Ok(Some(line)) = reader.next_line().await {
            trace!("stderr: {}", line);

            if tx.send(BackendEvent::Stderr(line)).await.is_err() {
                debug!("stderr channel closed");
                break;
            }
        }

        debug!("stderr reader finished");
    }

    /// Write command lines to stdin
    async fn stdin_writer(mut stdin: tokio::process::ChildStdin, mut rx: mpsc::Receiver<String>) {
        while let Some(command) = rx.recv().await {
            debug!("Sending to backend: {}", command);

            if let Err(e) = stdin.write_all(command.as_bytes()).await {
                error!("Failed to write to stdin: {}", e);
                break;
            }
            if let Err(e) = stdin.write_all(b"\n").await {
                error!("Failed to write newline: {}", e);
                break;
            }
            if let Err(e) = stdin.flush().await {
                error!("Failed to flush stdin: {}", e);
                break;
            }
        }

        debug!("stdin writer finished");
    }

    /// Gracefully shutdown the backend process
    ///
    /// Closes stdin (the backend treats EOF as a shutdown request),
    /// waits with a timeout, force kills if needed.
    pub async fn shutdown(&mut self) -> Result<()> {
        use std::time::Duration;
        use tokio::time::timeout;

        info!("Initiating backend shutdown");

        // Dropping the writer closes the child's stdin
        let (closed_tx, _closed_rx) = mpsc::channel(1);
        let _ = std::mem::replace(&mut self.stdin_tx, closed_tx);

        match timeout(Duration::from_secs(5), self.child.wait()).await {
            Ok(Ok(status)) => {
                info!("Backend exited gracefully: {:?}", status);
                Ok(())
            }
            Ok(Err(e)) => {
                warn!("Error waiting for backend: {}", e);
                self.force_kill().await
            }
            Err(_) => {
                warn!("Timeout waiting for graceful exit");
                self.force_kill().await
            }
        }
    }

    /// Force kill the process
    async fn force_kill(&mut self) -> Result<()> {
        warn!("Force killing backend process");
        self.child
            .kill()
            .await
            .map_err(|e| Error::process(format!("Failed to kill: {}", e)))
    }

    /// Check if the process is still running
    pub fn is_running(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }

    /// Get the process ID
    pub fn id(&self) -> Option<u32> {
        self.pid
    }

    /// Create a command sender for this process
    pub fn command_sender(&self, tracker: Arc<RequestTracker>) -> CommandSender {
        CommandSender::new(self.stdin_tx.clone(), tracker)
    }
}

impl Drop for BackendProcess {
    fn drop(&mut self) {
        if let Ok(None) = self.child.try_wait() {
            warn!("BackendProcess dropped while still running");
        }
        // kill_on_drop(true) handles actual cleanup
    }
}
