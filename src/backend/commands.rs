//! Command building and request tracking for backend communication
//!
//! This module provides:
//! - Request ID tracking for matching responses
//! - Command building for the line-JSON wire format
//! - Timeout handling for stalled commands

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use serde_json::{json, Value};
use tokio::sync::{mpsc, oneshot, RwLock};

use crate::common::prelude::*;

/// Global request ID counter
static REQUEST_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate a unique request ID
pub fn next_request_id() -> u64 {
    REQUEST_ID_COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// A pending request awaiting response
struct PendingRequest {
    /// Channel to send the response
    response_tx: oneshot::Sender<CommandResponse>,
    /// When this request was created
    created_at: Instant,
}

/// Response from a command
#[derive(Debug, Clone)]
pub struct CommandResponse {
    pub id: u64,
    pub success: bool,
    pub result: Option<Value>,
    pub error: Option<String>,
}

impl CommandResponse {
    pub fn from_raw(id: u64, result: Option<Value>, error: Option<Value>) -> Self {
        Self {
            id,
            success: error.is_none(),
            result,
            error: error.map(|e| match e {
                Value::String(s) => s,
                other => other.to_string(),
            }),
        }
    }
}

/// Tracks pending requests and matches responses
pub struct RequestTracker {
    pending: Arc<RwLock<HashMap<u64, PendingRequest>>>,
}

impl Default for RequestTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestTracker {
    pub fn new() -> Self {
        Self {
            pending: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a new pending request
    ///
    /// Returns (request_id, receiver for the response)
    pub async fn register(&self) -> (u64, oneshot::Receiver<CommandResponse>) {
        let id = next_request_id();
        let (tx, rx) = oneshot::channel();

        self.pending.write().await.insert(
            id,
            PendingRequest {
                response_tx: tx,
                created_at: Instant::now(),
            },
        );

        (id, rx)
    }

    /// Handle an incoming response from the backend
    ///
    /// Returns true if the response was matched to a pending request
    pub async fn handle_response(&self, id: u64, result: Option<Value>, error: Option<Value>) -> bool {
        if let Some(pending) = self.pending.write().await.remove(&id) {
            let response = CommandResponse::from_raw(id, result, error);
            let _ = pending.response_tx.send(response);
            true
        } else {
            false
        }
    }

    /// Drop pending requests older than `max_age`
    pub async fn cleanup_stale(&self, max_age: Duration) {
        self.pending
            .write()
            .await
            .retain(|_, req| req.created_at.elapsed() <= max_age);
    }

    /// Cancel all pending requests (e.g., on shutdown)
    pub async fn cancel_all(&self) {
        self.pending.write().await.clear();
    }
}

/// Commands accepted by the mining supervisor
///
/// Names and argument shapes are fixed by the backend interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendCommand {
    GetConfig,
    StartMining,
    PauseMining,
    ResumeMining,
    PrintStatus,
    SaveSettings { address: String, folder: String },
    SelectBlockchainFolder,
}

impl BackendCommand {
    /// Build the wire request line
    pub fn build(&self, id: u64) -> String {
        let (command, args) = match self {
            BackendCommand::GetConfig => ("get_config", json!({})),
            BackendCommand::StartMining => ("start_mining", json!({})),
            BackendCommand::PauseMining => ("pause_mining", json!({})),
            BackendCommand::ResumeMining => ("resume_mining", json!({})),
            BackendCommand::PrintStatus => ("print_status", json!({})),
            BackendCommand::SaveSettings { address, folder } => (
                "save_settings",
                json!({ "address": address, "folder": folder }),
            ),
            BackendCommand::SelectBlockchainFolder => ("select_blockchain_folder", json!({})),
        };

        json!({
            "id": id,
            "command": command,
            "args": args,
        })
        .to_string()
    }

    /// Get a human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            BackendCommand::GetConfig => "get config",
            BackendCommand::StartMining => "start mining",
            BackendCommand::PauseMining => "pause mining",
            BackendCommand::ResumeMining => "resume mining",
            BackendCommand::PrintStatus => "print status",
            BackendCommand::SaveSettings { .. } => "save settings",
            BackendCommand::SelectBlockchainFolder => "select blockchain folder",
        }
    }
}

/// Sends commands to the backend process with request tracking
#[derive(Clone)]
pub struct CommandSender {
    /// Channel to send raw lines to the backend's stdin
    stdin_tx: mpsc::Sender<String>,
    /// Request tracker for response matching
    tracker: Arc<RequestTracker>,
}

impl std::fmt::Debug for CommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSender")
            .field("stdin_tx", &"<channel>")
            .finish()
    }
}

impl CommandSender {
    pub fn new(stdin_tx: mpsc::Sender<String>, tracker: Arc<RequestTracker>) -> Self {
        Self { stdin_tx, tracker }
    }

    /// Create a CommandSender for testing (uses a dummy channel)
    #[cfg(test)]
    pub fn new_for_test() -> Self {
        let (tx, _rx) = mpsc::channel(1);
        Self {
            stdin_tx: tx,
            tracker: Arc::new(RequestTracker::new()),
        }
    }

    /// Send a command and wait for response
    pub async fn send(&self, command: BackendCommand) -> Result<CommandResponse> {
        self.send_with_timeout(command, Duration::from_secs(30)).await
    }

    /// Send a command with custom timeout
    pub async fn send_with_timeout(
        &self,
        command: BackendCommand,
        timeout: Duration,
    ) -> Result<CommandResponse> {
        let (id, response_rx) = self.tracker.register().await;
        let line = command.build(id);

        debug!("Sending command #{}: {}", id, command.description());

        self.stdin_tx
            .send(line)
            .await
            .map_err(|_| Error::channel_send("backend stdin"))?;

        match tokio::time::timeout(timeout, response_rx).await {
            Ok(Ok(response)) => {
                debug!("Command #{} completed: success={}", id, response.success);
                Ok(response)
            }
            Ok(Err(_)) => {
                // Channel closed (request was cancelled)
                Err(Error::process("Command cancelled"))
            }
            Err(_) => {
                // Timeout - cleanup the pending request
                self.tracker.cleanup_stale(Duration::ZERO).await;
                Err(Error::backend(format!(
                    "Command '{}' timed out after {:?}",
                    command.description(),
                    timeout
                )))
            }
        }
    }

    /// Send a fire-and-forget command (no response expected)
    pub async fn send_fire_and_forget(&self, command: BackendCommand) -> Result<()> {
        let id = next_request_id();
        let line = command.build(id);

        debug!("Sending fire-and-forget #{}: {}", id, command.description());

        self.stdin_tx
            .send(line)
            .await
            .map_err(|_| Error::channel_send("backend stdin"))
    }

    /// Get the request tracker (for response handling)
    pub fn tracker(&self) -> &Arc<RequestTracker> {
        &self.tracker
    }
}
