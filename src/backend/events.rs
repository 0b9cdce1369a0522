//! Channel events from the backend process and typed push events

use serde_json::Value;

use super::protocol::RawMessage;
use crate::core::ProcessKind;

/// Events from the backend process plumbing
#[derive(Debug, Clone)]
pub enum BackendEvent {
    /// Raw stdout line from the backend (wire JSON)
    Stdout(String),

    /// Stderr output (usually errors/warnings)
    Stderr(String),

    /// Backend process has exited
    Exited { code: Option<i32> },

    /// Process spawn failed
    SpawnFailed { reason: String },
}

/// Typed push events the UI subscribes to
#[derive(Debug, Clone, PartialEq)]
pub enum PushEvent {
    /// One rendered log line from a monitored process
    ProcessLog { process: ProcessKind, line: String },

    /// Pushed status JSON (same shape as the `print_status` response)
    Status { raw: String },

    /// Folder picker completed with the chosen path
    FolderSelected { path: String },
}

impl PushEvent {
    /// Map a raw event message onto a typed push event.
    ///
    /// Unknown event names return None and are ignored upstream.
    pub fn from_raw(msg: &RawMessage) -> Option<Self> {
        let RawMessage::Event { event, payload } = msg else {
            return None;
        };

        if let Some(process) = ProcessKind::ALL
            .iter()
            .find(|kind| kind.stdout_event() == event)
        {
            return Some(PushEvent::ProcessLog {
                process: *process,
                line: payload_string(payload)?,
            });
        }

        match event.as_str() {
            "xmrig-status" => Some(PushEvent::Status {
                raw: payload_string(payload)?,
            }),
            "blockchain-folder-selected" => Some(PushEvent::FolderSelected {
                path: payload_string(payload)?,
            }),
            _ => None,
        }
    }
}

fn payload_string(payload: &Value) -> Option<String> {
    payload.as_str().map(str::to_string)
}
