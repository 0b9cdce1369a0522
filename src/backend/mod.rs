//! Backend bridge infrastructure layer
//!
//! Talks to the mining supervisor process over line-delimited JSON:
//! commands down its stdin, responses and push events up its stdout.

pub mod client;
pub mod commands;
pub mod events;
pub mod process;
pub mod protocol;

pub use client::{BackendClient, LocalBackendClient};
pub use commands::{next_request_id, BackendCommand, CommandResponse, CommandSender, RequestTracker};
pub use events::{BackendEvent, PushEvent};
pub use process::BackendProcess;
pub use protocol::RawMessage;
