//! Injected client interface for the backend bridge
//!
//! Controllers and action dispatch depend on this trait rather than the
//! concrete process plumbing, so they can be exercised with a fake
//! backend in tests.

use serde_json::Value;

use super::commands::{BackendCommand, CommandSender};
use crate::common::prelude::*;

/// Backend invocation surface: request/response commands and
/// fire-and-forget commands.
#[trait_variant::make(BackendClient: Send)]
pub trait LocalBackendClient {
    /// Invoke a command and wait for its result payload
    async fn invoke(&self, command: BackendCommand) -> Result<Option<Value>>;

    /// Issue a command without waiting for a response
    async fn fire(&self, command: BackendCommand) -> Result<()>;
}

impl BackendClient for CommandSender {
    async fn invoke(&self, command: BackendCommand) -> Result<Option<Value>> {
        let response = self.send(command).await?;
        if response.success {
            Ok(response.result)
        } else {
            Err(Error::backend(
                response.error.unwrap_or_else(|| "command rejected".to_string()),
            ))
        }
    }

    async fn fire(&self, command: BackendCommand) -> Result<()> {
        self.send_fire_and_forget(command).await
    }
}
