//! Action handlers: UpdateAction dispatch and background task execution

use serde_json::Value;
use tokio::sync::mpsc;
use tracing::warn;

use crate::app::handler::UpdateAction;
use crate::app::message::Message;
use crate::backend::{BackendClient, BackendCommand};
use crate::core::{MinerConfig, StatusSummary};

/// Execute an action by spawning a background task
///
/// `client` is absent until the backend process is up; config fetches
/// report that as a load failure so the UI can surface it.
pub fn handle_action<C>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, client: Option<C>)
where
    C: BackendClient + Send + Sync + 'static,
{
    let Some(client) = client else {
        if matches!(action, UpdateAction::FetchConfig | UpdateAction::SaveAndReload { .. }) {
            let _ = msg_tx.try_send(Message::ConfigLoadFailed {
                reason: "backend not connected".to_string(),
            });
        } else {
            warn!("Dropping action without backend: {:?}", action);
        }
        return;
    };

    match action {
        UpdateAction::Invoke(command) => {
            tokio::spawn(async move {
                if let Err(e) = client.fire(command.clone()).await {
                    warn!("Command '{}' failed: {}", command.description(), e);
                    let _ = msg_tx
                        .send(Message::CommandFailed {
                            command,
                            reason: e.to_string(),
                        })
                        .await;
                }
            });
        }

        UpdateAction::FetchConfig => {
            tokio::spawn(async move {
                let msg = fetch_config(&client).await;
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::FetchStatus => {
            tokio::spawn(async move {
                let msg = fetch_status(&client).await;
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::SaveAndReload { address, folder } => {
            // Save first, then refetch, so the reloaded config already
            // carries the new values
            tokio::spawn(async move {
                if let Err(e) = client
                    .fire(BackendCommand::SaveSettings { address, folder })
                    .await
                {
                    warn!("Saving settings failed: {}", e);
                }
                let msg = fetch_config(&client).await;
                let _ = msg_tx.send(msg).await;
            });
        }
    }
}

async fn fetch_config<C: BackendClient + Sync>(client: &C) -> Message {
    match client.invoke(BackendCommand::GetConfig).await {
        Ok(Some(value)) => match serde_json::from_value::<MinerConfig>(value) {
            Ok(config) => Message::ConfigLoaded(config),
            Err(e) => Message::ConfigLoadFailed {
                reason: format!("malformed config: {}", e),
            },
        },
        Ok(None) => Message::ConfigLoadFailed {
            reason: "empty config response".to_string(),
        },
        Err(e) => Message::ConfigLoadFailed {
            reason: e.to_string(),
        },
    }
}

async fn fetch_status<C: BackendClient + Sync>(client: &C) -> Message {
    match client.invoke(BackendCommand::PrintStatus).await {
        // The backend reports status as a JSON string, same as the
        // pushed `xmrig-status` payload
        Ok(Some(Value::String(raw))) => match StatusSummary::parse(&raw) {
            Ok(summary) => Message::StatusUpdated(summary),
            Err(e) => Message::StatusFailed {
                reason: e.to_string(),
            },
        },
        Ok(Some(value)) => match serde_json::from_value::<StatusSummary>(value) {
            Ok(summary) => Message::StatusUpdated(summary),
            Err(e) => Message::StatusFailed {
                reason: format!("malformed status payload: {}", e),
            },
        },
        Ok(None) => Message::StatusFailed {
            reason: "empty status response".to_string(),
        },
        Err(e) => Message::StatusFailed {
            reason: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::prelude::*;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    /// Records commands and replays canned invoke results
    #[derive(Clone)]
    struct FakeClient {
        sent: Arc<Mutex<Vec<BackendCommand>>>,
        invoke_result: Arc<Mutex<Option<Value>>>,
        fail: bool,
    }

    impl FakeClient {
        fn returning(value: Value) -> Self {
            Self {
                sent: Arc::new(Mutex::new(Vec::new())),
                invoke_result: Arc::new(Mutex::new(Some(value))),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                sent: Arc::new(Mutex::new(Vec::new())),
                invoke_result: Arc::new(Mutex::new(None)),
                fail: true,
            }
        }

        fn sent(&self) -> Vec<BackendCommand> {
            self.sent.lock().unwrap().clone()
        }
    }

    impl BackendClient for FakeClient {
        async fn invoke(&self, command: BackendCommand) -> Result<Option<Value>> {
            self.sent.lock().unwrap().push(command);
            if self.fail {
                return Err(Error::backend("connection refused"));
            }
            Ok(self.invoke_result.lock().unwrap().clone())
        }

        async fn fire(&self, command: BackendCommand) -> Result<()> {
            self.sent.lock().unwrap().push(command);
            if self.fail {
                return Err(Error::backend("connection refused"));
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_fetch_config_sends_config_loaded() {
        let client = FakeClient::returning(json!({
            "pool": {"Local": {"monero_address": "4xyz", "blockchain_dir": "/blocks"}}
        }));
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(UpdateAction::FetchConfig, tx, Some(client.clone()));

        match rx.recv().await.unwrap() {
            Message::ConfigLoaded(config) => assert!(config.setup_complete()),
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(client.sent(), vec![BackendCommand::GetConfig]);
    }

    #[tokio::test]
    async fn test_fetch_config_failure_reports_reason() {
        let client = FakeClient::failing();
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(UpdateAction::FetchConfig, tx, Some(client));

        assert!(matches!(
            rx.recv().await.unwrap(),
            Message::ConfigLoadFailed { .. }
        ));
    }

    #[tokio::test]
    async fn test_fetch_config_without_client() {
        let (tx, mut rx) = mpsc::channel(4);
        handle_action::<FakeClient>(UpdateAction::FetchConfig, tx, None);

        assert!(matches!(
            rx.recv().await.unwrap(),
            Message::ConfigLoadFailed { .. }
        ));
    }

    #[tokio::test]
    async fn test_fetch_status_sends_update() {
        let client = FakeClient::returning(json!({
            "hashrate": {"total": [1234.7, null, 5678.2]},
            "donate_level": 1
        }));
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(UpdateAction::FetchStatus, tx, Some(client));

        match rx.recv().await.unwrap() {
            Message::StatusUpdated(summary) => {
                assert_eq!(summary.hashrate.total[0], Some(1234.7));
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_status_parses_string_result() {
        // `print_status` resolves to the status JSON as a string
        let client = FakeClient::returning(Value::String(
            r#"{"hashrate":{"total":[1234.7,null,5678.2]},"donate_level":1}"#.to_string(),
        ));
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(UpdateAction::FetchStatus, tx, Some(client));

        match rx.recv().await.unwrap() {
            Message::StatusUpdated(summary) => {
                assert_eq!(summary.hashrate.total[0], Some(1234.7));
                assert_eq!(summary.donate_level, Some(1));
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_status_malformed_result() {
        let client = FakeClient::returning(json!({"unexpected": true}));
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(UpdateAction::FetchStatus, tx, Some(client));

        assert!(matches!(
            rx.recv().await.unwrap(),
            Message::StatusFailed { .. }
        ));
    }

    #[tokio::test]
    async fn test_invoke_fires_command() {
        let client = FakeClient::returning(Value::Null);
        let (tx, _rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::Invoke(BackendCommand::StartMining),
            tx,
            Some(client.clone()),
        );

        tokio::time::sleep(std::time::Duration::from_millis(20)).await;
        assert_eq!(client.sent(), vec![BackendCommand::StartMining]);
    }

    #[tokio::test]
    async fn test_invoke_failure_reports_command_failed() {
        let client = FakeClient::failing();
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::Invoke(BackendCommand::StartMining),
            tx,
            Some(client),
        );

        match rx.recv().await.unwrap() {
            Message::CommandFailed { command, reason } => {
                assert_eq!(command, BackendCommand::StartMining);
                assert!(reason.contains("connection refused"));
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_save_and_reload_saves_before_refetch() {
        let client = FakeClient::returning(json!({"pool": null}));
        let (tx, mut rx) = mpsc::channel(4);

        handle_action(
            UpdateAction::SaveAndReload {
                address: "4xyz".into(),
                folder: "/blocks".into(),
            },
            tx,
            Some(client.clone()),
        );

        assert!(matches!(rx.recv().await.unwrap(), Message::ConfigLoaded(_)));
        assert_eq!(
            client.sent(),
            vec![
                BackendCommand::SaveSettings {
                    address: "4xyz".into(),
                    folder: "/blocks".into(),
                },
                BackendCommand::GetConfig,
            ]
        );
    }
}
