//! Integration tests for the backend bridge
//!
//! Uses `sh` and `cat` as stand-in backends to exercise the real
//! process plumbing: spawn, stdout/stdin streaming, and wire parsing.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

use minetop::backend::{
    BackendCommand, BackendEvent, BackendProcess, PushEvent, RawMessage,
};
use minetop::config::BackendSettings;
use minetop::core::ProcessKind;

fn shell_backend(script: &str) -> BackendSettings {
    BackendSettings {
        command: "sh".to_string(),
        args: vec!["-c".to_string(), script.to_string()],
    }
}

/// Wait for the first stdout line that parses as a typed push event
async fn next_push_event(rx: &mut mpsc::Receiver<BackendEvent>) -> PushEvent {
    let deadline = Duration::from_secs(5);
    timeout(deadline, async {
        loop {
            match rx.recv().await.expect("event channel closed") {
                BackendEvent::Stdout(line) => {
                    if let Some(push) = RawMessage::parse(&line).and_then(|raw| PushEvent::from_raw(&raw)) {
                        return push;
                    }
                }
                _ => continue,
            }
        }
    })
    .await
    .expect("no push event within deadline")
}

#[tokio::test]
async fn stdout_lines_become_push_events() {
    let settings =
        shell_backend(r#"echo '{"event":"xmrig-stdout","payload":"accepted (1/0) diff 100001"}'"#);
    let (tx, mut rx) = mpsc::channel(16);

    let _process = BackendProcess::spawn(&settings, tx).await.unwrap();

    let push = next_push_event(&mut rx).await;
    assert_eq!(
        push,
        PushEvent::ProcessLog {
            process: ProcessKind::Xmrig,
            line: "accepted (1/0) diff 100001".to_string(),
        }
    );
}

#[tokio::test]
async fn process_exit_is_reported() {
    let settings = shell_backend("exit 0");
    let (tx, mut rx) = mpsc::channel(16);

    let _process = BackendProcess::spawn(&settings, tx).await.unwrap();

    let exited = timeout(Duration::from_secs(5), async {
        loop {
            if let BackendEvent::Exited { .. } = rx.recv().await.expect("event channel closed") {
                return true;
            }
        }
    })
    .await
    .expect("no exit event within deadline");
    assert!(exited);
}

#[tokio::test]
async fn missing_backend_is_a_spawn_error() {
    let settings = BackendSettings {
        command: "definitely-not-a-real-backend".to_string(),
        args: Vec::new(),
    };
    let (tx, _rx) = mpsc::channel(16);

    let Err(err) = BackendProcess::spawn(&settings, tx).await else {
        panic!("spawn succeeded for a missing binary");
    };
    assert!(err.is_fatal());
    assert!(err.to_string().contains("definitely-not-a-real-backend"));
}

#[tokio::test]
async fn command_lines_reach_the_backend_stdin() {
    // cat echoes our request lines back as stdout
    let settings = BackendSettings {
        command: "cat".to_string(),
        args: Vec::new(),
    };
    let (tx, mut rx) = mpsc::channel(16);

    let mut process = BackendProcess::spawn(&settings, tx).await.unwrap();
    let tracker = std::sync::Arc::new(minetop::backend::RequestTracker::new());
    let sender = process.command_sender(tracker);

    sender
        .send_fire_and_forget(BackendCommand::StartMining)
        .await
        .unwrap();

    let echoed = timeout(Duration::from_secs(5), async {
        loop {
            if let BackendEvent::Stdout(line) = rx.recv().await.expect("event channel closed") {
                return line;
            }
        }
    })
    .await
    .expect("no echoed line within deadline");

    assert!(echoed.contains(r#""command":"start_mining""#));
    process.shutdown().await.unwrap();
}
