//! Main TUI runner - entry point and event loop

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::mpsc;

use crate::app::message::Message;
use crate::app::signals;
use crate::app::state::AppState;
use crate::backend::{
    BackendEvent, BackendProcess, CommandSender, PushEvent, RawMessage, RequestTracker,
};
use crate::common::prelude::*;
use crate::config::Settings;

use super::process::process_message;
use super::{event, render, terminal};

/// Run the TUI application
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    let mut state = AppState::with_log_cap(settings.ui.log_buffer_size);

    // Unified message channel (signal handler, background tasks)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Channel for backend process events
    let (event_tx, event_rx) = mpsc::channel::<BackendEvent>(256);

    // SIGINT/SIGTERM become Message::Quit
    signals::spawn_signal_handler(msg_tx.clone());

    let tracker = Arc::new(RequestTracker::new());
    let mut backend = match BackendProcess::spawn(&settings.backend, event_tx).await {
        Ok(process) => Some(process),
        Err(e) => {
            error!("Failed to spawn backend: {}", e);
            let _ = msg_tx
                .send(Message::Backend(BackendEvent::SpawnFailed {
                    reason: e.to_string(),
                }))
                .await;
            None
        }
    };
    let cmd_sender = backend
        .as_ref()
        .map(|process| process.command_sender(tracker.clone()));

    // Kick off the initial config fetch; its arrival flips the UI
    // out of the loading phase
    super::actions::handle_action(
        crate::app::handler::UpdateAction::FetchConfig,
        msg_tx.clone(),
        cmd_sender.clone(),
    );

    let result = run_loop(
        &mut term,
        &mut state,
        msg_rx,
        event_rx,
        msg_tx,
        cmd_sender,
        &settings,
    );

    // Graceful backend shutdown before the terminal is restored
    if let Some(process) = backend.as_mut() {
        if let Err(e) = process.shutdown().await {
            warn!("Backend shutdown failed: {}", e);
        }
    }
    tracker.cancel_all().await;

    ratatui::restore();
    result
}

/// Main event loop
fn run_loop(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    mut event_rx: mpsc::Receiver<BackendEvent>,
    msg_tx: mpsc::Sender<Message>,
    cmd_sender: Option<CommandSender>,
    settings: &Settings,
) -> Result<()> {
    let poll_interval = Duration::from_secs(settings.status.poll_interval_secs.max(1));
    let mut last_poll = Instant::now();

    while !state.should_quit() {
        // Process external messages (signal handler, background tasks)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, &cmd_sender);
        }

        // Process backend events (non-blocking)
        while let Ok(event) = event_rx.try_recv() {
            if let Some(msg) = classify_event(event, &cmd_sender) {
                process_message(state, msg, &msg_tx, &cmd_sender);
            }
        }

        // Periodic status poll while the UI is ready
        if state.is_ready() && last_poll.elapsed() >= poll_interval {
            last_poll = Instant::now();
            process_message(state, Message::PollStatus, &msg_tx, &cmd_sender);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, &cmd_sender);
        }
    }

    Ok(())
}

/// Sort a raw backend event into the message it becomes
///
/// Responses are routed to the request tracker and consumed here;
/// push events and unparseable lines go to the update function.
fn classify_event(event: BackendEvent, cmd_sender: &Option<CommandSender>) -> Option<Message> {
    let BackendEvent::Stdout(line) = event else {
        return Some(Message::Backend(event));
    };

    match RawMessage::parse(&line) {
        Some(RawMessage::Response { id, result, error }) => {
            let Some(id) = id.as_u64() else {
                warn!("Response with non-numeric id: {}", line);
                return None;
            };
            if let Some(sender) = cmd_sender {
                let tracker = sender.tracker().clone();
                tokio::spawn(async move {
                    if !tracker.handle_response(id, result, error).await {
                        debug!("Unmatched response #{}", id);
                    }
                });
            }
            None
        }

        Some(raw @ RawMessage::Event { .. }) => match PushEvent::from_raw(&raw) {
            Some(push) => Some(Message::Push(push)),
            None => {
                debug!("Ignoring unknown event: {}", raw.summary());
                None
            }
        },

        None => Some(Message::Backend(BackendEvent::Stdout(line))),
    }
}
