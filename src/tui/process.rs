//! Message processing: update dispatch with follow-ups and actions

use tokio::sync::mpsc;

use crate::app::handler::update;
use crate::app::message::Message;
use crate::app::state::AppState;
use crate::backend::CommandSender;

use super::actions;

/// Feed one message through the update function, chasing follow-up
/// messages and dispatching any actions it produces
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    cmd_sender: &Option<CommandSender>,
) {
    let mut next = Some(message);

    while let Some(msg) = next.take() {
        let result = update(state, msg);

        if let Some(action) = result.action {
            actions::handle_action(action, msg_tx.clone(), cmd_sender.clone());
        }

        next = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::PushEvent;
    use crate::core::{MinerConfig, Page};

    fn ready_state() -> AppState {
        let mut state = AppState::new();
        let config: MinerConfig = serde_json::from_str(
            r#"{"pool":{"Local":{"monero_address":"4xyz","blockchain_dir":"/blocks"}}}"#,
        )
        .unwrap();
        let (tx, _rx) = mpsc::channel(8);
        process_message(&mut state, Message::ConfigLoaded(config), &tx, &None);
        state
    }

    #[tokio::test]
    async fn test_follow_up_messages_are_chased() {
        let mut state = ready_state();
        let (tx, _rx) = mpsc::channel(8);

        // Status push resolves through its follow-up in one call
        process_message(
            &mut state,
            Message::Push(PushEvent::Status {
                raw: r#"{"hashrate":{"total":[100.0,null,null]}}"#.into(),
            }),
            &tx,
            &None,
        );

        assert_eq!(state.hashrate.h10s, "100 H/s");
    }

    #[tokio::test]
    async fn test_drawer_select_resolves_to_navigation() {
        let mut state = ready_state();
        let (tx, _rx) = mpsc::channel(8);

        process_message(&mut state, Message::ToggleDrawer, &tx, &None);
        process_message(&mut state, Message::DrawerDown, &tx, &None);
        process_message(&mut state, Message::DrawerSelect, &tx, &None);

        assert_eq!(state.active_page, Page::Settings);
        assert!(!state.drawer.open);
    }
}
