//! Update function - handles state transitions (TEA pattern)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::backend::{BackendCommand, BackendEvent, PushEvent};
use crate::common::prelude::*;
use crate::core::{AppPhase, Page, ProcessKind, StatusSummary};

use super::message::Message;
use super::state::AppState;
use super::wizard::SetupWizard;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Issue a fire-and-forget backend command
    Invoke(BackendCommand),

    /// Invoke `get_config` and feed the result back as `ConfigLoaded`
    FetchConfig,

    /// Invoke `print_status` and feed the result back as `StatusUpdated`
    FetchStatus,

    /// Wizard finish: `save_settings` followed by a config refetch,
    /// in that order
    SaveAndReload { address: String, folder: String },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}

/// Process a message and update state
///
/// Runs to completion before the next message; the event loop owns the
/// state, so there is exactly one writer.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.expire_notice();
            UpdateResult::none()
        }

        Message::Backend(event) => handle_backend_event(state, event),
        Message::Push(event) => handle_push_event(state, event),

        // ─────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────
        Message::Navigate(page) => {
            navigate(state, page);
            UpdateResult::none()
        }

        Message::ToggleDrawer => {
            state.drawer.open = !state.drawer.open;
            UpdateResult::none()
        }

        Message::DrawerUp => {
            state.drawer.up();
            UpdateResult::none()
        }

        Message::DrawerDown => {
            state.drawer.down();
            UpdateResult::none()
        }

        Message::DrawerSelect => {
            let page = state.drawer.selected_page();
            UpdateResult::message(Message::Navigate(page))
        }

        // ─────────────────────────────────────────────────────
        // Tabs
        // ─────────────────────────────────────────────────────
        Message::SelectDiagnosticsTab(tab) => {
            state.diagnostics_tab = tab;
            // Catch-up render happens from the buffer; jump to the tail
            state.panel_mut(tab).view.scroll_to_bottom();
            UpdateResult::none()
        }

        Message::SelectDonateTab(tab) => {
            state.donate_tab = tab;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────
        // Log view scrolling (visible diagnostics panel)
        // ─────────────────────────────────────────────────────
        Message::ScrollUp => {
            let tab = state.diagnostics_tab;
            state.panel_mut(tab).view.scroll_up(1);
            UpdateResult::none()
        }

        Message::ScrollDown => {
            let tab = state.diagnostics_tab;
            state.panel_mut(tab).view.scroll_down(1);
            UpdateResult::none()
        }

        Message::ScrollToTop => {
            let tab = state.diagnostics_tab;
            state.panel_mut(tab).view.scroll_to_top();
            UpdateResult::none()
        }

        Message::ScrollToBottom => {
            let tab = state.diagnostics_tab;
            state.panel_mut(tab).view.scroll_to_bottom();
            UpdateResult::none()
        }

        Message::PageUp => {
            let tab = state.diagnostics_tab;
            state.panel_mut(tab).view.page_up();
            UpdateResult::none()
        }

        Message::PageDown => {
            let tab = state.diagnostics_tab;
            state.panel_mut(tab).view.page_down();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────
        // Mining controls
        // ─────────────────────────────────────────────────────
        Message::StartMining => {
            if !state.is_ready() || !state.setup_complete() {
                state.raise_notice("Finish setup before mining");
                return UpdateResult::none();
            }
            state.mining.running = true;
            state.mining.paused = false;
            UpdateResult::action(UpdateAction::Invoke(BackendCommand::StartMining))
        }

        Message::PauseMining => {
            state.mining.paused = true;
            UpdateResult::action(UpdateAction::Invoke(BackendCommand::PauseMining))
        }

        Message::ResumeMining => {
            state.mining.paused = false;
            UpdateResult::action(UpdateAction::Invoke(BackendCommand::ResumeMining))
        }

        Message::CommandFailed { command, reason } => {
            warn!("Command '{}' rejected: {}", command.description(), reason);
            // Undo the optimistic mining-state flip for the failed command
            match command {
                BackendCommand::StartMining => state.mining = Default::default(),
                BackendCommand::PauseMining => state.mining.paused = false,
                BackendCommand::ResumeMining => state.mining.paused = true,
                _ => {}
            }
            state.raise_notice(format!("Could not {}: {}", command.description(), reason));
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────
        // Status
        // ─────────────────────────────────────────────────────
        Message::PollStatus => {
            if state.is_ready() {
                UpdateResult::action(UpdateAction::FetchStatus)
            } else {
                UpdateResult::none()
            }
        }

        Message::StatusUpdated(summary) => {
            state.hashrate.apply(&summary);
            UpdateResult::none()
        }

        Message::StatusFailed { reason } => {
            // Skipped cycle: keep the previous display, poll again later
            warn!("Status update skipped: {}", reason);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────
        // Config
        // ─────────────────────────────────────────────────────
        Message::ConfigLoaded(config) => {
            handle_config_loaded(state, config);
            UpdateResult::none()
        }

        Message::ConfigLoadFailed { reason } => {
            warn!("Config fetch failed: {}", reason);
            state.raise_notice("Backend unavailable; retrying is up to you (R)");
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────
        // Wizard
        // ─────────────────────────────────────────────────────
        Message::WizardNext => {
            if let Some(wizard) = &mut state.wizard {
                wizard.next();
            }
            UpdateResult::none()
        }

        Message::WizardBack => {
            if let Some(wizard) = &mut state.wizard {
                wizard.back();
            }
            UpdateResult::none()
        }

        Message::WizardInput(c) => {
            if let Some(wizard) = &mut state.wizard {
                wizard.push_char(c);
            }
            UpdateResult::none()
        }

        Message::WizardBackspace => {
            if let Some(wizard) = &mut state.wizard {
                wizard.backspace();
            }
            UpdateResult::none()
        }

        Message::WizardFinish => {
            let Some((address, folder)) = state.wizard.as_ref().and_then(SetupWizard::finish)
            else {
                return UpdateResult::none();
            };
            // Setup collected: leave the wizard, go home, persist and
            // refetch so the settings form reflects the saved values.
            state.wizard = None;
            state.active_page = Page::Home;
            UpdateResult::action(UpdateAction::SaveAndReload { address, folder })
        }

        // ─────────────────────────────────────────────────────
        // Settings form
        // ─────────────────────────────────────────────────────
        Message::SettingsFocusNext => {
            state.settings_form.focus = state.settings_form.focus.next();
            UpdateResult::none()
        }

        Message::SettingsToggleEdit => {
            state.settings_form.editing = !state.settings_form.editing;
            UpdateResult::none()
        }

        Message::SettingsInput(c) => {
            state.settings_form.push_char(c);
            UpdateResult::none()
        }

        Message::SettingsBackspace => {
            state.settings_form.backspace();
            UpdateResult::none()
        }

        Message::SettingsBrowseFolder => {
            // The chosen path arrives later as a folder-selected event;
            // saving stays disabled until it does
            UpdateResult::action(UpdateAction::Invoke(BackendCommand::SelectBlockchainFolder))
        }

        Message::SettingsSave => {
            let Some((address, folder)) = state.settings_form.take_save() else {
                return UpdateResult::none();
            };
            state.raise_notice("Saved; changes apply after restarting mining");
            UpdateResult::action(UpdateAction::Invoke(BackendCommand::SaveSettings {
                address,
                folder,
            }))
        }
    }
}

/// Show the requested page, closing the drawer.
///
/// Rejected while the config fetch is still pending. While setup is
/// incomplete the home page resolves to the wizard.
fn navigate(state: &mut AppState, page: Page) {
    if !state.is_ready() {
        debug!("Navigation to {:?} rejected: still loading", page);
        return;
    }

    let target = if page == Page::Home && state.wizard.is_some() {
        Page::Welcome
    } else {
        page
    };

    debug!("page -> {}", target.id());
    state.active_page = target;
    state.drawer.open = false;
}

/// Apply a resolved `get_config` response.
///
/// The first arrival is the readiness signal: it decides between the
/// home page and the setup wizard.
fn handle_config_loaded(state: &mut AppState, config: crate::core::MinerConfig) {
    if let Some((address, dir)) = config.local_pool() {
        state.settings_form.load(address, dir);
    }

    let first_load = state.config.is_none();
    state.config = Some(config);

    if first_load && state.phase == AppPhase::Loading {
        state.phase = AppPhase::Ready;
        if state.setup_complete() {
            state.active_page = Page::Home;
        } else {
            let prefill = state
                .config
                .as_ref()
                .and_then(|c| c.local_pool())
                .map(|(_, dir)| dir.to_string())
                .unwrap_or_default();
            state.wizard = Some(SetupWizard::new(prefill));
            state.active_page = Page::Welcome;
        }
        info!("Config loaded; setup_complete={}", state.setup_complete());
    }
}

fn handle_backend_event(state: &mut AppState, event: BackendEvent) -> UpdateResult {
    match event {
        BackendEvent::Stdout(line) => {
            // Lines that parsed as responses/events never reach here
            debug!("Unrecognized backend output: {}", line);
            UpdateResult::none()
        }
        BackendEvent::Stderr(line) => {
            warn!("backend stderr: {}", line);
            UpdateResult::none()
        }
        BackendEvent::Exited { code } => {
            error!("Backend exited with code {:?}", code);
            state.mining = Default::default();
            state.raise_notice("Backend exited; mining controls unavailable");
            UpdateResult::none()
        }
        BackendEvent::SpawnFailed { reason } => {
            error!("Backend spawn failed: {}", reason);
            state.raise_notice(format!("Backend unavailable: {}", reason));
            UpdateResult::none()
        }
    }
}

fn handle_push_event(state: &mut AppState, event: PushEvent) -> UpdateResult {
    match event {
        PushEvent::ProcessLog { process, line } => {
            // Buffer regardless of visibility; the render rebuilds the
            // visible panel from the buffer every frame.
            state.panel_mut(process).buffer.push(line);
            UpdateResult::none()
        }

        PushEvent::Status { raw } => match StatusSummary::parse(&raw) {
            Ok(summary) => UpdateResult::message(Message::StatusUpdated(summary)),
            Err(e) => UpdateResult::message(Message::StatusFailed {
                reason: e.to_string(),
            }),
        },

        PushEvent::FolderSelected { path } => {
            state.settings_form.set_folder(&path);
            UpdateResult::none()
        }
    }
}

/// Translate a key event into a message, honoring modal contexts:
/// the open drawer and text-entry fields capture keys first.
pub fn handle_key(state: &AppState, key: KeyEvent) -> Option<Message> {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Message::Quit);
    }

    if state.drawer.open {
        return match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Message::DrawerUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Message::DrawerDown),
            KeyCode::Enter => Some(Message::DrawerSelect),
            KeyCode::Esc | KeyCode::Char('m') => Some(Message::ToggleDrawer),
            _ => None,
        };
    }

    // Wizard page owns the keyboard while setup runs
    if state.active_page == Page::Welcome {
        if let Some(wizard) = &state.wizard {
            return match key.code {
                KeyCode::Enter if wizard.is_last_step() => Some(Message::WizardFinish),
                KeyCode::Enter => Some(Message::WizardNext),
                KeyCode::Esc => Some(Message::WizardBack),
                KeyCode::Backspace => Some(Message::WizardBackspace),
                KeyCode::Char(c) => Some(Message::WizardInput(c)),
                _ => None,
            };
        }
    }

    // Text entry on the settings page captures characters
    if state.active_page == Page::Settings && state.settings_form.editing {
        return match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(Message::SettingsToggleEdit),
            KeyCode::Backspace => Some(Message::SettingsBackspace),
            KeyCode::Char(c) => Some(Message::SettingsInput(c)),
            _ => None,
        };
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') => return Some(Message::Quit),
        KeyCode::Char('m') => return Some(Message::ToggleDrawer),
        _ => {}
    }

    // Page-local keys
    match state.active_page {
        Page::Home => match key.code {
            KeyCode::Char('s') => Some(Message::StartMining),
            KeyCode::Char('p') => Some(Message::PauseMining),
            KeyCode::Char('r') => Some(Message::ResumeMining),
            _ => None,
        },

        Page::Settings => match key.code {
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => Some(Message::SettingsFocusNext),
            KeyCode::Enter => Some(Message::SettingsToggleEdit),
            KeyCode::Char('b') => Some(Message::SettingsBrowseFolder),
            KeyCode::Char('s') => Some(Message::SettingsSave),
            _ => None,
        },

        Page::Diagnostics => match key.code {
            KeyCode::Tab => Some(Message::SelectDiagnosticsTab(state.diagnostics_tab.next())),
            KeyCode::BackTab => Some(Message::SelectDiagnosticsTab(state.diagnostics_tab.prev())),
            KeyCode::Char('1') => Some(Message::SelectDiagnosticsTab(ProcessKind::Xmrig)),
            KeyCode::Char('2') => Some(Message::SelectDiagnosticsTab(ProcessKind::P2pool)),
            KeyCode::Char('3') => Some(Message::SelectDiagnosticsTab(ProcessKind::Monerod)),
            KeyCode::Up | KeyCode::Char('k') => Some(Message::ScrollUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Message::ScrollDown),
            KeyCode::PageUp => Some(Message::PageUp),
            KeyCode::PageDown => Some(Message::PageDown),
            KeyCode::Char('g') => Some(Message::ScrollToTop),
            KeyCode::Char('G') => Some(Message::ScrollToBottom),
            _ => None,
        },

        Page::Donate => match key.code {
            KeyCode::Tab => Some(Message::SelectDonateTab(state.donate_tab.next())),
            KeyCode::BackTab => Some(Message::SelectDonateTab(state.donate_tab.prev())),
            _ => None,
        },

        Page::Welcome => None,
    }
}
