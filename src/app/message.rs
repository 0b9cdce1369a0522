//! Message types for the application (TEA pattern)

use crossterm::event::KeyEvent;

use crate::backend::{BackendCommand, BackendEvent, PushEvent};
use crate::core::{DonateTab, MinerConfig, Page, ProcessKind, StatusSummary};

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(KeyEvent),

    /// Raw event from the backend process plumbing
    Backend(BackendEvent),

    /// Typed push event from the backend bridge
    Push(PushEvent),

    /// A command could not be delivered to the backend
    CommandFailed {
        command: BackendCommand,
        reason: String,
    },

    /// Tick event for periodic updates
    Tick,

    /// Request to quit the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Navigate to a top-level page
    Navigate(Page),
    /// Toggle the navigation drawer
    ToggleDrawer,
    /// Move drawer selection up
    DrawerUp,
    /// Move drawer selection down
    DrawerDown,
    /// Navigate to the drawer's selected page
    DrawerSelect,

    // ─────────────────────────────────────────────────────────
    // Tab Messages
    // ─────────────────────────────────────────────────────────
    /// Select a diagnostics process tab
    SelectDiagnosticsTab(ProcessKind),
    /// Select a donate address tab
    SelectDonateTab(DonateTab),

    // ─────────────────────────────────────────────────────────
    // Log View Scroll Messages
    // ─────────────────────────────────────────────────────────
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Mining Control Messages
    // ─────────────────────────────────────────────────────────
    StartMining,
    PauseMining,
    ResumeMining,

    // ─────────────────────────────────────────────────────────
    // Status Messages
    // ─────────────────────────────────────────────────────────
    /// Time to invoke `print_status`
    PollStatus,
    /// A status payload parsed successfully
    StatusUpdated(StatusSummary),
    /// A status cycle failed; display keeps its previous values
    StatusFailed { reason: String },

    // ─────────────────────────────────────────────────────────
    // Config Messages
    // ─────────────────────────────────────────────────────────
    /// The `get_config` command resolved (one-shot readiness signal
    /// on first arrival)
    ConfigLoaded(MinerConfig),
    /// Config fetch failed
    ConfigLoadFailed { reason: String },

    // ─────────────────────────────────────────────────────────
    // Wizard Messages
    // ─────────────────────────────────────────────────────────
    WizardNext,
    WizardBack,
    WizardInput(char),
    WizardBackspace,
    WizardFinish,

    // ─────────────────────────────────────────────────────────
    // Settings Form Messages
    // ─────────────────────────────────────────────────────────
    /// Switch focus between form fields
    SettingsFocusNext,
    /// Toggle edit mode on the focused field
    SettingsToggleEdit,
    SettingsInput(char),
    SettingsBackspace,
    /// Ask the backend to open its folder picker
    SettingsBrowseFolder,
    /// Save the current field values
    SettingsSave,
}
