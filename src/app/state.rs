//! Application state (Model in TEA pattern)

use std::time::Instant;

use crate::core::{
    AppPhase, DonateTab, HashrateDisplay, LogBuffer, MinerConfig, MiningState, Page, ProcessKind,
};
use crate::tui::widgets::LogViewState;

use super::settings_form::SettingsForm;
use super::wizard::SetupWizard;

/// Navigation drawer (the "hamburger" side menu of the original shell)
#[derive(Debug, Default)]
pub struct DrawerState {
    pub open: bool,
    pub selected: usize,
}

impl DrawerState {
    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self) {
        self.selected = (self.selected + 1).min(Page::NAVIGABLE.len() - 1);
    }

    pub fn selected_page(&self) -> Page {
        Page::NAVIGABLE[self.selected.min(Page::NAVIGABLE.len() - 1)]
    }
}

/// One log panel per monitored process
#[derive(Debug)]
pub struct ProcessPanel {
    pub buffer: LogBuffer,
    pub view: LogViewState,
}

impl ProcessPanel {
    fn new(cap: usize) -> Self {
        Self {
            buffer: LogBuffer::new(cap),
            view: LogViewState::new(),
        }
    }
}

/// Transient inline notice shown in the status bar
#[derive(Debug)]
pub struct Notice {
    pub text: String,
    pub raised_at: Instant,
}

/// How long a notice stays visible
pub const NOTICE_TTL_SECS: u64 = 5;

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current application phase; navigation is rejected while `Loading`
    pub phase: AppPhase,

    /// Exactly one top-level page is active at a time
    pub active_page: Page,

    /// Navigation drawer
    pub drawer: DrawerState,

    /// Mining config, populated by the resolved `get_config` command
    pub config: Option<MinerConfig>,

    /// Local view of the miner run state
    pub mining: MiningState,

    /// Active tab on the diagnostics page
    pub diagnostics_tab: ProcessKind,

    /// Active tab on the donate page
    pub donate_tab: DonateTab,

    /// Per-process log panels
    pub xmrig: ProcessPanel,
    pub p2pool: ProcessPanel,
    pub monerod: ProcessPanel,

    /// Rendered hashrate / donation figures
    pub hashrate: HashrateDisplay,

    /// Setup wizard, present only while setup is incomplete
    pub wizard: Option<SetupWizard>,

    /// Settings page form
    pub settings_form: SettingsForm,

    /// Transient status-bar notice
    pub notice: Option<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_log_cap(crate::core::DEFAULT_LOG_CAP)
    }

    pub fn with_log_cap(cap: usize) -> Self {
        Self {
            phase: AppPhase::Loading,
            active_page: Page::Home,
            drawer: DrawerState::default(),
            config: None,
            mining: MiningState::default(),
            diagnostics_tab: ProcessKind::Xmrig,
            donate_tab: DonateTab::Minetop,
            xmrig: ProcessPanel::new(cap),
            p2pool: ProcessPanel::new(cap),
            monerod: ProcessPanel::new(cap),
            hashrate: HashrateDisplay::default(),
            wizard: None,
            settings_form: SettingsForm::default(),
            notice: None,
        }
    }

    pub fn panel(&self, process: ProcessKind) -> &ProcessPanel {
        match process {
            ProcessKind::Xmrig => &self.xmrig,
            ProcessKind::P2pool => &self.p2pool,
            ProcessKind::Monerod => &self.monerod,
        }
    }

    pub fn panel_mut(&mut self, process: ProcessKind) -> &mut ProcessPanel {
        match process {
            ProcessKind::Xmrig => &mut self.xmrig,
            ProcessKind::P2pool => &mut self.p2pool,
            ProcessKind::Monerod => &mut self.monerod,
        }
    }

    /// True once the initial config round-trip resolved
    pub fn is_ready(&self) -> bool {
        self.phase == AppPhase::Ready
    }

    /// Setup gate: complete iff the loaded config says so
    pub fn setup_complete(&self) -> bool {
        self.config
            .as_ref()
            .map(MinerConfig::setup_complete)
            .unwrap_or(false)
    }

    /// Raise a transient inline notice
    pub fn raise_notice(&mut self, text: impl Into<String>) {
        self.notice = Some(Notice {
            text: text.into(),
            raised_at: Instant::now(),
        });
    }

    /// Drop the notice once its TTL passed; called on ticks
    pub fn expire_notice(&mut self) {
        if let Some(notice) = &self.notice {
            if notice.raised_at.elapsed().as_secs() >= NOTICE_TTL_SECS {
                self.notice = None;
            }
        }
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
