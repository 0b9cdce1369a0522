//! Core domain types for the control panel

/// Application lifecycle phase
///
/// `Loading` covers the window between startup and the resolved
/// `get_config` round-trip. Navigation is rejected until `Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppPhase {
    /// Waiting for the initial config fetch from the backend
    Loading,
    /// Config loaded, UI fully interactive
    Ready,
    /// Shutting down
    Quitting,
}

/// Top-level pages. Exactly one is active at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Welcome,
    Settings,
    Diagnostics,
    Donate,
}

impl Page {
    /// Stable identifier, matching the page container ids of the
    /// original UI shell
    pub fn id(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Welcome => "welcome",
            Page::Settings => "settings",
            Page::Diagnostics => "diagnostics",
            Page::Donate => "donate",
        }
    }

    /// Capitalized title shown in the header
    pub fn title(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Welcome => "Welcome",
            Page::Settings => "Settings",
            Page::Diagnostics => "Diagnostics",
            Page::Donate => "Donate",
        }
    }

    /// Pages reachable from the navigation drawer
    pub const NAVIGABLE: [Page; 4] = [Page::Home, Page::Settings, Page::Diagnostics, Page::Donate];
}

/// Monitored backend processes, one log panel each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessKind {
    Xmrig,
    P2pool,
    Monerod,
}

impl ProcessKind {
    pub const ALL: [ProcessKind; 3] = [ProcessKind::Xmrig, ProcessKind::P2pool, ProcessKind::Monerod];

    pub fn label(&self) -> &'static str {
        match self {
            ProcessKind::Xmrig => "XMRig",
            ProcessKind::P2pool => "P2Pool",
            ProcessKind::Monerod => "Monerod",
        }
    }

    /// Event channel carrying this process's stdout lines
    pub fn stdout_event(&self) -> &'static str {
        match self {
            ProcessKind::Xmrig => "xmrig-stdout",
            ProcessKind::P2pool => "p2pool-stdout",
            ProcessKind::Monerod => "monerod-stdout",
        }
    }

    pub fn next(&self) -> ProcessKind {
        match self {
            ProcessKind::Xmrig => ProcessKind::P2pool,
            ProcessKind::P2pool => ProcessKind::Monerod,
            ProcessKind::Monerod => ProcessKind::Xmrig,
        }
    }

    pub fn prev(&self) -> ProcessKind {
        match self {
            ProcessKind::Xmrig => ProcessKind::Monerod,
            ProcessKind::P2pool => ProcessKind::Xmrig,
            ProcessKind::Monerod => ProcessKind::P2pool,
        }
    }
}

/// Tabs on the donate page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DonateTab {
    Minetop,
    P2pool,
    Xmrig,
}

impl DonateTab {
    pub const ALL: [DonateTab; 3] = [DonateTab::Minetop, DonateTab::P2pool, DonateTab::Xmrig];

    pub fn label(&self) -> &'static str {
        match self {
            DonateTab::Minetop => "Minetop",
            DonateTab::P2pool => "P2Pool",
            DonateTab::Xmrig => "XMRig",
        }
    }

    pub fn next(&self) -> DonateTab {
        match self {
            DonateTab::Minetop => DonateTab::P2pool,
            DonateTab::P2pool => DonateTab::Xmrig,
            DonateTab::Xmrig => DonateTab::Minetop,
        }
    }

    pub fn prev(&self) -> DonateTab {
        match self {
            DonateTab::Minetop => DonateTab::Xmrig,
            DonateTab::P2pool => DonateTab::Minetop,
            DonateTab::Xmrig => DonateTab::P2pool,
        }
    }
}

/// Local view of the miner's run state, driven by user commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MiningState {
    pub running: bool,
    pub paused: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_titles_are_capitalized() {
        for page in Page::NAVIGABLE {
            let title = page.title();
            let first = title.chars().next().unwrap();
            assert!(first.is_uppercase());
            assert_eq!(title.to_lowercase(), page.id());
        }
    }

    #[test]
    fn test_process_tab_cycle_round_trips() {
        for kind in ProcessKind::ALL {
            assert_eq!(kind.next().prev(), kind);
        }
        assert_eq!(ProcessKind::Monerod.next(), ProcessKind::Xmrig);
    }

    #[test]
    fn test_donate_tab_cycle_round_trips() {
        for tab in DonateTab::ALL {
            assert_eq!(tab.next().prev(), tab);
        }
    }

    #[test]
    fn test_stdout_event_names() {
        assert_eq!(ProcessKind::Xmrig.stdout_event(), "xmrig-stdout");
        assert_eq!(ProcessKind::P2pool.stdout_event(), "p2pool-stdout");
        assert_eq!(ProcessKind::Monerod.stdout_event(), "monerod-stdout");
    }
}
