//! Settings page form state
//!
//! Two editable fields mirroring `pool.Local`, a save control that only
//! enables after an edit or a folder-picker completion, and a transient
//! "restart required" notice after saving.

/// Which field currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    MoneroAddress,
    BlockchainDir,
}

impl SettingsField {
    pub fn next(&self) -> SettingsField {
        match self {
            SettingsField::MoneroAddress => SettingsField::BlockchainDir,
            SettingsField::BlockchainDir => SettingsField::MoneroAddress,
        }
    }
}

/// Editable settings form
#[derive(Debug, Clone)]
pub struct SettingsForm {
    pub monero_address: String,
    pub blockchain_dir: String,
    pub focus: SettingsField,
    /// Whether keystrokes currently edit the focused field
    pub editing: bool,
    /// Save is enabled only after an edit or folder selection
    pub save_enabled: bool,
    /// Whether the form has been populated from config yet
    pub loaded: bool,
    /// Show the "changes require restart" notice
    pub restart_notice: bool,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            monero_address: String::new(),
            blockchain_dir: String::new(),
            focus: SettingsField::MoneroAddress,
            editing: false,
            save_enabled: false,
            loaded: false,
            restart_notice: false,
        }
    }
}

impl SettingsForm {
    /// Populate fields from the loaded config. Does not touch the
    /// dirty/save state: a reload after saving keeps save disabled.
    pub fn load(&mut self, monero_address: &str, blockchain_dir: &str) {
        self.monero_address = monero_address.to_string();
        self.blockchain_dir = blockchain_dir.to_string();
        self.loaded = true;
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            SettingsField::MoneroAddress => &mut self.monero_address,
            SettingsField::BlockchainDir => &mut self.blockchain_dir,
        }
    }

    /// Edit events enable saving
    pub fn push_char(&mut self, c: char) {
        self.focused_mut().push(c);
        self.save_enabled = true;
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
        self.save_enabled = true;
    }

    /// A completed folder pick populates the directory field and
    /// enables saving, independent of keyboard focus.
    pub fn set_folder(&mut self, path: &str) {
        self.blockchain_dir = path.to_string();
        self.save_enabled = true;
    }

    /// Current field values for `save_settings`, if saving is enabled.
    /// Disables the save control again and raises the restart notice.
    pub fn take_save(&mut self) -> Option<(String, String)> {
        if !self.save_enabled {
            return None;
        }
        self.save_enabled = false;
        self.restart_notice = true;
        Some((self.monero_address.clone(), self.blockchain_dir.clone()))
    }
}
