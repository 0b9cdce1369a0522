//! First-run setup wizard
//!
//! A linear step-indexed form gating initial configuration: step 0
//! collects the Monero address, step 1 the blockchain directory. The
//! step index is clamped to `[0, LAST_STEP]`; it can never escape that
//! range through any sequence of transitions.

/// Index of the final step
pub const LAST_STEP: usize = 1;

/// Wizard fields, one per step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardField {
    MoneroAddress,
    BlockchainDir,
}

/// Setup wizard state machine
#[derive(Debug, Clone)]
pub struct SetupWizard {
    step: usize,
    pub monero_address: String,
    pub blockchain_dir: String,
}

impl SetupWizard {
    /// Start at step 0 with the directory prefilled from config
    /// (the backend supplies a platform default).
    pub fn new(prefill_dir: impl Into<String>) -> Self {
        Self {
            step: 0,
            monero_address: String::new(),
            blockchain_dir: prefill_dir.into(),
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    pub fn field(&self) -> WizardField {
        match self.step {
            0 => WizardField::MoneroAddress,
            _ => WizardField::BlockchainDir,
        }
    }

    fn input_mut(&mut self) -> &mut String {
        match self.field() {
            WizardField::MoneroAddress => &mut self.monero_address,
            WizardField::BlockchainDir => &mut self.blockchain_dir,
        }
    }

    pub fn input(&self) -> &str {
        match self.field() {
            WizardField::MoneroAddress => &self.monero_address,
            WizardField::BlockchainDir => &self.blockchain_dir,
        }
    }

    /// The next/finish control is enabled only with non-empty input
    pub fn can_advance(&self) -> bool {
        !self.input().trim().is_empty()
    }

    pub fn can_go_back(&self) -> bool {
        self.step > 0
    }

    /// Whether the finish control replaces the next control
    pub fn is_last_step(&self) -> bool {
        self.step == LAST_STEP
    }

    /// Advance one step. Clamped at the last step; a no-op when the
    /// current input is empty.
    pub fn next(&mut self) {
        if self.can_advance() && self.step < LAST_STEP {
            self.step += 1;
        }
    }

    /// Go back one step. Clamped at step 0.
    pub fn back(&mut self) {
        self.step = self.step.saturating_sub(1);
    }

    /// Finish is only valid on the last step with non-empty input.
    /// Returns the collected (address, folder) pair.
    pub fn finish(&self) -> Option<(String, String)> {
        if self.is_last_step() && self.can_advance() && !self.monero_address.trim().is_empty() {
            Some((self.monero_address.clone(), self.blockchain_dir.clone()))
        } else {
            None
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.input_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.input_mut().pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_wizard() -> SetupWizard {
        let mut wizard = SetupWizard::new("/home/miner/.bitmonero");
        for c in "4xyz".chars() {
            wizard.push_char(c);
        }
        wizard
    }

    #[test]
    fn test_starts_at_step_zero() {
        let wizard = SetupWizard::new("");
        assert_eq!(wizard.step(), 0);
        assert_eq!(wizard.field(), WizardField::MoneroAddress);
        assert!(!wizard.can_go_back());
    }

    #[test]
    fn test_next_requires_input() {
        let mut wizard = SetupWizard::new("");
        wizard.next();
        assert_eq!(wizard.step(), 0);

        wizard.push_char('4');
        wizard.next();
        assert_eq!(wizard.step(), 1);
    }

    #[test]
    fn test_full_walk_then_back() {
        // With N steps, next N-1 times then back once lands on N-2
        let mut wizard = filled_wizard();
        for _ in 0..LAST_STEP {
            wizard.next();
        }
        assert_eq!(wizard.step(), LAST_STEP);

        wizard.back();
        assert_eq!(wizard.step(), LAST_STEP - 1);
    }

    #[test]
    fn test_step_is_clamped_both_ends() {
        let mut wizard = filled_wizard();
        wizard.back();
        wizard.back();
        assert_eq!(wizard.step(), 0);

        for _ in 0..10 {
            wizard.next();
        }
        assert_eq!(wizard.step(), LAST_STEP);
    }

    #[test]
    fn test_finish_only_on_last_step() {
        let mut wizard = filled_wizard();
        assert!(!wizard.is_last_step());
        assert!(wizard.finish().is_none());

        wizard.next();
        assert!(wizard.is_last_step());
        let (address, folder) = wizard.finish().unwrap();
        assert_eq!(address, "4xyz");
        assert_eq!(folder, "/home/miner/.bitmonero");
    }

    #[test]
    fn test_finish_requires_folder() {
        let mut wizard = filled_wizard();
        wizard.next();
        // Clear the prefilled directory
        while !wizard.blockchain_dir.is_empty() {
            wizard.backspace();
        }
        assert!(wizard.finish().is_none());
    }

    #[test]
    fn test_editing_targets_current_step_field() {
        let mut wizard = filled_wizard();
        wizard.next();
        wizard.push_char('!');
        assert!(wizard.blockchain_dir.ends_with('!'));
        assert_eq!(wizard.monero_address, "4xyz");
    }
}
