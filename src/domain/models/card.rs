#[cfg(test)]
#[path = "card_test.rs"]
mod tests;

use std::mem;

/// Per-record display state. Renaming carries the transient input so a
/// card can never be renaming and confirming a delete at the same time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CardState {
    #[default]
    Viewing,
    Renaming {
        input: String,
    },
    ConfirmingDelete,
}

/// UI state machine for one session card. Not persisted. The detail pane
/// expansion is orthogonal to the mode and toggles freely.
#[derive(Clone, Debug, Default)]
pub struct SessionCard {
    state: CardState,
    pub expanded: bool,
}

impl SessionCard {
    pub fn new() -> SessionCard {
        return SessionCard::default();
    }

    pub fn state(&self) -> &CardState {
        return &self.state;
    }

    /// Enters rename mode seeded with the stored name. Ignored unless the
    /// card is in plain viewing mode.
    pub fn begin_rename(&mut self, current_name: &str) {
        if self.state == CardState::Viewing {
            self.state = CardState::Renaming {
                input: current_name.to_string(),
            };
        }
    }

    pub fn set_input(&mut self, text: &str) {
        if let CardState::Renaming { input } = &mut self.state {
            *input = text.to_string();
        }
    }

    /// Leaves rename mode and hands the entered name to the caller, which
    /// decides whether to submit it. Returns `None` when not renaming.
    pub fn confirm_rename(&mut self) -> Option<String> {
        if !matches!(self.state, CardState::Renaming { .. }) {
            return None;
        }

        if let CardState::Renaming { input } = mem::take(&mut self.state) {
            return Some(input);
        }

        return None;
    }

    /// Discards the transient input without submitting anything.
    pub fn cancel_rename(&mut self) {
        if matches!(self.state, CardState::Renaming { .. }) {
            self.state = CardState::Viewing;
        }
    }

    pub fn request_delete(&mut self) {
        if self.state == CardState::Viewing {
            self.state = CardState::ConfirmingDelete;
        }
    }

    pub fn cancel_delete(&mut self) {
        if self.state == CardState::ConfirmingDelete {
            self.state = CardState::Viewing;
        }
    }

    /// Returns true when the delete was armed. The card drops back to
    /// viewing either way; a failed removal simply leaves the record
    /// visible again.
    pub fn confirm_delete(&mut self) -> bool {
        if self.state != CardState::ConfirmingDelete {
            return false;
        }

        self.state = CardState::Viewing;
        return true;
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }
}
