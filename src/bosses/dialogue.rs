//! Boss dialogue keyed by narrative state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DialogueState {
    #[default]
    Intro,
    Default,
    Hit,
    LowHealth,
    Merciful,
    SpareReady,
    Spared,
    Defeated,
}

impl DialogueState {
    pub const ALL: [DialogueState; 8] = [
        DialogueState::Intro,
        DialogueState::Default,
        DialogueState::Hit,
        DialogueState::LowHealth,
        DialogueState::Merciful,
        DialogueState::SpareReady,
        DialogueState::Spared,
        DialogueState::Defeated,
    ];

    pub fn is_terminal(&self) -> bool {
        matches!(self, DialogueState::Spared | DialogueState::Defeated)
    }
}

/// One line per state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BossDialogue {
    pub intro: &'static str,
    pub default: &'static str,
    pub hit: &'static str,
    pub low_health: &'static str,
    pub merciful: &'static str,
    pub spare_ready: &'static str,
    pub spared: &'static str,
    pub defeated: &'static str,
}

impl BossDialogue {
    pub fn line(&self, state: DialogueState) -> &'static str {
        match state {
            DialogueState::Intro => self.intro,
            DialogueState::Default => self.default,
            DialogueState::Hit => self.hit,
            DialogueState::LowHealth => self.low_health,
            DialogueState::Merciful => self.merciful,
            DialogueState::SpareReady => self.spare_ready,
            DialogueState::Spared => self.spared,
            DialogueState::Defeated => self.defeated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_per_state() {
        let bank = BossDialogue {
            intro: "a",
            default: "b",
            hit: "c",
            low_health: "d",
            merciful: "e",
            spare_ready: "f",
            spared: "g",
            defeated: "h",
        };
        let lines: Vec<&str> = DialogueState::ALL.iter().map(|s| bank.line(*s)).collect();
        assert_eq!(lines, vec!["a", "b", "c", "d", "e", "f", "g", "h"]);
    }

    #[test]
    fn test_terminal_states() {
        assert!(DialogueState::Spared.is_terminal());
        assert!(DialogueState::Defeated.is_terminal());
        assert!(!DialogueState::Merciful.is_terminal());
    }
}
