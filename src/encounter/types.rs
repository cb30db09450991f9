use crate::console::Key;
use crate::minigames::HitGrade;
use crate::outcome::Outcome;

/// Controller state. `Finished` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterState {
    Intro,
    PlayerTurn,
    BossTurn,
    Finished(Outcome),
}

impl EncounterState {
    pub fn is_finished(&self) -> bool {
        matches!(self, EncounterState::Finished(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerAction {
    Fight,
    Act,
    Spare,
    Flee,
}

impl PlayerAction {
    pub const ALL: [PlayerAction; 4] = [
        PlayerAction::Fight,
        PlayerAction::Act,
        PlayerAction::Spare,
        PlayerAction::Flee,
    ];

    /// Menu keys: the option number or its first letter (`r` for run).
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::Char(c) => match c.to_ascii_lowercase() {
                '1' | 'f' => Some(PlayerAction::Fight),
                '2' | 'a' => Some(PlayerAction::Act),
                '3' | 's' => Some(PlayerAction::Spare),
                '4' | 'r' => Some(PlayerAction::Flee),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlayerAction::Fight => "Fight",
            PlayerAction::Act => "Act",
            PlayerAction::Spare => "Spare",
            PlayerAction::Flee => "Flee",
        }
    }
}

/// What a player action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    Fight { grade: HitGrade, damage: u32 },
    Act { mercy_level: u32, spareable: bool },
    SpareRejected,
    Spared,
    FleeFailed,
    Fled,
}

impl ActionResult {
    /// A rejected spare leaves the player on the menu; everything else
    /// hands the turn over (or ends the encounter).
    pub fn consumes_turn(&self) -> bool {
        !matches!(self, ActionResult::SpareRejected)
    }
}

/// One boss attack as it played out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BossTurnReport {
    pub attack: &'static str,
    pub raw_damage: u32,
    pub damage_taken: u32,
}
