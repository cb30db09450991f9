//! Simulation configuration.

use crate::combat::Boss;
use crate::core::combat_math::at_or_below_percent;
use crate::encounter::PlayerAction;
use crate::minigames::Difficulty;
use crate::profile::{EquipmentBonuses, PlayerStats};
use serde::Serialize;

/// How the simulated player picks menu actions. Minigame input is always
/// random keys from the autopilot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SimPolicy {
    /// Fight every turn.
    #[default]
    Aggressive,
    /// Fight down to the spare threshold, Act until spareable, then Spare.
    Merciful,
}

impl SimPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "aggressive" => Some(Self::Aggressive),
            "merciful" => Some(Self::Merciful),
            _ => None,
        }
    }

    pub fn choose(&self, boss: &Boss) -> PlayerAction {
        match self {
            SimPolicy::Aggressive => PlayerAction::Fight,
            SimPolicy::Merciful if boss.is_spareable() => PlayerAction::Spare,
            SimPolicy::Merciful
                if at_or_below_percent(boss.health, boss.max_health, boss.spare_threshold_percent) =>
            {
                PlayerAction::Act
            }
            SimPolicy::Merciful => PlayerAction::Fight,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Encounters per boss
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Only simulate this boss id (None = whole catalog)
    pub boss: Option<String>,

    pub policy: SimPolicy,
    pub difficulty: Difficulty,
    pub stats: PlayerStats,
    pub equipment: EquipmentBonuses,

    /// Player turns before a run is abandoned
    pub max_turns: u32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 500,
            seed: None,
            boss: None,
            policy: SimPolicy::Aggressive,
            difficulty: Difficulty::Normal,
            stats: PlayerStats::default(),
            equipment: EquipmentBonuses::default(),
            max_turns: 200,
            verbosity: 1,
        }
    }
}
