//! Skill-check minigames that decide how much damage an attack deals.
//!
//! Five archetypes (dodge, reaction, recall, rhythm, memory) share one
//! contract: [`Minigame::play`] runs the challenge against the encounter's
//! console and returns a damage amount in `[0, max_damage()]`. Bad input and
//! timeouts are ordinary outcomes that resolve to the archetype's worst case.
//! The Fight action's timing bar lives here too.

#![allow(unused_imports)]

pub mod dodge;
pub mod memory;
pub mod reaction;
pub mod recall;
pub mod rhythm;
pub mod timing_bar;

pub use dodge::DodgeParams;
pub use memory::{GridCell, MemoryParams};
pub use reaction::{ReactionInput, ReactionParams};
pub use recall::{RecallParams, ARROW_ALPHABET, RUNE_ALPHABET};
pub use rhythm::RhythmParams;
pub use timing_bar::{run_timing_bar, HitGrade};

use crate::console::Console;
use crate::core::constants::{PATIENCE_WINDOW_BONUS, PATIENCE_WINDOW_CAP};
use crate::encounter::EncounterContext;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Game difficulty. Scales every gameplay timing window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(Difficulty::Normal)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Normal => "Normal",
            Self::Hard => "Hard",
        }
    }

    /// Multiplier applied to display, response and mash windows.
    pub fn window_scale(&self) -> f64 {
        match self {
            Self::Easy => 1.25,
            Self::Normal => 1.0,
            Self::Hard => 0.8,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Some(Self::Easy),
            "normal" => Some(Self::Normal),
            "hard" => Some(Self::Hard),
            _ => None,
        }
    }
}

/// Patience widens every window by 2% per point, capped at +30%.
pub fn patience_scale(patience: u32) -> f64 {
    (1.0 + PATIENCE_WINDOW_BONUS * patience as f64).min(PATIENCE_WINDOW_CAP)
}

/// Inclusive damage range for a single archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageRange {
    pub min: u32,
    pub max: u32,
}

impl DamageRange {
    pub const fn new(min: u32, max: u32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn roll(&self, rng: &mut impl Rng) -> u32 {
        rng.gen_range(self.min..=self.max)
    }
}

/// One skill check that turns player input into damage.
pub trait Minigame {
    /// Smallest non-zero damage the challenge can deal.
    fn min_damage(&self) -> u32;

    /// Worst-case damage. `play` never returns more than this.
    fn max_damage(&self) -> u32;

    fn play<R: Rng, C: Console>(&self, ctx: &mut EncounterContext<R, C>) -> u32;
}

/// Assemble a frame in the layout the renderer expects: title first,
/// controls hint last.
pub fn frame(title: &str, body: Vec<String>, controls: &str) -> Vec<String> {
    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(title.to_string());
    lines.extend(body);
    lines.push(controls.to_string());
    lines
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_difficulty_window_scale() {
        assert_eq!(Difficulty::Easy.window_scale(), 1.25);
        assert_eq!(Difficulty::Normal.window_scale(), 1.0);
        assert_eq!(Difficulty::Hard.window_scale(), 0.8);
    }

    #[test]
    fn test_difficulty_from_index_and_parse() {
        assert_eq!(Difficulty::from_index(0), Difficulty::Easy);
        assert_eq!(Difficulty::from_index(2), Difficulty::Hard);
        assert_eq!(Difficulty::from_index(99), Difficulty::Normal);
        assert_eq!(Difficulty::parse("HARD"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::parse("nightmare"), None);
    }

    #[test]
    fn test_patience_scale_capped() {
        assert_eq!(patience_scale(0), 1.0);
        assert!((patience_scale(5) - 1.1).abs() < 1e-9);
        assert_eq!(patience_scale(100), PATIENCE_WINDOW_CAP);
    }

    #[test]
    fn test_damage_range_normalises_and_rolls() {
        let range = DamageRange::new(20, 10);
        assert_eq!(range, DamageRange { min: 10, max: 20 });

        let mut rng = ChaCha8Rng::seed_from_u64(1);
        for _ in 0..200 {
            let d = range.roll(&mut rng);
            assert!((10..=20).contains(&d));
        }
    }

    #[test]
    fn test_frame_layout() {
        let lines = frame("Title", vec!["body".to_string()], "[Enter]");
        assert_eq!(lines, vec!["Title", "body", "[Enter]"]);
    }
}
