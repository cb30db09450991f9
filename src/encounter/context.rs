//! Explicit inputs and capabilities for one encounter.

use crate::console::{Clock, Console};
use crate::minigames::{patience_scale, Difficulty};
use crate::profile::{EquipmentBonuses, PlayerStats};
use std::time::Duration;

/// Everything the controller and minigames need from the outside world:
/// player inputs read at encounter start, the random source, the console and
/// the gameplay clock. Nothing is read from ambient globals.
pub struct EncounterContext<R, C> {
    pub stats: PlayerStats,
    pub equipment: EquipmentBonuses,
    pub difficulty: Difficulty,
    pub rng: R,
    pub console: C,
    clock: Box<dyn Clock>,
}

impl<R, C: Console> EncounterContext<R, C> {
    pub fn new(
        stats: PlayerStats,
        equipment: EquipmentBonuses,
        difficulty: Difficulty,
        rng: R,
        console: C,
        clock: impl Clock + 'static,
    ) -> Self {
        Self {
            stats,
            equipment,
            difficulty,
            rng,
            console,
            clock: Box::new(clock),
        }
    }

    /// Current gameplay time.
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Game time elapsed since `start`.
    pub fn since(&self, start: Duration) -> Duration {
        self.now().saturating_sub(start)
    }

    /// Combined difficulty and patience multiplier for timing windows.
    pub fn window_scale(&self) -> f64 {
        self.difficulty.window_scale() * patience_scale(self.stats.patience)
    }

    /// A base gameplay window in milliseconds, scaled for this player.
    pub fn window(&self, base_ms: u64) -> Duration {
        Duration::from_millis(base_ms).mul_f64(self.window_scale())
    }

    pub fn render(&mut self, lines: &[String]) {
        self.console.render_frame(lines);
    }
}
