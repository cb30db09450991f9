//! Rhythm mash: press one key enough times before the time runs out.

use super::{frame, Minigame};
use crate::console::{Console, Key, KeyRead};
use crate::encounter::EncounterContext;
use rand::Rng;

const MASH_BAR_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RhythmParams {
    pub key: char,
    pub target: u32,
    pub time_limit_ms: u64,
    pub max_damage: u32,
}

/// Zero at or above target; otherwise proportional to the shortfall.
pub fn score(presses: u32, target: u32, max_damage: u32) -> u32 {
    if target == 0 || presses >= target {
        return 0;
    }
    let shortfall = (target - presses) as u64;
    (max_damage as u64 * shortfall / target as u64) as u32
}

fn mash_bar(presses: u32, target: u32) -> String {
    let filled = if target == 0 {
        MASH_BAR_WIDTH
    } else {
        (presses.min(target) as usize * MASH_BAR_WIDTH) / target as usize
    };
    format!(
        "[{}{}] {}/{}",
        "#".repeat(filled),
        "-".repeat(MASH_BAR_WIDTH - filled),
        presses,
        target
    )
}

impl Minigame for RhythmParams {
    fn min_damage(&self) -> u32 {
        score(self.target.saturating_sub(1), self.target, self.max_damage).max(1)
    }

    fn max_damage(&self) -> u32 {
        self.max_damage
    }

    fn play<R: Rng, C: Console>(&self, ctx: &mut EncounterContext<R, C>) -> u32 {
        let mash_key = Key::Char(self.key);
        let limit = ctx.window(self.time_limit_ms);
        let controls = format!("[{}] Mash!", mash_key.glyph());

        let start = ctx.now();
        let mut presses = 0u32;
        while presses < self.target {
            ctx.render(&frame(
                "Hold the line!",
                vec![
                    format!("! Mash [{}] {} times!", mash_key.glyph(), self.target),
                    String::new(),
                    mash_bar(presses, self.target),
                ],
                &controls,
            ));

            let elapsed = ctx.since(start);
            if elapsed >= limit {
                break;
            }
            match ctx.console.read_key(limit - elapsed) {
                KeyRead::Key(key) if key.matches(&mash_key) => presses += 1,
                KeyRead::Key(_) => {}
                KeyRead::Timeout => break,
            }
        }

        let damage = score(presses, self.target, self.max_damage);
        tracing::debug!(presses, target = self.target, damage, "rhythm resolved");
        damage
    }
}
