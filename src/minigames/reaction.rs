//! Timed reaction: wait for the cue, then hit the right key fast.

use super::{frame, DamageRange, Minigame};
use crate::console::{Console, Key, KeyRead};
use crate::encounter::EncounterContext;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

const FALLBACK_CUE: char = 'f';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionParams {
    /// Candidate cue keys; one is picked per run.
    pub cue_keys: &'static [char],
    /// Randomised wait before the cue appears.
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    /// Faster than this: no damage.
    pub fast_ms: u64,
    /// Faster than this: partial damage (`damage.min`). Slower: full damage.
    pub slow_ms: u64,
    /// How long the cue stays up before counting as a timeout.
    pub timeout_ms: u64,
    pub damage: DamageRange,
}

/// What the player did once the cue appeared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionInput {
    Correct(Duration),
    WrongKey,
    Timeout,
}

pub fn classify(read: KeyRead, cue: char, elapsed: Duration) -> ReactionInput {
    match read {
        KeyRead::Key(key) if key.matches(&Key::Char(cue)) => ReactionInput::Correct(elapsed),
        KeyRead::Key(_) => ReactionInput::WrongKey,
        KeyRead::Timeout => ReactionInput::Timeout,
    }
}

/// Three damage tiers by elapsed time; a wrong key or timeout is always full.
pub fn score(input: ReactionInput, fast: Duration, slow: Duration, damage: DamageRange) -> u32 {
    match input {
        ReactionInput::Correct(elapsed) if elapsed < fast => 0,
        ReactionInput::Correct(elapsed) if elapsed < slow => damage.min,
        ReactionInput::Correct(_) | ReactionInput::WrongKey | ReactionInput::Timeout => damage.max,
    }
}

impl Minigame for ReactionParams {
    fn min_damage(&self) -> u32 {
        self.damage.min
    }

    fn max_damage(&self) -> u32 {
        self.damage.max
    }

    fn play<R: Rng, C: Console>(&self, ctx: &mut EncounterContext<R, C>) -> u32 {
        let cue = *self.cue_keys.choose(&mut ctx.rng).unwrap_or(&FALLBACK_CUE);
        let low = self.min_delay_ms.min(self.max_delay_ms);
        let high = self.max_delay_ms.max(self.min_delay_ms);
        let delay = Duration::from_millis(ctx.rng.gen_range(low..=high));

        ctx.render(&frame(
            "Brace!",
            vec!["Steady... wait for it...".to_string()],
            "Don't press anything yet",
        ));
        ctx.console.hold(delay);

        ctx.render(&frame(
            "Brace!",
            vec![format!("! NOW! Press [{}]!", Key::Char(cue).glyph())],
            "React!",
        ));
        let start = ctx.now();
        let timeout = ctx.window(self.timeout_ms);
        let read = ctx.console.read_key(timeout);
        let elapsed = ctx.since(start);

        let input = classify(read, cue, elapsed);
        let fast = ctx.window(self.fast_ms);
        let slow = ctx.window(self.slow_ms);
        let damage = score(input, fast, slow, self.damage);
        tracing::debug!(?input, damage, "reaction resolved");
        damage
    }
}
