//! Positional dodge: some lanes are about to be hit, pick a safe one.

use super::{frame, DamageRange, Minigame};
use crate::console::{Console, KeyRead};
use crate::core::constants::MAX_LANES;
use crate::encounter::EncounterContext;
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DodgeParams {
    /// Number of lanes (clamped to 2..=9 so digit keys can address them).
    pub lanes: usize,
    pub min_unsafe: usize,
    pub max_unsafe: usize,
    pub damage: DamageRange,
    /// How long the strike pattern is shown before it is hidden.
    pub telegraph_ms: u64,
    pub response_ms: u64,
}

impl DodgeParams {
    fn lane_count(&self) -> usize {
        self.lanes.clamp(2, MAX_LANES)
    }
}

/// Roll which lanes get hit. At least one lane is always unsafe and at least
/// one is always safe.
pub fn roll_unsafe_lanes(params: &DodgeParams, rng: &mut impl Rng) -> Vec<bool> {
    let lanes = params.lane_count();
    let max = params.max_unsafe.clamp(1, lanes - 1);
    let min = params.min_unsafe.clamp(1, max);
    let count = rng.gen_range(min..=max);

    let mut mask = vec![false; lanes];
    for index in rand::seq::index::sample(rng, lanes, count).iter() {
        mask[index] = true;
    }
    mask
}

/// Digit key → lane index. Anything else, or a lane that doesn't exist, is `None`.
pub fn parse_choice(read: KeyRead, lanes: usize) -> Option<usize> {
    read.key()?.as_index().filter(|i| *i < lanes)
}

/// Damage for a lane choice: safe lane 0, unsafe lane a roll in range,
/// no valid choice the worst case.
pub fn score(
    choice: Option<usize>,
    unsafe_lanes: &[bool],
    damage: DamageRange,
    rng: &mut impl Rng,
) -> u32 {
    match choice.and_then(|i| unsafe_lanes.get(i)) {
        Some(false) => 0,
        Some(true) => damage.roll(rng),
        None => damage.max,
    }
}

fn lane_numbers(lanes: usize) -> String {
    (1..=lanes)
        .map(|i| format!("[{}]", i))
        .collect::<Vec<_>>()
        .join(" ")
}

fn strike_marks(mask: &[bool]) -> String {
    mask.iter()
        .map(|hit| if *hit { " \u{25BC} " } else { "   " })
        .collect::<Vec<_>>()
        .join(" ")
}

impl Minigame for DodgeParams {
    fn min_damage(&self) -> u32 {
        self.damage.min
    }

    fn max_damage(&self) -> u32 {
        self.damage.max
    }

    fn play<R: Rng, C: Console>(&self, ctx: &mut EncounterContext<R, C>) -> u32 {
        let mask = roll_unsafe_lanes(self, &mut ctx.rng);

        ctx.render(&frame(
            "Dodge!",
            vec![
                "! Watch where it strikes...".to_string(),
                String::new(),
                strike_marks(&mask),
                lane_numbers(mask.len()),
            ],
            "Remember the safe lanes",
        ));
        let telegraph = ctx.window(self.telegraph_ms);
        ctx.console.hold(telegraph);

        ctx.render(&frame(
            "Dodge!",
            vec![
                "Which lane is safe?".to_string(),
                String::new(),
                String::new(),
                lane_numbers(mask.len()),
            ],
            &format!("[1-{}] Move", mask.len()),
        ));
        let response = ctx.window(self.response_ms);
        let read = ctx.console.read_key(response);

        let choice = parse_choice(read, mask.len());
        let damage = score(choice, &mask, self.damage, &mut ctx.rng);
        tracing::debug!(?choice, damage, "dodge resolved");
        damage
    }
}
