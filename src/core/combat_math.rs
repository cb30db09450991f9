//! Shared damage math for bosses and the player.
//!
//! These pure functions are used by both combatants so mitigation stays
//! identical on each side of the encounter.

use super::constants::{FIGHT_BASE_DAMAGE_MAX, FIGHT_BASE_DAMAGE_MIN, FIGHT_STRENGTH_FACTOR};
use rand::Rng;

/// Calculate actual damage taken after flat defense.
///
/// Every landed hit deals at least 1 damage, no matter how high the defense.
pub fn calculate_damage_taken(raw_damage: u32, defense: u32) -> u32 {
    raw_damage.saturating_sub(defense).max(1)
}

/// Apply damage to HP, returning remaining HP (minimum 0).
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Integer health percentage, rounded down.
pub fn health_percent(current_hp: u32, max_hp: u32) -> u32 {
    if max_hp == 0 {
        return 0;
    }
    ((current_hp as u64 * 100) / max_hp as u64) as u32
}

/// True when `current / max * 100 <= percent`, computed without floats.
pub fn at_or_below_percent(current_hp: u32, max_hp: u32, percent: u32) -> bool {
    current_hp as u64 * 100 <= percent as u64 * max_hp as u64
}

/// True when `current / max * 100 < percent`, computed without floats.
pub fn below_percent(current_hp: u32, max_hp: u32, percent: u32) -> bool {
    (current_hp as u64 * 100) < percent as u64 * max_hp as u64
}

/// Roll the Fight action's raw damage before the timing-bar multiplier.
///
/// `random(15, 25) + strength * 2 + attack_bonus`
pub fn roll_fight_damage(strength: u32, attack_bonus: u32, rng: &mut impl Rng) -> u32 {
    rng.gen_range(FIGHT_BASE_DAMAGE_MIN..=FIGHT_BASE_DAMAGE_MAX)
        .saturating_add(strength.saturating_mul(FIGHT_STRENGTH_FACTOR))
        .saturating_add(attack_bonus)
}

/// Apply a skill-check multiplier to raw damage, rounding to nearest.
pub fn apply_multiplier(raw_damage: u32, multiplier: f64) -> u32 {
    (raw_damage as f64 * multiplier).round() as u32
}
