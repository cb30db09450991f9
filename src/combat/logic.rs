use super::types::{Boss, PlayerCombatant};
use crate::bosses::{AttackDescriptor, DialogueState};
use crate::core::combat_math::{apply_multiplier, below_percent, roll_fight_damage};
use crate::minigames::HitGrade;
use crate::profile::PlayerStats;
use rand::seq::SliceRandom;
use rand::Rng;

/// Attacks the boss may pick this turn. Ultimates only join once health drops
/// under the boss's ultimate threshold; a pool with nothing else left falls
/// back to every attack.
pub fn eligible_attacks(boss: &Boss) -> Vec<&AttackDescriptor> {
    let ultimates_open = below_percent(boss.health, boss.max_health, boss.ultimate_threshold_percent);
    let eligible: Vec<&AttackDescriptor> = boss
        .attack_pool
        .iter()
        .filter(|a| ultimates_open || !a.ultimate)
        .collect();
    if eligible.is_empty() {
        boss.attack_pool.iter().collect()
    } else {
        eligible
    }
}

/// Uniform pick over the eligible attacks.
pub fn select_attack<'a>(boss: &'a Boss, rng: &mut impl Rng) -> Option<&'a AttackDescriptor> {
    eligible_attacks(boss).choose(rng).copied()
}

/// Raw Fight damage after the timing-bar multiplier, before boss defense.
pub fn fight_damage(
    stats: &PlayerStats,
    player: &PlayerCombatant,
    grade: HitGrade,
    rng: &mut impl Rng,
) -> u32 {
    let raw = roll_fight_damage(stats.strength, player.attack_bonus, rng);
    apply_multiplier(raw, grade.multiplier())
}

/// Dialogue after the boss takes a hit.
pub fn react_to_hit(boss: &mut Boss) {
    boss.dialogue_state = if boss.is_low_health() {
        DialogueState::LowHealth
    } else {
        DialogueState::Hit
    };
}

/// Dialogue after an Act.
pub fn react_to_mercy(boss: &mut Boss) {
    boss.dialogue_state = if boss.is_spareable() {
        DialogueState::SpareReady
    } else {
        DialogueState::Merciful
    };
}
