use crate::bosses::{AttackDescriptor, BossDefinition, BossDialogue, BossRewards, DialogueState};
use crate::core::combat_math::{
    apply_damage, at_or_below_percent, below_percent, calculate_damage_taken, health_percent,
};
use crate::core::constants::{LOW_HEALTH_PERCENT, MERCY_REQUIRED_TO_SPARE, PLAYER_BASE_HP};
use crate::profile::EquipmentBonuses;

/// Live boss state for one encounter.
#[derive(Debug, Clone)]
pub struct Boss {
    pub id: &'static str,
    pub name: &'static str,
    pub max_health: u32,
    pub health: u32,
    pub defense: u32,
    pub mercy_level: u32,
    pub spare_threshold_percent: u32,
    pub ultimate_threshold_percent: u32,
    pub attack_pool: Vec<AttackDescriptor>,
    pub dialogue: BossDialogue,
    pub dialogue_state: DialogueState,
    pub rewards: BossRewards,
    is_spareable: bool,
}

impl Boss {
    /// Fresh combat state: full health, zero mercy. Nothing carries over
    /// from earlier fights against the same boss.
    pub fn from_definition(def: &BossDefinition) -> Self {
        let mut boss = Self {
            id: def.id,
            name: def.name,
            max_health: def.max_health.max(1),
            health: def.max_health.max(1),
            defense: def.defense,
            mercy_level: 0,
            spare_threshold_percent: def.spare_threshold_percent,
            ultimate_threshold_percent: def.ultimate_threshold_percent,
            attack_pool: def.attacks.clone(),
            dialogue: def.dialogue.clone(),
            dialogue_state: DialogueState::Intro,
            rewards: def.rewards,
            is_spareable: false,
        };
        boss.refresh_spareable();
        boss
    }

    /// Apply mitigated damage. Returns the damage actually dealt.
    pub fn take_damage(&mut self, raw_damage: u32) -> u32 {
        let actual = calculate_damage_taken(raw_damage, self.defense);
        self.health = apply_damage(self.health, actual);
        self.refresh_spareable();
        actual
    }

    /// Act: one more point of mercy, no damage.
    pub fn add_mercy(&mut self) {
        self.mercy_level = self.mercy_level.saturating_add(1);
        self.refresh_spareable();
    }

    pub fn is_spareable(&self) -> bool {
        self.is_spareable
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    pub fn health_percent(&self) -> u32 {
        health_percent(self.health, self.max_health)
    }

    pub fn is_low_health(&self) -> bool {
        below_percent(self.health, self.max_health, LOW_HEALTH_PERCENT)
    }

    pub fn dialogue_line(&self) -> &'static str {
        self.dialogue.line(self.dialogue_state)
    }

    fn refresh_spareable(&mut self) {
        self.is_spareable = self.mercy_level >= MERCY_REQUIRED_TO_SPARE
            && at_or_below_percent(self.health, self.max_health, self.spare_threshold_percent);
    }
}

/// The player's side of the fight. Bonuses are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCombatant {
    pub health: u32,
    pub max_health: u32,
    pub attack_bonus: u32,
    pub defense_bonus: u32,
    /// Debug toggle: every hit is reduced to zero.
    pub invincible: bool,
}

impl PlayerCombatant {
    pub fn new(equipment: &EquipmentBonuses, invincible: bool) -> Self {
        let max_health = PLAYER_BASE_HP.saturating_add(equipment.max_hp);
        Self {
            health: max_health,
            max_health,
            attack_bonus: equipment.attack,
            defense_bonus: equipment.defense,
            invincible,
        }
    }

    /// Apply mitigated damage. Returns the damage actually taken.
    pub fn take_damage(&mut self, raw_damage: u32) -> u32 {
        if self.invincible {
            return 0;
        }
        let actual = calculate_damage_taken(raw_damage, self.defense_bonus);
        self.health = apply_damage(self.health, actual);
        actual
    }

    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }
}
