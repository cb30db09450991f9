//! Outcome resolver: turns a finished encounter into profile deltas.

use crate::bosses::BossRewards;
use crate::core::constants::{
    DEFEATED_REPUTATION, DEFEAT_CURRENCY_PENALTY_PERCENT, DEFEAT_MAX_ITEMS_LOST, SPARED_REPUTATION,
};
use crate::error::{GameError, Result};
use crate::profile::PlayerProfile;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Terminal state of an encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Spared,
    Defeated,
    Fled,
    PlayerDefeated,
}

impl Outcome {
    pub fn name(&self) -> &'static str {
        match self {
            Outcome::Spared => "Spared",
            Outcome::Defeated => "Defeated",
            Outcome::Fled => "Fled",
            Outcome::PlayerDefeated => "Player Defeated",
        }
    }

    /// True when the boss counts as resolved for the player.
    pub fn resolves_boss(&self) -> bool {
        matches!(self, Outcome::Spared | Outcome::Defeated)
    }
}

/// What to do when a player summons a boss they've already resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RematchPolicy {
    /// Refuse the encounter.
    Block,
    /// Allow it; currency and XP scaled down, no reputation, no new unlock.
    #[default]
    Reduced,
    /// Allow it with full rewards every time.
    Unrestricted,
}

impl RematchPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "block" => Some(Self::Block),
            "reduced" => Some(Self::Reduced),
            "unrestricted" => Some(Self::Unrestricted),
            _ => None,
        }
    }
}

/// How rewards are paid for a particular encounter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewardTier {
    Full,
    /// Rematch: currency and XP paid at this percentage.
    Rematch(u32),
}

/// Decide whether an encounter may start and at which reward tier.
pub fn check_rematch(
    policy: RematchPolicy,
    reward_percent: u32,
    profile: &PlayerProfile,
    boss_id: &str,
) -> Result<RewardTier> {
    if !profile.has_resolved(boss_id) {
        return Ok(RewardTier::Full);
    }
    match policy {
        RematchPolicy::Block => Err(GameError::RematchBlocked {
            boss: boss_id.to_string(),
        }),
        RematchPolicy::Reduced => Ok(RewardTier::Rematch(reward_percent.min(100))),
        RematchPolicy::Unrestricted => Ok(RewardTier::Full),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterResult {
    pub outcome: Outcome,
    pub boss_id: String,
    pub reputation_delta: i64,
    /// Negative on a player defeat.
    pub currency_reward: i64,
    pub xp_reward: u64,
    /// Boss id to add to the resolved set.
    pub unlock_flag: Option<String>,
    pub items_lost: Vec<String>,
}

fn scale(amount: u64, tier: RewardTier) -> u64 {
    match tier {
        RewardTier::Full => amount,
        RewardTier::Rematch(percent) => amount * percent as u64 / 100,
    }
}

/// Currency lost on a player defeat, rounded down.
pub fn defeat_penalty(currency: u64) -> u64 {
    currency.saturating_mul(DEFEAT_CURRENCY_PENALTY_PERCENT) / 100
}

/// Pick up to three distinct inventory slots to lose.
pub fn roll_items_lost(inventory: &[String], rng: &mut impl Rng) -> Vec<String> {
    let count = inventory.len().min(DEFEAT_MAX_ITEMS_LOST);
    rand::seq::index::sample(rng, inventory.len(), count)
        .iter()
        .map(|i| inventory[i].clone())
        .collect()
}

pub fn resolve_outcome(
    outcome: Outcome,
    boss_id: &str,
    rewards: &BossRewards,
    tier: RewardTier,
    profile: &PlayerProfile,
    rng: &mut impl Rng,
) -> EncounterResult {
    let rematch = matches!(tier, RewardTier::Rematch(_));
    let unlock_flag = (outcome.resolves_boss() && !rematch).then(|| boss_id.to_string());
    let reputation = |delta: i64| if rematch { 0 } else { delta };

    let (reputation_delta, currency_reward, xp_reward, items_lost) = match outcome {
        Outcome::Spared => (
            reputation(SPARED_REPUTATION),
            scale(rewards.spared_currency, tier) as i64,
            scale(rewards.spared_xp, tier),
            Vec::new(),
        ),
        Outcome::Defeated => (
            reputation(DEFEATED_REPUTATION),
            scale(rewards.defeated_currency, tier) as i64,
            scale(rewards.defeated_xp, tier),
            Vec::new(),
        ),
        Outcome::Fled => (0, 0, 0, Vec::new()),
        Outcome::PlayerDefeated => (
            0,
            -(defeat_penalty(profile.currency) as i64),
            0,
            roll_items_lost(&profile.inventory, rng),
        ),
    };

    tracing::info!(
        boss = boss_id,
        outcome = outcome.name(),
        reputation_delta,
        currency_reward,
        xp_reward,
        rematch,
        "encounter resolved"
    );

    EncounterResult {
        outcome,
        boss_id: boss_id.to_string(),
        reputation_delta,
        currency_reward,
        xp_reward,
        unlock_flag,
        items_lost,
    }
}

/// Apply a result to the profile. Currency never goes below zero.
pub fn apply_result(profile: &mut PlayerProfile, result: &EncounterResult) {
    profile.reputation = profile.reputation.saturating_add(result.reputation_delta);
    profile.currency = if result.currency_reward >= 0 {
        profile.currency.saturating_add(result.currency_reward as u64)
    } else {
        profile
            .currency
            .saturating_sub(result.currency_reward.unsigned_abs())
    };
    profile.xp = profile.xp.saturating_add(result.xp_reward);
    for item in &result.items_lost {
        profile.take_item(item);
    }
    if let Some(flag) = &result.unlock_flag {
        profile.resolved_bosses.insert(flag.clone());
    }
}
