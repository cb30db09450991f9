//! Admission and settlement around a single encounter: summon item, rematch
//! policy, the fight itself, then the profile update.

use super::context::EncounterContext;
use super::logic::Encounter;
use crate::bosses::BossDefinition;
use crate::config::EngineConfig;
use crate::console::{Clock, Console};
use crate::error::{GameError, Result};
use crate::outcome::{apply_result, check_rematch, resolve_outcome, EncounterResult, RewardTier};
use crate::profile::PlayerProfile;
use rand::Rng;

/// Check the rematch policy, then consume the summon item. A refused
/// encounter leaves the profile untouched.
pub fn admit(
    profile: &mut PlayerProfile,
    def: &BossDefinition,
    config: &EngineConfig,
) -> Result<RewardTier> {
    let tier = check_rematch(
        config.rematch_policy,
        config.rematch_reward_percent,
        profile,
        def.id,
    )?;
    let consumed = profile.take_item(def.summon_item);
    if !consumed && config.requires_summon_item() {
        return Err(GameError::MissingSummonItem {
            boss: def.name.to_string(),
            item: def.summon_item.to_string(),
        });
    }
    tracing::info!(boss = def.id, ?tier, consumed, "encounter admitted");
    Ok(tier)
}

/// Run an admitted encounter to the end and apply its result to `profile`.
/// Stats and equipment are read from the profile once, here.
pub fn play_admitted<R: Rng, C: Console>(
    profile: &mut PlayerProfile,
    def: &BossDefinition,
    config: &EngineConfig,
    tier: RewardTier,
    console: C,
    clock: impl Clock + 'static,
    rng: R,
) -> EncounterResult {
    let ctx = EncounterContext::new(
        profile.stats,
        profile.equipment,
        config.difficulty,
        rng,
        console,
        clock,
    );
    let mut encounter = Encounter::new(def, ctx, config.invincible);
    let outcome = encounter.run();
    let result = resolve_outcome(outcome, def.id, &def.rewards, tier, profile, &mut encounter.ctx.rng);
    apply_result(profile, &result);
    result
}

/// [`admit`] then [`play_admitted`].
pub fn play_boss<R: Rng, C: Console>(
    profile: &mut PlayerProfile,
    def: &BossDefinition,
    config: &EngineConfig,
    console: C,
    clock: impl Clock + 'static,
    rng: R,
) -> Result<EncounterResult> {
    let tier = admit(profile, def, config)?;
    Ok(play_admitted(profile, def, config, tier, console, clock, rng))
}
