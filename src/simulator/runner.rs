//! Runs headless encounters through the real controller.

use super::config::SimConfig;
use super::report::{BossReport, RunStats, SimReport};
use crate::bosses::{all_bosses, BossDefinition};
use crate::console::{AutoPilot, ManualClock};
use crate::encounter::{Encounter, EncounterContext, EncounterState};
use crate::error::{GameError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Simulate every selected boss and aggregate the results.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport> {
    let bosses: Vec<BossDefinition> = match &config.boss {
        Some(id) => vec![crate::bosses::find_boss(id)
            .ok_or_else(|| GameError::UnknownBoss(id.clone()))?],
        None => all_bosses(),
    };

    let base_seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut reports = Vec::with_capacity(bosses.len());
    for (boss_idx, def) in bosses.iter().enumerate() {
        let runs: Vec<RunStats> = (0..config.num_runs)
            .map(|run_idx| {
                let seed = base_seed
                    .wrapping_add((boss_idx as u64) << 32)
                    .wrapping_add(run_idx as u64);
                let stats = simulate_encounter(config, def, seed);
                if config.verbosity >= 2 {
                    println!(
                        "{} run {}/{} - {} in {} turns, {} damage taken",
                        def.id,
                        run_idx + 1,
                        config.num_runs,
                        stats.outcome.map(|o| o.name()).unwrap_or("Timed out"),
                        stats.turns,
                        stats.damage_taken
                    );
                }
                stats
            })
            .collect();
        reports.push(BossReport::from_runs(def, &runs));
    }

    Ok(SimReport {
        policy: config.policy,
        difficulty: config.difficulty,
        num_runs: config.num_runs,
        seed: base_seed,
        bosses: reports,
    })
}

/// One encounter against `def`: the policy picks actions, the autopilot
/// answers every minigame.
pub fn simulate_encounter(config: &SimConfig, def: &BossDefinition, seed: u64) -> RunStats {
    let clock = ManualClock::new();
    let ctx = EncounterContext::new(
        config.stats,
        config.equipment,
        config.difficulty,
        StdRng::seed_from_u64(seed),
        AutoPilot::new(clock.clone(), seed ^ 0x5EED),
        clock,
    );
    let mut encounter = Encounter::new(def, ctx, false);
    encounter.begin();

    while !encounter.state().is_finished() && encounter.turns() < config.max_turns {
        match encounter.state() {
            EncounterState::Finished(_) => {}
            EncounterState::Intro => encounter.begin(),
            EncounterState::PlayerTurn => {
                let action = config.policy.choose(&encounter.boss);
                encounter.player_action(action);
            }
            EncounterState::BossTurn => {
                encounter.boss_turn();
            }
        }
    }

    RunStats {
        outcome: encounter.outcome(),
        turns: encounter.turns(),
        damage_taken: encounter.damage_taken(),
    }
}
