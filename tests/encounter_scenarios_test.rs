//! End-to-end encounter scenarios driven through the scripted console.

use angler::bosses::{
    AttackDescriptor, AttackPattern, BossDefinition, BossDialogue, BossRewards, DialogueState,
};
use angler::combat::Boss;
use angler::config::EngineConfig;
use angler::console::{Key, ManualClock, ScriptedConsole};
use angler::encounter::{
    play_boss, ActionResult, Encounter, EncounterContext, EncounterState, PlayerAction,
};
use angler::minigames::reaction::{score, ReactionInput};
use angler::minigames::{DamageRange, Difficulty, DodgeParams, Minigame, ReactionParams};
use angler::outcome::{resolve_outcome, Outcome, RewardTier};
use angler::profile::{EquipmentBonuses, PlayerProfile, PlayerStats};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

fn dialogue() -> BossDialogue {
    BossDialogue {
        intro: "A shadow stirs under the ice.",
        default: "\"Cold, isn't it?\"",
        hit: "\"Crack!\"",
        low_health: "\"Melting...\"",
        merciful: "\"Warm words.\"",
        spare_ready: "It stops circling.",
        spared: "\"Thaw well, angler.\"",
        defeated: "It sinks.",
    }
}

fn tail_slap(damage: u32) -> AttackDescriptor {
    AttackDescriptor::new(
        "Tail Slap",
        "A tail sweeps the lanes.",
        AttackPattern::Dodge(DodgeParams {
            lanes: 3,
            min_unsafe: 1,
            max_unsafe: 2,
            damage: DamageRange::new(damage, damage),
            telegraph_ms: 1000,
            response_ms: 2000,
        }),
    )
}

fn definition(max_health: u32, defense: u32, attack_damage: u32) -> BossDefinition {
    BossDefinition {
        id: "ice_pike",
        name: "Ice Pike",
        title: "Lurker Under the Ice",
        max_health,
        defense,
        spare_threshold_percent: 40,
        ultimate_threshold_percent: 30,
        summon_item: "Ice Lure",
        rewards: BossRewards {
            spared_currency: 1000,
            spared_xp: 500,
            defeated_currency: 500,
            defeated_xp: 300,
        },
        dialogue: dialogue(),
        attacks: vec![tail_slap(attack_damage)],
    }
}

fn neutral_stats() -> PlayerStats {
    PlayerStats {
        strength: 0,
        luck: 0,
        patience: 0,
    }
}

fn context(console: ScriptedConsole) -> EncounterContext<ChaCha8Rng, ScriptedConsole> {
    let clock = console.clock().clone();
    EncounterContext::new(
        neutral_stats(),
        EquipmentBonuses::default(),
        Difficulty::Normal,
        ChaCha8Rng::seed_from_u64(42),
        console,
        clock,
    )
}

fn scripted() -> ScriptedConsole {
    ScriptedConsole::new(ManualClock::new())
}

// =============================================================================
// Scenario A: mitigation
// =============================================================================

#[test]
fn test_scenario_a_flat_defense_mitigation() {
    let mut boss = Boss::from_definition(&definition(200, 5, 10));
    assert_eq!(boss.take_damage(25), 20);
    assert_eq!(boss.health, 180);
}

// =============================================================================
// Scenario B: spare
// =============================================================================

#[test]
fn test_scenario_b_spare_at_35_percent_with_three_mercy() {
    let mut enc = Encounter::new(&definition(200, 5, 10), context(scripted()), false);
    enc.begin();

    enc.boss.take_damage(135);
    assert_eq!(enc.boss.health_percent(), 35);
    for _ in 0..3 {
        enc.boss.add_mercy();
    }
    assert!(enc.boss.is_spareable());

    assert_eq!(enc.player_action(PlayerAction::Spare), Some(ActionResult::Spared));
    assert_eq!(enc.state(), EncounterState::Finished(Outcome::Spared));
    assert_eq!(enc.boss.dialogue_state, DialogueState::Spared);

    let profile = PlayerProfile::new("T".to_string());
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let result = resolve_outcome(
        Outcome::Spared,
        enc.boss.id,
        &enc.boss.rewards,
        RewardTier::Full,
        &profile,
        &mut rng,
    );
    assert_eq!(result.reputation_delta, 10);
    assert_eq!(result.unlock_flag.as_deref(), Some("ice_pike"));
}

#[test]
fn test_spare_through_act_actions() {
    // Act x3 through the controller, with the boss turns in between.
    let mut console = scripted();
    for _ in 0..3 {
        console = console.press(Key::Char('1'));
    }
    let mut enc = Encounter::new(&definition(200, 5, 1), context(console), true);
    enc.begin();
    enc.boss.take_damage(125);

    for expected_mercy in 1..=3 {
        let result = enc.player_action(PlayerAction::Act);
        assert!(matches!(
            result,
            Some(ActionResult::Act { mercy_level, .. }) if mercy_level == expected_mercy
        ));
        assert!(enc.boss_turn().is_some());
    }
    assert_eq!(enc.boss.dialogue_state, DialogueState::SpareReady);
    assert_eq!(enc.player_action(PlayerAction::Spare), Some(ActionResult::Spared));
    assert_eq!(enc.outcome(), Some(Outcome::Spared));
}

// =============================================================================
// Scenario C: defeat via Fight, regardless of mercy
// =============================================================================

#[test]
fn test_scenario_c_defeat_by_fight_after_mercy() {
    let mut console = scripted();
    // Three Acts, each followed by a dodge press on the boss's turn
    for _ in 0..3 {
        console = console.press(Key::Char('2')).press(Key::Char('1'));
    }
    // Up to two critical Fights (30-50 damage each against 60 HP)
    console = console
        .press(Key::Char('1'))
        .press_after(600, Key::Char(' '))
        .press(Key::Char('1'))
        .press(Key::Char('1'))
        .press_after(600, Key::Char(' '));

    let mut enc = Encounter::new(&definition(60, 0, 5), context(console), true);
    let outcome = enc.run();

    assert_eq!(outcome, Outcome::Defeated);
    assert_eq!(enc.boss.health, 0);
    assert_eq!(enc.boss.mercy_level, 3);
    assert_eq!(enc.boss.dialogue_state, DialogueState::Defeated);

    let profile = PlayerProfile::new("T".to_string());
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let result = resolve_outcome(
        outcome,
        enc.boss.id,
        &enc.boss.rewards,
        RewardTier::Full,
        &profile,
        &mut rng,
    );
    assert_eq!(result.reputation_delta, -15);
    assert_eq!(result.currency_reward, 500);
}

// =============================================================================
// Scenario D: slow reaction is full damage
// =============================================================================

#[test]
fn test_scenario_d_reaction_two_seconds_is_full_damage() {
    let range = DamageRange::new(6, 15);
    let damage = score(
        ReactionInput::Correct(Duration::from_millis(2000)),
        Duration::from_millis(500),
        Duration::from_millis(1000),
        range,
    );
    assert_eq!(damage, 15);

    let params = ReactionParams {
        cue_keys: &['g'],
        min_delay_ms: 500,
        max_delay_ms: 1500,
        fast_ms: 500,
        slow_ms: 1000,
        timeout_ms: 3000,
        damage: range,
    };
    for seed in 0..20 {
        let console = scripted().press_after(2000, Key::Char('g'));
        let clock = console.clock().clone();
        let mut ctx = EncounterContext::new(
            neutral_stats(),
            EquipmentBonuses::default(),
            Difficulty::Normal,
            ChaCha8Rng::seed_from_u64(seed),
            console,
            clock,
        );
        assert_eq!(params.play(&mut ctx), 15);
    }
}

// =============================================================================
// Scenario E: player defeat
// =============================================================================

#[test]
fn test_scenario_e_player_defeat_penalty() {
    let def = definition(200, 5, 250);
    let mut profile = PlayerProfile::new("T".to_string());
    profile.currency = 1000;
    profile.inventory = ["Ice Lure", "Net", "Bucket", "Float", "Sinker", "Map"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    // One Act, then the boss's dodge times out for 250 raw damage.
    let console = scripted().press(Key::Char('2'));
    let clock = console.clock().clone();
    let result = play_boss(
        &mut profile,
        &def,
        &EngineConfig::default(),
        console,
        clock,
        ChaCha8Rng::seed_from_u64(9),
    )
    .unwrap();

    assert_eq!(result.outcome, Outcome::PlayerDefeated);
    assert_eq!(result.currency_reward, -150);
    assert_eq!(profile.currency, 850);
    assert_eq!(result.items_lost.len(), 3);
    // Summon item, then three more
    assert_eq!(profile.inventory.len(), 2);
    assert!(result.unlock_flag.is_none());
    assert!(!profile.has_resolved("ice_pike"));
}

#[test]
fn test_flee_ends_or_hands_turn_to_boss() {
    let mut fled = 0;
    let mut failed = 0;
    for seed in 0..200 {
        let console = scripted();
        let clock = console.clock().clone();
        let ctx = EncounterContext::new(
            neutral_stats(),
            EquipmentBonuses::default(),
            Difficulty::Normal,
            ChaCha8Rng::seed_from_u64(seed),
            console,
            clock,
        );
        let mut enc = Encounter::new(&definition(200, 5, 10), ctx, false);
        enc.begin();
        match enc.player_action(PlayerAction::Flee) {
            Some(ActionResult::Fled) => {
                fled += 1;
                assert_eq!(enc.outcome(), Some(Outcome::Fled));
            }
            Some(ActionResult::FleeFailed) => {
                failed += 1;
                assert_eq!(enc.state(), EncounterState::BossTurn);
            }
            other => panic!("unexpected flee result {:?}", other),
        }
    }
    assert!(fled > 0 && failed > 0);
}

#[test]
fn test_invalid_menu_keys_change_nothing() {
    // Garbage, then a Spare that gets rejected, then flee attempts until done
    let mut console = scripted()
        .press(Key::Char('x'))
        .press(Key::Esc)
        .press(Key::Char('3'));
    for _ in 0..30 {
        console = console.press(Key::Char('4')).press(Key::Char('1'));
    }
    let mut enc = Encounter::new(&definition(200, 5, 1), context(console), true);
    let outcome = enc.run();

    assert_eq!(outcome, Outcome::Fled);
    assert_eq!(enc.boss.health, 200);
    assert_eq!(enc.boss.mercy_level, 0);
    assert_eq!(enc.player.health, enc.player.max_health);
}
