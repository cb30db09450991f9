//! The turn loop.

use super::context::EncounterContext;
use super::types::{ActionResult, BossTurnReport, EncounterState, PlayerAction};
use super::view::{menu_frame, message_frame};
use crate::bosses::{BossDefinition, DialogueState};
use crate::combat::{
    fight_damage, react_to_hit, react_to_mercy, select_attack, Boss, PlayerCombatant,
};
use crate::console::{Console, KeyRead};
use crate::core::constants::{
    ENCOUNTER_LOG_CAPACITY, FLEE_CHANCE, INTRO_PAUSE_MS, MENU_POLL_MS, TURN_RESULT_PAUSE_MS,
};
use crate::minigames::run_timing_bar;
use crate::outcome::Outcome;
use rand::Rng;
use std::collections::VecDeque;
use std::time::Duration;

/// Flee check: succeeds with a fixed probability.
pub fn roll_flee(rng: &mut impl Rng) -> bool {
    rng.gen_bool(FLEE_CHANCE)
}

/// One boss fight. Owns both combatants for its whole lifetime.
pub struct Encounter<R, C> {
    pub boss: Boss,
    pub player: PlayerCombatant,
    pub ctx: EncounterContext<R, C>,
    state: EncounterState,
    log: VecDeque<String>,
    turns: u32,
    damage_taken: u32,
}

impl<R: Rng, C: Console> Encounter<R, C> {
    /// Fresh boss and player built from the definition and the context's
    /// equipment. Equipment is not read again after this point.
    pub fn new(def: &BossDefinition, ctx: EncounterContext<R, C>, invincible: bool) -> Self {
        let player = PlayerCombatant::new(&ctx.equipment, invincible);
        Self {
            boss: Boss::from_definition(def),
            player,
            ctx,
            state: EncounterState::Intro,
            log: VecDeque::with_capacity(ENCOUNTER_LOG_CAPACITY),
            turns: 0,
            damage_taken: 0,
        }
    }

    pub fn state(&self) -> EncounterState {
        self.state
    }

    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            EncounterState::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn log(&self) -> &VecDeque<String> {
        &self.log
    }

    /// Player turns taken so far.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Total damage the player has taken.
    pub fn damage_taken(&self) -> u32 {
        self.damage_taken
    }

    fn add_log_entry(&mut self, entry: String) {
        if self.log.len() >= ENCOUNTER_LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(entry);
    }

    fn finish(&mut self, outcome: Outcome) {
        self.state = EncounterState::Finished(outcome);
        tracing::info!(
            boss = self.boss.id,
            outcome = outcome.name(),
            turns = self.turns,
            "encounter finished"
        );
    }

    fn show_message(&mut self, message: &str, pause_ms: u64) {
        let lines = message_frame(&self.boss, &self.player, message);
        self.ctx.render(&lines);
        self.ctx.console.pause(Duration::from_millis(pause_ms));
    }

    /// Intro → player turn.
    pub fn begin(&mut self) {
        if self.state != EncounterState::Intro {
            return;
        }
        tracing::info!(
            boss = self.boss.id,
            boss_hp = self.boss.max_health,
            player_hp = self.player.max_health,
            difficulty = self.ctx.difficulty.name(),
            "encounter started"
        );
        let intro = self.boss.dialogue.intro;
        self.show_message(intro, INTRO_PAUSE_MS);
        self.boss.dialogue_state = DialogueState::Default;
        self.state = EncounterState::PlayerTurn;
    }

    /// Resolve one player action. `None` unless it is the player's turn.
    pub fn player_action(&mut self, action: PlayerAction) -> Option<ActionResult> {
        if self.state != EncounterState::PlayerTurn {
            return None;
        }

        let result = match action {
            PlayerAction::Fight => {
                let grade = run_timing_bar(&mut self.ctx);
                let raw = fight_damage(&self.ctx.stats, &self.player, grade, &mut self.ctx.rng);
                let damage = self.boss.take_damage(raw);
                react_to_hit(&mut self.boss);
                self.add_log_entry(format!("+ {} You deal {} damage.", grade.label(), damage));
                ActionResult::Fight { grade, damage }
            }
            PlayerAction::Act => {
                self.boss.add_mercy();
                react_to_mercy(&mut self.boss);
                self.add_log_entry(format!(
                    "You reach out to {}. Mercy {}.",
                    self.boss.name, self.boss.mercy_level
                ));
                ActionResult::Act {
                    mercy_level: self.boss.mercy_level,
                    spareable: self.boss.is_spareable(),
                }
            }
            PlayerAction::Spare if self.boss.is_spareable() => ActionResult::Spared,
            PlayerAction::Spare => {
                self.add_log_entry(format!("! {} isn't ready to be spared.", self.boss.name));
                ActionResult::SpareRejected
            }
            PlayerAction::Flee if roll_flee(&mut self.ctx.rng) => ActionResult::Fled,
            PlayerAction::Flee => {
                self.add_log_entry("! You couldn't get away!".to_string());
                ActionResult::FleeFailed
            }
        };
        tracing::debug!(action = action.label(), ?result, "player action");

        if result.consumes_turn() {
            self.turns += 1;
        }

        match result {
            ActionResult::Spared => {
                self.boss.dialogue_state = DialogueState::Spared;
                self.finish(Outcome::Spared);
            }
            ActionResult::Fled => self.finish(Outcome::Fled),
            ActionResult::Fight { .. } if self.boss.is_defeated() => {
                self.boss.dialogue_state = DialogueState::Defeated;
                self.finish(Outcome::Defeated);
            }
            ActionResult::SpareRejected => {}
            _ => self.state = EncounterState::BossTurn,
        }
        Some(result)
    }

    /// Run the boss's attack. `None` unless it is the boss's turn.
    pub fn boss_turn(&mut self) -> Option<BossTurnReport> {
        if self.state != EncounterState::BossTurn {
            return None;
        }
        let attack = match select_attack(&self.boss, &mut self.ctx.rng) {
            Some(attack) => attack.clone(),
            None => {
                // Empty pool: the boss hesitates.
                self.state = EncounterState::PlayerTurn;
                return None;
            }
        };
        tracing::debug!(attack = attack.name, ultimate = attack.ultimate, "boss attacks");
        let warning = format!("! {} uses {}! {}", self.boss.name, attack.name, attack.description);
        self.show_message(&warning, TURN_RESULT_PAUSE_MS);

        let raw_damage = attack.resolve(&mut self.ctx);
        // A perfect dodge lands nothing at all.
        let damage_taken = if raw_damage == 0 {
            0
        } else {
            self.player.take_damage(raw_damage)
        };
        self.damage_taken = self.damage_taken.saturating_add(damage_taken);
        self.add_log_entry(if damage_taken == 0 {
            format!("+ You avoid {}!", attack.name)
        } else {
            format!("! {} hits you for {}.", attack.name, damage_taken)
        });

        if self.player.is_defeated() {
            self.finish(Outcome::PlayerDefeated);
        } else {
            self.state = EncounterState::PlayerTurn;
        }
        Some(BossTurnReport {
            attack: attack.name,
            raw_damage,
            damage_taken,
        })
    }

    /// Block on the turn menu until a valid action key arrives. Invalid keys
    /// are noted in the log and the menu is shown again.
    pub fn read_menu_action(&mut self) -> PlayerAction {
        loop {
            let lines = menu_frame(&self.boss, &self.player, &self.log);
            self.ctx.render(&lines);
            match self.ctx.console.read_key(Duration::from_millis(MENU_POLL_MS)) {
                KeyRead::Key(key) => match PlayerAction::from_key(key) {
                    Some(action) => return action,
                    None => self.add_log_entry(format!("Unknown choice [{}].", key.glyph())),
                },
                KeyRead::Timeout => {}
            }
        }
    }

    /// Drive the encounter to a terminal outcome.
    pub fn run(&mut self) -> Outcome {
        self.begin();
        loop {
            match self.state {
                EncounterState::Finished(outcome) => {
                    let closing = self.boss.dialogue_line();
                    self.show_message(closing, TURN_RESULT_PAUSE_MS);
                    return outcome;
                }
                EncounterState::Intro => self.begin(),
                EncounterState::PlayerTurn => {
                    let action = self.read_menu_action();
                    self.player_action(action);
                }
                EncounterState::BossTurn => {
                    self.boss_turn();
                }
            }
        }
    }
}
