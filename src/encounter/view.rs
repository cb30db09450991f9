//! Frame composition for the turn menu and result screens.

use super::types::PlayerAction;
use crate::combat::{Boss, PlayerCombatant};
use crate::core::constants::MERCY_REQUIRED_TO_SPARE;
use crate::minigames::frame;
use std::collections::VecDeque;

const HP_BAR_WIDTH: usize = 20;

pub fn hp_bar(current: u32, max: u32) -> String {
    let filled = if max == 0 {
        0
    } else {
        (current.min(max) as usize * HP_BAR_WIDTH) / max as usize
    };
    format!(
        "[{}{}] {}/{}",
        "#".repeat(filled),
        "-".repeat(HP_BAR_WIDTH - filled),
        current,
        max
    )
}

fn status_lines(boss: &Boss, player: &PlayerCombatant) -> Vec<String> {
    let mut boss_line = format!(
        "{:<16} {}  Mercy {}/{}",
        boss.name,
        hp_bar(boss.health, boss.max_health),
        boss.mercy_level.min(MERCY_REQUIRED_TO_SPARE),
        MERCY_REQUIRED_TO_SPARE
    );
    if boss.is_spareable() {
        boss_line.push_str("  SPAREABLE");
    }
    let mut player_line = format!("{:<16} {}", "You", hp_bar(player.health, player.max_health));
    if player.invincible {
        player_line.push_str("  (invincible)");
    }
    vec![boss_line, player_line]
}

pub fn menu_controls() -> String {
    PlayerAction::ALL
        .iter()
        .enumerate()
        .map(|(i, a)| format!("[{}] {}", i + 1, a.label()))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Full turn-menu frame: status, boss dialogue, recent log, menu hint.
pub fn menu_frame(boss: &Boss, player: &PlayerCombatant, log: &VecDeque<String>) -> Vec<String> {
    let mut body = status_lines(boss, player);
    body.push(String::new());
    body.push(boss.dialogue_line().to_string());
    body.push(String::new());
    body.extend(log.iter().cloned());
    frame(boss.name, body, &menu_controls())
}

/// A short message screen over the current status.
pub fn message_frame(boss: &Boss, player: &PlayerCombatant, message: &str) -> Vec<String> {
    let mut body = status_lines(boss, player);
    body.push(String::new());
    body.push(message.to_string());
    frame(boss.name, body, "")
}
