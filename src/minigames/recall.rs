//! Sequence recall: memorise a sequence, then reproduce it exactly.

use super::{frame, Minigame};
use crate::console::{Console, Key, KeyRead};
use crate::encounter::EncounterContext;
use rand::seq::SliceRandom;
use rand::Rng;

pub const ARROW_ALPHABET: &[Key] = &Key::ARROWS;
pub const RUNE_ALPHABET: &[Key] = &[Key::Char('q'), Key::Char('w'), Key::Char('e'), Key::Char('r')];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecallParams {
    pub length: usize,
    pub alphabet: &'static [Key],
    /// Damage when nothing is recalled.
    pub base_damage: u32,
    pub display_ms: u64,
    /// Time allowed for each key of the answer.
    pub per_key_ms: u64,
}

/// Damage removed per correctly recalled position. Rounded up so that a
/// perfect answer always reaches zero.
pub fn per_correct_reduction(base: u32, length: usize) -> u32 {
    if length == 0 {
        return base;
    }
    base.div_ceil(length as u32)
}

/// Number of leading positions where the answer matches, compared index by index.
pub fn correct_prefix(expected: &[Key], entered: &[Key]) -> usize {
    expected
        .iter()
        .zip(entered)
        .take_while(|(want, got)| want.matches(got))
        .count()
}

/// `max(0, base - prefix * reduction)`, and exactly 0 for a full recall.
pub fn score(correct_prefix: usize, length: usize, base: u32) -> u32 {
    if correct_prefix >= length {
        return 0;
    }
    let reduction = per_correct_reduction(base, length);
    base.saturating_sub(correct_prefix as u32 * reduction)
}

pub fn generate_sequence(params: &RecallParams, rng: &mut impl Rng) -> Vec<Key> {
    (0..params.length)
        .map(|_| *params.alphabet.choose(rng).unwrap_or(&Key::Up))
        .collect()
}

fn glyphs(keys: &[Key]) -> String {
    keys.iter().map(|k| k.glyph()).collect::<Vec<_>>().join(" ")
}

fn progress(entered: &[Key], length: usize) -> String {
    let mut parts: Vec<String> = entered.iter().map(|k| k.glyph()).collect();
    parts.resize(length, "_".to_string());
    parts.join(" ")
}

fn alphabet_hint(alphabet: &[Key]) -> String {
    format!("[{}] Enter sequence", glyphs(alphabet))
}

impl Minigame for RecallParams {
    fn min_damage(&self) -> u32 {
        let reduction = per_correct_reduction(self.base_damage, self.length);
        let near_miss = self.length.saturating_sub(1) as u32 * reduction;
        self.base_damage
            .saturating_sub(near_miss)
            .max(1)
            .min(self.base_damage)
    }

    fn max_damage(&self) -> u32 {
        self.base_damage
    }

    fn play<R: Rng, C: Console>(&self, ctx: &mut EncounterContext<R, C>) -> u32 {
        let sequence = generate_sequence(self, &mut ctx.rng);

        ctx.render(&frame(
            "Remember!",
            vec![
                "Memorise the sequence:".to_string(),
                String::new(),
                format!("   {}", glyphs(&sequence)),
            ],
            "Watch closely",
        ));
        let display = ctx.window(self.display_ms);
        ctx.console.hold(display);

        let hint = alphabet_hint(self.alphabet);
        let mut entered: Vec<Key> = Vec::with_capacity(sequence.len());
        for expected in &sequence {
            ctx.render(&frame(
                "Remember!",
                vec![
                    "Repeat it!".to_string(),
                    String::new(),
                    format!("   {}", progress(&entered, sequence.len())),
                ],
                &hint,
            ));
            let per_key = ctx.window(self.per_key_ms);
            match ctx.console.read_key(per_key) {
                KeyRead::Key(key) => {
                    entered.push(key);
                    if !expected.matches(&key) {
                        break;
                    }
                }
                KeyRead::Timeout => break,
            }
        }

        let prefix = correct_prefix(&sequence, &entered);
        let damage = score(prefix, sequence.len(), self.base_damage);
        tracing::debug!(prefix, length = sequence.len(), damage, "recall resolved");
        damage
    }
}
