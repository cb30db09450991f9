//! Attack descriptors: a named attack bound to one minigame archetype.

use crate::console::Console;
use crate::core::constants::COMPOSITE_PHASE_PAUSE_MS;
use crate::encounter::EncounterContext;
use crate::minigames::{
    frame, DodgeParams, MemoryParams, Minigame, ReactionParams, RecallParams, RhythmParams,
};
use rand::Rng;
use std::time::Duration;

/// Archetype tag plus the parameters for one run of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttackPattern {
    Dodge(DodgeParams),
    Reaction(ReactionParams),
    Recall(RecallParams),
    Rhythm(RhythmParams),
    Memory(MemoryParams),
    /// Ultimate: the phases run back to back and their damage is summed.
    Composite(Vec<AttackPattern>),
}

impl AttackPattern {
    pub fn archetype(&self) -> &'static str {
        match self {
            AttackPattern::Dodge(_) => "dodge",
            AttackPattern::Reaction(_) => "reaction",
            AttackPattern::Recall(_) => "recall",
            AttackPattern::Rhythm(_) => "rhythm",
            AttackPattern::Memory(_) => "memory",
            AttackPattern::Composite(_) => "composite",
        }
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, AttackPattern::Composite(_))
    }
}

impl Minigame for AttackPattern {
    fn min_damage(&self) -> u32 {
        match self {
            AttackPattern::Dodge(p) => p.min_damage(),
            AttackPattern::Reaction(p) => p.min_damage(),
            AttackPattern::Recall(p) => p.min_damage(),
            AttackPattern::Rhythm(p) => p.min_damage(),
            AttackPattern::Memory(p) => p.min_damage(),
            AttackPattern::Composite(phases) => {
                phases.iter().map(|p| p.min_damage()).min().unwrap_or(0)
            }
        }
    }

    fn max_damage(&self) -> u32 {
        match self {
            AttackPattern::Dodge(p) => p.max_damage(),
            AttackPattern::Reaction(p) => p.max_damage(),
            AttackPattern::Recall(p) => p.max_damage(),
            AttackPattern::Rhythm(p) => p.max_damage(),
            AttackPattern::Memory(p) => p.max_damage(),
            AttackPattern::Composite(phases) => phases.iter().map(|p| p.max_damage()).sum(),
        }
    }

    fn play<R: Rng, C: Console>(&self, ctx: &mut EncounterContext<R, C>) -> u32 {
        match self {
            AttackPattern::Dodge(p) => p.play(ctx),
            AttackPattern::Reaction(p) => p.play(ctx),
            AttackPattern::Recall(p) => p.play(ctx),
            AttackPattern::Rhythm(p) => p.play(ctx),
            AttackPattern::Memory(p) => p.play(ctx),
            AttackPattern::Composite(phases) => {
                let mut total = 0u32;
                for (i, phase) in phases.iter().enumerate() {
                    ctx.render(&frame(
                        "ULTIMATE",
                        vec![format!("! Phase {} of {}", i + 1, phases.len())],
                        "Get ready...",
                    ));
                    ctx.console
                        .pause(Duration::from_millis(COMPOSITE_PHASE_PAUSE_MS));
                    total = total.saturating_add(phase.play(ctx));
                }
                total
            }
        }
    }
}

/// One entry in a boss's attack pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub min_damage: u32,
    pub max_damage: u32,
    pub pattern: AttackPattern,
    /// Only eligible once the boss drops under its ultimate threshold.
    pub ultimate: bool,
}

impl AttackDescriptor {
    pub fn new(name: &'static str, description: &'static str, pattern: AttackPattern) -> Self {
        Self {
            name,
            description,
            min_damage: pattern.min_damage(),
            max_damage: pattern.max_damage(),
            ultimate: pattern.is_composite(),
            pattern,
        }
    }

    /// Run the attack's minigame. Always in `[0, max_damage]`.
    pub fn resolve<R: Rng, C: Console>(&self, ctx: &mut EncounterContext<R, C>) -> u32 {
        let damage = self.pattern.play(ctx).min(self.max_damage);
        tracing::debug!(
            attack = self.name,
            archetype = self.pattern.archetype(),
            damage,
            "attack resolved"
        );
        damage
    }
}
