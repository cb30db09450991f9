//! Boss catalog: stats, rewards, dialogue and attack pools.

use super::attacks::{AttackDescriptor, AttackPattern};
use super::dialogue::BossDialogue;
use crate::minigames::{
    DamageRange, DodgeParams, MemoryParams, ReactionParams, RecallParams, RhythmParams,
    ARROW_ALPHABET, RUNE_ALPHABET,
};

/// Rewards paid out by outcome. Defeat always pays less than sparing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BossRewards {
    pub spared_currency: u64,
    pub spared_xp: u64,
    pub defeated_currency: u64,
    pub defeated_xp: u64,
}

/// Static definition of a boss. Combat state is built fresh from this for
/// every encounter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BossDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub max_health: u32,
    pub defense: u32,
    /// Health percentage at or below which the boss can be spared.
    pub spare_threshold_percent: u32,
    /// Health percentage under which ultimates join the attack pool.
    pub ultimate_threshold_percent: u32,
    /// Inventory item consumed to start the encounter.
    pub summon_item: &'static str,
    pub rewards: BossRewards,
    pub dialogue: BossDialogue,
    pub attacks: Vec<AttackDescriptor>,
}

// Pattern shorthands for the tables below.

fn dodge(lanes: usize, unsafe_range: (usize, usize), damage: (u32, u32)) -> AttackPattern {
    AttackPattern::Dodge(DodgeParams {
        lanes,
        min_unsafe: unsafe_range.0,
        max_unsafe: unsafe_range.1,
        damage: DamageRange::new(damage.0, damage.1),
        telegraph_ms: 1200,
        response_ms: 2500,
    })
}

fn reaction(cue_keys: &'static [char], fast_ms: u64, slow_ms: u64, damage: (u32, u32)) -> AttackPattern {
    AttackPattern::Reaction(ReactionParams {
        cue_keys,
        min_delay_ms: 800,
        max_delay_ms: 2500,
        fast_ms,
        slow_ms,
        timeout_ms: 3000,
        damage: DamageRange::new(damage.0, damage.1),
    })
}

fn recall(length: usize, alphabet: &'static [crate::console::Key], base_damage: u32) -> AttackPattern {
    AttackPattern::Recall(RecallParams {
        length,
        alphabet,
        base_damage,
        display_ms: 600 * length as u64,
        per_key_ms: 2000,
    })
}

fn rhythm(key: char, target: u32, time_limit_ms: u64, max_damage: u32) -> AttackPattern {
    AttackPattern::Rhythm(RhythmParams {
        key,
        target,
        time_limit_ms,
        max_damage,
    })
}

fn memory(rows: usize, cols: usize, damage: u32) -> AttackPattern {
    AttackPattern::Memory(MemoryParams {
        rows,
        cols,
        damage,
        display_ms: 1800,
        response_ms: 3000,
    })
}

fn ultimate(phases: Vec<AttackPattern>) -> AttackPattern {
    AttackPattern::Composite(phases)
}

/// All bosses, in the order they are usually met.
pub fn all_bosses() -> Vec<BossDefinition> {
    vec![
        BossDefinition {
            id: "marsh_king",
            name: "Old Croaker",
            title: "King of the Marsh",
            max_health: 180,
            defense: 3,
            spare_threshold_percent: 40,
            ultimate_threshold_percent: 30,
            summon_item: "Murky Lure",
            rewards: BossRewards {
                spared_currency: 800,
                spared_xp: 400,
                defeated_currency: 400,
                defeated_xp: 240,
            },
            dialogue: BossDialogue {
                intro: "A bloated frog rises from the reeds, crown of lily pads askew.",
                default: "\"Ribbit. This pond has a king, and he is hungry.\"",
                hit: "\"Insolent! My croak shall echo through your bones!\"",
                low_health: "\"The reeds... they grow so tall from down here...\"",
                merciful: "\"You... compliment my crown? Nobody ever notices the crown.\"",
                spare_ready: "Old Croaker looks tired. He might listen now.",
                spared: "\"Go, angler. The marsh remembers kindness.\"",
                defeated: "Old Croaker sinks beneath the murk with one last gulp.",
            },
            attacks: vec![
                AttackDescriptor::new(
                    "Lily Pad Leap",
                    "He bounds from pad to pad. Find the pad he won't land on.",
                    dodge(5, (2, 3), (8, 14)),
                ),
                AttackDescriptor::new(
                    "Tongue Lash",
                    "His tongue whips out without warning.",
                    reaction(&['f', 'j'], 500, 1000, (6, 12)),
                ),
                AttackDescriptor::new(
                    "Croak Chorus",
                    "Croak back in the same order or be deafened.",
                    recall(4, ARROW_ALPHABET, 14),
                ),
                AttackDescriptor::new(
                    "Mud Slide",
                    "Paddle hard before the mud swallows you.",
                    rhythm(' ', 12, 3000, 12),
                ),
                AttackDescriptor::new(
                    "Swamp Gas Storm",
                    "The marsh erupts. Leap, then paddle for your life.",
                    ultimate(vec![dodge(5, (3, 4), (8, 12)), rhythm(' ', 14, 3000, 10)]),
                ),
            ],
        },
        BossDefinition {
            id: "rusthook_leviathan",
            name: "Rusthook",
            title: "Leviathan of the Scrapyard Bay",
            max_health: 220,
            defense: 5,
            spare_threshold_percent: 35,
            ultimate_threshold_percent: 30,
            summon_item: "Rusty Hook",
            rewards: BossRewards {
                spared_currency: 1000,
                spared_xp: 500,
                defeated_currency: 500,
                defeated_xp: 300,
            },
            dialogue: BossDialogue {
                intro: "A pike the size of a barge surfaces, jaw bristling with lost hooks.",
                default: "\"Every hook in my jaw was an angler like you.\"",
                hit: "\"Rust and ruin! You'll hang with the rest!\"",
                low_health: "\"My scales... flaking like old paint...\"",
                merciful: "\"You'd... pull a hook out? Gently?\"",
                spare_ready: "Rusthook stops thrashing and watches you.",
                spared: "\"Keep your line slack, small one. I'll leave this bay be.\"",
                defeated: "Rusthook drifts to the bottom in a cloud of orange flakes.",
            },
            attacks: vec![
                AttackDescriptor::new(
                    "Hook Rain",
                    "Rusty hooks shower down across the water.",
                    dodge(6, (3, 4), (10, 16)),
                ),
                AttackDescriptor::new(
                    "Jaw Snap",
                    "The jaw opens. Jerk the line before it shuts.",
                    reaction(&['j', 'k'], 450, 900, (8, 14)),
                ),
                AttackDescriptor::new(
                    "Chain Reel",
                    "Reel against the chain before it drags you under.",
                    rhythm('r', 15, 3500, 16),
                ),
                AttackDescriptor::new(
                    "Scrap Tide",
                    "Remember the gap in the wreckage.",
                    memory(3, 4, 15),
                ),
                AttackDescriptor::new(
                    "Barnacle Code",
                    "Barnacles flash in sequence along its hull.",
                    recall(5, RUNE_ALPHABET, 16),
                ),
                AttackDescriptor::new(
                    "Iron Maelstrom",
                    "The whole bay turns. Snap, reel, remember.",
                    ultimate(vec![
                        reaction(&['j'], 450, 900, (6, 10)),
                        rhythm('r', 12, 3000, 10),
                        memory(3, 3, 10),
                    ]),
                ),
            ],
        },
        BossDefinition {
            id: "boot_hermit",
            name: "Sir Bootsalot",
            title: "Hermit of the Sunken Boot",
            max_health: 150,
            defense: 8,
            spare_threshold_percent: 50,
            ultimate_threshold_percent: 35,
            summon_item: "Old Boot",
            rewards: BossRewards {
                spared_currency: 600,
                spared_xp: 350,
                defeated_currency: 300,
                defeated_xp: 200,
            },
            dialogue: BossDialogue {
                intro: "A crab in a rotting leather boot clacks its claws at you.",
                default: "\"This boot is MINE. I found it first.\"",
                hit: "\"My laces! You frayed my laces!\"",
                low_health: "\"The boot... has a hole in it now...\"",
                merciful: "\"You think it's a nice boot? It IS a nice boot.\"",
                spare_ready: "Sir Bootsalot peeks out shyly from the boot.",
                spared: "\"Fine. You can visit the boot. On weekends.\"",
                defeated: "Sir Bootsalot retreats deep into the boot and refuses to come out.",
            },
            attacks: vec![
                AttackDescriptor::new(
                    "Pinch Volley",
                    "Claws snap at the lanes around you.",
                    dodge(4, (1, 2), (7, 12)),
                ),
                AttackDescriptor::new(
                    "Lace Whip",
                    "A wet shoelace cracks through the air.",
                    reaction(&['d', 'f'], 500, 1100, (5, 11)),
                ),
                AttackDescriptor::new(
                    "Sole Shuffle",
                    "Which insole hides the safe spot?",
                    memory(3, 3, 12),
                ),
                AttackDescriptor::new(
                    "Shell Game",
                    "He shuffles pebbles in a pattern. Repeat it.",
                    recall(3, ARROW_ALPHABET, 12),
                ),
                AttackDescriptor::new(
                    "Boot Stomp Finale",
                    "The boot rises. Dodge the heel, then the pebbles.",
                    ultimate(vec![dodge(4, (2, 3), (7, 10)), recall(4, ARROW_ALPHABET, 10)]),
                ),
            ],
        },
        BossDefinition {
            id: "lunar_eel",
            name: "Selene",
            title: "The Lunar Eel",
            max_health: 200,
            defense: 4,
            spare_threshold_percent: 40,
            ultimate_threshold_percent: 30,
            summon_item: "Moonlit Bait",
            rewards: BossRewards {
                spared_currency: 900,
                spared_xp: 450,
                defeated_currency: 450,
                defeated_xp: 270,
            },
            dialogue: BossDialogue {
                intro: "The water glows silver. A long eel coils around the moon's reflection.",
                default: "\"You fish by moonlight? Then you fish in my light.\"",
                hit: "\"You cloud my glow!\"",
                low_health: "\"The tide is turning against me...\"",
                merciful: "\"You... stopped to look at the moon. With me.\"",
                spare_ready: "Selene's glow softens to a gentle shimmer.",
                spared: "\"Fish here when the moon is full. I will guide your line.\"",
                defeated: "Selene unwinds and fades into the dark water.",
            },
            attacks: vec![
                AttackDescriptor::new(
                    "Crescent Coil",
                    "Her body sweeps the water in a crescent.",
                    dodge(7, (3, 5), (9, 15)),
                ),
                AttackDescriptor::new(
                    "Static Spark",
                    "Her skin crackles. Let go of the rod in time.",
                    reaction(&['s', 'l'], 400, 900, (8, 15)),
                ),
                AttackDescriptor::new(
                    "Phase Pattern",
                    "Moon phases flicker across her scales.",
                    recall(5, ARROW_ALPHABET, 15),
                ),
                AttackDescriptor::new(
                    "Moonbeam Grid",
                    "Only one square of water stays dark.",
                    memory(4, 4, 16),
                ),
                AttackDescriptor::new(
                    "Eclipse",
                    "The moon goes out. Remember, then react.",
                    ultimate(vec![
                        memory(4, 4, 12),
                        recall(4, ARROW_ALPHABET, 10),
                        reaction(&['l'], 400, 900, (6, 10)),
                    ]),
                ),
            ],
        },
        BossDefinition {
            id: "coral_siren",
            name: "Marisol",
            title: "Siren of the Coral Shelf",
            max_health: 240,
            defense: 6,
            spare_threshold_percent: 35,
            ultimate_threshold_percent: 25,
            summon_item: "Siren Shell",
            rewards: BossRewards {
                spared_currency: 1200,
                spared_xp: 600,
                defeated_currency: 600,
                defeated_xp: 360,
            },
            dialogue: BossDialogue {
                intro: "A song drifts over the reef. Marisol lounges on a coral throne.",
                default: "\"Sing along, angler. Everyone does, eventually.\"",
                hit: "\"You've ruined the melody!\"",
                low_health: "\"My voice... it's cracking...\"",
                merciful: "\"You hummed the harmony. Nobody ever takes the harmony.\"",
                spare_ready: "Marisol stops singing and simply listens.",
                spared: "\"Take this verse with you. The reef will know your name.\"",
                defeated: "The song stops. The reef falls silent.",
            },
            attacks: vec![
                AttackDescriptor::new(
                    "Siren Song",
                    "Repeat her melody note for note.",
                    recall(6, RUNE_ALPHABET, 18),
                ),
                AttackDescriptor::new(
                    "Coral Spikes",
                    "Spikes burst up from the reef.",
                    dodge(6, (2, 4), (10, 17)),
                ),
                AttackDescriptor::new(
                    "Riptide",
                    "Swim against the current!",
                    rhythm('w', 18, 4000, 18),
                ),
                AttackDescriptor::new(
                    "Shimmering Shoal",
                    "One fish in the shoal isn't an illusion.",
                    memory(4, 5, 16),
                ),
                AttackDescriptor::new(
                    "High Note",
                    "She holds a note until the water shakes.",
                    reaction(&['h', 'n'], 450, 1000, (9, 16)),
                ),
                AttackDescriptor::new(
                    "Crescendo",
                    "The whole reef sings. Swim, dodge, then answer.",
                    ultimate(vec![
                        rhythm('w', 14, 3000, 10),
                        dodge(6, (3, 4), (8, 12)),
                        recall(5, RUNE_ALPHABET, 12),
                    ]),
                ),
            ],
        },
        BossDefinition {
            id: "abyssal_angler",
            name: "The Lanternmaw",
            title: "Abyssal Angler",
            max_health: 320,
            defense: 10,
            spare_threshold_percent: 30,
            ultimate_threshold_percent: 30,
            summon_item: "Abyssal Lantern",
            rewards: BossRewards {
                spared_currency: 2000,
                spared_xp: 1000,
                defeated_currency: 1000,
                defeated_xp: 600,
            },
            dialogue: BossDialogue {
                intro: "Far below, a single light bobs. Then the teeth behind it.",
                default: "\"Another light-chaser. Come closer.\"",
                hit: "\"You strike at the dark? The dark strikes back.\"",
                low_health: "\"My lantern... flickers...\"",
                merciful: "\"You did not reach for my light. Strange.\"",
                spare_ready: "The Lanternmaw dims its lure and waits.",
                spared: "\"Go back up, fellow angler. Tell them the deep is not empty.\"",
                defeated: "The lantern goes out. The abyss swallows the rest.",
            },
            attacks: vec![
                AttackDescriptor::new(
                    "Lure Sweep",
                    "The lantern swings and the jaws follow.",
                    dodge(8, (4, 6), (12, 20)),
                ),
                AttackDescriptor::new(
                    "Pressure Spike",
                    "The depth crushes in. Equalise now!",
                    reaction(&['e', 'q'], 400, 800, (10, 18)),
                ),
                AttackDescriptor::new(
                    "Bioluminescent Code",
                    "Lights pulse along its fins in order.",
                    recall(6, ARROW_ALPHABET, 20),
                ),
                AttackDescriptor::new(
                    "Abyssal Pull",
                    "Kick for the surface!",
                    rhythm(' ', 20, 4000, 20),
                ),
                AttackDescriptor::new(
                    "False Lights",
                    "A dozen lanterns. Only one is safe.",
                    memory(5, 5, 18),
                ),
                AttackDescriptor::new(
                    "Lights Out",
                    "Total darkness. Remember, dodge, and kick.",
                    ultimate(vec![
                        memory(5, 5, 12),
                        dodge(8, (5, 6), (10, 14)),
                        rhythm(' ', 16, 3500, 12),
                    ]),
                ),
            ],
        },
    ]
}

pub fn find_boss(id: &str) -> Option<BossDefinition> {
    all_bosses().into_iter().find(|b| b.id.eq_ignore_ascii_case(id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_six_bosses_with_unique_ids() {
        let bosses = all_bosses();
        assert_eq!(bosses.len(), 6);
        let ids: HashSet<_> = bosses.iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), 6);
    }

    #[test]
    fn test_every_pool_has_regular_and_ultimate_attacks() {
        for boss in all_bosses() {
            assert!((4..=6).contains(&boss.attacks.len()), "{}", boss.id);
            assert!(boss.attacks.iter().any(|a| a.ultimate), "{}", boss.id);
            assert!(boss.attacks.iter().any(|a| !a.ultimate), "{}", boss.id);
        }
    }

    #[test]
    fn test_catalog_size() {
        let total: usize = all_bosses().iter().map(|b| b.attacks.len()).sum();
        assert!(total >= 30);
    }

    #[test]
    fn test_defeat_pays_less_than_spare() {
        for boss in all_bosses() {
            assert!(boss.rewards.defeated_currency < boss.rewards.spared_currency);
            assert!(boss.rewards.defeated_xp < boss.rewards.spared_xp);
        }
    }

    #[test]
    fn test_attack_bounds_are_ordered() {
        for boss in all_bosses() {
            for attack in &boss.attacks {
                assert!(attack.min_damage <= attack.max_damage, "{}", attack.name);
                assert!(attack.max_damage > 0, "{}", attack.name);
            }
        }
    }

    #[test]
    fn test_summon_items_unique() {
        let items: HashSet<_> = all_bosses().iter().map(|b| b.summon_item).collect();
        assert_eq!(items.len(), 6);
    }

    #[test]
    fn test_find_boss() {
        assert_eq!(find_boss("marsh_king").map(|b| b.name), Some("Old Croaker"));
        assert!(find_boss("MARSH_KING").is_some());
        assert!(find_boss("kraken").is_none());
    }
}
