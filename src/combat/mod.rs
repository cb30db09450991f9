//! Combatant model: boss and player state with mitigation and spare rules.

#![allow(unused_imports)]

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::bosses::DialogueState;
    use crate::minigames::HitGrade;
    use crate::profile::{EquipmentBonuses, PlayerStats};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn boss() -> Boss {
        Boss::from_definition(&test_definition(vec![dodge_attack(), ultimate_attack()]))
    }

    #[test]
    fn test_boss_take_damage_mitigates() {
        let mut b = boss();
        assert_eq!(b.take_damage(25), 20);
        assert_eq!(b.health, 180);
    }

    #[test]
    fn test_boss_take_damage_minimum_one_and_floor_zero() {
        let mut b = boss();
        assert_eq!(b.take_damage(3), 1);
        assert_eq!(b.health, 199);
        b.take_damage(10_000);
        assert_eq!(b.health, 0);
        assert!(b.is_defeated());
    }

    #[test]
    fn test_spareable_needs_mercy_regardless_of_health() {
        let mut b = boss();
        b.take_damage(195);
        assert!(b.health_percent() <= 40);
        b.add_mercy();
        b.add_mercy();
        assert!(!b.is_spareable());
        b.add_mercy();
        assert!(b.is_spareable());
    }

    #[test]
    fn test_spareable_needs_low_health() {
        let mut b = boss();
        for _ in 0..5 {
            b.add_mercy();
        }
        assert!(!b.is_spareable());
        // 200 -> 80 is exactly 40%
        b.take_damage(125);
        assert_eq!(b.health, 80);
        assert!(b.is_spareable());
    }

    #[test]
    fn test_fresh_boss_resets_state() {
        let def = test_definition(vec![dodge_attack()]);
        let mut first = Boss::from_definition(&def);
        first.take_damage(100);
        first.add_mercy();

        let second = Boss::from_definition(&def);
        assert_eq!(second.health, 200);
        assert_eq!(second.mercy_level, 0);
        assert_eq!(second.dialogue_state, DialogueState::Intro);
    }

    #[test]
    fn test_player_mitigation_and_invincible() {
        let equipment = EquipmentBonuses {
            attack: 3,
            defense: 4,
            max_hp: 20,
        };
        let mut player = PlayerCombatant::new(&equipment, false);
        assert_eq!(player.max_health, 120);
        assert_eq!(player.take_damage(10), 6);
        assert_eq!(player.take_damage(2), 1);
        assert_eq!(player.health, 113);

        let mut god = PlayerCombatant::new(&equipment, true);
        assert_eq!(god.take_damage(500), 0);
        assert_eq!(god.health, 120);
    }

    #[test]
    fn test_huge_hp_bonus_saturates() {
        let equipment = EquipmentBonuses {
            attack: 0,
            defense: 0,
            max_hp: u32::MAX,
        };
        let player = PlayerCombatant::new(&equipment, false);
        assert_eq!(player.max_health, u32::MAX);
        assert_eq!(player.health, u32::MAX);
    }

    #[test]
    fn test_ultimates_gated_by_threshold() {
        let mut b = boss();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..100 {
            assert!(!select_attack(&b, &mut rng).map(|a| a.ultimate).unwrap_or(true));
        }
        assert_eq!(eligible_attacks(&b).len(), 1);

        // 200 -> 50 is 25%
        b.take_damage(155);
        assert_eq!(eligible_attacks(&b).len(), 2);
    }

    #[test]
    fn test_ultimate_only_pool_falls_back() {
        let b = Boss::from_definition(&test_definition(vec![ultimate_attack()]));
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(select_attack(&b, &mut rng).map(|a| a.name), Some("Whirlpool"));
    }

    #[test]
    fn test_fight_damage_applies_grade() {
        let stats = PlayerStats {
            strength: 5,
            luck: 0,
            patience: 0,
        };
        let player = PlayerCombatant::new(&EquipmentBonuses::default(), false);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..100 {
            let crit = fight_damage(&stats, &player, HitGrade::Critical, &mut rng);
            assert!((50..=70).contains(&crit), "{}", crit);
            let miss = fight_damage(&stats, &player, HitGrade::Miss, &mut rng);
            assert!((13..=18).contains(&miss), "{}", miss);
        }
    }

    #[test]
    fn test_dialogue_reactions() {
        let mut b = boss();
        b.take_damage(30);
        react_to_hit(&mut b);
        assert_eq!(b.dialogue_state, DialogueState::Hit);

        b.take_damage(150);
        react_to_hit(&mut b);
        assert_eq!(b.dialogue_state, DialogueState::LowHealth);
        assert_eq!(b.dialogue_line(), "low");

        b.add_mercy();
        react_to_mercy(&mut b);
        assert_eq!(b.dialogue_state, DialogueState::Merciful);
        b.add_mercy();
        b.add_mercy();
        react_to_mercy(&mut b);
        assert_eq!(b.dialogue_state, DialogueState::SpareReady);
    }
}
