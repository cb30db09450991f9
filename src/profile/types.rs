use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Character stats read once at encounter start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub strength: u32,
    pub luck: u32,
    pub patience: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            strength: 5,
            luck: 5,
            patience: 5,
        }
    }
}

/// Bonuses from equipped gear. Immutable for the duration of an encounter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentBonuses {
    pub attack: u32,
    pub defense: u32,
    pub max_hp: u32,
}

/// Persisted player profile: wallet, reputation, inventory and the set of
/// bosses the player has already resolved.
///
/// New fields need `#[serde(default)]` so older profiles still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub name: String,
    #[serde(default)]
    pub stats: PlayerStats,
    #[serde(default)]
    pub equipment: EquipmentBonuses,
    #[serde(default)]
    pub currency: u64,
    #[serde(default)]
    pub reputation: i64,
    #[serde(default)]
    pub xp: u64,
    #[serde(default)]
    pub inventory: Vec<String>,
    #[serde(default)]
    pub resolved_bosses: BTreeSet<String>,
}

impl Default for PlayerProfile {
    fn default() -> Self {
        Self::new("Angler".to_string())
    }
}

impl PlayerProfile {
    pub fn new(name: String) -> Self {
        Self {
            name,
            stats: PlayerStats::default(),
            equipment: EquipmentBonuses::default(),
            currency: 500,
            reputation: 0,
            xp: 0,
            inventory: vec![
                "Murky Lure".to_string(),
                "Rusty Hook".to_string(),
                "Old Boot".to_string(),
            ],
            resolved_bosses: BTreeSet::new(),
        }
    }

    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }

    /// Remove one copy of `item`. Returns false if it wasn't held.
    pub fn take_item(&mut self, item: &str) -> bool {
        match self.inventory.iter().position(|i| i == item) {
            Some(index) => {
                self.inventory.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn has_resolved(&self, boss_id: &str) -> bool {
        self.resolved_bosses.contains(boss_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_profile_defaults() {
        let profile = PlayerProfile::new("Tester".to_string());
        assert_eq!(profile.name, "Tester");
        assert_eq!(profile.currency, 500);
        assert_eq!(profile.reputation, 0);
        assert!(profile.resolved_bosses.is_empty());
        assert!(profile.has_item("Murky Lure"));
    }

    #[test]
    fn test_take_item_removes_one_copy() {
        let mut profile = PlayerProfile::new("Tester".to_string());
        profile.inventory.push("Old Boot".to_string());
        assert!(profile.take_item("Old Boot"));
        assert!(profile.has_item("Old Boot"));
        assert!(profile.take_item("Old Boot"));
        assert!(!profile.has_item("Old Boot"));
        assert!(!profile.take_item("Old Boot"));
    }

    #[test]
    fn test_minimal_profile_json_loads() {
        let json = r#"{"name":"Old Save"}"#;
        let profile: PlayerProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.name, "Old Save");
        assert_eq!(profile.currency, 0);
        assert_eq!(profile.stats, PlayerStats::default());
        assert!(profile.inventory.is_empty());
    }
}
