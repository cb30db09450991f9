//! Simulation report generation.

use super::config::SimPolicy;
use crate::bosses::BossDefinition;
use crate::minigames::Difficulty;
use crate::outcome::Outcome;
use serde::Serialize;

/// One simulated encounter. `outcome` is `None` when the run hit the turn cap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub outcome: Option<Outcome>,
    pub turns: u32,
    pub damage_taken: u32,
}

/// Aggregated results for one boss.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BossReport {
    pub boss_id: String,
    pub name: String,
    pub runs: u32,
    pub spared: u32,
    pub defeated: u32,
    pub fled: u32,
    pub player_defeated: u32,
    pub timed_out: u32,
    pub avg_turns: f64,
    pub avg_damage_taken: f64,
}

impl BossReport {
    pub fn from_runs(def: &BossDefinition, runs: &[RunStats]) -> Self {
        let count = |outcome: Option<Outcome>| runs.iter().filter(|r| r.outcome == outcome).count() as u32;
        let n = runs.len().max(1) as f64;
        Self {
            boss_id: def.id.to_string(),
            name: def.name.to_string(),
            runs: runs.len() as u32,
            spared: count(Some(Outcome::Spared)),
            defeated: count(Some(Outcome::Defeated)),
            fled: count(Some(Outcome::Fled)),
            player_defeated: count(Some(Outcome::PlayerDefeated)),
            timed_out: count(None),
            avg_turns: runs.iter().map(|r| r.turns as f64).sum::<f64>() / n,
            avg_damage_taken: runs.iter().map(|r| r.damage_taken as f64).sum::<f64>() / n,
        }
    }

    /// Share of runs the player survived, in percent.
    pub fn win_rate(&self) -> f64 {
        if self.runs == 0 {
            return 0.0;
        }
        (self.spared + self.defeated) as f64 / self.runs as f64 * 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimReport {
    pub policy: SimPolicy,
    pub difficulty: Difficulty,
    pub num_runs: u32,
    pub seed: u64,
    pub bosses: Vec<BossReport>,
}

impl SimReport {
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                 BOSS ENCOUNTER SIMULATION\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Policy: {:?}   Difficulty: {}   Runs per boss: {}   Seed: {}\n\n",
            self.policy,
            self.difficulty.name(),
            self.num_runs,
            self.seed
        ));

        report.push_str("── OUTCOMES ─────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  {:<20} {:>6} {:>6} {:>6} {:>6} {:>6} {:>7}\n",
            "Boss", "Spare", "Defeat", "Fled", "Lost", "Cap", "Win %"
        ));
        for boss in &self.bosses {
            report.push_str(&format!(
                "  {:<20} {:>6} {:>6} {:>6} {:>6} {:>6} {:>6.1}%\n",
                boss.name,
                boss.spared,
                boss.defeated,
                boss.fled,
                boss.player_defeated,
                boss.timed_out,
                boss.win_rate()
            ));
        }

        report.push_str("\n── PACING ───────────────────────────────────────────────────────\n");
        for boss in &self.bosses {
            report.push_str(&format!(
                "  {:<20} avg turns {:>5.1}   avg damage taken {:>6.1}\n",
                boss.name, boss.avg_turns, boss.avg_damage_taken
            ));
        }

        report
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bosses::find_boss;

    fn runs() -> Vec<RunStats> {
        vec![
            RunStats {
                outcome: Some(Outcome::Defeated),
                turns: 10,
                damage_taken: 40,
            },
            RunStats {
                outcome: Some(Outcome::PlayerDefeated),
                turns: 6,
                damage_taken: 100,
            },
            RunStats {
                outcome: None,
                turns: 200,
                damage_taken: 0,
            },
            RunStats {
                outcome: Some(Outcome::Spared),
                turns: 8,
                damage_taken: 20,
            },
        ]
    }

    #[test]
    fn test_boss_report_counts() {
        let def = find_boss("boot_hermit").unwrap();
        let report = BossReport::from_runs(&def, &runs());
        assert_eq!(report.runs, 4);
        assert_eq!(report.defeated, 1);
        assert_eq!(report.spared, 1);
        assert_eq!(report.player_defeated, 1);
        assert_eq!(report.timed_out, 1);
        assert_eq!(report.avg_damage_taken, 40.0);
        assert_eq!(report.win_rate(), 50.0);
    }

    #[test]
    fn test_empty_runs() {
        let def = find_boss("boot_hermit").unwrap();
        let report = BossReport::from_runs(&def, &[]);
        assert_eq!(report.runs, 0);
        assert_eq!(report.avg_turns, 0.0);
        assert_eq!(report.win_rate(), 0.0);
    }

    #[test]
    fn test_text_and_json() {
        let def = find_boss("boot_hermit").unwrap();
        let report = SimReport {
            policy: SimPolicy::Aggressive,
            difficulty: Difficulty::Normal,
            num_runs: 4,
            seed: 42,
            bosses: vec![BossReport::from_runs(&def, &runs())],
        };
        let text = report.to_text();
        assert!(text.contains("Sir Bootsalot"));
        assert!(text.contains("Seed: 42"));

        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["bosses"][0]["boss_id"], "boot_hermit");
        assert_eq!(json["policy"], "aggressive");
    }
}
