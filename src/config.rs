//! Engine configuration: `~/.angler/config.json` plus command-line overrides.

use crate::core::constants::{CONFIG_FILE, DEFAULT_REMATCH_REWARD_PERCENT};
use crate::error::{GameError, Result};
use crate::minigames::Difficulty;
use crate::outcome::RematchPolicy;
use crate::utils::persistence;
use serde::{Deserialize, Serialize};

/// Engine settings. Missing fields fall back to their defaults, so partial
/// files still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    /// Fixed RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
    pub invincible: bool,
    /// Skip cosmetic pauses between frames.
    pub skip_animations: bool,
    /// Debug mode: bosses can be fought without their summon item.
    pub debug: bool,
    pub rematch_policy: RematchPolicy,
    pub rematch_reward_percent: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            seed: None,
            invincible: false,
            skip_animations: false,
            debug: false,
            rematch_policy: RematchPolicy::Reduced,
            rematch_reward_percent: DEFAULT_REMATCH_REWARD_PERCENT,
        }
    }
}

impl EngineConfig {
    pub fn load() -> Self {
        persistence::load_json_or_default(CONFIG_FILE)
    }

    pub fn requires_summon_item(&self) -> bool {
        !self.debug
    }

    /// Consume recognised flags, returning the remaining positional args.
    pub fn apply_flags(&mut self, args: &[String]) -> Result<Vec<String>> {
        let mut rest = Vec::new();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--difficulty" | "-d" => {
                    let value = iter.next().ok_or_else(|| missing_value(arg))?;
                    self.difficulty = Difficulty::parse(value).ok_or_else(|| {
                        GameError::Usage(format!("unknown difficulty: {}", value))
                    })?;
                }
                "--seed" => {
                    let value = iter.next().ok_or_else(|| missing_value(arg))?;
                    let seed = value
                        .parse()
                        .map_err(|_| GameError::Usage(format!("invalid seed: {}", value)))?;
                    self.seed = Some(seed);
                }
                "--rematch" => {
                    let value = iter.next().ok_or_else(|| missing_value(arg))?;
                    self.rematch_policy = RematchPolicy::parse(value).ok_or_else(|| {
                        GameError::Usage(format!("unknown rematch policy: {}", value))
                    })?;
                }
                "--invincible" => self.invincible = true,
                "--fast" => self.skip_animations = true,
                "--debug" => self.debug = true,
                _ => rest.push(arg.clone()),
            }
        }
        Ok(rest)
    }
}

fn missing_value(flag: &str) -> GameError {
    GameError::Usage(format!("{} needs a value", flag))
}
