// Player baseline
pub const PLAYER_BASE_HP: u32 = 100;

// Fight action
pub const FIGHT_BASE_DAMAGE_MIN: u32 = 15;
pub const FIGHT_BASE_DAMAGE_MAX: u32 = 25;
pub const FIGHT_STRENGTH_FACTOR: u32 = 2;

// Timing bar (Fight skill check)
pub const TIMING_BAR_WIDTH: usize = 31;
pub const TIMING_BAR_SWEEP_MS: u64 = 1200;
pub const TIMING_BAR_MAX_SWEEPS: u32 = 3;
pub const TIMING_BAR_FRAME_MS: u64 = 50;
pub const TIMING_BAR_CRIT_ZONE: f64 = 0.08;
pub const TIMING_BAR_CRIT_ZONE_PER_LUCK: f64 = 0.005;
pub const TIMING_BAR_CRIT_ZONE_MAX: f64 = 0.15;
pub const TIMING_BAR_GOOD_ZONE: f64 = 0.30;
pub const TIMING_BAR_WEAK_ZONE: f64 = 0.70;
pub const CRITICAL_MULTIPLIER: f64 = 2.0;
pub const GOOD_MULTIPLIER: f64 = 1.5;
pub const WEAK_MULTIPLIER: f64 = 0.8;
pub const MISS_MULTIPLIER: f64 = 0.5;

// Mercy and sparing
pub const MERCY_REQUIRED_TO_SPARE: u32 = 3;
pub const LOW_HEALTH_PERCENT: u32 = 30;

// Flee
pub const FLEE_CHANCE: f64 = 0.5;

// Minigame windows
pub const PATIENCE_WINDOW_BONUS: f64 = 0.02;
pub const PATIENCE_WINDOW_CAP: f64 = 1.3;
pub const MAX_LANES: usize = 9;
pub const MAX_GRID_SIDE: usize = 9;
pub const COMPOSITE_PHASE_PAUSE_MS: u64 = 600;

// Turn loop pacing (presentation only)
pub const MENU_POLL_MS: u64 = 500;
pub const INTRO_PAUSE_MS: u64 = 1500;
pub const TURN_RESULT_PAUSE_MS: u64 = 1000;
pub const ENCOUNTER_LOG_CAPACITY: usize = 8;

// Outcome table
pub const SPARED_REPUTATION: i64 = 10;
pub const DEFEATED_REPUTATION: i64 = -15;
pub const DEFEAT_CURRENCY_PENALTY_PERCENT: u64 = 15;
pub const DEFEAT_MAX_ITEMS_LOST: usize = 3;
pub const DEFAULT_REMATCH_REWARD_PERCENT: u32 = 25;

// Persistence
pub const PROFILE_FILE: &str = "profile.json";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_DIR: &str = "logs";
pub const LOG_FILE: &str = "angler.log";
